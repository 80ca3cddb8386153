//! ISA suites.



/// Assembly rendering.
pub mod disasm;
