//! MIPS32 integer instruction encodings.
//!
//! Primary opcodes (bits 31-26) live in [`opcodes`]; R-format function codes
//! (bits 5-0) live in [`funct`].

/// R-format function codes.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;
