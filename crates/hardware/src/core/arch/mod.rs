//! MIPS architectural state components.
//!
//! This module contains the pieces of the core that hold or guard committed state:
//! 1. **GPRs:** The 32-entry general-purpose register file.
//! 2. **Traps:** Arbitration between faults detected in the same cycle.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Fault arbitration across detecting stages.
pub mod trap;

pub use gpr::Gpr;
pub use trap::{ExceptionController, StageFaults};
