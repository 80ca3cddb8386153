//! MIPS General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs
//! the following:
//! 1. **Storage:** Maintains 32 integer registers (`$0`-`$31`), 32 bits each.
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//! 3. **Debugging:** Provides a snapshot of the complete register state.
//!
//! The pipeline writes registers only when an instruction commits in
//! Writeback, after every stage of the cycle has read its operands.

use crate::common::constants::{REG_COUNT, REG_ZERO};

/// General-Purpose Register file.
///
/// Register `$0` is hardwired to zero and cannot be modified. Indices are
/// 5-bit instruction fields, so only the low five bits are significant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; REG_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register. Register `$0` always returns 0.
    pub const fn read(&self, idx: usize) -> u32 {
        let idx = idx % REG_COUNT;
        if idx == REG_ZERO { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `$0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub const fn write(&mut self, idx: usize, val: u32) {
        let idx = idx % REG_COUNT;
        if idx != REG_ZERO {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all 32 registers, `$0` included.
    pub const fn snapshot(&self) -> [u32; REG_COUNT] {
        self.regs
    }

    /// Resets every register to zero.
    pub const fn clear(&mut self) {
        self.regs = [0; REG_COUNT];
    }
}
