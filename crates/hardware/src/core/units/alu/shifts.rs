//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL) and
//! shift-right arithmetic (SRA). Shift amounts are masked to 5 bits (0-31),
//! so the register-variable forms use only the low bits of `rs`.
//! `Lui` places the 16-bit immediate in the upper half of the word.

use crate::common::constants::SHAMT_MASK;
use crate::core::pipeline::signals::AluOp;

/// Bit offset of the upper halfword.
const UPPER_HALF_SHIFT: u32 = 16;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The shift operation (or `Lui`).
/// * `a`  - The value to be shifted (ignored by `Lui`).
/// * `b`  - The shift amount; for `Lui`, the immediate.
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let sh = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << sh,
        AluOp::Srl => a >> sh,
        AluOp::Sra => ((a as i32) >> sh) as u32,
        AluOp::Lui => b << UPPER_HALF_SHIFT,
        _ => 0,
    }
}
