//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 2^32 and report two's-complement
//! overflow alongside the wrapped result. The trapping and non-trapping MIPS
//! variants share this path; only their control signals differ.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - `Add` or `Sub`.
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// `(wrapped_result, signed_overflow)`. Returns `(0, false)` for
/// non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> (u32, bool) {
    match op {
        AluOp::Add => {
            let (sum, overflow) = (a as i32).overflowing_add(b as i32);
            (sum as u32, overflow)
        }
        AluOp::Sub => {
            let (diff, overflow) = (a as i32).overflowing_sub(b as i32);
            (diff as u32, overflow)
        }
        _ => (0, false),
    }
}
