//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used in the Execute stage.
//! It is purely combinational: every call maps two operands and an operation
//! to a result plus the zero and overflow status flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (with signed overflow detection)
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra, Lui

/// Integer addition and subtraction.
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations and upper-immediate placement.
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Result of one ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// 32-bit result (wrapped on overflow).
    pub result: u32,
    /// Result is zero.
    pub zero: bool,
    /// Signed overflow; only meaningful for `Add` and `Sub`.
    pub overflow: bool,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Overflow is reported, never acted on: whether it traps is decided by the
    /// instruction's control signals.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand (for shifts, the value being shifted).
    /// * `b`  - Second operand (for shifts, the shift amount).
    ///
    /// # Examples
    ///
    /// ```
    /// use mips_core::core::units::alu::Alu;
    /// use mips_core::core::pipeline::signals::AluOp;
    ///
    /// let out = Alu::execute(AluOp::Add, 5, 10);
    /// assert_eq!(out.result, 15);
    ///
    /// let out = Alu::execute(AluOp::Add, i32::MAX as u32, 1);
    /// assert!(out.overflow);
    ///
    /// let out = Alu::execute(AluOp::Sub, 7, 7);
    /// assert!(out.zero);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> AluOutput {
        let (result, overflow) = match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor | AluOp::Slt | AluOp::Sltu => {
                (logic::execute(op, a, b), false)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra | AluOp::Lui => (shifts::execute(op, a, b), false),
        };
        AluOutput {
            result,
            zero: result == 0,
            overflow,
        }
    }
}
