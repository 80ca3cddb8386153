//! Branch Resolution Unit (BRU).
//!
//! Fetch always assumes fall-through (a static not-taken policy), so every
//! taken control transfer is a redirect that squashes the sequentially fetched
//! instructions behind it. This module computes:
//! 1. **Targets:** PC-relative branch targets and region-absolute jump targets.
//! 2. **Conditions:** `BEQ`/`BNE` outcomes from the ALU zero flag.
//! 3. **Redirects:** Which stage resolves a transfer and how many bubbles it costs.
//!
//! Conditional branches and register jumps resolve in Execute and cost
//! [`EXECUTE_REDIRECT_PENALTY`] bubbles; `J`/`JAL` resolve in Decode and cost
//! [`DECODE_REDIRECT_PENALTY`]. There are no architecturally visible delay slots.

use crate::common::constants::{INSTRUCTION_BYTES, JUMP_REGION_MASK};
use crate::core::pipeline::signals::{AluOp, BranchCondition, ControlSignals, JumpTarget};
use crate::core::units::alu::Alu;
use crate::isa::instruction::Instruction;

/// Bubbles inserted by a transfer resolved in Execute (IF/ID and the fetch slot).
pub const EXECUTE_REDIRECT_PENALTY: u64 = 2;

/// Bubbles inserted by a jump resolved in Decode (the fetch slot only).
pub const DECODE_REDIRECT_PENALTY: u64 = 1;

/// Branch and jump outcome computation.
#[derive(Debug)]
pub struct BranchResolver;

impl BranchResolver {
    /// Computes the target of a conditional branch.
    ///
    /// # Arguments
    ///
    /// * `pc`  - Address of the branch.
    /// * `imm` - Sign-extended word offset from the instruction.
    ///
    /// # Returns
    ///
    /// `pc + 4 + (imm << 2)`, wrapping modulo 2^32.
    pub const fn branch_target(pc: u32, imm: u32) -> u32 {
        pc.wrapping_add(INSTRUCTION_BYTES).wrapping_add(imm << 2)
    }

    /// Computes the target of a `J`/`JAL`.
    ///
    /// The top four bits come from `pc + 4`, the rest from the 26-bit index.
    pub const fn jump_target(pc: u32, address: u32) -> u32 {
        (pc.wrapping_add(INSTRUCTION_BYTES) & JUMP_REGION_MASK) | (address << 2)
    }

    /// Evaluates a branch condition on hazard-resolved operands.
    pub fn branch_taken(condition: BranchCondition, rs_val: u32, rt_val: u32) -> bool {
        let zero = Alu::execute(AluOp::Sub, rs_val, rt_val).zero;
        match condition {
            BranchCondition::Equal => zero,
            BranchCondition::NotEqual => !zero,
        }
    }

    /// Resolves a control transfer in the Decode stage.
    ///
    /// Only `J` and `JAL` resolve here: their target needs no register.
    ///
    /// # Returns
    ///
    /// The redirect target, or `None` if the instruction does not redirect in decode.
    pub const fn resolve_in_decode(pc: u32, inst: &Instruction) -> Option<u32> {
        match *inst {
            Instruction::J { address, .. } => Some(Self::jump_target(pc, address)),
            _ => None,
        }
    }

    /// Resolves a control transfer in the Execute stage.
    ///
    /// # Arguments
    ///
    /// * `ctrl`   - Control signals of the instruction in execute.
    /// * `pc`     - Its address.
    /// * `imm`    - Its extended immediate.
    /// * `rs_val` - Forwarded `rs` value.
    /// * `rt_val` - Forwarded `rt` value.
    ///
    /// # Returns
    ///
    /// The redirect target for a taken branch or a register jump, else `None`.
    pub fn resolve_in_execute(
        ctrl: &ControlSignals,
        pc: u32,
        imm: u32,
        rs_val: u32,
        rt_val: u32,
    ) -> Option<u32> {
        if ctrl.is_branch {
            return Self::branch_taken(ctrl.branch_condition, rs_val, rt_val)
                .then(|| Self::branch_target(pc, imm));
        }
        if ctrl.is_jump && ctrl.jump_target == JumpTarget::Register {
            return Some(rs_val);
        }
        None
    }
}
