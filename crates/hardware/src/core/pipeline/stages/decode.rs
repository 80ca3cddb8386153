//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Decoding:** Turns the fetched word into an [`Instruction`] and its control signals.
//! 2. **Register Read:** Reads `rs`/`rt`, bypassing the value committing in Writeback.
//! 3. **Early Jumps:** Resolves `J`/`JAL`, whose target needs no register.
//! 4. **Fault Detection:** Raises `InvalidOpcode` for unsupported encodings.

use crate::common::error::ExceptionRecord;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::hazards::ForwardingUnit;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry, MemWbEntry};
use crate::core::pipeline::signals::ControlUnit;
use crate::core::units::bru::BranchResolver;
use crate::isa::decode;
use crate::isa::instruction::Instruction;

/// Result of the decode stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Entry for the ID/EX latch.
    pub entry: Option<IdExEntry>,
    /// Jump target resolved in decode.
    pub redirect: Option<u32>,
    /// `InvalidOpcode` raised by this instruction.
    pub fault: Option<ExceptionRecord>,
}

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `if_id`  - Instruction fetched last cycle.
/// * `regs`   - Register file, as committed at the end of last cycle.
/// * `mem_wb` - Instruction committing this cycle, for the writeback bypass.
pub fn decode_stage(
    if_id: Option<&IfIdEntry>,
    regs: &Gpr,
    mem_wb: Option<&MemWbEntry>,
) -> DecodeOutput {
    let Some(&IfIdEntry { pc, word }) = if_id else {
        return DecodeOutput::default();
    };

    let inst = decode(word);
    let ctrl = match ControlUnit::generate(&inst) {
        Ok(ctrl) => ctrl,
        Err(cause) => {
            tracing::debug!(pc = format_args!("{pc:#010x}"), %cause, "ID fault");
            return DecodeOutput {
                fault: Some(ExceptionRecord::new(cause, pc)),
                ..DecodeOutput::default()
            };
        }
    };

    let (rs, rt, imm, shamt) = match inst {
        Instruction::R { rs, rt, shamt, .. } => (rs, rt, 0, shamt),
        Instruction::I { rs, rt, imm, .. } => (rs, rt, imm, 0),
        Instruction::J { .. } | Instruction::Unknown { .. } => (0, 0, 0, 0),
    };
    let read = |reg: usize| ForwardingUnit::bypass_writeback(reg, regs.read(reg), mem_wb);

    tracing::trace!(pc = format_args!("{pc:#010x}"), %inst, "ID");

    DecodeOutput {
        entry: Some(IdExEntry {
            pc,
            word,
            inst,
            ctrl,
            rs,
            rt,
            dest: if ctrl.reg_write { inst.destination() } else { None },
            rs_val: read(rs),
            rt_val: read(rt),
            imm,
            shamt,
        }),
        redirect: BranchResolver::resolve_in_decode(pc, &inst),
        fault: None,
    }
}
