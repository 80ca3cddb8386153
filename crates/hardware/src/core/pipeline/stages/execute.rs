//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Operand Resolution:** Applies the forwarding decisions of the hazard unit.
//! 2. **Arithmetic Execution:** Runs the ALU, including address generation.
//! 3. **Branch Resolution:** Resolves `BEQ`/`BNE`, `JR` and `JALR`.
//! 4. **Fault Detection:** Raises `ArithmeticOverflow` for trapping add/subtract.

use crate::common::error::{ExceptionCause, ExceptionRecord};
use crate::core::pipeline::hazards::{ForwardingUnit, HazardDecision};
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use crate::core::pipeline::signals::ShiftSource;
use crate::core::units::alu::Alu;
use crate::core::units::bru::BranchResolver;

/// Result of the execute stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// Entry for the EX/MEM latch.
    pub entry: Option<ExMemEntry>,
    /// Target of a taken branch or register jump.
    pub redirect: Option<u32>,
    /// `ArithmeticOverflow` raised by this instruction.
    pub fault: Option<ExceptionRecord>,
}

/// Executes the execute stage.
///
/// # Arguments
///
/// * `id_ex`    - Instruction decoded last cycle.
/// * `decision` - This cycle's forwarding selection.
/// * `ex_mem`   - Instruction now in Memory (forwarding source).
/// * `mem_wb`   - Instruction now in Writeback (forwarding source).
pub fn execute_stage(
    id_ex: Option<&IdExEntry>,
    decision: &HazardDecision,
    ex_mem: Option<&ExMemEntry>,
    mem_wb: Option<&MemWbEntry>,
) -> ExecuteOutput {
    let Some(id) = id_ex else {
        return ExecuteOutput::default();
    };
    let ctrl = id.ctrl;

    let rs_val = ForwardingUnit::operand(decision.forward_a, id.rs_val, ex_mem, mem_wb);
    let rt_val = ForwardingUnit::operand(decision.forward_b, id.rt_val, ex_mem, mem_wb);

    let (a, b) = match ctrl.shift_source {
        ShiftSource::None if ctrl.alu_src_is_immediate => (rs_val, id.imm),
        ShiftSource::None => (rs_val, rt_val),
        ShiftSource::Shamt => (rt_val, id.shamt),
        ShiftSource::Register => (rt_val, rs_val),
    };
    let out = Alu::execute(ctrl.alu_op, a, b);

    if ctrl.checks_overflow && out.overflow {
        tracing::debug!(pc = format_args!("{:#010x}", id.pc), a, b, "EX overflow");
        return ExecuteOutput {
            fault: Some(ExceptionRecord::new(
                ExceptionCause::ArithmeticOverflow,
                id.pc,
            )),
            ..ExecuteOutput::default()
        };
    }

    let redirect = BranchResolver::resolve_in_execute(&ctrl, id.pc, id.imm, rs_val, rt_val);
    tracing::trace!(
        pc = format_args!("{:#010x}", id.pc),
        result = out.result,
        ?redirect,
        "EX"
    );

    ExecuteOutput {
        entry: Some(ExMemEntry {
            pc: id.pc,
            word: id.word,
            inst: id.inst,
            ctrl,
            dest: id.dest,
            alu: out.result,
            store_data: rt_val,
        }),
        redirect,
        fault: None,
    }
}
