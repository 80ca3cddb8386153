//! Cycle engine.
//!
//! Advances the pipeline by exactly one clock. Every stage is evaluated against
//! the latch contents from the end of the previous cycle, then the results are
//! committed together:
//! 1. **Evaluate:** Hazard unit, then WB, MEM, EX, ID and IF over the old latches.
//! 2. **Arbitrate:** Pick the surviving fault, the PC redirect and the stall.
//! 3. **Commit:** Register write, pending store, new latches and new PC.
//!
//! Next-PC priority is: fault freeze, Execute redirect, Decode redirect,
//! load-use stall or held Decode fault, sequential `+4`.

use crate::common::constants::INSTRUCTION_BYTES;
use crate::common::error::ExceptionRecord;
use crate::core::Cpu;
use crate::core::arch::trap::{ExceptionController, StageFaults};
use crate::core::pipeline::hazards::HazardUnit;
use crate::core::pipeline::latches::PipelineLatches;
use crate::core::pipeline::stages::{
    RetiredInstruction, decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::core::units::bru::{DECODE_REDIRECT_PENALTY, EXECUTE_REDIRECT_PENALTY};

/// What happened during one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Cycle number just completed (1-based).
    pub cycle: u64,
    /// Instruction that committed in Writeback.
    pub retired: Option<RetiredInstruction>,
    /// Fault raised this cycle.
    pub exception: Option<ExceptionRecord>,
    /// A load-use stall was inserted.
    pub stalled: bool,
    /// The core is halted after this cycle.
    pub halted: bool,
}

/// Advances the core by one cycle.
///
/// A halted core does not advance; the returned outcome repeats the current
/// cycle count with `halted` set.
///
/// # Arguments
///
/// * `cpu` - The core to advance.
pub fn tick(cpu: &mut Cpu) -> StepOutcome {
    if cpu.halted {
        return StepOutcome {
            cycle: cpu.stats.cycles,
            halted: true,
            ..StepOutcome::default()
        };
    }

    let old = cpu.latches;
    let frozen = cpu.frozen.is_some();

    let decision = HazardUnit::evaluate(&old);
    let retired = wb_stage(old.mem_wb.as_ref(), cpu.trace);
    let mem = mem_stage(old.ex_mem.as_ref(), &cpu.memory.data);
    let ex = execute_stage(
        old.id_ex.as_ref(),
        &decision,
        old.ex_mem.as_ref(),
        old.mem_wb.as_ref(),
    );
    let id = decode_stage(old.if_id.as_ref(), &cpu.regs, old.mem_wb.as_ref());
    let fetched = if frozen {
        None
    } else {
        fetch_stage(cpu.pc, &cpu.memory.instructions)
    };

    let faults = StageFaults {
        decode: id.fault,
        execute: ex.fault,
        memory: mem.fault,
        memory_pending: ex
            .entry
            .is_some_and(|e| e.ctrl.mem_read || e.ctrl.mem_write),
    };
    let exception = ExceptionController::arbitrate(&faults, ex.redirect.is_some());
    let defer_decode = ExceptionController::defers_decode(&faults, ex.redirect.is_some());
    let stall = decision.stall && exception.is_none();
    let hold = stall || defer_decode;
    let id_redirect = id.redirect.filter(|_| !decision.stall);

    let flush_from_ex = mem.fault.is_some();
    let flush_from_id = flush_from_ex || ex.fault.is_some() || ex.redirect.is_some();
    let flush_from_if = flush_from_id || exception.is_some() || id_redirect.is_some();

    let next = PipelineLatches {
        mem_wb: mem.entry,
        ex_mem: if flush_from_ex { None } else { ex.entry },
        id_ex: if flush_from_id || hold { None } else { id.entry },
        if_id: if flush_from_if || frozen {
            None
        } else if hold {
            old.if_id
        } else {
            fetched
        },
    };

    let next_pc = if exception.is_some() || frozen {
        cpu.pc
    } else if let Some(target) = ex.redirect {
        target
    } else if let Some(target) = id_redirect {
        target
    } else if hold || fetched.is_none() {
        cpu.pc
    } else {
        cpu.pc.wrapping_add(INSTRUCTION_BYTES)
    };

    // Commit.
    if let Some((reg, val)) = retired.and_then(|r| r.write) {
        cpu.regs.write(reg, val);
    }
    if let Some(store) = mem.store {
        tracing::trace!(
            addr = format_args!("{:#010x}", store.access.address()),
            value = store.value,
            "MEM store"
        );
        cpu.memory.data.store(store.access, store.value);
    }
    cpu.latches = next;
    cpu.pc = next_pc;

    let stats = &mut cpu.stats;
    stats.cycles += 1;
    if let Some(wb) = old.mem_wb.as_ref() {
        stats.record_retired(&wb.ctrl);
    }
    if stall {
        stats.stalls_data += 1;
        tracing::debug!(cycle = stats.cycles, "load-use stall");
    }
    if defer_decode {
        tracing::debug!(cycle = stats.cycles, "ID fault held behind older memory access");
    }
    let ex_redirect = ex.redirect.filter(|_| !flush_from_ex);
    if let (Some(target), Some(src)) = (ex_redirect, old.id_ex.as_ref()) {
        stats.flush_bubbles += EXECUTE_REDIRECT_PENALTY;
        if src.ctrl.is_branch {
            stats.branches_taken += 1;
        } else {
            stats.jumps_taken += 1;
        }
        tracing::debug!(
            from = format_args!("{:#010x}", src.pc),
            to = format_args!("{target:#010x}"),
            "EX redirect"
        );
    } else if let Some(target) = id_redirect.filter(|_| exception.is_none()) {
        stats.flush_bubbles += DECODE_REDIRECT_PENALTY;
        stats.jumps_taken += 1;
        tracing::debug!(to = format_args!("{target:#010x}"), "ID redirect");
    }
    if let Some(record) = exception {
        stats.faults += 1;
        tracing::warn!(%record, "exception raised; pipeline frozen");
        cpu.frozen = Some(record);
    }

    let jumped_to_self = retired.is_some_and(|r| r.instruction.is_jump_to_self(r.pc));
    let ran_off_end = cpu.frozen.is_none()
        && cpu.latches.is_drained()
        && !cpu.memory.instructions.contains(cpu.pc);
    if jumped_to_self || ran_off_end {
        cpu.halted = true;
        tracing::debug!(cycle = cpu.stats.cycles, jumped_to_self, "halted");
    }

    tracing::trace!(
        cycle = cpu.stats.cycles,
        pc = format_args!("{:#010x}", cpu.pc),
        in_flight = cpu.latches.occupancy(),
        "cycle committed"
    );

    StepOutcome {
        cycle: cpu.stats.cycles,
        retired,
        exception,
        stalled: stall,
        halted: cpu.halted,
    }
}
