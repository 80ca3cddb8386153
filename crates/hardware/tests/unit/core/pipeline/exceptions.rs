//! Precise Exception Tests.
//!
//! A faulting instruction and everything younger never commit; everything older
//! drains and commits. When several stages fault in one cycle the oldest
//! instruction's fault is reported.

use crate::common::builder::asm;
use crate::common::harness::{TestContext, program};
use mips_core::common::{ExceptionCause, ExceptionRecord, PipelineStage};
use mips_core::sim::RunExit;
use pretty_assertions::assert_eq;

/// Loads `0x7FFF_FFFF` into `$1` and `1` into `$2`.
fn max_int_prologue() -> Vec<crate::common::builder::InstructionBuilder> {
    vec![asm().lui(1, 0x7FFF), asm().ori(1, 1, 0xFFFF), asm().addi(2, 0, 1)]
}

// ══════════════════════════════════════════════════════════
// 1. Arithmetic overflow
// ══════════════════════════════════════════════════════════

#[test]
fn add_overflow_is_precise() {
    let mut insts = max_int_prologue();
    insts.push(asm().add(3, 1, 2)); // 0x0C
    insts.push(asm().addi(4, 0, 9)); // 0x10
    let mut ctx = TestContext::new().load_program(0, &program(&insts));

    let exit = ctx.run();

    assert_eq!(
        exit,
        RunExit::Faulted(ExceptionRecord {
            cause: ExceptionCause::ArithmeticOverflow,
            faulting_pc: 0xC,
            stage: PipelineStage::Execute,
        })
    );
    assert_eq!(ctx.get_reg(1), 0x7FFF_FFFF, "older instructions commit");
    assert_eq!(ctx.get_reg(2), 1);
    assert_eq!(ctx.get_reg(3), 0, "faulting add never writes");
    assert_eq!(ctx.get_reg(4), 0, "younger addi never commits");
    assert_eq!(ctx.stats().faults, 1);
    assert!(!ctx.sim.is_halted(), "a fault freezes, it does not halt");
}

#[test]
fn unsigned_add_wraps_silently() {
    let mut insts = max_int_prologue();
    insts.push(asm().addu(3, 1, 2));
    let mut ctx = TestContext::new().load_program(0, &program(&insts));
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(3), 0x8000_0000);
    assert_eq!(ctx.stats().faults, 0);
}

#[test]
fn sub_overflow_faults() {
    // 0x8000_0000 - 1
    let mut ctx = TestContext::new().load_program(
        0,
        &program(&[asm().lui(1, 0x8000), asm().addi(2, 0, 1), asm().sub(3, 1, 2)]),
    );
    let exit = ctx.run();

    assert!(
        matches!(exit, RunExit::Faulted(r) if r.cause == ExceptionCause::ArithmeticOverflow),
        "sub → overflow, got {exit:?}"
    );
}

#[test]
fn addi_overflow_faults_addiu_does_not() {
    let mut ctx = TestContext::new().load_program(
        0,
        &program(&[asm().lui(1, 0x7FFF), asm().ori(1, 1, 0xFFFF), asm().addiu(2, 1, 1)]),
    );
    ctx.run_to_halt();
    assert_eq!(ctx.get_reg(2), 0x8000_0000);

    let mut ctx = TestContext::new().load_program(
        0,
        &program(&[asm().lui(1, 0x7FFF), asm().ori(1, 1, 0xFFFF), asm().addi(2, 1, 1)]),
    );
    assert!(matches!(ctx.run(), RunExit::Faulted(r) if r.faulting_pc == 0x8));
    assert_eq!(ctx.get_reg(2), 0);
}

// ══════════════════════════════════════════════════════════
// 2. Misaligned access
// ══════════════════════════════════════════════════════════

#[test]
fn misaligned_store_leaves_memory_untouched() {
    let mut ctx = TestContext::new()
        .load_data(0, &[0xAABB_CCDD])
        .load_program(0, &program(&[asm().addi(1, 0, 7), asm().sw(1, 2, 0)]));

    let exit = ctx.run();

    assert_eq!(
        exit,
        RunExit::Faulted(ExceptionRecord::new(
            ExceptionCause::MisalignedAccess { address: 2 },
            0x4
        ))
    );
    assert_eq!(ctx.word(0), 0xAABB_CCDD, "no partial write");
    assert_eq!(ctx.get_reg(1), 7);
}

#[test]
fn misaligned_halfword_load_faults() {
    let mut ctx = TestContext::new().load_program(
        0,
        &program(&[asm().lh(1, 3, 0), asm().addi(2, 0, 2)]),
    );
    let exit = ctx.run();

    assert_eq!(
        exit,
        RunExit::Faulted(ExceptionRecord::new(
            ExceptionCause::MisalignedAccess { address: 3 },
            0x0
        ))
    );
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(2), 0, "younger addi squashed");
}

// ══════════════════════════════════════════════════════════
// 3. Invalid opcode
// ══════════════════════════════════════════════════════════

#[test]
fn invalid_opcode_faults_in_decode() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[asm().addi(1, 0, 1).build(), 0xFC00_0000, asm().addi(2, 0, 2).build()],
    );
    let exit = ctx.run();

    assert_eq!(
        exit,
        RunExit::Faulted(ExceptionRecord {
            cause: ExceptionCause::InvalidOpcode { word: 0xFC00_0000 },
            faulting_pc: 0x4,
            stage: PipelineStage::Decode,
        })
    );
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.get_reg(2), 0);
}

#[test]
fn invalid_opcode_on_wrong_path_is_ignored() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[asm().beq(0, 0, 1).build(), 0xFC00_0000, asm().addi(2, 0, 2).build()],
    );
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(2), 2);
    assert_eq!(ctx.stats().faults, 0, "squashed word raises nothing");
}

// ══════════════════════════════════════════════════════════
// 4. Ordering and recovery
// ══════════════════════════════════════════════════════════

#[test]
fn oldest_fault_wins_same_cycle() {
    // sw (MEM, misaligned) and add (EX, overflow) fault in the same cycle
    let mut insts = max_int_prologue();
    insts.push(asm().sw(2, 1, 0)); // 0x0C
    insts.push(asm().add(3, 1, 2)); // 0x10
    let mut ctx = TestContext::new().load_program(0, &program(&insts));

    let outcomes = ctx.trace();
    let raised: Vec<_> = outcomes.iter().filter_map(|o| o.exception).collect();

    assert_eq!(
        raised,
        vec![ExceptionRecord::new(
            ExceptionCause::MisalignedAccess { address: 1 },
            0xC
        )],
        "exactly one record, from the older store"
    );
    assert_eq!(ctx.get_reg(3), 0);
    assert_eq!(ctx.stats().faults, 1);
}

#[test]
fn frozen_core_stops_fetching() {
    let mut insts = max_int_prologue();
    insts.push(asm().add(3, 1, 2));
    insts.push(asm().addi(4, 0, 9));
    let mut ctx = TestContext::new().load_program(0, &program(&insts));
    let _ = ctx.run();

    let pc = ctx.cpu().pc;
    let _ = ctx.step_n(5);
    assert_eq!(ctx.cpu().pc, pc, "PC holds while frozen");
    assert!(ctx.cpu().latches.is_drained());
    assert_eq!(ctx.get_reg(4), 0);
}

#[test]
fn resume_continues_after_fault() {
    let mut insts = max_int_prologue();
    insts.push(asm().add(3, 1, 2)); // 0x0C
    insts.push(asm().addi(4, 0, 9)); // 0x10
    let mut ctx = TestContext::new().load_program(0, &program(&insts));
    assert!(matches!(ctx.run(), RunExit::Faulted(_)));

    ctx.sim.resume_at(0x10);
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(4), 9, "handler-style resume skips the faulting add");
    assert_eq!(ctx.get_reg(3), 0);
}

#[test]
fn resume_before_drain_keeps_older_work() {
    let mut insts = max_int_prologue();
    insts.push(asm().add(3, 1, 2)); // 0x0C
    insts.push(asm().addi(4, 0, 9)); // 0x10
    let mut ctx = TestContext::new().load_program(0, &program(&insts));

    assert!((0..20).any(|_| ctx.sim.step().exception.is_some()));
    assert!(!ctx.cpu().latches.is_drained(), "addi $2 still in flight");

    ctx.sim.resume_at(0x10);
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(2), 1, "older instruction drained after resume");
    assert_eq!(ctx.get_reg(4), 9);
    assert_eq!(ctx.get_reg(3), 0);
    assert_eq!(ctx.stats().faults, 1, "resume keeps the fault count");
}

#[test]
fn older_misaligned_load_beats_younger_invalid_opcode() {
    // The invalid word reaches Decode while the lw is still in Execute.
    let mut ctx = TestContext::new().load_program(
        0,
        &[asm().addi(1, 0, 2).build(), asm().lw(2, 0, 1).build(), 0xFC00_0000],
    );

    let outcomes = ctx.trace();
    let raised: Vec<_> = outcomes.iter().filter_map(|o| o.exception).collect();

    assert_eq!(
        raised,
        vec![ExceptionRecord::new(
            ExceptionCause::MisalignedAccess { address: 2 },
            0x4
        )],
        "only the older load reports"
    );
    assert_eq!(ctx.stats().faults, 1);
    assert_eq!(ctx.cpu().frozen, raised.first().copied());
    assert_eq!(ctx.get_reg(1), 2);
}

#[test]
fn invalid_opcode_behind_clean_load_surfaces_after_it() {
    let mut ctx = TestContext::new()
        .load_data(0, &[0x55])
        .load_program(0, &[asm().lw(2, 0, 0).build(), 0xFC00_0000]);

    let exit = ctx.run();

    assert_eq!(
        exit,
        RunExit::Faulted(ExceptionRecord::new(
            ExceptionCause::InvalidOpcode { word: 0xFC00_0000 },
            0x4
        ))
    );
    assert_eq!(ctx.get_reg(2), 0x55, "older load still commits");
    assert_eq!(ctx.stats().faults, 1);
    assert_eq!(ctx.stats().stalls_data, 0, "holding a fault is not a load-use stall");
}
