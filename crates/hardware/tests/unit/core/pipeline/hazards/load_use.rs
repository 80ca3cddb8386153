//! Load-Use Interlock Tests.
//!
//! A load's value is available only after MEM, so an instruction that needs it
//! in the very next slot must wait one cycle.

use crate::common::builder::asm;
use crate::common::harness::{TestContext, program};
use pretty_assertions::assert_eq;

#[test]
fn dependent_add_stalls_one_cycle() {
    let mut ctx = TestContext::new().load_data(0, &[21]).load_program(
        0,
        &program(&[asm().lw(1, 0, 0), asm().add(2, 1, 1)]),
    );
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(2), 42, "21 + 21 via MEM/WB forward → 42");
    assert_eq!(ctx.stats().stalls_data, 1);
    assert_eq!(ctx.stats().cycles, 7, "2 instructions + 4 fill + 1 stall");
}

#[test]
fn independent_instruction_between_hides_latency() {
    let mut ctx = TestContext::new().load_data(0, &[21]).load_program(
        0,
        &program(&[asm().lw(1, 0, 0), asm().addi(3, 0, 1), asm().add(2, 1, 1)]),
    );
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(2), 42);
    assert_eq!(ctx.stats().stalls_data, 0, "one gap is enough");
    assert_eq!(ctx.stats().cycles, 7);
}

#[test]
fn store_data_dependent_on_load_stalls() {
    // sw reads rt as store data, which counts as a use
    let mut ctx = TestContext::new().load_data(0, &[0x55]).load_program(
        0,
        &program(&[asm().lw(1, 0, 0), asm().sw(1, 4, 0)]),
    );
    ctx.run_to_halt();

    assert_eq!(ctx.word(4), 0x55);
    assert_eq!(ctx.stats().stalls_data, 1);
}

#[test]
fn load_into_zero_never_stalls() {
    let mut ctx = TestContext::new().load_data(0, &[9]).load_program(
        0,
        &program(&[asm().lw(0, 0, 0), asm().add(2, 0, 0)]),
    );
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(2), 0, "$0 stays zero");
    assert_eq!(ctx.stats().stalls_data, 0);
}

#[test]
fn stall_is_reported_on_the_cycle() {
    let mut ctx = TestContext::new().load_data(0, &[1]).load_program(
        0,
        &program(&[asm().lw(1, 0, 0), asm().addi(2, 1, 1)]),
    );
    let outcomes = ctx.trace();
    let stalled: Vec<u64> = outcomes
        .iter()
        .filter(|o| o.stalled)
        .map(|o| o.cycle)
        .collect();

    // lw reaches EX in cycle 3 while addi sits in decode
    assert_eq!(stalled, vec![3]);
    assert_eq!(ctx.get_reg(2), 2);
}
