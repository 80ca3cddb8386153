//! Statistics Tests.

use mips_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::builder::asm;
use crate::common::harness::{TestContext, program};

#[test]
fn ratios_guard_against_zero() {
    let stats = SimStats::default();
    assert!(stats.ipc().abs() < f64::EPSILON);
    assert!(stats.cpi().abs() < f64::EPSILON);
}

#[test]
fn ipc_and_cpi_are_reciprocal() {
    let stats = SimStats {
        cycles: 10,
        instructions_retired: 5,
        ..SimStats::default()
    };
    assert!((stats.ipc() - 0.5).abs() < 1e-9);
    assert!((stats.cpi() - 2.0).abs() < 1e-9);
}

#[test]
fn full_report_has_every_section() {
    let text = SimStats::default().to_string();
    assert!(text.contains("MIPS PIPELINE SIMULATION STATISTICS"));
    assert!(text.contains("sim_cycles"));
    assert!(text.contains("HAZARDS"));
    assert!(text.contains("INSTRUCTION MIX"));
    assert_eq!(STATS_SECTIONS.len(), 3);
}

#[test]
fn section_filter() {
    let text = SimStats::default().report(&["hazards"]);
    assert!(text.contains("stalls.data"));
    assert!(!text.contains("sim_cycles"), "summary omitted");
    assert!(!text.contains("INSTRUCTION MIX"));
}

#[test]
fn counters_after_a_run() {
    let mut ctx = TestContext::new().load_data(0, &[3]).load_program(
        0,
        &program(&[
            asm().lw(1, 0, 0),
            asm().beq(1, 0, 1),
            asm().j(0x10),
            asm().nop(),
            asm().sw(1, 4, 0),
        ]),
    );
    ctx.run_to_halt();
    let stats = ctx.stats();

    assert_eq!(stats.instructions_retired, 4, "lw, beq, j, sw");
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.stalls_data, 1, "beq reads the loaded $1");
    assert_eq!(stats.branches_taken, 0);
    assert_eq!(stats.jumps_taken, 1);
    assert_eq!(stats.flush_bubbles, 1);
    assert!(ctx.stats().to_string().contains("op.load"));
}
