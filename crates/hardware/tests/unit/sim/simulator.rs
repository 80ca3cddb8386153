//! Simulator Boundary Tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use mips_core::Simulator;
use mips_core::common::SimError;
use mips_core::config::Config;
use mips_core::sim::RunExit;
use pretty_assertions::assert_eq;

use crate::common::builder::asm;
use crate::common::harness::{TEST_CYCLE_BUDGET, TestContext, ok, program};

#[test]
fn misaligned_bases_are_rejected() {
    let mut sim = Simulator::new(&Config::default());

    assert!(matches!(
        sim.load_program(&[0], 0x2),
        Err(SimError::MisalignedBase { base: 0x2 })
    ));
    assert!(matches!(
        sim.load_data(&[0], 0x101),
        Err(SimError::MisalignedBase { base: 0x101 })
    ));
}

#[test]
fn program_at_nonzero_base_with_matching_reset_vector() {
    let config = ok(Config::from_json_str(r#"{ "general": { "reset_vector": 4096 } }"#));
    let mut ctx = TestContext::with_config(&config).load_program(
        0x1000,
        &program(&[asm().addi(1, 0, 1), asm().j(0x1004)]),
    );
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.stats().instructions_retired, 2);
}

#[test]
fn reloading_program_replaces_image() {
    let mut ctx = TestContext::new().load_program(0, &program(&[asm().addi(1, 0, 1)]));
    ok(ctx.sim.load_program(&program(&[asm().addi(2, 0, 2)]), 0));
    ctx.run_to_halt();

    assert_eq!((ctx.get_reg(1), ctx.get_reg(2)), (0, 2));
}

#[test]
fn snapshot_lists_all_registers() {
    let mut ctx = TestContext::new().load_program(
        0,
        &program(&[asm().addi(31, 0, -1), asm().addi(16, 0, 16)]),
    );
    ctx.run_to_halt();
    let snap = ctx.sim.snapshot();

    assert_eq!(snap.registers[0], 0);
    assert_eq!(snap.registers[16], 16);
    assert_eq!(snap.registers[31], 0xFFFF_FFFF);
    assert_eq!(snap.registers.len(), 32);
}

#[test]
fn read_memory_spans_words() {
    let ctx = TestContext::new().load_data(0x20, &[0x0102_0304, 0x0506_0708]);
    assert_eq!(ctx.sim.read_memory(0x22, 4), vec![0x03, 0x04, 0x05, 0x06]);
    assert_eq!(ctx.sim.read_memory(0x1000, 2), vec![0, 0], "untouched memory is zero");
}

#[test]
fn file_loading_uses_configured_bases() {
    let mut prog = ok(tempfile::Builder::new().suffix(".hex").tempfile());
    // addi $1, $0, 0x40 ; lw $2, 0($1)
    ok(writeln!(prog, "20010040\n8c220000"));
    let mut data = ok(tempfile::Builder::new().suffix(".bin").tempfile());
    ok(data.write_all(&0xCAFE_F00Du32.to_be_bytes()));
    ok(data.flush());

    let config = ok(Config::from_json_str(r#"{ "memory": { "data_base": 64 } }"#));
    let mut sim = Simulator::new(&config);
    ok(sim.load_program_file(prog.path()));
    ok(sim.load_data_file(data.path()));

    assert_eq!(sim.run(TEST_CYCLE_BUDGET), RunExit::Halted);
    assert_eq!(sim.read_register(2), 0xCAFE_F00D);
    assert!(sim.is_halted());
}

#[test]
fn config_is_kept() {
    let config = ok(Config::from_json_str(r#"{ "general": { "max_cycles": 77 } }"#));
    let sim = Simulator::new(&config);
    assert_eq!(sim.config(), &config);
}

/// Shared in-memory sink for a scoped `fmt` subscriber.
#[derive(Clone, Debug, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn text(&self) -> String {
        String::from_utf8_lossy(&ok(self.0.lock())).into_owned()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        ok(self.0.lock()).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn load_with_captured_log(base: u32) -> (Simulator, String) {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let mut sim = Simulator::new(&Config::default());
    tracing::subscriber::with_default(subscriber, || {
        ok(sim.load_program(&[asm().addi(1, 0, 5).build()], base));
    });
    (sim, log.text())
}

#[test]
fn image_missing_reset_vector_is_reported() {
    let (mut sim, log) = load_with_captured_log(0x100);

    assert!(
        log.contains("does not contain the reset vector"),
        "expected a warning, got {log:?}"
    );
    assert_eq!(sim.run(TEST_CYCLE_BUDGET), RunExit::Halted);
    assert_eq!(sim.read_register(1), 0, "nothing at the reset vector ran");
}

#[test]
fn image_covering_reset_vector_loads_quietly() {
    let (mut sim, log) = load_with_captured_log(0);

    assert!(!log.contains("reset vector"), "unexpected warning: {log:?}");
    assert_eq!(sim.run(TEST_CYCLE_BUDGET), RunExit::Halted);
    assert_eq!(sim.read_register(1), 5);
}
