//! General-Purpose Register File Tests.

use mips_core::core::arch::Gpr;
use pretty_assertions::assert_eq;

#[test]
fn fresh_file_reads_zero() {
    let gpr = Gpr::new();
    assert_eq!(gpr.snapshot(), [0; 32]);
}

#[test]
fn write_then_read() {
    let mut gpr = Gpr::new();
    gpr.write(5, 0xDEAD_BEEF);
    gpr.write(31, 4);
    assert_eq!(gpr.read(5), 0xDEAD_BEEF);
    assert_eq!(gpr.read(31), 4);
}

#[test]
fn register_zero_is_hardwired() {
    let mut gpr = Gpr::new();
    gpr.write(0, 123);
    assert_eq!(gpr.read(0), 0, "$0 write must be discarded");
}

#[test]
fn clear_resets_everything() {
    let mut gpr = Gpr::new();
    for i in 0..32 {
        gpr.write(i, i as u32 + 1);
    }
    gpr.clear();
    assert_eq!(gpr, Gpr::new());
}
