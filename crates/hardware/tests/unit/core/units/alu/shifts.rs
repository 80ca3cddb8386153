//! ALU Shift Tests.
//!
//! The shifted value is operand A and the amount is operand B; only the low
//! five bits of the amount are used.

use mips_core::core::pipeline::signals::AluOp;
use mips_core::core::units::alu::Alu;
use proptest::prelude::*;
use rstest::rstest;

fn alu(op: AluOp, a: u32, b: u32) -> u32 {
    Alu::execute(op, a, b).result
}

#[rstest]
#[case(AluOp::Sll, 1, 4, 0x10)]
#[case(AluOp::Sll, 0x8000_0001, 1, 0x0000_0002)]
#[case(AluOp::Srl, 0x8000_0000, 31, 1)]
#[case(AluOp::Srl, 0xF000_0000, 4, 0x0F00_0000)]
#[case(AluOp::Sra, 0xF000_0000, 4, 0xFF00_0000)]
#[case(AluOp::Sra, 0x7000_0000, 4, 0x0700_0000)]
#[case(AluOp::Sra, 0x8000_0000, 31, 0xFFFF_FFFF)]
fn shift_vectors(#[case] op: AluOp, #[case] a: u32, #[case] amount: u32, #[case] expected: u32) {
    assert_eq!(alu(op, a, amount), expected, "{op:?}({a:#x}, {amount})");
}

#[test]
fn lui_places_immediate_in_upper_half() {
    assert_eq!(alu(AluOp::Lui, 0xDEAD, 0x1234), 0x1234_0000);
    assert_eq!(alu(AluOp::Lui, 0, 0xFFFF), 0xFFFF_0000);
}

proptest! {
    #[test]
    fn shift_amount_uses_low_five_bits(a in any::<u32>(), amount in any::<u32>()) {
        for op in [AluOp::Sll, AluOp::Srl, AluOp::Sra] {
            prop_assert_eq!(alu(op, a, amount), alu(op, a, amount & 0x1F));
        }
    }
}
