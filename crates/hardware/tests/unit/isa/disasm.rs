//! Disassembler Tests.

use crate::common::builder::asm;
use mips_core::isa::disasm::disassemble;
use rstest::rstest;

#[rstest]
#[case(asm().add(3, 1, 2), "add $3, $1, $2")]
#[case(asm().subu(8, 9, 10), "subu $8, $9, $10")]
#[case(asm().sll(2, 3, 4), "sll $2, $3, 4")]
#[case(asm().srav(2, 3, 4), "srav $2, $3, $4")]
#[case(asm().jr(31), "jr $31")]
#[case(asm().jalr(31, 5), "jalr $31, $5")]
#[case(asm().addi(1, 0, -5), "addi $1, $0, -5")]
#[case(asm().ori(1, 1, 0xFFFF), "ori $1, $1, 0xffff")]
#[case(asm().lui(1, 0x1234), "lui $1, 0x1234")]
#[case(asm().lw(4, -4, 29), "lw $4, -4($29)")]
#[case(asm().sb(2, 3, 1), "sb $2, 3($1)")]
#[case(asm().bne(1, 0, -3), "bne $1, $0, -3")]
#[case(asm().jal(0x100), "jal 0x100")]
fn renders_conventional_syntax(
    #[case] inst: crate::common::builder::InstructionBuilder,
    #[case] text: &str,
) {
    assert_eq!(disassemble(inst.build()), text);
}

#[test]
fn nop_renders_as_shift() {
    assert_eq!(disassemble(0), "sll $0, $0, 0");
}

#[test]
fn unknown_renders_as_data() {
    assert_eq!(disassemble(0x7000_0002), ".word 0x70000002");
}
