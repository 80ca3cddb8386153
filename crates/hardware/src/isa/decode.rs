//! MIPS Instruction Decoder.
//!
//! This module turns 32-bit instruction words into [`Instruction`] values. The
//! decoder is a pure, total function: every word decodes, and words matching no
//! supported opcode/funct pair become [`Instruction::Unknown`] so the pipeline
//! can raise `InvalidOpcode` instead of silently executing a no-op.
//!
//! Immediates are extended here, once: `ANDI`, `ORI` and `XORI` zero-extend,
//! every other I-format operation sign-extends. `LUI` keeps the raw 16 bits.

use crate::isa::instruction::{IOp, Instruction, InstructionBits, JOp, ROp};
use crate::isa::mips32::{funct, opcodes};

/// Sign bit of a 16-bit immediate.
const IMM_SIGN_BIT: u32 = 0x8000;

/// Bits set by sign-extending a negative 16-bit immediate.
const IMM_SIGN_FILL: u32 = 0xFFFF_0000;

/// Decodes a MIPS instruction word.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding.
///
/// # Returns
///
/// The decoded instruction, or [`Instruction::Unknown`] for unsupported encodings.
pub fn decode(word: u32) -> Instruction {
    match word.opcode() {
        opcodes::OP_SPECIAL => decode_r_type(word),
        opcodes::OP_J => Instruction::J {
            op: JOp::J,
            address: word.address(),
        },
        opcodes::OP_JAL => Instruction::J {
            op: JOp::Jal,
            address: word.address(),
        },
        opcode => i_op(opcode).map_or(Instruction::Unknown { word }, |op| Instruction::I {
            op,
            rs: word.rs(),
            rt: word.rt(),
            imm: extend_immediate(op, word.imm16()),
        }),
    }
}

/// Decodes an `OP_SPECIAL` word through its function code.
fn decode_r_type(word: u32) -> Instruction {
    let op = match word.funct() {
        funct::SLL => ROp::Sll,
        funct::SRL => ROp::Srl,
        funct::SRA => ROp::Sra,
        funct::SLLV => ROp::Sllv,
        funct::SRLV => ROp::Srlv,
        funct::SRAV => ROp::Srav,
        funct::JR => ROp::Jr,
        funct::JALR => ROp::Jalr,
        funct::ADD => ROp::Add,
        funct::ADDU => ROp::Addu,
        funct::SUB => ROp::Sub,
        funct::SUBU => ROp::Subu,
        funct::AND => ROp::And,
        funct::OR => ROp::Or,
        funct::XOR => ROp::Xor,
        funct::NOR => ROp::Nor,
        funct::SLT => ROp::Slt,
        funct::SLTU => ROp::Sltu,
        _ => return Instruction::Unknown { word },
    };
    Instruction::R {
        op,
        rs: word.rs(),
        rt: word.rt(),
        rd: word.rd(),
        shamt: word.shamt(),
    }
}

/// Maps a primary opcode to its I-format operation.
const fn i_op(opcode: u32) -> Option<IOp> {
    Some(match opcode {
        opcodes::OP_BEQ => IOp::Beq,
        opcodes::OP_BNE => IOp::Bne,
        opcodes::OP_ADDI => IOp::Addi,
        opcodes::OP_ADDIU => IOp::Addiu,
        opcodes::OP_SLTI => IOp::Slti,
        opcodes::OP_SLTIU => IOp::Sltiu,
        opcodes::OP_ANDI => IOp::Andi,
        opcodes::OP_ORI => IOp::Ori,
        opcodes::OP_XORI => IOp::Xori,
        opcodes::OP_LUI => IOp::Lui,
        opcodes::OP_LB => IOp::Lb,
        opcodes::OP_LH => IOp::Lh,
        opcodes::OP_LW => IOp::Lw,
        opcodes::OP_LBU => IOp::Lbu,
        opcodes::OP_LHU => IOp::Lhu,
        opcodes::OP_SB => IOp::Sb,
        opcodes::OP_SH => IOp::Sh,
        opcodes::OP_SW => IOp::Sw,
        _ => return None,
    })
}

/// Extends a raw 16-bit immediate the way `op` consumes it.
const fn extend_immediate(op: IOp, imm16: u32) -> u32 {
    match op {
        IOp::Andi | IOp::Ori | IOp::Xori | IOp::Lui => imm16,
        _ => sign_extend_16(imm16),
    }
}

/// Sign-extends a 16-bit value to 32 bits.
pub const fn sign_extend_16(imm16: u32) -> u32 {
    if imm16 & IMM_SIGN_BIT == 0 {
        imm16
    } else {
        imm16 | IMM_SIGN_FILL
    }
}
