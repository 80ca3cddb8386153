//! Instruction Disassembler.
//!
//! Renders decoded instructions in conventional MIPS assembly syntax for trace
//! logging and test diagnostics. Registers print by number (`$3`); branch
//! offsets print in words, exactly as encoded.
//!
//! # Usage
//!
//! ```
//! use mips_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2001_0005), "addi $1, $0, 5");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::{IOp, Instruction, JOp, ROp};

/// Disassembles a 32-bit MIPS instruction word.
///
/// Unsupported encodings render as `.word 0x????????`.
pub fn disassemble(word: u32) -> String {
    decode(word).to_string()
}

/// Returns the lowercase mnemonic for an R-format operation.
const fn r_mnemonic(op: ROp) -> &'static str {
    match op {
        ROp::Add => "add",
        ROp::Addu => "addu",
        ROp::Sub => "sub",
        ROp::Subu => "subu",
        ROp::And => "and",
        ROp::Or => "or",
        ROp::Xor => "xor",
        ROp::Nor => "nor",
        ROp::Slt => "slt",
        ROp::Sltu => "sltu",
        ROp::Sll => "sll",
        ROp::Srl => "srl",
        ROp::Sra => "sra",
        ROp::Sllv => "sllv",
        ROp::Srlv => "srlv",
        ROp::Srav => "srav",
        ROp::Jr => "jr",
        ROp::Jalr => "jalr",
    }
}

/// Returns the lowercase mnemonic for an I-format operation.
const fn i_mnemonic(op: IOp) -> &'static str {
    match op {
        IOp::Addi => "addi",
        IOp::Addiu => "addiu",
        IOp::Slti => "slti",
        IOp::Sltiu => "sltiu",
        IOp::Andi => "andi",
        IOp::Ori => "ori",
        IOp::Xori => "xori",
        IOp::Lui => "lui",
        IOp::Lb => "lb",
        IOp::Lh => "lh",
        IOp::Lw => "lw",
        IOp::Lbu => "lbu",
        IOp::Lhu => "lhu",
        IOp::Sb => "sb",
        IOp::Sh => "sh",
        IOp::Sw => "sw",
        IOp::Beq => "beq",
        IOp::Bne => "bne",
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::R {
                op: op @ (ROp::Sll | ROp::Srl | ROp::Sra),
                rt,
                rd,
                shamt,
                ..
            } => write!(f, "{} ${rd}, ${rt}, {shamt}", r_mnemonic(op)),
            Self::R {
                op: op @ (ROp::Sllv | ROp::Srlv | ROp::Srav),
                rs,
                rt,
                rd,
                ..
            } => write!(f, "{} ${rd}, ${rt}, ${rs}", r_mnemonic(op)),
            Self::R { op: ROp::Jr, rs, .. } => write!(f, "jr ${rs}"),
            Self::R {
                op: ROp::Jalr,
                rs,
                rd,
                ..
            } => write!(f, "jalr ${rd}, ${rs}"),
            Self::R { op, rs, rt, rd, .. } => {
                write!(f, "{} ${rd}, ${rs}, ${rt}", r_mnemonic(op))
            }
            Self::I {
                op: IOp::Lui, rt, imm, ..
            } => write!(f, "lui ${rt}, {imm:#x}"),
            Self::I { op, rs, rt, imm } if op.is_load() || op.is_store() => {
                write!(f, "{} ${rt}, {}(${rs})", i_mnemonic(op), imm as i32)
            }
            Self::I { op, rs, rt, imm } if op.is_branch() => {
                write!(f, "{} ${rs}, ${rt}, {}", i_mnemonic(op), imm as i32)
            }
            Self::I {
                op: op @ (IOp::Andi | IOp::Ori | IOp::Xori),
                rs,
                rt,
                imm,
            } => write!(f, "{} ${rt}, ${rs}, {imm:#x}", i_mnemonic(op)),
            Self::I { op, rs, rt, imm } => {
                write!(f, "{} ${rt}, ${rs}, {}", i_mnemonic(op), imm as i32)
            }
            Self::J { op, address } => {
                let mnemonic = match op {
                    JOp::J => "j",
                    JOp::Jal => "jal",
                };
                write!(f, "{mnemonic} {:#x}", address << 2)
            }
            Self::Unknown { word } => write!(f, ".word {word:#010x}"),
        }
    }
}
