//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the MIPS32 integer opcode and function-code tables, the decoded
//! instruction descriptor, the decoder and a disassembler.

/// Instruction decoding from 32-bit words.
pub mod decode;

/// Instruction disassembler for trace output and diagnostics.
pub mod disasm;

/// Decoded instruction types and field extraction.
pub mod instruction;

/// MIPS32 opcode and function-code tables.
pub mod mips32;

pub use decode::decode;
pub use instruction::{Format, IOp, Instruction, JOp, ROp};
