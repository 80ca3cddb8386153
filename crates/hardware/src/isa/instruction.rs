//! Instruction encoding and decoded instruction descriptors.
//!
//! Provides bit extraction for the MIPS R/I/J field layout and the closed
//! tagged union every fetched word decodes into.

use crate::common::constants::{REG_RA, REG_ZERO};

/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 6-bit opcode and funct fields.
pub const SIX_BIT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump index.
pub const ADDR_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Field layout: `opcode[31:26] rs[25:21] rt[20:16] rd[15:11] shamt[10:6] funct[5:0]`,
/// with `immediate[15:0]` and `address[25:0]` overlaying the low bits.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 31-26).
    fn opcode(&self) -> u32;
    /// Extracts the first source register (bits 25-21).
    fn rs(&self) -> usize;
    /// Extracts the second source / I-format destination register (bits 20-16).
    fn rt(&self) -> usize;
    /// Extracts the R-format destination register (bits 15-11).
    fn rd(&self) -> usize;
    /// Extracts the shift amount (bits 10-6).
    fn shamt(&self) -> u32;
    /// Extracts the R-format function code (bits 5-0).
    fn funct(&self) -> u32;
    /// Extracts the raw 16-bit immediate (bits 15-0).
    fn imm16(&self) -> u32;
    /// Extracts the 26-bit jump index (bits 25-0).
    fn address(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> 26) & SIX_BIT_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & SIX_BIT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn address(&self) -> u32 {
        self & ADDR_MASK
    }
}

/// Instruction format class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register format.
    R,
    /// Immediate format.
    I,
    /// Jump format.
    J,
    /// Unrecognized encoding.
    Unknown,
}

/// R-format operations, keyed by `funct`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ROp {
    /// `add rd, rs, rt` (traps on overflow).
    Add,
    /// `addu rd, rs, rt`.
    Addu,
    /// `sub rd, rs, rt` (traps on overflow).
    Sub,
    /// `subu rd, rs, rt`.
    Subu,
    /// `and rd, rs, rt`.
    And,
    /// `or rd, rs, rt`.
    Or,
    /// `xor rd, rs, rt`.
    Xor,
    /// `nor rd, rs, rt`.
    Nor,
    /// `slt rd, rs, rt`.
    Slt,
    /// `sltu rd, rs, rt`.
    Sltu,
    /// `sll rd, rt, shamt`.
    Sll,
    /// `srl rd, rt, shamt`.
    Srl,
    /// `sra rd, rt, shamt`.
    Sra,
    /// `sllv rd, rt, rs`.
    Sllv,
    /// `srlv rd, rt, rs`.
    Srlv,
    /// `srav rd, rt, rs`.
    Srav,
    /// `jr rs`.
    Jr,
    /// `jalr rd, rs`.
    Jalr,
}

/// I-format operations, keyed by opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IOp {
    /// `addi rt, rs, imm` (traps on overflow).
    Addi,
    /// `addiu rt, rs, imm`.
    Addiu,
    /// `slti rt, rs, imm`.
    Slti,
    /// `sltiu rt, rs, imm`.
    Sltiu,
    /// `andi rt, rs, imm` (zero-extended).
    Andi,
    /// `ori rt, rs, imm` (zero-extended).
    Ori,
    /// `xori rt, rs, imm` (zero-extended).
    Xori,
    /// `lui rt, imm`.
    Lui,
    /// `lb rt, imm(rs)`.
    Lb,
    /// `lh rt, imm(rs)`.
    Lh,
    /// `lw rt, imm(rs)`.
    Lw,
    /// `lbu rt, imm(rs)`.
    Lbu,
    /// `lhu rt, imm(rs)`.
    Lhu,
    /// `sb rt, imm(rs)`.
    Sb,
    /// `sh rt, imm(rs)`.
    Sh,
    /// `sw rt, imm(rs)`.
    Sw,
    /// `beq rs, rt, offset`.
    Beq,
    /// `bne rs, rt, offset`.
    Bne,
}

impl IOp {
    /// Returns true for loads.
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Lb | Self::Lh | Self::Lw | Self::Lbu | Self::Lhu)
    }

    /// Returns true for stores.
    pub const fn is_store(self) -> bool {
        matches!(self, Self::Sb | Self::Sh | Self::Sw)
    }

    /// Returns true for conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::Beq | Self::Bne)
    }
}

/// J-format operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JOp {
    /// `j target`.
    J,
    /// `jal target`.
    Jal,
}

/// A decoded instruction.
///
/// Every 32-bit word maps to exactly one variant; words that match no
/// supported encoding become [`Instruction::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Register-format instruction.
    R {
        /// Operation.
        op: ROp,
        /// First source register.
        rs: usize,
        /// Second source register.
        rt: usize,
        /// Destination register.
        rd: usize,
        /// Shift amount.
        shamt: u32,
    },
    /// Immediate-format instruction.
    I {
        /// Operation.
        op: IOp,
        /// Source / base register.
        rs: usize,
        /// Destination, store-data or second compare register.
        rt: usize,
        /// Immediate, already sign- or zero-extended as `op` requires.
        imm: u32,
    },
    /// Jump-format instruction.
    J {
        /// Operation.
        op: JOp,
        /// 26-bit word index of the target.
        address: u32,
    },
    /// Unrecognized encoding.
    Unknown {
        /// Raw instruction word.
        word: u32,
    },
}

impl Default for Instruction {
    /// The canonical no-op, `sll $0, $0, 0`.
    fn default() -> Self {
        Self::R {
            op: ROp::Sll,
            rs: REG_ZERO,
            rt: REG_ZERO,
            rd: REG_ZERO,
            shamt: 0,
        }
    }
}

impl Instruction {
    /// Returns the format class.
    pub const fn format(&self) -> Format {
        match self {
            Self::R { .. } => Format::R,
            Self::I { .. } => Format::I,
            Self::J { .. } => Format::J,
            Self::Unknown { .. } => Format::Unknown,
        }
    }

    /// Returns the registers this instruction reads, as `[rs, rt]` slots.
    ///
    /// A slot is `None` when the operand is not read. Register 0 is reported
    /// like any other index; callers that track dependencies skip it.
    pub const fn sources(&self) -> [Option<usize>; 2] {
        match *self {
            Self::R { op, rs, rt, .. } => match op {
                ROp::Sll | ROp::Srl | ROp::Sra => [None, Some(rt)],
                ROp::Jr | ROp::Jalr => [Some(rs), None],
                _ => [Some(rs), Some(rt)],
            },
            Self::I { op, rs, rt, .. } => match op {
                IOp::Lui => [None, None],
                IOp::Sb | IOp::Sh | IOp::Sw | IOp::Beq | IOp::Bne => [Some(rs), Some(rt)],
                _ => [Some(rs), None],
            },
            Self::J { .. } | Self::Unknown { .. } => [None, None],
        }
    }

    /// Returns true if this instruction reads register `reg` (never true for register 0).
    pub fn reads(&self, reg: usize) -> bool {
        reg != REG_ZERO && self.sources().contains(&Some(reg))
    }

    /// Returns the register this instruction writes, if any.
    ///
    /// Writes to register 0 are reported as `None`.
    pub const fn destination(&self) -> Option<usize> {
        let reg = match *self {
            Self::R { op: ROp::Jr, .. } => return None,
            Self::R { rd, .. } => rd,
            Self::I { op, rt, .. } => {
                if op.is_store() || op.is_branch() {
                    return None;
                }
                rt
            }
            Self::J { op: JOp::Jal, .. } => REG_RA,
            Self::J { op: JOp::J, .. } | Self::Unknown { .. } => return None,
        };
        if reg == REG_ZERO { None } else { Some(reg) }
    }

    /// Returns true for a `J` whose target is its own address.
    ///
    /// This is the halt idiom: `run` stops when one retires.
    pub const fn is_jump_to_self(&self, pc: u32) -> bool {
        match *self {
            Self::J { op: JOp::J, address } => {
                crate::core::units::bru::BranchResolver::jump_target(pc, address) == pc
            }
            _ => false,
        }
    }
}
