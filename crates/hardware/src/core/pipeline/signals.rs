//! Pipeline control signals and the control unit.
//!
//! This module defines the signals that steer an instruction through the
//! pipeline and the table that produces them. It provides:
//! 1. **Operation Classification:** The ALU operation and its operand sources.
//! 2. **Memory Control:** Access direction, width and sign extension.
//! 3. **Writeback Control:** Whether and from where the destination is written.
//! 4. **Control Flow:** Branch conditions and jump target sources.

use crate::common::error::ExceptionCause;
use crate::isa::instruction::{IOp, Instruction, JOp, ROp};

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Integer addition (default, also used for address generation).
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Bitwise NOR.
    Nor,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Load upper immediate (`b << 16`).
    Lui,
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemWidth {
    /// 8-bit byte access.
    Byte,

    /// 16-bit halfword access.
    Half,

    /// 32-bit word access.
    #[default]
    Word,
}

impl MemWidth {
    /// Returns the access size in bytes.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

/// Source of the value written back to the destination register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WriteBackSource {
    /// ALU result.
    #[default]
    Alu,

    /// Data loaded in the memory stage.
    Memory,

    /// Return address (`pc + 4`) for linking jumps.
    LinkRegister,
}

/// Comparison evaluated by a conditional branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BranchCondition {
    /// Taken when `rs == rt`.
    #[default]
    Equal,

    /// Taken when `rs != rt`.
    NotEqual,
}

/// Where an unconditional jump takes its target from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum JumpTarget {
    /// 26-bit index in the instruction word; resolved in decode.
    #[default]
    Absolute,

    /// Value of `rs`; resolved in execute.
    Register,
}

/// Where a shift instruction takes its shift amount from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShiftSource {
    /// Not a shift.
    #[default]
    None,

    /// The `shamt` field.
    Shamt,

    /// The low five bits of `rs`.
    Register,
}

/// Control signals for pipeline stage execution.
///
/// Generated once in decode and carried unchanged through the downstream latches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlSignals {
    /// ALU operation to perform.
    pub alu_op: AluOp,
    /// ALU operand B is the immediate rather than `rt`.
    pub alu_src_is_immediate: bool,
    /// Shift amount source; when set, operand A is `rt`.
    pub shift_source: ShiftSource,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Width of memory access.
    pub mem_width: MemWidth,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Source of the written value.
    pub reg_write_source: WriteBackSource,
    /// Instruction is a conditional branch.
    pub is_branch: bool,
    /// Branch comparison.
    pub branch_condition: BranchCondition,
    /// Instruction is an unconditional jump.
    pub is_jump: bool,
    /// Jump target source.
    pub jump_target: JumpTarget,
    /// Unsigned variant: no overflow trap, unsigned compare, zero-extended load.
    pub is_unsigned: bool,
    /// Signed overflow raises `ArithmeticOverflow`.
    pub checks_overflow: bool,
}

/// Maps decoded instructions to control signals.
#[derive(Debug)]
pub struct ControlUnit;

impl ControlUnit {
    /// Generates the control signals for an instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The decoded instruction.
    ///
    /// # Returns
    ///
    /// The control bundle, or `InvalidOpcode` for [`Instruction::Unknown`].
    pub const fn generate(inst: &Instruction) -> Result<ControlSignals, ExceptionCause> {
        let base = ControlSignals {
            alu_op: AluOp::Add,
            alu_src_is_immediate: false,
            shift_source: ShiftSource::None,
            mem_read: false,
            mem_write: false,
            mem_width: MemWidth::Word,
            reg_write: false,
            reg_write_source: WriteBackSource::Alu,
            is_branch: false,
            branch_condition: BranchCondition::Equal,
            is_jump: false,
            jump_target: JumpTarget::Absolute,
            is_unsigned: false,
            checks_overflow: false,
        };

        match *inst {
            Instruction::R { op, .. } => Ok(Self::r_type(op, base)),
            Instruction::I { op, .. } => Ok(Self::i_type(op, base)),
            Instruction::J { op, .. } => Ok(ControlSignals {
                is_jump: true,
                jump_target: JumpTarget::Absolute,
                reg_write: matches!(op, JOp::Jal),
                reg_write_source: WriteBackSource::LinkRegister,
                ..base
            }),
            Instruction::Unknown { word } => Err(ExceptionCause::InvalidOpcode { word }),
        }
    }

    /// Register-format table.
    const fn r_type(op: ROp, base: ControlSignals) -> ControlSignals {
        let alu = ControlSignals {
            reg_write: true,
            ..base
        };
        match op {
            ROp::Add => ControlSignals {
                checks_overflow: true,
                ..alu
            },
            ROp::Addu => ControlSignals {
                is_unsigned: true,
                ..alu
            },
            ROp::Sub => ControlSignals {
                alu_op: AluOp::Sub,
                checks_overflow: true,
                ..alu
            },
            ROp::Subu => ControlSignals {
                alu_op: AluOp::Sub,
                is_unsigned: true,
                ..alu
            },
            ROp::And => ControlSignals {
                alu_op: AluOp::And,
                ..alu
            },
            ROp::Or => ControlSignals {
                alu_op: AluOp::Or,
                ..alu
            },
            ROp::Xor => ControlSignals {
                alu_op: AluOp::Xor,
                ..alu
            },
            ROp::Nor => ControlSignals {
                alu_op: AluOp::Nor,
                ..alu
            },
            ROp::Slt => ControlSignals {
                alu_op: AluOp::Slt,
                ..alu
            },
            ROp::Sltu => ControlSignals {
                alu_op: AluOp::Sltu,
                is_unsigned: true,
                ..alu
            },
            ROp::Sll => Self::shift(AluOp::Sll, ShiftSource::Shamt, alu),
            ROp::Srl => Self::shift(AluOp::Srl, ShiftSource::Shamt, alu),
            ROp::Sra => Self::shift(AluOp::Sra, ShiftSource::Shamt, alu),
            ROp::Sllv => Self::shift(AluOp::Sll, ShiftSource::Register, alu),
            ROp::Srlv => Self::shift(AluOp::Srl, ShiftSource::Register, alu),
            ROp::Srav => Self::shift(AluOp::Sra, ShiftSource::Register, alu),
            ROp::Jr => ControlSignals {
                is_jump: true,
                jump_target: JumpTarget::Register,
                ..base
            },
            ROp::Jalr => ControlSignals {
                is_jump: true,
                jump_target: JumpTarget::Register,
                reg_write: true,
                reg_write_source: WriteBackSource::LinkRegister,
                ..base
            },
        }
    }

    /// Immediate-format table.
    const fn i_type(op: IOp, base: ControlSignals) -> ControlSignals {
        let imm = ControlSignals {
            alu_src_is_immediate: true,
            reg_write: true,
            ..base
        };
        let load = ControlSignals {
            mem_read: true,
            reg_write_source: WriteBackSource::Memory,
            ..imm
        };
        let store = ControlSignals {
            alu_src_is_immediate: true,
            mem_write: true,
            ..base
        };
        let branch = ControlSignals {
            alu_op: AluOp::Sub,
            is_branch: true,
            ..base
        };
        match op {
            IOp::Addi => ControlSignals {
                checks_overflow: true,
                ..imm
            },
            IOp::Addiu => ControlSignals {
                is_unsigned: true,
                ..imm
            },
            IOp::Slti => ControlSignals {
                alu_op: AluOp::Slt,
                ..imm
            },
            IOp::Sltiu => ControlSignals {
                alu_op: AluOp::Sltu,
                is_unsigned: true,
                ..imm
            },
            IOp::Andi => ControlSignals {
                alu_op: AluOp::And,
                ..imm
            },
            IOp::Ori => ControlSignals {
                alu_op: AluOp::Or,
                ..imm
            },
            IOp::Xori => ControlSignals {
                alu_op: AluOp::Xor,
                ..imm
            },
            IOp::Lui => ControlSignals {
                alu_op: AluOp::Lui,
                ..imm
            },
            IOp::Lw => load,
            IOp::Lh => ControlSignals {
                mem_width: MemWidth::Half,
                ..load
            },
            IOp::Lhu => ControlSignals {
                mem_width: MemWidth::Half,
                is_unsigned: true,
                ..load
            },
            IOp::Lb => ControlSignals {
                mem_width: MemWidth::Byte,
                ..load
            },
            IOp::Lbu => ControlSignals {
                mem_width: MemWidth::Byte,
                is_unsigned: true,
                ..load
            },
            IOp::Sw => store,
            IOp::Sh => ControlSignals {
                mem_width: MemWidth::Half,
                ..store
            },
            IOp::Sb => ControlSignals {
                mem_width: MemWidth::Byte,
                ..store
            },
            IOp::Beq => branch,
            IOp::Bne => ControlSignals {
                branch_condition: BranchCondition::NotEqual,
                ..branch
            },
        }
    }

    /// Shift entry: operand A is `rt`, the amount comes from `source`.
    const fn shift(alu_op: AluOp, source: ShiftSource, alu: ControlSignals) -> ControlSignals {
        ControlSignals {
            alu_op,
            shift_source: source,
            ..alu
        }
    }
}
