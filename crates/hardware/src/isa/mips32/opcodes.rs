//! MIPS32 Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26) of the supported integer subset.

/// Register-register format; the operation is selected by `funct`.
pub const OP_SPECIAL: u32 = 0b000000;

/// Jump (J).
pub const OP_J: u32 = 0b000010;
/// Jump and link (JAL).
pub const OP_JAL: u32 = 0b000011;

/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0b000100;
/// Branch on not equal (BNE).
pub const OP_BNE: u32 = 0b000101;

/// Add immediate, trapping on overflow (ADDI).
pub const OP_ADDI: u32 = 0b001000;
/// Add immediate without overflow trap (ADDIU).
pub const OP_ADDIU: u32 = 0b001001;
/// Set on less than immediate (SLTI).
pub const OP_SLTI: u32 = 0b001010;
/// Set on less than immediate unsigned (SLTIU).
pub const OP_SLTIU: u32 = 0b001011;
/// AND with zero-extended immediate (ANDI).
pub const OP_ANDI: u32 = 0b001100;
/// OR with zero-extended immediate (ORI).
pub const OP_ORI: u32 = 0b001101;
/// XOR with zero-extended immediate (XORI).
pub const OP_XORI: u32 = 0b001110;
/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0b001111;

/// Load byte (LB).
pub const OP_LB: u32 = 0b100000;
/// Load halfword (LH).
pub const OP_LH: u32 = 0b100001;
/// Load word (LW).
pub const OP_LW: u32 = 0b100011;
/// Load byte unsigned (LBU).
pub const OP_LBU: u32 = 0b100100;
/// Load halfword unsigned (LHU).
pub const OP_LHU: u32 = 0b100101;

/// Store byte (SB).
pub const OP_SB: u32 = 0b101000;
/// Store halfword (SH).
pub const OP_SH: u32 = 0b101001;
/// Store word (SW).
pub const OP_SW: u32 = 0b101011;
