//! MIPS32 R-format Function Codes.
//!
//! The `funct` field (bits 5-0) selects the operation of an `OP_SPECIAL`
//! instruction.

/// Shift left logical by `shamt`.
pub const SLL: u32 = 0b000000;
/// Shift right logical by `shamt`.
pub const SRL: u32 = 0b000010;
/// Shift right arithmetic by `shamt`.
pub const SRA: u32 = 0b000011;
/// Shift left logical by `rs`.
pub const SLLV: u32 = 0b000100;
/// Shift right logical by `rs`.
pub const SRLV: u32 = 0b000110;
/// Shift right arithmetic by `rs`.
pub const SRAV: u32 = 0b000111;

/// Jump register.
pub const JR: u32 = 0b001000;
/// Jump and link register.
pub const JALR: u32 = 0b001001;

/// Add, trapping on overflow.
pub const ADD: u32 = 0b100000;
/// Add without overflow trap.
pub const ADDU: u32 = 0b100001;
/// Subtract, trapping on overflow.
pub const SUB: u32 = 0b100010;
/// Subtract without overflow trap.
pub const SUBU: u32 = 0b100011;
/// Bitwise AND.
pub const AND: u32 = 0b100100;
/// Bitwise OR.
pub const OR: u32 = 0b100101;
/// Bitwise XOR.
pub const XOR: u32 = 0b100110;
/// Bitwise NOR.
pub const NOR: u32 = 0b100111;
/// Set on less than (signed).
pub const SLT: u32 = 0b101010;
/// Set on less than unsigned.
pub const SLTU: u32 = 0b101011;
