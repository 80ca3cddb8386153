//! Architectural constants shared across the core.

/// Size of one instruction in bytes.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Number of general-purpose registers.
pub const REG_COUNT: usize = 32;

/// Register hardwired to zero (`$zero`).
pub const REG_ZERO: usize = 0;

/// Link register written by `JAL` (`$ra`).
pub const REG_RA: usize = 31;

/// Mask selecting the region bits kept by J-format jumps.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Mask for 5-bit shift amounts.
pub const SHAMT_MASK: u32 = 0x1F;
