//! Load/Store Unit (LSU).
//!
//! This module validates data accesses and shapes loaded values. It includes:
//! - [`alignment`]: Natural-alignment checks and big-endian lane placement.
//!
//! A checked [`DataAccess`] is the only way to reach data memory, so a
//! misaligned address cannot mutate storage.

/// Alignment checks and byte-lane helpers.
pub mod alignment;

use crate::common::error::ExceptionCause;
use crate::core::pipeline::signals::MemWidth;

/// A data access whose address has passed the alignment check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataAccess {
    address: u32,
    width: MemWidth,
}

impl DataAccess {
    /// Byte address of the access.
    pub const fn address(self) -> u32 {
        self.address
    }

    /// Access width.
    pub const fn width(self) -> MemWidth {
        self.width
    }
}

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Validates an access.
    ///
    /// # Arguments
    ///
    /// * `address` - Effective address computed by the ALU.
    /// * `width`   - Access width.
    ///
    /// # Returns
    ///
    /// The checked access, or `MisalignedAccess` if `address` is not a
    /// multiple of the access size.
    pub const fn check(address: u32, width: MemWidth) -> Result<DataAccess, ExceptionCause> {
        if alignment::is_aligned(address, width) {
            Ok(DataAccess { address, width })
        } else {
            Err(ExceptionCause::MisalignedAccess { address })
        }
    }

    /// Extends a raw loaded lane to a 32-bit register value.
    ///
    /// # Arguments
    ///
    /// * `raw`      - The lane value, right-aligned and zero-filled.
    /// * `width`    - Access width.
    /// * `unsigned` - Zero-extend (`LBU`/`LHU`) instead of sign-extend.
    pub const fn extend_load(raw: u32, width: MemWidth, unsigned: bool) -> u32 {
        match (width, unsigned) {
            (MemWidth::Byte, false) => raw as u8 as i8 as i32 as u32,
            (MemWidth::Half, false) => raw as u16 as i16 as i32 as u32,
            _ => raw,
        }
    }
}
