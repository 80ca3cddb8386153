//! Alignment checking and byte-lane placement.
//!
//! Data memory is big-endian: the byte at the lowest address of a word is its
//! most significant byte. Sub-word accesses select a lane of the containing word.

use crate::core::pipeline::signals::MemWidth;

/// Mask clearing the byte offset within a word.
pub const WORD_ALIGN_MASK: u32 = !0x3;

/// Checks whether an access of `width` at `addr` is naturally aligned.
///
/// # Arguments
///
/// * `addr`  - The byte address of the access.
/// * `width` - The access width.
///
/// # Returns
///
/// `true` if `addr` is a multiple of the access size.
pub const fn is_aligned(addr: u32, width: MemWidth) -> bool {
    addr & (width.bytes() - 1) == 0
}

/// Returns the left shift that moves a `width` value into its big-endian lane.
///
/// `addr` must be aligned for `width`.
pub const fn lane_shift(addr: u32, width: MemWidth) -> u32 {
    let offset = addr & 0x3;
    (4 - width.bytes() - offset) * 8
}

/// Returns the unshifted mask for a `width` value.
pub const fn lane_mask(width: MemWidth) -> u32 {
    match width {
        MemWidth::Byte => 0xFF,
        MemWidth::Half => 0xFFFF,
        MemWidth::Word => 0xFFFF_FFFF,
    }
}
