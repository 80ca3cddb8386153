//! Data memory.
//!
//! Byte-addressed, big-endian, word-organized. All pipeline accesses go
//! through an LSU-checked [`DataAccess`]; the raw word and byte readers are
//! for host observation.

use super::buffer::WordBuffer;
use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::units::lsu::DataAccess;
use crate::core::units::lsu::alignment::{lane_mask, lane_shift};

/// Data memory contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMemory {
    buffer: WordBuffer,
}

impl DataMemory {
    /// Loads the raw lane addressed by `access`, right-aligned and zero-filled.
    pub fn load(&self, access: DataAccess) -> u32 {
        let word = self.buffer.read(access.address());
        (word >> lane_shift(access.address(), access.width())) & lane_mask(access.width())
    }

    /// Stores the low bits of `value` into the lane addressed by `access`.
    pub fn store(&mut self, access: DataAccess, value: u32) {
        let shift = lane_shift(access.address(), access.width());
        let mask = lane_mask(access.width()) << shift;
        let old = self.buffer.read(access.address());
        self.buffer
            .write(access.address(), (old & !mask) | ((value << shift) & mask));
    }

    /// Writes consecutive words starting at the word-aligned `base`.
    pub fn load_image(&mut self, base: u32, words: &[u32]) {
        let mut addr = base;
        for &word in words {
            self.buffer.write(addr, word);
            addr = addr.wrapping_add(INSTRUCTION_BYTES);
        }
    }

    /// Reads the word containing `addr` (the low two address bits are ignored).
    pub fn read_word(&self, addr: u32) -> u32 {
        self.buffer.read(addr)
    }

    /// Reads `len` bytes starting at `addr` in address order.
    pub fn read_bytes(&self, addr: u32, len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| {
                let a = addr.wrapping_add(i as u32);
                self.buffer.read(a).to_be_bytes()[(a & 0x3) as usize]
            })
            .collect()
    }
}
