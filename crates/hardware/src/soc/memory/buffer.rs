//! Sparse word storage.
//!
//! Backs data memory with a map from word-aligned addresses to word values.
//! Words never written read as zero, so the full 32-bit address space is
//! available without allocating it.

use std::collections::BTreeMap;

use crate::core::units::lsu::alignment::WORD_ALIGN_MASK;

/// Sparse, word-granular backing store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBuffer {
    words: BTreeMap<u32, u32>,
}

impl WordBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the word containing `addr`.
    pub fn read(&self, addr: u32) -> u32 {
        self.words
            .get(&(addr & WORD_ALIGN_MASK))
            .copied()
            .unwrap_or(0)
    }

    /// Writes the word containing `addr`.
    ///
    /// Zero words are dropped from the map so equality compares contents.
    pub fn write(&mut self, addr: u32, value: u32) {
        let key = addr & WORD_ALIGN_MASK;
        if value == 0 {
            let _ = self.words.remove(&key);
        } else {
            let _ = self.words.insert(key, value);
        }
    }

    /// Number of non-zero words held.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if every word reads as zero.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
