//! Instruction memory.

use crate::common::constants::INSTRUCTION_BYTES;

/// A contiguous read-only instruction image.
///
/// Fetches outside the image, or from an address that is not word aligned,
/// return `None`: the fetch stage treats that as "nothing to fetch".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructionMemory {
    base: u32,
    words: Vec<u32>,
}

impl InstructionMemory {
    /// Replaces the image with `words` starting at `base`.
    ///
    /// `base` must already be word aligned.
    pub fn load(&mut self, base: u32, words: &[u32]) {
        self.base = base;
        self.words = words.to_vec();
    }

    /// Fetches the word at `pc`.
    pub fn fetch(&self, pc: u32) -> Option<u32> {
        let offset = pc.checked_sub(self.base)?;
        if offset % INSTRUCTION_BYTES != 0 {
            return None;
        }
        self.words
            .get((offset / INSTRUCTION_BYTES) as usize)
            .copied()
    }

    /// Returns true if `pc` addresses a word of the image.
    pub fn contains(&self, pc: u32) -> bool {
        self.fetch(pc).is_some()
    }

    /// First address of the image.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Number of words in the image.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no program is loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
