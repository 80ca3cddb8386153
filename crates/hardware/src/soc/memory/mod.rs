//! Instruction and data memories.
//!
//! This module implements the memory subsystem. It provides:
//! 1. **Buffer:** Sparse word storage backing data memory.
//! 2. **Instruction Memory:** The program image the fetch stage reads.
//! 3. **Data Memory:** Big-endian load/store storage with lane merging.

/// Sparse word storage.
pub mod buffer;

/// Data memory.
pub mod data;

/// Instruction memory.
pub mod instruction;

pub use self::data::DataMemory;
pub use self::instruction::InstructionMemory;

/// Complete memory image of one core.
#[derive(Clone, Debug, Default)]
pub struct MemorySubsystem {
    /// Program image.
    pub instructions: InstructionMemory,
    /// Live data memory.
    pub data: DataMemory,
    /// Data image restored by reset.
    initial_data: DataMemory,
}

impl MemorySubsystem {
    /// Places an initial data image; it is written to live memory and kept for reset.
    pub fn load_data(&mut self, base: u32, words: &[u32]) {
        self.initial_data.load_image(base, words);
        self.data.load_image(base, words);
    }

    /// Restores data memory to the loaded initial image.
    pub fn reset_data(&mut self) {
        self.data.clone_from(&self.initial_data);
    }
}
