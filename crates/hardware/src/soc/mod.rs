//! Memory Subsystem.
//!
//! The core uses a Harvard layout: instructions and data live in separate
//! address spaces, each word-addressable, so fetch and data access never
//! contend for a port.

/// Instruction and data memories.
pub mod memory;

pub use memory::MemorySubsystem;
