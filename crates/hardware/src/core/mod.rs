//! Core processor implementation.
//!
//! This module contains the main CPU implementation including the instruction
//! pipeline, execution units and architectural state.

/// Architectural state components (register file, fault arbitration).
pub mod arch;

/// CPU core context and reset/step control.
pub mod cpu;

/// Instruction pipeline implementation (engine, stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, branch resolution, load/store).
pub mod units;

pub use self::cpu::Cpu;
