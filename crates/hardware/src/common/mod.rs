//! Common types used throughout the MIPS core simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Instruction size, register indices and encoding masks.
//! 2. **Error Handling:** Exception causes and records raised by pipeline stages,
//!    and host-level errors raised by the loader and configuration.

/// Architectural constants.
pub mod constants;

/// Exception records and host-level error types.
pub mod error;

pub use error::{ExceptionCause, ExceptionRecord, PipelineStage, SimError, SimResult};
