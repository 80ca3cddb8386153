//! # Unit Components
//!
//! This module organizes the suites by component: the processor core, the ISA
//! definitions, the memory subsystem and the simulator boundary.

/// Configuration parsing and defaults.
pub mod config;


/// Decoder and disassembler.
pub mod isa;



/// Statistics counters and report.
pub mod stats;
