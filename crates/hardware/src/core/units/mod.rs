//! Execution units and functional components.
//!
//! This module contains the combinational units the pipeline stages call into:
//! the ALU, the branch resolution unit and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: branch conditions, targets and flush penalties.
pub mod bru;

/// Load/Store Unit: alignment checks and byte-lane extraction.
pub mod lsu;
