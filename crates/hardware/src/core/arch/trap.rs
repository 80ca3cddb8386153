//! Exception Arbitration.
//!
//! This module decides which fault, if any, takes effect in a cycle. Faults are
//! detected independently by Decode, Execute and Memory; the controller keeps
//! only the one belonging to the oldest instruction. It performs the following:
//! 1. **Ordering:** Memory beats Execute beats Decode.
//! 2. **Wrong-Path Suppression:** A Decode fault is dropped when Execute redirects
//!    in the same cycle, since that instruction is about to be squashed.
//! 3. **Deferral:** A Decode fault waits while the instruction ahead of it still
//!    has its memory access to check, so records always surface in program order.

use crate::common::error::ExceptionRecord;

/// Faults raised by each detecting stage in a single cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageFaults {
    /// `InvalidOpcode` raised in Decode.
    pub decode: Option<ExceptionRecord>,
    /// `ArithmeticOverflow` raised in Execute.
    pub execute: Option<ExceptionRecord>,
    /// `MisalignedAccess` raised in Memory.
    pub memory: Option<ExceptionRecord>,
    /// The instruction leaving Execute is a load or store, so it can still
    /// raise `MisalignedAccess` next cycle.
    pub memory_pending: bool,
}

/// Selects the fault that freezes the pipeline.
#[derive(Debug)]
pub struct ExceptionController;

impl ExceptionController {
    /// Picks the committed fault for this cycle.
    ///
    /// # Arguments
    ///
    /// * `faults` - Faults detected by each stage.
    /// * `execute_redirects` - Whether Execute resolved a taken branch or register jump.
    ///
    /// # Returns
    ///
    /// The record of the oldest surviving fault.
    pub const fn arbitrate(faults: &StageFaults, execute_redirects: bool) -> Option<ExceptionRecord> {
        if faults.memory.is_some() {
            return faults.memory;
        }
        if faults.execute.is_some() {
            return faults.execute;
        }
        if execute_redirects || faults.memory_pending {
            return None;
        }
        faults.decode
    }

    /// Returns true when a Decode fault must be held in IF/ID for another cycle.
    ///
    /// Only the older load or store leaving Execute can still fault after this
    /// cycle; once it has passed Memory the held instruction decodes again.
    pub const fn defers_decode(faults: &StageFaults, execute_redirects: bool) -> bool {
        faults.decode.is_some()
            && faults.memory_pending
            && faults.execute.is_none()
            && faults.memory.is_none()
            && !execute_redirects
    }
}
