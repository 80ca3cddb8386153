//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. It performs the following:
//! 1. **Alignment:** Checks every load and store address through the LSU.
//! 2. **Loads:** Reads and extends the addressed lane.
//! 3. **Stores:** Produces a pending store, applied only when the cycle commits.

use crate::common::error::ExceptionRecord;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::core::units::lsu::{DataAccess, Lsu};
use crate::soc::memory::DataMemory;

/// A store computed this cycle and written at commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingStore {
    /// Checked destination.
    pub access: DataAccess,
    /// Value whose low bits are stored.
    pub value: u32,
}

/// Result of the memory stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryOutput {
    /// Entry for the MEM/WB latch.
    pub entry: Option<MemWbEntry>,
    /// Store to apply at commit.
    pub store: Option<PendingStore>,
    /// `MisalignedAccess` raised by this instruction.
    pub fault: Option<ExceptionRecord>,
}

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `ex_mem` - Instruction executed last cycle.
/// * `data`   - Data memory, as committed at the end of last cycle.
pub fn mem_stage(ex_mem: Option<&ExMemEntry>, data: &DataMemory) -> MemoryOutput {
    let Some(ex) = ex_mem else {
        return MemoryOutput::default();
    };
    let ctrl = ex.ctrl;

    let mut load_data = 0;
    let mut store = None;
    if ctrl.mem_read || ctrl.mem_write {
        let access = match Lsu::check(ex.alu, ctrl.mem_width) {
            Ok(access) => access,
            Err(cause) => {
                tracing::debug!(pc = format_args!("{:#010x}", ex.pc), %cause, "MEM fault");
                return MemoryOutput {
                    fault: Some(ExceptionRecord::new(cause, ex.pc)),
                    ..MemoryOutput::default()
                };
            }
        };
        if ctrl.mem_read {
            load_data = Lsu::extend_load(data.load(access), ctrl.mem_width, ctrl.is_unsigned);
            tracing::trace!(addr = format_args!("{:#010x}", ex.alu), load_data, "MEM load");
        } else {
            store = Some(PendingStore {
                access,
                value: ex.store_data,
            });
        }
    }

    MemoryOutput {
        entry: Some(MemWbEntry {
            pc: ex.pc,
            word: ex.word,
            inst: ex.inst,
            ctrl,
            dest: ex.dest,
            alu: ex.alu,
            load_data,
        }),
        store,
        fault: None,
    }
}
