//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, the program counter and the fault freeze.
//! 2. **Pipeline Control:** Owns the four inter-stage latches advanced by the cycle engine.
//! 3. **Memory:** Holds the instruction image and data memory.
//!
//! Only committed effects are visible through the register file and memory;
//! in-flight results live in the latches until Writeback.

use crate::common::error::ExceptionRecord;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::engine::{self, StepOutcome};
use crate::core::pipeline::latches::PipelineLatches;
use crate::soc::memory::MemorySubsystem;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Program Counter of the next fetch.
    pub pc: u32,
    /// Instruction and data memories.
    pub memory: MemorySubsystem,
    /// IF/ID, ID/EX, EX/MEM and MEM/WB latches.
    pub latches: PipelineLatches,
    /// Most recent fault; while set, fetch is stopped and the PC holds.
    pub frozen: Option<ExceptionRecord>,
    /// Halt flag; sticky until reset.
    pub halted: bool,
    /// Enable retirement tracing.
    pub trace: bool,
    /// PC loaded by reset.
    pub reset_vector: u32,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU instance with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A core in the reset state with empty memories.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            pc: config.general.reset_vector,
            memory: MemorySubsystem::default(),
            latches: PipelineLatches::default(),
            frozen: None,
            halted: false,
            trace: config.general.trace_instructions,
            reset_vector: config.general.reset_vector,
            stats: SimStats::default(),
        }
    }

    /// Returns the core to its reset state.
    ///
    /// Clears registers, latches, statistics, the freeze and the halt flag,
    /// restores data memory to its initial image and loads the reset vector.
    /// The instruction image is kept.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.pc = self.reset_vector;
        self.memory.reset_data();
        self.latches = PipelineLatches::default();
        self.frozen = None;
        self.halted = false;
        self.stats = SimStats::default();
    }

    /// Advances the pipeline by one clock cycle.
    pub fn step(&mut self) -> StepOutcome {
        engine::tick(self)
    }

    /// Clears a fault freeze and continues fetching at `pc`.
    ///
    /// Instructions older than the fault that are still in flight keep
    /// draining and commit normally; the faulting instruction and everything
    /// younger were already squashed. Statistics, including `faults`, are
    /// left as they are, and a halted core stays halted until [`Cpu::reset`].
    pub fn resume_at(&mut self, pc: u32) {
        if let Some(record) = self.frozen.take() {
            tracing::debug!(%record, pc = format_args!("{pc:#010x}"), "resuming after fault");
        }
        self.pc = pc;
    }

    /// Logs the current CPU state (PC and registers) at `debug` level.
    pub fn dump_state(&self) {
        tracing::debug!("PC = {:#010x}", self.pc);
        for (i, chunk) in self.regs.snapshot().chunks(4).enumerate() {
            let base = i * 4;
            tracing::debug!(
                "${:<2} {:#010x}  ${:<2} {:#010x}  ${:<2} {:#010x}  ${:<2} {:#010x}",
                base,
                chunk[0],
                base + 1,
                chunk[1],
                base + 2,
                chunk[2],
                base + 3,
                chunk[3]
            );
        }
    }
}
