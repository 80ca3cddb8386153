//! Simulator: the host-facing boundary around one core.
//!
//! Owns the [`Cpu`] and its configuration and exposes program loading,
//! reset/step/run control and read-only observation of committed state.

use std::path::Path;

use crate::common::constants::{INSTRUCTION_BYTES, REG_COUNT};
use crate::common::error::{ExceptionRecord, SimError, SimResult};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::StepOutcome;
use crate::sim::loader;
use crate::stats::SimStats;

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunExit {
    /// The core halted (jump-to-self retired, or it ran off the image).
    Halted,
    /// A fault froze the core and the older instructions have drained.
    Faulted(ExceptionRecord),
    /// The cycle budget ran out first.
    CycleLimit,
}

/// Committed architectural state between cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// All 32 registers, `$0` included.
    pub registers: [u32; REG_COUNT],
    /// Program counter of the next fetch.
    pub pc: u32,
}

/// Top-level simulator.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural and pipeline state.
    pub cpu: Cpu,
    config: Config,
}

/// Rejects image bases that are not word aligned.
const fn check_base(base: u32) -> SimResult<()> {
    if base % INSTRUCTION_BYTES == 0 {
        Ok(())
    } else {
        Err(SimError::MisalignedBase { base })
    }
}

impl Simulator {
    /// Creates a new simulator with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            config: config.clone(),
        }
    }

    /// Configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Places an instruction image at `base`, replacing any previous program.
    ///
    /// In-flight state is not touched; call [`Simulator::reset`] to restart.
    /// A non-empty image that does not cover the reset vector is accepted but
    /// logged at `warn`: such a core halts on its first cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MisalignedBase`] if `base` is not word aligned.
    pub fn load_program(&mut self, words: &[u32], base: u32) -> SimResult<()> {
        check_base(base)?;
        self.cpu.memory.instructions.load(base, words);
        tracing::debug!(words = words.len(), base = format_args!("{base:#010x}"), "program loaded");
        let entry = self.cpu.reset_vector;
        if !words.is_empty() && !self.cpu.memory.instructions.contains(entry) {
            tracing::warn!(
                base = format_args!("{base:#010x}"),
                reset_vector = format_args!("{entry:#010x}"),
                "program image does not contain the reset vector"
            );
        }
        Ok(())
    }

    /// Places an initial data image at `base`; [`Simulator::reset`] restores it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MisalignedBase`] if `base` is not word aligned.
    pub fn load_data(&mut self, words: &[u32], base: u32) -> SimResult<()> {
        check_base(base)?;
        self.cpu.memory.load_data(base, words);
        tracing::debug!(words = words.len(), base = format_args!("{base:#010x}"), "data loaded");
        Ok(())
    }

    /// Loads a program file at the configured instruction base.
    ///
    /// # Errors
    ///
    /// Propagates loader errors and [`SimError::MisalignedBase`].
    pub fn load_program_file(&mut self, path: impl AsRef<Path>) -> SimResult<()> {
        let words = loader::load_image_file(path)?;
        self.load_program(&words, self.config.memory.instruction_base)
    }

    /// Loads a data file at the configured data base.
    ///
    /// # Errors
    ///
    /// Propagates loader errors and [`SimError::MisalignedBase`].
    pub fn load_data_file(&mut self, path: impl AsRef<Path>) -> SimResult<()> {
        let words = loader::load_image_file(path)?;
        self.load_data(&words, self.config.memory.data_base)
    }

    /// Resets registers, latches, statistics and data memory; the PC goes to the reset vector.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Advances the simulator by one clock cycle.
    pub fn step(&mut self) -> StepOutcome {
        self.cpu.step()
    }

    /// Steps until the core halts, a fault has drained, or `max_cycles` elapse.
    pub fn run(&mut self, max_cycles: u64) -> RunExit {
        for _ in 0..max_cycles {
            if let Some(record) = self.drained_fault() {
                return RunExit::Faulted(record);
            }
            if self.step().halted {
                return RunExit::Halted;
            }
        }
        self.drained_fault()
            .map_or(RunExit::CycleLimit, RunExit::Faulted)
    }

    /// Runs with the configured cycle budget.
    pub fn run_to_completion(&mut self) -> RunExit {
        let exit = self.run(self.config.general.max_cycles);
        if exit == RunExit::CycleLimit {
            tracing::warn!(
                max_cycles = self.config.general.max_cycles,
                "cycle budget exhausted"
            );
        }
        self.cpu.dump_state();
        exit
    }

    /// The fault record once nothing older is left in flight.
    fn drained_fault(&self) -> Option<ExceptionRecord> {
        self.cpu
            .frozen
            .filter(|_| self.cpu.latches.is_drained())
    }

    /// Clears a fault freeze and continues fetching at `pc`.
    ///
    /// Older in-flight instructions keep draining; see [`Cpu::resume_at`].
    pub fn resume_at(&mut self, pc: u32) {
        self.cpu.resume_at(pc);
    }

    /// Registers and PC as committed so far.
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            registers: self.cpu.regs.snapshot(),
            pc: self.cpu.pc,
        }
    }

    /// Reads one committed register.
    pub fn read_register(&self, idx: usize) -> u32 {
        self.cpu.regs.read(idx)
    }

    /// Reads the committed data word containing `addr`.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.cpu.memory.data.read_word(addr)
    }

    /// Reads `len` committed data bytes starting at `addr`.
    pub fn read_memory(&self, addr: u32, len: usize) -> Vec<u8> {
        self.cpu.memory.data.read_bytes(addr, len)
    }

    /// Performance counters since the last reset.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Returns true once the core has halted.
    pub const fn is_halted(&self) -> bool {
        self.cpu.halted
    }
}
