//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Hazards:** Load-use stall cycles and control-flush bubbles.
//! 4. **Control flow and faults:** Taken branches, taken jumps and raised exceptions.

use std::fmt;

use crate::core::pipeline::signals::ControlSignals;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,

    /// Count of ALU (non-memory, non-control) instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branches retired.
    pub inst_branch: u64,
    /// Count of jumps retired.
    pub inst_jump: u64,

    /// Stall cycles inserted for load-use hazards.
    pub stalls_data: u64,
    /// Bubbles inserted by taken branches and jumps.
    pub flush_bubbles: u64,

    /// Conditional branches that redirected the PC.
    pub branches_taken: u64,
    /// Jumps that redirected the PC.
    pub jumps_taken: u64,

    /// Exceptions raised.
    pub faults: u64,
}

/// Section names for selective stats output.
///
/// Pass an empty slice to [`SimStats::report`] to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "hazards", "instruction_mix"];

impl SimStats {
    /// Counts a retired instruction in the mix.
    pub const fn record_retired(&mut self, ctrl: &ControlSignals) {
        self.instructions_retired += 1;
        if ctrl.mem_read {
            self.inst_load += 1;
        } else if ctrl.mem_write {
            self.inst_store += 1;
        } else if ctrl.is_branch {
            self.inst_branch += 1;
        } else if ctrl.is_jump {
            self.inst_jump += 1;
        } else {
            self.inst_alu += 1;
        }
    }

    /// Instructions per cycle (0 before the first cycle).
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.instructions_retired as f64 / self.cycles as f64
    }

    /// Cycles per instruction (0 before the first retirement).
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            return 0.0;
        }
        self.cycles as f64 / self.instructions_retired as f64
    }

    /// Renders the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an empty
    /// slice renders everything.
    pub fn report(&self, sections: &[&str]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_sections(&mut out, sections);
        out
    }

    fn write_sections(&self, f: &mut impl fmt::Write, sections: &[&str]) -> fmt::Result {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;

        writeln!(f, "==========================================================")?;
        writeln!(f, "MIPS PIPELINE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        if want("summary") {
            writeln!(f, "sim_cycles               {}", self.cycles)?;
            writeln!(f, "sim_insts                {}", self.instructions_retired)?;
            writeln!(f, "sim_ipc                  {:.4}", self.ipc())?;
            writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
            writeln!(f, "sim_faults               {}", self.faults)?;
            writeln!(f, "----------------------------------------------------------")?;
        }
        if want("hazards") {
            writeln!(f, "HAZARDS")?;
            writeln!(
                f,
                "  stalls.data            {} ({:.2}%)",
                self.stalls_data,
                self.stalls_data as f64 / cyc * 100.0
            )?;
            writeln!(
                f,
                "  flush.bubbles          {} ({:.2}%)",
                self.flush_bubbles,
                self.flush_bubbles as f64 / cyc * 100.0
            )?;
            writeln!(f, "  branches.taken         {}", self.branches_taken)?;
            writeln!(f, "  jumps.taken            {}", self.jumps_taken)?;
            writeln!(f, "----------------------------------------------------------")?;
        }
        if want("instruction_mix") {
            writeln!(f, "INSTRUCTION MIX")?;
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.jump", self.inst_jump),
            ] {
                writeln!(
                    f,
                    "  {name:<22} {count} ({:.2}%)",
                    count as f64 / instr * 100.0
                )?;
            }
        }
        writeln!(f, "==========================================================")
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sections(f, &[])
    }
}
