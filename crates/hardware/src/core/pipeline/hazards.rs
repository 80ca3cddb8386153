//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when data
//! dependencies exist between instructions. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a one-cycle stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by bypassing the
//!    register file from EX/MEM and MEM/WB into the Execute operands.
//! 3. **Writeback Bypass:** Feeds the value committing this cycle into the Decode read.
//!
//! All decisions are made from the latch contents at the start of the cycle.

use crate::common::constants::REG_ZERO;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry, PipelineLatches};
use crate::isa::decode;

/// Where an Execute operand takes its value from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ForwardSource {
    /// Value read from the register file in Decode.
    #[default]
    RegisterFile,
    /// ALU result of the instruction now in Memory.
    ExMem,
    /// Result of the instruction now in Writeback.
    MemWb,
}

/// Outcome of one cycle's hazard evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HazardDecision {
    /// Hold PC and IF/ID, insert a bubble into ID/EX.
    pub stall: bool,
    /// Source of the `rs` operand of the instruction in Execute.
    pub forward_a: ForwardSource,
    /// Source of the `rt` operand of the instruction in Execute.
    pub forward_b: ForwardSource,
}

/// Load-use hazard detection.
#[derive(Debug)]
pub struct HazardUnit;

impl HazardUnit {
    /// Evaluates hazards against the current latch contents.
    ///
    /// # Arguments
    ///
    /// * `latches` - Pipeline registers at the start of the cycle.
    ///
    /// # Returns
    ///
    /// The stall request and the forwarding selection for the ID/EX operands.
    pub fn evaluate(latches: &PipelineLatches) -> HazardDecision {
        let (forward_a, forward_b) = latches.id_ex.as_ref().map_or(
            (ForwardSource::RegisterFile, ForwardSource::RegisterFile),
            |id| ForwardingUnit::sources_for(id, latches.ex_mem.as_ref(), latches.mem_wb.as_ref()),
        );

        HazardDecision {
            stall: Self::load_use(latches),
            forward_a,
            forward_b,
        }
    }

    /// Checks if a pipeline stall is needed due to a load-use data hazard.
    ///
    /// A load-use hazard occurs when the instruction in Decode reads a register
    /// that the load currently in Execute will produce. Its data only exists at
    /// the end of Memory, one cycle too late for the consumer's Execute.
    ///
    /// # Examples
    ///
    /// ```text
    /// ID/EX: lw  $1, 0($2)    <- loads into $1 (in execute)
    /// IF/ID: add $3, $1, $4   <- uses $1 (in decode)
    /// ```
    pub fn load_use(latches: &PipelineLatches) -> bool {
        let (Some(ex), Some(id)) = (latches.id_ex.as_ref(), latches.if_id.as_ref()) else {
            return false;
        };
        if !ex.ctrl.mem_read {
            return false;
        }
        ex.dest
            .is_some_and(|reg| decode(id.word).reads(reg))
    }
}

/// Operand bypass selection.
#[derive(Debug)]
pub struct ForwardingUnit;

impl ForwardingUnit {
    /// Selects the source for one register operand.
    ///
    /// Priority is EX/MEM over MEM/WB over the register file. Register 0, bubbles
    /// and a load still in EX/MEM never forward.
    pub fn select(
        reg: usize,
        ex_mem: Option<&ExMemEntry>,
        mem_wb: Option<&MemWbEntry>,
    ) -> ForwardSource {
        if reg == REG_ZERO {
            return ForwardSource::RegisterFile;
        }
        if ex_mem.is_some_and(|e| e.writes(reg) && e.forward_value().is_some()) {
            return ForwardSource::ExMem;
        }
        if mem_wb.is_some_and(|w| w.writes(reg)) {
            return ForwardSource::MemWb;
        }
        ForwardSource::RegisterFile
    }

    /// Selects sources for both operand slots of an ID/EX entry.
    ///
    /// Slots the instruction does not read stay on the register file.
    pub fn sources_for(
        id: &IdExEntry,
        ex_mem: Option<&ExMemEntry>,
        mem_wb: Option<&MemWbEntry>,
    ) -> (ForwardSource, ForwardSource) {
        let [rs, rt] = id.inst.sources();
        let pick = |reg: Option<usize>| {
            reg.map_or(ForwardSource::RegisterFile, |r| Self::select(r, ex_mem, mem_wb))
        };
        (pick(rs), pick(rt))
    }

    /// Resolves an operand value from its selected source.
    ///
    /// # Arguments
    ///
    /// * `source`       - Selection made by [`ForwardingUnit::select`].
    /// * `regfile_val`  - Value read in Decode.
    /// * `ex_mem`       - Instruction now in Memory.
    /// * `mem_wb`       - Instruction now in Writeback.
    pub fn operand(
        source: ForwardSource,
        regfile_val: u32,
        ex_mem: Option<&ExMemEntry>,
        mem_wb: Option<&MemWbEntry>,
    ) -> u32 {
        match source {
            ForwardSource::RegisterFile => Some(regfile_val),
            ForwardSource::ExMem => ex_mem.and_then(ExMemEntry::forward_value),
            ForwardSource::MemWb => mem_wb.map(MemWbEntry::result),
        }
        .unwrap_or(regfile_val)
    }

    /// Bypasses the value committing in Writeback into a Decode register read.
    ///
    /// The register file is written at the end of the cycle, so without this a
    /// consumer three instructions behind its producer would read a stale value.
    pub fn bypass_writeback(reg: usize, regfile_val: u32, mem_wb: Option<&MemWbEntry>) -> u32 {
        match mem_wb {
            Some(wb) if reg != REG_ZERO && wb.writes(reg) => wb.result(),
            _ => regfile_val,
        }
    }
}
