//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** One entry type per stage boundary.
//! 2. **Bubbles:** Every latch slot is an `Option`; `None` is an explicit bubble.
//! 3. **Result Selection:** Helpers that pick the value a producer will commit,
//!    shared by forwarding and writeback.

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::pipeline::signals::{ControlSignals, WriteBackSource};
use crate::isa::instruction::Instruction;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction word.
    pub word: u32,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Operand values are the register-file reads made in decode; execute
/// replaces them with forwarded values where the hazard unit says so.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction word.
    pub word: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
    /// First source register index.
    pub rs: usize,
    /// Second source register index.
    pub rt: usize,
    /// Register written at commit (`None` for no write or `$0`).
    pub dest: Option<usize>,
    /// Value read for `rs`.
    pub rs_val: u32,
    /// Value read for `rt`.
    pub rt_val: u32,
    /// Extended immediate.
    pub imm: u32,
    /// Shift amount field.
    pub shamt: u32,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction word.
    pub word: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
    /// Register written at commit.
    pub dest: Option<usize>,
    /// ALU result, or the effective address for loads and stores.
    pub alu: u32,
    /// Value to store (forwarded `rt`).
    pub store_data: u32,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction word.
    pub word: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
    /// Register written at commit.
    pub dest: Option<usize>,
    /// ALU result.
    pub alu: u32,
    /// Extended load data.
    pub load_data: u32,
}

/// Return address written by linking jumps.
const fn link_value(pc: u32) -> u32 {
    pc.wrapping_add(INSTRUCTION_BYTES)
}

impl ExMemEntry {
    /// Returns true if this entry will write `reg` at commit.
    pub fn writes(&self, reg: usize) -> bool {
        self.dest == Some(reg)
    }

    /// Value available for forwarding out of EX/MEM.
    ///
    /// `None` for loads: their data does not exist until the memory stage ends.
    pub const fn forward_value(&self) -> Option<u32> {
        match self.ctrl.reg_write_source {
            WriteBackSource::Alu => Some(self.alu),
            WriteBackSource::LinkRegister => Some(link_value(self.pc)),
            WriteBackSource::Memory => None,
        }
    }
}

impl MemWbEntry {
    /// Returns true if this entry will write `reg` at commit.
    pub fn writes(&self, reg: usize) -> bool {
        self.dest == Some(reg)
    }

    /// Value this entry commits to its destination register.
    pub const fn result(&self) -> u32 {
        match self.ctrl.reg_write_source {
            WriteBackSource::Alu => self.alu,
            WriteBackSource::Memory => self.load_data,
            WriteBackSource::LinkRegister => link_value(self.pc),
        }
    }
}

/// The four pipeline registers.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PipelineLatches {
    /// IF/ID latch.
    pub if_id: Option<IfIdEntry>,
    /// ID/EX latch.
    pub id_ex: Option<IdExEntry>,
    /// EX/MEM latch.
    pub ex_mem: Option<ExMemEntry>,
    /// MEM/WB latch.
    pub mem_wb: Option<MemWbEntry>,
}

impl PipelineLatches {
    /// Returns true when every latch holds a bubble.
    pub const fn is_drained(&self) -> bool {
        self.if_id.is_none() && self.id_ex.is_none() && self.ex_mem.is_none() && self.mem_wb.is_none()
    }

    /// Number of latches holding a valid instruction.
    pub fn occupancy(&self) -> usize {
        usize::from(self.if_id.is_some())
            + usize::from(self.id_ex.is_some())
            + usize::from(self.ex_mem.is_some())
            + usize::from(self.mem_wb.is_some())
    }
}
