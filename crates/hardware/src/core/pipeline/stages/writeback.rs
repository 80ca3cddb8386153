//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! selects the value each instruction commits (ALU result, load data or the
//! link address) and describes the retirement. The register write itself is
//! applied by the engine at the end of the cycle.

use crate::core::pipeline::latches::MemWbEntry;
use crate::isa::instruction::Instruction;

/// An instruction that left the pipeline this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetiredInstruction {
    /// Address of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub word: u32,
    /// Decoded instruction.
    pub instruction: Instruction,
    /// Register write committed, as `(index, value)`.
    pub write: Option<(usize, u32)>,
}

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `mem_wb` - Instruction that finished Memory last cycle.
/// * `trace`  - Log each retirement at `info`.
///
/// # Returns
///
/// The retirement record, or `None` for a bubble.
pub fn wb_stage(mem_wb: Option<&MemWbEntry>, trace: bool) -> Option<RetiredInstruction> {
    let wb = mem_wb?;
    let retired = RetiredInstruction {
        pc: wb.pc,
        word: wb.word,
        instruction: wb.inst,
        write: wb.dest.map(|reg| (reg, wb.result())),
    };

    if trace {
        match retired.write {
            Some((reg, val)) => tracing::info!(
                "WB  pc={:#010x} {:<24} ${reg} <- {val:#010x}",
                retired.pc,
                retired.instruction.to_string()
            ),
            None => tracing::info!("WB  pc={:#010x} {}", retired.pc, retired.instruction),
        }
    }
    Some(retired)
}
