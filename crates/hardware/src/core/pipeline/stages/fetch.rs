//! Instruction Fetch (IF) Stage.
//!
//! Reads the word at the PC from instruction memory. Fetch always assumes
//! fall-through; redirects are applied by the engine when the next PC is chosen.

use crate::core::pipeline::latches::IfIdEntry;
use crate::soc::memory::InstructionMemory;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `pc`     - Current program counter.
/// * `memory` - Instruction memory.
///
/// # Returns
///
/// The new IF/ID entry, or a bubble when `pc` lies outside the image.
pub fn fetch_stage(pc: u32, memory: &InstructionMemory) -> Option<IfIdEntry> {
    let entry = memory.fetch(pc).map(|word| IfIdEntry { pc, word });
    if entry.is_none() {
        tracing::trace!(pc = format_args!("{pc:#010x}"), "IF idle: pc outside image");
    }
    entry
}
