//! Fault Arbitration Tests.

use mips_core::common::{ExceptionCause, ExceptionRecord, PipelineStage};
use mips_core::core::arch::{ExceptionController, StageFaults};

#[test]
fn no_faults_no_record() {
    assert_eq!(
        ExceptionController::arbitrate(&StageFaults::default(), false),
        None
    );
}

#[test]
fn record_stage_follows_cause() {
    let overflow = ExceptionRecord::new(ExceptionCause::ArithmeticOverflow, 0x40);
    assert_eq!(overflow.stage, PipelineStage::Execute);
    let misaligned = ExceptionRecord::new(ExceptionCause::MisalignedAccess { address: 3 }, 0x44);
    assert_eq!(misaligned.stage, PipelineStage::Memory);
    let invalid = ExceptionRecord::new(ExceptionCause::InvalidOpcode { word: 0xFFFF_FFFF }, 0x48);
    assert_eq!(invalid.stage, PipelineStage::Decode);
}

#[test]
fn execute_fault_beats_decode_fault() {
    let faults = StageFaults {
        decode: Some(ExceptionRecord::new(
            ExceptionCause::InvalidOpcode { word: 0xFC00_0000 },
            0x8,
        )),
        execute: Some(ExceptionRecord::new(ExceptionCause::ArithmeticOverflow, 0x4)),
        memory: None,
        memory_pending: false,
    };
    let winner = ExceptionController::arbitrate(&faults, false);
    assert_eq!(winner.map(|r| r.faulting_pc), Some(0x4), "older EX fault wins");
}

#[test]
fn display_names_cause_pc_and_stage() {
    let record = ExceptionRecord::new(ExceptionCause::MisalignedAccess { address: 2 }, 0x10);
    assert_eq!(
        record.to_string(),
        "misaligned access at 0x00000002 at pc=0x00000010 (MEM)"
    );
}
