//! Exception records and host-level errors.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Exception Causes:** The architectural faults a pipeline stage can detect.
//! 2. **Exception Records:** The commit-ordered fault signal the core exposes to its host.
//! 3. **Host Errors:** Loader and configuration failures, reported through `Result`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline stage identifiers.
///
/// Used to tag where an exception was first detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Instruction fetch.
    Fetch,
    /// Instruction decode and register read.
    Decode,
    /// ALU operation and branch resolution.
    Execute,
    /// Data memory access.
    Memory,
    /// Register commit.
    Writeback,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "IF",
            Self::Decode => "ID",
            Self::Execute => "EX",
            Self::Memory => "MEM",
            Self::Writeback => "WB",
        };
        f.write_str(name)
    }
}

/// Architectural fault conditions.
///
/// Each cause belongs to exactly one stage: decode raises `InvalidOpcode`,
/// execute raises `ArithmeticOverflow` and memory raises `MisalignedAccess`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ExceptionCause {
    /// The word does not encode any supported instruction.
    #[error("invalid opcode in word {word:#010x}")]
    InvalidOpcode {
        /// Raw instruction word.
        word: u32,
    },

    /// A trapping signed add or subtract overflowed 32 bits.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    /// A load or store address is not aligned to its access width.
    #[error("misaligned access at {address:#010x}")]
    MisalignedAccess {
        /// Effective address of the access.
        address: u32,
    },
}

impl ExceptionCause {
    /// Returns the stage that detects this cause.
    pub const fn stage(self) -> PipelineStage {
        match self {
            Self::InvalidOpcode { .. } => PipelineStage::Decode,
            Self::ArithmeticOverflow => PipelineStage::Execute,
            Self::MisalignedAccess { .. } => PipelineStage::Memory,
        }
    }
}

/// A fault raised by one in-flight instruction.
///
/// The faulting instruction and everything younger than it are squashed; the
/// record is what the host sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExceptionRecord {
    /// What went wrong.
    pub cause: ExceptionCause,
    /// Address of the faulting instruction.
    pub faulting_pc: u32,
    /// Stage that detected the fault.
    pub stage: PipelineStage,
}

impl ExceptionRecord {
    /// Builds a record for `cause` raised by the instruction at `faulting_pc`.
    ///
    /// The stage is derived from the cause.
    pub const fn new(cause: ExceptionCause, faulting_pc: u32) -> Self {
        Self {
            cause,
            faulting_pc,
            stage: cause.stage(),
        }
    }
}

impl fmt::Display for ExceptionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at pc={:#010x} ({})",
            self.cause, self.faulting_pc, self.stage
        )
    }
}

impl std::error::Error for ExceptionRecord {}

/// Errors raised by the host-facing layers (loader, configuration, image placement).
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration JSON was malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A line of a hex image is not a 32-bit hex word.
    #[error("line {line}: '{text}' is not a 32-bit hex word")]
    MalformedHex {
        /// 1-based line number.
        line: usize,
        /// Offending text after comment stripping.
        text: String,
    },

    /// A binary image length is not a multiple of four bytes.
    #[error("binary image of {len} bytes is not a whole number of words")]
    TruncatedBinary {
        /// Image length in bytes.
        len: usize,
    },

    /// An image base address is not word aligned.
    #[error("image base {base:#010x} is not word aligned")]
    MisalignedBase {
        /// Requested base address.
        base: u32,
    },
}

/// Result alias for host-level operations.
pub type SimResult<T> = Result<T, SimError>;
