//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (reset vector, cycle budget, image bases).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//! 3. **Loading:** JSON parsing from strings and files.
//!
//! Every field has a default, so `{}` is a valid configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{SimError, SimResult};

/// Default configuration constants for the simulator.
mod defaults {
    /// PC loaded by reset.
    pub const RESET_VECTOR: u32 = 0x0000_0000;

    /// Cycle budget for `run_to_completion`.
    ///
    /// Large enough for any test program; a runaway loop still terminates.
    pub const MAX_CYCLES: u64 = 1_000_000;

    /// Base address of the instruction image.
    pub const INSTRUCTION_BASE: u32 = 0x0000_0000;

    /// Base address of the initial data image.
    pub const DATA_BASE: u32 = 0x0000_0000;
}

/// Root simulator configuration.
///
/// # Examples
///
/// ```
/// use mips_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "max_cycles": 500
///     },
///     "memory": {
///         "data_base": 4096
///     }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, 500);
/// assert_eq!(config.general.reset_vector, 0);
/// assert_eq!(config.memory.data_base, 0x1000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Program and data image placement
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the text is not a valid configuration.
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Config`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every retired instruction at `info` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// PC after reset
    #[serde(default = "GeneralConfig::default_reset_vector")]
    pub reset_vector: u32,

    /// Cycle budget used by `run_to_completion`
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Returns the default reset vector.
    const fn default_reset_vector() -> u32 {
        defaults::RESET_VECTOR
    }

    /// Returns the default cycle budget.
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            reset_vector: defaults::RESET_VECTOR,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Image placement used by file loading helpers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Base address for instruction images
    #[serde(default = "MemoryConfig::default_instruction_base")]
    pub instruction_base: u32,

    /// Base address for data images
    #[serde(default = "MemoryConfig::default_data_base")]
    pub data_base: u32,
}

impl MemoryConfig {
    /// Returns the default instruction image base.
    const fn default_instruction_base() -> u32 {
        defaults::INSTRUCTION_BASE
    }

    /// Returns the default data image base.
    const fn default_data_base() -> u32 {
        defaults::DATA_BASE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            instruction_base: defaults::INSTRUCTION_BASE,
            data_base: defaults::DATA_BASE,
        }
    }
}
