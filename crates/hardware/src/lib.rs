//! MIPS32 pipeline simulator library.
//!
//! This crate implements a cycle-accurate five-stage MIPS core with the following:
//! 1. **Core:** Pipeline (fetch, decode, execute, memory, writeback), hazard detection,
//!    operand forwarding, branch resolution and precise exceptions.
//! 2. **Memory:** Harvard instruction and data memories with alignment checks.
//! 3. **ISA:** Decoding and disassembly of the MIPS32 integer subset.
//! 4. **Simulation:** Loader, configuration, and statistics collection.
//!
//! # Example
//!
//! ```
//! use mips_core::{Config, Simulator, sim::RunExit};
//!
//! let mut sim = Simulator::new(&Config::default());
//! let program = [
//!     0x2001_0005, // addi $1, $0, 5
//!     0x2002_000A, // addi $2, $0, 10
//!     0x0022_1820, // add  $3, $1, $2
//! ];
//! sim.load_program(&program, 0).unwrap();
//! assert_eq!(sim.run(100), RunExit::Halted);
//! assert_eq!(sim.read_register(3), 15);
//! ```

/// Common types and constants (exception records, host errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU core (pipeline, arch state, execution units).
pub mod core;
/// Instruction set (decode, instruction, disassembly, MIPS32 tables).
pub mod isa;
/// Simulator boundary and image loader.
pub mod sim;
/// Memory subsystem.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, latches, memory and stats.
pub use crate::core::Cpu;
/// Host-facing simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
