//! Simulation control and program loading.
//!
//! Provides the [`Simulator`] boundary that hosts drive, and utilities for
//! reading program and data images from disk.

/// Hex and binary image loading.
pub mod loader;

/// Reset/step/run control and state observation.
pub mod simulator;

pub use simulator::{RunExit, Simulator, Snapshot};
