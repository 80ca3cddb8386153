//! Execution unit suites.



/// Load/store unit.
pub mod lsu;
