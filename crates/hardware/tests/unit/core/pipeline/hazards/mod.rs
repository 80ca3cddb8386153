//! Hazard suites.



/// Load-use interlock.
pub mod load_use;
