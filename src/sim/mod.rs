//! Simulation harness.
//!
//! Couples a generated address sequence to a fresh cache and collects the
//! per-access trace and aggregate statistics for reporting.

/// The simulation runner and its result types.
pub mod runner;

pub use runner::{AccessRecord, Runner, SimulationReport};
