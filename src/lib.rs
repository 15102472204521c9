//! Set-Associative Cache Simulator Library.
//!
//! This crate implements a fixed-geometry cache simulator: an 8-way
//! set-associative cache of 32 blocks (4 sets) with a Most-Recently-Used
//! (MRU) replacement policy, driven by synthetic memory access patterns.
//!
//! # Architecture
//!
//! * **Cache**: 4 sets x 8 ways, block-granular, MRU eviction on conflict.
//! * **Workload**: Sequential, Random, and Mid-Repeat address generators.
//! * **Runner**: feeds a generated sequence through the cache and collects
//!   per-access records plus aggregate statistics.
//!
//! # Modules
//!
//! * `common`: Shared constants and error handling.
//! * `config`: Configuration loading and parsing.
//! * `cache`: The set-associative cache model.
//! * `workload`: Access pattern generators.
//! * `sim`: Simulation harness and reporting types.
//! * `stats`: Performance statistics collection.

/// Shared constants, error types, and re-exports.
///
/// Provides the fixed cache geometry (sets, ways, block count) and the
/// error taxonomy surfaced at the presentation boundary.
pub mod common;

/// Configuration system for workload and timing settings.
///
/// Loads and parses TOML configuration files and merges command-line
/// overrides into an immutable configuration value.
pub mod config;

/// The set-associative cache model.
///
/// Implements set indexing, hit/miss detection, and MRU eviction over a
/// fixed 4-set x 8-way structure with a per-access logical clock.
pub mod cache;

/// Synthetic address pattern generators.
///
/// Produces the Sequential, Random, and Mid-Repeat block address
/// sequences that drive a simulation run.
pub mod workload;

/// Simulation harness and result types.
///
/// Drives a full address sequence through a fresh cache and records the
/// outcome of every access alongside aggregate statistics.
pub mod sim;

/// Performance statistics collection and reporting.
///
/// Tracks hit/miss counts and derives rates and modeled memory access
/// times for the end-of-run report.
pub mod stats;
