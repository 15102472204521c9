//! Common constants and types used throughout the cache simulator.
//!
//! This module provides the fixed cache geometry and the error taxonomy
//! shared across the configuration, workload, and simulation components.

/// Fixed cache geometry and timing defaults.
pub mod constants;

/// Error types surfaced at the presentation boundary.
pub mod error;

pub use constants::{CACHE_BLOCKS, MIN_MEMORY_BLOCKS, NUM_SETS, REPEAT_COUNT, WAYS};
pub use error::SimError;
