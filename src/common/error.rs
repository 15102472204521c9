//! Error types for the cache simulator.
//!
//! The simulator has exactly two failure modes, both raised before or at
//! the start of a run and surfaced directly to the user: a rejected
//! configuration and an empty access sequence. Everything past validation
//! is a total function over its input domain.

use std::error::Error;
use std::fmt;

/// Errors surfaced at the presentation boundary.
///
/// Neither variant is retried; both terminate the run with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The run configuration failed validation.
    ///
    /// Carries a human-readable description of the rejected field,
    /// e.g. a total memory block count below the minimum.
    InvalidConfiguration(String),

    /// The address sequence was empty.
    ///
    /// Hit and miss rates are undefined for zero accesses, so the runner
    /// reports this explicitly instead of dividing by zero.
    NoAccesses,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {}", msg)
            }
            SimError::NoAccesses => {
                write!(f, "address sequence is empty; rates are undefined")
            }
        }
    }
}

impl Error for SimError {}
