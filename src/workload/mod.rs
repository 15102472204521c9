//! Synthetic Address Pattern Generators.
//!
//! Produces the block address sequences that drive a simulation run. All
//! three patterns are sized relative to the cache capacity `n = 32` so a
//! single pass is large enough to force conflict behavior, and every
//! pattern repeats its pass four times.
//!
//! * **Sequential**: addresses `0..2n`, in order.
//! * **Random**: `4n` addresses drawn uniformly from `[0, total_blocks)`.
//! * **Mid-Repeat**: `0..n`, then `1..n` revisited, then `n..2n` — the
//!   middle revisit exercises temporal locality.

use clap::ValueEnum;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::common::{SimError, CACHE_BLOCKS, MIN_MEMORY_BLOCKS, REPEAT_COUNT};
use crate::config::WorkloadConfig;

/// The synthetic access patterns a run can be driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// Linearly increasing addresses.
    #[default]
    Sequential,
    /// Uniformly random addresses over the whole memory.
    Random,
    /// A sequential pass with its middle section revisited.
    MidRepeat,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Sequential => f.write_str("Sequential"),
            Pattern::Random => f.write_str("Random"),
            Pattern::MidRepeat => f.write_str("Mid-Repeat"),
        }
    }
}

/// Generates the full address sequence for a validated workload.
///
/// Rejects a total memory block count below [`MIN_MEMORY_BLOCKS`]; every
/// produced address is `< total_blocks` by construction.
pub fn generate(config: &WorkloadConfig) -> Result<Vec<u64>, SimError> {
    if config.total_blocks < MIN_MEMORY_BLOCKS {
        return Err(SimError::InvalidConfiguration(format!(
            "total_blocks must be at least {} (got {})",
            MIN_MEMORY_BLOCKS, config.total_blocks
        )));
    }

    let n = CACHE_BLOCKS as u64;
    let sequence = match config.pattern {
        Pattern::Sequential => repeat_pass(&(0..2 * n).collect::<Vec<_>>()),
        Pattern::Random => random_sequence(config.total_blocks, config.seed),
        Pattern::MidRepeat => {
            let mut pass: Vec<u64> = (0..n).collect();
            pass.extend(1..n);
            pass.extend(n..2 * n);
            repeat_pass(&pass)
        }
    };
    Ok(sequence)
}

/// Repeats one pattern pass [`REPEAT_COUNT`] times.
fn repeat_pass(pass: &[u64]) -> Vec<u64> {
    let mut sequence = Vec::with_capacity(pass.len() * REPEAT_COUNT);
    for _ in 0..REPEAT_COUNT {
        sequence.extend_from_slice(pass);
    }
    sequence
}

/// Draws `4n` uniform addresses from `[0, total_blocks)`.
///
/// A fixed seed makes the sequence reproducible; without one the RNG is
/// seeded from OS entropy.
fn random_sequence(total_blocks: u64, seed: Option<u64>) -> Vec<u64> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let count = REPEAT_COUNT * CACHE_BLOCKS;
    (0..count).map(|_| rng.gen_range(0..total_blocks)).collect()
}
