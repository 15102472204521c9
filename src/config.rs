use serde::Deserialize;
use std::fs;

use crate::common::{SimError, MIN_MEMORY_BLOCKS};
use crate::workload::Pattern;

const DEFAULT_TOTAL_BLOCKS: u64 = 1024;
const DEFAULT_HIT_TIME: u64 = 1;
const DEFAULT_MISS_PENALTY: u64 = 100;

/// Top-level simulator configuration.
///
/// Loaded from a TOML file and optionally overridden by command-line
/// flags before validation. A validated `Config` is immutable for the
/// duration of a run.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub workload: WorkloadConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

/// Workload parameters: memory size, pattern, and RNG seeding.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkloadConfig {
    /// Total number of memory blocks addressable by the workload.
    #[serde(default = "default_total_blocks")]
    pub total_blocks: u64,

    /// Which synthetic access pattern to generate.
    #[serde(default)]
    pub pattern: Pattern,

    /// Optional RNG seed for the Random pattern.
    ///
    /// When absent, the generator seeds from OS entropy and runs are not
    /// reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Timing constants for the modeled memory access time.
#[derive(Debug, Deserialize, Clone)]
pub struct TimingConfig {
    /// Cost of a cache hit, in time units.
    #[serde(default = "default_hit_time")]
    pub hit_time: u64,

    /// Additional cost of reaching main memory on a miss.
    ///
    /// A miss costs `hit_time + miss_penalty` in total: the cache is
    /// probed first, then memory is accessed.
    #[serde(default = "default_miss_penalty")]
    pub miss_penalty: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            total_blocks: DEFAULT_TOTAL_BLOCKS,
            pattern: Pattern::default(),
            seed: None,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            hit_time: DEFAULT_HIT_TIME,
            miss_penalty: DEFAULT_MISS_PENALTY,
        }
    }
}

impl Config {
    /// Reads and parses a TOML configuration file.
    ///
    /// File and parse errors are reported as `InvalidConfiguration`; the
    /// result is not yet validated (see [`Config::validate`]).
    pub fn load(path: &str) -> Result<Self, SimError> {
        let content = fs::read_to_string(path).map_err(|e| {
            SimError::InvalidConfiguration(format!("failed to read '{}': {}", path, e))
        })?;
        toml::from_str(&content).map_err(|e| {
            SimError::InvalidConfiguration(format!("failed to parse '{}': {}", path, e))
        })
    }

    /// Checks the configuration bounds.
    ///
    /// The only enforced bound is the minimum total memory block count.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.workload.total_blocks < MIN_MEMORY_BLOCKS {
            return Err(SimError::InvalidConfiguration(format!(
                "total_blocks must be at least {} (got {})",
                MIN_MEMORY_BLOCKS, self.workload.total_blocks
            )));
        }
        Ok(())
    }
}

fn default_total_blocks() -> u64 {
    DEFAULT_TOTAL_BLOCKS
}

fn default_hit_time() -> u64 {
    DEFAULT_HIT_TIME
}

fn default_miss_penalty() -> u64 {
    DEFAULT_MISS_PENALTY
}
