//! Simulation Runner.
//!
//! Feeds an address sequence through a fresh [`Cache`] one access at a
//! time, in sequence order, and accumulates the trace and statistics. One
//! runner owns one cache for exactly one run; nothing persists afterwards.

use crate::cache::{AccessOutcome, Cache};
use crate::common::SimError;
use crate::config::TimingConfig;
use crate::stats::SimStats;

/// One simulated memory reference, immutable once recorded.
#[derive(Debug, Clone)]
pub struct AccessRecord {
    /// The requested block address.
    pub address: u64,
    /// The set the address resolved to.
    pub set_index: usize,
    /// Hit or miss, with the evicted tag on a conflict miss.
    pub outcome: AccessOutcome,
    /// Occupancy of the touched set after the access, as
    /// `(tag, last_used)` pairs in way order.
    pub set_after: Vec<(u64, u64)>,
}

impl AccessRecord {
    /// Renders the trace lines for this access.
    ///
    /// A hit produces one line; a miss adds a second line describing
    /// whether the block filled a free way or replaced the MRU victim.
    pub fn log_lines(&self) -> Vec<String> {
        match self.outcome {
            AccessOutcome::Hit => {
                vec![format!(
                    "Access block {}: HIT in set {}",
                    self.address, self.set_index
                )]
            }
            AccessOutcome::Miss { evicted: None } => vec![
                format!(
                    "Access block {}: MISS in set {}",
                    self.address, self.set_index
                ),
                format!(
                    "Loaded block {} into set {}",
                    self.address, self.set_index
                ),
            ],
            AccessOutcome::Miss {
                evicted: Some(victim),
            } => vec![
                format!(
                    "Access block {}: MISS in set {}",
                    self.address, self.set_index
                ),
                format!(
                    "Replaced block {} with block {} in set {} (MRU replaced)",
                    victim, self.address, self.set_index
                ),
            ],
        }
    }
}

/// Aggregate result of one completed run.
#[derive(Debug)]
pub struct SimulationReport {
    /// One record per access, in sequence order.
    pub records: Vec<AccessRecord>,
    /// Hit/miss counters and derived metrics.
    pub stats: SimStats,
    /// Final per-set cache contents as `(tag, last_used)` pairs.
    pub final_snapshot: Vec<Vec<(u64, u64)>>,
}

/// Drives address sequences through the cache model.
pub struct Runner {
    timing: TimingConfig,
}

impl Runner {
    /// Creates a runner with the given timing constants.
    pub fn new(timing: TimingConfig) -> Self {
        Self { timing }
    }

    /// Runs the full sequence and returns the completed report.
    ///
    /// Accesses are issued strictly in sequence order against a cache
    /// created empty for this run. An empty sequence is rejected with
    /// [`SimError::NoAccesses`] since hit and miss rates would be
    /// undefined.
    pub fn run(&self, addresses: &[u64]) -> Result<SimulationReport, SimError> {
        if addresses.is_empty() {
            return Err(SimError::NoAccesses);
        }

        let mut cache = Cache::new();
        let mut stats = SimStats::new(self.timing.clone());
        let mut records = Vec::with_capacity(addresses.len());

        for &address in addresses {
            let set_index = Cache::set_index(address);
            let outcome = cache.access(address);
            stats.record(outcome.is_hit());
            records.push(AccessRecord {
                address,
                set_index,
                outcome,
                set_after: cache.sets()[set_index]
                    .blocks()
                    .iter()
                    .map(|b| (b.tag, b.last_used))
                    .collect(),
            });
        }

        let final_snapshot = cache.snapshot();
        Ok(SimulationReport {
            records,
            stats,
            final_snapshot,
        })
    }
}
