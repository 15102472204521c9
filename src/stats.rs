//! Simulation statistics collection and reporting.
//!
//! Tracks hit/miss counts during a run and derives rates and the modeled
//! memory access time for the final report.

use std::time::Instant;

use crate::config::TimingConfig;

/// Hit/miss counters plus the timing model for one run.
///
/// A hit costs `hit_time` units; a miss costs `hit_time + miss_penalty`
/// (the cache is probed before memory is accessed). Rates and averages
/// are derived on demand from the raw counters.
#[derive(Debug)]
pub struct SimStats {
    start_time: Instant,
    timing: TimingConfig,
    pub accesses: u64,
    pub hits: u64,
    pub misses: u64,
}

impl SimStats {
    /// Creates zeroed statistics with the given timing constants.
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            start_time: Instant::now(),
            timing,
            accesses: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Records one access outcome.
    pub fn record(&mut self, hit: bool) {
        self.accesses += 1;
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    /// Fraction of accesses that hit, in `[0, 1]`. Zero for an empty run.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that missed, in `[0, 1]`. Zero for an empty run.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.accesses as f64
        }
    }

    /// Total modeled memory access time, in time units.
    pub fn total_time(&self) -> u64 {
        let miss_cost = self.timing.hit_time + self.timing.miss_penalty;
        self.hits * self.timing.hit_time + self.misses * miss_cost
    }

    /// Average modeled memory access time per access. Zero for an empty run.
    pub fn average_time(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.total_time() as f64 / self.accesses as f64
        }
    }

    /// Prints a formatted summary of the run.
    ///
    /// Displays raw counts, hit/miss rates as percentages, and the modeled
    /// total and average memory access times.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        println!("\n==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("accesses                 {}", self.accesses);
        println!("hits                     {}", self.hits);
        println!("misses                   {}", self.misses);
        println!("hit_rate                 {:.2}%", self.hit_rate() * 100.0);
        println!("miss_rate                {:.2}%", self.miss_rate() * 100.0);
        println!("----------------------------------------------------------");
        println!("TIMING MODEL");
        println!("  hit_time               {} units", self.timing.hit_time);
        println!(
            "  miss_cost              {} units",
            self.timing.hit_time + self.timing.miss_penalty
        );
        println!("  total_access_time      {} units", self.total_time());
        println!("  avg_access_time        {:.4} units", self.average_time());
        println!("==========================================================");
    }
}
