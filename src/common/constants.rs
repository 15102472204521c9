//! Fixed cache geometry and workload constants.
//!
//! The simulated cache has a fixed shape: 32 blocks arranged as 4 sets of
//! 8 ways. These are properties of the modeled hardware, not tunables, so
//! they live here rather than in the configuration file.

/// Total number of blocks the cache can hold.
pub const CACHE_BLOCKS: usize = 32;

/// Associativity: ways per set.
pub const WAYS: usize = 8;

/// Number of sets (`CACHE_BLOCKS / WAYS`).
pub const NUM_SETS: usize = CACHE_BLOCKS / WAYS;

/// Minimum accepted total memory block count.
///
/// Configurations below this bound are rejected before a run starts.
pub const MIN_MEMORY_BLOCKS: u64 = 1024;

/// Number of times each generated pattern pass is repeated.
pub const REPEAT_COUNT: usize = 4;
