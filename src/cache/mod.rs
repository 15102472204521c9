//! Set-Associative Cache Model.
//!
//! Implements the fixed 4-set x 8-way cache with MRU replacement. Each way
//! is either empty or holds a block tag plus the logical time of its last
//! use; a single monotonically increasing clock orders all accesses.
//!
//! On a conflict miss the *most* recently used way is evicted. This is the
//! inverse of LRU: the way with the maximum `last_used` stamp loses its
//! occupant rather than the minimum.

use crate::common::{NUM_SETS, WAYS};

/// A single occupied cache way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBlock {
    /// The block address resident in this way.
    pub tag: u64,
    /// Logical clock value of the last access to this way.
    pub last_used: u64,
}

/// One set of the cache: exactly [`WAYS`] slots, each possibly empty.
#[derive(Debug, Clone)]
pub struct CacheSet {
    ways: Vec<Option<CacheBlock>>,
}

impl CacheSet {
    fn new() -> Self {
        Self {
            ways: vec![None; WAYS],
        }
    }

    /// Number of occupied ways.
    pub fn occupancy(&self) -> usize {
        self.ways.iter().filter(|w| w.is_some()).count()
    }

    /// Occupied ways in way order, for snapshots and reporting.
    pub fn blocks(&self) -> Vec<CacheBlock> {
        self.ways.iter().flatten().copied().collect()
    }

    /// Looks up a tag, returning the way index if resident.
    fn find(&self, tag: u64) -> Option<usize> {
        self.ways
            .iter()
            .position(|w| w.map(|b| b.tag) == Some(tag))
    }

    /// First empty way, if the set is not full.
    fn free_way(&self) -> Option<usize> {
        self.ways.iter().position(|w| w.is_none())
    }

    /// Selects the MRU victim: the occupied way with the greatest
    /// `last_used` stamp. Strict `>` during the scan means the lowest way
    /// index wins a tie, keeping eviction deterministic.
    ///
    /// Only called on a full set, so a victim always exists.
    fn mru_victim(&self) -> usize {
        let mut victim = 0;
        let mut newest = 0;
        for (i, way) in self.ways.iter().enumerate() {
            if let Some(block) = way {
                if block.last_used > newest {
                    newest = block.last_used;
                    victim = i;
                }
            }
        }
        victim
    }
}

/// Outcome of a single cache access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The block was already resident; its recency stamp was refreshed.
    Hit,
    /// The block was not resident and has been installed.
    ///
    /// `evicted` carries the tag that was displaced when the target set
    /// was full, or `None` when a free way absorbed the block.
    Miss { evicted: Option<u64> },
}

impl AccessOutcome {
    /// Returns `true` for a hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit)
    }
}

/// The fixed-geometry cache: [`NUM_SETS`] sets of [`WAYS`] ways.
///
/// Created empty at the start of a run and discarded at the end; no state
/// survives across runs.
pub struct Cache {
    sets: Vec<CacheSet>,
    clock: u64,
}

impl Cache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            sets: (0..NUM_SETS).map(|_| CacheSet::new()).collect(),
            clock: 0,
        }
    }

    /// Maps a block address to its set index.
    pub fn set_index(block_address: u64) -> usize {
        (block_address % NUM_SETS as u64) as usize
    }

    /// Performs one access and returns its outcome.
    ///
    /// Advances the logical clock, then resolves the address against its
    /// set:
    ///
    /// * resident tag: hit, recency stamp refreshed;
    /// * free way available: miss, block installed;
    /// * set full: miss, the most recently used way is overwritten.
    pub fn access(&mut self, block_address: u64) -> AccessOutcome {
        self.clock += 1;
        let index = Self::set_index(block_address);
        let set = &mut self.sets[index];

        if let Some(way) = set.find(block_address) {
            if let Some(block) = set.ways[way].as_mut() {
                block.last_used = self.clock;
            }
            return AccessOutcome::Hit;
        }

        let incoming = CacheBlock {
            tag: block_address,
            last_used: self.clock,
        };

        if let Some(way) = set.free_way() {
            set.ways[way] = Some(incoming);
            return AccessOutcome::Miss { evicted: None };
        }

        let victim = set.mru_victim();
        let evicted = set.ways[victim].map(|b| b.tag);
        set.ways[victim] = Some(incoming);
        AccessOutcome::Miss { evicted }
    }

    /// Returns `true` if the block is currently resident.
    pub fn contains(&self, block_address: u64) -> bool {
        self.sets[Self::set_index(block_address)]
            .find(block_address)
            .is_some()
    }

    /// Total number of occupied ways across all sets.
    pub fn occupancy(&self) -> usize {
        self.sets.iter().map(CacheSet::occupancy).sum()
    }

    /// The sets in index order, for inspection and reporting.
    pub fn sets(&self) -> &[CacheSet] {
        &self.sets
    }

    /// Per-set occupancy snapshot as `(tag, last_used)` pairs.
    ///
    /// Ordered by set index, then way order within each set.
    pub fn snapshot(&self) -> Vec<Vec<(u64, u64)>> {
        self.sets
            .iter()
            .map(|set| {
                set.blocks()
                    .iter()
                    .map(|b| (b.tag, b.last_used))
                    .collect()
            })
            .collect()
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}
