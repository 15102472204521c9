//! Integration tests for the address pattern generators.

use cachesim::common::{SimError, CACHE_BLOCKS, REPEAT_COUNT};
use cachesim::config::WorkloadConfig;
use cachesim::workload::{self, Pattern};

/// Builds a workload config for a given pattern with a fixed seed.
fn workload(pattern: Pattern) -> WorkloadConfig {
    WorkloadConfig {
        total_blocks: 1024,
        pattern,
        seed: Some(7),
    }
}

/// Tests that a block count below the minimum is rejected.
#[test]
fn test_rejects_small_memory() {
    let mut config = workload(Pattern::Sequential);
    config.total_blocks = 1023;

    let result = workload::generate(&config);
    assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
}

/// Tests that the minimum block count is accepted.
#[test]
fn test_accepts_minimum_memory() {
    let config = workload(Pattern::Sequential);
    assert!(workload::generate(&config).is_ok());
}

/// Tests the sequential pattern shape: one pass of 0..2n repeated
/// four times.
#[test]
fn test_sequential_shape() {
    let config = workload(Pattern::Sequential);
    let sequence = workload::generate(&config).unwrap();

    let pass_len = 2 * CACHE_BLOCKS;
    assert_eq!(sequence.len(), pass_len * REPEAT_COUNT);

    // First pass counts 0..64 in order.
    for (i, &address) in sequence[..pass_len].iter().enumerate() {
        assert_eq!(address, i as u64);
    }

    // All passes are identical.
    for pass in sequence.chunks(pass_len) {
        assert_eq!(pass, &sequence[..pass_len]);
    }
}

/// Tests the mid-repeat pattern shape: 0..n, then 1..n revisited, then
/// n..2n, repeated four times.
#[test]
fn test_mid_repeat_shape() {
    let config = workload(Pattern::MidRepeat);
    let sequence = workload::generate(&config).unwrap();

    let n = CACHE_BLOCKS as u64;
    let mut expected_pass: Vec<u64> = (0..n).collect();
    expected_pass.extend(1..n);
    expected_pass.extend(n..2 * n);

    assert_eq!(sequence.len(), expected_pass.len() * REPEAT_COUNT);
    for pass in sequence.chunks(expected_pass.len()) {
        assert_eq!(pass, expected_pass.as_slice());
    }
}

/// Tests that the random pattern stays within the memory bound.
#[test]
fn test_random_bounded() {
    let mut config = workload(Pattern::Random);
    config.total_blocks = 2048;
    let sequence = workload::generate(&config).unwrap();

    assert_eq!(sequence.len(), REPEAT_COUNT * CACHE_BLOCKS);
    assert!(sequence.iter().all(|&a| a < 2048));
}

/// Tests that a fixed seed reproduces the random sequence exactly.
#[test]
fn test_random_seed_reproducible() {
    let config = workload(Pattern::Random);

    let first = workload::generate(&config).unwrap();
    let second = workload::generate(&config).unwrap();
    assert_eq!(first, second);

    let mut other = workload(Pattern::Random);
    other.seed = Some(8);
    let third = workload::generate(&other).unwrap();
    assert_ne!(first, third, "Different seeds should diverge");
}

/// Tests that an unseeded random workload still generates a full,
/// bounded sequence.
#[test]
fn test_random_unseeded() {
    let mut config = workload(Pattern::Random);
    config.seed = None;

    let sequence = workload::generate(&config).unwrap();
    assert_eq!(sequence.len(), REPEAT_COUNT * CACHE_BLOCKS);
    assert!(sequence.iter().all(|&a| a < 1024));
}
