//! Integration tests for configuration parsing and validation.

use cachesim::common::SimError;
use cachesim::config::Config;
use cachesim::workload::Pattern;

/// Tests that an empty document yields the documented defaults.
#[test]
fn test_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.workload.total_blocks, 1024);
    assert_eq!(config.workload.pattern, Pattern::Sequential);
    assert_eq!(config.workload.seed, None);
    assert_eq!(config.timing.hit_time, 1);
    assert_eq!(config.timing.miss_penalty, 100);
    assert!(config.validate().is_ok());
}

/// Tests parsing a fully specified document.
#[test]
fn test_full_document() {
    let config: Config = toml::from_str(
        r#"
        [workload]
        total_blocks = 4096
        pattern = "mid-repeat"
        seed = 42

        [timing]
        hit_time = 2
        miss_penalty = 200
        "#,
    )
    .unwrap();

    assert_eq!(config.workload.total_blocks, 4096);
    assert_eq!(config.workload.pattern, Pattern::MidRepeat);
    assert_eq!(config.workload.seed, Some(42));
    assert_eq!(config.timing.hit_time, 2);
    assert_eq!(config.timing.miss_penalty, 200);
}

/// Tests all pattern spellings.
#[test]
fn test_pattern_spellings() {
    for (text, pattern) in [
        ("sequential", Pattern::Sequential),
        ("random", Pattern::Random),
        ("mid-repeat", Pattern::MidRepeat),
    ] {
        let doc = format!("[workload]\npattern = \"{}\"\n", text);
        let config: Config = toml::from_str(&doc).unwrap();
        assert_eq!(config.workload.pattern, pattern);
    }
}

/// Tests that validation rejects a block count below the minimum.
#[test]
fn test_validate_minimum_blocks() {
    let config: Config = toml::from_str("[workload]\ntotal_blocks = 1023\n").unwrap();

    match config.validate() {
        Err(SimError::InvalidConfiguration(msg)) => {
            assert!(msg.contains("1024"));
            assert!(msg.contains("1023"));
        }
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

/// Tests that loading a missing file reports a configuration error.
#[test]
fn test_load_missing_file() {
    let result = Config::load("configs/does-not-exist.toml");
    assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
}
