//! Tests for TOML configuration loading.

use std::io::Write;
use strictly_games::{Difficulty, EngineConfig};

#[test]
fn test_defaults_for_missing_keys() {
    let config = EngineConfig::from_toml("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(*config.seed(), None);
    assert_eq!(*config.think_delay_ms(), 500);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"hard\"\nseed = 42\nthink_delay_ms = 0").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(*config.think_delay_ms(), 0);
}

#[test]
fn test_unknown_difficulty_is_rejected() {
    let err = EngineConfig::from_toml("difficulty = \"expert\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_or_default_tolerates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = EngineConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_overrides() {
    let config = EngineConfig::default()
        .with_difficulty(Difficulty::Medium)
        .with_seed(7)
        .with_think_delay_ms(10);
    assert_eq!(*config.difficulty(), Difficulty::Medium);
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(*config.think_delay_ms(), 10);
}
