//! Tests for loading the TOML configuration.

use rewind::RewindConfig;
use std::path::PathBuf;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert_eq!(RewindConfig::load(Some(&path)).unwrap(), RewindConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rewind.toml");
    std::fs::write(
        &path,
        "log_file = \"/tmp/rewind-test.log\"\nlog_filter = \"debug,rewind_tictactoe=trace\"\n",
    )
    .unwrap();

    let config = RewindConfig::load(Some(&path)).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind-test.log"));
    assert_eq!(config.log_filter(), "debug,rewind_tictactoe=trace");
    assert!(*config.show_coordinates());
}

#[test]
fn test_invalid_toml_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "show_coordinates = \"sometimes\"\n").unwrap();

    let err = RewindConfig::load(Some(&path)).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
