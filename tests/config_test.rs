//! Tests for loading driver configuration from disk.

use std::fs;
use tempfile::TempDir;

use strictly_katas::{ConnectReport, KataConfig};

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("strictly_katas.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
log_filter = "debug"

[bowling]
show_scorecard = false

[connect]
show_path = true

[connect.glyphs]
x = "B"
o = "W"
empty = "_"
"#,
    );

    let config = KataConfig::from_file(&path).unwrap();
    assert_eq!(config.log_filter(), "debug");
    assert!(!*config.bowling().show_scorecard());
    assert!(*config.connect().show_path());
    assert_eq!(config.connect().glyphs().x, 'B');
    assert_eq!(config.connect().glyphs().empty, '_');
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = KataConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, KataConfig::default());
}

#[test]
fn test_load_invalid_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[bowling]\nshow_scorecard = \"sometimes\"\n");

    let err = KataConfig::load_or_default(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_from_file_missing_fails() {
    let dir = TempDir::new().unwrap();
    let err = KataConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_configured_glyphs_parse_boards() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[connect]
show_path = true

[connect.glyphs]
x = "B"
o = "W"
empty = "_"
"#,
    );
    let config = KataConfig::from_file(&path).unwrap();

    let report = ConnectReport::from_text("W _\n W _", config.connect()).unwrap();
    assert_eq!(report.render(), "Winner: O\nPath: (0, 0) -> (1, 0)");
}

#[test]
fn test_load_duplicate_glyphs_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[connect.glyphs]\nx = \"O\"\n");

    let err = KataConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Connect glyphs must be distinct"));
}
