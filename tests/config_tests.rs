//! Integration tests for configuration management

use std::fs;
use std::path::PathBuf;
use studytrack::config::{Config, ConfigOverrides};
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.records_file.is_empty(),
        "Default records_file should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.deadlines.limit, 5);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
records_file = "./records.toml"
reports_dir = "./reports"

[deadlines]
limit = 3
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.records_file, "./records.toml");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.deadlines.limit, 3);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields use serde defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.records_file, "");
    assert_eq!(config.deadlines.limit, 0);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$STUDYTRACK/test.log"

[paths]
records_file = "$STUDYTRACK/records.toml"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("studytrack"));
    assert!(!config.logging.file.contains("$STUDYTRACK"));
    assert!(config.paths.records_file.ends_with("records.toml"));
    assert!(!config.paths.records_file.contains("$STUDYTRACK"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").as_deref(), Some("true"));
    assert!(config.logging.verbose);

    config
        .set("deadline-limit", "9")
        .expect("Failed to set deadline limit");
    assert_eq!(config.deadlines.limit, 9);
    assert_eq!(config.get("deadline_limit").as_deref(), Some("9"));

    config
        .set("records_file", "/data/records.toml")
        .expect("Failed to set records file");
    assert_eq!(config.get("records-file").as_deref(), Some("/data/records.toml"));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("deadline_limit", "-1").is_err());
    assert!(config.set("deadline_limit", "five").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("deadline_limit", "12").expect("Failed to set limit");

    config.unset("level", &defaults).expect("Failed to unset level");
    config
        .unset("deadline_limit", &defaults)
        .expect("Failed to unset limit");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.deadlines.limit, defaults.deadlines.limit);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("deadline_limit", "7").expect("Failed to set limit");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.deadlines.limit, 7);
    assert_eq!(loaded.paths.records_file, config.paths.records_file);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        records_file: Some("/custom/records.toml".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
        deadline_limit: Some(2),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.records_file, "/custom/records.toml");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(config.deadlines.limit, 2);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.records_file, defaults.paths.records_file);
    assert_eq!(config.deadlines.limit, defaults.deadlines.limit);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[deadlines]"));
    assert!(display_str.contains("records_file"));
    assert!(display_str.contains("limit = 5"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(
        config.merge_defaults(&defaults),
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.paths.records_file, defaults.paths.records_file);
    assert_eq!(config.deadlines.limit, defaults.deadlines.limit);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[paths]
records_file = "/my/records.toml"
reports_dir = "/my/reports"

[deadlines]
limit = 10
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.records_file, "/my/records.toml");
    assert_eq!(config.deadlines.limit, 10);
}

#[test]
fn test_get_studytrack_dir() {
    let dir = Config::get_studytrack_dir();

    assert!(dir.to_string_lossy().contains("studytrack"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
