//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{LogLevel, TabsizeConfig};
use std::path::Path;
use tabsize_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_tabsize_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[resize]
animate = false

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(!config.resize.animate);
    assert_eq!(config.logging.level, LogLevel::Warn);
    // Defaults preserved
    assert!(!config.resize.skip_unchanged_frames);
    assert!((config.window.titlebar_height - 28.0).abs() < f64::EPSILON);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_returns_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[window]\ntitlebar_height = 500.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.window.titlebar_height - 500.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tabsize").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert!(config.resize.animate);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config: TabsizeConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("tabsize"));
        assert!(path_str.ends_with("config.toml"));
    }
}
