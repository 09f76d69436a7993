//! Integration tests for configuration module

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::{Config, ConfigManager};

#[test]
fn test_full_config_workflow() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");

    fs::write(
        &config_file,
        r#"
ignore_name = "no_backup"
log_file = "/var/tmp/mirror.log"
progress_step = 20
dry_run = true
assume_yes = false
"#,
    )
    .unwrap();

    let config = ConfigManager::load(Some(&config_file), false).unwrap();

    assert_eq!(config.ignore_name(), "no_backup");
    assert_eq!(config.log_file(), Path::new("/var/tmp/mirror.log"));
    assert_eq!(config.progress_step(), 20);
    assert!(config.dry_run());
    assert!(!config.assume_yes());
}

#[test]
fn test_invalid_config_validation() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");

    fs::write(&config_file, "progress_step = 0\n").unwrap();

    let result = ConfigManager::load(Some(&config_file), false);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("progress_step"));
}

#[test]
fn test_no_config_skips_files() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");
    fs::write(&config_file, "ignore_name = \"skipped\"\n").unwrap();

    let config = ConfigManager::load(Some(&config_file), true).unwrap();

    assert_eq!(config, Config::default());
}
