//! Configuration merging with precedence rules
//!
//! Files are applied from lowest to highest precedence. A key set in a
//! higher-precedence file replaces the value from a lower one; a key left
//! out keeps whatever was set below it.

use std::fs;
use std::path::Path;

use super::discovery::ConfigFiles;
use super::types::Config;
use crate::error::{MirrorError, Operation, Result};

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge the discovered config files
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. .mirror.toml
    /// 3. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if config files cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<Config> {
        let mut merged = Config::default();

        for path in [&files.global, &files.project, &files.cli]
            .into_iter()
            .flatten()
        {
            let layer = Self::load(path)?;
            Self::overlay(&mut merged, layer);
        }

        Ok(merged)
    }

    /// Read and parse a single config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .map_err(|err| MirrorError::io(Operation::ReadConfig, path, err))?;

        toml::from_str(&content).map_err(|source| MirrorError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply every key set in `layer` on top of `base`
    pub fn overlay(base: &mut Config, layer: Config) {
        let Config {
            ignore_name,
            log_file,
            progress_step,
            dry_run,
            assume_yes,
        } = layer;

        base.ignore_name = ignore_name.or(base.ignore_name.take());
        base.log_file = log_file.or(base.log_file.take());
        base.progress_step = progress_step.or(base.progress_step);
        base.dry_run = dry_run.or(base.dry_run);
        base.assume_yes = assume_yes.or(base.assume_yes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_merge_empty_config() {
        let config = ConfigMerger::merge(&ConfigFiles::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_merge_single_config() {
        let tmp = TempDir::new().unwrap();
        let config_file = tmp.path().join("config.toml");
        fs::write(
            &config_file,
            r#"
ignore_name = "private"
progress_step = 25
"#,
        )
        .unwrap();

        let files = ConfigFiles {
            project: Some(config_file),
            ..ConfigFiles::default()
        };

        let config = ConfigMerger::merge(&files).unwrap();

        assert_eq!(config.ignore_name(), "private");
        assert_eq!(config.progress_step(), 25);
    }

    #[test]
    fn test_merge_precedence() {
        let tmp = TempDir::new().unwrap();

        let global = tmp.path().join("global.toml");
        fs::write(&global, "log_file = \"global.log\"\ndry_run = true").unwrap();

        let project = tmp.path().join("project.toml");
        fs::write(&project, "log_file = \"project.log\"").unwrap();

        let cli = tmp.path().join("cli.toml");
        fs::write(&cli, "dry_run = false").unwrap();

        let files = ConfigFiles {
            cli: Some(cli),
            project: Some(project),
            global: Some(global),
        };

        let config = ConfigMerger::merge(&files).unwrap();

        assert_eq!(config.log_file, Some(PathBuf::from("project.log")));
        assert_eq!(config.dry_run, Some(false));
    }

    #[test]
    fn test_merge_reports_parse_errors() {
        let tmp = TempDir::new().unwrap();
        let broken = tmp.path().join("broken.toml");
        fs::write(&broken, "progress_step = \"often\"").unwrap();

        let files = ConfigFiles {
            project: Some(broken.clone()),
            ..ConfigFiles::default()
        };

        match ConfigMerger::merge(&files).unwrap_err() {
            MirrorError::ConfigParse { path, .. } => assert_eq!(path, broken),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_overlay_keeps_unset_keys() {
        let mut base = Config {
            ignore_name: Some("keep".to_string()),
            assume_yes: Some(true),
            ..Config::default()
        };

        ConfigMerger::overlay(
            &mut base,
            Config {
                progress_step: Some(5),
                ..Config::default()
            },
        );

        assert_eq!(base.ignore_name.as_deref(), Some("keep"));
        assert_eq!(base.assume_yes, Some(true));
        assert_eq!(base.progress_step, Some(5));
    }
}
