//! Configuration validation and error reporting

use std::path::{Component, Path};

use super::types::Config;
use crate::error::{MirrorError, Result};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::Config`] if a value is out of range.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(name) = &config.ignore_name {
            Self::validate_ignore_name(name)?;
        }

        if let Some(step) = config.progress_step
            && !(1..=100).contains(&step)
        {
            return Err(MirrorError::Config(format!(
                "progress_step must be between 1 and 100, got {step}"
            )));
        }

        if let Some(log_file) = &config.log_file
            && log_file.as_os_str().is_empty()
        {
            return Err(MirrorError::Config("log_file cannot be empty".to_string()));
        }

        Ok(())
    }

    /// The ignore-name is compared against a single directory name
    fn validate_ignore_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(MirrorError::Config("ignore_name cannot be empty".to_string()));
        }

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(MirrorError::Config(format!(
                "ignore_name must be a single directory name, got '{name}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config {
            ignore_name: Some("private".to_string()),
            progress_step: Some(100),
            ..Config::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_ignore_names() {
        for name in ["", "  ", "a/b", "..", ".", "/abs"] {
            let config = Config {
                ignore_name: Some(name.to_string()),
                ..Config::default()
            };
            assert!(
                ConfigValidator::validate(&config).is_err(),
                "'{name}' should be rejected"
            );
        }
    }

    #[test]
    fn test_progress_step_bounds() {
        for (step, valid) in [(0, false), (1, true), (100, true), (101, false)] {
            let config = Config {
                progress_step: Some(step),
                ..Config::default()
            };
            assert_eq!(ConfigValidator::validate(&config).is_ok(), valid, "step {step}");
        }
    }

    #[test]
    fn test_empty_log_file() {
        let config = Config {
            log_file: Some(std::path::PathBuf::new()),
            ..Config::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("log_file"));
    }
}
