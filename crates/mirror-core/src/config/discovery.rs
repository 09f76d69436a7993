//! Configuration file discovery from multiple locations

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{MirrorError, Operation, Result};

/// Project config file name, searched from the working directory upwards
pub const PROJECT_CONFIG_NAME: &str = ".mirror.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project config (.mirror.toml)
    pub project: Option<PathBuf>,
    /// Global config in the user config directory
    pub global: Option<PathBuf>,
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files
    ///
    /// # Errors
    ///
    /// Returns an error if `cli_path` is given but is not a file; an explicit
    /// config that cannot be used is never silently skipped.
    pub fn discover(cli_path: Option<&Path>) -> Result<ConfigFiles> {
        let cli = match cli_path {
            Some(path) if path.is_file() => Some(path.to_path_buf()),
            Some(path) => {
                return Err(MirrorError::io(
                    Operation::ReadConfig,
                    path,
                    io::Error::new(io::ErrorKind::NotFound, "config file not found"),
                ));
            }
            None => None,
        };

        let project = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::find_upwards(&cwd, PROJECT_CONFIG_NAME));
        let global = Self::find_global_config();

        Ok(ConfigFiles {
            cli,
            project,
            global,
        })
    }

    /// Find `name` in `start` or its nearest ancestor
    fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Find global config in the platform config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join("mirror").join("config.toml");
        global_config.is_file().then_some(global_config)
    }
}
