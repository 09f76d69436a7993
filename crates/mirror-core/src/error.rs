//! Error kinds surfaced by indexing, configuration and plan application

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which side of the mirror a path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeRole {
    /// The tree being mirrored from
    Source,
    /// The tree being mirrored into
    Destination,
}

impl fmt::Display for TreeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Filesystem operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Listing a directory during indexing
    Walk,
    /// Resolving a root path
    Resolve,
    /// Creating a directory and its missing parents
    CreateDirectory,
    /// Copying a file
    CopyFile,
    /// Removing a single file
    RemoveFile,
    /// Removing a directory and its contents
    RemoveDirectory,
    /// Writing to the log file
    WriteLog,
    /// Reading a configuration file
    ReadConfig,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Walk => "read directory",
            Self::Resolve => "resolve path",
            Self::CreateDirectory => "create directory",
            Self::CopyFile => "copy file",
            Self::RemoveFile => "remove file",
            Self::RemoveDirectory => "remove directory",
            Self::WriteLog => "write log file",
            Self::ReadConfig => "read config file",
        };
        f.write_str(verb)
    }
}

/// Errors produced by the mirror library
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// Missing or unusable source/destination argument
    #[error("wrong arguments: {0}")]
    Argument(String),

    /// A root does not exist or is not a directory
    #[error("{role} folder doesn't exist: {}", path.display())]
    NotFound {
        /// Which root was missing
        role: TreeRole,
        /// The path as given
        path: PathBuf,
    },

    /// A filesystem operation failed
    #[error("failed to {operation} {}: {source}", path.display())]
    Io {
        /// What was being attempted
        operation: Operation,
        /// The path it was attempted on
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// A configuration value is out of range or malformed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A configuration file is not valid TOML for the expected schema
    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        /// Offending file
        path: PathBuf,
        /// Parser diagnostic
        #[source]
        source: toml::de::Error,
    },
}

impl MirrorError {
    /// Build an `Io` error for `operation` on `path`
    pub fn io(operation: Operation, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using [`MirrorError`]
pub type Result<T> = std::result::Result<T, MirrorError>;
