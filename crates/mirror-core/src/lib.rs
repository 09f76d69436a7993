//! # mirror-core
//!
//! Core library for one-way directory mirroring.
//!
//! This library indexes a source and a destination tree into flat
//! relative-path maps, diffs them using "same path and same size means
//! identical", orders directory operations so nested creates and removes
//! collapse into the fewest recursive calls, and applies the resulting plan.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error kinds and the crate-wide `Result` alias
pub mod error;

/// Relative-path index types shared by the indexer, diff engine and orderer
pub mod index;

/// Directory tree walking
pub mod scanner;

/// Set differences between two tree indexes
pub mod comparison;

/// Ordering of directory creation and removal
pub mod order;

/// Configuration file parsing and management
pub mod config;

/// Plan building and application
pub mod sync;

pub use error::{MirrorError, Result};
