//! Error types for manifest loading.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during manifest loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read manifest file.
    #[error("Failed to read manifest {}: {source}", path.display())]
    ReadError {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML manifest.
    #[error("Failed to parse TOML manifest {}: {source}", path.display())]
    TomlParseError {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to parse JSON manifest.
    #[error("Failed to parse JSON manifest {}: {source}", path.display())]
    JsonParseError {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Unsupported manifest format.
    #[error("Unsupported manifest format: {0}")]
    UnsupportedFormat(String),

    /// No manifest file found in the project root.
    #[error("No vendor-copy.toml or package.json found in {}", .0.display())]
    ManifestNotFound(PathBuf),
}
