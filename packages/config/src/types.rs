//! Manifest types for vendor-copy.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};

/// A single copy request from a source to a destination.
///
/// Both paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopySpec {
    /// Source path: a file, directory or symlink.
    pub from: String,
    /// Destination path. Missing parent directories are created.
    pub to: String,
}

impl CopySpec {
    /// Create a new copy spec.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Vendor copy manifest.
///
/// Unknown fields are ignored so the manifest can live inside `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Copies performed in every mode.
    #[serde(default)]
    pub vendor_copy: Vec<CopySpec>,

    /// Copies performed only in development mode.
    #[serde(default)]
    pub dev_vendor_copy: Vec<CopySpec>,
}

impl Manifest {
    /// The copy specs to run in `mode`, in manifest order.
    ///
    /// Development mode appends `devVendorCopy` after `vendorCopy`.
    #[must_use]
    pub fn select_specs(&self, mode: Mode) -> Vec<CopySpec> {
        match mode {
            Mode::Production => self.vendor_copy.clone(),
            Mode::Development => self
                .vendor_copy
                .iter()
                .chain(&self.dev_vendor_copy)
                .cloned()
                .collect(),
        }
    }
}

/// Install mode, deciding whether development copies run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Only `vendorCopy` entries.
    Production,
    /// `vendorCopy` followed by `devVendorCopy` entries.
    #[default]
    Development,
}

impl Mode {
    /// Derive the mode from npm-style environment values.
    ///
    /// Production when `npm_config_production` is `"true"` or `NODE_ENV` is
    /// `"production"`, development otherwise. Callers read the environment
    /// and pass the raw values in.
    #[must_use]
    pub fn from_env_values(npm_config_production: Option<&str>, node_env: Option<&str>) -> Self {
        if npm_config_production == Some("true") || node_env == Some("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Development => write!(f, "development"),
        }
    }
}
