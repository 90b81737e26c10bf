//! Error types for copy orchestration.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use vendor_copy_copy::CopyError;

/// Errors that can occur while copying a batch of specs.
#[derive(Debug, Error)]
pub enum OperationError {
    /// Failed to create the destination's parent directories.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The copy itself failed.
    #[error(transparent)]
    CopyError(#[from] CopyError),
}

/// Broad classification of an [`OperationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The source does not exist or is a dangling link.
    SourceNotFound,
    /// Insufficient rights to read the source or write the destination.
    PermissionDenied,
    /// A destination directory could not be created.
    DirectoryCreation,
    /// IO failure while duplicating bytes or walking a tree.
    Copy,
}

impl OperationError {
    /// The underlying IO error, untouched.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::CreateDirError { source, .. } => Some(source),
            Self::CopyError(e) => e.io_error(),
        }
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        if self
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied)
        {
            return FailureKind::PermissionDenied;
        }

        match self {
            Self::CreateDirError { .. } | Self::CopyError(CopyError::CreateDirError { .. }) => {
                FailureKind::DirectoryCreation
            }
            Self::CopyError(CopyError::SourceNotFound { .. }) => FailureKind::SourceNotFound,
            Self::CopyError(_) => FailureKind::Copy,
        }
    }
}
