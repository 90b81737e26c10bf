//! Error types for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// Errors that can occur during copy operations.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Source path does not exist (or is a dangling symlink).
    #[error("Source does not exist {}: {io_error}", path.display())]
    SourceNotFound {
        /// The source path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to get file metadata.
    #[error("Failed to get metadata for {}: {io_error}", path.display())]
    MetadataError {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to create target directory.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to copy a file.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    FileCopyError {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Walking a directory tree failed (unreadable entry, dangling link, link loop).
    #[error("Failed to enumerate directory {}: {walk_error}", path.display())]
    WalkError {
        /// The directory being walked.
        path: PathBuf,
        /// The underlying walk error.
        #[source]
        walk_error: jwalk::Error,
    },

    /// Directory enumeration produced an unusable entry.
    #[error("Failed to enumerate directory {}: {message}", path.display())]
    EnumerationError {
        /// The directory path.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

impl CopyError {
    /// The underlying IO error, if this error was produced by a filesystem call.
    #[must_use]
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::SourceNotFound { io_error, .. }
            | Self::MetadataError { io_error, .. }
            | Self::CreateDirError { io_error, .. }
            | Self::FileCopyError { io_error, .. } => Some(io_error),
            Self::WalkError { walk_error, .. } => walk_error.io_error(),
            Self::EnumerationError { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_is_exposed() {
        let err = CopyError::FileCopyError {
            source_path: PathBuf::from("/a"),
            target_path: PathBuf::from("/b"),
            io_error: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::PermissionDenied)
        );
        assert_eq!(err.to_string(), "Failed to copy /a to /b: denied");
    }

    #[test]
    fn test_enumeration_error_has_no_io_error() {
        let err = CopyError::EnumerationError {
            path: PathBuf::from("/a"),
            message: "loop".to_string(),
        };

        assert!(err.io_error().is_none());
    }
}
