//! Copy orchestration for vendor-copy.
//!
//! Resolves `{from, to}` copy specs against a project root, creates missing
//! destination directories and copies every spec concurrently:
//!
//! * Symlinks are dereferenced, directories are copied recursively
//! * Results keep the order of the input specs
//! * The first failure fails the whole batch
//!
//! # Example
//!
//! ```rust,ignore
//! use vendor_copy_operations::{CopySpec, copy_all};
//!
//! let specs = [CopySpec::new("node_modules/a/a.js", "public/vendor/a.js")];
//! for copied in copy_all(root, &specs)? {
//!     println!("{copied}");
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod apply;
mod error;
mod plan;

pub use apply::{copy_all, copy_one, ensure_parent_dir};
pub use error::{FailureKind, OperationError};
pub use plan::{ResolvedCopy, resolve, resolve_path};
pub use vendor_copy_config::CopySpec;
