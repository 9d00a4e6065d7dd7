//! Foundation types for the package explorer model.
//!
//! This module provides the data the provider hands over:
//! - [`EntryKind`] - the closed kind taxonomy, with the wire mapping
//! - [`PackageEntry`] - one immutable entry in a package root
//!
//! This module has NO dependencies on other packview modules.

mod entry;

pub use entry::{EntryKind, PackageEntry};
