//! Error types for explorer-model operations.

use std::sync::Arc;

use thiserror::Error;

use crate::base::EntryKind;

/// Errors surfaced while materializing or revealing explorer nodes.
///
/// A failed reveal is not an error: lookups that find nothing resolve to
/// `Ok(None)`. Entries with unrecognized kinds are skipped during child
/// materialization rather than reported.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The data provider failed to supply children for an entry. Propagated
    /// to the caller as-is; this crate never retries.
    #[error("no child data available for `{entry}`: {reason}")]
    DataUnavailable { entry: Arc<str>, reason: String },

    /// An entry whose kind cannot carry children was attached as a package
    /// root.
    #[error("cannot attach `{name}` as a package root: {kind} entries have no children")]
    InvalidRoot { name: Arc<str>, kind: EntryKind },
}

impl ExplorerError {
    /// Create a provider-failure error for `entry`.
    pub fn data_unavailable(entry: impl Into<Arc<str>>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            entry: entry.into(),
            reason: reason.into(),
        }
    }
}
