//! The data-provider seam.

use crate::base::PackageEntry;
use crate::error::ExplorerError;

/// Supplies child entries for container entries whose children were not
/// embedded by the host.
///
/// The three outcomes are distinct by contract:
/// - `Ok(Some(children))`: the normal supply (possibly empty);
/// - `Ok(None)`: the entry no longer exists on the provider side; child
///   listings resolve to empty and reveals resolve to not-found, never an
///   error;
/// - `Err(DataUnavailable)`: the provider failed; propagated to the
///   caller untouched and never retried by this crate.
pub trait EntryProvider: Send + Sync {
    fn children_of(&self, entry: &PackageEntry)
    -> Result<Option<Vec<PackageEntry>>, ExplorerError>;
}

/// Provider for trees whose children are embedded in the entries
/// themselves. A container without embedded children yields an empty
/// listing.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticProvider;

impl EntryProvider for StaticProvider {
    fn children_of(
        &self,
        _entry: &PackageEntry,
    ) -> Result<Option<Vec<PackageEntry>>, ExplorerError> {
        Ok(Some(Vec::new()))
    }
}
