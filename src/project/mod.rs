//! Project facade: owns the attached package roots and the provider seam,
//! and exposes the public reveal entry points.

mod provider;

pub use provider::{EntryProvider, StaticProvider};

use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::trace;

use crate::base::{EntryKind, PackageEntry};
use crate::error::ExplorerError;
use crate::views::{ExplorerNode, LeafOrder};

/// The owning context for one project's package roots.
///
/// The project keeps the only strong references to the root nodes; every
/// node below a root holds non-owning links back to its parent and to the
/// project. Dropping the project (or detaching a root) releases the whole
/// subtree.
pub struct Project {
    name: Arc<str>,
    me: Weak<Project>,
    provider: Arc<dyn EntryProvider>,
    leaf_order: LeafOrder,
    roots: RwLock<IndexMap<Arc<str>, Arc<ExplorerNode>>>,
}

impl Project {
    /// Create a project with the default leaf ordering.
    pub fn new(name: impl Into<Arc<str>>, provider: Arc<dyn EntryProvider>) -> Arc<Self> {
        Self::with_leaf_order(name, provider, LeafOrder::default())
    }

    /// Create a project with a view-configured leaf ordering.
    pub fn with_leaf_order(
        name: impl Into<Arc<str>>,
        provider: Arc<dyn EntryProvider>,
        leaf_order: LeafOrder,
    ) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            name: name.into(),
            me: me.clone(),
            provider,
            leaf_order,
            roots: RwLock::new(IndexMap::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn provider(&self) -> &dyn EntryProvider {
        self.provider.as_ref()
    }

    pub(crate) fn leaf_order(&self) -> &LeafOrder {
        &self.leaf_order
    }

    /// Attach a package root and return its node. Re-attaching a root with
    /// the same name replaces the previous node (and drops its subtree).
    pub fn attach_root(&self, entry: PackageEntry) -> Result<Arc<ExplorerNode>, ExplorerError> {
        if !entry.kind.is_container() {
            return Err(ExplorerError::InvalidRoot {
                name: entry.name.clone(),
                kind: entry.kind,
            });
        }
        let key = entry.name.clone();
        let node = ExplorerNode::package_root(entry, self.me.clone());
        self.roots.write().insert(key, Arc::clone(&node));
        Ok(node)
    }

    /// Remove a package root by name, returning its node when present.
    pub fn detach_root(&self, name: &str) -> Option<Arc<ExplorerNode>> {
        self.roots.write().shift_remove(name)
    }

    /// The attached package roots, in attachment order.
    pub fn package_roots(&self) -> Vec<Arc<ExplorerNode>> {
        self.roots.read().values().cloned().collect()
    }

    /// Look up an attached root by name.
    pub fn root(&self, name: &str) -> Option<Arc<ExplorerNode>> {
        self.roots.read().get(name).cloned()
    }

    /// Drop every memoized child list under every root. The next access
    /// rebuilds from the provider's current data; reloading that data is
    /// the provider's business.
    pub fn refresh(&self) {
        for root in self.package_roots() {
            root.invalidate_subtree();
        }
    }

    /// Reveal a descent path. The leading element names the package root;
    /// the rest descends from just below it down to the target. Returns
    /// `Ok(None)` when the root is unknown or any level fails to match.
    pub fn reveal(
        &self,
        paths: &[PackageEntry],
    ) -> Result<Option<Arc<ExplorerNode>>, ExplorerError> {
        let Some((head, rest)) = paths.split_first() else {
            return Ok(None);
        };
        let Some(root) = self.root(&head.name) else {
            trace!(root = head.name.as_ref(), "reveal against unknown root");
            return Ok(None);
        };
        if rest.is_empty() {
            return Ok(Some(root));
        }
        root.reveal_paths(rest)
    }

    /// Reveal a dotted package identifier under the named root, landing on
    /// the node whose name matches it exactly.
    pub fn reveal_identifier(
        &self,
        root: &str,
        identifier: &str,
    ) -> Result<Option<Arc<ExplorerNode>>, ExplorerError> {
        let Some(root) = self.root(root) else {
            return Ok(None);
        };
        let target = PackageEntry::new(identifier, EntryKind::Package);
        let Some(node) = root.reveal_paths(std::slice::from_ref(&target))? else {
            return Ok(None);
        };
        if node.name() == identifier {
            return Ok(Some(node));
        }
        // The root stops at the outermost matching group; let that group
        // finish consuming the identifier's remaining segments.
        if node.is_package_group() {
            node.reveal_paths(&[target])
        } else {
            Ok(None)
        }
    }
}
