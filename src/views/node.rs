//! The materialized explorer tree node.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::debug;

use crate::base::{EntryKind, PackageEntry};
use crate::error::ExplorerError;
use crate::hierarchy::{HierarchicalGroupData, build_hierarchy};
use crate::project::Project;
use crate::views::LeafOrder;

/// The concrete role of an [`ExplorerNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeVariant {
    /// The root of a package namespace; its children are grouped.
    PackageRoot,
    /// A synthetic grouping level from the hierarchical package view.
    PackageGroup,
    /// A plain folder.
    Folder,
    /// A plain file.
    File,
    /// A type root (compilation unit or class file).
    TypeRoot,
}

/// What a node wraps: a provider entry, or a derived grouping level.
#[derive(Clone, Debug)]
enum NodeBacking {
    Entry(PackageEntry),
    Group(HierarchicalGroupData),
}

/// A memoized, shared child list.
pub type ChildList = Arc<Vec<Arc<ExplorerNode>>>;

/// A presentable node in the hierarchical package view.
///
/// Nodes are created on first access of their parent's children and never
/// mutated afterwards, except for the memoized child list, which is rebuilt
/// after [`ExplorerNode::invalidate`]. The parent link and the project link
/// are non-owning; only the root of a subtree keeps it alive top-down.
pub struct ExplorerNode {
    variant: NodeVariant,
    backing: NodeBacking,
    me: Weak<ExplorerNode>,
    parent: Option<Weak<ExplorerNode>>,
    project: Weak<Project>,
    child_cache: Mutex<Option<ChildList>>,
}

impl ExplorerNode {
    pub(crate) fn package_root(entry: PackageEntry, project: Weak<Project>) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            variant: NodeVariant::PackageRoot,
            backing: NodeBacking::Entry(entry),
            me: me.clone(),
            parent: None,
            project,
            child_cache: Mutex::new(None),
        })
    }

    fn group(data: HierarchicalGroupData, parent: &ExplorerNode) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            variant: NodeVariant::PackageGroup,
            backing: NodeBacking::Group(data),
            me: me.clone(),
            parent: Some(parent.me.clone()),
            project: parent.project.clone(),
            child_cache: Mutex::new(None),
        })
    }

    /// Wrap a non-package entry as a leaf or plain-container node. The kind
    /// mapping is exhaustive: kinds that cannot appear as presentable
    /// children here are skipped, so one malformed entry never hides its
    /// siblings.
    fn leaf(entry: PackageEntry, parent: &ExplorerNode) -> Option<Arc<Self>> {
        let variant = match entry.kind {
            EntryKind::Folder => NodeVariant::Folder,
            EntryKind::File => NodeVariant::File,
            EntryKind::TypeRoot => NodeVariant::TypeRoot,
            EntryKind::Package
            | EntryKind::PackageRoot
            | EntryKind::Project
            | EntryKind::Container => {
                debug!(
                    name = entry.name.as_ref(),
                    kind = entry.kind.display(),
                    "skipping child entry with unrecognized kind"
                );
                return None;
            }
        };
        Some(Arc::new_cyclic(|me| Self {
            variant,
            backing: NodeBacking::Entry(entry),
            me: me.clone(),
            parent: Some(parent.me.clone()),
            project: parent.project.clone(),
            child_cache: Mutex::new(None),
        }))
    }

    /// A strong handle to this node.
    pub(crate) fn as_shared(&self) -> Option<Arc<ExplorerNode>> {
        self.me.upgrade()
    }

    /// The node's identifier: the entry name, or the group's full dotted
    /// name.
    pub fn name(&self) -> &str {
        match &self.backing {
            NodeBacking::Entry(entry) => &entry.name,
            NodeBacking::Group(group) => group.name(),
        }
    }

    /// The label to present for this node.
    pub fn label(&self) -> &str {
        match &self.backing {
            NodeBacking::Entry(entry) => entry.label(),
            NodeBacking::Group(group) => group.display_name(),
        }
    }

    /// The entry kind reported to the host view.
    pub fn kind(&self) -> EntryKind {
        match &self.backing {
            NodeBacking::Entry(entry) => entry.kind,
            NodeBacking::Group(group) => group.kind(),
        }
    }

    /// The concrete node role.
    pub fn variant(&self) -> NodeVariant {
        self.variant
    }

    pub fn is_package_group(&self) -> bool {
        matches!(self.variant, NodeVariant::PackageGroup)
    }

    /// The backing entry, when one exists: directly for entry-backed nodes,
    /// through the resolved package for group nodes.
    pub fn entry(&self) -> Option<&PackageEntry> {
        match &self.backing {
            NodeBacking::Entry(entry) => Some(entry),
            NodeBacking::Group(group) => group.entry(),
        }
    }

    /// The grouping data, for hierarchical group nodes.
    pub fn group_data(&self) -> Option<&HierarchicalGroupData> {
        match &self.backing {
            NodeBacking::Group(group) => Some(group),
            NodeBacking::Entry(_) => None,
        }
    }

    /// The navigation uri, when the backing entry carries one.
    pub fn uri(&self) -> Option<&str> {
        self.entry().and_then(|entry| entry.uri.as_deref())
    }

    /// The owning parent node, if it is still alive.
    pub fn parent(&self) -> Option<Arc<ExplorerNode>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// The child nodes, materialized on first call and memoized.
    ///
    /// The cache lock is held across materialization, so a concurrent call
    /// for the same node blocks on and then reuses the in-flight result
    /// instead of recomputing. Failures are returned, not cached; a later
    /// call starts over.
    pub fn children(&self) -> Result<ChildList, ExplorerError> {
        let mut cache = self.child_cache.lock();
        if let Some(list) = cache.as_ref() {
            return Ok(Arc::clone(list));
        }
        let list: ChildList = Arc::new(self.materialize()?);
        *cache = Some(Arc::clone(&list));
        Ok(list)
    }

    /// Drop this node's memoized child list. The next [`children`] call
    /// rebuilds it from the current backing data.
    ///
    /// [`children`]: ExplorerNode::children
    pub fn invalidate(&self) -> Option<ChildList> {
        self.child_cache.lock().take()
    }

    /// Drop the memoized child lists of this node and every already-built
    /// descendant. Nodes never materialized are left untouched.
    pub fn invalidate_subtree(&self) {
        if let Some(children) = self.invalidate() {
            for child in children.iter() {
                child.invalidate_subtree();
            }
        }
    }

    /// Build the child list: group nodes first, then the sorted leaves.
    fn materialize(&self) -> Result<Vec<Arc<ExplorerNode>>, ExplorerError> {
        match &self.backing {
            NodeBacking::Entry(entry) => {
                let Some(entries) = self.supplied_children(entry)? else {
                    // The backing entry disappeared; present nothing.
                    return Ok(Vec::new());
                };
                Ok(self.compose(entries))
            }
            NodeBacking::Group(group) => {
                let mut nodes: Vec<Arc<ExplorerNode>> = group
                    .children()
                    .iter()
                    .map(|child| Self::group(child.clone(), self))
                    .collect();
                if let Some(entry) = group.entry() {
                    if let Some(entries) = self.supplied_children(entry)? {
                        nodes.extend(self.wrap_leaves(entries));
                    }
                }
                Ok(nodes)
            }
        }
    }

    fn compose(&self, entries: Vec<PackageEntry>) -> Vec<Arc<ExplorerNode>> {
        let mut nodes = Vec::new();
        if let Some(root) = build_hierarchy(&entries) {
            nodes.extend(
                root.into_children()
                    .into_iter()
                    .map(|group| Self::group(group, self)),
            );
        }
        let leaves: Vec<PackageEntry> = entries
            .into_iter()
            .filter(|entry| entry.kind != EntryKind::Package)
            .collect();
        nodes.extend(self.wrap_leaves(leaves));
        nodes
    }

    fn wrap_leaves(&self, mut entries: Vec<PackageEntry>) -> Vec<Arc<ExplorerNode>> {
        let order = self
            .project
            .upgrade()
            .map(|project| project.leaf_order().clone())
            .unwrap_or_default();
        order.sort(&mut entries);
        entries
            .into_iter()
            .filter_map(|entry| Self::leaf(entry, self))
            .collect()
    }

    /// The backing children of `entry`: embedded ones when present, the
    /// provider's answer otherwise. `None` means the entry no longer
    /// exists. Leaf kinds never consult the provider.
    fn supplied_children(
        &self,
        entry: &PackageEntry,
    ) -> Result<Option<Vec<PackageEntry>>, ExplorerError> {
        if let Some(children) = &entry.children {
            return Ok(Some(children.clone()));
        }
        if !entry.kind.is_container() {
            return Ok(Some(Vec::new()));
        }
        match self.project.upgrade() {
            Some(project) => project.provider().children_of(entry),
            // The owning project is gone; treat the data as gone with it.
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for ExplorerNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerNode")
            .field("variant", &self.variant)
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
