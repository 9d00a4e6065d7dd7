//! Derived grouping data for the hierarchical package view.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{EntryKind, PackageEntry};

/// One synthetic grouping level in the hierarchical package view.
///
/// A group's `name` is the full dotted identifier from the package root;
/// its `display_name` is the segment label unique at this level, which
/// spans several dot segments when a pure chain was collapsed
/// (`com` → `foo` → `bar` with no branching becomes one group labeled
/// `com.foo.bar`). A group resolves to a real [`PackageEntry`] when a
/// package terminates exactly at its name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HierarchicalGroupData {
    pub(crate) name: Arc<str>,
    pub(crate) display_name: SmolStr,
    pub(crate) children: Vec<HierarchicalGroupData>,
    pub(crate) entry: Option<PackageEntry>,
}

impl HierarchicalGroupData {
    /// The full dotted identifier from the package root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The (possibly multi-segment) label for this level.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Child groups, ordered ascending by full name.
    pub fn children(&self) -> &[HierarchicalGroupData] {
        &self.children
    }

    /// Consume the group, yielding its child groups.
    pub fn into_children(self) -> Vec<HierarchicalGroupData> {
        self.children
    }

    /// The real package entry this group resolves to, when one terminates
    /// exactly at this level.
    pub fn entry(&self) -> Option<&PackageEntry> {
        self.entry.as_ref()
    }

    /// Whether a real package entry terminates at this level.
    pub fn is_package(&self) -> bool {
        self.entry.is_some()
    }

    /// The kind reported to the host: the resolved entry's kind, or
    /// `Package` for a purely synthetic level.
    pub fn kind(&self) -> EntryKind {
        self.entry.as_ref().map_or(EntryKind::Package, |e| e.kind)
    }

    /// Full identifiers of every package entry resolved within this
    /// subtree. Flattening the whole tree reproduces exactly the input
    /// identifier set handed to the builder.
    pub fn package_names(&self) -> Vec<Arc<str>> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names(&self, names: &mut Vec<Arc<str>>) {
        if let Some(entry) = &self.entry {
            names.push(entry.name.clone());
        }
        for child in &self.children {
            child.collect_names(names);
        }
    }
}
