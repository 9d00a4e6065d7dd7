//! Builds the hierarchical grouping from a flat package list.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::{EntryKind, PackageEntry};
use crate::hierarchy::HierarchicalGroupData;

/// Group a flat list of package entries by their dot-segment structure.
///
/// Only `Package`-kind entries participate; anything else in `entries` is
/// left for leaf materialization. Returns `None` when no package entries
/// remain, otherwise a synthetic root group (empty name) whose `children`
/// are the top-level groups.
///
/// Identical identifiers collapse to one group. Runs of single-child
/// levels with no terminating entry collapse into one group labeled by the
/// joined segments; a branching point, or a level where a package
/// terminates while deeper segments also exist, stays a separate level.
/// Children are ordered ascending by full name at every level.
pub fn build_hierarchy(entries: &[PackageEntry]) -> Option<HierarchicalGroupData> {
    let mut seen: FxHashSet<Arc<str>> = FxHashSet::default();
    let mut root = HierarchicalGroupData::synthetic_root();
    let mut inserted = 0usize;

    for entry in entries {
        if entry.kind != EntryKind::Package {
            continue;
        }
        if entry.name.is_empty() {
            // The default package cannot be segmented; presenting it is the
            // host view's concern.
            debug!("ignoring package entry with empty identifier");
            continue;
        }
        if !seen.insert(entry.name.clone()) {
            continue;
        }
        root.insert(entry);
        inserted += 1;
    }

    if inserted == 0 {
        return None;
    }

    root.collapse_chains();
    root.order_children();
    trace!(
        packages = inserted,
        top_level = root.children.len(),
        "built hierarchical package data"
    );
    Some(root)
}

impl HierarchicalGroupData {
    fn synthetic_root() -> Self {
        Self {
            name: Arc::from(""),
            display_name: SmolStr::default(),
            children: Vec::new(),
            entry: None,
        }
    }

    fn segment(parent_name: &str, label: &str) -> Self {
        let name: Arc<str> = if parent_name.is_empty() {
            Arc::from(label)
        } else {
            Arc::from(format!("{parent_name}.{label}").as_str())
        };
        Self {
            name,
            display_name: SmolStr::new(label),
            children: Vec::new(),
            entry: None,
        }
    }

    fn insert(&mut self, entry: &PackageEntry) {
        if entry.name.as_ref() == self.name.as_ref() {
            self.entry = Some(entry.clone());
            return;
        }
        // The identifier extends this group's name by at least one segment.
        let remainder = if self.name.is_empty() {
            entry.name.as_ref()
        } else {
            &entry.name[self.name.len() + 1..]
        };
        let head = remainder.split('.').next().unwrap_or(remainder);
        match self
            .children
            .iter_mut()
            .find(|child| child.display_name == head)
        {
            Some(child) => child.insert(entry),
            None => {
                let mut child = Self::segment(&self.name, head);
                child.insert(entry);
                self.children.push(child);
            }
        }
    }

    /// Merge pure chains: a run of single-child levels with no terminating
    /// entry becomes one group labeled by the joined segments. The
    /// synthetic root is never merged into its child.
    fn collapse_chains(&mut self) {
        while !self.name.is_empty() && self.children.len() == 1 && self.entry.is_none() {
            let Some(child) = self.children.pop() else {
                break;
            };
            self.display_name = SmolStr::new(format!("{}.{}", self.display_name, child.display_name));
            self.name = child.name;
            self.children = child.children;
            self.entry = child.entry;
        }
        for child in &mut self.children {
            child.collapse_chains();
        }
    }

    fn order_children(&mut self) {
        self.children.sort_by(|a, b| a.name.cmp(&b.name));
        for child in &mut self.children {
            child.order_children();
        }
    }
}
