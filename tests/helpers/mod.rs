//! Construction helpers shared by the integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use packview::{EntryKind, EntryProvider, ExplorerNode, PackageEntry, Project, StaticProvider};

pub fn pkg(name: &str) -> PackageEntry {
    PackageEntry::new(name, EntryKind::Package)
}

pub fn pkg_with(name: &str, children: Vec<PackageEntry>) -> PackageEntry {
    pkg(name).with_children(children)
}

pub fn file(name: &str) -> PackageEntry {
    PackageEntry::new(name, EntryKind::File)
}

pub fn folder(name: &str, children: Vec<PackageEntry>) -> PackageEntry {
    PackageEntry::new(name, EntryKind::Folder).with_children(children)
}

pub fn type_root(name: &str) -> PackageEntry {
    PackageEntry::new(name, EntryKind::TypeRoot)
}

pub fn source_root(name: &str, children: Vec<PackageEntry>) -> PackageEntry {
    PackageEntry::new(name, EntryKind::PackageRoot).with_children(children)
}

/// A source root whose children must come from the provider.
pub fn bare_root(name: &str) -> PackageEntry {
    PackageEntry::new(name, EntryKind::PackageRoot)
}

/// A project served entirely by embedded entry children.
pub fn static_project() -> Arc<Project> {
    Project::new("demo", Arc::new(StaticProvider))
}

/// Attach a source root named `src` with the given children; returns the
/// project and the root node.
pub fn attach(children: Vec<PackageEntry>) -> (Arc<Project>, Arc<ExplorerNode>) {
    let project = static_project();
    let root = project
        .attach_root(source_root("src", children))
        .expect("package roots are containers");
    (project, root)
}

/// Attach a source root backed by a custom provider instead of embedded
/// children.
pub fn attach_with_provider(
    provider: Arc<dyn EntryProvider>,
    root_entry: PackageEntry,
) -> (Arc<Project>, Arc<ExplorerNode>) {
    let project = Project::new("demo", provider);
    let root = project
        .attach_root(root_entry)
        .expect("package roots are containers");
    (project, root)
}

/// Names of `node`'s children, in presentation order.
pub fn child_names(node: &Arc<ExplorerNode>) -> Vec<String> {
    node.children()
        .expect("children materialize")
        .iter()
        .map(|child| child.name().to_string())
        .collect()
}
