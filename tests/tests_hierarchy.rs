//! Hierarchical grouping over flat package lists.

mod helpers;

use helpers::pkg;
use packview::{EntryKind, PackageEntry, build_hierarchy};
use rstest::rstest;

fn build(names: &[&str]) -> packview::HierarchicalGroupData {
    let entries: Vec<PackageEntry> = names.iter().map(|n| pkg(n)).collect();
    build_hierarchy(&entries).expect("non-empty package list")
}

/// Flattening the grouped tree reproduces the input identifier set,
/// whatever the branching shape.
#[rstest]
#[case(&["a.b.c", "a.b.d", "x"])]
#[case(&["com.example.util", "com.example", "com.other.deep.pkg"])]
#[case(&["single"])]
#[case(&["a", "a.b", "a.b.c", "a.c", "b"])]
fn test_flattening_round_trips(#[case] names: &[&str]) {
    let root = build(names);

    let mut flattened: Vec<String> = root
        .package_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    flattened.sort();

    let mut expected: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    expected.sort();

    assert_eq!(flattened, expected);
}

#[test]
fn test_lone_chain_collapses_to_single_group() {
    let root = build(&["a.b.c"]);
    let groups = root.children();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name(), "a.b.c");
    assert_eq!(groups[0].display_name(), "a.b.c");
    assert!(groups[0].children().is_empty());
}

#[test]
fn test_terminal_entry_keeps_its_level_despite_deeper_packages() {
    let root = build(&["a.b", "a.b.c"]);
    let group = &root.children()[0];

    assert_eq!(group.name(), "a.b");
    assert!(group.is_package());
    assert_eq!(group.entry().unwrap().name.as_ref(), "a.b");

    assert_eq!(group.children().len(), 1);
    let child = &group.children()[0];
    assert_eq!(child.display_name(), "c");
    assert_eq!(child.name(), "a.b.c");
    assert!(child.is_package());
}

/// A shared prefix collapses up to the first branching point; each branch
/// then collapses independently.
#[test]
fn test_chains_collapse_between_branch_points() {
    let root = build(&["com.example.data.model", "com.example.data.store", "com.example.net"]);
    let groups = root.children();
    assert_eq!(groups.len(), 1);

    let example = &groups[0];
    assert_eq!(example.name(), "com.example");
    assert_eq!(example.display_name(), "com.example");
    assert!(!example.is_package());

    let names: Vec<&str> = example.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["com.example.data", "com.example.net"]);

    let data = &example.children()[0];
    let leaf_labels: Vec<&str> = data.children().iter().map(|c| c.display_name()).collect();
    assert_eq!(leaf_labels, vec!["model", "store"]);
}

#[rstest]
#[case(&["z", "m.n", "a.b"], &["a.b", "m.n", "z"])]
#[case(&["b.x", "b.a", "a"], &["a", "b"])]
fn test_top_level_groups_sorted_ascending(#[case] names: &[&str], #[case] expected: &[&str]) {
    let root = build(names);
    let actual: Vec<&str> = root.children().iter().map(|c| c.name()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_duplicate_identifiers_produce_one_group() {
    let root = build(&["a.b", "a.b", "a.b"]);
    assert_eq!(root.children().len(), 1);
    assert_eq!(root.package_names().len(), 1);
}

#[test]
fn test_strict_prefix_pair_diverges_at_shared_level() {
    let root = build(&["com.foo", "com.foo.bar"]);
    let groups = root.children();
    assert_eq!(groups.len(), 1);

    let foo = &groups[0];
    assert_eq!(foo.name(), "com.foo");
    assert!(foo.is_package());
    assert_eq!(foo.children().len(), 1);
    assert_eq!(foo.children()[0].name(), "com.foo.bar");
}

#[test]
fn test_mixed_kind_input_only_groups_packages() {
    let entries = vec![
        pkg("com.example"),
        PackageEntry::new("readme.txt", EntryKind::File),
        PackageEntry::new("assets", EntryKind::Folder),
    ];
    let root = build_hierarchy(&entries).unwrap();
    assert_eq!(root.children().len(), 1);
    assert_eq!(root.children()[0].name(), "com.example");
}

#[test]
fn test_no_packages_means_no_grouping() {
    let entries = vec![
        PackageEntry::new("readme.txt", EntryKind::File),
        PackageEntry::new("assets", EntryKind::Folder),
    ];
    assert!(build_hierarchy(&entries).is_none());
    assert!(build_hierarchy(&[]).is_none());
}
