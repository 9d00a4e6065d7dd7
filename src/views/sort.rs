//! Ordering applied to leaf entries before they are wrapped as nodes.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::base::PackageEntry;

/// A caller-supplied comparator over leaf entries.
pub type EntryComparator = Arc<dyn Fn(&PackageEntry, &PackageEntry) -> Ordering + Send + Sync>;

/// Direction of the name key in the default leaf ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// How leaf entries are ordered within a container.
///
/// The sort key and direction belong to the surrounding view's
/// configuration, so they are injected rather than fixed. Whatever the
/// order, it only ever touches leaf entries: hierarchical group nodes are
/// computed separately and always precede all leaves.
#[derive(Clone)]
pub enum LeafOrder {
    /// Kind rank (packages, type roots, folders, files), then name. The
    /// direction applies to the name key only; kind buckets keep their
    /// relative order.
    KindThenName(SortDirection),
    /// A view-supplied comparator.
    Custom(EntryComparator),
}

impl Default for LeafOrder {
    fn default() -> Self {
        Self::KindThenName(SortDirection::Ascending)
    }
}

impl LeafOrder {
    /// Stable sort of `entries` in place.
    pub(crate) fn sort(&self, entries: &mut [PackageEntry]) {
        match self {
            Self::KindThenName(direction) => {
                entries.sort_by(|a, b| {
                    let by_name = match direction {
                        SortDirection::Ascending => a.name.cmp(&b.name),
                        SortDirection::Descending => b.name.cmp(&a.name),
                    };
                    a.kind
                        .sort_rank()
                        .cmp(&b.kind.sort_rank())
                        .then(by_name)
                });
            }
            Self::Custom(compare) => entries.sort_by(|a, b| compare(a, b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::EntryKind;

    fn entry(name: &str, kind: EntryKind) -> PackageEntry {
        PackageEntry::new(name, kind)
    }

    fn names(entries: &[PackageEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_ref()).collect()
    }

    #[test]
    fn test_default_order_is_kind_major() {
        let mut entries = vec![
            entry("zz.txt", EntryKind::File),
            entry("assets", EntryKind::Folder),
            entry("Aaa.java", EntryKind::TypeRoot),
        ];
        LeafOrder::default().sort(&mut entries);
        assert_eq!(names(&entries), vec!["Aaa.java", "assets", "zz.txt"]);
    }

    #[test]
    fn test_descending_reverses_names_within_kind() {
        let mut entries = vec![
            entry("a.txt", EntryKind::File),
            entry("b.txt", EntryKind::File),
            entry("assets", EntryKind::Folder),
        ];
        LeafOrder::KindThenName(SortDirection::Descending).sort(&mut entries);
        assert_eq!(names(&entries), vec!["assets", "b.txt", "a.txt"]);
    }

    #[test]
    fn test_custom_comparator_controls_order() {
        let by_length: EntryComparator = Arc::new(|a, b| a.name.len().cmp(&b.name.len()));
        let mut entries = vec![
            entry("longest.txt", EntryKind::File),
            entry("a", EntryKind::File),
            entry("mid.rs", EntryKind::File),
        ];
        LeafOrder::Custom(by_length).sort(&mut entries);
        assert_eq!(names(&entries), vec!["a", "mid.rs", "longest.txt"]);
    }

    #[test]
    fn test_equal_keys_preserve_input_order() {
        let all_equal: EntryComparator = Arc::new(|_, _| Ordering::Equal);
        let mut entries = vec![
            entry("first", EntryKind::File),
            entry("second", EntryKind::File),
            entry("third", EntryKind::File),
        ];
        LeafOrder::Custom(all_equal).sort(&mut entries);
        assert_eq!(names(&entries), vec!["first", "second", "third"]);
    }
}
