//! Path descent over the materialized tree.

use std::sync::Arc;

use tracing::trace;

use crate::base::PackageEntry;
use crate::error::ExplorerError;
use crate::views::node::{ExplorerNode, NodeVariant};

/// Whether `target` names `candidate` itself or a dotted descendant of it.
///
/// Group labels are collapsed multi-segment strings, so a plain
/// next-segment comparison cannot work: `a.b.c` must match the group
/// `a.b`, while `a.bc` must not.
pub(crate) fn segment_prefix_match(target: &str, candidate: &str) -> bool {
    match target.strip_prefix(candidate) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}

fn uri_agrees(target: &PackageEntry, child: &ExplorerNode) -> bool {
    match (&target.uri, child.uri()) {
        (Some(expected), Some(actual)) => expected.as_ref() == actual,
        _ => true,
    }
}

impl ExplorerNode {
    /// Walk the descent path and return the node it identifies, or `None`
    /// when no child matches at some level.
    ///
    /// `paths[0]` is the immediate-descendant identifier to match against
    /// this node's children. Hierarchical levels keep re-evaluating the
    /// same first element: one collapsed group label can span several of
    /// its dot segments, so it is only consumed once a group's full name
    /// has been matched exactly. Children are materialized on demand
    /// through the memoized cache; an entry the provider reports as gone
    /// resolves to `None`, never an error.
    pub fn reveal_paths(
        &self,
        paths: &[PackageEntry],
    ) -> Result<Option<Arc<ExplorerNode>>, ExplorerError> {
        if paths.is_empty() {
            return Ok(None);
        }
        match self.variant() {
            NodeVariant::PackageRoot => self.reveal_grouped(paths),
            NodeVariant::PackageGroup => self.reveal_group(paths),
            NodeVariant::Folder | NodeVariant::File | NodeVariant::TypeRoot => {
                self.reveal_exact(paths)
            }
        }
    }

    /// Descent from the package root: children are matched with the
    /// prefix+dot rule, and the first element is not consumed before
    /// delegating into a group, or the group would lose the segments its
    /// label still has to account for.
    fn reveal_grouped(
        &self,
        paths: &[PackageEntry],
    ) -> Result<Option<Arc<ExplorerNode>>, ExplorerError> {
        let target = &paths[0];
        let children = self.children()?;
        let Some(child) = children
            .iter()
            .find(|child| segment_prefix_match(&target.name, child.name()))
        else {
            trace!(target = target.name.as_ref(), "no child matches target");
            return Ok(None);
        };
        if paths.len() == 1 {
            return Ok(Some(Arc::clone(child)));
        }
        if child.is_package_group() {
            child.reveal_paths(paths)
        } else {
            child.reveal_paths(&paths[1..])
        }
    }

    /// Descent inside a hierarchical group: once the target equals this
    /// group's full name, that path element is consumed and the remaining
    /// path descends into the resolved package's contents.
    fn reveal_group(
        &self,
        paths: &[PackageEntry],
    ) -> Result<Option<Arc<ExplorerNode>>, ExplorerError> {
        let target = &paths[0];
        if target.name.as_ref() == self.name() {
            let rest = &paths[1..];
            return if rest.is_empty() {
                Ok(self.as_shared())
            } else {
                self.reveal_exact(rest)
            };
        }
        let children = self.children()?;
        let Some(child) = children
            .iter()
            .find(|child| segment_prefix_match(&target.name, child.name()))
        else {
            trace!(
                group = self.name(),
                target = target.name.as_ref(),
                "no child matches target"
            );
            return Ok(None);
        };
        if child.is_package_group() {
            child.reveal_paths(paths)
        } else if paths.len() == 1 {
            Ok(Some(Arc::clone(child)))
        } else {
            child.reveal_paths(&paths[1..])
        }
    }

    /// Plain descent: one path element per level, matched by exact name
    /// (and by uri when both sides carry one).
    fn reveal_exact(
        &self,
        paths: &[PackageEntry],
    ) -> Result<Option<Arc<ExplorerNode>>, ExplorerError> {
        let Some((target, rest)) = paths.split_first() else {
            return Ok(None);
        };
        let children = self.children()?;
        let Some(child) = children
            .iter()
            .find(|child| child.name() == target.name.as_ref() && uri_agrees(target, child))
        else {
            return Ok(None);
        };
        if rest.is_empty() {
            Ok(Some(Arc::clone(child)))
        } else {
            child.reveal_paths(rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_identifier_matches() {
        assert!(segment_prefix_match("com.example", "com.example"));
    }

    #[test]
    fn test_descendant_identifier_matches() {
        assert!(segment_prefix_match("com.example.util", "com.example"));
        assert!(segment_prefix_match("a.b.c.d", "a"));
    }

    #[test]
    fn test_sibling_segment_does_not_match() {
        assert!(!segment_prefix_match("com.exampleplus", "com.example"));
        assert!(!segment_prefix_match("com.exam", "com.example"));
        assert!(!segment_prefix_match("org.example", "com.example"));
    }
}
