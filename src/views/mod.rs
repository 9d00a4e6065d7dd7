//! The materialized tree behind the hierarchical package view.
//!
//! [`ExplorerNode`] wraps either a provider entry or a derived grouping
//! level, keeps non-owning links to its parent and project, and builds its
//! child list lazily: group nodes first, then the leaf entries in the
//! injected [`LeafOrder`]. Reveal descends this tree matching dotted
//! identifiers against (possibly collapsed) node names.

mod node;
mod reveal;
mod sort;

pub use node::{ChildList, ExplorerNode, NodeVariant};
pub use sort::{EntryComparator, LeafOrder, SortDirection};
