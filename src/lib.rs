//! # packview-base
//!
//! Core library for hierarchical package explorer views: dot-segment
//! grouping, lazy tree nodes, and reveal.
//!
//! Given the flat package list of a source root, [`build_hierarchy`]
//! groups identifiers by shared dot-segment prefixes into nested synthetic
//! levels, collapsing unbranched chains into one label. [`ExplorerNode`]
//! materializes that grouping (plus files, folders and type roots) into a
//! lazily built tree, and `reveal_paths` walks an externally supplied
//! descent path down to the node it identifies. Rendering, icons and the
//! queries that produce entry data are the host's concern and stay outside
//! this crate.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project    → Project facade, data-provider seam, reveal entry points
//!   ↓
//! views      → ExplorerNode tree, child materialization, reveal descent
//!   ↓
//! hierarchy  → dot-segment grouping (trie build, chain collapse)
//!   ↓
//! base       → Primitives (EntryKind, PackageEntry)
//! ```

/// Foundation types: EntryKind, PackageEntry
pub mod base;

/// Hierarchical grouping: HierarchicalGroupData and its builder
pub mod hierarchy;

/// Materialized tree: ExplorerNode, reveal descent, leaf ordering
pub mod views;

/// Project facade: root registry, provider seam, reveal entry points
pub mod project;

mod error;

// Re-export the working surface at the crate root
pub use base::{EntryKind, PackageEntry};
pub use error::ExplorerError;
pub use hierarchy::{HierarchicalGroupData, build_hierarchy};
pub use project::{EntryProvider, Project, StaticProvider};
pub use views::{ChildList, EntryComparator, ExplorerNode, LeafOrder, NodeVariant, SortDirection};
