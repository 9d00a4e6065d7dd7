//! Hierarchical grouping of flat package lists.
//!
//! [`build_hierarchy`] turns the `Package`-kind entries of a container into
//! a tree of [`HierarchicalGroupData`]: one level per dot segment, with
//! pure chains collapsed into a single multi-segment label. The grouping is
//! pure derivation: source entries are never mutated, and flattening the
//! result reproduces the input identifier set exactly.

mod builder;
mod group;

pub use builder::build_hierarchy;
pub use group::HierarchicalGroupData;
