//! Ancestry: Deterministic Hierarchy for Path-Keyed Content
//!
//! Turns a flat collection of path-keyed items into a navigable hierarchy.
//! Every item gets its parent, root, directory members, siblings and children,
//! with stable ordering and next/previous links, computed from the path
//! strings alone.

pub mod config;
pub mod error;
pub mod item;
pub mod logging;
pub mod manifest;
pub mod options;
pub mod pipeline;
pub mod sort;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;

pub use error::{AncestryError, Result};
pub use item::{Entry, Files, Item};
pub use options::AncestryOptions;
pub use pipeline::{AncestryPipeline, PipelineBuilder};
pub use sort::{Comparator, MatcherSpec, SortBy};
pub use tree::{AncestryGraph, AncestryNode, SiblingList};
pub use types::{BucketId, ChildListId, ItemId};
