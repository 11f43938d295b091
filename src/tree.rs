//! Ancestry tree
//!
//! Groups path-keyed items by directory and links them into parent, root,
//! member, sibling and child relationships.

pub mod builder;
pub mod graph;
pub mod node;
pub mod path;
pub mod walker;

pub use builder::TreeBuilder;
pub use graph::{Ancestors, AncestryGraph};
pub use node::{AncestryNode, Links, SiblingList};
pub use path::{basename, group_key, parent_key, Bucket, BucketIndex};
pub use walker::{walk, WalkerConfig};
