//! Core identifier types for the ancestry graph.
//!
//! Nodes never hold references to each other. Every relationship is an index
//! into the arena owned by [`crate::tree::AncestryGraph`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// ItemId: position of an item in the graph's path table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub usize);

/// BucketId: one ordered list of items sharing a directory key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BucketId(pub usize);

/// ChildListId: one sorted list of child-bucket representatives
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChildListId(pub usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
