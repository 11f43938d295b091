//! Directory keys and per-directory buckets.

use crate::types::{BucketId, ItemId};
use std::collections::BTreeMap;

/// Normalized segments of a `/`-separated path, resolved against a synthetic
/// root: empty and `.` segments vanish, `..` removes the previous segment and
/// never climbs above the root.
pub fn normalize_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments
}

/// Directory key of a path: the normalized path with its final segment
/// removed. Top-level paths have the empty key.
pub fn group_key(path: &str) -> String {
    let mut segments = normalize_segments(path);
    segments.pop();
    segments.join("/")
}

/// Directory key one level above `directory_key`, or `None` at the top level.
pub fn parent_key(directory_key: &str) -> Option<String> {
    if directory_key.is_empty() {
        None
    } else {
        Some(group_key(directory_key))
    }
}

/// Final segment of a path, ignoring trailing separators.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Items sharing one directory key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub key: String,
    pub members: Vec<ItemId>,
}

impl Bucket {
    pub fn first(&self) -> Option<ItemId> {
        self.members.first().copied()
    }
}

/// Registry of buckets by directory key.
#[derive(Debug, Default)]
pub struct BucketIndex {
    keys: BTreeMap<String, BucketId>,
    buckets: Vec<Bucket>,
}

impl BucketIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket for `key`, registering an empty one if absent.
    pub fn bucket_for(&mut self, key: &str) -> BucketId {
        if let Some(id) = self.keys.get(key) {
            return *id;
        }
        let id = BucketId(self.buckets.len());
        self.buckets.push(Bucket {
            key: key.to_string(),
            members: Vec::new(),
        });
        self.keys.insert(key.to_string(), id);
        id
    }

    pub fn get(&self, key: &str) -> Option<BucketId> {
        self.keys.get(key).copied()
    }

    pub fn bucket(&self, id: BucketId) -> &Bucket {
        &self.buckets[id.0]
    }

    pub fn bucket_mut(&mut self, id: BucketId) -> &mut Bucket {
        &mut self.buckets[id.0]
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bucket ids in directory-key order.
    pub fn ids(&self) -> impl Iterator<Item = BucketId> + '_ {
        self.keys.values().copied()
    }

    pub fn buckets_mut(&mut self) -> impl Iterator<Item = &mut Bucket> {
        self.buckets.iter_mut()
    }

    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }
}
