//! AncestryGraph: arena owning every node, bucket and child list of a run.

use crate::item::{Files, Item};
use crate::tree::node::{AncestryNode, SiblingList};
use crate::tree::path::Bucket;
use crate::types::{BucketId, ChildListId, ItemId};
use std::collections::HashMap;
use std::slice;

/// Result of one ancestry run.
///
/// Nodes refer to each other by [`ItemId`]. Bucket and child lists are stored
/// once and every node holding them carries the same [`BucketId`] or
/// [`ChildListId`], so no two nodes can observe diverging copies.
#[derive(Debug, Clone, Default)]
pub struct AncestryGraph {
    pub(crate) nodes: Vec<AncestryNode>,
    pub(crate) lookup: HashMap<String, ItemId>,
    pub(crate) buckets: Vec<Bucket>,
    pub(crate) child_lists: Vec<Vec<ItemId>>,
}

impl AncestryGraph {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.nodes.len()).map(ItemId)
    }

    pub fn nodes(&self) -> &[AncestryNode] {
        &self.nodes
    }

    pub fn node(&self, id: ItemId) -> &AncestryNode {
        &self.nodes[id.0]
    }

    pub fn id_of(&self, path: &str) -> Option<ItemId> {
        self.lookup.get(path).copied()
    }

    pub fn get(&self, path: &str) -> Option<&AncestryNode> {
        self.id_of(path).map(|id| self.node(id))
    }

    pub fn path(&self, id: ItemId) -> &str {
        &self.nodes[id.0].path
    }

    pub fn paths<'a>(&'a self, ids: &'a [ItemId]) -> impl Iterator<Item = &'a str> + 'a {
        ids.iter().map(move |id| self.path(*id))
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn bucket(&self, id: BucketId) -> &Bucket {
        &self.buckets[id.0]
    }

    pub fn child_list(&self, id: ChildListId) -> &[ItemId] {
        &self.child_lists[id.0]
    }

    /// Directory key shared by the item's members.
    pub fn directory_key(&self, id: ItemId) -> &str {
        &self.bucket(self.node(id).members).key
    }

    pub fn members(&self, id: ItemId) -> &[ItemId] {
        &self.bucket(self.node(id).members).members
    }

    pub fn children(&self, id: ItemId) -> Option<&[ItemId]> {
        self.node(id).children.map(|list| self.child_list(list))
    }

    pub fn siblings(&self, id: ItemId) -> &[ItemId] {
        match &self.node(id).siblings {
            SiblingList::Shared(list) => self.child_list(*list),
            SiblingList::Solo(only) => slice::from_ref(only),
        }
    }

    /// Parent chain, nearest first, excluding the item itself.
    pub fn ancestors(&self, id: ItemId) -> Ancestors<'_> {
        Ancestors {
            graph: self,
            next: self.node(id).parent,
        }
    }

    /// Buckets without a parent, in directory-key order: the tops of the
    /// hierarchy, including orphaned deep directories.
    pub fn top_buckets(&self) -> Vec<BucketId> {
        let mut tops: Vec<BucketId> = (0..self.buckets.len())
            .map(BucketId)
            .filter(|id| {
                self.bucket(*id)
                    .first()
                    .map_or(false, |first| self.node(first).parent.is_none())
            })
            .collect();
        tops.sort_by(|a, b| self.bucket(*a).key.cmp(&self.bucket(*b).key));
        tops
    }

    /// Look the item up in the collection the graph was built from.
    pub fn resolve<'f>(&self, files: &'f Files, id: ItemId) -> Option<&'f Item> {
        files.get(self.path(id))
    }
}

/// Iterator over a node's parent chain.
pub struct Ancestors<'g> {
    graph: &'g AncestryGraph,
    next: Option<ItemId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ItemId;

    fn next(&mut self) -> Option<ItemId> {
        let current = self.next?;
        self.next = self.graph.node(current).parent;
        Some(current)
    }
}
