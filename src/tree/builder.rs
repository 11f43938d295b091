//! Relationship builder
//!
//! Runs the linking phases over a complete item set. Every phase reads data
//! the previous phase produced for all items, so each one finishes over the
//! whole set before the next starts.

use crate::item::{Entry, Item};
use crate::sort::Comparator;
use crate::tree::graph::AncestryGraph;
use crate::tree::node::{AncestryNode, Links, SiblingList};
use crate::tree::path::{basename, group_key, parent_key, BucketIndex};
use crate::types::{BucketId, ChildListId, ItemId};
use std::collections::HashMap;
use tracing::debug;

/// Builds an [`AncestryGraph`] from a set of path-keyed items.
pub struct TreeBuilder {
    comparator: Comparator,
}

impl TreeBuilder {
    pub fn new(comparator: Comparator) -> Self {
        Self { comparator }
    }

    /// Build the graph.
    ///
    /// Items are taken in path order regardless of how they are supplied, so
    /// comparator ties always resolve the same way. Repeated paths keep their
    /// first occurrence.
    pub fn build<'f, I>(&self, items: I) -> AncestryGraph
    where
        I: IntoIterator<Item = (&'f str, &'f Item)>,
    {
        let mut entries: Vec<Entry<'f>> = items
            .into_iter()
            .map(|(path, item)| Entry::new(path, item))
            .collect();
        entries.sort_by(|a, b| a.path.cmp(b.path));
        entries.dedup_by(|a, b| a.path == b.path);

        let mut run = Run {
            entries,
            comparator: &self.comparator,
            index: BucketIndex::new(),
            item_bucket: Vec::new(),
        };

        run.collect();
        run.sort_buckets();
        let parents = run.parents();
        let roots = run.roots(&parents);
        let members = run.member_links();
        let (child_lists, bucket_children) = run.children();
        let siblings = run.siblings(&parents, &members, &child_lists, &bucket_children);

        debug!(
            items = run.entries.len(),
            buckets = run.index.len(),
            child_lists = child_lists.len(),
            "Ancestry graph linked"
        );

        run.finish(parents, roots, members, child_lists, bucket_children, siblings)
    }
}

struct Run<'f, 'c> {
    entries: Vec<Entry<'f>>,
    comparator: &'c Comparator,
    index: BucketIndex,
    item_bucket: Vec<BucketId>,
}

impl<'f, 'c> Run<'f, 'c> {
    fn compare(&self, a: ItemId, b: ItemId) -> std::cmp::Ordering {
        (self.comparator)(&self.entries[a.0], &self.entries[b.0])
    }

    /// Phase 1: register every item in its directory bucket.
    fn collect(&mut self) {
        for (i, entry) in self.entries.iter().enumerate() {
            let bucket = self.index.bucket_for(&group_key(entry.path));
            self.index.bucket_mut(bucket).members.push(ItemId(i));
            self.item_bucket.push(bucket);
        }
    }

    /// Phase 2: order every bucket.
    fn sort_buckets(&mut self) {
        let comparator = self.comparator;
        let entries = &self.entries;
        for bucket in self.index.buckets_mut() {
            bucket
                .members
                .sort_by(|a, b| comparator(&entries[a.0], &entries[b.0]));
        }
    }

    /// Phase 3: parent is the first member of the bucket one level up, if
    /// that bucket exists. No search further up.
    fn parents(&self) -> Vec<Option<ItemId>> {
        let bucket_parent: HashMap<BucketId, Option<ItemId>> = self
            .index
            .ids()
            .map(|id| {
                let parent = parent_key(&self.index.bucket(id).key)
                    .and_then(|key| self.index.get(&key))
                    .and_then(|parent| self.index.bucket(parent).first());
                if parent.is_none() && !self.index.bucket(id).key.is_empty() {
                    debug!(directory = %self.index.bucket(id).key, "No parent bucket one level up");
                }
                (id, parent)
            })
            .collect();

        self.item_bucket
            .iter()
            .map(|bucket| bucket_parent.get(bucket).copied().flatten())
            .collect()
    }

    /// Phase 4: follow parents to the top.
    fn roots(&self, parents: &[Option<ItemId>]) -> Vec<ItemId> {
        (0..self.entries.len())
            .map(|i| {
                let mut current = ItemId(i);
                while let Some(parent) = parents[current.0] {
                    current = parent;
                }
                current
            })
            .collect()
    }

    /// Phase 5: position within the item's own bucket.
    fn member_links(&self) -> Vec<Links> {
        self.item_bucket
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                let members = &self.index.bucket(*bucket).members;
                Links::locate(members, ItemId(i)).unwrap_or_else(|| Links::solo(ItemId(i)))
            })
            .collect()
    }

    /// Phase 6: once per bucket, the sorted first members of the buckets
    /// directly below it. Returns the child lists and, per bucket, which list
    /// (if any) its members share.
    fn children(&self) -> (Vec<Vec<ItemId>>, HashMap<BucketId, ChildListId>) {
        let mut child_lists = Vec::new();
        let mut bucket_children = HashMap::new();

        for id in self.index.ids() {
            let key = &self.index.bucket(id).key;
            let mut children: Vec<ItemId> = self
                .index
                .ids()
                .filter(|other| *other != id)
                .filter(|other| {
                    parent_key(&self.index.bucket(*other).key).as_deref() == Some(key.as_str())
                })
                .filter_map(|other| self.index.bucket(other).first())
                .collect();

            if children.is_empty() {
                continue;
            }
            children.sort_by(|a, b| self.compare(*a, *b));
            bucket_children.insert(id, ChildListId(child_lists.len()));
            child_lists.push(children);
        }

        (child_lists, bucket_children)
    }

    /// Phase 7: siblings are the parent's children list, located by the
    /// bucket's first member. Parentless items get a list holding only
    /// themselves, at index 0.
    fn siblings(
        &self,
        parents: &[Option<ItemId>],
        members: &[Links],
        child_lists: &[Vec<ItemId>],
        bucket_children: &HashMap<BucketId, ChildListId>,
    ) -> Vec<(SiblingList, Links)> {
        (0..self.entries.len())
            .map(|i| {
                let first_member = members[i].first;
                let shared = parents[i]
                    .and_then(|parent| bucket_children.get(&self.item_bucket[parent.0]))
                    .and_then(|list| {
                        Links::locate(&child_lists[list.0], first_member)
                            .map(|links| (SiblingList::Shared(*list), links))
                    });
                let own = ItemId(i);
                shared.unwrap_or_else(|| (SiblingList::Solo(own), Links::solo(own)))
            })
            .collect()
    }

    /// Phase 8: assemble nodes and hand ownership to the graph.
    fn finish(
        self,
        parents: Vec<Option<ItemId>>,
        roots: Vec<ItemId>,
        members: Vec<Links>,
        child_lists: Vec<Vec<ItemId>>,
        bucket_children: HashMap<BucketId, ChildListId>,
        siblings: Vec<(SiblingList, Links)>,
    ) -> AncestryGraph {
        let mut nodes = Vec::with_capacity(self.entries.len());
        let mut lookup = HashMap::with_capacity(self.entries.len());

        for (i, entry) in self.entries.iter().enumerate() {
            let id = ItemId(i);
            let bucket = self.item_bucket[i];
            let member = members[i];
            let (sibling_list, sibling) = siblings[i];
            let children = bucket_children.get(&bucket).copied();
            let child_list = children.map(|list| &child_lists[list.0]);

            nodes.push(AncestryNode {
                path: entry.path.to_string(),
                basename: basename(entry.path).to_string(),
                self_id: id,
                members: bucket,
                member_index: member.index,
                first_member: member.first,
                last_member: member.last,
                next_member: member.next,
                prev_member: member.prev,
                parent: parents[i],
                root: roots[i],
                children,
                first_child: child_list.and_then(|list| list.first().copied()),
                last_child: child_list.and_then(|list| list.last().copied()),
                siblings: sibling_list,
                sibling_index: sibling.index,
                first_sibling: sibling.first,
                last_sibling: sibling.last,
                next_sibling: sibling.next,
                prev_sibling: sibling.prev,
            });
            lookup.insert(entry.path.to_string(), id);
        }

        AncestryGraph {
            nodes,
            lookup,
            buckets: self.index.into_buckets(),
            child_lists,
        }
    }
}
