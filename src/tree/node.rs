//! Ancestry node: the relationship record attached to every item.

use crate::types::{BucketId, ChildListId, ItemId};
use serde::{Deserialize, Serialize};

/// Where a node's sibling list lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiblingList {
    /// The parent's children list, shared rather than copied
    Shared(ChildListId),
    /// No parent: a list holding only the item itself
    Solo(ItemId),
}

/// Relationships of one item, expressed as ids into the owning graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryNode {
    pub path: String,
    pub basename: String,
    pub self_id: ItemId,

    pub members: BucketId,
    pub member_index: usize,
    pub first_member: ItemId,
    pub last_member: ItemId,
    pub next_member: Option<ItemId>,
    pub prev_member: Option<ItemId>,

    pub parent: Option<ItemId>,
    pub root: ItemId,

    pub children: Option<ChildListId>,
    pub first_child: Option<ItemId>,
    pub last_child: Option<ItemId>,

    pub siblings: SiblingList,
    /// Position of the bucket's first member in `siblings`; 0 when the
    /// item has no parent.
    pub sibling_index: usize,
    pub first_sibling: ItemId,
    pub last_sibling: ItemId,
    pub next_sibling: Option<ItemId>,
    pub prev_sibling: Option<ItemId>,
}

impl AncestryNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_first_member(&self) -> bool {
        self.first_member == self.self_id
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }
}

/// Position of one entry within an ordered list, with its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    pub index: usize,
    pub first: ItemId,
    pub last: ItemId,
    pub next: Option<ItemId>,
    pub prev: Option<ItemId>,
}

impl Links {
    /// Locate `target` in `list`. `None` when the list does not contain it.
    pub fn locate(list: &[ItemId], target: ItemId) -> Option<Self> {
        let index = list.iter().position(|id| *id == target)?;
        Some(Self {
            index,
            first: list[0],
            last: list[list.len() - 1],
            next: list.get(index + 1).copied(),
            prev: index.checked_sub(1).map(|i| list[i]),
        })
    }

    /// Links for a list holding `only`.
    pub fn solo(only: ItemId) -> Self {
        Self {
            index: 0,
            first: only,
            last: only,
            next: None,
            prev: None,
        }
    }
}
