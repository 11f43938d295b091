//! Caller-owned content items.

use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Path-keyed item collection handed to the pipeline.
pub type Files = BTreeMap<String, Item>;

/// Opaque content record.
///
/// The pipeline reads `properties` for sorting and never changes them. The only
/// thing it writes is the ancestry attachment recorded under the configured
/// ancestry property name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(flatten)]
    pub properties: Map<String, Value>,

    #[serde(skip)]
    attachments: BTreeMap<String, ItemId>,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an item from a JSON object; any other value yields an empty item.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(properties) => Self {
                properties,
                attachments: BTreeMap::new(),
            },
            _ => Self::default(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Node id attached under `ancestry_property`, if this item was enriched.
    pub fn ancestry(&self, ancestry_property: &str) -> Option<ItemId> {
        self.attachments.get(ancestry_property).copied()
    }

    pub fn has_ancestry(&self, ancestry_property: &str) -> bool {
        self.attachments.contains_key(ancestry_property)
    }

    /// Names of every ancestry property attached to this item.
    pub fn attachment_names(&self) -> impl Iterator<Item = &str> {
        self.attachments.keys().map(String::as_str)
    }

    pub(crate) fn attach(&mut self, ancestry_property: &str, id: ItemId) {
        self.attachments.insert(ancestry_property.to_string(), id);
    }
}

/// Borrowed view of one item while it is being ordered.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub path: &'a str,
    pub item: &'a Item,
}

impl<'a> Entry<'a> {
    pub fn new(path: &'a str, item: &'a Item) -> Self {
        Self { path, item }
    }

    pub fn property(&self, name: &str) -> Option<&'a Value> {
        self.item.properties.get(name)
    }
}
