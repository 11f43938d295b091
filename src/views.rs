//! Graph Views
//!
//! Read-only renderings of an ancestry graph. References between items are
//! printed as paths, so the output has no cycles.

use crate::item::Files;
use crate::tree::{AncestryGraph, AncestryNode};
use crate::types::{BucketId, ItemId};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write as _;

/// One ancestry node with every reference resolved to a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub path: String,
    pub basename: String,
    #[serde(rename = "self")]
    pub self_path: String,
    pub parent: Option<String>,
    pub root: String,
    pub members: Vec<String>,
    pub member_index: usize,
    pub first_member: String,
    pub last_member: String,
    pub next_member: Option<String>,
    pub prev_member: Option<String>,
    pub children: Option<Vec<String>>,
    pub first_child: Option<String>,
    pub last_child: Option<String>,
    pub siblings: Vec<String>,
    pub sibling_index: usize,
    pub first_sibling: String,
    pub last_sibling: String,
    pub next_sibling: Option<String>,
    pub prev_sibling: Option<String>,
}

impl NodeView {
    pub fn new(graph: &AncestryGraph, id: ItemId) -> Self {
        let node = graph.node(id);
        let path = |id: ItemId| graph.path(id).to_string();
        let opt = |id: Option<ItemId>| id.map(path);
        let list = |ids: &[ItemId]| ids.iter().copied().map(path).collect::<Vec<_>>();

        Self {
            path: node.path.clone(),
            basename: node.basename.clone(),
            self_path: path(node.self_id),
            parent: opt(node.parent),
            root: path(node.root),
            members: list(graph.members(id)),
            member_index: node.member_index,
            first_member: path(node.first_member),
            last_member: path(node.last_member),
            next_member: opt(node.next_member),
            prev_member: opt(node.prev_member),
            children: graph.children(id).map(list),
            first_child: opt(node.first_child),
            last_child: opt(node.last_child),
            siblings: list(graph.siblings(id)),
            sibling_index: node.sibling_index,
            first_sibling: path(node.first_sibling),
            last_sibling: path(node.last_sibling),
            next_sibling: opt(node.next_sibling),
            prev_sibling: opt(node.prev_sibling),
        }
    }
}

/// The whole collection as JSON: every item's properties, plus its node view
/// under `ancestry_property` when it was enriched.
pub fn render_json(graph: &AncestryGraph, files: &Files, ancestry_property: &str) -> Value {
    let mut out = Map::new();
    for (path, item) in files {
        let mut properties = item.properties.clone();
        if let Some(id) = item.ancestry(ancestry_property) {
            let view = serde_json::to_value(NodeView::new(graph, id)).unwrap_or(Value::Null);
            properties.insert(ancestry_property.to_string(), view);
        }
        out.insert(path.clone(), Value::Object(properties));
    }
    Value::Object(out)
}

/// Indented outline: each directory's members, followed by the directories
/// below it.
pub fn render_tree(graph: &AncestryGraph) -> String {
    let mut out = String::new();
    for bucket in graph.top_buckets() {
        write_bucket(graph, bucket, 0, &mut out);
    }
    out
}

fn write_bucket(graph: &AncestryGraph, bucket: BucketId, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let members = &graph.bucket(bucket).members;
    for id in members {
        let _ = writeln!(out, "{}{}", indent, graph.node(*id).basename);
    }

    let Some(first) = members.first() else {
        return;
    };
    if let Some(children) = graph.children(*first) {
        for child in children {
            let node: &AncestryNode = graph.node(*child);
            let _ = writeln!(out, "{}{}/", indent, directory_name(graph.directory_key(node.self_id)));
            write_bucket(graph, node.members, depth + 1, out);
        }
    }
}

fn directory_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Table with one row per enriched item.
pub fn render_table(graph: &AncestryGraph) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Path", "Parent", "Root", "Member", "Sibling", "Children"]);

    let mut ids: Vec<ItemId> = graph.ids().collect();
    ids.sort_by(|a, b| graph.path(*a).cmp(graph.path(*b)));

    for id in ids {
        let node = graph.node(id);
        table.add_row(vec![
            node.path.clone(),
            node.parent.map(|p| graph.path(p).to_string()).unwrap_or_else(|| "-".to_string()),
            graph.path(node.root).to_string(),
            format!("{}/{}", node.member_index + 1, graph.members(id).len()),
            format!("{}/{}", node.sibling_index + 1, graph.siblings(id).len()),
            graph.children(id).map_or(0, |c| c.len()).to_string(),
        ]);
    }
    table.to_string()
}
