//! Shared fixtures

use ancestry::views::NodeView;
use ancestry::{AncestryGraph, AncestryPipeline, Files, Item};

pub const SITE: [&str; 8] = [
    "index.html",
    "test/page.html",
    "test/index.md",
    "test/image.gif",
    "test/thing.htm",
    "test/folder/index.jade",
    "test/folder2/big.html",
    "test/folder2/index.htm",
];

pub fn files_from(paths: &[&str]) -> Files {
    paths.iter().map(|p| (p.to_string(), Item::new())).collect()
}

/// Run the default pipeline over `files`.
pub fn run_default(files: &mut Files) -> AncestryGraph {
    AncestryPipeline::builder().build().unwrap().run(files)
}

/// Node of `path`, with references rendered as paths.
pub fn view(graph: &AncestryGraph, path: &str) -> NodeView {
    NodeView::new(graph, graph.id_of(path).unwrap())
}

/// Member paths of the bucket holding `path`.
pub fn member_paths(graph: &AncestryGraph, path: &str) -> Vec<String> {
    view(graph, path).members
}
