//! Member ordering under the sort options

use std::sync::Arc;

use ancestry::sort::{sort_by_property, PathTest};
use ancestry::{AncestryOptions, AncestryPipeline, Entry, Files, Item, MatcherSpec, SortBy};
use serde_json::{json, Value};

use crate::integration::support::{files_from, member_paths, view};

fn with_properties(items: &[(&str, Value)]) -> Files {
    items
        .iter()
        .map(|(path, props)| (path.to_string(), Item::from_value(props.clone())))
        .collect()
}

fn order_with(pipeline: AncestryPipeline, mut files: Files) -> String {
    let graph = pipeline.run(&mut files);
    member_paths(&graph, "a").join(",")
}

fn abcd() -> Files {
    with_properties(&[
        ("a", json!({"name": "a"})),
        ("b", json!({"name": "b"})),
        ("c", json!({"name": "c"})),
        ("d", json!({"name": "d"})),
    ])
}

fn files_first(matchers: Vec<MatcherSpec>) -> AncestryPipeline {
    AncestryPipeline::builder()
        .sort_files_first(matchers)
        .build()
        .unwrap()
}

#[test]
fn reverse_flips_members() {
    let mut files = files_from(&["a", "b"]);
    let graph = AncestryPipeline::builder()
        .reverse(true)
        .build()
        .unwrap()
        .run(&mut files);

    let a = view(&graph, "a");
    assert_eq!(a.members, vec!["b", "a"]);
    assert_eq!(a.first_member, "b");
    assert_eq!(a.last_member, "a");
    assert_eq!(a.next_member, None);
    assert_eq!(a.prev_member, Some("b".to_string()));
}

#[test]
fn custom_comparator() {
    let files = with_properties(&[
        ("a", json!({"order": 1})),
        ("b", json!({"order": 3})),
        ("c", json!({"order": 2})),
    ]);
    let pipeline = AncestryPipeline::builder()
        .sort_by(SortBy::Custom(Arc::new(|a: &Entry<'_>, b: &Entry<'_>| {
            let key = |e: &Entry<'_>| e.property("order").and_then(Value::as_i64);
            key(a).cmp(&key(b))
        })))
        .build()
        .unwrap();
    assert_eq!(order_with(pipeline, files), "a,c,b");
}

#[test]
fn single_property() {
    let files = with_properties(&[
        ("a", json!({"order": 1})),
        ("b", json!({"order": 3})),
        ("c", json!({"order": 2})),
    ]);
    let pipeline = AncestryPipeline::builder()
        .sort_by(SortBy::property("order"))
        .build()
        .unwrap();
    assert_eq!(order_with(pipeline, files), "a,c,b");
}

#[test]
fn multiple_properties_break_ties_in_order() {
    let files = with_properties(&[
        ("a", json!({"first": 1, "second": 3, "third": 1})),
        ("b", json!({"first": 1, "second": 3, "third": 2})),
        ("c", json!({"first": 1, "second": 2, "third": 1})),
    ]);
    let pipeline = AncestryPipeline::builder()
        .sort_by(SortBy::properties(["first", "second", "third"]))
        .build()
        .unwrap();
    assert_eq!(order_with(pipeline, files), "c,a,b");
}

#[test]
fn sort_by_from_options() {
    let files = with_properties(&[
        ("a", json!({"order": 1})),
        ("b", json!({"order": 3})),
        ("c", json!({"order": 2})),
    ]);
    let options: AncestryOptions = serde_json::from_value(json!({"sort_by": "order"})).unwrap();
    let pipeline = AncestryPipeline::new(&options).unwrap();
    assert_eq!(order_with(pipeline, files), "a,c,b");
}

#[test]
fn property_comparator_sorts_numbers_numerically() {
    let files = with_properties(&[
        ("a", json!({"n": 10})),
        ("b", json!({"n": 9})),
        ("c", json!({})),
    ]);
    let pipeline = AncestryPipeline::builder()
        .sort_by(SortBy::Custom(sort_by_property("n")))
        .build()
        .unwrap();
    assert_eq!(order_with(pipeline, files), "c,b,a");
}

#[test]
fn null_files_first_keeps_path_order() {
    let options: AncestryOptions =
        serde_json::from_value(json!({"sort_files_first": null})).unwrap();
    let pipeline = AncestryPipeline::new(&options).unwrap();
    assert_eq!(order_with(pipeline, abcd()), "a,b,c,d");
}

#[test]
fn empty_files_first_keeps_path_order() {
    assert_eq!(order_with(files_first(Vec::new()), abcd()), "a,b,c,d");

    let options: AncestryOptions =
        serde_json::from_value(json!({"sort_files_first": []})).unwrap();
    let pipeline = AncestryPipeline::new(&options).unwrap();
    assert_eq!(order_with(pipeline, abcd()), "a,b,c,d");
}

#[test]
fn files_first_glob() {
    let pipeline = files_first(vec![MatcherSpec::glob("b")]);
    assert_eq!(order_with(pipeline, abcd()), "b,a,c,d");
}

#[test]
fn files_first_regex() {
    let pipeline = files_first(vec![MatcherSpec::regex("c").unwrap()]);
    assert_eq!(order_with(pipeline, abcd()), "c,a,b,d");

    let options: AncestryOptions =
        serde_json::from_value(json!({"sort_files_first": {"regex": "c"}})).unwrap();
    let pipeline = AncestryPipeline::new(&options).unwrap();
    assert_eq!(order_with(pipeline, abcd()), "c,a,b,d");
}

#[test]
fn files_first_predicate() {
    let pipeline = files_first(vec![MatcherSpec::predicate(|path| path == "b")]);
    assert_eq!(order_with(pipeline, abcd()), "b,a,c,d");
}

struct OnlyC;

impl PathTest for OnlyC {
    fn test(&self, path: &str) -> bool {
        path == "c"
    }
}

#[test]
fn files_first_test_object() {
    let pipeline = files_first(vec![MatcherSpec::Test(Arc::new(OnlyC))]);
    assert_eq!(order_with(pipeline, abcd()), "c,a,b,d");
}

#[test]
fn files_first_list_ranks_all_matches_first() {
    let pipeline = files_first(vec![MatcherSpec::glob("b"), MatcherSpec::glob("d")]);
    assert_eq!(order_with(pipeline, abcd()), "b,d,a,c");

    let options: AncestryOptions =
        serde_json::from_value(json!({"sort_files_first": ["b", "d"]})).unwrap();
    let pipeline = AncestryPipeline::new(&options).unwrap();
    assert_eq!(order_with(pipeline, abcd()), "b,d,a,c");
}

#[test]
fn files_first_applies_to_child_lists() {
    let mut files = files_from(&["index.md", "x/page.md", "y/index.md"]);
    let graph = AncestryPipeline::builder()
        .sort_files_first(vec![MatcherSpec::glob("y/*")])
        .build()
        .unwrap()
        .run(&mut files);

    let root = view(&graph, "index.md");
    assert_eq!(
        root.children,
        Some(vec!["y/index.md".to_string(), "x/page.md".to_string()])
    );
}

#[test]
fn path_order_ignores_case() {
    let pipeline = AncestryPipeline::builder().build().unwrap();
    assert_eq!(order_with(pipeline, files_from(&["c", "B", "a"])), "a,B,c");
}
