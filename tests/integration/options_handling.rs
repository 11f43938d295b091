//! Option resolution and item selection

use ancestry::{AncestryError, AncestryOptions, AncestryPipeline, Item};
use serde_json::json;

use crate::integration::support::files_from;

#[test]
fn altered_ancestry_property() {
    let mut files = files_from(&["x"]);
    let options: AncestryOptions =
        serde_json::from_value(json!({"ancestry_property": "y"})).unwrap();
    AncestryPipeline::new(&options).unwrap().run(&mut files);

    let names: Vec<&str> = files["x"].attachment_names().collect();
    assert_eq!(names, vec!["y"]);
}

#[test]
fn empty_ancestry_property_uses_default() {
    let mut files = files_from(&["x"]);
    let options: AncestryOptions =
        serde_json::from_value(json!({"ancestry_property": ""})).unwrap();
    AncestryPipeline::new(&options).unwrap().run(&mut files);
    assert!(files["x"].has_ancestry("ancestry"));
}

#[test]
fn match_with_dot_selects_hidden_items() {
    let mut files = files_from(&["index.html", "index.md", ".hidden/index.html"]);
    let options: AncestryOptions =
        serde_json::from_value(json!({"match": "**/*.html", "match_dot": true})).unwrap();
    let graph = AncestryPipeline::new(&options).unwrap().run(&mut files);

    assert_eq!(graph.len(), 2);
    assert!(files["index.html"].has_ancestry("ancestry"));
    assert!(files[".hidden/index.html"].has_ancestry("ancestry"));
    assert!(!files["index.md"].has_ancestry("ancestry"));
}

#[test]
fn match_without_dot_skips_hidden_items() {
    let mut files = files_from(&["index.html", ".hidden/index.html"]);
    let options: AncestryOptions =
        serde_json::from_value(json!({"match": "**/*.html"})).unwrap();
    AncestryPipeline::new(&options).unwrap().run(&mut files);

    assert!(files["index.html"].has_ancestry("ancestry"));
    assert!(!files[".hidden/index.html"].has_ancestry("ancestry"));
}

#[test]
fn unselected_items_do_not_become_parents() {
    let mut files = files_from(&["index.md", "docs/page.html"]);
    let graph = AncestryPipeline::builder()
        .match_pattern("**/*.html")
        .build()
        .unwrap()
        .run(&mut files);

    let page = graph.get("docs/page.html").unwrap();
    assert_eq!(page.parent, None);
    assert!(graph.id_of("index.md").is_none());
}

#[test]
fn existing_properties_survive() {
    let mut files = files_from(&["a"]);
    files.insert(
        "b".to_string(),
        Item::from_value(json!({"title": "B"})),
    );
    AncestryPipeline::builder().build().unwrap().run(&mut files);

    assert_eq!(files["b"].property("title"), Some(&json!("B")));
    assert!(files["b"].has_ancestry("ancestry"));
}

#[test]
fn number_matcher_fails_before_any_item_is_touched() {
    let files = files_from(&["a", "b"]);
    let options: AncestryOptions =
        serde_json::from_value(json!({"sort_files_first": 7})).unwrap();

    let err = match AncestryPipeline::new(&options) {
        Ok(_) => panic!("a number is not a matcher"),
        Err(err) => err,
    };
    assert!(matches!(err, AncestryError::InvalidMatcher(_)));
    assert!(err.is_configuration());
    assert_eq!(err.to_string(), "Can't handle matcher: 7");
    assert!(files.values().all(|item| !item.has_ancestry("ancestry")));
}

#[test]
fn number_inside_list_fails() {
    let options: AncestryOptions =
        serde_json::from_value(json!({"sort_files_first": ["b", true]})).unwrap();
    assert!(AncestryPipeline::new(&options).is_err());
}

#[test]
fn bad_regex_is_a_configuration_error() {
    let options: AncestryOptions =
        serde_json::from_value(json!({"sort_files_first": {"regex": "("}})).unwrap();
    let err = AncestryPipeline::new(&options).err().unwrap();
    assert!(matches!(err, AncestryError::InvalidRegex(_)));
    assert!(err.is_configuration());
}

#[test]
fn graph_is_reusable_across_runs() {
    let pipeline = AncestryPipeline::builder().build().unwrap();
    let mut first = files_from(&["a", "b"]);
    let mut second = files_from(&["c"]);
    assert_eq!(pipeline.run(&mut first).len(), 2);
    assert_eq!(pipeline.run(&mut second).len(), 1);
}
