//! Properties that hold for any path set

use ancestry::{AncestryPipeline, Files, Item, SiblingList};
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = String> {
    let segment = prop::sample::select(vec!["a", "b", "C", "index.md", "page.html", "x.gif"]);
    prop::collection::vec(segment, 1..5).prop_map(|segments| segments.join("/"))
}

fn files_strategy() -> impl Strategy<Value = Files> {
    prop::collection::btree_set(path_strategy(), 1..24)
        .prop_map(|paths| paths.into_iter().map(|p| (p, Item::new())).collect())
}

proptest! {
    #[test]
    fn member_index_points_at_self(mut files in files_strategy()) {
        let graph = AncestryPipeline::builder().build().unwrap().run(&mut files);
        for id in graph.ids() {
            let node = graph.node(id);
            let members = graph.members(id);
            prop_assert_eq!(members[node.member_index], id);
            prop_assert_eq!(members[0], node.first_member);
            prop_assert_eq!(members[members.len() - 1], node.last_member);
        }
    }

    #[test]
    fn siblings_alias_parent_children(mut files in files_strategy()) {
        let graph = AncestryPipeline::builder().build().unwrap().run(&mut files);
        for id in graph.ids() {
            let node = graph.node(id);
            match node.parent {
                Some(parent) => {
                    let children = graph.node(parent).children;
                    prop_assert!(children.is_some());
                    prop_assert_eq!(SiblingList::Shared(children.unwrap()), node.siblings);
                }
                None => prop_assert_eq!(SiblingList::Solo(id), node.siblings),
            }
        }
    }

    #[test]
    fn siblings_hold_first_member_or_self(mut files in files_strategy()) {
        let graph = AncestryPipeline::builder().build().unwrap().run(&mut files);
        for id in graph.ids() {
            let node = graph.node(id);
            let siblings = graph.siblings(id);
            prop_assert!(!siblings.is_empty());
            prop_assert_eq!(siblings[0], node.first_sibling);
            prop_assert_eq!(siblings[siblings.len() - 1], node.last_sibling);
            if node.parent.is_some() {
                prop_assert_eq!(siblings[node.sibling_index], node.first_member);
            } else {
                prop_assert_eq!(siblings, &[id][..]);
                prop_assert_eq!(node.sibling_index, 0);
                prop_assert_eq!(node.next_sibling, None);
                prop_assert_eq!(node.prev_sibling, None);
            }
        }
    }

    #[test]
    fn parent_chain_ends_at_root(mut files in files_strategy()) {
        let graph = AncestryPipeline::builder().build().unwrap().run(&mut files);
        for id in graph.ids() {
            let node = graph.node(id);
            let top = graph.ancestors(id).last().unwrap_or(id);
            prop_assert!(graph.node(top).parent.is_none());
            prop_assert_eq!(top, node.root);
            prop_assert!(graph.ancestors(id).count() < graph.len());
        }
    }

    #[test]
    fn children_are_first_members_one_level_down(mut files in files_strategy()) {
        let graph = AncestryPipeline::builder().build().unwrap().run(&mut files);
        for id in graph.ids() {
            if let Some(children) = graph.children(id) {
                prop_assert!(!children.is_empty());
                for child in children {
                    let child_node = graph.node(*child);
                    prop_assert_eq!(child_node.first_member, *child);
                    prop_assert_eq!(child_node.parent, Some(graph.node(id).first_member));
                }
            }
        }
    }

    #[test]
    fn every_item_is_enriched(mut files in files_strategy()) {
        let graph = AncestryPipeline::builder().build().unwrap().run(&mut files);
        prop_assert_eq!(graph.len(), files.len());
        for (path, item) in &files {
            let id = item.ancestry("ancestry");
            prop_assert!(id.is_some());
            prop_assert_eq!(graph.path(id.unwrap()), path.as_str());
        }
    }
}
