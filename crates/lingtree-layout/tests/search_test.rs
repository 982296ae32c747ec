use lingtree_core::{Language, TreeStore};
use lingtree_layout::{DEFAULT_SUGGESTION_LIMIT, SearchIndex, resolve_path};
use serde_json::json;

const NESTED: &str = include_str!("../../lingtree-core/tests/fixtures/nested.json");

fn fixture() -> TreeStore {
    TreeStore::from_nested_json(NESTED).unwrap()
}

#[test]
fn resolve_path_runs_from_root_to_target() {
    let tree = TreeStore::from_nested_value(json!({
        "id": "root",
        "children": { "A": { "children": { "B": {} } } }
    }))
    .unwrap();
    assert_eq!(
        resolve_path(&tree, "B"),
        Some(vec!["root".to_string(), "A".to_string(), "B".to_string()])
    );
    assert_eq!(resolve_path(&tree, "root"), Some(vec!["root".to_string()]));
    assert_eq!(resolve_path(&tree, "C"), None);
}

#[test]
fn resolve_path_in_fixture() {
    let tree = fixture();
    assert_eq!(
        resolve_path(&tree, "polish").unwrap(),
        ["root", "indo-european", "slavic", "polish"]
    );
}

#[test]
fn index_lists_every_node_in_preorder() {
    let tree = fixture();
    let index = SearchIndex::build(&tree, Language::En, Language::En);
    assert_eq!(index.entries().len(), tree.len());
    assert_eq!(index.entries()[0].key, "root");
    assert_eq!(index.entries()[0].value, "Languages of the world");
    assert!(index.contains_key("finnish"));
    assert!(!index.contains_key("klingon"));
}

#[test]
fn suggestions_match_case_insensitively_in_the_active_language() {
    let tree = fixture();
    let en = SearchIndex::build(&tree, Language::En, Language::En);
    let hits: Vec<String> = en
        .suggest("SLAV", DEFAULT_SUGGESTION_LIMIT)
        .into_iter()
        .map(|s| s.key)
        .collect();
    assert_eq!(hits, ["slavic"]);

    let ru = SearchIndex::build(&tree, Language::Ru, Language::En);
    let hits = ru.suggest("русск", DEFAULT_SUGGESTION_LIMIT);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].key, "russian");
    assert_eq!(hits[0].value, "Русский");

    // Finnish has no Russian caption, so the fallback text is searchable.
    let hits = ru.suggest("finn", DEFAULT_SUGGESTION_LIMIT);
    assert_eq!(hits[0].key, "finnish");
}

#[test]
fn suggestions_are_capped_and_blank_queries_match_nothing() {
    let tree = fixture();
    let ru = SearchIndex::build(&tree, Language::Ru, Language::En);
    // "ские" ends most family and group names.
    let all = ru.suggest("ские", usize::MAX);
    assert!(all.len() > 2);
    assert_eq!(ru.suggest("ские", 2).len(), 2);
    assert!(ru.suggest("   ", DEFAULT_SUGGESTION_LIMIT).is_empty());
}
