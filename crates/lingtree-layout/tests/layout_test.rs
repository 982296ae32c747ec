use lingtree_core::{Labels, Language, NodeKind, TreeBuilder, TreeStore};
use lingtree_layout::{
    ExpansionState, LayoutConfig, LayoutInput, LayoutOutput, NodeRole, Point, PositionCache,
    edge_id, layout,
};
use serde_json::json;
use std::collections::BTreeMap;

fn sample() -> TreeStore {
    TreeStore::from_nested_value(json!({
        "id": "root",
        "label": { "en": "Root", "ru": "Корень" },
        "children": {
            "child-1": {
                "label": { "en": "Child 1", "ru": "Потомок 1" },
                "children": {
                    "child-1-1": { "label": { "en": "Child 1.1", "ru": "Потомок 1.1" } },
                    "child-1-2": { "label": { "en": "Child 1.2", "ru": "Потомок 1.2" } }
                }
            },
            "child-2": { "label": { "en": "Child 2", "ru": "Потомок 2" } }
        }
    }))
    .unwrap()
}

fn run(
    tree: &TreeStore,
    expansion: &ExpansionState,
    positions: &PositionCache,
    language: Language,
) -> LayoutOutput {
    let config = LayoutConfig::default();
    layout(
        &LayoutInput {
            tree,
            expansion,
            positions,
            config: &config,
            language,
        },
        0.0,
    )
}

fn coords(out: &LayoutOutput) -> BTreeMap<String, (f64, f64)> {
    out.graph
        .nodes
        .iter()
        .map(|n| (n.id.clone(), (n.position.x, n.position.y)))
        .collect()
}

#[test]
fn default_expansion_shows_root_and_its_children() {
    let tree = sample();
    let out = run(
        &tree,
        &ExpansionState::for_tree(&tree),
        &PositionCache::new(),
        Language::En,
    );
    assert_eq!(
        coords(&out),
        [
            ("root".to_string(), (100.0, 0.0)),
            ("child-1".to_string(), (0.0, 120.0)),
            ("child-2".to_string(), (200.0, 120.0)),
        ]
        .into()
    );

    let ids: Vec<&str> = out.graph.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["root-child-1", "root-child-2"]);
    assert_eq!(out.graph.edges[0].source, "root");
    assert_eq!(out.graph.edges[0].target, "child-1");
}

#[test]
fn expanded_subtree_is_split_proportionally() {
    let tree = sample();
    let expansion = ExpansionState::for_tree(&tree).toggled("child-1");
    let out = run(&tree, &expansion, &PositionCache::new(), Language::En);
    assert_eq!(
        coords(&out),
        [
            ("root".to_string(), (200.0, 0.0)),
            ("child-1".to_string(), (100.0, 120.0)),
            ("child-1-1".to_string(), (0.0, 240.0)),
            ("child-1-2".to_string(), (200.0, 240.0)),
            ("child-2".to_string(), (400.0, 120.0)),
        ]
        .into()
    );

    let order: Vec<&str> = out.graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order, ["root", "child-1", "child-1-1", "child-1-2", "child-2"]);
    assert_eq!(out.graph.edges.len(), 4);
    assert!(out.graph.edge(&edge_id("child-1", "child-1-2")).is_some());
}

#[test]
fn roles_follow_visibility() {
    let tree = sample();
    let expansion = ExpansionState::for_tree(&tree);
    let out = run(&tree, &expansion, &PositionCache::new(), Language::En);
    let root = out.graph.node("root").unwrap();
    assert_eq!(root.role, NodeRole::Root);
    assert!(root.expanded);

    // Collapsed, but it still advertises an expand control.
    let child = out.graph.node("child-1").unwrap();
    assert_eq!(child.role, NodeRole::Leaf);
    assert!(child.has_children);
    assert!(!child.expanded);

    let expansion = expansion.toggled("child-1");
    let out = run(&tree, &expansion, &PositionCache::new(), Language::En);
    assert_eq!(out.graph.node("child-1").unwrap().role, NodeRole::Internal);
    let leaf = out.graph.node("child-1-1").unwrap();
    assert_eq!(leaf.role, NodeRole::Leaf);
    assert!(!leaf.has_children);
    assert_eq!(leaf.depth, 2);
}

#[test]
fn collapsed_root_shows_only_itself() {
    let tree = sample();
    let out = run(
        &tree,
        &ExpansionState::default(),
        &PositionCache::new(),
        Language::En,
    );
    assert_eq!(out.graph.nodes.len(), 1);
    assert!(out.graph.edges.is_empty());
    assert_eq!(out.graph.nodes[0].position, Point::new(0.0, 0.0));
    assert_eq!(out.graph.nodes[0].role, NodeRole::Root);
}

#[test]
fn layout_is_idempotent() {
    let tree = sample();
    let expansion = ExpansionState::for_tree(&tree).toggled("child-1");
    let first = run(&tree, &expansion, &PositionCache::new(), Language::En);
    let second = run(&tree, &expansion, &first.positions, Language::En);
    assert_eq!(first.graph, second.graph);
    assert_eq!(first.positions, second.positions);
}

#[test]
fn layout_records_computed_positions() {
    let tree = sample();
    let out = run(
        &tree,
        &ExpansionState::for_tree(&tree),
        &PositionCache::new(),
        Language::En,
    );
    assert_eq!(out.positions.len(), 3);
    assert_eq!(out.positions.point("child-2"), Some(Point::new(200.0, 120.0)));
    assert!(!out.positions.is_pinned("child-2"));
    assert!(out.positions.get("child-1-1").is_none());
}

#[test]
fn pinned_nodes_keep_their_point() {
    let tree = sample();
    let mut positions = PositionCache::new();
    positions.pin("child-2", Point::new(-40.0, 500.0));

    let expansion = ExpansionState::for_tree(&tree).toggled("child-1");
    let out = run(&tree, &expansion, &positions, Language::En);
    assert_eq!(
        out.graph.node("child-2").unwrap().position,
        Point::new(-40.0, 500.0)
    );
    assert_eq!(out.positions.pinned("child-2"), Some(Point::new(-40.0, 500.0)));
    // Others are still laid out on the grid.
    assert_eq!(
        out.graph.node("child-1-2").unwrap().position,
        Point::new(200.0, 240.0)
    );
}

#[test]
fn computed_entries_are_refreshed_on_reflow() {
    let tree = sample();
    let collapsed = ExpansionState::for_tree(&tree);
    let first = run(&tree, &collapsed, &PositionCache::new(), Language::En);
    let second = run(&tree, &collapsed.toggled("child-1"), &first.positions, Language::En);
    assert_eq!(second.positions.point("child-2"), Some(Point::new(400.0, 120.0)));
    assert_eq!(second.positions.point("root"), Some(Point::new(200.0, 0.0)));
}

#[test]
fn labels_depend_on_language_and_geometry_does_not() {
    let tree = sample();
    let expansion = ExpansionState::for_tree(&tree).toggled("child-1");
    let en = run(&tree, &expansion, &PositionCache::new(), Language::En);
    let ru = run(&tree, &expansion, &PositionCache::new(), Language::Ru);

    assert_eq!(en.graph.node("root").unwrap().label, "Root");
    assert_eq!(ru.graph.node("root").unwrap().label, "Корень");
    assert_eq!(coords(&en), coords(&ru));
    assert_eq!(en.graph.edges, ru.graph.edges);
}

#[test]
fn missing_translation_falls_back() {
    let tree = TreeStore::from_nested_value(json!({
        "id": "root",
        "label": { "en": "Root" },
        "children": { "bare": {} }
    }))
    .unwrap();
    let out = run(
        &tree,
        &ExpansionState::for_tree(&tree),
        &PositionCache::new(),
        Language::Ru,
    );
    assert_eq!(out.graph.node("root").unwrap().label, "Root");
    assert_eq!(out.graph.node("bare").unwrap().label, "bare");
}

#[test]
fn unit_sizes_come_from_config() {
    let tree = sample();
    let config = LayoutConfig {
        unit_width: 50.0,
        unit_height: 10.0,
        ..Default::default()
    };
    let expansion = ExpansionState::for_tree(&tree);
    let positions = PositionCache::new();
    let out = layout(
        &LayoutInput {
            tree: &tree,
            expansion: &expansion,
            positions: &positions,
            config: &config,
            language: Language::En,
        },
        1000.0,
    );
    assert_eq!(
        out.graph.node("root").unwrap().position,
        Point::new(1025.0, 0.0)
    );
    assert_eq!(
        out.graph.node("child-2").unwrap().position,
        Point::new(1050.0, 10.0)
    );
}

#[test]
fn deep_chain_layout_does_not_overflow() {
    let mut builder = TreeBuilder::new();
    builder.push("n0", None, NodeKind::Group, None, Labels::new());
    for i in 1..20_000 {
        builder.push(
            format!("n{i}"),
            Some(format!("n{}", i - 1)),
            NodeKind::Group,
            None,
            Labels::new(),
        );
    }
    let tree = builder.finish().unwrap();

    let mut expansion = ExpansionState::for_tree(&tree);
    for (_, node) in tree.iter() {
        expansion.set(node.id(), true);
    }
    let out = run(&tree, &expansion, &PositionCache::new(), Language::En);
    assert_eq!(out.graph.nodes.len(), tree.len());
    assert_eq!(out.graph.edges.len(), tree.len() - 1);
    assert!(out.graph.nodes.iter().all(|n| n.position.x == 0.0));
    assert_eq!(out.graph.nodes.last().unwrap().position.y, 19_999.0 * 120.0);
}

#[test]
fn bounds_cover_all_nodes() {
    let tree = sample();
    let expansion = ExpansionState::for_tree(&tree).toggled("child-1");
    let out = run(&tree, &expansion, &PositionCache::new(), Language::En);
    let b = out.graph.bounds().unwrap();
    assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.0, 0.0, 400.0, 240.0));
}
