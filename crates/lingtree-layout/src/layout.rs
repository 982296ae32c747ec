//! Slot-based top-down layout of the visible part of the tree.
//!
//! Every visible node gets a horizontal span of `width * unit_width`, split among its visible
//! children in child order with no gaps. The node is centered over its span and placed at
//! `depth * unit_height`. Nodes pinned in the [`PositionCache`] keep their pinned point.

use crate::config::LayoutConfig;
use crate::expansion::ExpansionState;
use crate::graph::{Graph, GraphEdge, GraphNode, NodeRole};
use crate::position::{Point, PositionCache};
use crate::width::{Widths, is_visible_expanded};
use lingtree_core::{Language, NodeIndex, TreeStore};

/// Everything a layout pass reads. Nothing in here is mutated.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    pub tree: &'a TreeStore,
    pub expansion: &'a ExpansionState,
    pub positions: &'a PositionCache,
    pub config: &'a LayoutConfig,
    pub language: Language,
}

#[derive(Debug, Clone)]
pub struct LayoutOutput {
    pub graph: Graph,
    /// The input cache with computed entries refreshed for every laid-out node.
    pub positions: PositionCache,
}

/// Lays out the whole tree with its left edge at `x_start`.
pub fn layout(input: &LayoutInput<'_>, x_start: f64) -> LayoutOutput {
    let LayoutInput {
        tree,
        expansion,
        positions,
        config,
        language,
    } = *input;

    let widths = Widths::compute(tree, expansion);
    let unit_w = config.unit_width;
    let unit_h = config.unit_height;

    let mut graph = Graph::default();
    let mut next_positions = positions.clone();

    // Explicit pre-order walk; children are pushed in reverse so they pop in child order.
    let mut stack: Vec<(NodeIndex, f64)> = vec![(tree.root(), x_start)];
    while let Some((ix, span_start)) = stack.pop() {
        let node = tree.node(ix);
        let open = is_visible_expanded(tree, expansion, ix);
        let w = widths.get(ix) as f64;

        let computed = Point::new(
            span_start + (w * unit_w) / 2.0 - unit_w / 2.0,
            node.depth() as f64 * unit_h,
        );
        let position = match positions.pinned(node.id()) {
            Some(pinned) => pinned,
            None => {
                next_positions.record_computed(node.id(), computed);
                computed
            }
        };

        let role = if node.is_root() {
            NodeRole::Root
        } else if open {
            NodeRole::Internal
        } else {
            NodeRole::Leaf
        };

        graph.nodes.push(GraphNode {
            id: node.id().to_string(),
            label: node.label(language, config.fallback_language).to_string(),
            caption: node.labels().clone(),
            kind: node.kind(),
            role,
            position,
            depth: node.depth(),
            has_children: node.has_children(),
            expanded: expansion.is_expanded(node.id()),
        });

        if let Some(parent) = node.parent() {
            graph
                .edges
                .push(GraphEdge::between(tree.node(parent).id(), node.id()));
        }

        if open {
            let mut child_start = span_start;
            let first = stack.len();
            for &child in node.children() {
                stack.push((child, child_start));
                child_start += widths.get(child) as f64 * unit_w;
            }
            stack[first..].reverse();
        }
    }

    tracing::trace!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "tree layout"
    );

    LayoutOutput {
        graph,
        positions: next_positions,
    }
}
