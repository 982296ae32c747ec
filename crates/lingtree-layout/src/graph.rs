//! Flat node/edge lists handed to the rendering surface.

use crate::position::Point;
use lingtree_core::{Labels, Language, NodeKind, TreeStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeRole {
    /// The tree root (no parent).
    Root,
    /// Has visible children.
    Internal,
    /// Collapsed, or nothing below it.
    Leaf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    /// Text in the active language.
    pub label: String,
    /// All localized texts of the node.
    pub caption: Labels,
    pub kind: NodeKind,
    pub role: NodeRole,
    pub position: Point,
    pub depth: usize,
    /// Whether an expand/collapse control applies, regardless of the current flag.
    pub has_children: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    pub fn between(parent: &str, child: &str) -> Self {
        Self {
            id: edge_id(parent, child),
            source: parent.to_string(),
            target: child.to_string(),
        }
    }
}

/// Stable id of the parent-to-child link.
pub fn edge_id(parent: &str, child: &str) -> String {
    format!("{parent}-{child}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Rewrites labels for `language` in place. Positions and edges are left alone.
    pub fn relabel(&mut self, tree: &TreeStore, language: Language, fallback: Language) {
        for node in &mut self.nodes {
            let Some(tree_node) = tree.find_node(&node.id) else {
                continue;
            };
            node.label = tree_node.label(language, fallback).to_string();
            node.caption = tree_node.labels().clone();
        }
    }

    /// Bounding box of the node anchor points.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut it = self.nodes.iter().map(|n| n.position);
        let p0 = it.next()?;
        let mut b = Bounds {
            min_x: p0.x,
            min_y: p0.y,
            max_x: p0.x,
            max_y: p0.y,
        };
        for p in it {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }
}
