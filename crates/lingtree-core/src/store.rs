//! Immutable arena-backed taxonomy tree.

use crate::language::{Labels, Language};
use crate::model::{NodeKind, Period};
use crate::{Error, Result};
use rustc_hash::FxHashMap;
use std::ops::Range;

/// Position of a node in its [`TreeStore`] arena.
///
/// Indices follow pre-order: a parent always precedes its children, and every subtree occupies
/// the contiguous range `ix..subtree_end`. An index is only meaningful for the store that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    id: String,
    kind: NodeKind,
    appeared: Option<Period>,
    labels: Labels,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
    depth: usize,
    subtree_end: usize,
}

impl TreeNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn appeared(&self) -> Option<&Period> {
        self.appeared.as_ref()
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Display text for `language`, falling back to `fallback`, then to the node id.
    pub fn label(&self, language: Language, fallback: Language) -> &str {
        self.labels.resolve(language, fallback).unwrap_or(&self.id)
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Distance from the root (the root has depth 0).
    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[derive(Debug, Clone)]
pub struct TreeStore {
    nodes: Vec<TreeNode>,
    index: FxHashMap<String, NodeIndex>,
}

impl TreeStore {
    pub fn root(&self) -> NodeIndex {
        NodeIndex(0)
    }

    pub fn root_node(&self) -> &TreeNode {
        &self.nodes[0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A store always holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, ix: NodeIndex) -> &TreeNode {
        &self.nodes[ix.0]
    }

    pub fn get(&self, ix: NodeIndex) -> Option<&TreeNode> {
        self.nodes.get(ix.0)
    }

    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn find_node(&self, id: &str) -> Option<&TreeNode> {
        self.find(id).map(|ix| self.node(ix))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All nodes in pre-order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NodeIndex, &TreeNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeIndex(i), n))
    }

    /// `ix` and all of its descendants, in pre-order.
    pub fn subtree(&self, ix: NodeIndex) -> impl DoubleEndedIterator<Item = NodeIndex> + use<> {
        self.subtree_range(ix).map(NodeIndex)
    }

    /// Strict descendants of `ix`, in pre-order.
    pub fn descendants(&self, ix: NodeIndex) -> impl DoubleEndedIterator<Item = NodeIndex> + use<> {
        let range = self.subtree_range(ix);
        (range.start + 1..range.end).map(NodeIndex)
    }

    pub fn subtree_len(&self, ix: NodeIndex) -> usize {
        self.subtree_range(ix).len()
    }

    fn subtree_range(&self, ix: NodeIndex) -> Range<usize> {
        ix.0..self.nodes[ix.0].subtree_end
    }

    /// Whether `ancestor` is a strict ancestor of `ix`.
    pub fn is_ancestor(&self, ancestor: NodeIndex, ix: NodeIndex) -> bool {
        ancestor.0 < ix.0 && ix.0 < self.nodes[ancestor.0].subtree_end
    }

    /// Strict ancestors of `ix`, nearest first.
    pub fn ancestors(&self, ix: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        std::iter::successors(self.node(ix).parent, move |p| self.node(*p).parent)
    }

    /// Root-to-node path, both ends included.
    pub fn path_to(&self, ix: NodeIndex) -> Vec<NodeIndex> {
        let mut path: Vec<NodeIndex> = self.ancestors(ix).collect();
        path.reverse();
        path.push(ix);
        path
    }
}

#[derive(Debug, Clone)]
struct PendingNode {
    id: String,
    parent: Option<String>,
    kind: NodeKind,
    appeared: Option<Period>,
    labels: Labels,
}

/// Collects parent-linked node records and validates them into a [`TreeStore`].
///
/// Children keep the order in which they were pushed.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    pending: Vec<PendingNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Vec::with_capacity(capacity),
        }
    }

    pub fn push(
        &mut self,
        id: impl Into<String>,
        parent: Option<String>,
        kind: NodeKind,
        appeared: Option<Period>,
        labels: Labels,
    ) -> &mut Self {
        self.pending.push(PendingNode {
            id: id.into(),
            parent,
            kind,
            appeared,
            labels,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn finish(self) -> Result<TreeStore> {
        let pending = self.pending;

        let mut by_id: FxHashMap<&str, usize> = FxHashMap::default();
        by_id.reserve(pending.len());
        for (pos, node) in pending.iter().enumerate() {
            if by_id.insert(node.id.as_str(), pos).is_some() {
                return Err(Error::DuplicateId {
                    id: node.id.clone(),
                });
            }
        }

        let mut root: Option<usize> = None;
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); pending.len()];
        for (pos, node) in pending.iter().enumerate() {
            match node.parent.as_deref() {
                Some(parent) => {
                    let Some(&parent_pos) = by_id.get(parent) else {
                        return Err(Error::MissingParent {
                            id: node.id.clone(),
                            parent: parent.to_string(),
                        });
                    };
                    children[parent_pos].push(pos);
                }
                None => {
                    if let Some(first) = root {
                        return Err(Error::MultipleRoots {
                            first: pending[first].id.clone(),
                            second: node.id.clone(),
                        });
                    }
                    root = Some(pos);
                }
            }
        }
        let root = root.ok_or(Error::NoRoot)?;
        drop(by_id);

        // Renumber into pre-order with an explicit stack so arbitrarily deep trees are fine.
        let mut slots: Vec<Option<PendingNode>> = pending.into_iter().map(Some).collect();
        let mut nodes: Vec<TreeNode> = Vec::with_capacity(slots.len());
        let mut stack: Vec<(usize, Option<NodeIndex>, usize)> = vec![(root, None, 0)];
        while let Some((pos, parent, depth)) = stack.pop() {
            let Some(p) = slots[pos].take() else {
                continue;
            };
            let ix = NodeIndex(nodes.len());
            if let Some(parent) = parent {
                nodes[parent.0].children.push(ix);
            }
            nodes.push(TreeNode {
                id: p.id,
                kind: p.kind,
                appeared: p.appeared,
                labels: p.labels,
                parent,
                children: Vec::new(),
                depth,
                subtree_end: 0,
            });
            for &child in children[pos].iter().rev() {
                stack.push((child, Some(ix), depth + 1));
            }
        }

        // Anything not reached from the root sits on a parent cycle.
        if let Some(orphan) = slots.into_iter().flatten().next() {
            return Err(Error::Cycle { id: orphan.id });
        }

        for i in (0..nodes.len()).rev() {
            let end = nodes[i]
                .children
                .last()
                .map(|last| nodes[last.0].subtree_end)
                .unwrap_or(i + 1);
            nodes[i].subtree_end = end;
        }

        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), NodeIndex(i)))
            .collect();

        tracing::debug!(nodes = nodes.len(), "built taxonomy tree");
        Ok(TreeStore { nodes, index })
    }
}
