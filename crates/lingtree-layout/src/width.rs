//! Slot widths of visible subtrees.
//!
//! A node that is collapsed or has no children occupies exactly one slot; an expanded node with
//! children occupies the sum of its children's slots.

use crate::expansion::ExpansionState;
use lingtree_core::{NodeIndex, TreeStore};

/// Expanded and has at least one child to show.
pub fn is_visible_expanded(tree: &TreeStore, expansion: &ExpansionState, ix: NodeIndex) -> bool {
    let node = tree.node(ix);
    node.has_children() && expansion.is_expanded(node.id())
}

/// Width of the node named `id`, or `None` if the tree has no such node.
pub fn width(tree: &TreeStore, expansion: &ExpansionState, id: &str) -> Option<usize> {
    tree.find(id).map(|ix| width_of(tree, expansion, ix))
}

pub fn width_of(tree: &TreeStore, expansion: &ExpansionState, ix: NodeIndex) -> usize {
    let base = ix.index();
    let mut widths = vec![0usize; tree.subtree_len(ix)];
    // Reverse pre-order visits every child before its parent.
    for sub in tree.subtree(ix).rev() {
        let w = slot_width(tree, expansion, sub, |c| widths[c.index() - base]);
        widths[sub.index() - base] = w;
    }
    widths[0]
}

/// Widths of every node in the tree, indexed by [`NodeIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widths(Vec<usize>);

impl Widths {
    pub fn compute(tree: &TreeStore, expansion: &ExpansionState) -> Self {
        let mut widths = vec![0usize; tree.len()];
        for (ix, _) in tree.iter().rev() {
            let w = slot_width(tree, expansion, ix, |c| widths[c.index()]);
            widths[ix.index()] = w;
        }
        Self(widths)
    }

    pub fn get(&self, ix: NodeIndex) -> usize {
        self.0[ix.index()]
    }
}

fn slot_width(
    tree: &TreeStore,
    expansion: &ExpansionState,
    ix: NodeIndex,
    child_width: impl Fn(NodeIndex) -> usize,
) -> usize {
    if !is_visible_expanded(tree, expansion, ix) {
        return 1;
    }
    tree.node(ix).children().iter().map(|c| child_width(*c)).sum()
}
