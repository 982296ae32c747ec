use lingtree_core::{NodeIndex, TreeStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    /// Written by layout; refreshed on every pass.
    Computed,
    /// Dropped there by the user; reused verbatim by layout.
    Pinned,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CachedPosition {
    pub point: Point,
    pub placement: Placement,
}

/// Last known coordinate per node id.
///
/// Entries for ids that are currently hidden (or no longer in the tree) are kept; they are never
/// consulted for nodes that are not laid out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionCache {
    entries: BTreeMap<String, CachedPosition>,
}

impl PositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&CachedPosition> {
        self.entries.get(id)
    }

    pub fn point(&self, id: &str) -> Option<Point> {
        self.get(id).map(|c| c.point)
    }

    pub fn pinned(&self, id: &str) -> Option<Point> {
        self.get(id)
            .filter(|c| c.placement == Placement::Pinned)
            .map(|c| c.point)
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned(id).is_some()
    }

    pub fn pin(&mut self, id: impl Into<String>, point: Point) {
        self.entries.insert(
            id.into(),
            CachedPosition {
                point,
                placement: Placement::Pinned,
            },
        );
    }

    /// Stores a layout result unless the user has pinned the node.
    pub fn record_computed(&mut self, id: &str, point: Point) {
        match self.entries.get_mut(id) {
            Some(entry) if entry.placement == Placement::Pinned => {}
            Some(entry) => entry.point = point,
            None => {
                self.entries.insert(
                    id.to_string(),
                    CachedPosition {
                        point,
                        placement: Placement::Computed,
                    },
                );
            }
        }
    }

    /// Demotes a pin to a computed entry, so the next layout pass may move the node.
    pub fn unpin(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) if entry.placement == Placement::Pinned => {
                entry.placement = Placement::Computed;
                true
            }
            _ => false,
        }
    }

    /// Unpins every strict descendant of `ix`. Returns how many pins were dropped.
    pub fn unpin_descendants(&mut self, tree: &TreeStore, ix: NodeIndex) -> usize {
        tree.descendants(ix)
            .filter(|d| self.unpin(tree.node(*d).id()))
            .count()
    }

    /// Drops entries for ids the tree does not contain.
    pub fn prune(&mut self, tree: &TreeStore) {
        self.entries.retain(|id, _| tree.contains(id));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CachedPosition)> {
        self.entries.iter().map(|(id, c)| (id.as_str(), c))
    }
}
