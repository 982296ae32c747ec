use lingtree_core::TreeStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expanded/collapsed flag per node id. Absent ids are collapsed.
///
/// Updates go through the `*ed`/`with_*` constructors, which return a fresh state; callers swap
/// the whole value in once it is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionState {
    flags: BTreeMap<String, bool>,
}

impl ExpansionState {
    /// Session default: only the root is expanded.
    pub fn for_tree(tree: &TreeStore) -> Self {
        let mut flags = BTreeMap::new();
        flags.insert(tree.root_node().id().to_string(), true);
        Self { flags }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: impl Into<String>, expanded: bool) {
        self.flags.insert(id.into(), expanded);
    }

    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.set(id, !self.is_expanded(id));
        next
    }

    pub fn with_expanded<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut next = self.clone();
        for id in ids {
            next.set(id, true);
        }
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(id, v)| (id.as_str(), *v))
    }
}
