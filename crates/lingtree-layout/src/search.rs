//! Search by localized label and resolution of the ancestor chain that reveals a hit.

use lingtree_core::{Language, NodeIndex, TreeStore};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Root-to-target path as arena indices, or `None` if no node has that id.
pub fn resolve_path_indices(tree: &TreeStore, target_id: &str) -> Option<Vec<NodeIndex>> {
    tree.find(target_id).map(|ix| tree.path_to(ix))
}

/// Root-to-target path of ids, both ends included.
pub fn resolve_path(tree: &TreeStore, target_id: &str) -> Option<Vec<String>> {
    resolve_path_indices(tree, target_id).map(|path| {
        path.into_iter()
            .map(|ix| tree.node(ix).id().to_string())
            .collect()
    })
}

/// One selectable search entry: the node id and its text in the indexed language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSuggestion {
    pub key: String,
    pub value: String,
}

/// Labels of every node (visible or not) in one language, in pre-order.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    language: Language,
    entries: Vec<SearchSuggestion>,
    folded: Vec<String>,
}

impl SearchIndex {
    pub fn build(tree: &TreeStore, language: Language, fallback: Language) -> Self {
        let entries: Vec<SearchSuggestion> = tree
            .iter()
            .map(|(_, node)| SearchSuggestion {
                key: node.id().to_string(),
                value: node.label(language, fallback).to_string(),
            })
            .collect();
        let folded = entries.iter().map(|e| e.value.to_lowercase()).collect();
        Self {
            language,
            entries,
            folded,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn entries(&self) -> &[SearchSuggestion] {
        &self.entries
    }

    /// Case-insensitive substring matches, at most `limit` of them. A blank query matches
    /// nothing.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<SearchSuggestion> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| folded.contains(&needle))
            .map(|(entry, _)| entry.clone())
            .take(limit)
            .collect()
    }

    /// Strict selection: only keys present in the index are accepted.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }
}
