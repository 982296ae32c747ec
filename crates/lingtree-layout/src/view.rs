//! Interactive view session: owns the mutable state and re-derives the graph after each action.

use crate::config::{LayoutConfig, PinPolicy};
use crate::expansion::ExpansionState;
use crate::graph::{Bounds, Graph};
use crate::layout::{LayoutInput, layout};
use crate::position::{Point, PositionCache};
use crate::search::{SearchIndex, SearchSuggestion, resolve_path_indices};
use crate::Result;
use lingtree_core::{
    Language, MemoryPreferences, NodeIndex, PreferenceStore, TreeStore, load_language,
    store_language,
};
use std::sync::Arc;

/// User interactions accepted by [`TreeView::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    ToggleExpand(String),
    /// Fired while dragging and on release; the latest point wins.
    DragUpdate { id: String, position: Point },
    SetLanguage(Language),
    SelectSearchResult(String),
}

/// One mounted diagram view.
///
/// Every action computes the complete next state first and then swaps it in, so the graph is
/// always derived from a consistent expansion/position pair. Actions naming ids the tree does not
/// contain change nothing.
#[derive(Debug)]
pub struct TreeView<P: PreferenceStore = MemoryPreferences> {
    tree: Arc<TreeStore>,
    config: LayoutConfig,
    expansion: ExpansionState,
    positions: PositionCache,
    language: Language,
    preferences: P,
    search: SearchIndex,
    graph: Graph,
}

impl<P: PreferenceStore> TreeView<P> {
    pub fn new(tree: Arc<TreeStore>, config: LayoutConfig, preferences: P) -> Result<Self> {
        config.validate()?;
        let language = load_language(&preferences);
        let expansion = ExpansionState::for_tree(&tree);
        let search = SearchIndex::build(&tree, language, config.fallback_language);
        let mut view = Self {
            tree,
            config,
            expansion,
            positions: PositionCache::new(),
            language,
            preferences,
            search,
            graph: Graph::default(),
        };
        view.relayout();
        Ok(view)
    }

    pub fn tree(&self) -> &TreeStore {
        &self.tree
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn positions(&self) -> &PositionCache {
        &self.positions
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Extent of the visible nodes, for fitting the viewport to the diagram.
    pub fn fit_bounds(&self) -> Option<Bounds> {
        self.graph.bounds()
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.search
    }

    pub fn suggest(&self, query: &str, limit: usize) -> Vec<SearchSuggestion> {
        self.search.suggest(query, limit)
    }

    /// Applies `action`. Returns whether any state changed.
    pub fn dispatch(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::ToggleExpand(id) => self.toggle_expand(&id),
            ViewAction::DragUpdate { id, position } => self.drag_update(&id, position),
            ViewAction::SetLanguage(language) => self.set_language(language),
            ViewAction::SelectSearchResult(id) => self.select_search_result(&id),
        }
    }

    pub fn toggle_expand(&mut self, id: &str) -> bool {
        let Some(ix) = self.tree.find(id) else {
            tracing::debug!(id, "toggle ignored: unknown node");
            return false;
        };
        let expansion = self.expansion.toggled(id);
        let mut positions = self.positions.clone();
        self.apply_pin_policy(&mut positions, ix);

        tracing::debug!(id, expanded = expansion.is_expanded(id), "toggle expand");
        self.expansion = expansion;
        self.positions = positions;
        self.relayout();
        true
    }

    /// Pins a visible node at `position`. Hidden or unknown nodes cannot be dragged.
    pub fn drag_update(&mut self, id: &str, position: Point) -> bool {
        if self.graph.node(id).is_none() {
            tracing::debug!(id, "drag ignored: node not visible");
            return false;
        }
        if self.positions.pinned(id) == Some(position) {
            return false;
        }
        let mut positions = self.positions.clone();
        positions.pin(id, position);

        tracing::trace!(id, x = position.x, y = position.y, "drag update");
        self.positions = positions;
        self.relayout();
        true
    }

    /// Switches the label language and persists the choice. No node moves.
    pub fn set_language(&mut self, language: Language) -> bool {
        if language == self.language {
            return false;
        }
        let search = SearchIndex::build(&self.tree, language, self.config.fallback_language);
        let mut graph = self.graph.clone();
        graph.relabel(&self.tree, language, self.config.fallback_language);

        tracing::debug!(%language, "set language");
        store_language(&mut self.preferences, language);
        self.language = language;
        self.search = search;
        self.graph = graph;
        true
    }

    /// Expands every ancestor of `id` so it becomes visible. The target's own flag is untouched.
    pub fn select_search_result(&mut self, id: &str) -> bool {
        let Some(path) = resolve_path_indices(&self.tree, id) else {
            tracing::debug!(id, "search selection ignored: unknown node");
            return false;
        };
        let ancestors = &path[..path.len() - 1];
        let opened: Vec<NodeIndex> = ancestors
            .iter()
            .copied()
            .filter(|ix| !self.expansion.is_expanded(self.tree.node(*ix).id()))
            .collect();
        if opened.is_empty() {
            return false;
        }

        let expansion = self
            .expansion
            .with_expanded(ancestors.iter().map(|ix| self.tree.node(*ix).id()));
        let mut positions = self.positions.clone();
        for ix in &opened {
            self.apply_pin_policy(&mut positions, *ix);
        }

        tracing::debug!(id, opened = opened.len(), "search selection");
        self.expansion = expansion;
        self.positions = positions;
        self.relayout();
        true
    }

    fn apply_pin_policy(&self, positions: &mut PositionCache, toggled: NodeIndex) {
        match self.config.pin_policy {
            PinPolicy::PreserveAlways => {}
            PinPolicy::ResetDescendantsOnToggle => {
                let dropped = positions.unpin_descendants(&self.tree, toggled);
                if dropped > 0 {
                    tracing::trace!(dropped, "dropped pins below toggled node");
                }
            }
        }
    }

    fn relayout(&mut self) {
        let out = layout(
            &LayoutInput {
                tree: &self.tree,
                expansion: &self.expansion,
                positions: &self.positions,
                config: &self.config,
                language: self.language,
            },
            0.0,
        );
        self.graph = out.graph;
        self.positions = out.positions;
    }
}
