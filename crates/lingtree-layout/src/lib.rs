#![forbid(unsafe_code)]

//! Expandable tree-to-graph layout for language-family taxonomies.
//!
//! The pure entry point is [`layout()`]: `(tree, expansion, positions) -> (graph, positions)`.
//! [`TreeView`] wraps it into a session that accepts user actions (expand/collapse, drag,
//! language switch, search selection) and keeps the derived graph current.

pub mod config;
pub mod error;
pub mod expansion;
pub mod graph;
pub mod layout;
pub mod position;
pub mod search;
pub mod view;
pub mod width;

pub use config::{LayoutConfig, PinPolicy};
pub use error::{Error, Result};
pub use expansion::ExpansionState;
pub use graph::{Bounds, Graph, GraphEdge, GraphNode, NodeRole, edge_id};
pub use layout::{LayoutInput, LayoutOutput, layout};
pub use position::{CachedPosition, Placement, Point, PositionCache};
pub use search::{
    DEFAULT_SUGGESTION_LIMIT, SearchIndex, SearchSuggestion, resolve_path, resolve_path_indices,
};
pub use view::{TreeView, ViewAction};
pub use width::{Widths, is_visible_expanded, width, width_of};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
