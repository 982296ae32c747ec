#![forbid(unsafe_code)]

//! Language-family taxonomy store (headless).
//!
//! The tree is built once from static data and never mutated afterwards. Nodes live in an
//! arena in pre-order, so every subtree occupies a contiguous index range; downstream layout
//! code relies on that to walk the tree without recursion.

pub mod error;
pub mod language;
pub mod load;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use language::{
    LANGUAGE_PREFERENCE_KEY, Labels, Language, MemoryPreferences, PreferenceStore,
    load_language, store_language,
};
pub use load::{CaptionTable, NestedNode, StructureRecord, StructureTable};
pub use model::{Era, NodeKind, Period, PeriodKind, PeriodUnit};
pub use store::{NodeIndex, TreeBuilder, TreeNode, TreeStore};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
