//! Loaders for the two supported source shapes.
//!
//! - nested: one JSON object per node with a `children` map keyed by child id
//! - tables: a structure table (kind, period, parent link) joined with a caption table (text per
//!   language), both keyed by node id

use crate::language::Labels;
use crate::model::{NodeKind, Period};
use crate::store::{TreeBuilder, TreeStore};
use crate::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;

/// Id assumed for a nested root that does not carry one.
pub const DEFAULT_ROOT_ID: &str = "root";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedNode {
    /// Defaults to the key under which the node appears in its parent's `children`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeared: Option<Period>,
    #[serde(default, alias = "caption")]
    pub label: Labels,
    #[serde(default)]
    pub children: IndexMap<String, NestedNode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureRecord {
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeared: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

pub type StructureTable = IndexMap<String, StructureRecord>;
pub type CaptionTable = IndexMap<String, Labels>;

impl TreeStore {
    pub fn from_nested(root: NestedNode) -> Result<Self> {
        let mut builder = TreeBuilder::new();
        let root_id = root
            .id
            .clone()
            .unwrap_or_else(|| DEFAULT_ROOT_ID.to_string());

        let mut queue: VecDeque<(String, Option<String>, NestedNode)> = VecDeque::new();
        queue.push_back((root_id, None, root));
        while let Some((key, parent, node)) = queue.pop_front() {
            let id = node.id.unwrap_or(key);
            for (child_key, child) in node.children {
                queue.push_back((child_key, Some(id.clone()), child));
            }
            builder.push(id, parent, node.kind, node.appeared, node.label);
        }
        builder.finish()
    }

    pub fn from_nested_value(value: Value) -> Result<Self> {
        Self::from_nested(serde_json::from_value(value)?)
    }

    pub fn from_nested_json(text: &str) -> Result<Self> {
        Self::from_nested(serde_json::from_str(text)?)
    }

    /// Joins the structure and caption tables. Children keep the order of the structure table;
    /// nodes without a caption row get empty labels, and caption rows for unknown ids are
    /// ignored.
    pub fn from_tables(structure: StructureTable, mut captions: CaptionTable) -> Result<Self> {
        let mut builder = TreeBuilder::with_capacity(structure.len());
        for (id, record) in structure {
            let labels = captions.swap_remove(&id).unwrap_or_default();
            builder.push(id, record.parent, record.kind, record.appeared, labels);
        }
        for id in captions.keys() {
            tracing::trace!(id = %id, "caption row without a structure record");
        }
        builder.finish()
    }

    pub fn from_tables_json(structure: &str, captions: &str) -> Result<Self> {
        Self::from_tables(
            serde_json::from_str(structure)?,
            serde_json::from_str(captions)?,
        )
    }
}
