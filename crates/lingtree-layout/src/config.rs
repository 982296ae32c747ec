use crate::{Error, Result};
use lingtree_core::Language;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What happens to manually dragged positions when an ancestor's expansion flag flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PinPolicy {
    /// Toggling a node drops the pins of its strict descendants, whose row is being reflowed.
    /// The toggled node keeps its own pin, and pins outside its subtree are never touched.
    #[default]
    ResetDescendantsOnToggle,
    /// Pins survive every expansion change.
    PreserveAlways,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Horizontal space of one leaf slot.
    pub unit_width: f64,
    /// Vertical distance between depth levels.
    pub unit_height: f64,
    pub pin_policy: PinPolicy,
    /// Used when a node has no text in the active language.
    pub fallback_language: Language,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit_width: 200.0,
            unit_height: 120.0,
            pin_policy: PinPolicy::default(),
            fallback_language: Language::En,
        }
    }
}

impl LayoutConfig {
    /// Reads overrides from a JSON object; missing keys keep their defaults.
    pub fn from_value(value: &Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value.clone())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("unitWidth", self.unit_width),
            ("unitHeight", self.unit_height),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be a positive finite number, got {v}"),
                });
            }
        }
        Ok(())
    }
}
