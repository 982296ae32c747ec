//! Descriptive node metadata. None of it influences layout.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// A single attested or reconstructed language (usually a leaf).
    #[default]
    Language,
    Family,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeriodKind {
    #[default]
    Attested,
    Reconstructed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeriodUnit {
    Year,
    #[default]
    Century,
    Millennium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Era {
    Bce,
    #[default]
    Ce,
}

/// When a language or family is first attested (or reconstructed to have existed).
///
/// `from`/`to` are counted in `unit`s within `era`, e.g. `{ unit: millennium, from: 5, to: 4,
/// era: BCE }` reads "5th-4th millennium BCE". `to` is omitted for a single unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(default)]
    pub kind: PeriodKind,
    #[serde(default)]
    pub unit: PeriodUnit,
    pub from: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,
    #[serde(default)]
    pub era: Era,
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == PeriodKind::Reconstructed {
            f.write_str("c. ")?;
        }
        let era = match self.era {
            Era::Bce => "BCE",
            Era::Ce => "CE",
        };
        match self.unit {
            PeriodUnit::Year => match self.to {
                Some(to) if to != self.from => write!(f, "{}-{} {era}", self.from, to),
                _ => write!(f, "{} {era}", self.from),
            },
            PeriodUnit::Century | PeriodUnit::Millennium => {
                let unit = if self.unit == PeriodUnit::Century {
                    "century"
                } else {
                    "millennium"
                };
                match self.to {
                    Some(to) if to != self.from => {
                        write!(f, "{}-{} {unit} {era}", ordinal(self.from), ordinal(to))
                    }
                    _ => write!(f, "{} {unit} {era}", ordinal(self.from)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_display() {
        let p = Period {
            kind: PeriodKind::Reconstructed,
            unit: PeriodUnit::Millennium,
            from: 5,
            to: Some(4),
            era: Era::Bce,
        };
        assert_eq!(p.to_string(), "c. 5th-4th millennium BCE");

        let p = Period {
            kind: PeriodKind::Attested,
            unit: PeriodUnit::Century,
            from: 11,
            to: None,
            era: Era::Ce,
        };
        assert_eq!(p.to_string(), "11th century CE");

        let p = Period {
            kind: PeriodKind::Attested,
            unit: PeriodUnit::Year,
            from: 863,
            to: None,
            era: Era::Ce,
        };
        assert_eq!(p.to_string(), "863 CE");
    }
}
