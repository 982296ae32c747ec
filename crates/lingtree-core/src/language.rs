//! Display languages, localized label maps, and the language-preference collaborator.

use crate::{Error, Result};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Key under which the chosen display language is persisted.
pub const LANGUAGE_PREFERENCE_KEY: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Glyph shown by the language switcher.
    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "\u{1F1FA}\u{1F1F8}",
            Language::Ru => "\u{1F1F7}\u{1F1FA}",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            _ => Err(Error::UnknownLanguage {
                code: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-language display text of one node. Entries may be missing for some languages.
///
/// Deserialization keeps every well-formed cell and drops the rest (unsupported language codes,
/// non-string text), so one bad cell never rejects the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Labels(IndexMap<Language, String>);

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.insert(language, text);
        self
    }

    pub fn insert(&mut self, language: Language, text: impl Into<String>) {
        self.0.insert(language, text.into());
    }

    pub fn get(&self, language: Language) -> Option<&str> {
        self.0.get(&language).map(String::as_str)
    }

    /// Resolves the text for `language`, then `fallback`. Empty strings count as missing.
    pub fn resolve(&self, language: Language, fallback: Language) -> Option<&str> {
        self.get(language)
            .filter(|s| !s.is_empty())
            .or_else(|| self.get(fallback).filter(|s| !s.is_empty()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        self.0.iter().map(|(l, s)| (*l, s.as_str()))
    }
}

impl<'de> Deserialize<'de> for Labels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
        let mut labels = Labels::new();
        for (code, value) in raw {
            let language = match code.parse::<Language>() {
                Ok(language) => language,
                Err(_) => {
                    tracing::warn!(language = %code, "dropping label in unsupported language");
                    continue;
                }
            };
            match value {
                Value::String(text) => labels.insert(language, text),
                other => {
                    tracing::warn!(%language, value = %other, "dropping non-string label");
                }
            }
        }
        Ok(labels)
    }
}

impl FromIterator<(Language, String)> for Labels {
    fn from_iter<I: IntoIterator<Item = (Language, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Opaque key-value storage for user preferences (browser storage, a settings file, ...).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: FxHashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Reads the persisted display language. Absent or unrecognized values yield the default.
pub fn load_language(store: &dyn PreferenceStore) -> Language {
    let Some(raw) = store.get(LANGUAGE_PREFERENCE_KEY) else {
        return Language::default();
    };
    match raw.parse() {
        Ok(lang) => lang,
        Err(err) => {
            tracing::debug!(%err, "ignoring stored language preference");
            Language::default()
        }
    }
}

pub fn store_language(store: &mut dyn PreferenceStore, language: Language) {
    store.set(LANGUAGE_PREFERENCE_KEY, language.code());
}
