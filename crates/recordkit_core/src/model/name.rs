//! Display-name shapes: plain text or per-locale maps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locale used when resolution finds no exact match.
pub const DEFAULT_LOCALE: &str = "en";

/// Locale code to text mapping for internationalized names.
pub type LocalizedText = BTreeMap<String, String>;

/// Record display name, either plain or internationalized.
///
/// Serialized untagged: a plain name is a bare string on the wire, a
/// localized name is a locale-to-text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayName {
    /// Single plain-text name.
    Plain(String),
    /// Per-locale names.
    Localized(LocalizedText),
}

impl DisplayName {
    /// Resolves the display text for `locale`.
    ///
    /// Lookup order: exact locale, then [`DEFAULT_LOCALE`], then the first
    /// entry in locale order. Returns `None` only for an empty localized map.
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        match self {
            Self::Plain(text) => Some(text.as_str()),
            Self::Localized(map) => map
                .get(locale)
                .or_else(|| map.get(DEFAULT_LOCALE))
                .or_else(|| map.values().next())
                .map(String::as_str),
        }
    }
}

impl From<String> for DisplayName {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<&str> for DisplayName {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<LocalizedText> for DisplayName {
    fn from(value: LocalizedText) -> Self {
        Self::Localized(value)
    }
}
