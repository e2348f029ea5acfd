//! Locale-aware display text.
//!
//! Display names in the catalog carry a default rendition plus optional
//! per-locale overrides. `LocalizedText::resolve` is the single localization
//! lookup used everywhere a name is shown, so localized and non-localized
//! views share one code path.

use core::str::FromStr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Language tag, lowercase (`"en"`, `"ar"`, `"pt-br"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".to_owned())
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = !s.is_empty()
            && s.len() <= 16
            && s.chars().all(|c| c.is_ascii_lowercase() || c == '-')
            && !s.starts_with('-')
            && !s.ends_with('-');
        if !valid {
            return Err(DomainError::invalid_id(format!("Locale: {s:?}")));
        }
        Ok(Self(s.to_owned()))
    }
}

/// A display string with optional per-locale overrides.
///
/// Resolution falls back to the default text when the requested locale has no
/// override; a missing translation is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    default: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    overrides: IndexMap<Locale, String>,
}

impl LocalizedText {
    /// Text with no overrides; renders the same in every locale.
    pub fn plain(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            overrides: IndexMap::new(),
        }
    }

    /// Add or replace the rendition for one locale.
    pub fn with_override(mut self, locale: Locale, text: impl Into<String>) -> Self {
        self.overrides.insert(locale, text.into());
        self
    }

    pub fn default_text(&self) -> &str {
        &self.default
    }

    /// The rendition for `locale`, falling back to the default text.
    pub fn resolve(&self, locale: &Locale) -> &str {
        self.overrides
            .get(locale)
            .map(String::as_str)
            .unwrap_or(&self.default)
    }
}

impl ValueObject for LocalizedText {}
