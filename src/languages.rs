//! Language registry: the fixed table of supported languages.
//!
//! Clients name languages by a canonical lowercase key (e.g. "twi"). The
//! registry maps each key to the provider's own language code and to the
//! display name returned in responses. The table is a compile-time static
//! and is never mutated, so it can be shared between requests without
//! locking.

use std::collections::BTreeMap;

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Canonical lowercase key used by clients (e.g. "twi")
    pub name: &'static str,

    /// Language code understood by the translation provider (e.g. "ak")
    pub provider_code: &'static str,

    /// Human-readable name returned in responses (e.g. "Twi (Akan)")
    pub display_name: &'static str,
}

/// Built-in language table.
static LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry {
        name: "english",
        provider_code: "en-GB",
        display_name: "English",
    },
    LanguageEntry {
        name: "twi",
        provider_code: "ak",
        display_name: "Twi (Akan)",
    },
    LanguageEntry {
        name: "ga",
        provider_code: "gaa",
        display_name: "Ga",
    },
    LanguageEntry {
        name: "ewe",
        provider_code: "ee",
        display_name: "Ewe",
    },
];

/// Lookup failure for a key that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language: '{0}'")]
pub struct UnknownLanguage(pub String);

/// Read-only view over a language table.
#[derive(Debug, Clone, Copy)]
pub struct LanguageRegistry {
    languages: &'static [LanguageEntry],
}

impl LanguageRegistry {
    /// Registry backed by the built-in table.
    pub fn builtin() -> Self {
        Self {
            languages: LANGUAGES,
        }
    }

    /// Look up a language by its canonical key.
    ///
    /// The key must already be lowercase; no normalization happens here.
    ///
    /// # Returns
    /// * `Ok(&LanguageEntry)` if the key is in the table
    /// * `Err(UnknownLanguage)` otherwise
    pub fn resolve(&self, name: &str) -> Result<&'static LanguageEntry, UnknownLanguage> {
        self.languages
            .iter()
            .find(|lang| lang.name == name)
            .ok_or_else(|| UnknownLanguage(name.to_string()))
    }

    /// Snapshot of every key mapped to its display name.
    pub fn list_all(&self) -> BTreeMap<String, String> {
        self.languages
            .iter()
            .map(|lang| (lang.name.to_string(), lang.display_name.to_string()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static LanguageEntry> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
