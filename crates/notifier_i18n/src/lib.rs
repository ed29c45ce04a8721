//! Localized strings for the schedule notifier client.
//!
//! The client speaks two languages: Hebrew (the default, right-to-left) and
//! English. Strings are looked up by key through a [`StringTable`]; a key that is
//! missing for a language resolves to the key itself so a gap in a table never
//! blanks out the UI.
//!
//! ```
//! use notifier_i18n::{keys, Language, StringTable};
//!
//! let table = StringTable::builtin();
//! assert_eq!(table.t(Language::En, keys::NEXT), "Next");
//! assert_eq!(table.t(Language::En, "unknownKey"), "unknownKey");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub mod keys;
mod tables;

/// One of the languages the client ships strings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    He,
    En,
}

/// Text direction of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::He, Language::En];

    /// The wire/storage code ("he", "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
        }
    }

    /// Parses a stored code. Unknown codes are rejected rather than guessed.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "he" => Some(Language::He),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The other language; used by the header toggle.
    pub fn toggled(&self) -> Language {
        match self {
            Language::He => Language::En,
            Language::En => Language::He,
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Language::He => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

static BUILTIN: Lazy<StringTable> = Lazy::new(StringTable::from_bundled_tables);

/// Key -> display string lookup per language.
///
/// Cheap to clone; the entries are shared.
#[derive(Debug, Clone)]
pub struct StringTable {
    entries: Arc<HashMap<Language, HashMap<String, String>>>,
}

impl StringTable {
    /// The translations bundled with the client.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    fn from_bundled_tables() -> Self {
        let mut entries = HashMap::new();
        for language in Language::ALL {
            let table = tables::entries(language)
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            entries.insert(language, table);
        }
        Self {
            entries: Arc::new(entries),
        }
    }

    /// An empty table; every lookup falls back to its key.
    pub fn empty() -> Self {
        Self {
            entries: Arc::new(HashMap::new()),
        }
    }

    /// Returns a copy of this table with one entry replaced or added.
    pub fn with_entry(&self, language: Language, key: &str, value: &str) -> Self {
        let mut entries = (*self.entries).clone();
        entries
            .entry(language)
            .or_default()
            .insert(key.to_string(), value.to_string());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Looks up `key` for `language`, falling back to the key itself.
    pub fn t<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.entries
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::builtin()
    }
}
