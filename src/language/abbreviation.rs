//! Abbreviation table.
//!
//! Maps abbreviation text to its expansion and metadata. Populated once at
//! construction from an optional JSON resource located at
//! `<code>_abbr.json`; absent by default.

use std::path::PathBuf;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::loader::{ResourceProvider, load_optional};

/// Expansion and metadata for one abbreviation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbbreviationEntry {
    /// The expanded form.
    pub expansion: String,

    /// Optional category tag (e.g. measurement, title).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Lookup table from abbreviation text to its entry.
#[derive(Clone, Debug, Default)]
pub struct AbbreviationTable {
    entries: AHashMap<String, AbbreviationEntry>,
}

impl AbbreviationTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, AbbreviationEntry)>,
    {
        AbbreviationTable {
            entries: entries.into_iter().collect(),
        }
    }

    /// Load the table for `code` from its conventional resource path.
    /// A missing resource yields an empty table.
    pub fn load(provider: &dyn ResourceProvider, code: &str) -> Result<Self> {
        let path = PathBuf::from(format!("{code}_abbr.json"));
        let entries: Option<AHashMap<String, AbbreviationEntry>> =
            load_optional(provider, &path)?;

        Ok(entries
            .map(|entries| AbbreviationTable { entries })
            .unwrap_or_default())
    }

    /// Look up an abbreviation. Never fails; O(1) expected.
    pub fn lookup(&self, text: &str) -> Option<&AbbreviationEntry> {
        self.entries.get(text)
    }

    /// Number of abbreviations in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
