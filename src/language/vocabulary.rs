//! Vocabulary resource.
//!
//! A lemma/frequency lexicon loaded from an optional JSON resource at
//! `__data__/<code>_vocab.json`. When the backing resource is absent the
//! vocabulary is constructed empty but still tagged with its language
//! code, so "is this vocabulary empty for language X" stays answerable
//! without special-casing.

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::loader::{ResourceProvider, load_optional};

/// Lemma and corpus frequency for one word form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// The dictionary form.
    pub lemma: String,

    /// Occurrence count in the backing corpus.
    #[serde(default)]
    pub frequency: u64,
}

/// A language-tagged lexical resource.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    language: String,
    entries: AHashMap<String, VocabEntry>,
}

impl Vocabulary {
    /// Create an empty vocabulary tagged with `language`.
    pub fn empty<S: Into<String>>(language: S) -> Self {
        Vocabulary {
            language: language.into(),
            entries: AHashMap::new(),
        }
    }

    /// Load the vocabulary for `code` from its conventional resource
    /// path. A missing resource yields an empty vocabulary tagged with
    /// `code`.
    pub fn load(provider: &dyn ResourceProvider, code: &str) -> Result<Self> {
        let path = Path::new("__data__").join(format!("{code}_vocab.json"));
        let entries: Option<AHashMap<String, VocabEntry>> = load_optional(provider, &path)?;

        Ok(match entries {
            Some(entries) => Vocabulary {
                language: code.to_string(),
                entries,
            },
            None => Vocabulary::empty(code),
        })
    }

    /// The short code of the language this vocabulary belongs to.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Look up a word form.
    pub fn lookup(&self, word: &str) -> Option<&VocabEntry> {
        self.entries.get(word)
    }

    /// Number of word forms in the vocabulary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::loader::MemoryProvider;

    #[test]
    fn test_empty_vocabulary_keeps_language_tag() {
        let vocab = Vocabulary::empty("ua");
        assert!(vocab.is_empty());
        assert_eq!(vocab.language(), "ua");
    }

    #[test]
    fn test_missing_resource_yields_empty_tagged_vocabulary() {
        let provider = MemoryProvider::new();
        let vocab = Vocabulary::load(&provider, "ua").unwrap();
        assert!(vocab.is_empty());
        assert_eq!(vocab.language(), "ua");
    }

    #[test]
    fn test_load_and_lookup() {
        let provider = MemoryProvider::new().insert(
            "__data__/ua_vocab.json",
            r#"{
                "книгами": {"lemma": "книга", "frequency": 154},
                "мови": {"lemma": "мова"}
            }"#,
        );
        let vocab = Vocabulary::load(&provider, "ua").unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.language(), "ua");
        let entry = vocab.lookup("книгами").unwrap();
        assert_eq!(entry.lemma, "книга");
        assert_eq!(entry.frequency, 154);
        assert_eq!(vocab.lookup("мови").unwrap().frequency, 0);
        assert!(vocab.lookup("відсутнє").is_none());
    }
}
