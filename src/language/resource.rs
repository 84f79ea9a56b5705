//! The per-language resource facade.
//!
//! A [`LanguageResource`] composes everything a tokenizer or stemmer
//! needs for one language: the compiled tokenization grammar, punctuation
//! symbols, vowels, the six suffix rule groups, and the optional
//! abbreviation and vocabulary resources. Instances are immutable after
//! construction and safely shared by any number of concurrent readers.
//!
//! # Examples
//!
//! ```
//! use mova::language::{Language, LanguageResource};
//!
//! let resource = LanguageResource::load(Language::Ukrainian).unwrap();
//! assert_eq!(resource.short_code(), "ua");
//! assert!(resource.is_vowel('а'));
//! assert!(!resource.is_vowel('б'));
//! ```

use crate::error::Result;
use crate::language::abbreviation::AbbreviationTable;
use crate::language::grammar::TokenizationGrammar;
use crate::language::loader::{FsResourceProvider, ResourceProvider};
use crate::language::registry::{Language, LanguageRegistry};
use crate::language::rules::SuffixRuleSet;
use crate::language::ukrainian;
use crate::language::vocabulary::Vocabulary;

/// Immutable language resource bundle.
#[derive(Clone, Debug)]
pub struct LanguageResource {
    language: Language,
    grammar: TokenizationGrammar,
    punctuation_symbols: &'static [char],
    vowels: &'static [char],
    suffix_groups: SuffixRuleSet,
    abbreviations: AbbreviationTable,
    vocabulary: Vocabulary,
}

impl LanguageResource {
    /// Load the resource for `language`, reading optional abbreviation
    /// and vocabulary resources from the default provider (the
    /// `resources/` directory).
    pub fn load(language: Language) -> Result<Self> {
        Self::load_with(language, &FsResourceProvider::default())
    }

    /// Load the resource for `language` through `provider`.
    ///
    /// Missing abbreviation or vocabulary resources degrade to empty
    /// instances; a resource that exists but cannot be parsed aborts
    /// construction, so a partially-initialized instance is never
    /// returned. All provider reads complete before this returns.
    pub fn load_with(language: Language, provider: &dyn ResourceProvider) -> Result<Self> {
        let code = language.short_code();
        let abbreviations = AbbreviationTable::load(provider, code)?;
        let vocabulary = Vocabulary::load(provider, code)?;

        let (grammar, punctuation_symbols, vowels, suffix_groups) = match language {
            Language::Ukrainian => (
                ukrainian::grammar(),
                ukrainian::PUNCTUATION_SYMBOLS,
                ukrainian::VOWELS,
                ukrainian::suffix_rules(),
            ),
        };

        Ok(LanguageResource {
            language,
            grammar,
            punctuation_symbols,
            vowels,
            suffix_groups,
            abbreviations,
            vocabulary,
        })
    }

    /// Resolve `code` against the registry and load its resource.
    ///
    /// An unregistered code fails with
    /// [`MovaError::UnregisteredLanguage`] before any resource is read.
    ///
    /// [`MovaError::UnregisteredLanguage`]: crate::error::MovaError::UnregisteredLanguage
    pub fn for_code(code: &str) -> Result<Self> {
        Self::load(LanguageRegistry::resolve(code)?)
    }

    /// Resolve `code` against the registry and load its resource through
    /// `provider`.
    pub fn for_code_with(code: &str, provider: &dyn ResourceProvider) -> Result<Self> {
        Self::load_with(LanguageRegistry::resolve(code)?, provider)
    }

    /// The language this resource belongs to.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The language's registered short code.
    pub fn short_code(&self) -> &'static str {
        self.language.short_code()
    }

    /// The compiled tokenization grammar.
    pub fn grammar(&self) -> &TokenizationGrammar {
        &self.grammar
    }

    /// Punctuation symbols, in declared order.
    pub fn punctuation_symbols(&self) -> &'static [char] {
        self.punctuation_symbols
    }

    /// The language's vowels.
    pub fn vowels(&self) -> &'static [char] {
        self.vowels
    }

    /// Whether `c` is a vowel of this language (case-insensitive).
    pub fn is_vowel(&self, c: char) -> bool {
        c.to_lowercase().any(|lower| self.vowels.contains(&lower))
    }

    /// The six suffix rule groups.
    pub fn suffix_groups(&self) -> &SuffixRuleSet {
        &self.suffix_groups
    }

    /// The abbreviation table.
    pub fn abbreviations(&self) -> &AbbreviationTable {
        &self.abbreviations
    }

    /// The vocabulary resource.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MovaError;
    use crate::language::loader::MemoryProvider;
    use crate::language::rules::SuffixGroupKind;

    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_load_without_backing_files() {
        let provider = MemoryProvider::new();
        let resource = LanguageResource::load_with(Language::Ukrainian, &provider).unwrap();

        assert_eq!(resource.short_code(), "ua");
        assert!(resource.abbreviations().is_empty());
        assert!(resource.vocabulary().is_empty());
        assert_eq!(resource.vocabulary().language(), "ua");
    }

    #[test]
    fn test_load_with_backing_files() {
        let provider = MemoryProvider::new()
            .insert("ua_abbr.json", r#"{"км": {"expansion": "кілометр"}}"#)
            .insert(
                "__data__/ua_vocab.json",
                r#"{"мови": {"lemma": "мова", "frequency": 7}}"#,
            );
        let resource = LanguageResource::load_with(Language::Ukrainian, &provider).unwrap();

        assert_eq!(resource.abbreviations().len(), 1);
        assert_eq!(resource.vocabulary().lookup("мови").unwrap().lemma, "мова");
    }

    #[test]
    fn test_malformed_resource_aborts_construction() {
        let provider = MemoryProvider::new().insert("ua_abbr.json", "{broken");
        let err = LanguageResource::load_with(Language::Ukrainian, &provider).unwrap_err();
        assert!(matches!(err, MovaError::Resource(_)));
    }

    #[test]
    fn test_suffix_groups_all_present() {
        let provider = MemoryProvider::new();
        let resource = LanguageResource::load_with(Language::Ukrainian, &provider).unwrap();
        for kind in SuffixGroupKind::ALL {
            assert!(!resource.suffix_groups().group(kind).is_empty());
        }
    }

    #[test]
    fn test_unregistered_code_reads_nothing() {
        struct CountingProvider(AtomicUsize);

        impl ResourceProvider for CountingProvider {
            fn read(&self, _path: &Path) -> Result<Option<String>> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(None)
            }
        }

        let provider = CountingProvider(AtomicUsize::new(0));
        let err = LanguageResource::for_code_with("xx", &provider).unwrap_err();

        assert!(matches!(err, MovaError::UnregisteredLanguage(_)));
        assert_eq!(provider.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_is_vowel_ignores_case() {
        let provider = MemoryProvider::new();
        let resource = LanguageResource::load_with(Language::Ukrainian, &provider).unwrap();
        assert!(resource.is_vowel('А'));
        assert!(resource.is_vowel('ї'));
        assert!(!resource.is_vowel('д'));
    }
}
