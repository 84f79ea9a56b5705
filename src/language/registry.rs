//! Static registry mapping language short codes to registered languages.
//!
//! Supported languages form a closed set: adding one means adding a
//! [`Language`] variant and one row to the registry table. Shared logic
//! never changes.

use serde::{Deserialize, Serialize};

use crate::error::{MovaError, Result};

/// A language with registered resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Ukrainian ("ua")
    Ukrainian,
}

impl Language {
    /// All registered languages.
    pub const ALL: &'static [Language] = &[Language::Ukrainian];

    /// The short code this language is registered under (e.g. `"ua"`).
    pub fn short_code(&self) -> &'static str {
        LanguageRegistry::code_of(*self)
    }

    /// The human-readable name this language is registered under.
    pub fn display_name(&self) -> &'static str {
        LanguageRegistry::name_of(*self)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One registry row: short code, display name, language.
struct Registration {
    code: &'static str,
    name: &'static str,
    language: Language,
}

/// The registry table. The code <-> language mapping is bijective.
const REGISTRATIONS: &[Registration] = &[Registration {
    code: "ua",
    name: "Ukrainian",
    language: Language::Ukrainian,
}];

/// Resolves language short codes and names against the static table.
///
/// Lookup of an unregistered code or name fails with
/// [`MovaError::UnregisteredLanguage`]; the reverse direction is total for
/// every [`Language`] variant.
#[derive(Debug, Clone, Copy)]
pub struct LanguageRegistry;

impl LanguageRegistry {
    /// Resolve a short code (e.g. `"ua"`) to its language.
    pub fn resolve(code: &str) -> Result<Language> {
        REGISTRATIONS
            .iter()
            .find(|r| r.code == code)
            .map(|r| r.language)
            .ok_or_else(|| MovaError::unregistered_language(code))
    }

    /// Resolve a human-readable name (e.g. `"Ukrainian"`) to its language.
    pub fn resolve_name(name: &str) -> Result<Language> {
        REGISTRATIONS
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.language)
            .ok_or_else(|| MovaError::unregistered_language(name))
    }

    /// The short code a language is registered under.
    pub fn code_of(language: Language) -> &'static str {
        Self::row_of(language).code
    }

    /// The display name a language is registered under.
    pub fn name_of(language: Language) -> &'static str {
        Self::row_of(language).name
    }

    /// Iterate over all registered languages.
    pub fn languages() -> impl Iterator<Item = Language> {
        REGISTRATIONS.iter().map(|r| r.language)
    }

    fn row_of(language: Language) -> &'static Registration {
        REGISTRATIONS
            .iter()
            .find(|r| r.language == language)
            .expect("every Language variant has a registry row")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_code() {
        assert_eq!(LanguageRegistry::resolve("ua").unwrap(), Language::Ukrainian);
    }

    #[test]
    fn test_resolve_name() {
        assert_eq!(
            LanguageRegistry::resolve_name("Ukrainian").unwrap(),
            Language::Ukrainian
        );
    }

    #[test]
    fn test_resolve_unregistered() {
        let err = LanguageRegistry::resolve("xx").unwrap_err();
        assert!(matches!(err, MovaError::UnregisteredLanguage(_)));

        let err = LanguageRegistry::resolve_name("Klingon").unwrap_err();
        assert!(matches!(err, MovaError::UnregisteredLanguage(_)));
    }

    #[test]
    fn test_code_name_round_trip() {
        for language in LanguageRegistry::languages() {
            assert_eq!(
                LanguageRegistry::resolve(language.short_code()).unwrap(),
                language
            );
            assert_eq!(
                LanguageRegistry::resolve_name(language.display_name()).unwrap(),
                language
            );
        }
    }

    #[test]
    fn test_all_variants_registered() {
        for language in Language::ALL {
            assert!(!language.short_code().is_empty());
            assert!(!language.display_name().is_empty());
        }
        assert_eq!(Language::ALL.len(), LanguageRegistry::languages().count());
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::Ukrainian.to_string(), "Ukrainian");
    }
}
