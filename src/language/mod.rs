//! Language resource model.
//!
//! Each supported language contributes a tokenization grammar, punctuation
//! symbols, a vowel set, six ordered suffix rule groups, and optional
//! abbreviation and vocabulary resources, all behind the immutable
//! [`LanguageResource`] facade. The [`LanguageRegistry`] resolves short
//! codes and names to concrete languages.

pub mod abbreviation;
pub mod grammar;
pub mod loader;
pub mod registry;
pub mod resource;
pub mod rules;
pub mod ukrainian;
pub mod vocabulary;

// Re-export commonly used types
pub use abbreviation::{AbbreviationEntry, AbbreviationTable};
pub use grammar::TokenizationGrammar;
pub use loader::{FsResourceProvider, MemoryProvider, ResourceProvider, load_optional};
pub use registry::{Language, LanguageRegistry};
pub use resource::LanguageResource;
pub use rules::{SuffixGroup, SuffixGroupKind, SuffixRule, SuffixRuleSet};
pub use vocabulary::{VocabEntry, Vocabulary};
