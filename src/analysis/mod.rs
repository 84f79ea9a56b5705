//! Text analysis built on the language resource model.
//!
//! This module provides the consumers of a [`LanguageResource`]: a
//! grammar-driven tokenizer and a suffix-stripping stemmer.
//!
//! [`LanguageResource`]: crate::language::LanguageResource

pub mod stemmer;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use stemmer::{Stemmer, SuffixStemmer};
pub use token::{Token, TokenStream, TokenType};
pub use tokenizer::{GrammarTokenizer, Tokenizer};
