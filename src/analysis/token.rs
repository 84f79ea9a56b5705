//! Token types for text analysis.
//!
//! This module defines the data structures for representing tokens
//! produced by a tokenization grammar.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, position, and byte offsets
//! - [`TokenType`] - Classification of token content (word, URL, etc.)
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! Creating a simple token:
//!
//! ```
//! use mova::analysis::token::Token;
//!
//! let token = Token::new("слово", 0);
//! assert_eq!(token.text, "слово");
//! assert_eq!(token.position, 0);
//! ```
//!
//! Creating a token with offsets and a classification:
//!
//! ```
//! use mova::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("2020-го", 1, 6, 15).with_token_type(TokenType::NumberWord);
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.token_type, TokenType::NumberWord);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Classification of the token's content
    pub token_type: TokenType,
}

/// Token type classification, one per grammar alternative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Word tokens, possibly with internal apostrophes or hyphens
    Word,
    /// URL-like tokens
    Url,
    /// Email addresses
    Email,
    /// Numeric tokens
    Number,
    /// A number joined to a word by a hyphen (e.g. an ordinal suffix)
    NumberWord,
    /// Letters joined by periods (dot-chain abbreviations)
    Abbreviation,
    /// A standalone punctuation or typographic symbol
    Punctuation,
    /// A run of sentence terminators (`.`, `!`, `?`)
    Terminator,
    /// A run of hyphen characters
    Dash,
}

impl Token {
    /// Create a new word token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            token_type: TokenType::Word,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            token_type: TokenType::Word,
        }
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
