//! Grammar-driven tokenizer implementation.

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::language::resource::LanguageResource;

/// A tokenizer driven by a language's tokenization grammar.
///
/// Each grammar match becomes one token carrying the matched alternative's
/// classification and its byte offsets in the input.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use mova::analysis::tokenizer::{GrammarTokenizer, Tokenizer};
/// use mova::language::{Language, LanguageResource};
///
/// let resource = Arc::new(LanguageResource::load(Language::Ukrainian).unwrap());
/// let tokenizer = GrammarTokenizer::new(resource);
///
/// let tokens: Vec<_> = tokenizer.tokenize("Добрий день!").unwrap().collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].text, "Добрий");
/// ```
#[derive(Clone, Debug)]
pub struct GrammarTokenizer {
    resource: Arc<LanguageResource>,
}

impl GrammarTokenizer {
    /// Create a tokenizer over `resource`.
    pub fn new(resource: Arc<LanguageResource>) -> Self {
        GrammarTokenizer { resource }
    }

    /// The language resource driving this tokenizer.
    pub fn resource(&self) -> &LanguageResource {
        &self.resource
    }
}

impl Tokenizer for GrammarTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .resource
            .grammar()
            .scan(text)
            .into_iter()
            .enumerate()
            .map(|(position, (token_type, mat))| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                    .with_token_type(token_type)
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "grammar"
    }
}
