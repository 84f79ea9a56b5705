//! Compiled tokenization grammar.
//!
//! A grammar is an alternation of named token alternatives compiled once
//! and shared. Alternatives are tried leftmost-first, so at any position
//! the earliest-declared alternative that matches wins; whitespace and
//! anything no alternative covers is skipped, never emitted.

use std::sync::Arc;

use regex::{Captures, Match, Regex};

use crate::analysis::token::TokenType;
use crate::error::{MovaError, Result};

/// The capture group names a grammar may use, with the token type each
/// one classifies as, in precedence order.
const GROUPS: &[(&str, TokenType)] = &[
    ("url", TokenType::Url),
    ("email", TokenType::Email),
    ("numword", TokenType::NumberWord),
    ("number", TokenType::Number),
    ("word", TokenType::Word),
    ("abbrev", TokenType::Abbreviation),
    ("symbol", TokenType::Punctuation),
    ("terminator", TokenType::Terminator),
    ("dash", TokenType::Dash),
];

/// A compiled tokenization grammar for one language.
#[derive(Clone, Debug)]
pub struct TokenizationGrammar {
    pattern: Arc<Regex>,
}

impl TokenizationGrammar {
    /// Compile a grammar from an alternation pattern whose alternatives
    /// are named capture groups (see [`TokenizationGrammar::scan`]).
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| MovaError::analysis(format!("Invalid grammar pattern: {e}")))?;

        Ok(TokenizationGrammar {
            pattern: Arc::new(regex),
        })
    }

    /// Get the pattern this grammar was compiled from.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Scan `text`, yielding each match with its classification, in input
    /// order. Rerunning over the same input yields the same sequence.
    pub fn scan<'t>(&self, text: &'t str) -> Vec<(TokenType, Match<'t>)> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| Self::classify(&caps))
            .collect()
    }

    fn classify<'t>(caps: &Captures<'t>) -> Option<(TokenType, Match<'t>)> {
        GROUPS
            .iter()
            .find_map(|&(name, token_type)| caps.name(name).map(|m| (token_type, m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_is_an_analysis_error() {
        let err = TokenizationGrammar::new("(?P<word>[unclosed").unwrap_err();
        assert!(matches!(err, MovaError::Analysis(_)));
    }

    #[test]
    fn test_scan_classifies_by_group_name() {
        let grammar =
            TokenizationGrammar::new(r"(?P<number>[0-9]+)|(?P<word>\w+)").unwrap();
        let matches = grammar.scan("слово 42");

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].0, TokenType::Word);
        assert_eq!(matches[0].1.as_str(), "слово");
        assert_eq!(matches[1].0, TokenType::Number);
        assert_eq!(matches[1].1.as_str(), "42");
    }

    #[test]
    fn test_scan_skips_unmatched_spans() {
        let grammar = TokenizationGrammar::new(r"(?P<word>[a-z]+)").unwrap();
        let matches = grammar.scan("?? ab !! cd");

        let texts: Vec<_> = matches.iter().map(|(_, m)| m.as_str()).collect();
        assert_eq!(texts, vec!["ab", "cd"]);
    }

    #[test]
    fn test_scan_is_restartable() {
        let grammar = TokenizationGrammar::new(r"(?P<word>\w+)").unwrap();
        let first: Vec<_> = grammar
            .scan("один два")
            .iter()
            .map(|(t, m)| (*t, m.start(), m.end()))
            .collect();
        let second: Vec<_> = grammar
            .scan("один два")
            .iter()
            .map(|(t, m)| (*t, m.start(), m.end()))
            .collect();

        assert_eq!(first, second);
    }
}
