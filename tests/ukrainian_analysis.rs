//! End-to-end tokenization and stemming over the Ukrainian resource.

use std::sync::Arc;

use mova::analysis::stemmer::{Stemmer, SuffixStemmer};
use mova::analysis::token::{Token, TokenType};
use mova::analysis::tokenizer::{GrammarTokenizer, Tokenizer};
use mova::language::{Language, LanguageResource, MemoryProvider};

fn resource() -> Arc<LanguageResource> {
    Arc::new(LanguageResource::load_with(Language::Ukrainian, &MemoryProvider::new()).unwrap())
}

fn tokenize(input: &str) -> Vec<Token> {
    GrammarTokenizer::new(resource())
        .tokenize(input)
        .unwrap()
        .collect()
}

#[test]
fn word_then_url_yields_exactly_two_tokens() {
    let tokens = tokenize("Іван https://example.com");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "Іван");
    assert_eq!(tokens[0].token_type, TokenType::Word);
    assert_eq!(tokens[1].text, "https://example.com");
    assert_eq!(tokens[1].token_type, TokenType::Url);
}

#[test]
fn ellipsis_is_a_single_terminator_token() {
    let tokens = tokenize("...");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_type, TokenType::Terminator);
}

#[test]
fn digits_hyphen_ordinal_suffix_is_one_token() {
    let tokens = tokenize("2020-го");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "2020-го");
    assert_eq!(tokens[0].token_type, TokenType::NumberWord);
}

#[test]
fn tokenizing_twice_produces_identical_sequences() {
    let input = "У 2020-му Іван написав п'ять листів на ivan@ukr.net... Так?!";
    assert_eq!(tokenize(input), tokenize(input));
}

#[test]
fn mixed_sentence_classification() {
    let tokens = tokenize("Це — «добре», сказав він у 2020-му!");
    let kinds: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();

    assert_eq!(
        kinds,
        vec![
            TokenType::Word,        // Це
            TokenType::Punctuation, // —
            TokenType::Punctuation, // «
            TokenType::Word,        // добре
            TokenType::Punctuation, // »
            TokenType::Punctuation, // ,
            TokenType::Word,        // сказав
            TokenType::Word,        // він
            TokenType::Word,        // у
            TokenType::NumberWord,  // 2020-му
            TokenType::Terminator,  // !
        ]
    );
}

#[test]
fn stemming_follows_the_group_contract() {
    let stemmer = SuffixStemmer::new(resource());

    // Nouns strip their case endings on the region after the first vowel.
    assert_eq!(stemmer.stem("книгами"), "книг");
    // Perfective wins over reflexive when its gate is satisfied.
    assert_eq!(stemmer.stem("засміявшись"), "засм");
    // With no perfective match, the reflexive ending strips instead.
    assert_eq!(stemmer.stem("навчалась"), "навчал");
    // Pure-consonant words have no stem region at all.
    assert_eq!(stemmer.stem("брр"), "брр");
}

#[test]
fn stemming_tokenized_words_round_trips() {
    let stemmer = SuffixStemmer::new(resource());
    let tokens = tokenize("книгами та словом");

    let stems: Vec<String> = tokens
        .iter()
        .filter(|t| t.token_type == TokenType::Word)
        .map(|t| stemmer.stem(&t.text))
        .collect();

    assert_eq!(stems, vec!["книг", "та", "слов"]);
}
