//! Ukrainian language data.
//!
//! Supplies the literal values behind the Ukrainian [`LanguageResource`]:
//! the tokenization grammar, punctuation symbols, vowel set, and the six
//! suffix rule groups.
//!
//! [`LanguageResource`]: crate::language::resource::LanguageResource

use std::sync::LazyLock;

use crate::language::grammar::TokenizationGrammar;
use crate::language::rules::{SuffixRule, SuffixRuleSet};

/// The tokenization grammar pattern, one named alternative per line, in
/// precedence order: URL, email, hyphenated numeric-word, number, word,
/// abbreviation dot chain, standalone symbol, terminator run, dash run.
///
/// Word tokens admit internal apostrophes, quote marks, and hyphens but
/// never start or end on one; the combining stress accent (U+0301) rides
/// along inside word-character classes but cannot start a token on its
/// own, so a bare accent mark is skipped.
pub const WORD_TOKENIZATION_PATTERN: &str = concat!(
    r"(?P<url>\w+://(?:[a-zA-Z0-9]|[$-_@.&+])+)",
    r"|(?P<email>[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+)",
    r"|(?P<numword>[0-9]+-[а-яА-ЯіїІЇ'’`\x{301}]+)",
    r"|(?P<number>[+-]?[0-9](?:[0-9,.-]*[0-9])?)",
    r"|(?P<word>[\w--\p{M}](?:['’`\w-]?\w+)*)",
    r"|(?P<abbrev>\w\.(?:\w\.)+\w?)",
    r##"|(?P<symbol>["#$%&*+,/:;<=>@^`~…\\⟨⟩{}\[|\]‒–—―«»“”‘’'№])"##,
    r"|(?P<terminator>[.!?]+)",
    r"|(?P<dash>-+)",
);

/// Punctuation symbols recognized as standalone tokens by downstream
/// consumers, in declared order.
pub const PUNCTUATION_SYMBOLS: &[char] =
    &['.', '!', '?', '"', '\'', ',', ':', ';', '-', '(', ')'];

/// The Ukrainian vowels. The stem region of a word starts after the
/// first of these.
pub const VOWELS: &[char] = &['а', 'е', 'и', 'о', 'у', 'ю', 'я', 'і', 'ї', 'є'];

/// Characters that must immediately precede a gated perfective ending.
const PERFECTIVE_GATE: &[char] = &['а', 'я'];

const PERFECTIVE: &[SuffixRule] = &[
    SuffixRule::new("ив"),
    SuffixRule::new("ивши"),
    SuffixRule::new("ившись"),
    SuffixRule::new("ыв"),
    SuffixRule::new("ывши"),
    SuffixRule::new("ывшись"),
    SuffixRule::gated("в", PERFECTIVE_GATE),
    SuffixRule::gated("вши", PERFECTIVE_GATE),
    SuffixRule::gated("вшись", PERFECTIVE_GATE),
];

const REFLEXIVE: &[SuffixRule] = &[
    SuffixRule::new("ся"),
    SuffixRule::new("сь"),
    SuffixRule::new("си"),
];

const ADJECTIVE: &[SuffixRule] = &[
    SuffixRule::new("ими"),
    SuffixRule::new("ій"),
    SuffixRule::new("ий"),
    SuffixRule::new("а"),
    SuffixRule::new("е"),
    SuffixRule::new("ова"),
    SuffixRule::new("ове"),
    SuffixRule::new("ів"),
    SuffixRule::new("є"),
    SuffixRule::new("їй"),
    SuffixRule::new("єє"),
    SuffixRule::new("еє"),
    SuffixRule::new("я"),
    SuffixRule::new("ім"),
    SuffixRule::new("ем"),
    SuffixRule::new("им"),
    SuffixRule::new("ім"),
    SuffixRule::new("их"),
    SuffixRule::new("іх"),
    SuffixRule::new("ою"),
    SuffixRule::new("йми"),
    SuffixRule::new("іми"),
    SuffixRule::new("у"),
    SuffixRule::new("ю"),
    SuffixRule::new("ого"),
    SuffixRule::new("ому"),
    SuffixRule::new("ої"),
];

const PARTICIPLE: &[SuffixRule] = &[
    SuffixRule::new("ий"),
    SuffixRule::new("ого"),
    SuffixRule::new("ому"),
    SuffixRule::new("им"),
    SuffixRule::new("ім"),
    SuffixRule::new("а"),
    SuffixRule::new("ій"),
    SuffixRule::new("у"),
    SuffixRule::new("ою"),
    SuffixRule::new("ій"),
    SuffixRule::new("і"),
    SuffixRule::new("их"),
    SuffixRule::new("йми"),
    SuffixRule::new("их"),
];

const VERB: &[SuffixRule] = &[
    SuffixRule::new("сь"),
    SuffixRule::new("ся"),
    SuffixRule::new("ив"),
    SuffixRule::new("ать"),
    SuffixRule::new("ять"),
    SuffixRule::new("у"),
    SuffixRule::new("ю"),
    SuffixRule::new("ав"),
    SuffixRule::new("али"),
    SuffixRule::new("учи"),
    SuffixRule::new("ячи"),
    SuffixRule::new("вши"),
    SuffixRule::new("ши"),
    SuffixRule::new("е"),
    SuffixRule::new("ме"),
    SuffixRule::new("ати"),
    SuffixRule::new("яти"),
    SuffixRule::new("є"),
];

const NOUN: &[SuffixRule] = &[
    SuffixRule::new("а"),
    SuffixRule::new("ев"),
    SuffixRule::new("ов"),
    SuffixRule::new("е"),
    SuffixRule::new("ями"),
    SuffixRule::new("ами"),
    SuffixRule::new("еи"),
    SuffixRule::new("и"),
    SuffixRule::new("ей"),
    SuffixRule::new("ой"),
    SuffixRule::new("ий"),
    SuffixRule::new("й"),
    SuffixRule::new("иям"),
    SuffixRule::new("ям"),
    SuffixRule::new("ием"),
    SuffixRule::new("ем"),
    SuffixRule::new("ам"),
    SuffixRule::new("ом"),
    SuffixRule::new("о"),
    SuffixRule::new("у"),
    SuffixRule::new("ах"),
    SuffixRule::new("иях"),
    SuffixRule::new("ях"),
    SuffixRule::new("ы"),
    SuffixRule::new("ь"),
    SuffixRule::new("ию"),
    SuffixRule::new("ью"),
    SuffixRule::new("ю"),
    SuffixRule::new("ия"),
    SuffixRule::new("ья"),
    SuffixRule::new("я"),
    SuffixRule::new("і"),
    SuffixRule::new("ові"),
    SuffixRule::new("ї"),
    SuffixRule::new("ею"),
    SuffixRule::new("єю"),
    SuffixRule::new("ою"),
    SuffixRule::new("є"),
    SuffixRule::new("еві"),
    SuffixRule::new("ем"),
    SuffixRule::new("єм"),
    SuffixRule::new("ів"),
    SuffixRule::new("їв"),
    SuffixRule::new("ю"),
];

const SUFFIX_RULES: SuffixRuleSet =
    SuffixRuleSet::new(PERFECTIVE, REFLEXIVE, ADJECTIVE, PARTICIPLE, VERB, NOUN);

static GRAMMAR: LazyLock<TokenizationGrammar> = LazyLock::new(|| {
    TokenizationGrammar::new(WORD_TOKENIZATION_PATTERN)
        .expect("built-in Ukrainian tokenization pattern is valid")
});

/// The compiled Ukrainian tokenization grammar, shared across callers.
pub fn grammar() -> TokenizationGrammar {
    GRAMMAR.clone()
}

/// The Ukrainian suffix rule set.
pub fn suffix_rules() -> SuffixRuleSet {
    SUFFIX_RULES
}
