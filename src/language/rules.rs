//! Suffix rule groups consumed by the stemmer.
//!
//! A language defines six ordered groups of literal suffix alternatives:
//! perfective, reflexive, adjective, participle, verb, and noun. Each
//! alternative is anchored at end-of-word; some carry a gate requiring a
//! specific character immediately before the matched suffix. The group
//! application order is the stemming contract and lives in
//! [`crate::analysis::stemmer::suffix::SuffixStemmer`].

use serde::{Deserialize, Serialize};

/// The six grammatical inflection classes a language's rule set covers.
///
/// Discriminants index into [`SuffixRuleSet`] and follow the contract's
/// application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuffixGroupKind {
    /// Perfective gerund endings
    Perfective = 0,
    /// Reflexive particle endings
    Reflexive = 1,
    /// Adjective endings
    Adjective = 2,
    /// Participle endings
    Participle = 3,
    /// Verb endings
    Verb = 4,
    /// Noun-case endings
    Noun = 5,
}

impl SuffixGroupKind {
    /// All six kinds, in contract application order.
    pub const ALL: [SuffixGroupKind; 6] = [
        SuffixGroupKind::Perfective,
        SuffixGroupKind::Reflexive,
        SuffixGroupKind::Adjective,
        SuffixGroupKind::Participle,
        SuffixGroupKind::Verb,
        SuffixGroupKind::Noun,
    ];

    /// The group's name (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        match self {
            SuffixGroupKind::Perfective => "perfective",
            SuffixGroupKind::Reflexive => "reflexive",
            SuffixGroupKind::Adjective => "adjective",
            SuffixGroupKind::Participle => "participle",
            SuffixGroupKind::Verb => "verb",
            SuffixGroupKind::Noun => "noun",
        }
    }
}

impl std::fmt::Display for SuffixGroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One literal suffix alternative, optionally gated on the character
/// immediately preceding the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuffixRule {
    suffix: &'static str,
    gate: Option<&'static [char]>,
}

impl SuffixRule {
    /// An ungated suffix alternative.
    pub const fn new(suffix: &'static str) -> Self {
        SuffixRule { suffix, gate: None }
    }

    /// A suffix alternative that only matches when the character
    /// immediately before it is one of `gate`.
    pub const fn gated(suffix: &'static str, gate: &'static [char]) -> Self {
        SuffixRule {
            suffix,
            gate: Some(gate),
        }
    }

    /// The literal word ending.
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// The gate character class, if any.
    pub fn gate(&self) -> Option<&'static [char]> {
        self.gate
    }
}

/// One ordered group of suffix alternatives.
#[derive(Clone, Copy, Debug)]
pub struct SuffixGroup {
    kind: SuffixGroupKind,
    rules: &'static [SuffixRule],
}

impl SuffixGroup {
    /// Create a group from its alternatives, in declared order.
    pub const fn new(kind: SuffixGroupKind, rules: &'static [SuffixRule]) -> Self {
        SuffixGroup { kind, rules }
    }

    /// The inflection class this group covers.
    pub fn kind(&self) -> SuffixGroupKind {
        self.kind
    }

    /// The group's alternatives, in declared order.
    pub fn rules(&self) -> &'static [SuffixRule] {
        self.rules
    }

    /// Whether the group has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The longest alternative matching the end of `region`.
    ///
    /// End-anchored alternation prefers the leftmost match, which for
    /// overlapping suffixes is the longest one; gated alternatives only
    /// count when their gate accepts the character immediately before the
    /// match. `preceding` supplies the character before `region` for
    /// gates on a whole-region match.
    pub fn longest_match(&self, region: &str, preceding: Option<char>) -> Option<&SuffixRule> {
        let mut best: Option<&SuffixRule> = None;
        for rule in self.rules {
            if rule.suffix.is_empty() || !region.ends_with(rule.suffix) {
                continue;
            }
            if best.is_some_and(|b| rule.suffix.len() <= b.suffix.len()) {
                continue;
            }
            if let Some(gate) = rule.gate {
                let boundary = region.len() - rule.suffix.len();
                let before = region[..boundary].chars().next_back().or(preceding);
                if !before.is_some_and(|c| gate.contains(&c)) {
                    continue;
                }
            }
            best = Some(rule);
        }
        best
    }
}

/// The six suffix groups of one language, in contract application order.
///
/// Constructed from exactly six alternative lists, so every rule set
/// always contains every group; a group may be empty only for a language
/// with no such inflection class.
#[derive(Clone, Copy, Debug)]
pub struct SuffixRuleSet {
    groups: [SuffixGroup; 6],
}

impl SuffixRuleSet {
    /// Assemble a rule set from the six groups' alternatives.
    pub const fn new(
        perfective: &'static [SuffixRule],
        reflexive: &'static [SuffixRule],
        adjective: &'static [SuffixRule],
        participle: &'static [SuffixRule],
        verb: &'static [SuffixRule],
        noun: &'static [SuffixRule],
    ) -> Self {
        SuffixRuleSet {
            groups: [
                SuffixGroup::new(SuffixGroupKind::Perfective, perfective),
                SuffixGroup::new(SuffixGroupKind::Reflexive, reflexive),
                SuffixGroup::new(SuffixGroupKind::Adjective, adjective),
                SuffixGroup::new(SuffixGroupKind::Participle, participle),
                SuffixGroup::new(SuffixGroupKind::Verb, verb),
                SuffixGroup::new(SuffixGroupKind::Noun, noun),
            ],
        }
    }

    /// The group covering `kind`.
    pub fn group(&self, kind: SuffixGroupKind) -> &SuffixGroup {
        &self.groups[kind as usize]
    }

    /// Iterate over the groups in contract application order.
    pub fn groups(&self) -> impl Iterator<Item = &SuffixGroup> {
        self.groups.iter()
    }
}
