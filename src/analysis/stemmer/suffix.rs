//! Layered suffix-stripping stemmer.
//!
//! Strips inflectional endings using a language's vowel set and suffix
//! rule groups. The stem search begins only after the word's first vowel;
//! groups are applied to that region in a fixed order:
//!
//! 1. perfective, or (when it does not match) an optional reflexive
//!    ending,
//! 2. adjective, else participle,
//! 3. verb, only when neither adjective nor participle matched,
//! 4. noun, applied to the residual stem regardless of earlier strips.
//!
//! No group ever signals an error; absence of a match leaves the stem
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use mova::analysis::stemmer::{Stemmer, SuffixStemmer};
//! use mova::language::{Language, LanguageResource};
//!
//! let resource = Arc::new(LanguageResource::load(Language::Ukrainian).unwrap());
//! let stemmer = SuffixStemmer::new(resource);
//!
//! assert_eq!(stemmer.stem("книгами"), "книг");
//! assert_eq!(stemmer.stem("мова"), "мов");
//! ```

use std::sync::Arc;

use crate::analysis::stemmer::Stemmer;
use crate::language::resource::LanguageResource;
use crate::language::rules::{SuffixGroup, SuffixGroupKind};

/// Suffix-stripping stemmer over a language resource.
#[derive(Clone, Debug)]
pub struct SuffixStemmer {
    resource: Arc<LanguageResource>,
}

impl SuffixStemmer {
    /// Create a stemmer over `resource`.
    pub fn new(resource: Arc<LanguageResource>) -> Self {
        SuffixStemmer { resource }
    }

    /// The language resource driving this stemmer.
    pub fn resource(&self) -> &LanguageResource {
        &self.resource
    }

    /// Byte index where the stem region starts: just past the first
    /// vowel. `None` for a word with no vowel.
    fn stem_region_start(&self, word: &str) -> Option<usize> {
        word.char_indices()
            .find(|&(_, c)| self.resource.is_vowel(c))
            .map(|(index, c)| index + c.len_utf8())
    }

    /// Strip the group's longest matching ending off `region`.
    fn strip(region: &mut String, group: &SuffixGroup, preceding: Option<char>) -> bool {
        match group.longest_match(region, preceding) {
            Some(rule) => {
                let boundary = region.len() - rule.suffix().len();
                region.truncate(boundary);
                true
            }
            None => false,
        }
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        let Some(region_start) = self.stem_region_start(word) else {
            return word.to_string();
        };

        let head = &word[..region_start];
        let mut region = word[region_start..].to_string();
        let groups = self.resource.suffix_groups();
        // Gate context for endings that consume the whole region.
        let preceding = head.chars().next_back();

        let perfective = Self::strip(
            &mut region,
            groups.group(SuffixGroupKind::Perfective),
            preceding,
        );
        if !perfective {
            Self::strip(
                &mut region,
                groups.group(SuffixGroupKind::Reflexive),
                preceding,
            );
        }

        let adjective = Self::strip(
            &mut region,
            groups.group(SuffixGroupKind::Adjective),
            preceding,
        );
        let participle = !adjective
            && Self::strip(
                &mut region,
                groups.group(SuffixGroupKind::Participle),
                preceding,
            );
        if !adjective && !participle {
            Self::strip(&mut region, groups.group(SuffixGroupKind::Verb), preceding);
        }

        Self::strip(&mut region, groups.group(SuffixGroupKind::Noun), preceding);

        let mut stem = String::with_capacity(head.len() + region.len());
        stem.push_str(head);
        stem.push_str(&region);
        stem
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}
