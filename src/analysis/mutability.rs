//! Mutability classification for tokens.
//!
//! Some tokens must never be lemmatized or replaced: proper nouns, very short
//! words, and the irregular forms of the auxiliaries "have", "be" and "do",
//! which taggers routinely mislabel as content verbs.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::analysis::tag::PosTag;

/// Words shorter than this many characters are immutable.
pub const MIN_MUTABLE_LEN: usize = 3;

/// Irregular auxiliary forms that are never replaced.
pub const AUXILIARY_FORMS: &[&str] = &[
    "have", "has", "had", "be", "is", "was", "are", "been", "do", "does", "did",
];

lazy_static! {
    static ref AUXILIARY_SET: HashSet<&'static str> = AUXILIARY_FORMS.iter().copied().collect();
}

/// Returns true when the token must pass through lemmatization and
/// synonymisation untouched.
///
/// Tags from outside the tagset are treated as immutable.
///
/// # Examples
///
/// ```
/// use reword::analysis::mutability::is_immutable;
/// use reword::analysis::tag::PosTag;
///
/// assert!(is_immutable("London", &PosTag::NNP));
/// assert!(is_immutable("was", &PosTag::VBD));
/// assert!(is_immutable("of", &PosTag::IN));
/// assert!(!is_immutable("walked", &PosTag::VBD));
/// ```
pub fn is_immutable(word: &str, tag: &PosTag) -> bool {
    *tag == PosTag::NNP
        || tag.is_unknown()
        || AUXILIARY_SET.contains(word)
        || word.chars().count() < MIN_MUTABLE_LEN
}

/// Whether the word is one of the irregular auxiliary forms.
pub fn is_auxiliary(word: &str) -> bool {
    AUXILIARY_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proper_noun_is_immutable() {
        assert!(is_immutable("paris", &PosTag::NNP));
        // Plural proper nouns are still mutable, matching the single-tag rule.
        assert!(!is_immutable("smiths", &PosTag::NNPS));
    }

    #[test]
    fn test_auxiliaries_are_immutable() {
        for word in AUXILIARY_FORMS {
            assert!(is_immutable(word, &PosTag::VB), "{word} should be immutable");
        }
        assert!(!is_immutable("were", &PosTag::VBD));
    }

    #[test]
    fn test_short_words_are_immutable() {
        assert!(is_immutable("a", &PosTag::DT));
        assert!(is_immutable("an", &PosTag::DT));
        assert!(is_immutable("go", &PosTag::VB));
        assert!(!is_immutable("cat", &PosTag::NN));
    }

    #[test]
    fn test_length_counts_characters() {
        // Two characters, four bytes.
        assert!(is_immutable("éé", &PosTag::NN));
    }

    #[test]
    fn test_unknown_tag_is_immutable() {
        assert!(is_immutable("something", &PosTag::Unknown("ZZ".into())));
    }
}
