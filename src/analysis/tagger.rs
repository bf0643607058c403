//! Part-of-speech taggers.
//!
//! A tagger turns raw text into an ordered stream of `(word, tag)` tokens.
//! The paraphrasing pipeline calls it once per document and again, through
//! [`Tagger::tag_words`], on the sub-words of multi-word collocations when
//! it needs to find the head word to reinflect.
//!
//! # Available Taggers
//!
//! - [`rule::RuleTagger`] - closed-class table, suffix and context rules,
//!   optionally backed by a lexicon

use crate::analysis::tag::PosTag;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for part-of-speech taggers.
pub trait Tagger: Send + Sync {
    /// Tokenize and tag `text`, preserving the original casing.
    fn tag(&self, text: &str) -> Result<TokenStream>;

    /// Tag an already tokenized word sequence.
    ///
    /// Returns exactly one tag per word.
    fn tag_words(&self, words: &[&str]) -> Vec<PosTag>;

    /// Get the name of this tagger (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod rule;
