//! Token types and utilities for text analysis.
//!
//! A [`Token`] is a surface form paired with its part-of-speech tag. Tokens
//! flow through every stage of the paraphrasing pipeline; stages may rewrite
//! the text of a token but never its tag, and never add or drop tokens.
//!
//! # Examples
//!
//! ```
//! use reword::analysis::tag::PosTag;
//! use reword::analysis::token::Token;
//!
//! let token = Token::new("cats", PosTag::NNS, 1);
//! assert_eq!(token.text, "cats");
//! assert_eq!(token.tag, PosTag::NNS);
//!
//! let replaced = token.with_text("felines");
//! assert_eq!(replaced.text, "felines");
//! assert_eq!(replaced.tag, PosTag::NNS);
//! assert_eq!(replaced.position, 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::tag::{CoarsePos, PosTag};

/// A token represents a single tagged unit of text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form of the token
    pub text: String,

    /// The part-of-speech tag assigned by the tagger
    pub tag: PosTag,

    /// The position of the token in the document (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text, tag and position.
    pub fn new<S: Into<String>>(text: S, tag: PosTag, position: usize) -> Self {
        Token {
            text: text.into(),
            tag,
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, tag, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        tag: PosTag,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            tag,
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The coarse category of this token's tag, if it has one.
    pub fn coarse_pos(&self) -> Option<CoarsePos> {
        CoarsePos::from_tag(&self.tag)
    }

    /// Whether the surface form is a multi-word collocation.
    pub fn is_collocation(&self) -> bool {
        self.text.contains(' ')
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Replace the text in place, keeping tag and position.
    pub fn replace_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Set the tag for this token.
    pub fn with_tag(mut self, tag: PosTag) -> Self {
        self.tag = tag;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.text, self.tag)
    }
}

/// A token stream represents a sequence of tokens flowing between stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

/// Build a token stream from `(word, tag)` pairs, numbering positions.
///
/// Handy for feeding hand-written documents into individual stages.
pub fn tokens_from_pairs<I, S>(pairs: I) -> Vec<Token>
where
    I: IntoIterator<Item = (S, PosTag)>,
    S: Into<String>,
{
    pairs
        .into_iter()
        .enumerate()
        .map(|(position, (word, tag))| Token::new(word, tag, position))
        .collect()
}
