//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split raw text into word and punctuation tokens. They run
//! before tagging, so every token they produce carries
//! [`PosTag::untagged`](crate::analysis::tag::PosTag::untagged).
//!
//! # Available Tokenizers
//!
//! - [`treebank::TreebankTokenizer`] - Unicode word bounds with Penn Treebank
//!   clitic splitting
//!
//! # Examples
//!
//! ```
//! use reword::analysis::tokenizer::Tokenizer;
//! use reword::analysis::tokenizer::treebank::TreebankTokenizer;
//!
//! let tokenizer = TreebankTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("It isn't here.").unwrap().collect();
//! let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(words, vec!["It", "is", "n't", "here", "."]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared between
/// taggers behind an `Arc`.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of untagged tokens.
    ///
    /// Tokens are numbered from 0 and carry byte offsets into `text`.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod treebank;
