//! Token filters: the stages of the paraphrasing pipeline.
//!
//! Every filter consumes a tagged token stream and yields a stream of the
//! same length in the same order. Filters only rewrite token text; tags,
//! positions and offsets pass through untouched.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Lower-cases every token
//! - [`lemma::LemmaFilter`] - Reduces mutable tokens to their base form
//! - [`synonym::SynonymFilter`] - Replaces mutable tokens with a weighted
//!   random synonym
//! - [`inflect::InflectFilter`] - Reinflects tokens to their original tag
//!   and fixes indefinite articles
//!
//! # Filter Chaining
//!
//! ```text
//! Tagger → Lowercase → Lemma → Synonym → Inflect → Reassembler
//! ```
//!
//! The first three are lazy; [`inflect::InflectFilter`] needs lookahead and
//! materializes its input.
//!
//! # Examples
//!
//! ```
//! use reword::analysis::tag::PosTag;
//! use reword::analysis::token::{IntoTokenStream, tokens_from_pairs};
//! use reword::analysis::token_filter::Filter;
//! use reword::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let tokens = tokens_from_pairs([("Hello", PosTag::UH), ("WORLD", PosTag::NN)]);
//! let filtered: Vec<_> = LowercaseFilter::new()
//!     .filter(tokens.into_token_stream())
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! assert_eq!(filtered[1].tag, PosTag::NN);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so filters can be shared by a
/// [`Paraphraser`](crate::paraphraser::Paraphraser) used from several
/// threads.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use reword::analysis::token::{Token, TokenStream};
/// use reword::analysis::token_filter::Filter;
/// use reword::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         Ok(Box::new(tokens.map(|t| {
///             let reversed: String = t.text.chars().rev().collect();
///             t.replace_text(reversed)
///         })))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod inflect;
pub mod lemma;
pub mod lowercase;
pub mod synonym;
