//! Lowercase filter implementation.
//!
//! Taggers see the original casing; every later stage works on lowercase
//! text and the reassembler restores capitals where they belong.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Positions, offsets and tags are preserved. The stream is transformed
/// lazily.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            if token.text.chars().any(char::is_uppercase) {
                let lower = token.text.to_lowercase();
                token.replace_text(lower)
            } else {
                token
            }
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tag::PosTag;
    use crate::analysis::token::{IntoTokenStream, Token};

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::with_offsets("Hello", PosTag::UH, 0, 0, 5),
            Token::new("WORLD", PosTag::NNP, 1),
            Token::new("Ünïcode", PosTag::NN, 2),
        ];

        let result: Vec<Token> = filter.filter(tokens.into_token_stream()).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[0].end_offset, 5);
        assert_eq!(result[1].text, "world");
        assert_eq!(result[1].tag, PosTag::NNP);
        assert_eq!(result[2].text, "ünïcode");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
