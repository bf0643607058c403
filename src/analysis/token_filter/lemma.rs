//! Lemmatization filter.
//!
//! Mutable tokens with a coarse category are replaced by the first base
//! form the lemmatizer returns. Immutable tokens, tokens without a coarse
//! category and words the lemmatizer does not know pass through.

use std::sync::Arc;

use log::trace;

use crate::analysis::mutability::is_immutable;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::Lemmatizer;

/// A filter that reduces tokens to their base form.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use reword::analysis::tag::{CoarsePos, PosTag};
/// use reword::analysis::token::{IntoTokenStream, tokens_from_pairs};
/// use reword::analysis::token_filter::Filter;
/// use reword::analysis::token_filter::lemma::LemmaFilter;
/// use reword::lexicon::MemoryLexicon;
///
/// let mut lexicon = MemoryLexicon::new();
/// lexicon.add_sense_group(CoarsePos::Noun, ["cat"]);
///
/// let filter = LemmaFilter::new(Arc::new(lexicon));
/// let tokens = tokens_from_pairs([("the", PosTag::DT), ("cats", PosTag::NNS)]);
/// let lemmas: Vec<_> = filter
///     .filter(tokens.into_token_stream())
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(lemmas, vec!["the", "cat"]);
/// ```
#[derive(Clone)]
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl LemmaFilter {
    /// Create a lemma filter backed by `lemmatizer`.
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }

    /// The base form of a single token.
    pub fn lemmatise(lemmatizer: &dyn Lemmatizer, token: Token) -> Token {
        if is_immutable(&token.text, &token.tag) {
            return token;
        }
        let Some(pos) = token.coarse_pos() else {
            return token;
        };
        match lemmatizer.lemmas(&token.text, pos).into_iter().next() {
            Some(lemma) if lemma != token.text => {
                trace!("lemma {} -> {lemma}", token.text);
                token.replace_text(lemma)
            }
            Some(_) => token,
            None => {
                trace!("no lemma for {}/{}", token.text, token.tag);
                token
            }
        }
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let lemmatizer = Arc::clone(&self.lemmatizer);
        Ok(Box::new(
            tokens.map(move |token| Self::lemmatise(lemmatizer.as_ref(), token)),
        ))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
