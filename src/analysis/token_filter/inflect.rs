//! Reinflection filter.
//!
//! After lemmatization and synonym replacement every mutable token holds a
//! base form. This filter puts the grammatical form of the original tag
//! back: `sit` tagged `VBD` becomes `sat`, `cat` tagged `NNS` becomes
//! `cats`.
//!
//! Indefinite articles are fixed first, against the word that now follows
//! them, because a replacement may have changed its initial sound: `a
//! apple` becomes `an apple`. Articles are short and therefore immutable,
//! so this rule runs before the immutability check.
//!
//! For multi-word collocations only the head word is inflected. The head
//! is found by re-tagging the sub-words and preferring one whose coarse
//! category matches the token's own: the last such word for nouns (`hot
//! dog` -> `hot dogs`), the first for everything else (`run across` ->
//! `ran across`). Failing that, the first sub-word with any coarse category
//! is used, and a collocation without one is left alone.

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::analysis::mutability::is_immutable;
use crate::analysis::tag::{CoarsePos, PosTag};
use crate::analysis::tagger::Tagger;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::Inflector;

/// A filter that reinflects tokens to match their tag.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use reword::analysis::tag::PosTag;
/// use reword::analysis::tagger::rule::RuleTagger;
/// use reword::analysis::token::{IntoTokenStream, tokens_from_pairs};
/// use reword::analysis::token_filter::Filter;
/// use reword::analysis::token_filter::inflect::InflectFilter;
/// use reword::lexicon::RuleInflector;
///
/// let filter = InflectFilter::new(Arc::new(RuleInflector::new()), Arc::new(RuleTagger::new()));
/// let tokens = tokens_from_pairs([
///     ("a", PosTag::DT),
///     ("apple", PosTag::NN),
///     ("sit", PosTag::VBD),
/// ]);
/// let out: Vec<_> = filter
///     .filter(tokens.into_token_stream())
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(out, vec!["an", "apple", "sat"]);
/// ```
#[derive(Clone)]
pub struct InflectFilter {
    inflector: Arc<dyn Inflector>,
    tagger: Arc<dyn Tagger>,
}

impl InflectFilter {
    /// Create an inflect filter. The tagger is used to find collocation
    /// heads.
    pub fn new(inflector: Arc<dyn Inflector>, tagger: Arc<dyn Tagger>) -> Self {
        InflectFilter { inflector, tagger }
    }

    /// Reinflect a materialized document.
    pub fn inflect_tokens(&self, tokens: Vec<Token>) -> Vec<Token> {
        let articles: Vec<Option<&'static str>> = (0..tokens.len())
            .map(|i| {
                if is_article(&tokens[i].text) {
                    Some(article_for(tokens.get(i + 1)))
                } else {
                    None
                }
            })
            .collect();

        tokens
            .into_iter()
            .zip(articles)
            .map(|(token, article)| match article {
                Some(article) => token.replace_text(article),
                None => self.inflect_token(token),
            })
            .collect()
    }

    fn inflect_token(&self, token: Token) -> Token {
        if is_immutable(&token.text, &token.tag) {
            return token;
        }
        let inflected = if token.is_collocation() {
            self.inflect_collocation(&token.text, &token.tag)
        } else {
            self.inflect_word(&token.text, &token.tag)
        };
        if inflected != token.text {
            trace!("inflect {}/{} -> {inflected}", token.text, token.tag);
        }
        token.replace_text(inflected)
    }

    /// The most specific form of `word` for `tag`, or `word` itself.
    pub fn inflect_word(&self, word: &str, tag: &PosTag) -> String {
        self.inflector
            .inflections(word, tag)
            .pop()
            .unwrap_or_else(|| word.to_string())
    }

    /// Inflect the head word of a space-separated collocation.
    pub fn inflect_collocation(&self, text: &str, tag: &PosTag) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        let sub_tags = self.tagger.tag_words(&words);
        if sub_tags.len() != words.len() {
            warn!(
                "tagger {} returned {} tags for {} words",
                self.tagger.name(),
                sub_tags.len(),
                words.len()
            );
            return text.to_string();
        }

        let Some(head) = head_index(&sub_tags, CoarsePos::from_tag(tag)) else {
            return text.to_string();
        };
        let inflected = self.inflect_word(words[head], tag);

        words
            .iter()
            .enumerate()
            .map(|(i, &word)| if i == head { inflected.as_str() } else { word })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Filter for InflectFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let inflected = self.inflect_tokens(tokens.collect());
        debug!("inflected {} tokens", inflected.len());
        Ok(Box::new(inflected.into_iter()))
    }

    fn name(&self) -> &'static str {
        "inflect"
    }
}

fn is_article(word: &str) -> bool {
    word.eq_ignore_ascii_case("a") || word.eq_ignore_ascii_case("an")
}

/// The indefinite article to use before `next`. Defaults to "a" at the end
/// of the document.
fn article_for(next: Option<&Token>) -> &'static str {
    let starts_with_vowel = next
        .and_then(|token| token.text.chars().next())
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
    if starts_with_vowel { "an" } else { "a" }
}

/// Index of the collocation head for a token whose coarse category is
/// `outer`.
pub fn head_index(sub_tags: &[PosTag], outer: Option<CoarsePos>) -> Option<usize> {
    let coarse: Vec<Option<CoarsePos>> = sub_tags.iter().map(CoarsePos::from_tag).collect();

    if let Some(outer) = outer {
        let mut matching = coarse
            .iter()
            .enumerate()
            .filter(|(_, pos)| **pos == Some(outer))
            .map(|(i, _)| i);
        let pick = if outer == CoarsePos::Noun {
            matching.last()
        } else {
            matching.next()
        };
        if pick.is_some() {
            return pick;
        }
    }

    coarse.iter().position(Option::is_some)
}
