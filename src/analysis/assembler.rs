//! Detokenization of the final token stream.
//!
//! The [`Reassembler`] turns tokens back into text in three passes:
//!
//! 1. **Concatenation.** Tokens are joined with single spaces, except that
//!    contraction fragments (`n't`, `'s`) and clause delimiters (`,` `.`
//!    ...) attach to the previous token. Proper nouns and the pronoun "i"
//!    are capitalized on the way.
//! 2. **Sentence casing.** The draft is split into sentences and the first
//!    character of each is upper-cased. Sentences are re-joined with one
//!    space.
//! 3. **Bracket spacing.** Whitespace after `(`, `[`, `{` and before `)`,
//!    `]`, `}` is removed.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use reword::analysis::assembler::Reassembler;
//! use reword::analysis::segmenter::PunctuationSegmenter;
//! use reword::analysis::tag::PosTag;
//! use reword::analysis::token::tokens_from_pairs;
//!
//! let reassembler = Reassembler::new(Arc::new(PunctuationSegmenter::new()));
//! let tokens = tokens_from_pairs([
//!     ("i", PosTag::PRP),
//!     ("met", PosTag::VBD),
//!     ("alice", PosTag::NNP),
//!     ("(", PosTag::OpenBracket),
//!     ("again", PosTag::RB),
//!     (")", PosTag::CloseBracket),
//!     (".", PosTag::Period),
//! ]);
//! assert_eq!(reassembler.assemble(tokens), "I met Alice (again).");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use clap::ValueEnum;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::segmenter::SentenceSegmenter;
use crate::analysis::token::Token;

/// ASCII punctuation used to recognise contraction fragments.
pub const PUNCTUATION: &str = "!#$%&'*+-/=?@\\^_`|~";

/// Delimiters that always attach to the previous token.
pub const CLAUSE_DELIMITERS: &str = ",.;:";

/// Sentence-final marks that attach under [`DelimiterPolicy::Terminal`].
pub const TERMINAL_MARKS: &str = "?!";

/// Apostrophes that open a contraction fragment, straight and curly.
pub const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Bracket and quote characters.
pub const BRACKETS: &str = "«»()[]{}<>\"";

lazy_static! {
    static ref PUNCTUATION_SET: HashSet<char> = PUNCTUATION.chars().collect();
    static ref OPEN_BRACKET_SPACE: Regex =
        Regex::new(r"([\[({])\s+").expect("open bracket pattern is valid");
    static ref CLOSE_BRACKET_SPACE: Regex =
        Regex::new(r"\s+([\]})])").expect("close bracket pattern is valid");
}

/// Which characters count as clause delimiters.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterPolicy {
    /// `,.;:` plus the terminal marks `?!`.
    #[default]
    Terminal,
    /// Only `,.;:`; `?` and `!` are spaced like words.
    Clause,
}

impl DelimiterPolicy {
    /// Whether `c` is a delimiter under this policy.
    pub fn is_delimiter_char(self, c: char) -> bool {
        CLAUSE_DELIMITERS.contains(c)
            || (self == DelimiterPolicy::Terminal && TERMINAL_MARKS.contains(c))
    }

    /// Whether every character of `token` is a delimiter.
    pub fn is_delimiter(self, token: &str) -> bool {
        token.chars().all(|c| self.is_delimiter_char(c))
    }
}

/// Whether `token` is the tail of a contraction: it contains punctuation,
/// but none once apostrophes are removed (`n't`, `'s`, `'ll`).
pub fn is_contraction_fragment(token: &str) -> bool {
    let is_punctuation = |c: char| PUNCTUATION_SET.contains(&c) || APOSTROPHES.contains(&c);
    token.chars().any(is_punctuation)
        && !token
            .chars()
            .filter(|c| !APOSTROPHES.contains(c))
            .any(is_punctuation)
}

/// Upper-case the first character of `text`.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The surface text of a token with proper nouns and "i" capitalized.
pub fn truecase(token: &Token) -> String {
    if token.tag.is_proper_noun() || token.text == "i" {
        capitalize_first(&token.text)
    } else {
        token.text.clone()
    }
}

/// Remove whitespace just inside brackets.
pub fn normalize_brackets(text: &str) -> String {
    let text = OPEN_BRACKET_SPACE.replace_all(text, "$1");
    CLOSE_BRACKET_SPACE.replace_all(&text, "$1").into_owned()
}

/// Joins tokens back into text.
#[derive(Clone)]
pub struct Reassembler {
    segmenter: Arc<dyn SentenceSegmenter>,
    policy: DelimiterPolicy,
}

impl Reassembler {
    /// Create a reassembler with the default delimiter policy.
    pub fn new(segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        Reassembler {
            segmenter,
            policy: DelimiterPolicy::default(),
        }
    }

    /// Use a different delimiter policy.
    pub fn with_policy(mut self, policy: DelimiterPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DelimiterPolicy {
        self.policy
    }

    /// Concatenate tokens with truecasing and contraction-aware spacing.
    pub fn draft<I: IntoIterator<Item = Token>>(&self, tokens: I) -> String {
        let mut draft = String::new();
        for (i, token) in tokens.into_iter().enumerate() {
            let text = truecase(&token);
            let attach = is_contraction_fragment(&text) || self.policy.is_delimiter(&text);
            if i > 0 && !attach {
                draft.push(' ');
            }
            draft.push_str(&text);
        }
        draft
    }

    /// Build the final text. An empty document yields an empty string.
    pub fn assemble<I: IntoIterator<Item = Token>>(&self, tokens: I) -> String {
        let draft = self.draft(tokens);
        if draft.is_empty() {
            return draft;
        }
        let cased = self
            .segmenter
            .segment(&draft)
            .iter()
            .map(|sentence| capitalize_first(sentence))
            .collect::<Vec<_>>()
            .join(" ");
        normalize_brackets(&cased)
    }
}
