//! Rule-based Penn Treebank tagger.
//!
//! Tagging runs left to right over the tokenized text. Each word goes
//! through a fixed cascade, and the first rule that fires decides its tag:
//!
//! 1. punctuation (quotes alternate between opening and closing)
//! 2. clitics split off by the tokenizer (`n't`, `'s`, `'ll`, ...)
//! 3. numbers
//! 4. the closed-class table (determiners, pronouns, prepositions,
//!    conjunctions, modals, auxiliaries)
//! 5. capitalized words that do not start a sentence are proper nouns
//! 6. open-class words: the coarse categories the lexicon knows for the
//!    word are ranked by the left context, then suffixes pick the fine tag
//!
//! Without a lexicon, step 6 falls back to suffix guessing.

use std::sync::Arc;

use ahash::AHashMap;
use lazy_static::lazy_static;
use log::debug;

use crate::analysis::tag::{CoarsePos, PosTag};
use crate::analysis::tagger::Tagger;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::treebank::TreebankTokenizer;
use crate::error::Result;
use crate::lexicon::Lemmatizer;

/// Closed-class words and their usual tag.
const CLOSED_CLASS: &[(&str, &str)] = &[
    // determiners
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("every", "DT"),
    ("each", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("another", "DT"),
    ("either", "DT"),
    ("neither", "DT"),
    ("all", "DT"),
    ("both", "DT"),
    // pronouns
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("mine", "PRP"),
    ("yours", "PRP"),
    ("myself", "PRP"),
    ("yourself", "PRP"),
    ("himself", "PRP"),
    ("herself", "PRP"),
    ("itself", "PRP"),
    ("ourselves", "PRP"),
    ("themselves", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    // prepositions and subordinating conjunctions
    ("of", "IN"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("by", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("about", "IN"),
    ("into", "IN"),
    ("onto", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("after", "IN"),
    ("before", "IN"),
    ("between", "IN"),
    ("through", "IN"),
    ("during", "IN"),
    ("without", "IN"),
    ("within", "IN"),
    ("against", "IN"),
    ("among", "IN"),
    ("upon", "IN"),
    ("since", "IN"),
    ("until", "IN"),
    ("because", "IN"),
    ("although", "IN"),
    ("though", "IN"),
    ("while", "IN"),
    ("if", "IN"),
    ("whether", "IN"),
    ("than", "IN"),
    ("as", "IN"),
    ("across", "IN"),
    ("behind", "IN"),
    ("below", "IN"),
    ("above", "IN"),
    ("beside", "IN"),
    ("beyond", "IN"),
    ("toward", "IN"),
    ("towards", "IN"),
    ("around", "IN"),
    ("along", "IN"),
    ("despite", "IN"),
    ("unless", "IN"),
    ("via", "IN"),
    ("to", "TO"),
    // coordinating conjunctions
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    // modals
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    // auxiliaries
    ("be", "VB"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    // wh-words
    ("which", "WDT"),
    ("who", "WP"),
    ("whom", "WP"),
    ("what", "WP"),
    ("whose", "WP$"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    // adverbs
    ("not", "RB"),
    ("very", "RB"),
    ("too", "RB"),
    ("also", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("here", "RB"),
    ("just", "RB"),
    ("only", "RB"),
    ("even", "RB"),
    ("still", "RB"),
    ("already", "RB"),
    ("soon", "RB"),
    ("then", "RB"),
    ("now", "RB"),
    ("so", "RB"),
    ("again", "RB"),
    ("ever", "RB"),
    ("quite", "RB"),
    ("rather", "RB"),
    ("almost", "RB"),
    ("perhaps", "RB"),
    ("more", "RBR"),
    ("less", "RBR"),
    ("most", "RBS"),
    ("least", "RBS"),
    // interjections
    ("oh", "UH"),
    ("yes", "UH"),
    ("hello", "UH"),
    ("hi", "UH"),
    ("wow", "UH"),
    // number words
    ("zero", "CD"),
    ("one", "CD"),
    ("two", "CD"),
    ("three", "CD"),
    ("four", "CD"),
    ("five", "CD"),
    ("six", "CD"),
    ("seven", "CD"),
    ("eight", "CD"),
    ("nine", "CD"),
    ("ten", "CD"),
    ("hundred", "CD"),
    ("thousand", "CD"),
    ("million", "CD"),
];

const BE_FORMS: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "'s", "'re", "'m",
];

const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "'ve"];

/// Suffixes that mark an adjective when no lexicon is available.
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish", "ary",
];

lazy_static! {
    static ref CLOSED_CLASS_TAGS: AHashMap<&'static str, PosTag> = CLOSED_CLASS
        .iter()
        .map(|&(word, label)| {
            let Ok(tag) = label.parse::<PosTag>();
            (word, tag)
        })
        .collect();
}

/// Tag a punctuation-only token. `open_quote` tracks whether the next
/// straight double quote opens or closes.
fn punctuation_tag(word: &str, open_quote: &mut bool) -> Option<PosTag> {
    if word.is_empty() || word.chars().any(char::is_alphanumeric) {
        return None;
    }
    let tag = match word {
        "," => PosTag::Comma,
        ";" | ":" => PosTag::Colon,
        "(" | "[" | "{" => PosTag::OpenBracket,
        ")" | "]" | "}" => PosTag::CloseBracket,
        "``" | "\u{201C}" | "\u{2018}" => PosTag::OpenQuote,
        "''" | "\u{201D}" | "'" | "\u{2019}" => PosTag::CloseQuote,
        "\"" => {
            let tag = if *open_quote {
                PosTag::OpenQuote
            } else {
                PosTag::CloseQuote
            };
            *open_quote = !*open_quote;
            tag
        }
        "$" | "\u{20AC}" | "\u{00A3}" => PosTag::Dollar,
        "#" => PosTag::Hash,
        w if w.len() > 1 && w.chars().all(|c| c == '.') => PosTag::Colon,
        w if w.chars().all(|c| matches!(c, '.' | '?' | '!')) => PosTag::Period,
        w if w.chars().all(|c| c == '-' || c == '\u{2014}' || c == '\u{2013}') => PosTag::Colon,
        _ => PosTag::SYM,
    };
    Some(tag)
}

/// Tag a clitic split off by the tokenizer.
fn clitic_tag(lower: &str, prev: Option<&PosTag>) -> Option<PosTag> {
    let normalized = lower.replace('\u{2019}', "'");
    let tag = match normalized.as_str() {
        "n't" => PosTag::RB,
        "'s" => match prev {
            Some(PosTag::PRP | PosTag::EX | PosTag::WP | PosTag::DT) => PosTag::VBZ,
            _ => PosTag::POS,
        },
        "'re" | "'ve" | "'m" => PosTag::VBP,
        "'ll" | "'d" => PosTag::MD,
        _ => return None,
    };
    Some(tag)
}

fn is_number(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
}

fn looks_plural(word: &str) -> bool {
    word.chars().count() > 3
        && word.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| word.ends_with(s))
}

fn is_be(word: &str) -> bool {
    BE_FORMS.contains(&word)
}

fn is_have(word: &str) -> bool {
    HAVE_FORMS.contains(&word)
}

/// Left context of the word being tagged.
struct Context<'a> {
    prev: Option<&'a PosTag>,
    prev_word: Option<&'a str>,
    next_word: Option<&'a str>,
}

impl Context<'_> {
    fn after_infinitive_marker(&self) -> bool {
        matches!(self.prev, Some(PosTag::TO | PosTag::MD))
    }

    fn after_be(&self) -> bool {
        self.prev_word.is_some_and(is_be)
    }

    fn after_have(&self) -> bool {
        self.prev_word.is_some_and(is_have)
    }

    fn after_determiner(&self) -> bool {
        matches!(
            self.prev,
            Some(
                PosTag::DT
                    | PosTag::PDT
                    | PosTag::PRPS
                    | PosTag::WPS
                    | PosTag::POS
                    | PosTag::CD
                    | PosTag::JJ
                    | PosTag::JJR
                    | PosTag::JJS
            )
        )
    }

    fn after_subject(&self) -> bool {
        matches!(
            self.prev,
            Some(
                PosTag::PRP
                    | PosTag::NN
                    | PosTag::NNS
                    | PosTag::NNP
                    | PosTag::NNPS
                    | PosTag::WDT
                    | PosTag::WP
                    | PosTag::EX
            )
        )
    }

    /// Whether the next word could continue a noun phrase.
    fn next_is_open_class(&self) -> bool {
        self.next_word.is_some_and(|w| {
            w.chars().all(char::is_alphabetic)
                && !CLOSED_CLASS_TAGS.contains_key(w.to_lowercase().as_str())
        })
    }
}

/// A part-of-speech tagger built from hand-written rules.
///
/// # Examples
///
/// ```
/// use reword::analysis::tag::PosTag;
/// use reword::analysis::tagger::Tagger;
/// use reword::analysis::tagger::rule::RuleTagger;
///
/// let tagger = RuleTagger::new();
/// let tags: Vec<PosTag> = tagger
///     .tag("She visited London yesterday.")
///     .unwrap()
///     .map(|t| t.tag)
///     .collect();
/// assert_eq!(tags[0], PosTag::PRP);
/// assert_eq!(tags[1], PosTag::VBD);
/// assert_eq!(tags[2], PosTag::NNP);
/// assert_eq!(tags[4], PosTag::Period);
/// ```
#[derive(Clone)]
pub struct RuleTagger {
    tokenizer: Arc<dyn Tokenizer>,
    lemmatizer: Option<Arc<dyn Lemmatizer>>,
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTagger {
    /// Create a tagger using the Treebank tokenizer and suffix guessing.
    pub fn new() -> Self {
        RuleTagger {
            tokenizer: Arc::new(TreebankTokenizer::new()),
            lemmatizer: None,
        }
    }

    /// Use a lexicon-backed lemmatizer to find the categories of open-class
    /// words.
    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    fn word_tag(&self, word: &str, sentence_start: bool, ctx: &Context<'_>) -> PosTag {
        let lower = word.to_lowercase();

        if let Some(tag) = clitic_tag(&lower, ctx.prev) {
            return tag;
        }
        if is_number(word) {
            return PosTag::CD;
        }
        if let Some(tag) = self.closed_class_tag(&lower, ctx) {
            return tag;
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        let categories = self.categories(&lower);
        if capitalized
            && (!sentence_start || (self.lemmatizer.is_some() && categories.is_empty()))
        {
            return PosTag::NNP;
        }

        let coarse = if categories.is_empty() {
            guess_category(&lower, ctx)
        } else {
            choose_category(&categories, &lower, ctx)
        };
        self.fine_tag(&lower, coarse, sentence_start, ctx)
    }

    fn closed_class_tag(&self, lower: &str, ctx: &Context<'_>) -> Option<PosTag> {
        match lower {
            "her" => {
                return Some(if ctx.next_is_open_class() {
                    PosTag::PRPS
                } else {
                    PosTag::PRP
                });
            }
            "there" => {
                let next_is_be = ctx
                    .next_word
                    .is_some_and(|w| is_be(&w.to_lowercase().replace('\u{2019}', "'")));
                return Some(if next_is_be { PosTag::EX } else { PosTag::RB });
            }
            "that" if matches!(ctx.prev, Some(PosTag::NN | PosTag::NNS)) => {
                return Some(PosTag::WDT);
            }
            _ => {}
        }

        let tag = CLOSED_CLASS_TAGS.get(lower)?;
        if ctx.after_infinitive_marker() && (is_be(lower) || is_have(lower) || lower == "do") {
            return Some(PosTag::VB);
        }
        Some(tag.clone())
    }

    /// Coarse categories the lexicon knows for `word`, in WordNet order.
    fn categories(&self, word: &str) -> Vec<CoarsePos> {
        let Some(lemmatizer) = &self.lemmatizer else {
            return Vec::new();
        };
        CoarsePos::ALL
            .into_iter()
            .filter(|&pos| !lemmatizer.lemmas(word, pos).is_empty())
            .collect()
    }

    /// Whether `word` is an inflected form in `pos`, according to the
    /// lexicon when one is available.
    fn is_inflected(&self, word: &str, pos: CoarsePos) -> Option<bool> {
        let lemmatizer = self.lemmatizer.as_ref()?;
        let lemmas = lemmatizer.lemmas(word, pos);
        let first = lemmas.first()?;
        Some(first != word)
    }

    fn fine_tag(
        &self,
        word: &str,
        coarse: CoarsePos,
        sentence_start: bool,
        ctx: &Context<'_>,
    ) -> PosTag {
        let inflected = self.is_inflected(word, coarse);
        match coarse {
            CoarsePos::Noun => {
                if inflected.unwrap_or_else(|| looks_plural(word)) {
                    PosTag::NNS
                } else {
                    PosTag::NN
                }
            }
            CoarsePos::Verb => {
                let inflected = inflected.unwrap_or_else(|| {
                    word.ends_with("ed") || word.ends_with("ing") || looks_plural(word)
                });
                if word.ends_with("ing") && inflected {
                    PosTag::VBG
                } else if ctx.after_infinitive_marker() {
                    PosTag::VB
                } else if inflected && (ctx.after_have() || ctx.after_be()) {
                    PosTag::VBN
                } else if inflected && word.ends_with('s') {
                    PosTag::VBZ
                } else if inflected {
                    PosTag::VBD
                } else if sentence_start {
                    PosTag::VB
                } else {
                    PosTag::VBP
                }
            }
            CoarsePos::Adjective => {
                let inflected = inflected.unwrap_or(false);
                if inflected && word.ends_with("st") {
                    PosTag::JJS
                } else if inflected {
                    PosTag::JJR
                } else {
                    PosTag::JJ
                }
            }
            CoarsePos::Adverb => PosTag::RB,
        }
    }
}

/// Rank lexicon categories by the left context and pick the best.
fn choose_category(categories: &[CoarsePos], word: &str, ctx: &Context<'_>) -> CoarsePos {
    use CoarsePos::{Adjective, Adverb, Noun, Verb};

    if let [only] = categories {
        return *only;
    }

    let preference: &[CoarsePos] = if ctx.after_infinitive_marker() || ctx.after_have() {
        &[Verb, Noun, Adjective, Adverb]
    } else if ctx.after_be() {
        if word.ends_with("ing") || word.ends_with("ed") {
            &[Verb, Adjective, Noun, Adverb]
        } else {
            &[Adjective, Adverb, Noun, Verb]
        }
    } else if ctx.after_determiner() {
        if ctx.next_is_open_class() {
            &[Adjective, Noun, Verb, Adverb]
        } else {
            &[Noun, Adjective, Verb, Adverb]
        }
    } else if matches!(ctx.prev, Some(PosTag::IN)) {
        &[Noun, Adjective, Verb, Adverb]
    } else if ctx.after_subject() {
        &[Verb, Noun, Adjective, Adverb]
    } else if matches!(ctx.prev, Some(PosTag::RB)) {
        &[Verb, Adjective, Adverb, Noun]
    } else if word.ends_with("ly") {
        &[Adverb, Adjective, Noun, Verb]
    } else {
        &[Noun, Verb, Adjective, Adverb]
    };

    preference
        .iter()
        .copied()
        .find(|pos| categories.contains(pos))
        .unwrap_or(categories[0])
}

/// Guess a category from suffixes and context alone.
fn guess_category(word: &str, ctx: &Context<'_>) -> CoarsePos {
    if ctx.after_infinitive_marker() {
        CoarsePos::Verb
    } else if word.ends_with("ly") {
        CoarsePos::Adverb
    } else if word.ends_with("ing") || word.ends_with("ed") {
        CoarsePos::Verb
    } else if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        CoarsePos::Adjective
    } else if matches!(ctx.prev, Some(PosTag::PRP | PosTag::NNP)) {
        CoarsePos::Verb
    } else {
        CoarsePos::Noun
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();
        let tags = {
            let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
            self.tag_words(&words)
        };
        debug!("tagged {} tokens", tokens.len());

        let tagged: Vec<Token> = tokens
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| token.with_tag(tag))
            .collect();
        Ok(Box::new(tagged.into_iter()))
    }

    fn tag_words(&self, words: &[&str]) -> Vec<PosTag> {
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let mut tags: Vec<PosTag> = Vec::with_capacity(words.len());
        let mut open_quote = true;
        let mut sentence_start = true;

        for (i, word) in words.iter().enumerate() {
            let tag = match punctuation_tag(word, &mut open_quote) {
                Some(tag) => tag,
                None => {
                    let ctx = Context {
                        prev: tags.last(),
                        prev_word: i.checked_sub(1).map(|j| lowered[j].as_str()),
                        next_word: words.get(i + 1).copied(),
                    };
                    self.word_tag(word, sentence_start, &ctx)
                }
            };
            sentence_start = match tag {
                PosTag::Period => true,
                PosTag::OpenQuote | PosTag::OpenBracket => sentence_start,
                _ => false,
            };
            tags.push(tag);
        }
        tags
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}
