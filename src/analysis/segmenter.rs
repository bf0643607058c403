//! Sentence segmentation.
//!
//! The reassembler splits its draft into sentences to capitalize each one.
//! [`PunctuationSegmenter`] is the bundled implementation: it ends a
//! sentence after a run of `.`, `?` or `!` (plus any closing quotes or
//! brackets) when whitespace follows, unless the period belongs to a known
//! abbreviation or a single-letter initial.
//!
//! Unicode sentence boundaries are not used because they require an
//! uppercase letter after the break, and the draft is lowercase.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Trait for sentence segmenters.
pub trait SentenceSegmenter: Send + Sync {
    /// Split `text` into sentences, in order, without surrounding whitespace.
    fn segment(&self, text: &str) -> Vec<String>;

    /// Get the name of this segmenter.
    fn name(&self) -> &'static str;
}

/// Abbreviations (lowercase, without the final period) that do not end a
/// sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "co", "corp", "mt", "ft", "approx", "dept", "est", "fig", "gen", "gov", "lt", "col", "sgt",
    "capt", "rev", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec",
];

lazy_static! {
    static ref ABBREVIATION_SET: HashSet<&'static str> = ABBREVIATIONS.iter().copied().collect();
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

fn is_closing(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}' | '\u{00BB}'
    )
}

/// Splits sentences at terminal punctuation.
///
/// # Examples
///
/// ```
/// use reword::analysis::segmenter::{PunctuationSegmenter, SentenceSegmenter};
///
/// let segmenter = PunctuationSegmenter::new();
/// assert_eq!(
///     segmenter.segment("dr. smith arrived. he sat down!"),
///     vec!["dr. smith arrived.", "he sat down!"]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct PunctuationSegmenter;

impl PunctuationSegmenter {
    /// Create a new punctuation segmenter.
    pub fn new() -> Self {
        PunctuationSegmenter
    }

    /// Whether the word ending at a single `.` is an abbreviation.
    fn is_abbreviation(word: &str) -> bool {
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        let lower = word.to_lowercase();
        let single_initial = {
            let mut chars = lower.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic() && c != 'i')
        };
        single_initial || ABBREVIATION_SET.contains(lower.as_str())
    }
}

impl SentenceSegmenter for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (_, c) = chars[i];
            if !is_terminal(c) {
                i += 1;
                continue;
            }

            let run_start = i;
            while i < chars.len() && is_terminal(chars[i].1) {
                i += 1;
            }
            let run_len = i - run_start;
            while i < chars.len() && is_closing(chars[i].1) {
                i += 1;
            }

            let at_break = i == chars.len() || chars[i].1.is_whitespace();
            if !at_break {
                continue;
            }

            let single_period = run_len == 1 && chars[run_start].1 == '.';
            if single_period {
                let before = &text[start..chars[run_start].0];
                let word = before.rsplit(char::is_whitespace).next().unwrap_or("");
                if Self::is_abbreviation(word) {
                    continue;
                }
            }

            let end = chars.get(i).map_or(text.len(), |&(offset, _)| offset);
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }
        sentences
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
