//! Penn Treebank style word tokenizer.
//!
//! Text is first cut at Unicode word boundaries (UAX #29), which already
//! keeps numbers like `3.14` and contractions like `isn't` in one piece.
//! The segments are then adjusted to the Treebank conventions the tagger
//! expects:
//!
//! - whitespace is dropped
//! - hyphenated compounds (`well-known`) are rejoined
//! - runs of dots or dashes (`...`, `--`) become one token
//! - clitics are split off: `isn't` -> `is` + `n't`, `cat's` -> `cat` + `'s`
//! - a clitic with nothing before it (`'s` on its own) stays one token

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tag::PosTag;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Clitics split off after an apostrophe, lowercase and without the
/// apostrophe itself.
const CLITICS: &[&str] = &["s", "re", "ll", "ve", "d", "m"];

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// A tokenizer producing Penn Treebank style tokens.
///
/// # Examples
///
/// ```
/// use reword::analysis::tokenizer::Tokenizer;
/// use reword::analysis::tokenizer::treebank::TreebankTokenizer;
///
/// let tokenizer = TreebankTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("(well-known)").unwrap().collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].text, "well-known");
/// assert_eq!(tokens[1].start_offset, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    /// Create a new Treebank tokenizer.
    pub fn new() -> Self {
        TreebankTokenizer
    }

    /// Byte ranges of the tokens in `text`.
    pub fn spans(text: &str) -> Vec<(usize, usize)> {
        let segments: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(segments.len());

        let mut i = 0;
        while i < segments.len() {
            let (start, segment) = segments[i];
            let end = start + segment.len();
            i += 1;

            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            if let Some(last) = merged.last_mut() {
                if last.1 == start {
                    let prev = &text[last.0..last.1];

                    if prev.chars().all(|c| APOSTROPHES.contains(&c))
                        && prev.chars().count() == 1
                        && CLITICS.contains(&segment.to_lowercase().as_str())
                    {
                        last.1 = end;
                        continue;
                    }

                    if segment == "-" && is_wordlike(prev) {
                        if let Some(&(next_start, next)) = segments.get(i) {
                            if next_start == end && is_wordlike(next) {
                                last.1 = next_start + next.len();
                                i += 1;
                                continue;
                            }
                        }
                    }

                    if (segment == "." || segment == "-")
                        && prev.chars().all(|c| segment.starts_with(c))
                    {
                        last.1 = end;
                        continue;
                    }
                }
            }

            merged.push((start, end));
        }

        let mut spans = Vec::with_capacity(merged.len());
        for (start, end) in merged {
            match clitic_split(&text[start..end]) {
                Some(split) => {
                    spans.push((start, start + split));
                    spans.push((start + split, end));
                }
                None => spans.push((start, end)),
            }
        }
        spans
    }
}

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = Self::spans(text)
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| {
                Token::with_offsets(&text[start..end], PosTag::untagged(), position, start, end)
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "treebank"
    }
}

fn is_wordlike(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_alphanumeric)
        && s.chars().last().is_some_and(char::is_alphanumeric)
}

/// Byte index where a trailing clitic starts, if the word has one.
fn clitic_split(word: &str) -> Option<usize> {
    let idx = word.rfind(APOSTROPHES)?;
    let stem = &word[..idx];
    let apostrophe_len = word[idx..].chars().next()?.len_utf8();
    let rest = word[idx + apostrophe_len..].to_lowercase();

    if rest == "t" && stem.len() > 1 && (stem.ends_with('n') || stem.ends_with('N')) {
        return Some(idx - 1);
    }
    if !stem.is_empty() && CLITICS.contains(&rest.as_str()) {
        return Some(idx);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        TreebankTokenizer::new()
            .tokenize(text)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(
            words("The cat sat on the mat."),
            vec!["The", "cat", "sat", "on", "the", "mat", "."]
        );
    }

    #[test]
    fn test_negation_clitic() {
        assert_eq!(words("It isn't."), vec!["It", "is", "n't", "."]);
        assert_eq!(words("I can't"), vec!["I", "ca", "n't"]);
        assert_eq!(words("DON'T"), vec!["DO", "N'T"]);
    }

    #[test]
    fn test_other_clitics() {
        assert_eq!(words("the cat's toy"), vec!["the", "cat", "'s", "toy"]);
        assert_eq!(words("we'll go"), vec!["we", "'ll", "go"]);
        assert_eq!(words("they\u{2019}re"), vec!["they", "\u{2019}re"]);
        assert_eq!(words("o'clock"), vec!["o'clock"]);
        assert_eq!(words("'s"), vec!["'s"]);
        assert_eq!(words("\u{2019}re here"), vec!["\u{2019}re", "here"]);
        assert_eq!(words("'sup"), vec!["'", "sup"]);
    }

    #[test]
    fn test_hyphens_and_runs() {
        assert_eq!(words("a well-known fact"), vec!["a", "well-known", "fact"]);
        assert_eq!(words("wait... no -- yes"), vec!["wait", "...", "no", "--", "yes"]);
        assert_eq!(words("pre- and post-war"), vec!["pre", "-", "and", "post-war"]);
    }

    #[test]
    fn test_numbers_and_brackets() {
        assert_eq!(words("(3.14)"), vec!["(", "3.14", ")"]);
        assert_eq!(words("$5"), vec!["$", "5"]);
    }

    #[test]
    fn test_offsets_and_positions() {
        let tokens: Vec<Token> = TreebankTokenizer::new()
            .tokenize("so isn't it")
            .unwrap()
            .collect();
        assert_eq!(tokens.len(), 4);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (3, 5));
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (5, 8));
        assert_eq!(tokens[3].position, 3);
        assert!(tokens.iter().all(|t| t.tag == PosTag::untagged()));
    }

    #[test]
    fn test_whitespace_only() {
        assert!(words(" \n\t ").is_empty());
        assert!(words("").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(TreebankTokenizer::new().name(), "treebank");
    }
}
