//! WordNet-style morphological base form lookup ("morphy").
//!
//! Morphy reduces an inflected word to the base forms a dictionary knows.
//! It first consults an exception list of irregular forms ("ran" -> "run"),
//! then the word itself, then repeatedly strips regular suffixes using the
//! detachment rules of each category. Only forms for which `known` returns
//! true are ever reported, so the result is empty for words the dictionary
//! has never seen.
//!
//! # Examples
//!
//! ```
//! use ahash::AHashMap;
//! use reword::analysis::tag::CoarsePos;
//! use reword::lexicon::morphy::morphy;
//!
//! let exceptions = AHashMap::new();
//! let known = |w: &str| w == "church";
//! assert_eq!(morphy("churches", CoarsePos::Noun, &exceptions, known), vec!["church"]);
//! assert!(morphy("flurbs", CoarsePos::Noun, &exceptions, known).is_empty());
//! ```

use ahash::AHashMap;

use crate::analysis::tag::CoarsePos;

/// Irregular form -> base forms, for one category.
pub type ExceptionMap = AHashMap<String, Vec<String>>;

/// Detachment rules as (suffix, replacement) pairs.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Bound on rule re-application; each round strips at least one suffix.
const MAX_ROUNDS: usize = 4;

/// Detachment rules for a category.
pub fn rules(pos: CoarsePos) -> &'static [(&'static str, &'static str)] {
    match pos {
        CoarsePos::Noun => NOUN_RULES,
        CoarsePos::Verb => VERB_RULES,
        CoarsePos::Adjective => ADJECTIVE_RULES,
        CoarsePos::Adverb => &[],
    }
}

/// Apply every matching detachment rule to every form.
fn apply_rules(forms: &[String], pos: CoarsePos) -> Vec<String> {
    let mut out = Vec::new();
    for form in forms {
        for (suffix, replacement) in rules(pos) {
            if let Some(stem) = form.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let candidate = format!("{stem}{replacement}");
                if !out.contains(&candidate) {
                    out.push(candidate);
                }
            }
        }
    }
    out
}

/// Base forms of `word` that the dictionary knows, best first.
///
/// Exception-list base forms come first, then the word itself, then forms
/// produced by the detachment rules.
pub fn morphy<F>(word: &str, pos: CoarsePos, exceptions: &ExceptionMap, known: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut results: Vec<String> = Vec::new();
    let keep = |form: &str, results: &mut Vec<String>| {
        if known(form) && !results.iter().any(|r| r == form) {
            results.push(form.to_string());
        }
    };

    if let Some(bases) = exceptions.get(word) {
        for base in bases {
            keep(base, &mut results);
        }
        keep(word, &mut results);
        if !results.is_empty() {
            return results;
        }
    }

    keep(word, &mut results);
    let mut forms = apply_rules(&[word.to_string()], pos);
    for form in &forms {
        keep(form, &mut results);
    }

    let mut rounds = 1;
    while results.is_empty() && !forms.is_empty() && rounds < MAX_ROUNDS {
        forms = apply_rules(&forms, pos);
        for form in &forms {
            keep(form, &mut results);
        }
        rounds += 1;
    }

    results
}

/// Parse a WordNet `*.exc` exception file body.
///
/// Each line is `inflected base [base ...]`.
pub fn parse_exceptions(content: &str) -> ExceptionMap {
    let mut map = ExceptionMap::new();
    for line in content.lines() {
        let mut fields = line.split_whitespace();
        let Some(inflected) = fields.next() else {
            continue;
        };
        let bases: Vec<String> = fields.map(str::to_string).collect();
        if bases.is_empty() {
            continue;
        }
        map.entry(inflected.to_string())
            .or_insert_with(Vec::new)
            .extend(bases);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known_in(words: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |w| words.contains(&w)
    }

    #[test]
    fn test_noun_rules() {
        let exc = ExceptionMap::new();
        let known = known_in(&["cat", "box", "city", "woman", "glass"]);
        assert_eq!(morphy("cats", CoarsePos::Noun, &exc, &known), vec!["cat"]);
        assert_eq!(morphy("boxes", CoarsePos::Noun, &exc, &known), vec!["box"]);
        assert_eq!(morphy("cities", CoarsePos::Noun, &exc, &known), vec!["city"]);
        assert_eq!(morphy("women", CoarsePos::Noun, &exc, &known), vec!["woman"]);
        assert_eq!(morphy("glasses", CoarsePos::Noun, &exc, &known), vec!["glass"]);
    }

    #[test]
    fn test_verb_rules() {
        let exc = ExceptionMap::new();
        let known = known_in(&["walk", "bake", "carry", "sit"]);
        assert_eq!(morphy("walked", CoarsePos::Verb, &exc, &known), vec!["walk"]);
        assert_eq!(morphy("baking", CoarsePos::Verb, &exc, &known), vec!["bake"]);
        assert_eq!(morphy("carries", CoarsePos::Verb, &exc, &known), vec!["carry"]);
        // No rule turns "sat" into "sit".
        assert!(morphy("sat", CoarsePos::Verb, &exc, &known).is_empty());
    }

    #[test]
    fn test_exceptions_come_first() {
        let exc = parse_exceptions("sat sit\nsaw see\n");
        let known = known_in(&["sit", "see", "saw"]);
        assert_eq!(morphy("sat", CoarsePos::Verb, &exc, &known), vec!["sit"]);
        assert_eq!(morphy("saw", CoarsePos::Verb, &exc, &known), vec!["see", "saw"]);
    }

    #[test]
    fn test_known_word_is_its_own_lemma() {
        let exc = ExceptionMap::new();
        let known = known_in(&["news", "new"]);
        let lemmas = morphy("news", CoarsePos::Noun, &exc, &known);
        assert_eq!(lemmas[0], "news");
    }

    #[test]
    fn test_adjective_rules() {
        let exc = parse_exceptions("better good well\n");
        let known = known_in(&["large", "tall", "good"]);
        assert_eq!(morphy("larger", CoarsePos::Adjective, &exc, &known), vec!["large"]);
        assert_eq!(morphy("tallest", CoarsePos::Adjective, &exc, &known), vec!["tall"]);
        assert_eq!(morphy("better", CoarsePos::Adjective, &exc, &known), vec!["good"]);
    }

    #[test]
    fn test_adverbs_have_no_rules() {
        let exc = ExceptionMap::new();
        let known = known_in(&["quickly"]);
        assert_eq!(morphy("quickly", CoarsePos::Adverb, &exc, &known), vec!["quickly"]);
        assert!(morphy("quicklier", CoarsePos::Adverb, &exc, &known).is_empty());
    }

    #[test]
    fn test_parse_exceptions_skips_malformed_lines() {
        let exc = parse_exceptions("children child\nlonely\n\nmice mouse\n");
        assert_eq!(exc.len(), 2);
        assert_eq!(exc.get("mice").unwrap(), &vec!["mouse".to_string()]);
    }
}
