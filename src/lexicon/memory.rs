//! In-memory sense database built from ordered synonym groups.
//!
//! Each category holds a list of sense groups. A word's senses are the
//! groups that contain it, in the order the groups were added, so the first
//! group should be the word's most common meaning.
//!
//! The JSON file format is:
//!
//! ```json
//! {
//!   "noun": [["cat", "true_cat"], ["guy", "cat", "hombre"]],
//!   "verb": [["sit", "sit_down"]],
//!   "adj": [],
//!   "adv": [],
//!   "exceptions": { "verb": { "sat": ["sit"] } }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use ahash::AHashMap;
use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::tag::CoarsePos;
use crate::error::{Result, RewordError};
use crate::lexicon::morphy::{ExceptionMap, morphy};
use crate::lexicon::{Lemmatizer, Sense, SenseDatabase, index_key, slot};

/// On-disk representation of a [`MemoryLexicon`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconFile {
    #[serde(default)]
    pub noun: Vec<Vec<String>>,
    #[serde(default)]
    pub verb: Vec<Vec<String>>,
    #[serde(default)]
    pub adj: Vec<Vec<String>>,
    #[serde(default)]
    pub adv: Vec<Vec<String>>,
    #[serde(default)]
    pub exceptions: ExceptionsFile,
}

/// Irregular forms per category, `inflected -> [base, ...]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExceptionsFile {
    #[serde(default)]
    pub noun: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub verb: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub adj: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub adv: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Default)]
struct PosGroups {
    /// Sense groups in insertion order
    groups: Vec<Vec<String>>,
    /// normalized word -> group indices, ascending
    index: AHashMap<String, Vec<usize>>,
    exceptions: ExceptionMap,
}

/// A sense database held entirely in memory.
///
/// # Examples
///
/// ```
/// use reword::analysis::tag::CoarsePos;
/// use reword::lexicon::{Lemmatizer, MemoryLexicon, SenseDatabase};
///
/// let mut lexicon = MemoryLexicon::new();
/// lexicon.add_sense_group(CoarsePos::Noun, ["cat", "true_cat"]);
/// lexicon.add_sense_group(CoarsePos::Noun, ["guy", "cat", "hombre"]);
///
/// let senses = lexicon.lookup("cat", CoarsePos::Noun);
/// assert_eq!(senses.len(), 2);
/// assert_eq!(senses[1].lemmas, vec!["guy", "cat", "hombre"]);
///
/// assert_eq!(lexicon.lemmas("cats", CoarsePos::Noun), vec!["cat"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryLexicon {
    parts: [PosGroups; 4],
}

impl MemoryLexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a lexicon from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RewordError::lexicon(format!(
                "Failed to read lexicon file '{}': {e}",
                path.display()
            ))
        })?;
        let lexicon = Self::from_json_str(&content).map_err(|e| {
            RewordError::lexicon(format!(
                "Failed to parse lexicon JSON from '{}': {e}",
                path.display()
            ))
        })?;
        info!(
            "loaded lexicon from {} ({} sense groups)",
            path.display(),
            lexicon.len()
        );
        Ok(lexicon)
    }

    /// Parse a lexicon from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Ok(Self::from_file(file))
    }

    /// Build a lexicon from its file representation.
    pub fn from_file(file: LexiconFile) -> Self {
        let mut lexicon = Self::new();
        let LexiconFile {
            noun,
            verb,
            adj,
            adv,
            exceptions,
        } = file;
        for (pos, groups) in [
            (CoarsePos::Noun, noun),
            (CoarsePos::Verb, verb),
            (CoarsePos::Adjective, adj),
            (CoarsePos::Adverb, adv),
        ] {
            for group in groups {
                lexicon.add_sense_group(pos, group);
            }
        }
        for (pos, map) in [
            (CoarsePos::Noun, exceptions.noun),
            (CoarsePos::Verb, exceptions.verb),
            (CoarsePos::Adjective, exceptions.adj),
            (CoarsePos::Adverb, exceptions.adv),
        ] {
            for (inflected, bases) in map {
                for base in bases {
                    lexicon.add_exception(pos, &inflected, base);
                }
            }
        }
        lexicon
    }

    /// Append a sense group. Empty groups are ignored.
    pub fn add_sense_group<I, S>(&mut self, pos: CoarsePos, lemmas: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lemmas: Vec<String> = lemmas.into_iter().map(Into::into).collect();
        if lemmas.is_empty() {
            return;
        }
        let part = &mut self.parts[slot(pos)];
        let group_id = part.groups.len();
        for lemma in &lemmas {
            let ids = part.index.entry(index_key(lemma)).or_default();
            if ids.last() != Some(&group_id) {
                ids.push(group_id);
            }
        }
        part.groups.push(lemmas);
    }

    /// Register an irregular form, e.g. `("sat", "sit")` for verbs.
    pub fn add_exception<S: Into<String>>(&mut self, pos: CoarsePos, inflected: &str, base: S) {
        self.parts[slot(pos)]
            .exceptions
            .entry(index_key(inflected))
            .or_default()
            .push(index_key(&base.into()));
    }

    /// Total number of sense groups across categories.
    pub fn len(&self) -> usize {
        self.parts.iter().map(|p| p.groups.len()).sum()
    }

    /// Whether the lexicon has no sense groups.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SenseDatabase for MemoryLexicon {
    fn lookup(&self, word: &str, pos: CoarsePos) -> Vec<Sense> {
        let part = &self.parts[slot(pos)];
        let Some(ids) = part.index.get(&index_key(word)) else {
            return Vec::new();
        };
        ids.iter()
            .map(|&id| {
                Sense::new(
                    format!("{}.{id}", pos.wordnet_code()),
                    part.groups[id].clone(),
                )
            })
            .collect()
    }

    fn contains(&self, word: &str, pos: CoarsePos) -> bool {
        self.parts[slot(pos)].index.contains_key(&index_key(word))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

impl Lemmatizer for MemoryLexicon {
    fn lemmas(&self, word: &str, pos: CoarsePos) -> Vec<String> {
        let part = &self.parts[slot(pos)];
        morphy(&index_key(word), pos, &part.exceptions, |form| {
            part.index.contains_key(form)
        })
        .into_iter()
        .map(|lemma| lemma.replace('_', " "))
        .collect()
    }

    fn name(&self) -> &'static str {
        "morphy"
    }
}
