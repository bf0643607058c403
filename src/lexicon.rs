//! Lexical collaborators: sense databases, lemmatizers and inflectors.
//!
//! The paraphrasing pipeline never talks to a concrete dictionary. It asks
//! a [`SenseDatabase`] for synonym groups, a [`Lemmatizer`] for base forms
//! and an [`Inflector`] for surface forms, all through the traits defined
//! here. Two sense databases ship with the crate:
//!
//! - [`wordnet::WordNet`] reads a WordNet 3.x `dict/` directory.
//! - [`memory::MemoryLexicon`] holds ordered sense groups in memory and can
//!   be loaded from JSON.
//!
//! Both also implement [`Lemmatizer`] through the shared [`morphy`] engine.
//! [`inflector::RuleInflector`] is the bundled [`Inflector`].

use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::tag::{CoarsePos, PosTag};
use crate::error::{Result, RewordError};

pub mod inflector;
pub mod memory;
pub mod morphy;
pub mod wordnet;

pub use inflector::RuleInflector;
pub use memory::MemoryLexicon;
pub use wordnet::WordNet;

/// One meaning of a word: the lemma names that share it.
///
/// Collocations keep the database's internal joiner (`_` for WordNet).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// Identifier of the sense inside its database.
    pub id: String,
    /// Lemma names in database order.
    pub lemmas: Vec<String>,
}

impl Sense {
    /// Create a sense from an id and its lemma names.
    pub fn new<S: Into<String>>(id: S, lemmas: Vec<String>) -> Self {
        Sense {
            id: id.into(),
            lemmas,
        }
    }
}

/// A read-only database of word senses.
pub trait SenseDatabase: Send + Sync {
    /// All senses of `word` in the given category, most common first.
    ///
    /// The order must be stable across calls: synonym weighting depends on
    /// it.
    fn lookup(&self, word: &str, pos: CoarsePos) -> Vec<Sense>;

    /// Whether the database has at least one sense for `word`.
    fn contains(&self, word: &str, pos: CoarsePos) -> bool {
        !self.lookup(word, pos).is_empty()
    }

    /// Get the name of this database (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// Reduces an inflected word to candidate base forms.
pub trait Lemmatizer: Send + Sync {
    /// Candidate base forms of `word`, best first.
    ///
    /// Lexicon-backed lemmatizers return nothing for words they do not know.
    fn lemmas(&self, word: &str, pos: CoarsePos) -> Vec<String>;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

/// Produces surface forms of a base word for a fine-grained tag.
pub trait Inflector: Send + Sync {
    /// Candidate surface forms, least to most specific.
    ///
    /// An empty result means the inflector has no form for this tag.
    fn inflections(&self, word: &str, tag: &PosTag) -> Vec<String>;

    /// Get the name of this inflector.
    fn name(&self) -> &'static str;
}

/// Where to load the lexical database from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LexiconSource {
    /// A WordNet `dict` directory.
    #[serde(rename = "wordnet")]
    WordNet { path: String },
    /// A JSON sense-group file understood by [`MemoryLexicon`].
    Json { path: String },
}

/// A loaded lexicon, usable both as sense database and lemmatizer.
#[derive(Clone, Debug)]
pub enum LoadedLexicon {
    WordNet(Arc<WordNet>),
    Memory(Arc<MemoryLexicon>),
}

impl LoadedLexicon {
    /// The lexicon viewed as a sense database.
    pub fn senses(&self) -> Arc<dyn SenseDatabase> {
        match self {
            LoadedLexicon::WordNet(wordnet) => wordnet.clone(),
            LoadedLexicon::Memory(memory) => memory.clone(),
        }
    }

    /// The lexicon viewed as a lemmatizer.
    pub fn lemmatizer(&self) -> Arc<dyn Lemmatizer> {
        match self {
            LoadedLexicon::WordNet(wordnet) => wordnet.clone(),
            LoadedLexicon::Memory(memory) => memory.clone(),
        }
    }
}

/// Open the lexicon described by `source`.
///
/// This is the only place where an unavailable collaborator becomes an
/// error; once opened, lookups never fail.
pub fn open_lexicon(source: &LexiconSource) -> Result<LoadedLexicon> {
    let lexicon = match source {
        LexiconSource::WordNet { path } => LoadedLexicon::WordNet(Arc::new(WordNet::open(path)?)),
        LexiconSource::Json { path } => {
            LoadedLexicon::Memory(Arc::new(MemoryLexicon::load_from_file(path)?))
        }
    };
    info!("opened lexicon {source}");
    Ok(lexicon)
}

/// Index of a coarse category in per-category arrays.
pub(crate) fn slot(pos: CoarsePos) -> usize {
    match pos {
        CoarsePos::Noun => 0,
        CoarsePos::Verb => 1,
        CoarsePos::Adjective => 2,
        CoarsePos::Adverb => 3,
    }
}

/// Normalize a word into the key format used by dictionary indexes.
pub(crate) fn index_key(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}

impl std::fmt::Display for LexiconSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexiconSource::WordNet { path } => write!(f, "wordnet:{path}"),
            LexiconSource::Json { path } => write!(f, "json:{path}"),
        }
    }
}

impl TryFrom<&str> for LexiconSource {
    type Error = RewordError;

    /// Parse `wordnet:<dir>` or `json:<file>`.
    fn try_from(value: &str) -> Result<Self> {
        match value.split_once(':') {
            Some(("wordnet", path)) if !path.is_empty() => Ok(LexiconSource::WordNet {
                path: path.to_string(),
            }),
            Some(("json", path)) if !path.is_empty() => Ok(LexiconSource::Json {
                path: path.to_string(),
            }),
            _ => Err(RewordError::invalid_argument(format!(
                "expected wordnet:<dir> or json:<file>, got '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_key() {
        assert_eq!(index_key("Run Across"), "run_across");
        assert_eq!(index_key(" cat "), "cat");
    }

    #[test]
    fn test_lexicon_source_parse() {
        assert_eq!(
            LexiconSource::try_from("wordnet:/usr/share/wordnet").unwrap(),
            LexiconSource::WordNet {
                path: "/usr/share/wordnet".to_string()
            }
        );
        assert_eq!(
            LexiconSource::try_from("json:lex.json").unwrap(),
            LexiconSource::Json {
                path: "lex.json".to_string()
            }
        );
        assert!(LexiconSource::try_from("sqlite:db").is_err());
        assert!(LexiconSource::try_from("json:").is_err());
    }

    #[test]
    fn test_lexicon_source_serde() {
        let source = LexiconSource::WordNet {
            path: "dict".to_string(),
        };
        let json = serde_json::to_string(&source).unwrap();
        assert_eq!(json, r#"{"kind":"wordnet","path":"dict"}"#);
    }

    #[test]
    fn test_open_missing_wordnet_fails() {
        let result = open_lexicon(&LexiconSource::WordNet {
            path: "/nonexistent/wordnet/dict".to_string(),
        });
        assert!(matches!(result, Err(RewordError::Lexicon(_))));
    }
}
