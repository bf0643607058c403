//! Reader for WordNet 3.x dictionary files.
//!
//! A WordNet `dict/` directory holds, per category, an `index.<pos>` file
//! listing each lemma with the byte offsets of its synsets (most frequent
//! sense first), a `data.<pos>` file whose lines start at those offsets, and
//! an optional `<pos>.exc` list of irregular forms.
//!
//! Index files are parsed into hash maps when the database is opened. Data
//! files are memory-mapped and synset lines are decoded on demand.
//!
//! # Examples
//!
//! ```no_run
//! use reword::analysis::tag::CoarsePos;
//! use reword::lexicon::{SenseDatabase, WordNet};
//!
//! let wordnet = WordNet::open("/usr/share/wordnet").unwrap();
//! for sense in wordnet.lookup("cat", CoarsePos::Noun) {
//!     println!("{}: {}", sense.id, sense.lemmas.join(", "));
//! }
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use ahash::AHashMap;
use log::{debug, info, warn};
use memmap2::{Mmap, MmapOptions};

use crate::analysis::tag::CoarsePos;
use crate::error::{Result, RewordError};
use crate::lexicon::morphy::{ExceptionMap, morphy, parse_exceptions};
use crate::lexicon::{Lemmatizer, Sense, SenseDatabase, index_key, slot};

/// Files and indexes for one category.
#[derive(Debug)]
struct PosFiles {
    /// lemma -> synset byte offsets, in sense order
    index: AHashMap<String, Vec<u64>>,
    /// Memory-mapped `data.<pos>` file
    data: Mmap,
    /// Irregular form -> base forms
    exceptions: ExceptionMap,
}

/// A WordNet database opened from a `dict` directory.
#[derive(Debug)]
pub struct WordNet {
    /// Directory the files were read from.
    root: PathBuf,
    /// Per-category files, indexed by [`slot`].
    parts: Vec<PosFiles>,
}

impl WordNet {
    /// Open the WordNet database in `dir`.
    ///
    /// Fails if any `index.*` or `data.*` file is missing or unreadable.
    /// Exception lists are optional.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(RewordError::lexicon(format!(
                "WordNet directory not found: {}",
                root.display()
            )));
        }

        let mut parts = Vec::with_capacity(CoarsePos::ALL.len());
        for pos in CoarsePos::ALL {
            parts.push(Self::open_part(&root, pos)?);
        }

        let lemmas: usize = parts.iter().map(|p| p.index.len()).sum();
        info!(
            "loaded WordNet from {} ({} index entries)",
            root.display(),
            lemmas
        );

        Ok(WordNet { root, parts })
    }

    fn open_part(root: &Path, pos: CoarsePos) -> Result<PosFiles> {
        let suffix = pos.file_suffix();

        let index_path = root.join(format!("index.{suffix}"));
        let index_content = fs::read_to_string(&index_path).map_err(|e| {
            RewordError::lexicon(format!(
                "Failed to read WordNet index '{}': {e}",
                index_path.display()
            ))
        })?;
        let index = parse_index(&index_content);

        let data_path = root.join(format!("data.{suffix}"));
        let file = File::open(&data_path).map_err(|e| {
            RewordError::lexicon(format!(
                "Failed to open WordNet data '{}': {e}",
                data_path.display()
            ))
        })?;
        // SAFETY: the dictionary is opened read-only and never written while
        // the map is alive.
        let data = unsafe { MmapOptions::new().map(&file) }.map_err(|e| {
            RewordError::lexicon(format!(
                "Failed to map WordNet data '{}': {e}",
                data_path.display()
            ))
        })?;

        let exc_path = root.join(format!("{suffix}.exc"));
        let exceptions = match fs::read_to_string(&exc_path) {
            Ok(content) => parse_exceptions(&content),
            Err(e) => {
                debug!("no exception list at {}: {e}", exc_path.display());
                ExceptionMap::new()
            }
        };

        Ok(PosFiles {
            index,
            data,
            exceptions,
        })
    }

    /// Directory the database was opened from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of lemmas indexed for a category.
    pub fn lemma_count(&self, pos: CoarsePos) -> usize {
        self.parts[slot(pos)].index.len()
    }

    fn part(&self, pos: CoarsePos) -> &PosFiles {
        &self.parts[slot(pos)]
    }

    /// Decode the synset line starting at `offset`.
    fn read_synset(&self, pos: CoarsePos, offset: u64) -> Option<Sense> {
        let data = &self.part(pos).data[..];
        let start = usize::try_from(offset).ok()?;
        if start >= data.len() {
            warn!("synset offset {offset} out of range for data.{pos}");
            return None;
        }
        let end = data[start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(data.len(), |n| start + n);
        let line = String::from_utf8_lossy(&data[start..end]);

        match parse_synset_line(&line) {
            Some(lemmas) => Some(Sense::new(
                format!("{offset:08}-{}", pos.wordnet_code()),
                lemmas,
            )),
            None => {
                warn!("malformed synset line at offset {offset} in data.{pos}");
                None
            }
        }
    }
}

impl SenseDatabase for WordNet {
    fn lookup(&self, word: &str, pos: CoarsePos) -> Vec<Sense> {
        let Some(offsets) = self.part(pos).index.get(&index_key(word)) else {
            return Vec::new();
        };
        offsets
            .iter()
            .filter_map(|&offset| self.read_synset(pos, offset))
            .collect()
    }

    fn contains(&self, word: &str, pos: CoarsePos) -> bool {
        self.part(pos).index.contains_key(&index_key(word))
    }

    fn name(&self) -> &'static str {
        "wordnet"
    }
}

impl Lemmatizer for WordNet {
    fn lemmas(&self, word: &str, pos: CoarsePos) -> Vec<String> {
        let part = self.part(pos);
        let key = index_key(word);
        morphy(&key, pos, &part.exceptions, |form| {
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

/// Parse an `index.<pos>` file into lemma -> synset offsets.
///
/// Line layout: `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt
/// tagsense_cnt synset_offset [synset_offset...]`. License lines start with
/// a space and are skipped.
pub fn parse_index(content: &str) -> AHashMap<String, Vec<u64>> {
    let mut index = AHashMap::new();
    for line in content.lines() {
        if line.is_empty() || line.starts_with(' ') {
            continue;
        }
        if let Some((lemma, offsets)) = parse_index_line(line) {
            index.insert(lemma, offsets);
        }
    }
    index
}

fn parse_index_line(line: &str) -> Option<(String, Vec<u64>)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let lemma = (*fields.first()?).to_string();
    let synset_cnt: usize = fields.get(2)?.parse().ok()?;
    let p_cnt: usize = fields.get(3)?.parse().ok()?;
    // lemma, pos, synset_cnt, p_cnt, pointers, sense_cnt, tagsense_cnt
    let first_offset = 4 + p_cnt + 2;
    let offsets = fields
        .get(first_offset..first_offset + synset_cnt)?
        .iter()
        .map(|f| f.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;
    Some((lemma, offsets))
}

/// Extract the lemma names from a `data.<pos>` synset line.
///
/// Line layout: `synset_offset lex_filenum ss_type w_cnt word lex_id
/// [word lex_id...] p_cnt ...`, where `w_cnt` is two hex digits. Adjective
/// syntactic markers such as `(a)` or `(ip)` are stripped.
pub fn parse_synset_line(line: &str) -> Option<Vec<String>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let w_cnt = usize::from_str_radix(fields.get(3)?, 16).ok()?;
    let mut lemmas = Vec::with_capacity(w_cnt);
    for i in 0..w_cnt {
        let word = fields.get(4 + i * 2)?;
        lemmas.push(strip_marker(word).to_string());
    }
    Some(lemmas)
}

fn strip_marker(word: &str) -> &str {
    match word.find('(') {
        Some(idx) if word.ends_with(')') && idx > 0 => &word[..idx],
        _ => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_line() {
        let line = "cat n 8 7 @ ~ %p + ; #m - 8 1 02121620 10153414 02985606";
        // synset_cnt claims 8 but only 3 offsets follow: malformed.
        assert!(parse_index_line(line).is_none());

        let line = "cat n 3 2 @ ~ 3 1 02121620 10153414 02985606";
        let (lemma, offsets) = parse_index_line(line).unwrap();
        assert_eq!(lemma, "cat");
        assert_eq!(offsets, vec![2121620, 10153414, 2985606]);
    }

    #[test]
    fn test_parse_index_skips_license() {
        let content = "  1 This software and database is being provided\n\
                       dog n 1 0 1 0 02084071\n";
        let index = parse_index(content);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("dog").unwrap(), &vec![2084071]);
    }

    #[test]
    fn test_parse_synset_line() {
        let line = "02121620 05 n 03 cat 0 true_cat 0 Felis_catus 0 001 @ 02120997 n 0000 | feline mammal";
        let lemmas = parse_synset_line(line).unwrap();
        assert_eq!(lemmas, vec!["cat", "true_cat", "Felis_catus"]);
    }

    #[test]
    fn test_parse_synset_line_hex_count() {
        let words: Vec<String> = (0..10).map(|i| format!("w{i} 0")).collect();
        let line = format!("00000001 00 n 0a {} 000 | gloss", words.join(" "));
        assert_eq!(parse_synset_line(&line).unwrap().len(), 10);
    }

    #[test]
    fn test_strip_adjective_marker() {
        assert_eq!(strip_marker("galore(ip)"), "galore");
        assert_eq!(strip_marker("big(a)"), "big");
        assert_eq!(strip_marker("big"), "big");
    }

    #[test]
    fn test_open_missing_directory() {
        let err = WordNet::open("/definitely/not/here").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
