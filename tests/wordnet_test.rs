//! Integration tests for the WordNet reader against a small on-disk
//! dictionary.

use std::fs;
use std::path::Path;

use reword::analysis::tag::CoarsePos;
use reword::error::{Result, RewordError};
use reword::lexicon::{Lemmatizer, LexiconSource, SenseDatabase, WordNet, open_lexicon};
use reword::paraphraser::ParaphraserBuilder;
use tempfile::TempDir;

/// Synsets per category, in file order.
type Synsets<'a> = &'a [&'a [&'a str]];

/// Write `data.<suffix>` and `index.<suffix>` for one category.
///
/// Every lemma is indexed with the offsets of all synsets that contain it,
/// in file order.
fn write_part(dir: &Path, suffix: &str, code: &str, synsets: Synsets<'_>) -> Result<()> {
    let mut data = String::from("  1 This is a test dictionary, not the WordNet database.\n");
    let mut index: Vec<(String, Vec<usize>)> = Vec::new();

    for words in synsets {
        let offset = data.len();
        let members: Vec<String> = words.iter().map(|w| format!("{w} 0")).collect();
        data.push_str(&format!(
            "{offset:08} 05 {code} {:02x} {} 000 | test gloss\n",
            words.len(),
            members.join(" ")
        ));
        for word in *words {
            let key = word.trim_end_matches("(a)").to_lowercase();
            match index.iter_mut().find(|(lemma, _)| *lemma == key) {
                Some((_, offsets)) => offsets.push(offset),
                None => index.push((key, vec![offset])),
            }
        }
    }

    index.sort_by(|a, b| a.0.cmp(&b.0));
    let mut index_text = String::from("  1 This is a test dictionary, not the WordNet database.\n");
    for (lemma, offsets) in index {
        let offsets: Vec<String> = offsets.iter().map(|o| format!("{o:08}")).collect();
        index_text.push_str(&format!(
            "{lemma} {code} {n} 0 {n} 0 {}\n",
            offsets.join(" "),
            n = offsets.len()
        ));
    }

    fs::write(dir.join(format!("data.{suffix}")), data)?;
    fs::write(dir.join(format!("index.{suffix}")), index_text)?;
    Ok(())
}

fn dictionary() -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_part(
        dir.path(),
        "noun",
        "n",
        &[
            &["cat", "true_cat", "Felis_catus"],
            &["guy", "cat", "hombre"],
            &["mat"],
            &["hot_dog", "frank"],
            &["dog"],
            &["mouse"],
        ],
    )?;
    write_part(
        dir.path(),
        "verb",
        "v",
        &[&["sit", "sit_down"], &["run"], &["run_across", "encounter"]],
    )?;
    write_part(dir.path(), "adj", "s", &[&["big(a)", "large(a)"], &["hot"]])?;
    write_part(dir.path(), "adv", "r", &[&["quickly", "rapidly"]])?;
    fs::write(dir.path().join("verb.exc"), "ran run\nsat sit\n")?;
    fs::write(dir.path().join("noun.exc"), "mice mouse\n")?;
    Ok(dir)
}

#[test]
fn test_lookup_in_sense_order() -> Result<()> {
    let dir = dictionary()?;
    let wordnet = WordNet::open(dir.path())?;

    let senses = wordnet.lookup("cat", CoarsePos::Noun);
    assert_eq!(senses.len(), 2);
    assert_eq!(senses[0].lemmas, vec!["cat", "true_cat", "Felis_catus"]);
    assert_eq!(senses[1].lemmas, vec!["guy", "cat", "hombre"]);

    assert!(wordnet.contains("hot dog", CoarsePos::Noun));
    assert!(wordnet.lookup("cat", CoarsePos::Verb).is_empty());
    assert_eq!(wordnet.lemma_count(CoarsePos::Adverb), 2);
    Ok(())
}

#[test]
fn test_adjective_markers_stripped() -> Result<()> {
    let dir = dictionary()?;
    let wordnet = WordNet::open(dir.path())?;
    let senses = wordnet.lookup("big", CoarsePos::Adjective);
    assert_eq!(senses[0].lemmas, vec!["big", "large"]);
    Ok(())
}

#[test]
fn test_morphy_lemmas() -> Result<()> {
    let dir = dictionary()?;
    let wordnet = WordNet::open(dir.path())?;

    assert_eq!(wordnet.lemmas("sat", CoarsePos::Verb), vec!["sit"]);
    assert_eq!(wordnet.lemmas("mice", CoarsePos::Noun), vec!["mouse"]);
    assert_eq!(wordnet.lemmas("cats", CoarsePos::Noun), vec!["cat"]);
    assert_eq!(wordnet.lemmas("sitting", CoarsePos::Verb), Vec::<String>::new());
    assert!(wordnet.lemmas("flurb", CoarsePos::Noun).is_empty());
    Ok(())
}

#[test]
fn test_missing_data_file_fails_at_open() -> Result<()> {
    let dir = dictionary()?;
    fs::remove_file(dir.path().join("data.adv"))?;

    let err = WordNet::open(dir.path()).unwrap_err();
    assert!(matches!(err, RewordError::Lexicon(_)));
    assert!(err.to_string().contains("data.adv"));
    Ok(())
}

#[test]
fn test_missing_exception_list_is_optional() -> Result<()> {
    let dir = dictionary()?;
    fs::remove_file(dir.path().join("noun.exc"))?;
    let wordnet = WordNet::open(dir.path())?;
    assert!(wordnet.lemmas("mice", CoarsePos::Noun).is_empty());
    Ok(())
}

#[test]
fn test_paraphrase_with_wordnet() -> Result<()> {
    let dir = dictionary()?;
    let source = LexiconSource::WordNet {
        path: dir.path().to_string_lossy().to_string(),
    };
    let lexicon = open_lexicon(&source)?;

    for seed in 0..10 {
        let paraphraser = ParaphraserBuilder::new()
            .loaded_lexicon(&lexicon)
            .seed(seed)
            .build()?;
        let out = paraphraser.paraphrase("The cat sat on the mat.")?;
        let subject_ok = [
            "The cat ",
            "The true cat ",
            "The felis catus ",
            "The guy ",
            "The hombre ",
        ]
        .iter()
        .any(|s| out.starts_with(s));
        assert!(subject_ok, "{out}");
        assert!(out.ends_with(" on the mat."), "{out}");
    }
    Ok(())
}
