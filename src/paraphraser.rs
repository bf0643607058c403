//! The paraphrasing pipeline.
//!
//! A [`Paraphraser`] runs five stages in order, each consuming the previous
//! stage's token stream:
//!
//! ```text
//! extract -> lemmatise -> synonymise -> inflect -> assemble
//! ```
//!
//! `extract`, `lemmatise` and `synonymise` are lazy: nothing is tagged,
//! looked up or drawn until the stream is pulled. `inflect` materializes the
//! document because the article rule looks one token ahead, and `assemble`
//! consumes it into text. Every stage keeps the token count and tags.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use reword::analysis::tag::CoarsePos;
//! use reword::lexicon::MemoryLexicon;
//! use reword::paraphraser::Paraphraser;
//!
//! let mut lexicon = MemoryLexicon::new();
//! lexicon.add_sense_group(CoarsePos::Noun, ["cat", "true_cat"]);
//! lexicon.add_sense_group(CoarsePos::Verb, ["sit"]);
//! lexicon.add_exception(CoarsePos::Verb, "sat", "sit");
//!
//! let paraphraser = Paraphraser::builder()
//!     .lexicon(Arc::new(lexicon))
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let output = paraphraser.paraphrase("The cat sat.").unwrap();
//! assert!(output == "The cat sat." || output == "The true cat sat.");
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::analysis::assembler::{DelimiterPolicy, Reassembler};
use crate::analysis::segmenter::{PunctuationSegmenter, SentenceSegmenter};
use crate::analysis::tagger::Tagger;
use crate::analysis::tagger::rule::RuleTagger;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::inflect::InflectFilter;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::synonym::{SharedRng, SynonymFilter, shared_rng};
use crate::config::RewordConfig;
use crate::error::{Result, RewordError};
use crate::lexicon::{
    Inflector, Lemmatizer, LoadedLexicon, RuleInflector, SenseDatabase, open_lexicon,
};

/// Lexical paraphraser composed of the five pipeline stages.
#[derive(Clone)]
pub struct Paraphraser {
    tagger: Arc<dyn Tagger>,
    lowercase: LowercaseFilter,
    lemma: LemmaFilter,
    synonym: SynonymFilter,
    inflect: InflectFilter,
    reassembler: Reassembler,
}

impl fmt::Debug for Paraphraser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paraphraser")
            .field("tagger", &self.tagger.name())
            .field("synonym", &self.synonym)
            .field("delimiters", &self.reassembler.policy())
            .finish_non_exhaustive()
    }
}

impl Paraphraser {
    /// Start building a paraphraser.
    pub fn builder() -> ParaphraserBuilder {
        ParaphraserBuilder::new()
    }

    /// Tag `text` and lower-case every token.
    pub fn extract(&self, text: &str) -> Result<TokenStream> {
        let tokens = self.tagger.tag(text)?;
        self.lowercase.filter(tokens)
    }

    /// Reduce mutable tokens to their base form.
    pub fn lemmatise(&self, tokens: TokenStream) -> Result<TokenStream> {
        self.lemma.filter(tokens)
    }

    /// Replace mutable tokens with weighted random synonyms.
    pub fn synonymise(&self, tokens: TokenStream) -> Result<TokenStream> {
        self.synonym.filter(tokens)
    }

    /// Restore each token's grammatical form and fix indefinite articles.
    pub fn inflect(&self, tokens: TokenStream) -> Result<TokenStream> {
        self.inflect.filter(tokens)
    }

    /// Detokenize the stream into text.
    pub fn assemble(&self, tokens: TokenStream) -> String {
        self.reassembler.assemble(tokens)
    }

    /// Run every stage except assembly and return the final tokens.
    pub fn transform(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = self.extract(text)?;
        let tokens = self.lemmatise(tokens)?;
        let tokens = self.synonymise(tokens)?;
        let tokens: Vec<Token> = self.inflect(tokens)?.collect();
        Ok(tokens)
    }

    /// Paraphrase a whole document.
    pub fn paraphrase(&self, text: &str) -> Result<String> {
        let tokens = self.transform(text)?;
        let count = tokens.len();
        let output = self.reassembler.assemble(tokens);
        debug!("assembled {count} tokens into {} bytes", output.len());
        Ok(output)
    }
}

/// Builder for [`Paraphraser`].
///
/// A sense database and a lemmatizer are required. Everything else has a
/// default: [`RuleTagger`] backed by the lemmatizer, [`RuleInflector`],
/// [`PunctuationSegmenter`], the terminal delimiter policy and an
/// OS-seeded [`StdRng`].
#[derive(Default)]
pub struct ParaphraserBuilder {
    senses: Option<Arc<dyn SenseDatabase>>,
    lemmatizer: Option<Arc<dyn Lemmatizer>>,
    inflector: Option<Arc<dyn Inflector>>,
    tagger: Option<Arc<dyn Tagger>>,
    segmenter: Option<Arc<dyn SentenceSegmenter>>,
    rng: Option<SharedRng>,
    seed: Option<u64>,
    delimiters: DelimiterPolicy,
}

impl fmt::Debug for ParaphraserBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParaphraserBuilder")
            .field("seed", &self.seed)
            .field("delimiters", &self.delimiters)
            .finish_non_exhaustive()
    }
}

impl ParaphraserBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a builder from a run configuration, opening its lexicon.
    pub fn from_config(config: &RewordConfig) -> Result<Self> {
        let source = config
            .lexicon
            .as_ref()
            .ok_or_else(|| RewordError::config("no lexicon configured"))?;
        let lexicon = open_lexicon(source)?;
        let mut builder = Self::new()
            .loaded_lexicon(&lexicon)
            .delimiters(config.delimiters);
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }
        Ok(builder)
    }

    /// Use one lexicon as both sense database and lemmatizer.
    pub fn lexicon<L>(self, lexicon: Arc<L>) -> Self
    where
        L: SenseDatabase + Lemmatizer + 'static,
    {
        let lemmatizer: Arc<dyn Lemmatizer> = lexicon.clone();
        self.sense_database(lexicon).lemmatizer(lemmatizer)
    }

    /// Use an opened lexicon as both sense database and lemmatizer.
    pub fn loaded_lexicon(self, lexicon: &LoadedLexicon) -> Self {
        self.sense_database(lexicon.senses())
            .lemmatizer(lexicon.lemmatizer())
    }

    pub fn sense_database(mut self, senses: Arc<dyn SenseDatabase>) -> Self {
        self.senses = Some(senses);
        self
    }

    pub fn lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    pub fn inflector(mut self, inflector: Arc<dyn Inflector>) -> Self {
        self.inflector = Some(inflector);
        self
    }

    /// Replace the default tagger. It is also used to find collocation
    /// heads.
    pub fn tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    pub fn segmenter(mut self, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    /// Draw synonyms from `rng`. Takes precedence over [`Self::seed`].
    pub fn rng<R: RngCore + Send + 'static>(mut self, rng: R) -> Self {
        self.rng = Some(shared_rng(rng));
        self
    }

    /// Seed the default random source for reproducible output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn delimiters(mut self, delimiters: DelimiterPolicy) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Build the paraphraser.
    pub fn build(self) -> Result<Paraphraser> {
        let senses = self
            .senses
            .ok_or_else(|| RewordError::config("a sense database is required"))?;
        let lemmatizer = self
            .lemmatizer
            .ok_or_else(|| RewordError::config("a lemmatizer is required"))?;
        let inflector = self
            .inflector
            .unwrap_or_else(|| Arc::new(RuleInflector::new()));
        let tagger = self.tagger.unwrap_or_else(|| {
            Arc::new(RuleTagger::new().with_lemmatizer(Arc::clone(&lemmatizer)))
        });
        let segmenter = self
            .segmenter
            .unwrap_or_else(|| Arc::new(PunctuationSegmenter::new()));
        let rng: SharedRng = match (self.rng, self.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => shared_rng(StdRng::seed_from_u64(seed)),
            (None, None) => shared_rng(StdRng::from_rng(&mut rand::rng())),
        };

        debug!(
            "building paraphraser: database={}, lemmatizer={}, inflector={}, tagger={}",
            senses.name(),
            lemmatizer.name(),
            inflector.name(),
            tagger.name()
        );

        Ok(Paraphraser {
            lowercase: LowercaseFilter::new(),
            lemma: LemmaFilter::new(lemmatizer),
            synonym: SynonymFilter::with_shared_rng(senses, rng),
            inflect: InflectFilter::new(inflector, Arc::clone(&tagger)),
            reassembler: Reassembler::new(segmenter).with_policy(self.delimiters),
            tagger,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tag::{CoarsePos, PosTag};
    use crate::lexicon::MemoryLexicon;

    fn lexicon() -> Arc<MemoryLexicon> {
        let mut lexicon = MemoryLexicon::new();
        lexicon.add_sense_group(CoarsePos::Noun, ["cat", "true_cat"]);
        lexicon.add_sense_group(CoarsePos::Noun, ["mat"]);
        lexicon.add_sense_group(CoarsePos::Verb, ["sit", "sit_down"]);
        lexicon.add_sense_group(CoarsePos::Adjective, ["big", "large"]);
        lexicon.add_exception(CoarsePos::Verb, "sat", "sit");
        Arc::new(lexicon)
    }

    fn paraphraser(seed: u64) -> Paraphraser {
        Paraphraser::builder()
            .lexicon(lexicon())
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_requires_lexicon() {
        let err = Paraphraser::builder().build().unwrap_err();
        assert!(matches!(err, RewordError::Config(_)));

        let err = Paraphraser::builder()
            .sense_database(lexicon())
            .build()
            .unwrap_err();
        assert!(matches!(err, RewordError::Config(_)));
    }

    #[test]
    fn test_from_config_requires_lexicon() {
        let err = ParaphraserBuilder::from_config(&RewordConfig::default()).unwrap_err();
        assert!(matches!(err, RewordError::Config(_)));
    }

    #[test]
    fn test_stages_preserve_length_and_tags() {
        let p = paraphraser(3);
        let text = "The big cat sat on the mat.";
        let extracted: Vec<Token> = p.extract(text).unwrap().collect();
        let tags: Vec<PosTag> = extracted.iter().map(|t| t.tag.clone()).collect();

        let tokens = p.extract(text).unwrap();
        let lemmas: Vec<Token> = p.lemmatise(tokens).unwrap().collect();
        assert_eq!(lemmas.len(), extracted.len());

        let transformed = p.transform(text).unwrap();
        assert_eq!(transformed.len(), extracted.len());
        assert_eq!(
            transformed.iter().map(|t| t.tag.clone()).collect::<Vec<_>>(),
            tags
        );
    }

    #[test]
    fn test_extract_lowercases() {
        let p = paraphraser(1);
        let texts: Vec<String> = p.extract("The Cat").unwrap().map(|t| t.text).collect();
        assert_eq!(texts, vec!["the", "cat"]);
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let text = "The big cat sat on the mat. The big cat sat again.";
        assert_eq!(
            paraphraser(42).paraphrase(text).unwrap(),
            paraphraser(42).paraphrase(text).unwrap()
        );
    }

    #[test]
    fn test_paraphrase_keeps_grammar() {
        for seed in 0..10 {
            let out = paraphraser(seed).paraphrase("The cat sat on the mat.").unwrap();
            assert!(out.starts_with("The "), "{out}");
            assert!(out.ends_with(" on the mat."), "{out}");
            assert!(out.contains(" sat ") || out.contains(" sat down "), "{out}");
        }
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(paraphraser(0).paraphrase("").unwrap(), "");
    }

    #[test]
    fn test_clause_delimiters() {
        let p = Paraphraser::builder()
            .lexicon(lexicon())
            .seed(0)
            .delimiters(DelimiterPolicy::Clause)
            .build()
            .unwrap();
        assert_eq!(p.paraphrase("Why?").unwrap(), "Why ?");
    }
}
