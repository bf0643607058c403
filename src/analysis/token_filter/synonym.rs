//! Synonym replacement filter.
//!
//! For each mutable token with a coarse category, the filter collects every
//! lemma name of every sense the database knows for the word, ranks them in
//! sense order with geometric weights and draws one. Words without
//! candidates keep their text. The draw uses an injected random source so
//! runs can be made reproducible.

use std::fmt;
use std::sync::Arc;

use log::trace;
use parking_lot::Mutex;
use rand::RngCore;

use crate::analysis::candidate::CandidateSet;
use crate::analysis::mutability::is_immutable;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::SenseDatabase;

/// Random source shared between a filter and the streams it produces.
pub type SharedRng = Arc<Mutex<Box<dyn RngCore + Send>>>;

/// Wrap a random source so it can be shared.
pub fn shared_rng<R: RngCore + Send + 'static>(rng: R) -> SharedRng {
    let rng: Box<dyn RngCore + Send> = Box::new(rng);
    Arc::new(Mutex::new(rng))
}

/// A filter that replaces words with weighted random synonyms.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use reword::analysis::tag::{CoarsePos, PosTag};
/// use reword::analysis::token::{IntoTokenStream, tokens_from_pairs};
/// use reword::analysis::token_filter::Filter;
/// use reword::analysis::token_filter::synonym::SynonymFilter;
/// use reword::lexicon::MemoryLexicon;
///
/// let mut lexicon = MemoryLexicon::new();
/// lexicon.add_sense_group(CoarsePos::Adjective, ["big"]);
///
/// let filter = SynonymFilter::new(Arc::new(lexicon), StdRng::seed_from_u64(1));
/// let tokens = tokens_from_pairs([("a", PosTag::DT), ("big", PosTag::JJ)]);
/// let out: Vec<_> = filter.filter(tokens.into_token_stream()).unwrap().collect();
/// assert_eq!(out[1].text, "big");
/// ```
#[derive(Clone)]
pub struct SynonymFilter {
    database: Arc<dyn SenseDatabase>,
    rng: SharedRng,
}

impl fmt::Debug for SynonymFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynonymFilter")
            .field("database", &self.database.name())
            .finish_non_exhaustive()
    }
}

impl SynonymFilter {
    /// Create a synonym filter drawing from `rng`.
    pub fn new<R: RngCore + Send + 'static>(database: Arc<dyn SenseDatabase>, rng: R) -> Self {
        Self::with_shared_rng(database, shared_rng(rng))
    }

    /// Create a synonym filter from an already shared random source.
    pub fn with_shared_rng(database: Arc<dyn SenseDatabase>, rng: SharedRng) -> Self {
        SynonymFilter { database, rng }
    }

    /// The candidates a token would be drawn from.
    ///
    /// Empty for immutable tokens and tokens without a coarse category.
    pub fn candidates(database: &dyn SenseDatabase, token: &Token) -> CandidateSet {
        if is_immutable(&token.text, &token.tag) {
            return CandidateSet::default();
        }
        match token.coarse_pos() {
            Some(pos) => CandidateSet::collect(&database.lookup(&token.text, pos)),
            None => CandidateSet::default(),
        }
    }

    fn synonymise(
        database: &dyn SenseDatabase,
        rng: &Mutex<Box<dyn RngCore + Send>>,
        token: Token,
    ) -> Token {
        let candidates = Self::candidates(database, &token);
        if candidates.is_empty() {
            return token;
        }
        let choice = {
            let mut rng = rng.lock();
            candidates.sample(&mut **rng).map(str::to_string)
        };
        match choice {
            Some(choice) => {
                trace!(
                    "synonym {} -> {choice} ({} candidates)",
                    token.text,
                    candidates.len()
                );
                token.replace_text(choice)
            }
            None => token,
        }
    }
}

impl Filter for SynonymFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let database = Arc::clone(&self.database);
        let rng = Arc::clone(&self.rng);
        Ok(Box::new(tokens.map(move |token| {
            Self::synonymise(database.as_ref(), &rng, token)
        })))
    }

    fn name(&self) -> &'static str {
        "synonym"
    }
}
