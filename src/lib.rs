//! # Reword
//!
//! Grammar-preserving lexical paraphrasing for English text.
//!
//! Reword replaces content words with weighted random synonyms from a
//! lexical database, then puts tense, number and agreement back so the
//! result still reads as valid English.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Lazy, streaming token pipeline
//! - WordNet 3.x or JSON sense-group lexicons
//! - Rank-biased synonym sampling with an injectable random source
//! - Reinflection of words and multi-word collocations
//! - Contraction- and punctuation-aware detokenization
//!
//! ```
//! use std::sync::Arc;
//!
//! use reword::analysis::tag::CoarsePos;
//! use reword::lexicon::MemoryLexicon;
//! use reword::paraphraser::Paraphraser;
//!
//! let mut lexicon = MemoryLexicon::new();
//! lexicon.add_sense_group(CoarsePos::Adjective, ["big", "large"]);
//!
//! let paraphraser = Paraphraser::builder()
//!     .lexicon(Arc::new(lexicon))
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! let output = paraphraser.paraphrase("It is a big house.").unwrap();
//! assert!(output == "It is a big house." || output == "It is a large house.");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod paraphraser;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
