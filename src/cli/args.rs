//! Command line argument parsing for the Reword CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::assembler::DelimiterPolicy;
use crate::config::RewordConfig;
use crate::error::Result;
use crate::lexicon::LexiconSource;

/// Reword - lexical paraphrasing of English text
#[derive(Parser, Debug, Clone)]
#[command(name = "reword")]
#[command(about = "Paraphrase English text with weighted random synonyms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RewordArgs {
    /// Text to paraphrase. Prompts on stdin when neither TEXT nor --input is given
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the document from a file
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// WordNet dict directory to use as the lexicon
    #[arg(long, value_name = "DIR", env = "REWORD_WORDNET")]
    pub wordnet: Option<PathBuf>,

    /// JSON sense-group lexicon. Takes precedence over --wordnet
    #[arg(short, long, value_name = "JSON")]
    pub lexicon: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Which punctuation attaches to the previous word
    #[arg(short, long, value_enum)]
    pub delimiters: Option<DelimiterPolicy>,

    /// Configuration file (JSON). Flags override its values
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl RewordArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// Load the configuration file, if any, and apply flag overrides.
    pub fn resolve_config(&self) -> Result<RewordConfig> {
        let mut config = match &self.config {
            Some(path) => RewordConfig::load_from_file(path)?,
            None => RewordConfig::default(),
        };

        if let Some(dir) = &self.wordnet {
            config.lexicon = Some(LexiconSource::WordNet {
                path: dir.to_string_lossy().to_string(),
            });
        }
        if let Some(file) = &self.lexicon {
            config.lexicon = Some(LexiconSource::Json {
                path: file.to_string_lossy().to_string(),
            });
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delimiters) = self.delimiters {
            config.delimiters = delimiters;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Original text, then the paraphrase
    Human,
    /// JSON object with both texts
    Json,
}
