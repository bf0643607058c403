//! Run configuration.
//!
//! A [`RewordConfig`] can be loaded from JSON; every field is optional and
//! falls back to its default. Command-line flags override whatever the file
//! sets.
//!
//! ```json
//! {
//!   "lexicon": { "kind": "wordnet", "path": "/usr/share/wordnet/dict" },
//!   "delimiters": "clause",
//!   "seed": 42,
//!   "input_file": "essay.txt",
//!   "sentinel": "file"
//! }
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::assembler::DelimiterPolicy;
use crate::error::{Result, RewordError};
use crate::lexicon::LexiconSource;

/// Configuration for a paraphrasing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewordConfig {
    /// Where to load the sense database from.
    #[serde(default)]
    pub lexicon: Option<LexiconSource>,

    /// Which tokens attach to the previous word when reassembling.
    #[serde(default)]
    pub delimiters: DelimiterPolicy,

    /// Seed for the synonym sampler. `None` draws from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Document read when the prompt receives the sentinel.
    #[serde(default = "default_input_file")]
    pub input_file: String,

    /// Prompt answer that reads the input file instead of literal text.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

fn default_input_file() -> String {
    "input.txt".to_string()
}

fn default_sentinel() -> String {
    "file".to_string()
}

impl Default for RewordConfig {
    fn default() -> Self {
        Self {
            lexicon: None,
            delimiters: DelimiterPolicy::default(),
            seed: None,
            input_file: default_input_file(),
            sentinel: default_sentinel(),
        }
    }
}

impl RewordConfig {
    /// Load and validate a configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RewordError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json_str(&content)?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RewordConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.sentinel.trim().is_empty() {
            return Err(RewordError::config("sentinel must not be empty"));
        }
        if self.input_file.trim().is_empty() {
            return Err(RewordError::config("input_file must not be empty"));
        }
        Ok(())
    }

    /// Whether a prompt answer is the sentinel. Case-insensitive.
    pub fn is_sentinel(&self, answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case(self.sentinel.trim())
    }
}
