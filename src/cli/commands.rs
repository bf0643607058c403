//! Command implementations for the Reword CLI.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::info;

use crate::cli::args::RewordArgs;
use crate::cli::output::{ParaphraseResult, output_result};
use crate::config::RewordConfig;
use crate::error::{Result, RewordError};
use crate::paraphraser::ParaphraserBuilder;

/// Execute the CLI: build the pipeline, read the document, paraphrase it
/// and print both texts.
pub fn execute_command(args: RewordArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let lexicon = config.lexicon.clone().ok_or_else(|| {
        RewordError::config(
            "no lexicon given; use --wordnet, --lexicon, REWORD_WORDNET or a config file",
        )
    })?;
    let paraphraser = ParaphraserBuilder::from_config(&config)?.build()?;

    let original = read_document(&args, &config)?;
    let tokens = paraphraser.transform(&original)?;
    info!("paraphrasing {} tokens", tokens.len());
    let paraphrase = paraphraser.assemble(Box::new(tokens.clone().into_iter()));

    output_result(
        &ParaphraseResult {
            original,
            paraphrase,
            lexicon: lexicon.to_string(),
            seed: config.seed,
            tokens,
        },
        &args,
    )
}

/// The document named by the command line, or the answer to the prompt.
fn read_document(args: &RewordArgs, config: &RewordConfig) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        return read_file(path);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt_out = io::stderr();
    prompt(&mut input, &mut prompt_out, config)
}

/// Ask for text on `input`. The configured sentinel reads the input file
/// instead.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &RewordConfig,
) -> Result<String> {
    write!(
        out,
        "Enter text to paraphrase, or '{}' to read {}: ",
        config.sentinel, config.input_file
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if config.is_sentinel(&answer) {
        read_file(&config.input_file)
    } else {
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    info!("reading {}", path.display());
    fs::read_to_string(path).map_err(|e| {
        RewordError::invalid_argument(format!("cannot read {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_prompt_literal_text() {
        let mut input = Cursor::new("The cat sat.\n");
        let mut out = Vec::new();
        let text = prompt(&mut input, &mut out, &RewordConfig::default()).unwrap();
        assert_eq!(text, "The cat sat.");
        assert!(String::from_utf8(out).unwrap().contains("'file'"));
    }

    #[test]
    fn test_prompt_sentinel_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Once upon a time.").unwrap();
        let config = RewordConfig {
            input_file: file.path().to_string_lossy().to_string(),
            ..RewordConfig::default()
        };

        let mut input = Cursor::new("File\r\n");
        let text = prompt(&mut input, &mut Vec::new(), &config).unwrap();
        assert_eq!(text, "Once upon a time.");
    }

    #[test]
    fn test_prompt_missing_file() {
        let config = RewordConfig {
            input_file: "/nonexistent/input.txt".to_string(),
            ..RewordConfig::default()
        };
        let mut input = Cursor::new("file\n");
        let err = prompt(&mut input, &mut Vec::new(), &config).unwrap_err();
        assert!(matches!(err, RewordError::InvalidArgument(_)));
    }
}
