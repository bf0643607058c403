//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, RewordArgs};
use crate::error::Result;

/// Result structure for one paraphrased document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParaphraseResult {
    pub original: String,
    pub paraphrase: String,
    pub lexicon: String,
    pub seed: Option<u64>,
    pub tokens: Vec<Token>,
}

/// Output a paraphrase in the format selected on the command line.
pub fn output_result(result: &ParaphraseResult, args: &RewordArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, args)
}

/// Write a paraphrase to `out` in the selected format.
pub fn write_result<W: Write>(out: &mut W, result: &ParaphraseResult, args: &RewordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_human(out, result, args),
        OutputFormat::Json => write_json(out, result, args),
    }
}

/// Original text, a blank line, then the paraphrase.
fn write_human<W: Write>(out: &mut W, result: &ParaphraseResult, args: &RewordArgs) -> Result<()> {
    writeln!(out, "{}", result.original.trim_end())?;
    writeln!(out)?;
    writeln!(out, "{}", result.paraphrase)?;

    if args.verbosity() > 2 {
        writeln!(out)?;
        writeln!(out, "Lexicon: {}", result.lexicon)?;
        if let Some(seed) = result.seed {
            writeln!(out, "Seed: {seed}")?;
        }
        for token in &result.tokens {
            writeln!(out, "  {:>4}  {:<5} {}", token.position, token.tag, token.text)?;
        }
    }
    Ok(())
}

/// Output in JSON format.
fn write_json<W: Write>(out: &mut W, result: &ParaphraseResult, args: &RewordArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::analysis::tag::PosTag;

    fn result() -> ParaphraseResult {
        ParaphraseResult {
            original: "The cat sat.\n".to_string(),
            paraphrase: "The true cat sat.".to_string(),
            lexicon: "json:words.json".to_string(),
            seed: Some(3),
            tokens: vec![Token::new("the", PosTag::DT, 0)],
        }
    }

    fn render(argv: &[&str]) -> String {
        let args = RewordArgs::try_parse_from(argv.iter().copied()).unwrap();
        let mut buf = Vec::new();
        write_result(&mut buf, &result(), &args).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_output() {
        assert_eq!(render(&["reword"]), "The cat sat.\n\nThe true cat sat.\n");
    }

    #[test]
    fn test_human_output_debug_details() {
        let text = render(&["reword", "-vv"]);
        assert!(text.contains("Lexicon: json:words.json"));
        assert!(text.contains("Seed: 3"));
        assert!(text.contains("DT"));
    }

    #[test]
    fn test_json_output() {
        let text = render(&["reword", "-f", "json"]);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["paraphrase"], "The true cat sat.");
        assert_eq!(value["seed"], 3);
        assert_eq!(value["tokens"][0]["tag"], "DT");
    }
}
