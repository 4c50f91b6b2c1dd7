//! N-grams command: most common runs of consecutive words.

use anyhow::Context;
use clap::Args;
use tracing::{debug, instrument};

use textcounter_core::TextAnalyzer;
use textcounter_core::config::Config;

use super::{CaseArgs, InputArgs, print_frequency, print_json, read_input};

const DEFAULT_NGRAM_SIZE: usize = 2;

/// Arguments for the `ngrams` subcommand.
#[derive(Args, Debug, Default)]
pub struct NgramsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Words per n-gram (default: config `ngram_size`, else 2)
    #[arg(short, value_name = "N")]
    pub n: Option<usize>,

    /// Show only the N most common n-grams
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    #[command(flatten)]
    pub case: CaseArgs,
}

/// Print the most common n-grams.
#[instrument(name = "cmd_ngrams", skip_all, fields(input = %args.input.label()))]
pub fn cmd_ngrams(
    args: NgramsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let n = args.n.or(config.ngram_size).unwrap_or(DEFAULT_NGRAM_SIZE);
    debug!(n, top = ?args.top, "executing ngrams command");

    let text = read_input(&args.input, max_input_bytes)?;
    let report = TextAnalyzer::new(text)
        .ngrams(n, args.case.resolve(config), args.top.or(config.top_n))
        .with_context(|| format!("cannot build {n}-grams"))?;

    if global_json {
        return print_json(&report);
    }
    print_frequency(&report, &format!("{n}-grams"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str, n: Option<usize>) -> NgramsArgs {
        NgramsArgs {
            input: InputArgs {
                file: None,
                text: Some(text.to_string()),
            },
            n,
            ..NgramsArgs::default()
        }
    }

    #[test]
    fn default_size_succeeds() {
        assert!(cmd_ngrams(args("the cat sat", None), false, &Config::default(), None).is_ok());
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = cmd_ngrams(args("the cat sat", Some(0)), true, &Config::default(), None)
            .unwrap_err();
        assert!(err.to_string().contains("0-grams"));
    }

    #[test]
    fn config_size_is_used() {
        let config = Config {
            ngram_size: Some(0),
            ..Config::default()
        };
        assert!(cmd_ngrams(args("the cat sat", None), true, &config, None).is_err());
    }
}
