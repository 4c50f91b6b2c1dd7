//! Count command: characters, words, lines, sentences, and paragraphs.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use textcounter_core::{CharFilter, CountReport, WordFilter, counter};

use super::{InputArgs, print_json, read_input};

/// Arguments for the `count` subcommand.
#[derive(Args, Debug, Default)]
pub struct CountArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Count characters
    #[arg(long)]
    pub chars: bool,

    /// Count words
    #[arg(long)]
    pub words: bool,

    /// Count lines
    #[arg(long)]
    pub lines: bool,

    /// Count sentences
    #[arg(long)]
    pub sentences: bool,

    /// Count paragraphs
    #[arg(long)]
    pub paragraphs: bool,

    /// Leave spaces out of the character count
    #[arg(long)]
    pub no_spaces: bool,

    /// Leave punctuation out of the character count
    #[arg(long)]
    pub no_punctuation: bool,

    /// Leave digits out of the character count and numbers out of the word count
    #[arg(long)]
    pub no_digits: bool,

    /// Count distinct words only
    #[arg(long)]
    pub unique: bool,

    /// Ignore words shorter than N characters
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub min_length: usize,
}

impl CountArgs {
    /// No selection flag means every count.
    const fn all(&self) -> bool {
        !(self.chars || self.words || self.lines || self.sentences || self.paragraphs)
    }

    fn char_filter(&self) -> CharFilter {
        CharFilter {
            ignore_spaces: self.no_spaces,
            ignore_punctuation: self.no_punctuation,
            ignore_digits: self.no_digits,
            ..CharFilter::default()
        }
    }

    fn word_filter(&self) -> WordFilter {
        WordFilter {
            ignore_numbers: self.no_digits,
            min_length: self.min_length,
            unique_only: self.unique,
            ..WordFilter::default()
        }
    }
}

/// The counts that were asked for.
#[derive(Debug, Default, Serialize)]
struct CountOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    characters: Option<CountReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<CountReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<CountReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentences: Option<CountReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paragraphs: Option<CountReport>,
}

fn run_counts(text: &str, args: &CountArgs) -> CountOutput {
    let all = args.all();
    CountOutput {
        characters: (all || args.chars).then(|| counter::char_count(text, &args.char_filter())),
        words: (all || args.words).then(|| counter::word_count(text, &args.word_filter())),
        lines: (all || args.lines).then(|| counter::line_count(text, false, false)),
        sentences: (all || args.sentences).then(|| counter::sentence_count(text)),
        paragraphs: (all || args.paragraphs).then(|| counter::paragraph_count(text)),
    }
}

/// Count the input and print the selected totals.
#[instrument(name = "cmd_count", skip_all, fields(input = %args.input.label()))]
pub fn cmd_count(
    args: CountArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(all = args.all(), unique = args.unique, "executing count command");

    let text = read_input(&args.input, max_input_bytes)?;
    let output = run_counts(&text, &args);

    if global_json {
        return print_json(&output);
    }

    let rows = [
        ("Characters", &output.characters),
        (if args.unique { "Unique words" } else { "Words" }, &output.words),
        ("Lines", &output.lines),
        ("Sentences", &output.sentences),
        ("Paragraphs", &output.paragraphs),
    ];
    for (label, report) in rows {
        if let Some(report) = report {
            println!("{:>12}: {}", label.dimmed(), report.total.bold());
        }
    }
    if let Some(ref chars) = output.characters
        && !chars.options_applied.is_empty()
    {
        println!(
            "{:>12}: {}",
            "Options".dimmed(),
            chars.options_applied.join(", ")
        );
    }

    Ok(())
}
