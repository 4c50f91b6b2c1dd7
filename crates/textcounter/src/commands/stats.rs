//! Stats command: aggregate statistics and vocabulary richness.

use std::collections::BTreeMap;

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use textcounter_core::{RichnessReport, TextAnalyzer, TextStatistics};

use super::{InputArgs, print_json, read_input};

/// Entries shown per frequency table in text output.
const PREVIEW_ENTRIES: usize = 5;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Include word and sentence length distributions
    #[arg(long)]
    pub distributions: bool,
}

#[derive(Debug, Serialize)]
struct StatsOutput<'a> {
    statistics: &'a TextStatistics,
    vocabulary_richness: RichnessReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    word_length_distribution: Option<BTreeMap<usize, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentence_length_distribution: Option<BTreeMap<usize, usize>>,
}

/// Print statistics and vocabulary richness for the input.
#[instrument(name = "cmd_stats", skip_all, fields(input = %args.input.label()))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(distributions = args.distributions, "executing stats command");

    let analyzer = TextAnalyzer::new(read_input(&args.input, max_input_bytes)?);
    let output = StatsOutput {
        statistics: analyzer.statistics(),
        vocabulary_richness: analyzer.vocabulary_richness(),
        word_length_distribution: args
            .distributions
            .then(|| analyzer.word_length_distribution()),
        sentence_length_distribution: args
            .distributions
            .then(|| analyzer.sentence_length_distribution()),
    };

    if global_json {
        return print_json(&output);
    }
    print_output(&output);
    Ok(())
}

fn print_output(output: &StatsOutput<'_>) {
    let stats = output.statistics;
    let richness = &output.vocabulary_richness;

    println!("{}", "Statistics".bold().underline());
    println!("{:>22}: {}", "Characters".dimmed(), stats.char_count);
    println!("{:>22}: {}", "Words".dimmed(), stats.word_count);
    println!("{:>22}: {}", "Unique words".dimmed(), stats.unique_word_count);
    println!("{:>22}: {}", "Sentences".dimmed(), stats.sentence_count);
    println!("{:>22}: {}", "Paragraphs".dimmed(), stats.paragraph_count);
    println!("{:>22}: {:.2}", "Avg word length".dimmed(), stats.avg_word_length);
    println!(
        "{:>22}: {:.2}",
        "Avg sentence length".dimmed(),
        stats.avg_sentence_length
    );

    println!();
    println!("{}", "Vocabulary".bold().underline());
    println!("{:>22}: {:.4}", "Type-token ratio".dimmed(), richness.ttr);
    println!(
        "{:>22}: {} ({:.4})",
        "Hapax legomena".dimmed(),
        richness.hapax_legomena,
        richness.hapax_ratio
    );
    println!("{:>22}: {:.2}", "Yule's K".dimmed(), richness.yules_k);

    println!();
    println!("{}", "Most common".bold().underline());
    let words = stats.word_frequency.top(PREVIEW_ENTRIES);
    let chars = stats.char_frequency.top(PREVIEW_ENTRIES);
    println!("{:>22}: {}", "Words".dimmed(), join_entries(words).cyan());
    println!("{:>22}: {}", "Characters".dimmed(), join_entries(chars).cyan());

    for (label, distribution) in [
        ("Word lengths", &output.word_length_distribution),
        ("Sentence lengths", &output.sentence_length_distribution),
    ] {
        if let Some(distribution) = distribution {
            let line = distribution
                .iter()
                .map(|(len, count)| format!("{len}:{count}"))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{:>22}: {}", label.dimmed(), line);
        }
    }
}

fn join_entries(entries: &[(String, usize)]) -> String {
    entries
        .iter()
        .map(|(item, count)| format!("{item} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}
