//! Compare command: side-by-side metrics for two files.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textcounter_core::{Comparison, MetricComparison, TextAnalyzer};

use super::{print_json, read_input_file};

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First file
    pub file_a: Utf8PathBuf,

    /// Second file
    pub file_b: Utf8PathBuf,
}

/// Compare two files. Differences are second minus first.
#[instrument(name = "cmd_compare", skip_all, fields(file_a = %args.file_a, file_b = %args.file_b))]
pub fn cmd_compare(
    args: CompareArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing compare command");

    let a = TextAnalyzer::new(read_input_file(&args.file_a, max_input_bytes)?);
    let b = TextAnalyzer::new(read_input_file(&args.file_b, max_input_bytes)?);
    let comparison = a.compare(&b);

    if global_json {
        return print_json(&comparison);
    }
    print_comparison(&args, &comparison);
    Ok(())
}

fn print_comparison(args: &CompareArgs, comparison: &Comparison) {
    println!(
        "{:<20} {:>12} {:>12} {:>12}",
        "",
        args.file_a.file_name().unwrap_or(args.file_a.as_str()).bold(),
        args.file_b.file_name().unwrap_or(args.file_b.as_str()).bold(),
        "difference".bold()
    );
    print_row("Words", &comparison.word_count, 0);
    print_row("Characters", &comparison.char_count, 0);
    print_row("Avg word length", &comparison.avg_word_length, 2);
    print_row("Vocabulary richness", &comparison.vocabulary_richness, 4);
}

fn print_row(label: &str, metric: &MetricComparison, precision: usize) {
    let difference = format!("{:+.precision$}", metric.difference);
    let difference = if metric.difference > 0.0 {
        difference.green().to_string()
    } else if metric.difference < 0.0 {
        difference.red().to_string()
    } else {
        difference.dimmed().to_string()
    };
    println!(
        "{:<20} {:>12.precision$} {:>12.precision$} {:>12}",
        label.dimmed(),
        metric.text1,
        metric.text2,
        difference
    );
}
