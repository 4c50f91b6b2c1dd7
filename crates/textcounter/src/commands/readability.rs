//! Readability command: Flesch Reading Ease and Flesch-Kincaid Grade.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textcounter_core::{ReadabilityReport, readability};

use super::{InputArgs, print_json, read_input};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReadabilityArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Score the readability of the input.
#[instrument(name = "cmd_readability", skip_all, fields(input = %args.input.label()))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing readability command");

    let text = read_input(&args.input, max_input_bytes)?;
    let report = readability::readability(&text);

    if global_json {
        return print_json(&report);
    }
    print_report(&report);
    Ok(())
}

fn print_report(report: &ReadabilityReport) {
    let rating = report.rating.label();
    let rating = if report.is_easy {
        rating.green().to_string()
    } else {
        rating.yellow().to_string()
    };

    println!(
        "{}: {:.2} ({})",
        "Flesch Reading Ease".bold(),
        report.flesch_reading_ease,
        rating
    );
    println!(
        "{}: {:.2} ({})",
        "Flesch-Kincaid Grade".bold(),
        report.flesch_kincaid_grade,
        report.target_audience.label().cyan()
    );
    println!(
        "{}",
        format!(
            "{} words, {} sentences, {} syllables; {:.2} words/sentence, {:.2} syllables/word",
            report.words,
            report.sentences,
            report.syllables,
            report.avg_sentence_length,
            report.avg_syllables_per_word,
        )
        .dimmed()
    );
}
