//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use textcounter_core::config::Config;
use textcounter_core::{FrequencyReport, text};

pub mod compare;
pub mod count;
pub mod extract;
pub mod frequency;
pub mod info;
pub mod ngrams;
pub mod readability;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;

/// Where a command reads its text from: a file, `--text`, or stdin.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// File to analyze (reads stdin when neither FILE nor --text is given)
    pub file: Option<Utf8PathBuf>,

    /// Analyze this text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,
}

impl InputArgs {
    /// Short description of the input for logs and messages.
    pub fn label(&self) -> &str {
        match (&self.file, &self.text) {
            (Some(path), _) => path.as_str(),
            (None, Some(_)) => "<text>",
            (None, None) => "<stdin>",
        }
    }
}

/// Case handling for commands whose default comes from the configuration.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct CaseArgs {
    /// Treat `Word` and `word` as different entries
    #[arg(long)]
    pub case_sensitive: bool,

    /// Fold case even when the configuration sets `case_sensitive`
    #[arg(long, conflicts_with = "case_sensitive")]
    pub case_insensitive: bool,
}

impl CaseArgs {
    /// Whether to keep case, after applying either flag over the configuration.
    pub fn resolve(&self, config: &Config) -> bool {
        if self.case_insensitive {
            false
        } else {
            self.case_sensitive || config.case_sensitive
        }
    }
}

/// Read the command's input and validate its size against the limit.
pub fn read_input(input: &InputArgs, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = match (&input.file, &input.text) {
        (Some(path), _) => read_input_file(path, max_bytes)?,
        (None, Some(text)) => {
            check_size(input.label(), text.len(), max_bytes)?;
            text.clone()
        }
        (None, None) => read_stdin(max_bytes)?,
    };

    if content.is_empty() {
        tracing::warn!(input = input.label(), "input is empty");
    }
    Ok(content)
}

/// Read a file as UTF-8 text, checking its size before reading it.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    check_size(path.as_str(), usize::try_from(metadata.len()).unwrap_or(usize::MAX), max_bytes)?;

    let bytes = std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let content = text::decode(&bytes).with_context(|| format!("{path} is not a text file"))?;
    Ok(content.to_string())
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), "<stdin>", max_bytes)
}

/// Read at most one byte past the limit, which is enough to reject oversized input.
fn read_limited(reader: impl Read, label: &str, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    reader
        .take(read_cap(max_bytes))
        .read_to_end(&mut bytes)
        .with_context(|| format!("failed to read {label}"))?;

    check_size(label, bytes.len(), max_bytes)?;
    let content = text::decode(&bytes).with_context(|| format!("{label} is not text"))?;
    Ok(content.to_string())
}

fn read_cap(max_bytes: Option<usize>) -> u64 {
    max_bytes.map_or(u64::MAX, |max| {
        u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1)
    })
}

fn check_size(label: &str, size: usize, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max
    {
        anyhow::bail!("input too large: {label} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}

/// Pretty-print any result as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the ordered view of a frequency report as an aligned table.
pub fn print_frequency(report: &FrequencyReport, heading: &str) {
    println!(
        "{} ({} total, {} unique)",
        heading.bold(),
        report.total_items,
        report.unique_items
    );
    if report.is_empty() {
        println!("{}", "(nothing counted)".dimmed());
        return;
    }

    let width = report
        .most_common
        .iter()
        .map(|(item, _)| display_item(item).chars().count())
        .max()
        .unwrap_or(0);
    for (item, count) in &report.most_common {
        let pct = report.percentages.get(item).copied().unwrap_or(0.0);
        println!(
            "  {:<width$}  {:>6}  {}",
            display_item(item).cyan(),
            count,
            format!("{pct:.2}%").dimmed(),
        );
    }
}

/// Make whitespace items visible in text output.
fn display_item(item: &str) -> String {
    match item {
        " " => "' '".to_string(),
        "\n" => "\\n".to_string(),
        "\t" => "\\t".to_string(),
        "\r" => "\\r".to_string(),
        other => other.to_string(),
    }
}
