//! Character, word, line, sentence, and paragraph counts.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::filters::{CharFilter, WordFilter};
use crate::frequency::FrequencyTable;
use crate::text;

/// Result of a single count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CountReport {
    /// The count itself.
    pub total: usize,
    /// Occurrences per character or word (character and word counts only).
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub breakdown: BTreeMap<String, usize>,
    /// Size of each line, sentence, or paragraph in text order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub lengths: Vec<usize>,
    /// Length of the unfiltered text in characters.
    pub text_length: usize,
    /// Options that shaped the count.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options_applied: Vec<String>,
}

/// Quick overview of the basic counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    /// All characters.
    pub characters: usize,
    /// Characters other than the space character.
    pub characters_no_spaces: usize,
    /// Words.
    pub words: usize,
    /// Lines.
    pub lines: usize,
    /// Sentences.
    pub sentences: usize,
    /// Paragraphs.
    pub paragraphs: usize,
}

/// Per-character occurrence table under `filter`.
pub fn char_table(text: &str, filter: &CharFilter) -> FrequencyTable {
    let folded;
    let source = if filter.case_sensitive {
        text
    } else {
        folded = text.to_lowercase();
        folded.as_str()
    };
    source
        .chars()
        .filter(|&c| filter.accepts(c))
        .map(String::from)
        .collect()
}

/// Count characters.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn char_count(text: &str, filter: &CharFilter) -> CountReport {
    let table = char_table(text, filter);
    CountReport {
        total: table.total(),
        breakdown: table.to_map(),
        lengths: Vec::new(),
        text_length: text.chars().count(),
        options_applied: filter.options_applied(),
    }
}

/// Count words. With `unique_only` the total is the number of distinct words.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn word_count(text: &str, filter: &WordFilter) -> CountReport {
    let table: FrequencyTable = filter.tokens(text).into_iter().collect();
    let total = if filter.unique_only {
        table.unique()
    } else {
        table.total()
    };
    CountReport {
        total,
        breakdown: table.to_map(),
        lengths: Vec::new(),
        text_length: text.chars().count(),
        options_applied: filter.options_applied(),
    }
}

/// Count lines.
///
/// `ignore_whitespace_only` drops blank and whitespace-only lines and takes
/// precedence over `ignore_empty`, which drops only truly empty lines.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn line_count(text: &str, ignore_empty: bool, ignore_whitespace_only: bool) -> CountReport {
    let mut options_applied = Vec::new();
    let mut lines = text::split_lines(text);

    if ignore_whitespace_only {
        lines.retain(|line| !line.trim().is_empty());
        options_applied.push("ignore_whitespace_only".to_string());
    } else if ignore_empty {
        lines.retain(|line| !line.is_empty());
        options_applied.push("ignore_empty".to_string());
    }

    CountReport {
        total: lines.len(),
        breakdown: BTreeMap::new(),
        lengths: lines.iter().map(|line| line.chars().count()).collect(),
        text_length: text.chars().count(),
        options_applied,
    }
}

/// Count sentences; `lengths` holds the word count of each.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn sentence_count(text: &str) -> CountReport {
    segment_report(text, &text::split_sentences(text))
}

/// Count paragraphs; `lengths` holds the word count of each.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn paragraph_count(text: &str) -> CountReport {
    segment_report(text, &text::split_paragraphs(text))
}

fn segment_report(text: &str, segments: &[&str]) -> CountReport {
    CountReport {
        total: segments.len(),
        breakdown: BTreeMap::new(),
        lengths: segments.iter().map(|s| text::count_tokens(s)).collect(),
        text_length: text.chars().count(),
        options_applied: Vec::new(),
    }
}

/// All basic counts with default options.
pub fn summary(text: &str) -> Summary {
    let no_spaces = CharFilter {
        ignore_spaces: true,
        ..CharFilter::default()
    };
    Summary {
        characters: char_count(text, &CharFilter::default()).total,
        characters_no_spaces: char_count(text, &no_spaces).total,
        words: word_count(text, &WordFilter::default()).total,
        lines: line_count(text, false, false).total,
        sentences: sentence_count(text).total,
        paragraphs: paragraph_count(text).total,
    }
}
