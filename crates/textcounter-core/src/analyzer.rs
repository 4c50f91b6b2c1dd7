//! A text plus every analysis that can be run over it.
//!
//! [`TextAnalyzer`] owns its text and caches one expensive result, the
//! [`TextStatistics`]. Replacing the text through [`TextAnalyzer::set_text`]
//! clears that cache. Every other operation recomputes from the current text.

use std::cell::OnceCell;
use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counter;
use crate::error::AnalysisResult;
use crate::filters::{CharFilter, WordFilter};
use crate::frequency::{self, FrequencyReport, FrequencyTable};
use crate::patterns::{self, PatternMatch};
use crate::readability::{self, ReadabilityReport};
use crate::richness::{self, RichnessReport};
use crate::rounding::{round2, round4};
use crate::text;

/// Options for [`TextAnalyzer::char_frequency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CharFrequencyOptions {
    /// Count `A` and `a` separately.
    pub case_sensitive: bool,
    /// Skip the space character.
    pub ignore_spaces: bool,
    /// Skip ASCII punctuation.
    pub ignore_punctuation: bool,
    /// Keep only this many most common entries. `None` or 0 keeps all.
    pub top_n: Option<usize>,
}

impl Default for CharFrequencyOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            ignore_spaces: true,
            ignore_punctuation: false,
            top_n: None,
        }
    }
}

/// Options for [`TextAnalyzer::word_frequency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WordFrequencyOptions {
    /// Count `Word` and `word` separately.
    pub case_sensitive: bool,
    /// Minimum word length in characters.
    pub min_length: usize,
    /// Words to leave out, compared after case folding.
    pub exclude_words: Vec<String>,
    /// Keep only this many most common entries. `None` or 0 keeps all.
    pub top_n: Option<usize>,
}

impl Default for WordFrequencyOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            min_length: 1,
            exclude_words: Vec::new(),
            top_n: None,
        }
    }
}

/// Aggregate statistics for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextStatistics {
    /// All characters.
    pub char_count: usize,
    /// Words.
    pub word_count: usize,
    /// Distinct words, case-sensitive.
    pub unique_word_count: usize,
    /// Sentences.
    pub sentence_count: usize,
    /// Paragraphs.
    pub paragraph_count: usize,
    /// Mean word length in characters (2 places).
    pub avg_word_length: f64,
    /// Mean words per sentence (2 places).
    pub avg_sentence_length: f64,
    /// Unique words over total words (4 places).
    pub vocabulary_richness: f64,
    /// Character frequency with default options.
    pub char_frequency: FrequencyReport,
    /// Word frequency with default options.
    pub word_frequency: FrequencyReport,
}

/// One metric measured on two texts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricComparison {
    /// Value for the first text.
    pub text1: f64,
    /// Value for the second text.
    pub text2: f64,
    /// `text2 - text1`.
    pub difference: f64,
}

/// Side-by-side metrics for two texts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Comparison {
    /// Word counts.
    pub word_count: MetricComparison,
    /// Character counts.
    pub char_count: MetricComparison,
    /// Mean word length; difference rounded to 2 places.
    pub avg_word_length: MetricComparison,
    /// Type-token ratio; difference rounded to 4 places.
    pub vocabulary_richness: MetricComparison,
}

/// Text analysis over an owned text.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    text: String,
    statistics: OnceCell<TextStatistics>,
}

impl TextAnalyzer {
    /// Analyzer over `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            statistics: OnceCell::new(),
        }
    }

    /// Analyzer over raw bytes, which must be UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NotText`](crate::AnalysisError::NotText) for
    /// anything that is not valid UTF-8.
    pub fn from_utf8(bytes: &[u8]) -> AnalysisResult<Self> {
        Ok(Self::new(text::decode(bytes)?))
    }

    /// The analyzed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and drop cached results.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.statistics.take();
    }

    /// Character frequency.
    pub fn char_frequency(&self, options: &CharFrequencyOptions) -> FrequencyReport {
        let filter = CharFilter {
            case_sensitive: options.case_sensitive,
            ignore_spaces: options.ignore_spaces,
            ignore_punctuation: options.ignore_punctuation,
            ..CharFilter::default()
        };
        counter::char_table(&self.text, &filter).report(options.top_n)
    }

    /// Word frequency.
    pub fn word_frequency(&self, options: &WordFrequencyOptions) -> FrequencyReport {
        let filter = WordFilter {
            case_sensitive: options.case_sensitive,
            min_length: options.min_length,
            exclude_words: options.exclude_words.clone(),
            ..WordFilter::default()
        };
        let table: FrequencyTable = filter.tokens(&self.text).into_iter().collect();
        table.report(options.top_n)
    }

    /// Frequency of every run of `n` consecutive words.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidNgramSize`](crate::AnalysisError::InvalidNgramSize)
    /// when `n` is 0.
    #[tracing::instrument(skip(self), fields(text_len = self.text.len()))]
    pub fn ngrams(
        &self,
        n: usize,
        case_sensitive: bool,
        top_n: Option<usize>,
    ) -> AnalysisResult<FrequencyReport> {
        let words = text::words(&self.text, case_sensitive);
        Ok(frequency::ngrams(&words, n)?.report(top_n))
    }

    /// Flesch readability scores.
    pub fn readability(&self) -> ReadabilityReport {
        readability::readability(&self.text)
    }

    /// Type-token ratio, hapax ratio, and Yule's K.
    pub fn vocabulary_richness(&self) -> RichnessReport {
        richness::vocabulary_richness(&self.text)
    }

    /// Word length in characters → number of words of that length.
    pub fn word_length_distribution(&self) -> BTreeMap<usize, usize> {
        distribution(text::words(&self.text, false).iter().map(|w| w.chars().count()))
    }

    /// Sentence length in words → number of sentences of that length.
    pub fn sentence_length_distribution(&self) -> BTreeMap<usize, usize> {
        distribution(
            text::split_sentences(&self.text)
                .into_iter()
                .map(text::count_tokens)
                .filter(|&len| len > 0),
        )
    }

    /// Aggregate statistics, computed once and cached until the text changes.
    pub fn statistics(&self) -> &TextStatistics {
        self.statistics.get_or_init(|| self.compute_statistics())
    }

    /// Aggregate statistics, always recomputed.
    #[tracing::instrument(skip(self), fields(text_len = self.text.len()))]
    pub fn compute_statistics(&self) -> TextStatistics {
        let chars = counter::char_count(&self.text, &CharFilter::default());
        let words = counter::word_count(&self.text, &WordFilter::default());
        let sentences = counter::sentence_count(&self.text).total;
        let paragraphs = counter::paragraph_count(&self.text).total;

        let folded = text::words(&self.text, false);
        let avg_word_length = if folded.is_empty() {
            0.0
        } else {
            let total: usize = folded.iter().map(|w| w.chars().count()).sum();
            total as f64 / folded.len() as f64
        };

        let avg_sentence_length = if sentences > 0 {
            words.total as f64 / sentences as f64
        } else {
            0.0
        };

        let unique_word_count = words.breakdown.len();
        let vocabulary_richness = if words.total > 0 {
            unique_word_count as f64 / words.total as f64
        } else {
            0.0
        };

        TextStatistics {
            char_count: chars.total,
            word_count: words.total,
            unique_word_count,
            sentence_count: sentences,
            paragraph_count: paragraphs,
            avg_word_length: round2(avg_word_length),
            avg_sentence_length: round2(avg_sentence_length),
            vocabulary_richness: round4(vocabulary_richness),
            char_frequency: self.char_frequency(&CharFrequencyOptions::default()),
            word_frequency: self.word_frequency(&WordFrequencyOptions::default()),
        }
    }

    /// Compare this text (`text1`) with `other` (`text2`).
    pub fn compare(&self, other: &Self) -> Comparison {
        let a = self.compute_statistics();
        let b = other.compute_statistics();
        Comparison {
            word_count: MetricComparison::counts(a.word_count, b.word_count),
            char_count: MetricComparison::counts(a.char_count, b.char_count),
            avg_word_length: MetricComparison::rounded(a.avg_word_length, b.avg_word_length, round2),
            vocabulary_richness: MetricComparison::rounded(
                a.vocabulary_richness,
                b.vocabulary_richness,
                round4,
            ),
        }
    }

    /// Matches of a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Pattern`](crate::AnalysisError::Pattern) when
    /// the pattern does not compile.
    pub fn find_patterns(
        &self,
        pattern: &str,
        case_sensitive: bool,
    ) -> AnalysisResult<Vec<PatternMatch>> {
        patterns::find(pattern, &self.text, case_sensitive)
    }

    /// Email addresses.
    pub fn extract_emails(&self) -> Vec<String> {
        patterns::extract_emails(&self.text)
    }

    /// URLs, trailing punctuation removed.
    pub fn extract_urls(&self) -> Vec<String> {
        patterns::extract_urls(&self.text)
    }

    /// Numeric literals.
    pub fn extract_numbers(&self) -> Vec<String> {
        patterns::extract_numbers(&self.text)
    }
}

impl MetricComparison {
    fn counts(a: usize, b: usize) -> Self {
        let (text1, text2) = (a as f64, b as f64);
        Self {
            text1,
            text2,
            difference: text2 - text1,
        }
    }

    fn rounded(text1: f64, text2: f64, round: fn(f64) -> f64) -> Self {
        Self {
            text1,
            text2,
            difference: round(text2 - text1),
        }
    }
}

fn distribution(lengths: impl Iterator<Item = usize>) -> BTreeMap<usize, usize> {
    let mut dist = BTreeMap::new();
    for len in lengths {
        *dist.entry(len).or_insert(0) += 1;
    }
    dist
}
