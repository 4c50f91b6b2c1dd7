//! Vocabulary richness: type-token ratio, hapax ratio, and Yule's K.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;
use crate::rounding::round4;
use crate::text;

/// Vocabulary richness of a text. Ratios and K are rounded to 4 places.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RichnessReport {
    /// Unique words over total words.
    pub ttr: f64,
    /// Words occurring exactly once over total words.
    pub hapax_ratio: f64,
    /// Yule's K. Lower means a more diverse vocabulary.
    pub yules_k: f64,
    /// Total words (N).
    pub total_words: usize,
    /// Distinct words (V).
    pub unique_words: usize,
    /// Number of words occurring exactly once.
    pub hapax_legomena: usize,
    /// Occurrence count m → number of distinct words occurring m times.
    pub frequency_spectrum: BTreeMap<usize, usize>,
}

/// Richness of `text`, with words compared case-insensitively.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn vocabulary_richness(text: &str) -> RichnessReport {
    let table: FrequencyTable = text::words(text, false).into_iter().collect();
    from_table(&table)
}

/// Richness computed from an existing word-frequency table.
pub fn from_table(table: &FrequencyTable) -> RichnessReport {
    let total = table.total();
    if total == 0 {
        return RichnessReport::default();
    }

    let mut spectrum: BTreeMap<usize, usize> = BTreeMap::new();
    for (_, count) in table.iter() {
        *spectrum.entry(count).or_insert(0) += 1;
    }

    let unique = table.unique();
    let hapax = spectrum.get(&1).copied().unwrap_or(0);
    let n = total as f64;

    let yules_k = if total > 1 {
        let sum: usize = spectrum.iter().map(|(&m, &v)| m * m * v).sum();
        10_000.0 * (sum - total) as f64 / (n * n)
    } else {
        0.0
    };

    RichnessReport {
        ttr: round4(unique as f64 / n),
        hapax_ratio: round4(hapax as f64 / n),
        yules_k: round4(yules_k),
        total_words: total,
        unique_words: unique,
        hapax_legomena: hapax,
        frequency_spectrum: spectrum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_distinct_words() {
        let report = vocabulary_richness("one two three four");
        assert_eq!(report.ttr, 1.0);
        assert_eq!(report.hapax_ratio, 1.0);
        // sum m²·V_m = 4, so K = 10000 * (4 - 4) / 16
        assert_eq!(report.yules_k, 0.0);
    }

    #[test]
    fn repeated_words_lower_ttr() {
        let report = vocabulary_richness("The cat and the dog and the bird");
        // the×3, and×2, cat, dog, bird
        assert_eq!(report.total_words, 8);
        assert_eq!(report.unique_words, 5);
        assert_eq!(report.ttr, 0.625);
        assert_eq!(report.hapax_legomena, 3);
        assert_eq!(report.hapax_ratio, 0.375);
        // sum = 9 + 4 + 3 = 16; K = 10000 * 8 / 64
        assert_eq!(report.yules_k, 1250.0);
        assert_eq!(report.frequency_spectrum, BTreeMap::from([(1, 3), (2, 1), (3, 1)]));
    }

    #[test]
    fn case_is_folded() {
        let report = vocabulary_richness("Word word WORD");
        assert_eq!(report.unique_words, 1);
        assert_eq!(report.hapax_ratio, 0.0);
    }

    #[test]
    fn empty_text_is_all_zero() {
        let report = vocabulary_richness("");
        assert_eq!(report.ttr, 0.0);
        assert_eq!(report.hapax_ratio, 0.0);
        assert_eq!(report.yules_k, 0.0);
    }

    #[test]
    fn single_word_has_zero_k() {
        let report = vocabulary_richness("alone");
        assert_eq!(report.ttr, 1.0);
        assert_eq!(report.yules_k, 0.0);
    }

    #[test]
    fn ratios_round_to_four_places() {
        let report = vocabulary_richness("a a b");
        assert_eq!(report.ttr, 0.6667);
        assert_eq!(report.hapax_ratio, 0.3333);
    }

    #[test]
    fn exact_ties_round_to_even() {
        // 32 words, one hapax: 1/32 = 0.03125 and K = 10000 * 930 / 1024 = 9082.03125
        let text = format!("x {}", "y ".repeat(31));
        let report = vocabulary_richness(&text);
        assert_eq!(report.total_words, 32);
        assert_eq!(report.hapax_legomena, 1);
        assert_eq!(report.hapax_ratio, 0.0312);
        assert_eq!(report.yules_k, 9082.0312);
    }
}
