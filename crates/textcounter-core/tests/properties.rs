//! Invariants that hold for any input text.

use proptest::prelude::*;
use textcounter_core::frequency::{self, FrequencyTable};
use textcounter_core::{
    CharFilter, CharFrequencyOptions, Rating, TextAnalyzer, WordFrequencyOptions, counter, text,
};

fn prose() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?'\\n-]{0,300}"
}

fn char_filter() -> impl Strategy<Value = CharFilter> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(case_sensitive, ignore_spaces, ignore_punctuation, ignore_digits)| CharFilter {
            case_sensitive,
            ignore_spaces,
            ignore_punctuation,
            ignore_digits,
            ..CharFilter::default()
        },
    )
}

proptest! {
    #[test]
    fn char_frequency_sums_to_char_count(content in "\\PC{0,300}", filter in char_filter()) {
        let report = counter::char_count(&content, &filter);
        let summed: usize = report.breakdown.values().sum();
        prop_assert_eq!(summed, report.total);
        prop_assert_eq!(counter::char_table(&content, &filter).total(), report.total);
    }

    #[test]
    fn analyzer_char_frequency_matches_counter(content in prose()) {
        let analyzer = TextAnalyzer::new(content.clone());
        let freq = analyzer.char_frequency(&CharFrequencyOptions::default());
        let filter = CharFilter {
            case_sensitive: false,
            ignore_spaces: true,
            ..CharFilter::default()
        };
        prop_assert_eq!(freq.frequencies.values().sum::<usize>(), counter::char_count(&content, &filter).total);
    }

    #[test]
    fn analyses_are_idempotent(content in prose()) {
        let analyzer = TextAnalyzer::new(content);
        prop_assert_eq!(analyzer.readability(), analyzer.readability());
        prop_assert_eq!(analyzer.vocabulary_richness(), analyzer.vocabulary_richness());
        prop_assert_eq!(
            analyzer.word_frequency(&WordFrequencyOptions::default()),
            analyzer.word_frequency(&WordFrequencyOptions::default())
        );
        prop_assert_eq!(analyzer.statistics().clone(), analyzer.compute_statistics());
    }

    #[test]
    fn sorted_output_is_frequency_ordered(tokens in prop::collection::vec("[a-eA-E]{1,3}", 0..200)) {
        let table: FrequencyTable = tokens.into_iter().collect();
        let sorted = table.sorted();
        prop_assert_eq!(sorted.len(), table.unique());
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.1 >= b.1);
            if a.1 == b.1 {
                prop_assert!(a.0 <= b.0);
            }
        }
    }

    #[test]
    fn merge_sort_matches_library_sort(entries in prop::collection::vec(("[a-z]{1,4}", 0usize..20), 0..100)) {
        let mut expected = entries.clone();
        expected.sort_by(frequency::frequency_order);
        prop_assert_eq!(frequency::sort_by_frequency(entries), expected);
    }

    #[test]
    fn ngram_total_matches_window_count(content in prose(), n in 1usize..5) {
        let words = text::words(&content, false);
        let table = frequency::ngrams(&words, n).unwrap();
        prop_assert_eq!(table.total(), words.len().saturating_sub(n - 1));
    }

    #[test]
    fn readability_stays_in_bounds(content in prose()) {
        let report = textcounter_core::readability::readability(&content);
        prop_assert!(report.flesch_kincaid_grade >= 0.0);
        let labels = [
            "Very Easy", "Easy", "Fairly Easy", "Standard",
            "Fairly Difficult", "Difficult", "Very Difficult", "N/A",
        ];
        prop_assert!(labels.contains(&report.rating.label()));
        prop_assert_eq!(report.rating == Rating::NotApplicable, report.words == 0);
    }

    #[test]
    fn richness_ratios_are_fractions(content in prose()) {
        let report = textcounter_core::richness::vocabulary_richness(&content);
        prop_assert!((0.0..=1.0).contains(&report.ttr));
        prop_assert!((0.0..=1.0).contains(&report.hapax_ratio));
        prop_assert!(report.yules_k >= 0.0);
        if report.total_words > 0 {
            prop_assert!(report.ttr > 0.0);
        }
    }

    #[test]
    fn words_never_empty_or_padded(content in "\\PC{0,200}") {
        for word in text::words(&content, true) {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.contains(char::is_whitespace));
        }
    }

    #[test]
    fn sentences_are_trimmed_and_non_empty(content in prose()) {
        for sentence in text::split_sentences(&content) {
            prop_assert!(!sentence.is_empty());
            prop_assert_eq!(sentence, sentence.trim());
        }
    }
}
