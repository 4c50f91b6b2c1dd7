//! End-to-end checks through the public API.

use textcounter_core::{
    CharFilter, CharFrequencyOptions, Rating, TextAnalyzer, WordFilter, WordFrequencyOptions,
    counter,
};

#[test]
fn counts_hello_world() {
    let text = "Hello, World!";
    assert_eq!(counter::char_count(text, &CharFilter::default()).total, 13);
    let no_spaces = CharFilter {
        ignore_spaces: true,
        ..CharFilter::default()
    };
    assert_eq!(counter::char_count(text, &no_spaces).total, 12);
    assert_eq!(counter::word_count(text, &WordFilter::default()).total, 2);
}

#[test]
fn most_common_word_comes_first() {
    let analyzer = TextAnalyzer::new("hello world hello");
    let freq = analyzer.word_frequency(&WordFrequencyOptions::default());
    assert_eq!(freq.get("hello"), 2);
    assert_eq!(freq.most_common[0], ("hello".to_string(), 2));
    assert_eq!(freq.percentages["hello"], 66.67);
}

#[test]
fn exact_ties_round_half_to_even() {
    let analyzer = TextAnalyzer::new(format!("x {}", "y ".repeat(31)));
    let richness = analyzer.vocabulary_richness();
    assert_eq!(richness.hapax_ratio, 0.0312);
    assert_eq!(richness.yules_k, 9082.0312);
    let chars = analyzer.char_frequency(&CharFrequencyOptions::default());
    assert_eq!(chars.percentages["x"], 3.12);
    assert_eq!(chars.percentages["y"], 96.88);
}

#[test]
fn two_sentences_get_a_real_rating() {
    let text = "The cat sat on the mat. The dog ran fast.";
    assert_eq!(counter::sentence_count(text).total, 2);
    let rating = TextAnalyzer::new(text).readability().rating;
    assert_ne!(rating, Rating::NotApplicable);
}

#[test]
fn empty_text_degrades_to_zero() {
    let analyzer = TextAnalyzer::new("");
    let readability = analyzer.readability();
    assert_eq!(readability.flesch_reading_ease, 0.0);
    assert_eq!(readability.rating, Rating::NotApplicable);
    assert_eq!(analyzer.vocabulary_richness().ttr, 0.0);
    assert_eq!(analyzer.ngrams(2, false, None).unwrap().total_items, 0);
}

#[test]
fn bigrams_of_a_short_phrase() {
    let report = TextAnalyzer::new("the quick brown fox")
        .ngrams(2, false, None)
        .unwrap();
    for gram in ["the quick", "quick brown", "brown fox"] {
        assert_eq!(report.get(gram), 1, "{gram}");
    }
    assert_eq!(report.total_items, 3);
}

#[test]
fn emails_in_reading_order() {
    let analyzer = TextAnalyzer::new("Contact test@example.com or info@site.org");
    assert_eq!(analyzer.extract_emails(), vec!["test@example.com", "info@site.org"]);
}

#[test]
fn reports_serialize_with_stable_keys() {
    let analyzer = TextAnalyzer::new("b a b");
    let json = serde_json::to_value(analyzer.word_frequency(&WordFrequencyOptions::default()))
        .unwrap();
    assert_eq!(json["frequencies"]["b"], 2);
    assert_eq!(json["most_common"][0][0], "b");
    assert_eq!(json["total_items"], 3);

    let readability = serde_json::to_value(analyzer.readability()).unwrap();
    assert!(readability["rating"].is_string());
    assert!(readability["target_audience"].is_string());
}
