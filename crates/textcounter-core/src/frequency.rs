//! Frequency tables, deterministic ordering, and n-grams.
//!
//! A [`FrequencyTable`] is built in one pass over its tokens and never
//! mutated afterwards. Ordered views go through [`sort_by_frequency`], which
//! defines the only ordering used anywhere in the crate: count descending,
//! then token ascending.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::rounding::round2;

/// A `(token, count)` pair.
pub type Entry = (String, usize);

/// Occurrence counts for a set of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Count of `token`, zero when absent.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Whether `token` occurred at least once.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Total number of counted occurrences.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    /// True when nothing was counted.
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(token, count)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// A new table without the given tokens.
    pub fn without(&self, excluded: &HashSet<String>) -> Self {
        let counts: HashMap<String, usize> = self
            .counts
            .iter()
            .filter(|(token, _)| !excluded.contains(*token))
            .map(|(token, &count)| (token.clone(), count))
            .collect();
        let total = counts.values().sum();
        Self { counts, total }
    }

    /// Each token's share of the total, as a percentage rounded to 2 places.
    ///
    /// Empty when the table is empty.
    pub fn percentages(&self) -> BTreeMap<String, f64> {
        if self.total == 0 {
            return BTreeMap::new();
        }
        let total = self.total as f64;
        self.iter()
            .map(|(token, count)| (token.to_string(), round2(count as f64 / total * 100.0)))
            .collect()
    }

    /// All entries in frequency order.
    pub fn sorted(&self) -> Vec<Entry> {
        let entries = self.iter().map(|(k, v)| (k.to_string(), v)).collect();
        sort_by_frequency(entries)
    }

    /// Counts keyed in token order, for stable serialization.
    pub fn to_map(&self) -> BTreeMap<String, usize> {
        self.iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    /// Build a report, keeping only the first `top_n` entries of the
    /// ordered view. `None` or `Some(0)` keeps everything.
    pub fn report(&self, top_n: Option<usize>) -> FrequencyReport {
        let mut most_common = self.sorted();
        if let Some(n) = top_n.filter(|&n| n > 0) {
            most_common.truncate(n);
        }
        FrequencyReport {
            frequencies: self.to_map(),
            total_items: self.total,
            unique_items: self.unique(),
            most_common,
            percentages: self.percentages(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut total = 0;
        for token in iter {
            *counts.entry(token.into()).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }
}

/// Result of a frequency analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyReport {
    /// Count per item.
    pub frequencies: BTreeMap<String, usize>,
    /// Total number of items counted.
    pub total_items: usize,
    /// Number of distinct items.
    pub unique_items: usize,
    /// Items ordered by count (descending) then alphabetically, possibly truncated.
    pub most_common: Vec<Entry>,
    /// Share of each item in percent (2 decimal places).
    pub percentages: BTreeMap<String, f64>,
}

impl FrequencyReport {
    /// Count of `item`, zero when absent.
    pub fn get(&self, item: &str) -> usize {
        self.frequencies.get(item).copied().unwrap_or(0)
    }

    /// Whether `item` was counted.
    pub fn contains(&self, item: &str) -> bool {
        self.frequencies.contains_key(item)
    }

    /// The first `n` most common items.
    pub fn top(&self, n: usize) -> &[Entry] {
        &self.most_common[..n.min(self.most_common.len())]
    }

    /// True when nothing was counted.
    pub const fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// The frequency ordering: higher count first, ties broken by token.
pub fn frequency_order(a: &Entry, b: &Entry) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Sort entries by [`frequency_order`] with a stable merge sort.
pub fn sort_by_frequency(entries: Vec<Entry>) -> Vec<Entry> {
    merge_sort_by(entries, &frequency_order)
}

fn merge_sort_by<T, F>(mut items: Vec<T>, cmp: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, cmp);
    let right = merge_sort_by(right, cmp);
    merge(left, right, cmp)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Ties take from the left run, which keeps the sort stable.
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }

    merged
}

/// Count overlapping windows of `n` tokens, each joined by a single space.
///
/// Fewer than `n` tokens yields an empty table.
#[tracing::instrument(skip(tokens), fields(tokens = tokens.len()))]
pub fn ngrams(tokens: &[String], n: usize) -> AnalysisResult<FrequencyTable> {
    if n == 0 {
        return Err(AnalysisError::InvalidNgramSize);
    }
    Ok(tokens.windows(n).map(|window| window.join(" ")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(token: &str, count: usize) -> Entry {
        (token.to_string(), count)
    }

    fn tokens(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn counts_in_one_pass() {
        let table: FrequencyTable = ["a", "b", "a"].into_iter().collect();
        assert_eq!(table.get("a"), 2);
        assert_eq!(table.get("b"), 1);
        assert_eq!(table.get("z"), 0);
        assert_eq!(table.total(), 3);
        assert_eq!(table.unique(), 2);
    }

    #[test]
    fn sort_orders_by_count_then_token() {
        let sorted = sort_by_frequency(vec![
            entry("pear", 1),
            entry("apple", 3),
            entry("fig", 3),
            entry("banana", 1),
            entry("cherry", 2),
        ]);
        assert_eq!(
            sorted,
            vec![
                entry("apple", 3),
                entry("fig", 3),
                entry("cherry", 2),
                entry("banana", 1),
                entry("pear", 1),
            ]
        );
    }

    #[test]
    fn sort_handles_trivial_inputs() {
        assert!(sort_by_frequency(Vec::new()).is_empty());
        assert_eq!(sort_by_frequency(vec![entry("x", 1)]), vec![entry("x", 1)]);
    }

    #[test]
    fn sort_compares_case_as_stored() {
        let sorted = sort_by_frequency(vec![entry("b", 1), entry("B", 1), entry("a", 1)]);
        assert_eq!(sorted, vec![entry("B", 1), entry("a", 1), entry("b", 1)]);
    }

    #[test]
    fn merge_sort_is_stable() {
        let items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        let sorted = merge_sort_by(items, &|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    #[test]
    fn report_limits_most_common() {
        let table: FrequencyTable = "aaabbc".chars().map(String::from).collect();
        let report = table.report(Some(2));
        assert_eq!(report.most_common, vec![entry("a", 3), entry("b", 2)]);
        assert_eq!(report.unique_items, 3);
        assert_eq!(report.frequencies.len(), 3);
    }

    #[test]
    fn zero_top_n_keeps_everything() {
        let table: FrequencyTable = ["x", "y"].into_iter().collect();
        assert_eq!(table.report(Some(0)).most_common.len(), 2);
        assert_eq!(table.report(None).most_common.len(), 2);
    }

    #[test]
    fn percentages_round_to_two_places() {
        let table: FrequencyTable = ["a", "b", "b"].into_iter().collect();
        let pct = table.percentages();
        assert_eq!(pct["a"], 33.33);
        assert_eq!(pct["b"], 66.67);
    }

    #[test]
    fn percentage_ties_round_to_even() {
        let mut tokens = vec!["x"];
        tokens.extend(std::iter::repeat_n("y", 31));
        let table: FrequencyTable = tokens.into_iter().collect();
        let pct = table.percentages();
        // 1/32 is exactly 3.125%
        assert_eq!(pct["x"], 3.12);
        assert_eq!(pct["y"], 96.88);
    }

    #[test]
    fn empty_table_has_no_percentages() {
        let table = FrequencyTable::default();
        assert!(table.percentages().is_empty());
        assert!(table.report(None).is_empty());
    }

    #[test]
    fn without_builds_a_new_table() {
        let table: FrequencyTable = ["the", "cat", "the"].into_iter().collect();
        let excluded = HashSet::from(["the".to_string()]);
        let filtered = table.without(&excluded);
        assert_eq!(filtered.total(), 1);
        assert!(!filtered.contains("the"));
        assert_eq!(table.get("the"), 2);
    }

    #[test]
    fn bigrams_slide_over_tokens() {
        let table = ngrams(&tokens(&["the", "quick", "brown", "fox"]), 2).unwrap();
        assert_eq!(table.total(), 3);
        assert_eq!(table.get("the quick"), 1);
        assert_eq!(table.get("quick brown"), 1);
        assert_eq!(table.get("brown fox"), 1);
    }

    #[test]
    fn repeated_ngrams_accumulate() {
        let table = ngrams(&tokens(&["a", "b", "a", "b"]), 2).unwrap();
        assert_eq!(table.get("a b"), 2);
        assert_eq!(table.get("b a"), 1);
    }

    #[test]
    fn window_wider_than_text_is_empty() {
        let table = ngrams(&tokens(&["hello"]), 2).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn zero_window_is_rejected() {
        assert!(matches!(
            ngrams(&tokens(&["a"]), 0),
            Err(AnalysisError::InvalidNgramSize)
        ));
    }

    #[test]
    fn report_top_clamps() {
        let table: FrequencyTable = ["a"].into_iter().collect();
        let report = table.report(None);
        assert_eq!(report.top(10), &[entry("a", 1)]);
        assert_eq!(report.get("missing"), 0);
    }
}
