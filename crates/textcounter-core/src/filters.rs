//! Character and word filters applied before counting.
//!
//! Every filter is an independent predicate over a single character or
//! token, so the order they are checked in never changes the result.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Unicode decimal digits only (`\d` is `\p{Nd}`), so `½` and `Ⅷ` are words.
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Which characters take part in a character count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CharFilter {
    /// Count `A` and `a` separately. When false the text is lowercased first.
    pub case_sensitive: bool,
    /// Skip the space character (U+0020).
    pub ignore_spaces: bool,
    /// Skip ASCII punctuation.
    pub ignore_punctuation: bool,
    /// Skip ASCII digits.
    pub ignore_digits: bool,
    /// Skip `\n` and `\r`.
    pub ignore_newlines: bool,
    /// Additional characters to skip.
    pub custom_ignore: Option<String>,
    /// Count only these characters. Overrides every ignore option.
    pub count_only: Option<String>,
}

impl Default for CharFilter {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            ignore_spaces: false,
            ignore_punctuation: false,
            ignore_digits: false,
            ignore_newlines: false,
            custom_ignore: None,
            count_only: None,
        }
    }
}

impl CharFilter {
    /// Whether `ch` (already case-folded if needed) should be counted.
    pub fn accepts(&self, ch: char) -> bool {
        if let Some(ref only) = self.count_only {
            return only.contains(ch);
        }

        let ignored = (self.ignore_spaces && ch == ' ')
            || (self.ignore_punctuation && ch.is_ascii_punctuation())
            || (self.ignore_digits && ch.is_ascii_digit())
            || (self.ignore_newlines && matches!(ch, '\n' | '\r'))
            || self
                .custom_ignore
                .as_deref()
                .is_some_and(|custom| custom.contains(ch));

        !ignored
    }

    /// Names of the options in effect, for reporting.
    pub fn options_applied(&self) -> Vec<String> {
        let mut applied = Vec::new();
        if !self.case_sensitive {
            applied.push("case_insensitive".to_string());
        }
        for (enabled, name) in [
            (self.ignore_spaces, "ignore_spaces"),
            (self.ignore_punctuation, "ignore_punctuation"),
            (self.ignore_digits, "ignore_digits"),
            (self.ignore_newlines, "ignore_newlines"),
            (self.custom_ignore.is_some(), "custom_ignore"),
            (self.count_only.is_some(), "count_only"),
        ] {
            if enabled {
                applied.push(name.to_string());
            }
        }
        applied
    }
}

/// Which tokens take part in a word count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WordFilter {
    /// Count `Word` and `word` separately.
    pub case_sensitive: bool,
    /// Strip leading and trailing ASCII punctuation from each token.
    pub strip_punctuation: bool,
    /// Drop tokens made only of decimal digits.
    pub ignore_numbers: bool,
    /// Minimum token length in characters.
    pub min_length: usize,
    /// Maximum token length in characters.
    pub max_length: Option<usize>,
    /// Tokens to drop, compared after case folding.
    pub exclude_words: Vec<String>,
    /// Report the number of distinct tokens instead of occurrences.
    pub unique_only: bool,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            strip_punctuation: true,
            ignore_numbers: false,
            min_length: 1,
            max_length: None,
            exclude_words: Vec::new(),
            unique_only: false,
        }
    }
}

impl WordFilter {
    /// Tokenize `text` and keep only the tokens this filter accepts.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let excluded = self.exclusions();
        text::split_tokens(text, self.case_sensitive, self.strip_punctuation)
            .into_iter()
            .filter(|token| self.accepts(token, &excluded))
            .collect()
    }

    /// Exclusion set normalized the same way tokens are.
    fn exclusions(&self) -> HashSet<String> {
        self.exclude_words
            .iter()
            .map(|w| {
                if self.case_sensitive {
                    w.clone()
                } else {
                    w.to_lowercase()
                }
            })
            .collect()
    }

    fn accepts(&self, token: &str, excluded: &HashSet<String>) -> bool {
        let len = token.chars().count();
        !(self.ignore_numbers && DIGITS.is_match(token))
            && len >= self.min_length
            && self.max_length.is_none_or(|max| len <= max)
            && !excluded.contains(token)
    }

    /// Names of the options in effect, for reporting.
    pub fn options_applied(&self) -> Vec<String> {
        let mut applied = Vec::new();
        if !self.case_sensitive {
            applied.push("case_insensitive".to_string());
        }
        if self.strip_punctuation {
            applied.push("ignore_punctuation".to_string());
        }
        if self.ignore_numbers {
            applied.push("ignore_numbers".to_string());
        }
        if self.min_length > 1 {
            applied.push(format!("min_length={}", self.min_length));
        }
        if let Some(max) = self.max_length {
            applied.push(format!("max_length={max}"));
        }
        if !self.exclude_words.is_empty() {
            applied.push("exclude_words".to_string());
        }
        if self.unique_only {
            applied.push("unique_only".to_string());
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_char_filter_accepts_everything() {
        let filter = CharFilter::default();
        assert!(" .\n7aZ".chars().all(|c| filter.accepts(c)));
    }

    #[test]
    fn ignore_spaces_only_skips_plain_space() {
        let filter = CharFilter {
            ignore_spaces: true,
            ..CharFilter::default()
        };
        assert!(!filter.accepts(' '));
        assert!(filter.accepts('\t'));
        assert!(filter.accepts('\n'));
    }

    #[test]
    fn count_only_wins_over_ignores() {
        let filter = CharFilter {
            ignore_punctuation: true,
            count_only: Some("!".to_string()),
            ..CharFilter::default()
        };
        assert!(filter.accepts('!'));
        assert!(!filter.accepts('a'));
    }

    #[test]
    fn custom_ignore_skips_listed_characters() {
        let filter = CharFilter {
            custom_ignore: Some("xy".to_string()),
            ..CharFilter::default()
        };
        assert!(!filter.accepts('x'));
        assert!(filter.accepts('z'));
    }

    #[test]
    fn char_options_are_reported() {
        let filter = CharFilter {
            case_sensitive: false,
            ignore_digits: true,
            ..CharFilter::default()
        };
        assert_eq!(filter.options_applied(), vec!["case_insensitive", "ignore_digits"]);
    }

    #[test]
    fn word_length_bounds() {
        let filter = WordFilter {
            min_length: 2,
            max_length: Some(3),
            ..WordFilter::default()
        };
        assert_eq!(filter.tokens("I am a big developer"), vec!["am", "big"]);
    }

    #[test]
    fn exclusions_follow_case_folding() {
        let filter = WordFilter {
            case_sensitive: false,
            exclude_words: vec!["The".to_string()],
            ..WordFilter::default()
        };
        assert_eq!(filter.tokens("The cat and THE dog"), vec!["cat", "and", "dog"]);
    }

    #[test]
    fn case_sensitive_exclusions_are_exact() {
        let filter = WordFilter {
            exclude_words: vec!["the".to_string()],
            ..WordFilter::default()
        };
        assert_eq!(filter.tokens("The the"), vec!["The"]);
    }

    #[test]
    fn numbers_can_be_dropped() {
        let filter = WordFilter {
            ignore_numbers: true,
            ..WordFilter::default()
        };
        assert_eq!(filter.tokens("I have 42 apples, 3x"), vec!["I", "have", "apples", "3x"]);
    }

    #[test]
    fn only_decimal_digits_count_as_numbers() {
        let filter = WordFilter {
            ignore_numbers: true,
            ..WordFilter::default()
        };
        assert_eq!(filter.tokens("42 ½ Ⅷ ٣٤ 7"), vec!["½", "Ⅷ"]);
    }

    #[test]
    fn word_options_are_reported() {
        let filter = WordFilter {
            min_length: 3,
            unique_only: true,
            ..WordFilter::default()
        };
        assert_eq!(
            filter.options_applied(),
            vec!["ignore_punctuation", "min_length=3", "unique_only"]
        );
    }
}
