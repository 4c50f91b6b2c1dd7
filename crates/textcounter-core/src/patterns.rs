//! Pattern extraction over raw text: emails, URLs, numbers, and
//! caller-supplied regular expressions.
//!
//! Offsets are byte offsets into the input, so `&text[m.start..m.end]`
//! always equals `m.text`.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisResult;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://[^\s<>"{}|\\^`\[\]]+"#).expect("valid regex")
});

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+\.?\d*").expect("valid regex"));

/// Characters trimmed from the end of a URL match.
const URL_TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// A built-in pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PatternKind {
    /// `local@domain.tld`.
    Emails,
    /// `http://` or `https://` links.
    Urls,
    /// Integers and decimals with an optional leading minus.
    Numbers,
}

impl PatternKind {
    /// Lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Emails => "emails",
            Self::Urls => "urls",
            Self::Numbers => "numbers",
        }
    }

    /// Every match of this pattern in `text`.
    pub fn find(self, text: &str) -> Vec<PatternMatch> {
        match self {
            Self::Emails => find_emails(text),
            Self::Urls => find_urls(text),
            Self::Numbers => find_numbers(text),
        }
    }

    /// Matched text only.
    pub fn extract(self, text: &str) -> Vec<String> {
        self.find(text).into_iter().map(|m| m.text).collect()
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One match: byte range and the matched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PatternMatch {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
    /// The matched text.
    pub text: String,
}

impl PatternMatch {
    fn new(start: usize, end: usize, text: &str) -> Self {
        Self {
            start,
            end,
            text: text.to_string(),
        }
    }
}

/// Find non-overlapping matches of `pattern`, left to right.
///
/// # Errors
///
/// Returns [`AnalysisError::Pattern`](crate::AnalysisError::Pattern) if the
/// pattern does not compile.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn find(pattern: &str, text: &str, case_sensitive: bool) -> AnalysisResult<Vec<PatternMatch>> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()?;
    Ok(collect(&re, text))
}

fn collect(re: &Regex, text: &str) -> Vec<PatternMatch> {
    re.find_iter(text)
        .map(|m| PatternMatch::new(m.start(), m.end(), m.as_str()))
        .collect()
}

/// Email addresses in `text`.
pub fn find_emails(text: &str) -> Vec<PatternMatch> {
    collect(&EMAIL, text)
}

/// URLs in `text`, with trailing sentence punctuation removed from each.
pub fn find_urls(text: &str) -> Vec<PatternMatch> {
    URL.find_iter(text)
        .map(|m| {
            let trimmed = m.as_str().trim_end_matches(URL_TRAILING);
            PatternMatch::new(m.start(), m.start() + trimmed.len(), trimmed)
        })
        .collect()
}

/// Numeric literals in `text`. A trailing dot stays on the match.
pub fn find_numbers(text: &str) -> Vec<PatternMatch> {
    collect(&NUMBER, text)
}

/// Email addresses, as strings.
pub fn extract_emails(text: &str) -> Vec<String> {
    PatternKind::Emails.extract(text)
}

/// URLs, as strings.
pub fn extract_urls(text: &str) -> Vec<String> {
    PatternKind::Urls.extract(text)
}

/// Numbers, as strings.
pub fn extract_numbers(text: &str) -> Vec<String> {
    PatternKind::Numbers.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn emails_in_order() {
        let emails = extract_emails("Contact test@example.com or info@site.org");
        assert_eq!(emails, vec!["test@example.com", "info@site.org"]);
    }

    #[test]
    fn uppercase_email() {
        assert_eq!(extract_emails("Mail ADMIN@EXAMPLE.COM now"), vec!["ADMIN@EXAMPLE.COM"]);
    }

    #[test]
    fn urls_drop_trailing_punctuation() {
        let urls = extract_urls("See https://example.com/path. Or (http://foo.org/a?b=1), ok?");
        assert_eq!(urls, vec!["https://example.com/path", "http://foo.org/a?b=1"]);
    }

    #[test]
    fn url_offsets_follow_trim() {
        let text = "Go to https://x.io!";
        let m = &find_urls(text)[0];
        assert_eq!(&text[m.start..m.end], "https://x.io");
    }

    #[test]
    fn url_scheme_is_case_insensitive() {
        assert_eq!(extract_urls("HTTPS://EXAMPLE.COM"), vec!["HTTPS://EXAMPLE.COM"]);
    }

    #[test]
    fn numbers_with_sign_and_fraction() {
        let numbers = extract_numbers("I have 42 apples, -3 debts and 3.14 pies.");
        assert_eq!(numbers, vec!["42", "-3", "3.14"]);
    }

    #[test]
    fn trailing_dot_stays_on_number() {
        assert_eq!(extract_numbers("Chapter 7."), vec!["7."]);
        assert_eq!(
            extract_numbers("Costs 3. and -2.5, not 1..2"),
            vec!["3.", "-2.5", "1.", "2"]
        );
    }

    #[test]
    fn custom_pattern_reports_offsets() {
        let matches = find(r"\d+", "abc 123 def 45", true).unwrap();
        assert_eq!(
            matches,
            vec![PatternMatch::new(4, 7, "123"), PatternMatch::new(12, 14, "45")]
        );
    }

    #[test]
    fn custom_pattern_case_folding() {
        assert_eq!(find("hello", "Hello HELLO", false).unwrap().len(), 2);
        assert!(find("hello", "Hello HELLO", true).unwrap().is_empty());
    }

    #[test]
    fn malformed_pattern_is_an_error() {
        assert!(matches!(find("(unclosed", "text", true), Err(AnalysisError::Pattern(_))));
    }

    #[test]
    fn nothing_to_find() {
        assert!(extract_emails("").is_empty());
        assert!(extract_urls("no links here").is_empty());
        assert!(extract_numbers("none").is_empty());
    }
}
