//! Tokenization: words, sentences, paragraphs, and lines.
//!
//! Boundaries come from whitespace and punctuation alone. There is no
//! abbreviation or grammar awareness: `Dr. Smith` is two sentences.

use std::borrow::Cow;

use crate::error::AnalysisResult;

/// Decode raw bytes as UTF-8 text, rejecting anything that is not text.
pub fn decode(bytes: &[u8]) -> AnalysisResult<&str> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Strip leading and trailing ASCII punctuation from a token.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Extract words: whitespace-delimited tokens with boundary punctuation
/// stripped. Tokens that strip to nothing are dropped.
///
/// When `case_sensitive` is false the whole text is lowercased first.
pub fn words(text: &str, case_sensitive: bool) -> Vec<String> {
    split_tokens(text, case_sensitive, true)
}

/// Split on whitespace, optionally stripping boundary punctuation.
///
/// With `strip` off, tokens keep their punctuation (`"world!"`).
pub fn split_tokens(text: &str, case_sensitive: bool, strip: bool) -> Vec<String> {
    let source: Cow<'_, str> = if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    };

    let mut tokens = Vec::new();
    let mut start = None;

    for (i, ch) in source.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                push_token(&mut tokens, &source[s..i], strip);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        push_token(&mut tokens, &source[s..], strip);
    }

    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: &str, strip: bool) {
    let token = if strip { strip_punctuation(raw) } else { raw };
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Split text into sentences.
///
/// A sentence ends at a run of `.`, `!`, or `?`; the run stays with the
/// sentence it closes. Trailing text without a terminator is the final
/// sentence. Sentences are trimmed and empty ones are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_sentence_terminator(ch) {
            continue;
        }

        let mut end = i + ch.len_utf8();
        while let Some((j, next)) = chars.next_if(|&(_, c)| is_sentence_terminator(c)) {
            end = j + next.len_utf8();
        }

        push_trimmed(&mut sentences, &text[start..end]);
        start = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Split text into paragraphs.
///
/// Any line that is empty or contains only whitespace separates
/// paragraphs; runs of such lines count as one break.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split('\n') {
        let line_end = offset + line.len();
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                push_trimmed(&mut paragraphs, &text[s..end]);
            }
        } else {
            start.get_or_insert(offset);
            end = line_end;
        }
        offset = line_end + 1;
    }

    if let Some(s) = start {
        push_trimmed(&mut paragraphs, &text[s..end]);
    }

    paragraphs
}

/// Split text into lines on `\n`. Empty text has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

/// Count whitespace-delimited tokens without allocating.
pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_strip_boundary_punctuation() {
        assert_eq!(words("Hello, World!", true), vec!["Hello", "World"]);
    }

    #[test]
    fn words_fold_case_when_insensitive() {
        assert_eq!(words("The Quick BROWN", false), vec!["the", "quick", "brown"]);
    }

    #[test]
    fn words_keep_inner_punctuation() {
        assert_eq!(words("don't stop-gap (really)", true), vec!["don't", "stop-gap", "really"]);
    }

    #[test]
    fn punctuation_only_tokens_are_dropped() {
        assert_eq!(words("hello -- world ...", true), vec!["hello", "world"]);
    }

    #[test]
    fn words_split_on_any_whitespace() {
        assert_eq!(words("a\tb\nc  d\r\ne", true), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn unstripped_tokens_keep_punctuation() {
        assert_eq!(split_tokens("Hi, there!", true, false), vec!["Hi,", "there!"]);
    }

    #[test]
    fn non_ascii_punctuation_is_not_stripped() {
        assert_eq!(words("«bonjour»", true), vec!["«bonjour»"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(words("", true).is_empty());
        assert!(words("   \n\t", false).is_empty());
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("Hello! How are you? I'm fine.");
        assert_eq!(sentences, vec!["Hello!", "How are you?", "I'm fine."]);
    }

    #[test]
    fn consecutive_terminators_collapse() {
        let sentences = split_sentences("Wait... what?! Really.");
        assert_eq!(sentences, vec!["Wait...", "what?!", "Really."]);
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(split_sentences("  no ending here  "), vec!["no ending here"]);
    }

    #[test]
    fn abbreviations_are_not_special() {
        assert_eq!(split_sentences("Dr. Smith left.").len(), 2);
    }

    #[test]
    fn empty_sentences_are_dropped() {
        assert!(split_sentences("").is_empty());
        assert_eq!(split_sentences("...!!!"), vec!["...!!!"]);
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let paras = split_paragraphs("Para 1\n\nPara 2\n\nPara 3");
        assert_eq!(paras, vec!["Para 1", "Para 2", "Para 3"]);
    }

    #[test]
    fn whitespace_only_line_separates_paragraphs() {
        let paras = split_paragraphs("first\n   \nsecond");
        assert_eq!(paras, vec!["first", "second"]);
    }

    #[test]
    fn multi_line_paragraph_stays_together() {
        let paras = split_paragraphs("line one\nline two\n\n\n\nnext");
        assert_eq!(paras, vec!["line one\nline two", "next"]);
    }

    #[test]
    fn crlf_blank_lines_separate_paragraphs() {
        let paras = split_paragraphs("one\r\n\r\ntwo\r\n");
        assert_eq!(paras, vec!["one", "two"]);
    }

    #[test]
    fn lines_split_on_newline() {
        assert_eq!(split_lines("a\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert_eq!(split_lines("trailing\n"), vec!["trailing", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(decode(&[0xff, 0xfe, 0x00]).is_err());
        assert_eq!(decode(b"plain").unwrap(), "plain");
    }
}
