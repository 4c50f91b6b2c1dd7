//! Readability scoring with the Flesch Reading Ease and Flesch-Kincaid
//! Grade Level formulas.
//!
//! ```text
//! ease  = 206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)
//! grade = 0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59
//! ```
//!
//! Syllables come from a vowel-group heuristic ([`count_syllables`]), not a
//! pronunciation dictionary. Higher ease and lower grade mean easier text.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rounding::round2;
use crate::text;

const VOWELS: &str = "aeiouy";

/// Reading-ease band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Rating {
    /// Ease ≥ 90.
    #[serde(rename = "Very Easy")]
    VeryEasy,
    /// Ease ≥ 80.
    Easy,
    /// Ease ≥ 70.
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    /// Ease ≥ 60.
    Standard,
    /// Ease ≥ 50.
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    /// Ease ≥ 30.
    Difficult,
    /// Ease < 30.
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
    /// No words to score.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Rating {
    /// Band for a reading-ease score. Lower bounds are inclusive.
    pub fn from_ease(ease: f64) -> Self {
        match ease {
            e if e >= 90.0 => Self::VeryEasy,
            e if e >= 80.0 => Self::Easy,
            e if e >= 70.0 => Self::FairlyEasy,
            e if e >= 60.0 => Self::Standard,
            e if e >= 50.0 => Self::FairlyDifficult,
            e if e >= 30.0 => Self::Difficult,
            _ => Self::VeryDifficult,
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
            Self::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Suggested audience by grade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TargetAudience {
    /// Grade ≤ 5.
    #[serde(rename = "Elementary school")]
    Elementary,
    /// Grade ≤ 8.
    #[serde(rename = "Middle school")]
    MiddleSchool,
    /// Grade ≤ 12.
    #[serde(rename = "High school")]
    HighSchool,
    /// Grade ≤ 16.
    College,
    /// Anything above.
    #[serde(rename = "Graduate/Professional")]
    Graduate,
}

impl TargetAudience {
    /// Audience for a grade level.
    pub fn from_grade(grade: f64) -> Self {
        match grade {
            g if g <= 5.0 => Self::Elementary,
            g if g <= 8.0 => Self::MiddleSchool,
            g if g <= 12.0 => Self::HighSchool,
            g if g <= 16.0 => Self::College,
            _ => Self::Graduate,
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Elementary => "Elementary school",
            Self::MiddleSchool => "Middle school",
            Self::HighSchool => "High school",
            Self::College => "College",
            Self::Graduate => "Graduate/Professional",
        }
    }
}

impl fmt::Display for TargetAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of readability analysis. Scores and averages are rounded to 2
/// decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level, never below zero.
    pub flesch_kincaid_grade: f64,
    /// Words per sentence.
    pub avg_sentence_length: f64,
    /// Characters per word.
    pub avg_word_length: f64,
    /// Syllables per word.
    pub avg_syllables_per_word: f64,
    /// Band for the reading-ease score.
    pub rating: Rating,
    /// Reading ease of 60 or more.
    pub is_easy: bool,
    /// Suggested audience for the grade level.
    pub target_audience: TargetAudience,
    /// Words scored.
    pub words: usize,
    /// Sentences detected (at least 1 when there are words).
    pub sentences: usize,
    /// Estimated syllables.
    pub syllables: usize,
}

impl ReadabilityReport {
    /// The report for text without any words.
    pub const fn empty() -> Self {
        Self {
            flesch_reading_ease: 0.0,
            flesch_kincaid_grade: 0.0,
            avg_sentence_length: 0.0,
            avg_word_length: 0.0,
            avg_syllables_per_word: 0.0,
            rating: Rating::NotApplicable,
            is_easy: false,
            target_audience: TargetAudience::Elementary,
            words: 0,
            sentences: 0,
            syllables: 0,
        }
    }
}

/// Score `text`.
///
/// Text without words is not an error: every score is 0.0 and the rating
/// is [`Rating::NotApplicable`].
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn readability(text: &str) -> ReadabilityReport {
    let words = text::words(text, true);
    if words.is_empty() {
        tracing::debug!("no words to score");
        return ReadabilityReport::empty();
    }

    let word_count = words.len();
    let sentences = text::split_sentences(text).len().max(1);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let chars: usize = words.iter().map(|w| w.chars().count()).sum();

    let avg_sentence_length = word_count as f64 / sentences as f64;
    let avg_syllables_per_word = syllables as f64 / word_count as f64;
    let avg_word_length = chars as f64 / word_count as f64;

    let ease = 1.015f64.mul_add(-avg_sentence_length, 206.835) - 84.6 * avg_syllables_per_word;
    let grade = 0.39f64.mul_add(avg_sentence_length, 11.8 * avg_syllables_per_word) - 15.59;

    let flesch_reading_ease = round2(ease);
    let flesch_kincaid_grade = round2(grade.max(0.0));

    ReadabilityReport {
        flesch_reading_ease,
        flesch_kincaid_grade,
        avg_sentence_length: round2(avg_sentence_length),
        avg_word_length: round2(avg_word_length),
        avg_syllables_per_word: round2(avg_syllables_per_word),
        rating: Rating::from_ease(ease),
        is_easy: ease >= 60.0,
        target_audience: TargetAudience::from_grade(flesch_kincaid_grade),
        words: word_count,
        sentences,
        syllables,
    }
}

/// Estimate the syllables in one word.
///
/// Counts vowel groups, then adjusts for a silent final `e`, a syllabic
/// `-le`, and a silent `-ed`. Every non-empty word has at least one.
pub fn count_syllables(word: &str) -> usize {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return 0;
    }

    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let is_vowel = |c: char| VOWELS.contains(c);

    let mut count = 0usize;
    let mut prev_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if word.ends_with('e') && count > 1 && n >= 2 && chars[n - 2] != 'l' {
        count -= 1;
    }

    if n >= 3 && word.ends_with("le") && !is_vowel(chars[n - 3]) {
        count += 1;
    }

    if word.ends_with("ed") && n > 2 && !matches!(chars[n - 3], 't' | 'd') {
        count = count.saturating_sub(1).max(1);
    }

    count.max(1)
}
