//! Core library for textcounter.
//!
//! Counts, frequency distributions, n-grams, readability scores, vocabulary
//! richness, and pattern extraction over plain text. Everything here is a
//! pure function of its input; the only I/O is configuration discovery.
//!
//! # Modules
//!
//! - [`text`] - Tokenization into words, sentences, paragraphs, and lines
//! - [`filters`] - Character and word filters
//! - [`frequency`] - Frequency tables, ordering, and n-grams
//! - [`counter`] - Character, word, line, sentence, and paragraph counts
//! - [`readability`] - Flesch Reading Ease and Flesch-Kincaid Grade Level
//! - [`richness`] - Type-token ratio, hapax ratio, and Yule's K
//! - [`patterns`] - Email, URL, number, and custom pattern extraction
//! - [`analyzer`] - [`TextAnalyzer`], which ties the above together
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textcounter_core::{TextAnalyzer, WordFrequencyOptions};
//!
//! let analyzer = TextAnalyzer::new("hello world hello");
//! let freq = analyzer.word_frequency(&WordFrequencyOptions::default());
//! assert_eq!(freq.get("hello"), 2);
//!
//! let readability = analyzer.readability();
//! println!("{} ({})", readability.flesch_reading_ease, readability.rating);
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod counter;
pub mod error;
pub mod filters;
pub mod frequency;
pub mod patterns;
pub mod readability;
pub mod richness;
mod rounding;
pub mod text;

pub use analyzer::{
    CharFrequencyOptions, Comparison, MetricComparison, TextAnalyzer, TextStatistics,
    WordFrequencyOptions,
};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use counter::{CountReport, Summary};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use filters::{CharFilter, WordFilter};
pub use frequency::{FrequencyReport, FrequencyTable};
pub use patterns::{PatternKind, PatternMatch};
pub use readability::{Rating, ReadabilityReport, TargetAudience};
pub use richness::RichnessReport;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
