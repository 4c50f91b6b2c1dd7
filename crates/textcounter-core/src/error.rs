//! Error types for textcounter-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
///
/// Degenerate input (empty text, no words, an n-gram window wider than the
/// text) is never an error; it produces zero-valued results instead.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input is not valid UTF-8 text.
    #[error("expected UTF-8 text: {0}")]
    NotText(#[from] std::str::Utf8Error),

    /// A user-supplied pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// An n-gram window of zero was requested.
    #[error("n-gram size must be at least 1")]
    InvalidNgramSize,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
