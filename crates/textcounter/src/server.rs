//! MCP (Model Context Protocol) server.
//!
//! Exposes the analysis engine as MCP tools over stdio. Every tool takes the
//! text in its parameters, builds a fresh [`TextAnalyzer`] for that call, and
//! returns the engine's result serialized as JSON text content.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use textcounter_core::{
    CharFilter, CharFrequencyOptions, CountReport, DEFAULT_MAX_INPUT_BYTES, PatternKind,
    Summary, TextAnalyzer, WordFilter, WordFrequencyOptions, counter,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for tools that only need the text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to analyze.
    pub text: String,
}

/// Parameters for the `count_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountTextParams {
    /// The text to count.
    pub text: String,
    /// Character filter options.
    #[serde(default)]
    pub chars: CharFilter,
    /// Word filter options.
    #[serde(default)]
    pub words: WordFilter,
}

/// Parameters for the `char_frequency` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CharFrequencyParams {
    /// The text to analyze.
    pub text: String,
    /// Frequency options.
    #[serde(flatten)]
    pub options: CharFrequencyOptions,
}

/// Parameters for the `word_frequency` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct WordFrequencyParams {
    /// The text to analyze.
    pub text: String,
    /// Frequency options.
    #[serde(flatten)]
    pub options: WordFrequencyOptions,
}

/// Parameters for the `ngrams` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct NgramsParams {
    /// The text to analyze.
    pub text: String,
    /// Words per n-gram.
    #[serde(default = "default_ngram_size")]
    pub n: usize,
    /// Count `Word` and `word` separately.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Keep only this many most common n-grams.
    pub top_n: Option<usize>,
}

const fn default_ngram_size() -> usize {
    2
}

/// Parameters for the `extract_patterns` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ExtractPatternsParams {
    /// The text to search.
    pub text: String,
    /// Built-in pattern: "emails", "urls", or "numbers".
    pub kind: Option<PatternKind>,
    /// Custom regular expression. Used when `kind` is omitted.
    pub pattern: Option<String>,
    /// Match the custom pattern case-sensitively.
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Every count for one text.
#[derive(Debug, Serialize)]
struct CountTextReport {
    summary: Summary,
    characters: CountReport,
    words: CountReport,
    lines: CountReport,
    sentences: CountReport,
    paragraphs: CountReport,
}

/// MCP server exposing the analysis engine to AI assistants.
///
/// Holds no text between calls; only the tool router and the input limit.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectServer {
    /// Replace the input size limit. `None` accepts any size.
    #[must_use]
    pub const fn with_input_limit(mut self, max_input_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    fn analyzer(&self, text: &str) -> Result<TextAnalyzer, McpError> {
        if let Some(max) = self.max_input_bytes
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            ));
        }
        if text.is_empty() {
            tracing::warn!("tool called with empty text");
        }
        Ok(TextAnalyzer::new(text))
    }
}

/// Serialize a tool result as pretty JSON text content.
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance with the default input limit.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        if params.format == "json" {
            return json_result(&info);
        }
        let text = format!(
            "{} v{}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Characters, words, lines, sentences, and paragraphs.
    #[tool(
        description = "Count characters, words, lines, sentences, and paragraphs. Optional character and word filters shape the character and word counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_text(
        &self,
        Parameters(params): Parameters<CountTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "count_text", "executing MCP tool");

        let analyzer = self.analyzer(&params.text)?;
        let text = analyzer.text();
        let report = CountTextReport {
            summary: counter::summary(text),
            characters: counter::char_count(text, &params.chars),
            words: counter::word_count(text, &params.words),
            lines: counter::line_count(text, false, false),
            sentences: counter::sentence_count(text),
            paragraphs: counter::paragraph_count(text),
        };

        tracing::info!(tool = "count_text", words = report.words.total, "MCP tool completed");
        json_result(&report)
    }

    /// Word frequency.
    #[tool(
        description = "Word frequency with counts, percentages, and the most common words. Case-insensitive unless case_sensitive is set."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn word_frequency(
        &self,
        Parameters(params): Parameters<WordFrequencyParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "word_frequency", top_n = ?params.options.top_n, "executing MCP tool");

        let report = self.analyzer(&params.text)?.word_frequency(&params.options);

        tracing::info!(tool = "word_frequency", unique = report.unique_items, "MCP tool completed");
        json_result(&report)
    }

    /// Character frequency.
    #[tool(
        description = "Character frequency with counts, percentages, and the most common characters. Spaces are ignored by default."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn char_frequency(
        &self,
        Parameters(params): Parameters<CharFrequencyParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "char_frequency", top_n = ?params.options.top_n, "executing MCP tool");

        let report = self.analyzer(&params.text)?.char_frequency(&params.options);

        tracing::info!(tool = "char_frequency", unique = report.unique_items, "MCP tool completed");
        json_result(&report)
    }

    /// N-gram frequency.
    #[tool(description = "Frequency of every run of n consecutive words (default n = 2).")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", n = params.n))]
    fn ngrams(&self, Parameters(params): Parameters<NgramsParams>) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "ngrams", n = params.n, "executing MCP tool");

        let report = self
            .analyzer(&params.text)?
            .ngrams(params.n, params.case_sensitive, params.top_n)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(tool = "ngrams", total = report.total_items, "MCP tool completed");
        json_result(&report)
    }

    /// Flesch readability scores.
    #[tool(
        description = "Flesch Reading Ease and Flesch-Kincaid Grade Level, with rating, target audience, and averages."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn readability(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "readability", "executing MCP tool");

        let report = self.analyzer(&params.text)?.readability();

        tracing::info!(
            tool = "readability",
            ease = report.flesch_reading_ease,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Vocabulary richness.
    #[tool(
        description = "Vocabulary richness: type-token ratio, hapax legomena ratio, Yule's K, and the frequency spectrum."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn vocabulary_richness(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "vocabulary_richness", "executing MCP tool");

        let report = self.analyzer(&params.text)?.vocabulary_richness();

        tracing::info!(tool = "vocabulary_richness", ttr = report.ttr, "MCP tool completed");
        json_result(&report)
    }

    /// Aggregate statistics.
    #[tool(
        description = "Aggregate text statistics: counts, averages, vocabulary richness, and character and word frequencies."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn text_statistics(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "text_statistics", "executing MCP tool");

        let analyzer = self.analyzer(&params.text)?;
        let stats = analyzer.statistics();

        tracing::info!(tool = "text_statistics", words = stats.word_count, "MCP tool completed");
        json_result(stats)
    }

    /// Pattern extraction.
    #[tool(
        description = "Extract emails, URLs, or numbers (kind), or matches of a custom regular expression (pattern). Returns byte offsets and matched text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn extract_patterns(
        &self,
        Parameters(params): Parameters<ExtractPatternsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "extract_patterns", kind = ?params.kind, "executing MCP tool");

        let analyzer = self.analyzer(&params.text)?;
        let matches = match (params.kind, params.pattern.as_deref()) {
            (Some(kind), None) => kind.find(analyzer.text()),
            (None, Some(pattern)) => analyzer
                .find_patterns(pattern, params.case_sensitive)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?,
            _ => {
                return Err(McpError::invalid_params(
                    "exactly one of kind or pattern is required",
                    None,
                ));
            }
        };

        tracing::info!(tool = "extract_patterns", matches = matches.len(), "MCP tool completed");
        json_result(&matches)
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Pass text to a tool to count, score, or search it.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
