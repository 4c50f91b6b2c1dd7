//! Extract command: emails, URLs, numbers, or matches of a custom pattern.

use anyhow::Context;
use clap::{Args, Subcommand};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textcounter_core::{PatternKind, PatternMatch, TextAnalyzer};

use super::{InputArgs, print_json, read_input};

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// What to extract.
    #[command(subcommand)]
    pub target: ExtractTarget,
}

/// What `extract` looks for.
#[derive(Subcommand, Debug)]
pub enum ExtractTarget {
    /// Email addresses
    Emails(InputArgs),
    /// http:// and https:// URLs
    Urls(InputArgs),
    /// Integers and decimals
    Numbers(InputArgs),
    /// Matches of a regular expression
    Pattern(PatternArgs),
}

/// Arguments for `extract pattern`.
#[derive(Args, Debug)]
pub struct PatternArgs {
    /// Regular expression to search for
    pub regex: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,
}

impl ExtractTarget {
    fn input(&self) -> &InputArgs {
        match self {
            Self::Emails(input) | Self::Urls(input) | Self::Numbers(input) => input,
            Self::Pattern(args) => &args.input,
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Emails(_) => PatternKind::Emails.to_string(),
            Self::Urls(_) => PatternKind::Urls.to_string(),
            Self::Numbers(_) => PatternKind::Numbers.to_string(),
            Self::Pattern(args) => format!("/{}/", args.regex),
        }
    }

    fn find(&self, analyzer: &TextAnalyzer) -> anyhow::Result<Vec<PatternMatch>> {
        let text = analyzer.text();
        Ok(match self {
            Self::Emails(_) => PatternKind::Emails.find(text),
            Self::Urls(_) => PatternKind::Urls.find(text),
            Self::Numbers(_) => PatternKind::Numbers.find(text),
            Self::Pattern(args) => analyzer
                .find_patterns(&args.regex, args.case_sensitive)
                .with_context(|| format!("invalid pattern: {}", args.regex))?,
        })
    }
}

/// Print every match, one per line, or all matches with offsets as JSON.
#[instrument(name = "cmd_extract", skip_all, fields(target = %args.target.name()))]
pub fn cmd_extract(
    args: ExtractArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(input = args.target.input().label(), "executing extract command");

    let analyzer = TextAnalyzer::new(read_input(args.target.input(), max_input_bytes)?);
    let matches = args.target.find(&analyzer)?;
    debug!(matches = matches.len(), "extraction finished");

    if global_json {
        return print_json(&matches);
    }
    if matches.is_empty() {
        println!("{}", format!("no {} found", args.target.name()).dimmed());
    }
    for m in &matches {
        println!("{}", m.text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_input(text: &str) -> InputArgs {
        InputArgs {
            file: None,
            text: Some(text.to_string()),
        }
    }

    #[test]
    fn builtin_targets_find_matches() {
        let analyzer = TextAnalyzer::new("Mail a@b.com or see https://x.io. Cost 3.5");
        let emails = ExtractTarget::Emails(text_input("")).find(&analyzer).unwrap();
        assert_eq!(emails[0].text, "a@b.com");
        let urls = ExtractTarget::Urls(text_input("")).find(&analyzer).unwrap();
        assert_eq!(urls[0].text, "https://x.io");
        let numbers = ExtractTarget::Numbers(text_input("")).find(&analyzer).unwrap();
        assert_eq!(numbers[0].text, "3.5");
    }

    #[test]
    fn custom_pattern_respects_case() {
        let analyzer = TextAnalyzer::new("Cat cat CAT");
        let target = ExtractTarget::Pattern(PatternArgs {
            regex: "cat".to_string(),
            input: text_input(""),
            case_sensitive: true,
        });
        assert_eq!(target.find(&analyzer).unwrap().len(), 1);

        let target = ExtractTarget::Pattern(PatternArgs {
            regex: "cat".to_string(),
            input: text_input(""),
            case_sensitive: false,
        });
        assert_eq!(target.find(&analyzer).unwrap().len(), 3);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let args = ExtractArgs {
            target: ExtractTarget::Pattern(PatternArgs {
                regex: "(unclosed".to_string(),
                input: text_input("anything"),
                case_sensitive: false,
            }),
        };
        let err = cmd_extract(args, false, None).unwrap_err();
        assert!(err.to_string().contains("invalid pattern"));
    }

    #[test]
    fn no_matches_is_not_an_error() {
        let args = ExtractArgs {
            target: ExtractTarget::Emails(text_input("nothing here")),
        };
        assert!(cmd_extract(args, false, None).is_ok());
    }
}
