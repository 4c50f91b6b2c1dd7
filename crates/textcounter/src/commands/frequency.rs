//! Frequency command: most common characters or words.

use clap::{Args, ValueEnum};
use tracing::{debug, instrument};

use textcounter_core::config::Config;
use textcounter_core::{
    CharFrequencyOptions, FrequencyReport, TextAnalyzer, WordFrequencyOptions,
};

use super::{CaseArgs, InputArgs, print_frequency, print_json, read_input};

/// What to count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FrequencyKind {
    /// Individual characters.
    Chars,
    /// Whitespace-delimited words.
    #[default]
    Words,
}

/// Arguments for the `frequency` subcommand.
#[derive(Args, Debug, Default)]
pub struct FrequencyArgs {
    /// Count characters or words
    #[arg(value_enum)]
    pub kind: FrequencyKind,

    #[command(flatten)]
    pub input: InputArgs,

    /// Show only the N most common entries
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    #[command(flatten)]
    pub case: CaseArgs,

    /// Words to leave out (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "WORDS")]
    pub exclude: Vec<String>,

    /// Ignore words shorter than N characters
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Leave spaces out of character counts
    #[arg(long)]
    pub no_spaces: bool,

    /// Leave punctuation out of character counts
    #[arg(long)]
    pub no_punctuation: bool,
}

/// Build the frequency report, filling unset flags from the configuration.
fn frequency_report(text: &str, args: &FrequencyArgs, config: &Config) -> FrequencyReport {
    let analyzer = TextAnalyzer::new(text);
    let top_n = args.top.or(config.top_n);
    let case_sensitive = args.case.resolve(config);

    match args.kind {
        FrequencyKind::Chars => analyzer.char_frequency(&CharFrequencyOptions {
            case_sensitive,
            ignore_spaces: args.no_spaces,
            ignore_punctuation: args.no_punctuation,
            top_n,
        }),
        FrequencyKind::Words => {
            let mut exclude_words = config.exclude_words.clone();
            exclude_words.extend(args.exclude.iter().map(|w| w.trim().to_string()));
            analyzer.word_frequency(&WordFrequencyOptions {
                case_sensitive,
                min_length: args.min_length.or(config.min_word_length).unwrap_or(1),
                exclude_words,
                top_n,
            })
        }
    }
}

/// Print character or word frequencies.
#[instrument(name = "cmd_frequency", skip_all, fields(input = %args.input.label(), kind = ?args.kind))]
pub fn cmd_frequency(
    args: FrequencyArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(top = ?args.top, case = ?args.case, "executing frequency command");

    let text = read_input(&args.input, max_input_bytes)?;
    let report = frequency_report(&text, &args, config);

    if global_json {
        return print_json(&report);
    }

    let heading = match args.kind {
        FrequencyKind::Chars => "Character frequency",
        FrequencyKind::Words => "Word frequency",
    };
    print_frequency(&report, heading);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: FrequencyKind) -> FrequencyArgs {
        FrequencyArgs {
            kind,
            ..FrequencyArgs::default()
        }
    }

    #[test]
    fn words_are_case_folded_by_default() {
        let report = frequency_report("The the THE cat", &args(FrequencyKind::Words), &Config::default());
        assert_eq!(report.get("the"), 3);
        assert_eq!(report.most_common[0], ("the".to_string(), 3));
    }

    #[test]
    fn config_supplies_defaults() {
        let config = Config {
            top_n: Some(1),
            exclude_words: vec!["the".to_string()],
            ..Config::default()
        };
        let report = frequency_report("the cat the cat dog", &args(FrequencyKind::Words), &config);
        assert!(!report.contains("the"));
        assert_eq!(report.most_common, vec![("cat".to_string(), 2)]);
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            top_n: Some(1),
            ..Config::default()
        };
        let mut a = args(FrequencyKind::Words);
        a.top = Some(3);
        a.exclude = vec!["dog".to_string()];
        let report = frequency_report("a b c dog", &a, &config);
        assert_eq!(report.most_common.len(), 3);
        assert!(!report.contains("dog"));
    }

    #[test]
    fn case_insensitive_flag_beats_config() {
        let config = Config {
            case_sensitive: true,
            ..Config::default()
        };
        let report = frequency_report("The the", &args(FrequencyKind::Words), &config);
        assert_eq!(report.get("The"), 1);
        assert_eq!(report.get("the"), 1);

        let mut folded = args(FrequencyKind::Words);
        folded.case.case_insensitive = true;
        let report = frequency_report("The the", &folded, &config);
        assert_eq!(report.get("the"), 2);
        assert!(!report.contains("The"));
    }

    #[test]
    fn no_spaces_drops_spaces_from_chars() {
        let report = frequency_report("a a", &args(FrequencyKind::Chars), &Config::default());
        assert_eq!(report.get(" "), 1);

        let mut without = args(FrequencyKind::Chars);
        without.no_spaces = true;
        let report = frequency_report("a a", &without, &Config::default());
        assert_eq!(report.total_items, 2);
        assert!(!report.contains(" "));
    }

    #[test]
    fn min_length_filters_words() {
        let mut a = args(FrequencyKind::Words);
        a.min_length = Some(3);
        let report = frequency_report("a an the", &a, &Config::default());
        assert_eq!(report.total_items, 1);
    }
}
