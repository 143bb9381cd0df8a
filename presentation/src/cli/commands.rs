//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for survey-wizard
#[derive(Parser, Debug)]
#[command(name = "survey-wizard")]
#[command(author, version, about = "Question wizard - collect answers one question at a time")]
#[command(long_about = r#"
Survey Wizard walks a respondent through a fixed question catalog, one
question per screen, and posts the collected answers to a form ingestion
endpoint as a single multipart request.

Without --answer it runs an interactive wizard. With one or more
--answer flags it submits the given answers directly and exits.

Configuration files are loaded from (in priority order):
1. SURVEY_WIZARD_* environment variables
2. --config <path>         Explicit config file
3. ./survey-wizard.toml    Project-level config
4. ~/.config/survey-wizard/config.toml   Global config

Example:
  survey-wizard
  survey-wizard --endpoint https://forms.example.com/ingest
  survey-wizard -a say="Love it" -a think="Solid" --dry-run
"#)]
pub struct Cli {
    /// Answer one question directly (can be specified multiple times)
    #[arg(short, long, value_name = "ID=TEXT", value_parser = parse_answer)]
    pub answer: Vec<(String, String)>,

    /// Form ingestion endpoint (overrides the configured one)
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Log the submission instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Show submission failures to the respondent
    #[arg(long)]
    pub show_failures: bool,

    /// Path of the JSONL delivery log (overrides the configured one)
    #[arg(long, value_name = "PATH")]
    pub delivery_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Parse an `id=text` answer argument.
pub fn parse_answer(s: &str) -> Result<(String, String), String> {
    let (id, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=TEXT, got '{s}'"))?;
    if id.trim().is_empty() {
        return Err(format!("empty question id in '{s}'"));
    }
    Ok((id.trim().to_string(), text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(
            parse_answer("say=Love it"),
            Ok(("say".to_string(), "Love it".to_string()))
        );
        // Only the first '=' separates id and text
        assert_eq!(
            parse_answer("think=a=b"),
            Ok(("think".to_string(), "a=b".to_string()))
        );
        assert_eq!(
            parse_answer("feel="),
            Ok(("feel".to_string(), String::new()))
        );
        assert!(parse_answer("no-separator").is_err());
        assert!(parse_answer("=text").is_err());
    }
}
