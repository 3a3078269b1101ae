//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for recommendation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with header, scores, and rationales
    Full,
    /// One recommendation per line
    Compact,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Parse a config-file format string ("full" | "compact" | "json").
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "full" => Some(OutputFormat::Full),
            "compact" => Some(OutputFormat::Compact),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// CLI arguments for prompt-compass
#[derive(Parser, Debug)]
#[command(name = "prompt-compass")]
#[command(author, version, about = "Recommends complementary search prompts for a domain")]
#[command(long_about = r#"
Prompt Compass suggests candidate search prompts you do not have yet.

Given a domain, the prompts you already use, and a catalog of tagged
candidate prompts, it ranks the candidates by how well their tags overlap
the domain's topic keywords, drops exact duplicates of your existing
prompts, and prints the best matches with a short rationale.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./compass.toml      Project-level config
3. ~/.config/prompt-compass/config.toml   Global config

Example:
  prompt-compass itstelepathic.com --prompts my-prompts.txt
  prompt-compass itstelepathic.com -e "Best CRMs of 2025" --limit 3
  prompt-compass --interactive
"#)]
pub struct Cli {
    /// Domain to recommend prompts for (matched case-insensitively)
    pub domain: Option<String>,

    /// Start interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// File with existing prompts, one per line ("-" reads stdin)
    #[arg(short, long, value_name = "PATH")]
    pub prompts: Option<PathBuf>,

    /// Existing prompt (can be specified multiple times)
    #[arg(short, long, value_name = "PROMPT")]
    pub existing: Vec<String>,

    /// Maximum number of suggestions (1-10)
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Path to a TOML catalog file (defaults to the built-in catalog)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// List the domains known to the catalog and exit
    #[arg(long)]
    pub list_domains: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress decorative output (defaults the format to compact)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_domain_and_flags() {
        let cli = Cli::try_parse_from([
            "prompt-compass",
            "itstelepathic.com",
            "-e",
            "Best CRMs of 2025",
            "-e",
            "Another prompt",
            "--limit",
            "3",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.domain.as_deref(), Some("itstelepathic.com"));
        assert_eq!(cli.existing.len(), 2);
        assert_eq!(cli.limit, Some(3));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(!cli.interactive);
    }

    #[test]
    fn output_defaults_to_unset() {
        let cli = Cli::try_parse_from(["prompt-compass", "example.com"]).unwrap();
        assert!(cli.output.is_none());
    }

    #[test]
    fn format_from_config_strings() {
        assert_eq!(OutputFormat::from_config("full"), Some(OutputFormat::Full));
        assert_eq!(
            OutputFormat::from_config("compact"),
            Some(OutputFormat::Compact)
        );
        assert_eq!(OutputFormat::from_config("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config("yaml"), None);
    }
}
