// src/cli.rs
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::Config;
use crate::output::OutputFormat;

/// ct-subfind: subdomain discovery from Certificate Transparency
///
/// Looks up each root domain on crt.sh, collects names from wildcard
/// certificates and prints the in-scope ones, sorted and deduplicated.
#[derive(Parser, Debug, Clone)]
#[command(name = "ct-subfind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // ===== Input & Configuration =====
    /// File containing root domains (one per line). If not provided, input can be piped.
    #[arg(short = 'l', long = "list")]
    pub list: Option<PathBuf>,

    /// Path to optional TOML config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    // ===== Output =====
    /// Write results to file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output results as a JSON array
    #[arg(long = "json")]
    pub json: bool,

    /// Output results as CSV
    #[arg(long = "csv")]
    pub csv: bool,

    // ===== Lookup =====
    /// Override crt.sh endpoint URL from config
    #[arg(long = "endpoint")]
    pub endpoint: Option<String>,

    /// Override HTTP request timeout in seconds
    #[arg(long = "timeout")]
    pub timeout: Option<u64>,

    /// Override wait before retrying a domain, in seconds
    #[arg(long = "retry-delay")]
    pub retry_delay: Option<u64>,

    /// Override wait between domains, in seconds
    #[arg(long = "pace-delay")]
    pub pace_delay: Option<u64>,

    // ===== Display & Logging =====
    /// Disable progress indicator
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Verbose logging (set log level to debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet logging (set log level to warn)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Validate flag combinations and return errors for invalid usage
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.json && self.csv {
            anyhow::bail!("Cannot specify multiple output formats. Choose one of: --json or --csv");
        }

        if self.verbose && self.quiet {
            anyhow::bail!("Cannot specify both --verbose and --quiet");
        }

        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Plain
        }
    }

    /// Log level forced by flags, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("warn")
        } else {
            None
        }
    }

    /// Apply flag overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref endpoint) = self.endpoint {
            config.crtsh.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.crtsh.timeout_secs = Some(timeout);
        }
        if let Some(delay) = self.retry_delay {
            config.retry.retry_delay_secs = delay;
        }
        if let Some(delay) = self.pace_delay {
            config.retry.pace_delay_secs = delay;
        }
        if let Some(level) = self.log_level_override() {
            config.logging.level = level.to_string();
        }
    }

    /// Rendered usage text, for printing alongside input errors
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ct-subfind"]);
        assert_eq!(cli.list, None);
        assert_eq!(cli.config, None);
        assert_eq!(cli.output_format(), OutputFormat::Plain);
        assert_eq!(cli.log_level_override(), None);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_list_flag() {
        let cli = Cli::parse_from(["ct-subfind", "-l", "roots.txt"]);
        assert_eq!(cli.list, Some(PathBuf::from("roots.txt")));

        let cli = Cli::parse_from(["ct-subfind", "--list", "other.txt"]);
        assert_eq!(cli.list, Some(PathBuf::from("other.txt")));
    }

    #[test]
    fn test_help_flag_is_display_help() {
        let err = Cli::try_parse_from(["ct-subfind", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        // Help exits successfully
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_json_output_format() {
        let cli = Cli::parse_from(["ct-subfind", "--json"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_csv_output_format() {
        let cli = Cli::parse_from(["ct-subfind", "--csv"]);
        assert_eq!(cli.output_format(), OutputFormat::Csv);
    }

    #[test]
    fn test_multiple_formats_invalid() {
        let cli = Cli::parse_from(["ct-subfind", "--json", "--csv"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_verbose_and_quiet_invalid() {
        let cli = Cli::parse_from(["ct-subfind", "--verbose", "--quiet"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected_after_overrides() {
        let cli = Cli::parse_from(["ct-subfind", "--timeout", "0"]);
        assert!(cli.validate().is_ok());

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_level_override() {
        let cli = Cli::parse_from(["ct-subfind", "-v"]);
        assert_eq!(cli.log_level_override(), Some("debug"));

        let cli = Cli::parse_from(["ct-subfind", "-q"]);
        assert_eq!(cli.log_level_override(), Some("warn"));
    }

    #[test]
    fn test_delay_overrides() {
        let cli = Cli::parse_from(["ct-subfind", "--retry-delay", "5", "--pace-delay", "0"]);
        assert_eq!(cli.retry_delay, Some(5));
        assert_eq!(cli.pace_delay, Some(0));
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from([
            "ct-subfind",
            "--endpoint", "http://127.0.0.1:9000/",
            "--timeout", "30",
            "--retry-delay", "2",
            "--pace-delay", "0",
            "-q",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.crtsh.endpoint, "http://127.0.0.1:9000/");
        assert_eq!(config.crtsh.timeout_secs, Some(30));
        assert_eq!(config.retry.retry_delay_secs, 2);
        assert_eq!(config.retry.pace_delay_secs, 0);
        assert_eq!(config.retry.retries, 1);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let cli = Cli::parse_from(["ct-subfind"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.crtsh.endpoint, "https://crt.sh/");
        assert_eq!(config.retry.retry_delay_secs, 20);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_help_text_mentions_list_flag() {
        let help = Cli::help_text();
        assert!(help.contains("--list"));
        assert!(help.contains("-h"));
    }
}
