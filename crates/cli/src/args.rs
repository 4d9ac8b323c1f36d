//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not read `SPLUNK_*` variables; `ConfigLoader` owns the environment
//!   and the flags here are applied on top of it as overrides.

use clap::Parser;
use splunk_config::constants::{DEFAULT_LOG_DIR, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "splunk-fields")]
#[command(
    about = "Extract the field names of every Splunk sourcetype into a timestamped JSON file",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Environment:\n  SPLUNK_URL          Management URL, e.g. https://localhost:8089 (required)\n  SPLUNK_API_TOKEN    Bearer API token (required)\n  SPLUNK_TIMEOUT      Per-request timeout in seconds (default 30)\n  SPLUNK_SKIP_VERIFY  Skip TLS certificate verification (true/false)\n  RUST_LOG            Log filter (default info)\n"
)]
pub struct Cli {
    /// Base URL of the Splunk server (overrides SPLUNK_URL)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Per-request timeout in seconds (overrides SPLUNK_TIMEOUT)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long)]
    pub skip_verify: bool,

    /// Directory that receives one timestamped subdirectory per run
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Directory for log files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Also print the resulting JSON to stdout
    #[arg(long)]
    pub print: bool,
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
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["splunk-fields"]);
        assert_eq!(cli.url, None);
        assert_eq!(cli.timeout, None);
        assert!(!cli.skip_verify);
        assert!(!cli.print);
        assert_eq!(cli.output_dir, PathBuf::from("output"));
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "splunk-fields",
            "--url",
            "https://splunk:8089",
            "--timeout",
            "60",
            "--skip-verify",
            "--output-dir",
            "/tmp/out",
            "--log-dir",
            "/tmp/logs",
            "--print",
        ]);
        assert_eq!(cli.url.as_deref(), Some("https://splunk:8089"));
        assert_eq!(cli.timeout, Some(60));
        assert!(cli.skip_verify);
        assert!(cli.print);
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cli.log_dir, PathBuf::from("/tmp/logs"));
    }

    #[test]
    fn test_cli_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["splunk-fields", "--timeout", "soon"]).is_err());
    }
}
