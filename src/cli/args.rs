//! CLI argument definitions.

use crate::constants::MAX_THRESHOLD_SECS;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Assign event IDs to camera-trap observation records.
#[derive(Debug, Parser)]
#[command(name = "camevents")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input observations CSV file (default: config or output/observations.csv).
    pub input: Option<PathBuf>,

    /// Common options for a run.
    #[command(flatten)]
    pub run: RunArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for an event ID assignment run.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunArgs {
    /// Output file (default: overwrite the input, requires --in-place).
    #[arg(short, long, env = "CAMEVENTS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Gap threshold in seconds between observations in the same event.
    #[arg(short = 't', long, value_parser = parse_threshold, env = "CAMEVENTS_THRESHOLD")]
    pub threshold: Option<f64>,

    /// Write a per-event summary CSV to this path.
    #[arg(short = 's', long, env = "CAMEVENTS_SUMMARY")]
    pub summary: Option<PathBuf>,

    /// Write a JSON run report (row counts and excluded rows) to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Replace event IDs already present in the input.
    #[arg(long)]
    pub overwrite_ids: bool,

    /// Allow the output to overwrite the input file.
    #[arg(long)]
    pub in_place: bool,

    /// Skip the UTF-8 BOM at the start of CSV output.
    #[arg(long)]
    pub no_csv_bom: bool,

    /// Suppress the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress non-warning output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse and validate a gap threshold value.
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!(
            "threshold must be a positive number of seconds, got {value}"
        ));
    }
    if value > MAX_THRESHOLD_SECS {
        return Err(format!(
            "threshold must be at most {MAX_THRESHOLD_SECS} seconds, got {value}"
        ));
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_valid() {
        assert_eq!(parse_threshold("180").ok(), Some(180.0));
        assert_eq!(parse_threshold("0.5").ok(), Some(0.5));
        assert_eq!(parse_threshold("3600").ok(), Some(3600.0));
    }

    #[test]
    fn test_parse_threshold_invalid() {
        assert!(parse_threshold("0").is_err());
        assert!(parse_threshold("-1").is_err());
        assert!(parse_threshold("inf").is_err());
        assert!(parse_threshold("nan").is_err());
        assert!(parse_threshold("abc").is_err());
        assert!(parse_threshold("99999999999").is_err());
    }

    #[test]
    fn test_cli_parse_simple() {
        let cli = Cli::try_parse_from(["camevents", "observations.csv"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("observations.csv")));
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "camevents",
            "observations.csv",
            "-o",
            "out.csv",
            "-t",
            "300",
            "-q",
        ]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(cli.run.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.run.threshold, Some(300.0));
        assert!(cli.run.quiet);
    }

    #[test]
    fn test_cli_parse_policy_flags() {
        let cli = Cli::try_parse_from([
            "camevents",
            "observations.csv",
            "--in-place",
            "--overwrite-ids",
        ])
        .unwrap();
        assert!(cli.run.in_place);
        assert!(cli.run.overwrite_ids);
    }

    #[test]
    fn test_cli_parse_summary_and_report() {
        let cli = Cli::try_parse_from([
            "camevents",
            "observations.csv",
            "-o",
            "out.csv",
            "-s",
            "events.csv",
            "--report",
            "report.json",
        ])
        .unwrap();
        assert_eq!(cli.run.summary, Some(PathBuf::from("events.csv")));
        assert_eq!(cli.run.report, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_cli_rejects_bad_threshold() {
        let cli = Cli::try_parse_from(["camevents", "observations.csv", "-t", "0"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["camevents", "config", "show"]);
        assert!(cli.is_ok());
    }
}
