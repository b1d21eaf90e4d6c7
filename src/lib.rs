//! Camevents - event ID assignment for camera-trap observations.
//!
//! Groups observation records by deployment, observation type, and
//! scientific name, cuts each group into time-gap separated events, and
//! writes the records back with a deterministic `eventID` per event.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod observations;
pub mod output;
pub mod pipeline;
pub mod utils;

use clap::Parser;
use cli::{Cli, Command, RunArgs};
use config::{Config, config_file_path, load_default_config, save_default_config, validate_config};
use constants::DEFAULT_INPUT;
use events::ExistingIdPolicy;
use pipeline::{RunOptions, run_pipeline};
use std::path::PathBuf;

pub use error::{Error, Result};

/// Main entry point for the camevents CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.run.verbose, cli.run.quiet);

    // Load configuration
    let config = load_default_config()?;

    // Handle subcommands; config inspection must stay usable even when the
    // configured values are bad.
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    validate_config(&config)?;
    assign_events(cli.input, &cli.run, &config)
}

/// Resolve options from CLI and config, then run the pipeline.
fn assign_events(input: Option<PathBuf>, args: &RunArgs, config: &Config) -> Result<()> {
    let input = input
        .or_else(|| config.defaults.input.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    // No destination means overwriting the source, which still has to be
    // confirmed with --in-place.
    let output = args
        .output
        .clone()
        .or_else(|| config.defaults.output.clone())
        .unwrap_or_else(|| input.clone());

    let threshold_secs = args.threshold.unwrap_or(config.defaults.threshold_secs);

    let policy = if args.overwrite_ids {
        ExistingIdPolicy::Overwrite
    } else {
        ExistingIdPolicy::Fail
    };

    let options = RunOptions {
        input,
        output,
        summary: args.summary.clone(),
        report: args.report.clone(),
        threshold_secs,
        policy,
        in_place: args.in_place,
        csv_bom: config.defaults.csv_bom && !args.no_csv_bom,
        progress: !args.quiet && !args.no_progress,
    };

    let report = run_pipeline(&options)?;
    report.log();
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
