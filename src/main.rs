//! Command line entry point for race-rating
//!
//! Reads a race field as JSON, runs the rating engine over it and writes the
//! outcome as JSON to stdout. File handling and formatting live here; the
//! library only ever sees validated competitor records.

use anyhow::{Context, Result};
use clap::Parser;
use race_rating::config::AppConfig;
use race_rating::{CompetitorInput, RaceOutcome, RatingEngine, RatingError};
use std::io::Read;
use std::path::PathBuf;
use tracing::{error, info};

/// Race Rating - post-race rating adjustments for a field of competitors
#[derive(Parser)]
#[command(
    name = "race-rating",
    version,
    about = "Compute post-race rating changes using a strength-of-field model",
    long_about = "Race Rating reads a JSON array of competitors (id, position, prior_rating, \
                 did_not_start), computes each competitor's expected score against the field \
                 and prints rating deltas, new ratings and the strength of field as JSON."
)]
struct Args {
    /// Race results file
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "JSON file with the race field (reads stdin when omitted)"
    )]
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Sensitivity constant override
    #[arg(short, long, value_name = "K", help = "Override the sensitivity constant")]
    sensitivity: Option<f64>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if let Some(sensitivity) = args.sensitivity {
        config.rating.sensitivity_constant = sensitivity;
    }

    race_rating::config::validate_config(&config)?;
    Ok(config)
}

/// Read the race field from a file or stdin
fn read_field(input: Option<&PathBuf>) -> Result<Vec<CompetitorInput>> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read race file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read race field from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).map_err(|e| {
        RatingError::InputError {
            message: e.to_string(),
        }
        .into()
    })
}

fn run(args: &Args, config: &AppConfig) -> Result<RaceOutcome> {
    let field = read_field(args.input.as_ref())?;
    info!(
        "Rating {} competitors with sensitivity constant {}",
        field.len(),
        config.rating.sensitivity_constant
    );

    let engine = RatingEngine::from_config(field, &config.rating)?;
    let outcome = engine.compute()?;

    info!(
        "Strength of field {} (race constant {})",
        outcome.field.strength_of_field, outcome.field.rating_scale
    );
    Ok(outcome)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let outcome = match run(&args, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Rating failed: {:#}", e);
            std::process::exit(1);
        }
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{}", rendered);

    Ok(())
}
