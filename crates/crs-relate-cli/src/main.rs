//! crs-relate CLI - Command-line interface
//!
//! Runs the `crs-extent` process locally, outside of any host.

mod cli;
mod commands;
mod errors;
mod output;
mod output_types;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use crs_relate_core::config::{LayeredConfig, OutputMode};
use crs_relate_core::RelateError;
use output::OutputWriter;

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            let output = OutputWriter::new(cli.json);
            return errors::report(&anyhow::Error::from(err), &output);
        }
    };

    let output = OutputWriter::new(config.output.value == OutputMode::Json);

    match commands::execute(cli.command, &config, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => errors::report(&err, &output),
    }
}

/// Defaults, then the config file, then the environment, then flags
fn load_config(cli: &Cli) -> crs_relate_core::Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = &cli.config {
        config = config.load_from_file(path)?;
    }
    let mut config = config.load_from_env();
    config.update_from_cli(cli.config_overrides());
    check_default_wkt(&config)?;

    tracing::debug!(
        output = ?config.output.value,
        overrides = config.areas.value.len(),
        "Loaded configuration"
    );

    Ok(config)
}

/// A configured default geometry must parse; otherwise it would only fail
/// later, on a request without `wkt`, looking like a client error.
fn check_default_wkt(config: &LayeredConfig) -> crs_relate_core::Result<()> {
    crs_relate_geo::parse::parse_wkt(&config.default_wkt.value).map_err(|e| {
        RelateError::ConfigInvalid {
            key: "default_wkt".to_string(),
            reason: format!("{} (from {:?})", e, config.default_wkt.source),
        }
    })?;
    Ok(())
}
