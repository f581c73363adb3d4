//! Command implementations

mod area;
mod config;
mod describe;
mod relate;

use crate::cli::Commands;
use crate::output::OutputWriter;
use anyhow::Result;
use crs_relate_core::config::LayeredConfig;
use crs_relate_geo::{LayeredRegistry, MemoryRegistry};

/// Execute a CLI command
pub fn execute(command: Commands, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    match command {
        Commands::Relate(args) => relate::execute(args, config, output),
        Commands::Area(args) => area::execute(args, config, output),
        Commands::Describe => describe::execute(config, output),
        Commands::Config => config::execute(config, output),
    }
}

/// PROJ-backed registry with the configured overrides in front
fn registry(config: &LayeredConfig) -> LayeredRegistry {
    let overrides: MemoryRegistry = config.area_overrides().into_iter().collect();
    LayeredRegistry::over_proj(overrides)
}
