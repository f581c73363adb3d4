use clap::{Parser, Subcommand};
use crs_relate_core::config::{CliConfigOverrides, OutputMode};
use std::path::PathBuf;

/// crs-relate - Relate geometries to the area of use of their declared CRS
#[derive(Parser, Debug)]
#[command(name = "crs-relate")]
#[command(about = "Relate WKT geometries to the area of use of their declared CRS", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration values given on the command line
    pub fn config_overrides(&self) -> CliConfigOverrides {
        let default_wkt = match &self.command {
            Commands::Relate(args) => args.default_wkt.clone(),
            _ => None,
        };

        CliConfigOverrides {
            default_wkt,
            output: if self.json { Some(OutputMode::Json) } else { None },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the DE-9IM relation between a CRS area of use and geometries
    Relate(RelateArgs),

    /// Show the area of use of a CRS
    Area(AreaArgs),

    /// Print the process description used for capability discovery
    Describe,

    /// Show effective configuration values and where they come from
    Config,
}

#[derive(Parser, Debug)]
pub struct RelateArgs {
    /// Declared CRS of the geometries (e.g., EPSG:2193)
    #[arg(long)]
    pub crs: Option<String>,

    /// WKT geometry; repeat for several geometries
    #[arg(long = "wkt", value_name = "WKT")]
    pub wkt: Vec<String>,

    /// Read the request from a JSON file instead ({"wkt": ..., "crs": ...})
    #[arg(long, value_name = "FILE", conflicts_with_all = ["crs", "wkt"])]
    pub input: Option<PathBuf>,

    /// Geometry used when no --wkt is given
    #[arg(long, value_name = "WKT")]
    pub default_wkt: Option<String>,
}

#[derive(Parser, Debug)]
pub struct AreaArgs {
    /// CRS identifier (e.g., EPSG:4326)
    #[arg(long)]
    pub crs: String,
}
