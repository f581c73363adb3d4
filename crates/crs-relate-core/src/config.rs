use crate::error::{RelateError, Result};
use crate::models::process::DEFAULT_WKT;
use crate::models::AreaOfUse;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

/// Layered configuration for crs-relate
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub default_wkt: ConfigValue<String>,
    pub output: ConfigValue<OutputMode>,
    /// Area-of-use overrides keyed by CRS identifier, `[west, south, east, north]`
    pub areas: ConfigValue<BTreeMap<String, [f64; 4]>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            default_wkt: ConfigValue::new(DEFAULT_WKT.to_string(), ConfigSource::Default),
            output: ConfigValue::new(OutputMode::Human, ConfigSource::Default),
            areas: ConfigValue::new(BTreeMap::new(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| RelateError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| RelateError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(default_wkt) = file_config.default_wkt {
            self.default_wkt.update(default_wkt, ConfigSource::File);
        }

        if let Some(output) = file_config.output {
            self.output.update(output, ConfigSource::File);
        }

        if let Some(areas) = file_config.areas {
            for (identifier, bounds) in &areas {
                validate_bounds(identifier, bounds)?;
            }
            self.areas.update(areas, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // CRS_RELATE_DEFAULT_WKT
        if let Ok(default_wkt) = env::var("CRS_RELATE_DEFAULT_WKT") {
            if default_wkt.trim().is_empty() {
                tracing::warn!("Ignoring empty CRS_RELATE_DEFAULT_WKT");
            } else {
                self.default_wkt.update(default_wkt, ConfigSource::Environment);
            }
        }

        // CRS_RELATE_OUTPUT
        if let Ok(output_str) = env::var("CRS_RELATE_OUTPUT") {
            match parse_output_mode(&output_str) {
                Ok(output) => self.output.update(output, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CRS_RELATE_OUTPUT value '{}': expected human or json",
                    output_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(default_wkt) = overrides.default_wkt {
            self.default_wkt.update(default_wkt, ConfigSource::Cli);
        }

        if let Some(output) = overrides.output {
            self.output.update(output, ConfigSource::Cli);
        }
    }

    /// Area-of-use overrides as domain values
    pub fn area_overrides(&self) -> Vec<(String, AreaOfUse)> {
        self.areas
            .value
            .iter()
            .map(|(identifier, bounds)| {
                (identifier.clone(), AreaOfUse::from_bounds(*bounds).with_name(identifier.clone()))
            })
            .collect()
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "default_wkt".to_string(),
            (self.default_wkt.value.clone(), self.default_wkt.source),
        );

        map.insert("output".to_string(), (format!("{:?}", self.output.value), self.output.source));

        let areas = if self.areas.value.is_empty() {
            "(none)".to_string()
        } else {
            self.areas.value.keys().cloned().collect::<Vec<_>>().join(", ")
        };
        map.insert("areas".to_string(), (areas, self.areas.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    default_wkt: Option<String>,
    output: Option<OutputMode>,
    areas: Option<BTreeMap<String, [f64; 4]>>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub default_wkt: Option<String>,
    pub output: Option<OutputMode>,
}

/// Parse output mode from string
pub fn parse_output_mode(s: &str) -> Result<OutputMode> {
    match s.to_lowercase().as_str() {
        "human" | "text" => Ok(OutputMode::Human),
        "json" => Ok(OutputMode::Json),
        _ => Err(RelateError::ConfigInvalid {
            key: "output".to_string(),
            reason: format!("Invalid output mode: {}. Use human or json", s),
        }),
    }
}

fn validate_bounds(identifier: &str, bounds: &[f64; 4]) -> Result<()> {
    let [west, south, east, north] = *bounds;
    let key = format!("areas.{}", identifier);

    if bounds.iter().any(|b| !b.is_finite()) {
        return Err(RelateError::ConfigInvalid {
            key,
            reason: "bounds must be finite numbers".to_string(),
        });
    }
    if !(-90.0..=90.0).contains(&south) || !(-90.0..=90.0).contains(&north) || south > north {
        return Err(RelateError::ConfigInvalid {
            key,
            reason: format!("latitudes must satisfy -90 <= south <= north <= 90, got {} and {}", south, north),
        });
    }
    if !(-180.0..=180.0).contains(&west) || !(-180.0..=180.0).contains(&east) {
        return Err(RelateError::ConfigInvalid {
            key,
            reason: format!("longitudes must lie within [-180, 180], got {} and {}", west, east),
        });
    }
    Ok(())
}
