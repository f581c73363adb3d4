use crs_relate_core::config::ConfigSource;
use serde::Serialize;
use tabled::Tabled;

/// One row of the relate table
#[derive(Debug, Tabled)]
pub struct RelationRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Geometry")]
    pub geometry: String,
    #[tabled(rename = "DE-9IM")]
    pub de9im: String,
    #[tabled(rename = "Relationship")]
    pub relationship: &'static str,
}

/// Output for area command
#[derive(Debug, Serialize)]
pub struct AreaOutput {
    pub crs: String,
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub crosses_antimeridian: bool,
}

/// One configuration entry
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source", display_with = "display_source")]
    pub source: ConfigSource,
}

fn display_source(source: &ConfigSource) -> String {
    format!("{:?}", source)
}
