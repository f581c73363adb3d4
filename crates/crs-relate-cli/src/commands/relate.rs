//! Relate command implementation

use crate::cli::RelateArgs;
use crate::output::OutputWriter;
use crate::output_types::RelationRow;
use anyhow::{Context, Result};
use crs_relate_core::config::LayeredConfig;
use crs_relate_core::models::{ProcessInputs, WktInput};
use crs_relate_core::ports::Processor;
use crs_relate_geo::{CrsExtentProcessor, Relation};
use std::fs;
use std::path::Path;

const GEOMETRY_COLUMN_WIDTH: usize = 48;

pub fn execute(args: RelateArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let inputs = match &args.input {
        Some(path) => read_request(path)?,
        None => ProcessInputs { wkt: wkt_input(args.wkt), crs: args.crs },
    };

    let processor =
        CrsExtentProcessor::new(super::registry(config)).with_default_wkt(&config.default_wkt.value);

    if output.is_json() {
        let records = processor.execute(inputs)?;
        return output.result(records);
    }

    if inputs.wkt.is_none() {
        output.info(format!("No geometry given; using default {}", processor.default_wkt()));
    }

    let (crs, wkt) = processor.prepare(inputs)?;
    let (area, relations) = processor.evaluator().relations(&crs, &wkt)?;

    output.section(format!("Area of use of {}", crs.trim()));
    if let Some(name) = &area.name {
        output.kv("Name", name);
    }
    output.kv(
        "Bounds",
        format!(
            "{}, {}, {}, {} (west, south, east, north)",
            area.west, area.south, area.east, area.north
        ),
    );

    output.section("Relations");
    let rows = wkt
        .as_slice()
        .iter()
        .zip(&relations)
        .enumerate()
        .map(|(index, (text, relation))| RelationRow {
            index,
            geometry: abbreviate(text.trim(), GEOMETRY_COLUMN_WIDTH),
            de9im: relation.code().to_string(),
            relationship: describe(relation),
        })
        .collect();
    output.table(rows);

    Ok(())
}

/// Read a request body from a JSON file
fn read_request(path: &Path) -> Result<ProcessInputs> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let body: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Request file {} is not valid JSON", path.display()))?;
    Ok(ProcessInputs::from_json(body)?)
}

fn wkt_input(mut wkts: Vec<String>) -> Option<WktInput> {
    match wkts.len() {
        0 => None,
        1 => wkts.pop().map(WktInput::One),
        _ => Some(WktInput::Many(wkts)),
    }
}

fn describe(relation: &Relation) -> &'static str {
    if relation.contains() {
        "within area of use"
    } else if relation.covers() {
        "within, touching the edge"
    } else if relation.intersects() {
        "partly outside"
    } else {
        "outside area of use"
    }
}

fn abbreviate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let head: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", head)
}
