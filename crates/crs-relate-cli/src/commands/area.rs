//! Area command implementation

use crate::cli::AreaArgs;
use crate::output::OutputWriter;
use crate::output_types::AreaOutput;
use anyhow::Result;
use crs_relate_core::config::LayeredConfig;
use crs_relate_geo::RelationEvaluator;

pub fn execute(args: AreaArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let evaluator = RelationEvaluator::new(super::registry(config));
    let area = evaluator.area_of_use(&args.crs)?;

    if output.is_json() {
        return output.result(AreaOutput {
            crs: args.crs.trim().to_string(),
            west: area.west,
            south: area.south,
            east: area.east,
            north: area.north,
            crosses_antimeridian: area.crosses_antimeridian(),
            name: area.name,
        });
    }

    output.section(format!("Area of use of {}", args.crs.trim()));
    if let Some(name) = &area.name {
        output.kv("Name", name);
    }
    output.kv("West", area.west);
    output.kv("South", area.south);
    output.kv("East", area.east);
    output.kv("North", area.north);
    if area.crosses_antimeridian() {
        output.kv("Note", "area crosses the antimeridian");
    }

    Ok(())
}
