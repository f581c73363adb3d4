//! Describe command implementation

use crate::output::OutputWriter;
use anyhow::Result;
use crs_relate_core::config::LayeredConfig;
use crs_relate_core::ports::Processor;
use crs_relate_geo::CrsExtentProcessor;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let processor =
        CrsExtentProcessor::new(super::registry(config)).with_default_wkt(&config.default_wkt.value);
    tracing::debug!(process = %processor, "Describing process");
    output.result(processor.metadata())
}
