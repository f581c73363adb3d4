//! The `crs-extent` process, as loaded by a host.

use std::fmt;

use crs_relate_core::error::{RelateError, Result};
use crs_relate_core::models::{
    ProcessInputs, ProcessMetadata, RelationRecord, WktInput, DEFAULT_WKT,
};
use crs_relate_core::ports::{AreaOfUseResolver, Processor};

use crate::evaluator::RelationEvaluator;
use crate::registry::ProjRegistry;

/// Validates geometries against the area of use of their declared CRS.
pub struct CrsExtentProcessor<R = ProjRegistry> {
    metadata: ProcessMetadata,
    evaluator: RelationEvaluator<R>,
}

impl CrsExtentProcessor<ProjRegistry> {
    /// Processor backed by the PROJ database
    pub fn with_proj() -> Self {
        Self::new(ProjRegistry)
    }
}

impl<R: AreaOfUseResolver> CrsExtentProcessor<R> {
    pub fn new(resolver: R) -> Self {
        Self { metadata: ProcessMetadata::crs_extent(), evaluator: RelationEvaluator::new(resolver) }
    }

    /// Replace the geometry used when a request carries no `wkt` input.
    ///
    /// The new default is written into the metadata, which is what hosts
    /// read, and is also what [`default_wkt`](Self::default_wkt) returns.
    pub fn with_default_wkt(mut self, wkt: impl Into<String>) -> Self {
        self.metadata.set_default_value("wkt", wkt);
        self
    }

    /// Geometry applied when a request carries no `wkt` input
    pub fn default_wkt(&self) -> &str {
        self.metadata.default_value("wkt").unwrap_or(DEFAULT_WKT)
    }

    pub fn evaluator(&self) -> &RelationEvaluator<R> {
        &self.evaluator
    }

    /// Fill in defaults and check required inputs
    pub fn prepare(&self, inputs: ProcessInputs) -> Result<(String, WktInput)> {
        let crs = inputs.crs.ok_or_else(|| RelateError::MissingInput { name: "crs".to_string() })?;
        let wkt = inputs.wkt.unwrap_or_else(|| WktInput::One(self.default_wkt().to_string()));

        if wkt.is_empty() {
            return Err(RelateError::MissingInput { name: "wkt".to_string() });
        }

        Ok((crs, wkt))
    }
}

impl<R: AreaOfUseResolver> Processor for CrsExtentProcessor<R> {
    fn metadata(&self) -> &ProcessMetadata {
        &self.metadata
    }

    fn execute(&self, inputs: ProcessInputs) -> Result<Vec<RelationRecord>> {
        let (crs, wkt) = self.prepare(inputs)?;
        self.evaluator.evaluate(&crs, &wkt)
    }
}

impl<R> fmt::Display for CrsExtentProcessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<CrsExtentProcessor> {}", self.metadata.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryRegistry;
    use crs_relate_core::models::AreaOfUse;

    fn processor() -> CrsExtentProcessor<MemoryRegistry> {
        CrsExtentProcessor::new(
            MemoryRegistry::new().with_area("EPSG:4326", AreaOfUse::new(-180.0, -90.0, 180.0, 90.0)),
        )
    }

    #[test]
    fn test_missing_wkt_uses_default() {
        let inputs = ProcessInputs { wkt: None, crs: Some("EPSG:4326".to_string()) };
        let records = processor().execute(inputs).unwrap();

        // The default multipoint lies well inside the world extent
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, "0F2FF1FF2");
    }

    #[test]
    fn test_missing_crs_is_rejected() {
        let inputs = ProcessInputs { wkt: Some("POINT (0 0)".into()), crs: None };
        let err = processor().execute(inputs).unwrap_err();
        assert!(matches!(err, RelateError::MissingInput { ref name } if name == "crs"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_empty_wkt_list_is_rejected() {
        let inputs = ProcessInputs::new("EPSG:4326", WktInput::Many(vec![]));
        let err = processor().execute(inputs).unwrap_err();
        assert!(matches!(err, RelateError::MissingInput { ref name } if name == "wkt"));
    }

    #[test]
    fn test_custom_default_wkt() {
        let processor = processor().with_default_wkt("POINT (200 0)");
        let records = processor
            .execute(ProcessInputs { wkt: None, crs: Some("EPSG:4326".to_string()) })
            .unwrap();
        assert_eq!(records[0].value, "FF2FF10F2");
    }

    #[test]
    fn test_custom_default_wkt_is_advertised() {
        let processor = processor().with_default_wkt("POINT (200 0)");

        assert_eq!(processor.default_wkt(), "POINT (200 0)");
        assert_eq!(processor.metadata().default_value("wkt"), Some(processor.default_wkt()));

        // Running the advertised default gives the same result as omitting wkt
        let advertised = processor.metadata().default_value("wkt").unwrap().to_string();
        let explicit = processor.execute(ProcessInputs::new("EPSG:4326", advertised)).unwrap();
        let implicit = processor
            .execute(ProcessInputs { wkt: None, crs: Some("EPSG:4326".to_string()) })
            .unwrap();
        assert_eq!(explicit, implicit);
    }

    #[test]
    fn test_display() {
        assert_eq!(processor().to_string(), "<CrsExtentProcessor> crs-extent");
        assert_eq!(processor().id(), "crs-extent");
    }
}
