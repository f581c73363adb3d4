//! Relation evaluator: CRS area of use against candidate geometries.

use crs_relate_core::error::Result;
use crs_relate_core::models::{AreaOfUse, RelationRecord, WktInput};
use crs_relate_core::ports::AreaOfUseResolver;

use crate::parse::parse_all;
use crate::registry::{normalize_identifier, ProjRegistry};
use crate::relate::{area_rectangle, relate, Relation};

/// Evaluates DE-9IM relations between the area of use of a declared CRS and
/// one or more WKT geometries.
///
/// The evaluator holds no per-request state; evaluating the same inputs
/// twice yields the same output.
#[derive(Debug, Clone, Default)]
pub struct RelationEvaluator<R = ProjRegistry> {
    resolver: R,
}

impl<R: AreaOfUseResolver> RelationEvaluator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolve the area of use of a CRS identifier
    pub fn area_of_use(&self, crs: &str) -> Result<AreaOfUse> {
        let crs = normalize_identifier(crs)?;
        self.resolver.resolve(crs)
    }

    /// One record per geometry, in input order.
    ///
    /// Every geometry is parsed before any relation is computed, so a
    /// malformed string rejects the whole request.
    pub fn evaluate(&self, crs: &str, wkt: &WktInput) -> Result<Vec<RelationRecord>> {
        let (_, relations) = self.relations(crs, wkt)?;
        Ok(relations.into_iter().map(Relation::into_record).collect())
    }

    /// Like [`evaluate`](Self::evaluate), keeping the full intersection
    /// matrices along with the area of use they were computed against.
    /// The CRS is resolved once.
    pub fn relations(&self, crs: &str, wkt: &WktInput) -> Result<(AreaOfUse, Vec<Relation>)> {
        let geometries = parse_all(wkt.as_slice())?;
        let area = self.area_of_use(crs)?;
        let rectangle = area_rectangle(&area);

        tracing::info!(
            crs = crs.trim(),
            geometries = geometries.len(),
            crosses_antimeridian = area.crosses_antimeridian(),
            "Evaluating relations against area of use"
        );

        let relations = geometries
            .iter()
            .enumerate()
            .map(|(index, geometry)| {
                let relation = relate(&rectangle, geometry);
                tracing::debug!(index, de9im = relation.code(), "Computed relation");
                relation
            })
            .collect();

        Ok((area, relations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryRegistry;
    use crs_relate_core::error::RelateError;
    use std::cell::Cell;

    /// Counts how often the wrapped registry is asked for an area
    struct CountingRegistry {
        inner: MemoryRegistry,
        calls: Cell<usize>,
    }

    impl AreaOfUseResolver for CountingRegistry {
        fn resolve(&self, identifier: &str) -> Result<AreaOfUse> {
            self.calls.set(self.calls.get() + 1);
            self.inner.resolve(identifier)
        }
    }

    fn evaluator() -> RelationEvaluator<MemoryRegistry> {
        let registry = MemoryRegistry::new()
            .with_area("EPSG:4326", AreaOfUse::new(-180.0, -90.0, 180.0, 90.0))
            .with_area("EPSG:2193", AreaOfUse::new(166.37, -47.33, 178.63, -34.1));
        RelationEvaluator::new(registry)
    }

    #[test]
    fn test_point_inside_area() {
        let records = evaluator().evaluate("EPSG:2193", &"POINT (174.77 -41.29)".into()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "de-9im");
        assert_ne!(&records[0].value[0..1], "F");
    }

    #[test]
    fn test_point_outside_area() {
        let records = evaluator().evaluate("EPSG:2193", &"POINT (151.21 -33.87)".into()).unwrap();

        assert_eq!(&records[0].value[0..1], "F");
        assert_eq!(&records[0].value[1..2], "F");
    }

    #[test]
    fn test_many_inputs_keep_order() {
        let input = WktInput::Many(vec![
            "POINT (174.77 -41.29)".to_string(),
            "POINT (151.21 -33.87)".to_string(),
            "POINT (172.64 -43.53)".to_string(),
        ]);

        let records = evaluator().evaluate("EPSG:2193", &input).unwrap();
        let values: Vec<&str> = records.iter().map(|r| r.value.as_str()).collect();

        assert_eq!(values, vec!["0F2FF1FF2", "FF2FF10F2", "0F2FF1FF2"]);
    }

    #[test]
    fn test_unknown_crs() {
        let err = evaluator().evaluate("WPSG:4326", &"POINT (0 0)".into()).unwrap_err();
        assert!(matches!(err, RelateError::UnknownCrs { .. }));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_malformed_wkt_rejects_whole_request() {
        let input = WktInput::Many(vec!["POINT (0 0)".to_string(), "POINT (0".to_string()]);
        let err = evaluator().evaluate("EPSG:4326", &input).unwrap_err();
        assert!(matches!(err, RelateError::InvalidWkt { index: 1, .. }));
    }

    #[test]
    fn test_crs_whitespace_is_stripped() {
        let records = evaluator().evaluate("  EPSG:4326\n", &"POINT (0 0)".into()).unwrap();
        assert_eq!(records[0].value, "0F2FF1FF2");
    }

    #[test]
    fn test_relations_expose_predicates() {
        let (area, relations) = evaluator()
            .relations("EPSG:2193", &WktInput::One("POINT (174.77 -41.29)".to_string()))
            .unwrap();
        assert!(relations[0].contains());
        assert_eq!(area, AreaOfUse::new(166.37, -47.33, 178.63, -34.1));
    }

    #[test]
    fn test_relations_resolve_crs_once() {
        let registry = CountingRegistry {
            inner: MemoryRegistry::new()
                .with_area("EPSG:4326", AreaOfUse::new(-180.0, -90.0, 180.0, 90.0)),
            calls: Cell::new(0),
        };
        let evaluator = RelationEvaluator::new(&registry);
        let input = WktInput::Many(vec!["POINT (0 0)".to_string(), "POINT (1 1)".to_string()]);

        let (area, relations) = evaluator.relations("EPSG:4326", &input).unwrap();

        assert_eq!(relations.len(), 2);
        assert_eq!(area.east, 180.0);
        assert_eq!(registry.calls.get(), 1);
    }

    #[test]
    fn test_malformed_wkt_skips_resolution() {
        let registry = CountingRegistry { inner: MemoryRegistry::new(), calls: Cell::new(0) };
        let evaluator = RelationEvaluator::new(&registry);

        assert!(evaluator.evaluate("EPSG:4326", &"POINT (0".into()).is_err());
        assert_eq!(registry.calls.get(), 0);
    }
}
