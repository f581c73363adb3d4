//! Area of use of a coordinate reference system.

use serde::{Deserialize, Serialize};

/// Rectangular area of use, in decimal degrees, as published by the
/// authority that defines a CRS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaOfUse {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AreaOfUse {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self { west, south, east, north, name: None }
    }

    /// Build from `[west, south, east, north]`
    pub fn from_bounds(bounds: [f64; 4]) -> Self {
        let [west, south, east, north] = bounds;
        Self::new(west, south, east, north)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Bounds ordered as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.west, self.south, self.east, self.north)
    }

    /// True when the area spans the antimeridian (west edge east of the east edge).
    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// True when every bound is a finite number.
    pub fn is_finite(&self) -> bool {
        self.west.is_finite()
            && self.south.is_finite()
            && self.east.is_finite()
            && self.north.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_order() {
        let area = AreaOfUse::new(166.37, -47.33, 178.63, -34.1);
        assert_eq!(area.bounds(), (166.37, -47.33, 178.63, -34.1));
        assert!(!area.crosses_antimeridian());
    }

    #[test]
    fn test_antimeridian() {
        let area = AreaOfUse::from_bounds([160.6, -55.95, -171.2, -25.88]);
        assert!(area.crosses_antimeridian());
    }

    #[test]
    fn test_name_is_optional_in_json() {
        let area: AreaOfUse =
            serde_json::from_str(r#"{"west":-180,"south":-90,"east":180,"north":90}"#).unwrap();
        assert_eq!(area.name, None);
        assert!(area.is_finite());

        let json = serde_json::to_value(area.with_name("World")).unwrap();
        assert_eq!(json["name"], "World");
    }
}
