use crs_relate_core::models::{AreaOfUse, RelationRecord};
use geo::algorithm::coordinate_position::CoordPos;
use geo::algorithm::dimensions::Dimensions;
use geo::algorithm::relate::{IntersectionMatrix, Relate};
use geo::{coord, Geometry, Rect};

const POSITIONS: [CoordPos; 3] = [CoordPos::Inside, CoordPos::OnBoundary, CoordPos::Outside];

/// Axis-aligned rectangle covering an area of use.
///
/// Corners are normalized, so an area whose west edge lies east of its
/// east edge yields the same rectangle as its swapped bounds.
pub fn area_rectangle(area: &AreaOfUse) -> Rect<f64> {
    let (min_x, min_y, max_x, max_y) = area.bounds();
    Rect::new(coord! { x: min_x, y: min_y }, coord! { x: max_x, y: max_y })
}

/// Relation between an area rectangle (A) and a geometry (B).
#[derive(Debug)]
pub struct Relation {
    matrix: IntersectionMatrix,
    code: String,
}

impl Relation {
    /// Nine-character DE-9IM code, row-major over A's interior, boundary
    /// and exterior against B's
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn matrix(&self) -> &IntersectionMatrix {
        &self.matrix
    }

    /// The area of use contains the geometry
    pub fn contains(&self) -> bool {
        self.matrix.is_contains()
    }

    /// The area of use covers the geometry, boundary included
    pub fn covers(&self) -> bool {
        self.matrix.is_covers()
    }

    pub fn intersects(&self) -> bool {
        self.matrix.is_intersects()
    }

    pub fn disjoint(&self) -> bool {
        self.matrix.is_disjoint()
    }

    pub fn into_record(self) -> RelationRecord {
        RelationRecord::de9im(self.code)
    }
}

/// Compute the full relation between `area` and `geometry`
pub fn relate(area: &Rect<f64>, geometry: &Geometry<f64>) -> Relation {
    let matrix = area.relate(geometry);
    let code = matrix_code(&matrix);
    Relation { matrix, code }
}

/// DE-9IM code between `area` and `geometry`
pub fn de9im(area: &Rect<f64>, geometry: &Geometry<f64>) -> String {
    relate(area, geometry).code
}

/// Serialize a matrix as its nine-character code
pub fn matrix_code(matrix: &IntersectionMatrix) -> String {
    POSITIONS
        .iter()
        .flat_map(|a| POSITIONS.iter().map(move |b| dimension_char(matrix.get(*a, *b))))
        .collect()
}

fn dimension_char(dimension: Dimensions) -> char {
    match dimension {
        Dimensions::Empty => 'F',
        Dimensions::ZeroDimensional => '0',
        Dimensions::OneDimensional => '1',
        Dimensions::TwoDimensional => '2',
    }
}
