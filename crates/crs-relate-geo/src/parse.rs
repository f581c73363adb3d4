//! WKT parsing into `geo` geometries.

use crs_relate_core::error::{RelateError, Result};
use geo::{CoordsIter, Geometry};
use wkt::TryFromWkt;

/// Parse a single WKT string.
pub fn parse_wkt(text: &str) -> Result<Geometry<f64>> {
    parse_wkt_at(0, text)
}

/// Parse a WKT string that sits at `index` in the request, so errors can
/// point back at it.
pub fn parse_wkt_at(index: usize, text: &str) -> Result<Geometry<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RelateError::InvalidWkt { index, reason: "empty geometry text".to_string() });
    }

    let geometry = Geometry::<f64>::try_from_wkt_str(text)
        .map_err(|e| RelateError::InvalidWkt { index, reason: e.to_string() })?;

    // Check for NaN or infinite coordinates
    if let Some(coord) = geometry.coords_iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(RelateError::InvalidWkt {
            index,
            reason: format!("Coordinates must be finite, found ({}, {})", coord.x, coord.y),
        });
    }

    Ok(geometry)
}

/// Parse every string, preserving order. Stops at the first malformed one.
pub fn parse_all<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Geometry<f64>>> {
    texts.iter().enumerate().map(|(index, text)| parse_wkt_at(index, text.as_ref())).collect()
}
