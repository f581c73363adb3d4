//! Area-of-use registries
//!
//! [`ProjRegistry`] answers from the PROJ database. [`MemoryRegistry`] holds a
//! fixed table, and [`LayeredRegistry`] checks a table before falling back
//! to another resolver.

use std::collections::HashMap;

use crs_relate_core::error::{RelateError, Result};
use crs_relate_core::models::AreaOfUse;
use crs_relate_core::ports::AreaOfUseResolver;
use proj::Proj;

/// Strip surrounding whitespace and reject blank identifiers.
pub fn normalize_identifier(identifier: &str) -> Result<&str> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Err(RelateError::UnknownCrs {
            identifier: identifier.to_string(),
            reason: "empty CRS identifier".to_string(),
        });
    }
    Ok(trimmed)
}

/// Resolves identifiers through PROJ.
///
/// Anything PROJ accepts as a CRS definition works: `EPSG:2193`,
/// `urn:ogc:def:crs:EPSG::4326`, WKT CRS text. A fresh PROJ context is
/// created per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjRegistry;

impl ProjRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl AreaOfUseResolver for ProjRegistry {
    fn resolve(&self, identifier: &str) -> Result<AreaOfUse> {
        let identifier = normalize_identifier(identifier)?;

        let proj = Proj::new(identifier).map_err(|e| {
            tracing::debug!(identifier, error = %e, "PROJ could not create CRS");
            RelateError::UnknownCrs { identifier: identifier.to_string(), reason: e.to_string() }
        })?;

        let (area, name) = proj.area_of_use().map_err(|e| {
            tracing::debug!(identifier, error = %e, "PROJ reported no area of use");
            RelateError::AreaOfUseUndefined { identifier: identifier.to_string() }
        })?;

        let area = area.ok_or_else(|| RelateError::AreaOfUseUndefined {
            identifier: identifier.to_string(),
        })?;

        let mut resolved = AreaOfUse::new(area.west, area.south, area.east, area.north);
        resolved.name = name;

        if !resolved.is_finite() {
            return Err(RelateError::AreaOfUseUndefined { identifier: identifier.to_string() });
        }

        tracing::debug!(
            identifier,
            west = resolved.west,
            south = resolved.south,
            east = resolved.east,
            north = resolved.north,
            "Resolved area of use"
        );

        Ok(resolved)
    }
}

/// Fixed table of areas keyed by identifier. Keys are matched
/// case-insensitively after trimming.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    areas: HashMap<String, AreaOfUse>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: &str, area: AreaOfUse) {
        self.areas.insert(key(identifier), area);
    }

    pub fn with_area(mut self, identifier: &str, area: AreaOfUse) -> Self {
        self.insert(identifier, area);
        self
    }

    pub fn get(&self, identifier: &str) -> Option<&AreaOfUse> {
        self.areas.get(&key(identifier))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

fn key(identifier: &str) -> String {
    identifier.trim().to_uppercase()
}

impl<S: AsRef<str>> FromIterator<(S, AreaOfUse)> for MemoryRegistry {
    fn from_iter<I: IntoIterator<Item = (S, AreaOfUse)>>(iter: I) -> Self {
        let mut registry = MemoryRegistry::new();
        for (identifier, area) in iter {
            registry.insert(identifier.as_ref(), area);
        }
        registry
    }
}

impl AreaOfUseResolver for MemoryRegistry {
    fn resolve(&self, identifier: &str) -> Result<AreaOfUse> {
        let identifier = normalize_identifier(identifier)?;
        self.get(identifier).cloned().ok_or_else(|| RelateError::UnknownCrs {
            identifier: identifier.to_string(),
            reason: "not present in registry".to_string(),
        })
    }
}

/// Checks `overrides` first, then defers to `fallback`.
#[derive(Debug, Clone)]
pub struct LayeredRegistry<F = ProjRegistry> {
    overrides: MemoryRegistry,
    fallback: F,
}

impl<F: AreaOfUseResolver> LayeredRegistry<F> {
    pub fn new(overrides: MemoryRegistry, fallback: F) -> Self {
        Self { overrides, fallback }
    }

    pub fn overrides(&self) -> &MemoryRegistry {
        &self.overrides
    }
}

impl LayeredRegistry<ProjRegistry> {
    /// PROJ-backed registry with a table of overrides in front
    pub fn over_proj(overrides: MemoryRegistry) -> Self {
        Self::new(overrides, ProjRegistry)
    }
}

impl<F: AreaOfUseResolver> AreaOfUseResolver for LayeredRegistry<F> {
    fn resolve(&self, identifier: &str) -> Result<AreaOfUse> {
        let identifier = normalize_identifier(identifier)?;
        match self.overrides.get(identifier) {
            Some(area) => {
                tracing::debug!(identifier, "Using configured area of use");
                Ok(area.clone())
            }
            None => self.fallback.resolve(identifier),
        }
    }
}
