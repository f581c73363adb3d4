//! crs-relate geo - WKT parsing, CRS areas of use, and DE-9IM relations
//!
//! This crate handles the geospatial work: parsing candidate geometries,
//! resolving the area of use of a declared CRS through PROJ, and computing
//! the 9-intersection relation between the two.

pub mod evaluator;
pub mod parse;
pub mod process;
pub mod registry;
pub mod relate;

pub use evaluator::RelationEvaluator;
pub use process::CrsExtentProcessor;
pub use registry::{LayeredRegistry, MemoryRegistry, ProjRegistry};
pub use relate::Relation;
