use serde::{Deserialize, Serialize};

/// Identifier of the single output of the CRS extent process.
pub const DE9IM_OUTPUT_ID: &str = "de-9im";

/// One output record: the DE-9IM relation between the CRS area of use
/// and one input geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub id: String,
    pub value: String,
}

impl RelationRecord {
    pub fn de9im(value: impl Into<String>) -> Self {
        Self { id: DE9IM_OUTPUT_ID.to_string(), value: value.into() }
    }
}
