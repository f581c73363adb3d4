//! Process inputs as supplied by the host.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{RelateError, Result};

/// Geometry input: a single WKT string or a sequence of them.
///
/// Hosts send either shape for the same input; a single value is a
/// sequence of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WktInput {
    One(String),
    Many(Vec<String>),
}

impl WktInput {
    /// Normalize to a sequence, preserving input order.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            WktInput::One(wkt) => vec![wkt],
            WktInput::Many(wkts) => wkts,
        }
    }

    /// Borrowed view of the geometries, preserving input order.
    pub fn as_slice(&self) -> &[String] {
        match self {
            WktInput::One(wkt) => std::slice::from_ref(wkt),
            WktInput::Many(wkts) => wkts,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<&str> for WktInput {
    fn from(wkt: &str) -> Self {
        WktInput::One(wkt.to_string())
    }
}

impl From<String> for WktInput {
    fn from(wkt: String) -> Self {
        WktInput::One(wkt)
    }
}

impl From<Vec<String>> for WktInput {
    fn from(wkts: Vec<String>) -> Self {
        WktInput::Many(wkts)
    }
}

/// Inputs of the CRS extent process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wkt: Option<WktInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<String>,
}

impl ProcessInputs {
    pub fn new(crs: impl Into<String>, wkt: impl Into<WktInput>) -> Self {
        Self { wkt: Some(wkt.into()), crs: Some(crs.into()) }
    }

    /// Parse a request body.
    ///
    /// Accepts the keyed form (`{"wkt": ..., "crs": ...}`) and the list
    /// form used in process examples (`{"inputs": [{"id": "wkt", "value": ...}]}`).
    /// In the list form, repeated `wkt` entries accumulate in order.
    pub fn from_json(value: JsonValue) -> Result<Self> {
        match value.get("inputs") {
            Some(JsonValue::Array(entries)) => Self::from_input_list(entries),
            Some(_) => Err(RelateError::InvalidInput {
                reason: "'inputs' must be a list of {id, value} entries".to_string(),
            }),
            None => serde_json::from_value(value)
                .map_err(|e| RelateError::InvalidInput { reason: e.to_string() }),
        }
    }

    fn from_input_list(entries: &[JsonValue]) -> Result<Self> {
        let mut wkts: Vec<String> = Vec::new();
        let mut crs = None;

        for entry in entries {
            let id = entry.get("id").and_then(JsonValue::as_str).ok_or_else(|| {
                RelateError::InvalidInput { reason: "input entry without an 'id'".to_string() }
            })?;
            let value = entry.get("value").ok_or_else(|| RelateError::InvalidInput {
                reason: format!("input '{}' has no 'value'", id),
            })?;

            match id {
                "wkt" => match serde_json::from_value::<WktInput>(value.clone()) {
                    Ok(input) => wkts.extend(input.into_vec()),
                    Err(e) => {
                        return Err(RelateError::InvalidInput {
                            reason: format!("input 'wkt': {}", e),
                        })
                    }
                },
                "crs" => {
                    if crs.is_some() {
                        return Err(RelateError::InvalidInput {
                            reason: "input 'crs' may only be given once".to_string(),
                        });
                    }
                    let value = value.as_str().ok_or_else(|| RelateError::InvalidInput {
                        reason: "input 'crs' must be a string".to_string(),
                    })?;
                    crs = Some(value.to_string());
                }
                other => {
                    tracing::debug!(input = other, "Ignoring unknown process input");
                }
            }
        }

        let wkt = match wkts.len() {
            0 => None,
            1 => wkts.pop().map(WktInput::One),
            _ => Some(WktInput::Many(wkts)),
        };

        Ok(Self { wkt, crs })
    }
}
