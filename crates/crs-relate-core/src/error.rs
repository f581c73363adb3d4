//! Error types for crs-relate

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelateError {
    // Resolution errors
    #[error("Unknown CRS '{identifier}': {reason}")]
    UnknownCrs { identifier: String, reason: String },

    #[error("CRS '{identifier}' has no defined area of use")]
    AreaOfUseUndefined { identifier: String },

    // Input errors
    #[error("Invalid WKT geometry at input {index}: {reason}")]
    InvalidWkt { index: usize, reason: String },

    #[error("Missing required input: {name}")]
    MissingInput { name: String },

    #[error("Invalid process inputs: {reason}")]
    InvalidInput { reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RelateError {
    /// Whether the error was caused by the request rather than the system.
    ///
    /// Hosts should surface these as client errors (a rejected request),
    /// never as a fault of the process itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            RelateError::UnknownCrs { .. }
                | RelateError::AreaOfUseUndefined { .. }
                | RelateError::InvalidWkt { .. }
                | RelateError::MissingInput { .. }
                | RelateError::InvalidInput { .. }
        )
    }
}

impl From<serde_json::Error> for RelateError {
    fn from(err: serde_json::Error) -> Self {
        RelateError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RelateError>;
