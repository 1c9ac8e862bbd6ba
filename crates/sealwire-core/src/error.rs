//! Error types for the Sealwire primitives.

use thiserror::Error;

/// Errors returned by the comparison and sampling primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// A byte sequence was absent where one was required.
    #[error("missing byte sequence: {0}")]
    MissingInput(&'static str),

    /// The sampling bound was negative. The rejection loop could never
    /// accept a draw, so the bound is refused before sampling starts.
    #[error("sampling bound must be non-negative, got {0}")]
    NegativeBound(i64),

    /// Sampler configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PrimitiveError {
    /// Whether this error stems from a caller-supplied argument rather than
    /// from configuration.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PrimitiveError::MissingInput(_) | PrimitiveError::NegativeBound(_)
        )
    }
}

impl From<serde_json::Error> for PrimitiveError {
    fn from(e: serde_json::Error) -> Self {
        PrimitiveError::InvalidConfig(e.to_string())
    }
}

/// Result type for Sealwire primitive operations.
pub type Result<T> = std::result::Result<T, PrimitiveError>;
