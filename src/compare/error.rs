use std::fmt::Display;
use thiserror::Error;

/// Descriptive comparison failures. Every variant names what
/// mismatched; most carry the two offending values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompareError {
    #[error("{what} mismatched: {left} != {right}")]
    FieldMismatch {
        what: String,
        left: String,
        right: String,
    },

    /// Structural failures that have no single pair of offending
    /// values, e.g. "Overlays have mismatched path counts."
    #[error("{0}")]
    Structure(String),

    #[error("{what} mismatched at index {index}: {left} != {right}")]
    ElementMismatch {
        what: String,
        index: usize,
        left: f64,
        right: f64,
    },

    #[error("{what} shapes mismatched: {left:?} != {right:?}")]
    ShapeMismatch {
        what: String,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    /// Fallback failure from plain equality, Debug-formatted.
    #[error("{left} != {right}")]
    NotEqual { left: String, right: String },
}

impl CompareError {
    pub fn field(
        what: &str,
        left: impl Display,
        right: impl Display,
    ) -> Self {
        CompareError::FieldMismatch {
            what: what.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    pub fn structure(message: impl Into<String>) -> Self {
        CompareError::Structure(message.into())
    }
}
