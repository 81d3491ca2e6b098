//! Model-related error types.

use thiserror::Error;

/// Errors that can occur while constructing models or datasets.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Parameter '{name}' is already registered")]
    DuplicateParameter { name: String },

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Dataset contains no examples")]
    EmptyDataset,
}
