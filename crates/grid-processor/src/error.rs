//! Error types for grid processing.

use thiserror::Error;

/// Errors that can occur during grid processing.
#[derive(Error, Debug, PartialEq)]
pub enum GridProcessorError {
    /// The two grids do not have the same rows and columns.
    #[error("grid shapes differ: {left:?} vs {right:?} (rows, cols)")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A derived dataset refers to a dataset that was never loaded.
    #[error("dataset not found: {0}")]
    UnknownDataset(String),

    /// Two datasets were registered under the same name.
    #[error("duplicate dataset name: {0}")]
    DuplicateDataset(String),
}

impl GridProcessorError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        Self::ShapeMismatch { left, right }
    }
}

/// Result type for grid processor operations.
pub type Result<T> = std::result::Result<T, GridProcessorError>;
