//! Error types for grid construction.

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised when assembling a grid from raw parts.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("cell count {actual} does not match {nrows} rows x {ncols} columns")]
    CellCount {
        nrows: usize,
        ncols: usize,
        actual: usize,
    },
}
