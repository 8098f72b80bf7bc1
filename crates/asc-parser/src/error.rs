//! Error types for ASC parsing.

use thiserror::Error;

/// Result type for ASC parser operations.
pub type AscResult<T> = Result<T, AscError>;

/// Errors raised while parsing ASC text.
#[derive(Error, Debug, PartialEq)]
pub enum AscError {
    /// Malformed or ragged grid text.
    #[error("format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// A recognized header key carried an unusable value.
    #[error("invalid value '{value}' for header '{key}'")]
    InvalidHeader { key: String, value: String },

    /// The parsed shape disagrees with the declared ncols/nrows.
    #[error("header declares {declared} {axis} but data has {actual}")]
    DimensionMismatch {
        axis: &'static str,
        declared: usize,
        actual: usize,
    },
}

impl AscError {
    /// Create a Format error for a 1-based line number.
    pub fn format(line: usize, msg: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: msg.into(),
        }
    }

    /// Create an InvalidHeader error.
    pub fn invalid_header(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidHeader {
            key: key.into(),
            value: value.into(),
        }
    }
}
