//! Error types for geometry synthesis.

use thiserror::Error;

/// Result type for synthesis operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors raised while building globe geometry.
#[derive(Error, Debug)]
pub enum MeshError {
    /// Every present value of a dataset is the same, so magnitudes
    /// cannot be normalized.
    #[error("dataset '{name}' has a degenerate value range (all values {value})")]
    DegenerateRange { name: String, value: f32 },

    /// Variants of a morph set do not line up with the base.
    #[error("variant '{name}' is not aligned with the base: {message}")]
    MisalignedVariants { name: String, message: String },

    /// A morph set needs at least one dataset.
    #[error("no datasets to synthesize")]
    NoDatasets,

    /// The merged buffers outgrew 32-bit indices.
    #[error("{vertices} vertices exceed the u32 index range")]
    IndexOverflow { vertices: usize },

    /// Configuration error.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// JSON export error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MeshError {
    /// Create a MisalignedVariants error.
    pub fn misaligned(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::MisalignedVariants {
            name: name.into(),
            message: msg.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
