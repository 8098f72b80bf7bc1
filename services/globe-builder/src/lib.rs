//! Batch builder for population globe geometry.
//!
//! Reads a YAML job, fetches the listed ASC grids, derives comparison
//! datasets and writes a single morph-target geometry document.

pub mod config;
pub mod fetch;
pub mod pipeline;

pub use config::{DerivedDataset, JobConfig, SourceDataset};
pub use pipeline::{build_morph_set, run_job, BuildSummary};
