//! Common types shared across the population globe crates.
//!
//! A [`Grid`] is the parsed form of an ASCII grid file: a rectangular,
//! row-major block of cells where each cell is either a value or missing,
//! together with the header metadata and the observed value range.
//! A [`NamedDataset`] pairs a grid with the label and hue range used to
//! colour it on the globe.

pub mod dataset;
pub mod error;
pub mod grid;

pub use dataset::{HueRange, NamedDataset};
pub use error::{GridError, GridResult};
pub use grid::{Grid, GridHeader, ValueRange};
