//! Grid algebra for parsed ASC grids.
//!
//! Grids loaded from separate files can be combined cell by cell into a
//! derived grid. A cell missing in either input is missing in the output,
//! and the value range is recomputed over what is left.
//!
//! ```text
//!  men.asc ──► Grid ─┐
//!                    ├─► combine(Excess) ──► ">50% men" Grid
//!  women.asc ► Grid ─┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use grid_processor::{combine, CombineOp};
//!
//! let excess = combine(&men, &women, CombineOp::Excess)?;
//! ```

pub mod algebra;
pub mod datasets;
pub mod error;

pub use algebra::{amount_greater_than, combine, combine_with, difference, CombineOp};
pub use datasets::{derive_dataset, DatasetSet};
pub use error::{GridProcessorError, Result};
