//! ESRI ASCII grid ("ASC") parser.
//!
//! The format is line oriented: a handful of `KEY VALUE` header lines
//! followed by one line of whitespace-separated numbers per grid row.
//!
//! ```text
//! ncols         3
//! nrows         2
//! xllcorner     -180
//! yllcorner     -90
//! cellsize      1
//! NODATA_value  -9999
//! 1 2 -9999
//! 4 5 6
//! ```
//!
//! Callers hand over already-fetched text; this crate performs no I/O.

pub mod error;
pub mod header;
pub mod parser;

pub use error::{AscError, AscResult};
pub use header::HeaderKey;
pub use parser::{parse_asc, AscParser};
