//! Parsed grid representation.

use crate::error::{GridError, GridResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header metadata of an ASCII grid file.
///
/// Only the keys the pipeline understands get typed fields. Anything else
/// found in the header lands in `extra` as raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridHeader {
    /// Declared column count, if present
    pub ncols: Option<usize>,
    /// Declared row count, if present
    pub nrows: Option<usize>,
    /// Lower-left longitude offset in degrees
    pub xllcorner: f64,
    /// Lower-left latitude offset in degrees
    pub yllcorner: f64,
    /// Declared cell size in degrees (informational)
    pub cellsize: Option<f64>,
    /// Value marking a cell with no measurement
    pub nodata_value: Option<f32>,
    /// Unrecognized header keys, verbatim
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl GridHeader {
    /// Check whether a raw value matches the declared no-data sentinel.
    pub fn is_nodata(&self, value: f32) -> bool {
        self.nodata_value == Some(value)
    }
}

/// Observed range over the present cells of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    /// A range covering a single value.
    pub fn single(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Widen the range so it covers `value`.
    pub fn include(self, value: f32) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Fold an iterator of present values into a range.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_values<I: IntoIterator<Item = f32>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self::single(v)),
            Some(range) => Some(range.include(v)),
        })
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// True when the range cannot be used to normalize values.
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        span == 0.0 || !span.is_finite()
    }

    /// Rescale a value to `[0, 1]` relative to this range.
    ///
    /// Returns `None` when the range is degenerate.
    pub fn normalize(&self, value: f32) -> Option<f32> {
        if self.is_degenerate() {
            return None;
        }
        Some((value - self.min) / self.span())
    }
}

/// A rectangular grid of present or missing values.
///
/// Cells are stored row-major. Row `r`, column `c` lives at `r * ncols + c`.
/// Deserialization goes through [`Grid::new`], so the cell count is checked
/// and the range is recomputed from the cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridParts")]
pub struct Grid {
    pub header: GridHeader,
    nrows: usize,
    ncols: usize,
    cells: Vec<Option<f32>>,
    range: Option<ValueRange>,
}

/// Unchecked serialized form of a [`Grid`].
#[derive(Deserialize)]
struct GridParts {
    header: GridHeader,
    nrows: usize,
    ncols: usize,
    cells: Vec<Option<f32>>,
}

impl TryFrom<GridParts> for Grid {
    type Error = GridError;

    fn try_from(parts: GridParts) -> GridResult<Self> {
        Grid::new(parts.header, parts.nrows, parts.ncols, parts.cells)
    }
}

impl Grid {
    /// Build a grid from its cells, computing the value range.
    pub fn new(
        header: GridHeader,
        nrows: usize,
        ncols: usize,
        cells: Vec<Option<f32>>,
    ) -> GridResult<Self> {
        let range = ValueRange::from_values(cells.iter().flatten().copied());
        Self::from_parts(header, nrows, ncols, cells, range)
    }

    /// Build a grid whose range was already tracked by the caller.
    pub fn from_parts(
        header: GridHeader,
        nrows: usize,
        ncols: usize,
        cells: Vec<Option<f32>>,
        range: Option<ValueRange>,
    ) -> GridResult<Self> {
        if cells.len() != nrows * ncols {
            return Err(GridError::CellCount {
                nrows,
                ncols,
                actual: cells.len(),
            });
        }
        Ok(Self {
            header,
            nrows,
            ncols,
            cells,
            range,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Observed range over present cells, `None` if every cell is missing.
    pub fn range(&self) -> Option<ValueRange> {
        self.range
    }

    pub fn min_value(&self) -> Option<f32> {
        self.range.map(|r| r.min)
    }

    pub fn max_value(&self) -> Option<f32> {
        self.range.map(|r| r.max)
    }

    /// Position of `value` within this grid's range, in `[0, 1]`.
    ///
    /// `None` when the grid has no range or the range is degenerate.
    pub fn normalize(&self, value: f32) -> Option<f32> {
        self.range.and_then(|r| r.normalize(value))
    }

    /// Value at `(row, col)`. `None` if missing or out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        self.cells.get(row * self.ncols + col).copied().flatten()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Option<f32>] {
        &self.cells
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<f32>]> {
        // chunks() panics on zero, and a grid without columns has no cells anyway
        self.cells.chunks(self.ncols.max(1))
    }

    /// Number of cells holding a value.
    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check whether another grid has the same row and column counts.
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.shape() == other.shape()
    }
}
