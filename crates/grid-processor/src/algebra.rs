//! Elementwise combination of two grids.

use crate::error::{GridProcessorError, Result};
use grid_common::Grid;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Standard cell combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineOp {
    /// `a - b`
    Difference,
    /// `max(a - b, 0)`, the amount by which `a` exceeds `b`
    Excess,
}

impl CombineOp {
    pub fn apply(&self, a: f32, b: f32) -> f32 {
        match self {
            CombineOp::Difference => difference(a, b),
            CombineOp::Excess => amount_greater_than(a, b),
        }
    }
}

/// Signed difference.
#[inline]
pub fn difference(a: f32, b: f32) -> f32 {
    a - b
}

/// Amount by which `a` exceeds `b`, never negative.
#[inline]
pub fn amount_greater_than(a: f32, b: f32) -> f32 {
    (a - b).max(0.0)
}

/// Combine two grids with one of the standard operators.
pub fn combine(a: &Grid, b: &Grid, op: CombineOp) -> Result<Grid> {
    combine_with(a, b, |x, y| op.apply(x, y))
}

/// Combine two grids of identical shape with an arbitrary function.
///
/// The result copies the header of `a`. A cell missing in either input is
/// missing in the output, and the range is recomputed from the new values.
/// Neither input is modified.
pub fn combine_with<F>(a: &Grid, b: &Grid, f: F) -> Result<Grid>
where
    F: Fn(f32, f32) -> f32,
{
    if !a.same_shape(b) {
        return Err(GridProcessorError::shape_mismatch(a.shape(), b.shape()));
    }

    let cells: Vec<Option<f32>> = a
        .cells()
        .iter()
        .zip(b.cells())
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(f(*x, *y)),
            _ => None,
        })
        .collect();

    let (nrows, ncols) = a.shape();
    let grid = Grid::new(a.header.clone(), nrows, ncols, cells)
        .map_err(|_| GridProcessorError::shape_mismatch(a.shape(), b.shape()))?;

    debug!(
        rows = nrows,
        cols = ncols,
        present = grid.present_count(),
        "Combined grids"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_common::GridHeader;

    fn grid(nrows: usize, ncols: usize, cells: Vec<Option<f32>>) -> Grid {
        Grid::new(GridHeader::default(), nrows, ncols, cells).unwrap()
    }

    #[test]
    fn test_amount_greater_than() {
        assert_eq!(amount_greater_than(3.0, 5.0), 0.0);
        assert_eq!(amount_greater_than(5.0, 3.0), 2.0);
        assert_eq!(amount_greater_than(4.0, 4.0), 0.0);
    }

    #[test]
    fn test_difference_is_signed() {
        assert_eq!(difference(3.0, 5.0), -2.0);
        assert_eq!(CombineOp::Difference.apply(5.0, 3.0), 2.0);
    }

    #[test]
    fn test_shape_mismatch_rows() {
        let a = grid(2, 2, vec![Some(1.0); 4]);
        let b = grid(1, 2, vec![Some(1.0); 2]);
        assert_eq!(
            combine(&a, &b, CombineOp::Difference).unwrap_err(),
            GridProcessorError::shape_mismatch((2, 2), (1, 2))
        );
    }

    #[test]
    fn test_custom_combinator() {
        let a = grid(1, 3, vec![Some(1.0), Some(2.0), Some(3.0)]);
        let b = grid(1, 3, vec![Some(10.0), None, Some(30.0)]);
        let sum = combine_with(&a, &b, |x, y| x + y).unwrap();
        assert_eq!(sum.cells(), &[Some(11.0), None, Some(33.0)]);
        assert_eq!(sum.min_value(), Some(11.0));
        assert_eq!(sum.max_value(), Some(33.0));
    }

    #[test]
    fn test_op_serde_names() {
        assert_eq!(serde_json::to_string(&CombineOp::Excess).unwrap(), "\"excess\"");
    }
}
