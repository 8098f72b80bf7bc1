//! Generators for synthetic grid data.
//!
//! These create predictable, verifiable patterns that can be used across
//! the test suite.

use grid_common::{Grid, GridHeader};

/// Sentinel written by [`asc_text`] for missing cells.
pub const NODATA: f32 = -9999.0;

/// Render rows of optional values as ASC text.
///
/// The header declares `ncols`, `nrows`, the lower-left offsets and a
/// `NODATA_value` of [`NODATA`]; missing cells are written as the sentinel.
///
/// Two-column rows parse only because `ncols 2` is declared up front.
/// Single-column grids cannot be represented: one-token lines are skipped.
pub fn asc_text(rows: &[Vec<Option<f32>>], xllcorner: f64, yllcorner: f64) -> String {
    let ncols = rows.first().map(Vec::len).unwrap_or(0);
    let mut out = format!(
        "ncols {}\nnrows {}\nxllcorner {}\nyllcorner {}\ncellsize 1\nNODATA_value {}\n",
        ncols,
        rows.len(),
        xllcorner,
        yllcorner,
        NODATA
    );
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .map(|cell| cell.unwrap_or(NODATA).to_string())
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Creates rows with predictable values.
///
/// Each cell value is `col * 1000 + row`, so a parsed grid can be checked
/// with `grid.get(row, col) == Some(col * 1000 + row)`.
///
/// ```
/// use test_utils::indexed_rows;
///
/// let rows = indexed_rows(4, 3);
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[1][2], Some(2001.0));
/// ```
pub fn indexed_rows(width: usize, height: usize) -> Vec<Vec<Option<f32>>> {
    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| Some((col * 1000 + row) as f32))
                .collect()
        })
        .collect()
}

/// Creates population-like rows with a regular pattern of missing cells.
///
/// Every `hole_every`-th cell (counting row-major) is missing. Present
/// values grow with the row so the densest band sits at the bottom.
pub fn population_rows(width: usize, height: usize, hole_every: usize) -> Vec<Vec<Option<f32>>> {
    let hole_every = hole_every.max(1);
    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let ordinal = row * width + col;
                    if ordinal % hole_every == hole_every - 1 {
                        None
                    } else {
                        Some((row * 10 + col % 7) as f32)
                    }
                })
                .collect()
        })
        .collect()
}

/// Build a grid directly from rows, bypassing the parser.
pub fn grid_from_rows(rows: &[Vec<Option<f32>>]) -> Grid {
    let ncols = rows.first().map(Vec::len).unwrap_or(0);
    let cells: Vec<Option<f32>> = rows.iter().flatten().copied().collect();
    match Grid::new(GridHeader::default(), rows.len(), ncols, cells) {
        Ok(grid) => grid,
        Err(e) => panic!("test rows are not rectangular: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asc_text_writes_sentinel() {
        let text = asc_text(&[vec![Some(1.0), None]], -180.0, -90.0);
        assert!(text.contains("ncols 2"));
        assert!(text.contains("nrows 1"));
        assert!(text.ends_with("1 -9999\n"));
    }

    #[test]
    fn test_population_rows_holes() {
        let rows = population_rows(4, 2, 3);
        let missing = rows.iter().flatten().filter(|c| c.is_none()).count();
        assert_eq!(missing, 2);
    }

    #[test]
    fn test_grid_from_rows() {
        let grid = grid_from_rows(&indexed_rows(3, 2));
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.get(1, 2), Some(2001.0));
    }
}
