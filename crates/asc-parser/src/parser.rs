//! Line-oriented ASC parsing.

use crate::error::{AscError, AscResult};
use crate::header::HeaderKey;
use grid_common::{Grid, GridHeader, ValueRange};
use tracing::debug;

/// Parse a complete ASC document into a [`Grid`].
pub fn parse_asc(text: &str) -> AscResult<Grid> {
    let mut parser = AscParser::new();
    for (idx, line) in text.lines().enumerate() {
        parser.feed_line(idx + 1, line)?;
    }
    parser.finish()
}

/// Incremental ASC parser.
///
/// Lines are fed one at a time; the value range over present cells is
/// folded in as rows arrive, so nothing is rescanned in [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct AscParser {
    header: GridHeader,
    cells: Vec<Option<f32>>,
    ncols: Option<usize>,
    nrows: usize,
    range: Option<ValueRange>,
}

impl AscParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line of input. `line_no` is 1-based and only used in errors.
    ///
    /// Two tokens form a header pair, more than two a data row. Anything
    /// shorter (blank lines) is skipped. When the header declared
    /// `ncols 2`, a two-token line starting with a number is a data row.
    pub fn feed_line(&mut self, line_no: usize, line: &str) -> AscResult<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.len() {
            0 | 1 => Ok(()),
            2 if self.is_two_column_row(tokens[0]) => self.data_row(line_no, &tokens),
            2 => self.header_pair(line_no, tokens[0], tokens[1]),
            _ => self.data_row(line_no, &tokens),
        }
    }

    fn is_two_column_row(&self, first: &str) -> bool {
        self.header.ncols == Some(2) && first.parse::<f32>().is_ok()
    }

    fn header_pair(&mut self, line_no: usize, key: &str, value: &str) -> AscResult<()> {
        match HeaderKey::from_token(key) {
            // rows already stored could not be re-masked
            Some(HeaderKey::NoDataValue) if self.nrows > 0 => Err(AscError::format(
                line_no,
                format!("{} declared after {} data rows", key, self.nrows),
            )),
            Some(known) => known.apply(&mut self.header, value),
            None => {
                self.header.extra.insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }

    fn data_row(&mut self, line_no: usize, tokens: &[&str]) -> AscResult<()> {
        let expected = *self.ncols.get_or_insert(tokens.len());
        if tokens.len() != expected {
            return Err(AscError::format(
                line_no,
                format!("expected {} values, found {}", expected, tokens.len()),
            ));
        }

        self.cells.reserve(expected);
        for (col, token) in tokens.iter().enumerate() {
            let value = token
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    AscError::format(
                        line_no,
                        format!("invalid number '{}' in column {}", token, col + 1),
                    )
                })?;

            if self.header.is_nodata(value) {
                self.cells.push(None);
            } else {
                self.range = Some(match self.range {
                    None => ValueRange::single(value),
                    Some(range) => range.include(value),
                });
                self.cells.push(Some(value));
            }
        }
        self.nrows += 1;
        Ok(())
    }

    /// Finish parsing and check the declared dimensions, if any.
    pub fn finish(self) -> AscResult<Grid> {
        let ncols = self.ncols.unwrap_or(0);

        if let Some(declared) = self.header.ncols {
            if self.nrows > 0 && declared != ncols {
                return Err(AscError::DimensionMismatch {
                    axis: "columns",
                    declared,
                    actual: ncols,
                });
            }
        }
        if let Some(declared) = self.header.nrows {
            if declared != self.nrows {
                return Err(AscError::DimensionMismatch {
                    axis: "rows",
                    declared,
                    actual: self.nrows,
                });
            }
        }

        debug!(
            rows = self.nrows,
            cols = ncols,
            min = ?self.range.map(|r| r.min),
            max = ?self.range.map(|r| r.max),
            "Parsed ASC grid"
        );

        Grid::from_parts(self.header, self.nrows, ncols, self.cells, self.range)
            .map_err(|e| AscError::format(0, e.to_string()))
    }
}
