//! Header keys understood by the parser.

use crate::error::{AscError, AscResult};
use grid_common::GridHeader;

/// Header keys with a typed slot in [`GridHeader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKey {
    NCols,
    NRows,
    XllCorner,
    YllCorner,
    CellSize,
    NoDataValue,
}

impl HeaderKey {
    /// Look up a header key, ignoring case.
    ///
    /// `xllcenter`/`yllcenter` map onto the corner keys; the pipeline
    /// treats both as the lower-left offset.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "ncols" => Some(Self::NCols),
            "nrows" => Some(Self::NRows),
            "xllcorner" | "xllcenter" => Some(Self::XllCorner),
            "yllcorner" | "yllcenter" => Some(Self::YllCorner),
            "cellsize" => Some(Self::CellSize),
            "nodata_value" => Some(Self::NoDataValue),
            _ => None,
        }
    }

    /// Canonical spelling of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NCols => "ncols",
            Self::NRows => "nrows",
            Self::XllCorner => "xllcorner",
            Self::YllCorner => "yllcorner",
            Self::CellSize => "cellsize",
            Self::NoDataValue => "NODATA_value",
        }
    }

    /// Parse `value` and store it in the matching header field.
    pub fn apply(&self, header: &mut GridHeader, value: &str) -> AscResult<()> {
        match self {
            Self::NCols => header.ncols = Some(parse_count(*self, value)?),
            Self::NRows => header.nrows = Some(parse_count(*self, value)?),
            Self::XllCorner => header.xllcorner = parse_number(*self, value)?,
            Self::YllCorner => header.yllcorner = parse_number(*self, value)?,
            Self::CellSize => header.cellsize = Some(parse_number(*self, value)?),
            Self::NoDataValue => header.nodata_value = Some(parse_number(*self, value)? as f32),
        }
        Ok(())
    }
}

fn parse_number(key: HeaderKey, value: &str) -> AscResult<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AscError::invalid_header(key.as_str(), value))
}

fn parse_count(key: HeaderKey, value: &str) -> AscResult<usize> {
    // Some writers emit "360.0" for counts
    let number = parse_number(key, value)?;
    if number < 0.0 || number.fract() != 0.0 {
        return Err(AscError::invalid_header(key.as_str(), value));
    }
    Ok(number as usize)
}
