//! Common fixtures for globe pipeline tests.

/// Small document with one missing cell.
///
/// Parses to a 2x3 grid with range `1..=6` and cell `(0, 2)` missing.
pub const SMALL_ASC: &str =
    "xllcorner -180\nyllcorner -90\nNODATA_value -9999\n1 2 -9999\n4 5 6\n";

/// Hue ramps used by the demographic globe.
pub mod hues {
    pub const MEN: [f32; 2] = [0.7, 0.3];
    pub const WOMEN: [f32; 2] = [0.9, 1.1];
    pub const MEN_EXCESS: [f32; 2] = [0.6, 1.1];
    pub const WOMEN_EXCESS: [f32; 2] = [0.0, 0.4];
}

/// Header block of the 1-degree demographic grids.
pub const GLOBAL_1DEG_HEADER: &str = "ncols         360\n\
nrows         145\n\
xllcorner     -180\n\
yllcorner     -60\n\
cellsize      1.0000000000008\n\
NODATA_value  -9999\n";
