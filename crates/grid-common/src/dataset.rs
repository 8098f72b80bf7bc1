//! Named datasets and their colour ramps.

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Hue ramp applied across the normalized magnitude of a dataset.
///
/// Values are fractions of the colour wheel. Endpoints outside `[0, 1)`
/// are allowed and wrap, so `[0.9, 1.1]` sweeps through red.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct HueRange {
    pub start: f32,
    pub end: f32,
}

impl HueRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Hue at normalized magnitude `amount`.
    pub fn hue_at(&self, amount: f32) -> f32 {
        self.start + (self.end - self.start) * amount
    }
}

impl From<[f32; 2]> for HueRange {
    fn from([start, end]: [f32; 2]) -> Self {
        Self { start, end }
    }
}

impl From<HueRange> for [f32; 2] {
    fn from(range: HueRange) -> Self {
        [range.start, range.end]
    }
}

/// A grid with its display name and hue ramp.
#[derive(Debug, Clone)]
pub struct NamedDataset {
    pub name: String,
    pub hue_range: HueRange,
    pub grid: Grid,
}

impl NamedDataset {
    pub fn new(name: impl Into<String>, hue_range: HueRange, grid: Grid) -> Self {
        Self {
            name: name.into(),
            hue_range,
            grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_at_endpoints() {
        let hues = HueRange::new(0.7, 0.3);
        assert_eq!(hues.hue_at(0.0), 0.7);
        assert!((hues.hue_at(1.0) - 0.3).abs() < 1e-6);
        assert!((hues.hue_at(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_hue_range_serde_as_pair() {
        let hues: HueRange = serde_json::from_str("[0.9, 1.1]").unwrap();
        assert_eq!(hues, HueRange::new(0.9, 1.1));
        assert_eq!(serde_json::to_string(&hues).unwrap(), "[0.9,1.1]");
    }
}
