//! Configuration for box synthesis.

use crate::error::{MeshError, MeshResult};
use serde::{Deserialize, Serialize};

/// What to do when a dataset's values are all equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Treat every cell as magnitude 0 (shortest, darkest box).
    #[default]
    Floor,
    /// Fail with [`MeshError::DegenerateRange`].
    Reject,
}

impl DegeneratePolicy {
    /// Parse from string, falling back to `Floor`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "reject" | "error" => Self::Reject,
            _ => Self::Floor,
        }
    }
}

/// Shape, placement and colour parameters for cell boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Box width and depth along the sphere surface.
    pub footprint: f64,

    /// Radial thickness at magnitude 0.
    pub min_height: f64,

    /// Radial thickness at magnitude 1.
    pub max_height: f64,

    /// HSL lightness at magnitude 0.
    pub min_lightness: f32,

    /// HSL lightness at magnitude 1.
    pub max_lightness: f32,

    /// HSL saturation for every box.
    pub saturation: f32,

    /// Added to each cell's longitude (degrees) to line up with the
    /// texture seam of the reference sphere.
    pub lon_offset_deg: f64,

    /// Added to each cell's latitude (degrees).
    pub lat_offset_deg: f64,

    /// Radius of the sphere the boxes stand on.
    pub radius: f64,

    pub degenerate_policy: DegeneratePolicy,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            footprint: 0.005,
            min_height: 0.01,
            max_height: 0.5,
            min_lightness: 0.4,
            max_lightness: 1.0,
            saturation: 1.0,
            lon_offset_deg: 90.0,
            // -0.135 * PI radians
            lat_offset_deg: -24.3,
            radius: 1.0,
            degenerate_policy: DegeneratePolicy::Floor,
        }
    }
}

impl SynthesisConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("GLOBE_FOOTPRINT") {
            if let Ok(v) = val.parse() {
                config.footprint = v;
            }
        }

        if let Ok(val) = std::env::var("GLOBE_MIN_HEIGHT") {
            if let Ok(v) = val.parse() {
                config.min_height = v;
            }
        }

        if let Ok(val) = std::env::var("GLOBE_MAX_HEIGHT") {
            if let Ok(v) = val.parse() {
                config.max_height = v;
            }
        }

        if let Ok(val) = std::env::var("GLOBE_DEGENERATE_POLICY") {
            config.degenerate_policy = DegeneratePolicy::from_str(&val);
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> MeshResult<()> {
        if !(self.footprint > 0.0) {
            return Err(MeshError::invalid_config("footprint must be > 0"));
        }

        if !(self.min_height > 0.0) || !(self.max_height >= self.min_height) {
            return Err(MeshError::invalid_config(
                "heights must satisfy 0 < min_height <= max_height",
            ));
        }

        let lightness = 0.0..=1.0;
        if !lightness.contains(&self.min_lightness) || !lightness.contains(&self.max_lightness) {
            return Err(MeshError::invalid_config("lightness must be within 0-1"));
        }

        if !(0.0..=1.0).contains(&self.saturation) {
            return Err(MeshError::invalid_config("saturation must be within 0-1"));
        }

        if !(self.radius > 0.0) {
            return Err(MeshError::invalid_config("radius must be > 0"));
        }

        Ok(())
    }

    /// Radial thickness for a normalized magnitude.
    pub fn height_at(&self, amount: f32) -> f64 {
        lerp(self.min_height, self.max_height, amount as f64)
    }

    /// Lightness for a normalized magnitude.
    pub fn lightness_at(&self, amount: f32) -> f32 {
        self.min_lightness * (1.0 - amount) + self.max_lightness * amount
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
