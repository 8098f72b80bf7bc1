//! HSL colour handling for cell boxes.

use crate::config::SynthesisConfig;
use grid_common::HueRange;

/// A colour in hue/saturation/lightness form, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Colour of a cell with normalized magnitude `amount`.
    pub fn for_amount(hues: &HueRange, amount: f32, config: &SynthesisConfig) -> Self {
        Self {
            h: hues.hue_at(amount),
            s: config.saturation,
            l: config.lightness_at(amount),
        }
    }

    pub fn to_rgb(&self) -> [f32; 3] {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    /// RGB quantized to bytes, truncating like a `Uint8Array` store.
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.to_rgb().map(|c| (c * 255.0) as u8)
    }
}

/// Convert HSL to linear RGB in `[0, 1]`.
///
/// Hue wraps around the unit interval; saturation and lightness are clamped.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l];
    }

    let high = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let low = 2.0 * l - high;

    [
        hue_to_channel(low, high, h + 1.0 / 3.0),
        hue_to_channel(low, high, h),
        hue_to_channel(low, high, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(low: f32, high: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return low + (high - low) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return high;
    }
    if t < 2.0 / 3.0 {
        return low + (high - low) * 6.0 * (2.0 / 3.0 - t);
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_primary_hues() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
        assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
        assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hue_wraps() {
        assert!(close(hsl_to_rgb(1.1, 1.0, 0.5), hsl_to_rgb(0.1, 1.0, 0.5)));
        assert!(close(hsl_to_rgb(-0.25, 1.0, 0.5), hsl_to_rgb(0.75, 1.0, 0.5)));
    }

    #[test]
    fn test_grey_when_unsaturated() {
        assert_eq!(hsl_to_rgb(0.4, 0.0, 0.3), [0.3, 0.3, 0.3]);
    }

    #[test]
    fn test_full_lightness_is_white() {
        assert!(close(hsl_to_rgb(0.7, 1.0, 1.0), [1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_rgb8_truncates() {
        let hsl = Hsl { h: 0.0, s: 1.0, l: 0.4 };
        // (0.8, 0, 0) -> 204
        assert_eq!(hsl.to_rgb8(), [204, 0, 0]);
    }
}
