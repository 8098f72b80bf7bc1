//! Shared test utilities for the population globe workspace.
//!
//! This crate provides:
//! - ASC text generators for synthetic grids
//! - Fixtures mirroring the demographic datasets the globe was built for
//! - Approximate equality macros for float buffers
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// ```
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Approximate equality for 3-component vectors.
///
/// ```
/// use test_utils::assert_vec3_approx_eq;
///
/// assert_vec3_approx_eq!([0.0, 1.0, 0.5], [0.0001, 1.0, 0.5], 0.001);
/// ```
#[macro_export]
macro_rules! assert_vec3_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left = $left;
        let right = $right;
        for i in 0..3 {
            $crate::assert_approx_eq!(left[i], right[i], $epsilon);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    fn test_assert_vec3_approx_eq() {
        assert_vec3_approx_eq!([1.0f32, 2.0, 3.0], [1.0f32, 2.0, 3.0001], 0.001);
    }
}
