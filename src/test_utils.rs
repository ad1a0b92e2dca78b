// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Geometry in this crate is `f32` pixel math; compare it with `approx`
//! rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for pixel positions derived through several additions.
pub const PX_EPSILON: f32 = 1e-3;
