// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Stateless `f32` helpers shared by [`Vec2`](super::Vec2) and
//! [`Vec3`](super::Vec3).
//!
//! Two distinct tolerance notions live here and must not be conflated:
//! - [`approximately`] is a *relative* comparison for single scalars.
//! - [`VECTOR_EPSILON`] is the *fixed* per-component tolerance used by vector
//!   equality and by the near-zero check in normalization.

use crate::MathError;

/// Single-precision π.
pub const PI: f32 = core::f32::consts::PI;

/// Multiply degrees by this to get radians.
pub const DEG2RAD: f32 = PI * 2.0 / 360.0;

/// Multiply radians by this to get degrees.
pub const RAD2DEG: f32 = 1.0 / DEG2RAD;

/// Smallest positive `f32` (the first subnormal, `1.4e-45`).
pub const EPSILON: f32 = f32::from_bits(1);

/// Fixed per-component tolerance for vector equality and normalization.
pub const VECTOR_EPSILON: f32 = 1e-5;

/// Returns `true` when `a` and `b` are equal within a relative tolerance.
///
/// The allowed error is `max(1e-6 * max(|a|, |b|), EPSILON * 8)`, so it scales
/// with the magnitude of the inputs and never drops to zero.
pub fn approximately(a: f32, b: f32) -> bool {
    (b - a).abs() <= (1e-6 * a.abs().max(b.abs())).max(EPSILON * 8.0)
}

/// Rounds toward positive infinity and converts to `i32`.
///
/// Values outside the `i32` range saturate at `i32::MIN`/`i32::MAX` and NaN
/// becomes `0`; the conversion never wraps.
#[allow(clippy::cast_possible_truncation)]
pub fn ceil_to_int(value: f32) -> i32 {
    value.ceil() as i32
}

/// Rounds toward negative infinity and converts to `i32`.
///
/// Same saturation rules as [`ceil_to_int`].
#[allow(clippy::cast_possible_truncation)]
pub fn floor_to_int(value: f32) -> i32 {
    value.floor() as i32
}

/// Rounds half away from zero and converts to `i32`.
///
/// Same saturation rules as [`ceil_to_int`].
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_int(value: f32) -> i32 {
    value.round() as i32
}

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// # Panics
/// Panics if `min > max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Clamps `value` to `[0, 1]`.
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * DEG2RAD
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * RAD2DEG
}

/// `1.0` when `value` is zero or positive, `-1.0` otherwise.
pub fn sign(value: f32) -> f32 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Smaller of two values. Returns `b` when the values are unordered (NaN).
pub fn min<T: PartialOrd + Copy>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Larger of two values. Returns `b` when the values are unordered (NaN).
pub fn max<T: PartialOrd + Copy>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Smallest value in `values`.
///
/// # Errors
/// [`MathError::EmptyInput`] when `values` is empty.
pub fn min_of<T: PartialOrd + Copy>(values: &[T]) -> Result<T, MathError> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| MathError::empty_input("min_of"))?;
    Ok(rest.iter().fold(*first, |acc, v| min(acc, *v)))
}

/// Largest value in `values`.
///
/// # Errors
/// [`MathError::EmptyInput`] when `values` is empty.
pub fn max_of<T: PartialOrd + Copy>(values: &[T]) -> Result<T, MathError> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| MathError::empty_input("max_of"))?;
    Ok(rest.iter().fold(*first, |acc, v| max(acc, *v)))
}

/// Interpolates between `a` and `b` with `t` clamped to `[0, 1]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    lerp_unclamped(a, b, clamp01(t))
}

/// Interpolates between `a` and `b` without clamping `t`.
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position of `value` within `[a, b]`, clamped to `[0, 1]`.
///
/// Returns `0.0` for an empty range (`a == b`).
#[allow(clippy::float_cmp)]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    clamp01((value - a) / (b - a))
}

/// Moves `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        return target;
    }
    current + sign(target - current) * max_delta
}
