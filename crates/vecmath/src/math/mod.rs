// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar utilities and fixed-size `f32` vectors.
//!
//! All arithmetic stays in `f32`; nothing widens to `f64` internally.

use core::fmt;

pub mod scalar;
mod vec2;
mod vec3;

pub use scalar::{
    approximately, ceil_to_int, clamp, clamp01, deg_to_rad, floor_to_int, max, max_of, min,
    min_of, rad_to_deg, DEG2RAD, EPSILON, PI, RAD2DEG, VECTOR_EPSILON,
};
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Which `core::fmt` trait to forward each component to.
#[derive(Clone, Copy)]
enum ComponentStyle {
    Display,
    LowerExp,
    UpperExp,
}

/// Writes `(a, b, ...)`, formatting every component with the caller's flags.
///
/// Precision, width and sign flags on `f` apply to each component separately,
/// so `{:.2}` yields `(1.00, 2.00)` rather than padding the whole tuple.
fn write_components(
    f: &mut fmt::Formatter<'_>,
    components: &[f32],
    style: ComponentStyle,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match style {
            ComponentStyle::Display => fmt::Display::fmt(c, f)?,
            ComponentStyle::LowerExp => fmt::LowerExp::fmt(c, f)?,
            ComponentStyle::UpperExp => fmt::UpperExp::fmt(c, f)?,
        }
    }
    f.write_str(")")
}

/// Implements `Display`, `LowerExp` and `UpperExp` for a vector type in terms
/// of [`write_components`].
macro_rules! impl_component_fmt {
    ($ty:ty) => {
        impl ::core::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::math::write_components(
                    f,
                    &self.to_array(),
                    $crate::math::ComponentStyle::Display,
                )
            }
        }

        impl ::core::fmt::LowerExp for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::math::write_components(
                    f,
                    &self.to_array(),
                    $crate::math::ComponentStyle::LowerExp,
                )
            }
        }

        impl ::core::fmt::UpperExp for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::math::write_components(
                    f,
                    &self.to_array(),
                    $crate::math::ComponentStyle::UpperExp,
                )
            }
        }
    };
}
pub(crate) use impl_component_fmt;

/// Copies up to `N` values from `values[start..]`, zero-filling the rest.
///
/// An empty slice, or `start` at/after the end, produces all zeros.
fn fill_from_slice<const N: usize>(values: &[f32], start: usize) -> [f32; N] {
    let mut out = [0.0; N];
    let tail = values.get(start..).unwrap_or(&[]);
    for (dst, src) in out.iter_mut().zip(tail) {
        *dst = *src;
    }
    out
}

/// Per-component tolerance comparison shared by the vector `PartialEq` impls.
///
/// Matching infinities compare equal; NaN never does.
#[allow(clippy::float_cmp)]
fn components_approx_eq(a: &[f32], b: &[f32]) -> bool {
    a.iter()
        .zip(b)
        .all(|(l, r)| l == r || (l - r).abs() <= VECTOR_EPSILON)
}

/// Euclidean length of `components`.
///
/// When the sum of squares overflows but every component is finite, the
/// components are first divided by the largest magnitude so the result stays
/// finite whenever the true length fits in an `f32`.
fn components_length(components: &[f32]) -> f32 {
    let sum_sq: f32 = components.iter().map(|c| c * c).sum();
    if !sum_sq.is_infinite() {
        return sum_sq.sqrt();
    }
    let scale = components.iter().fold(0.0_f32, |m, c| m.max(c.abs()));
    if !scale.is_finite() {
        return sum_sq.sqrt();
    }
    let scaled_sq: f32 = components.iter().map(|c| (c / scale) * (c / scale)).sum();
    scale * scaled_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_from_slice_zero_fills_and_truncates() {
        assert_eq!(fill_from_slice::<3>(&[5.0], 0), [5.0, 0.0, 0.0]);
        assert_eq!(fill_from_slice::<2>(&[2.0, 3.0, 4.0], 1), [3.0, 4.0]);
        assert_eq!(fill_from_slice::<2>(&[], 0), [0.0, 0.0]);
        assert_eq!(fill_from_slice::<2>(&[1.0, 2.0], 7), [0.0, 0.0]);
    }

    #[test]
    fn approx_eq_is_inclusive_at_the_tolerance() {
        assert!(components_approx_eq(&[1.0, 2.0], &[1.0, 2.0]));
        assert!(components_approx_eq(&[0.0], &[VECTOR_EPSILON]));
        assert!(!components_approx_eq(&[0.0], &[VECTOR_EPSILON * 2.0]));
        assert!(!components_approx_eq(&[f32::NAN], &[f32::NAN]));
    }

    #[test]
    fn approx_eq_accepts_matching_infinities() {
        assert!(components_approx_eq(&[f32::INFINITY], &[f32::INFINITY]));
        assert!(components_approx_eq(
            &[f32::NEG_INFINITY, 1.0],
            &[f32::NEG_INFINITY, 1.0]
        ));
        assert!(!components_approx_eq(&[f32::INFINITY], &[f32::NEG_INFINITY]));
        assert!(!components_approx_eq(&[f32::INFINITY], &[f32::MAX]));
    }

    #[test]
    fn length_survives_overflowing_squares() {
        assert_eq!(components_length(&[3.0, 4.0]), 5.0);
        let big = components_length(&[3e19, 4e19]);
        assert!((big / 5e19 - 1.0).abs() < 1e-6);
        assert!(components_length(&[f32::MAX, f32::MAX]).is_infinite());
        assert!(components_length(&[f32::INFINITY, 0.0]).is_infinite());
        assert!(components_length(&[f32::NAN, 1e30]).is_nan());
    }
}
