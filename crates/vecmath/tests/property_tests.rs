// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use vecmath::math::VECTOR_EPSILON;
use vecmath::{Vec2, Vec3};

fn vec2_in(range: core::ops::Range<f32>) -> impl Strategy<Value = Vec2> {
    (range.clone(), range).prop_map(|(x, y)| Vec2::new(x, y))
}

fn vec3_in(range: core::ops::Range<f32>) -> impl Strategy<Value = Vec3> {
    (range.clone(), range.clone(), range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn length_is_sqrt_of_length_squared(v in vec3_in(-1000.0..1000.0)) {
        prop_assert_eq!(v.length(), v.length_squared().sqrt());
    }

    #[test]
    fn normalized_has_unit_length(v in vec3_in(-1000.0..1000.0)) {
        prop_assume!(v.length() > 1e-3);
        prop_assert!((v.normalized().length() - 1.0).abs() <= 1e-5);
    }

    #[test]
    fn near_zero_normalizes_to_zero(v in vec2_in(-1e-6..1e-6)) {
        prop_assert_eq!(v.normalized().to_array(), [0.0, 0.0]);
        let mut w = v;
        w.normalize();
        prop_assert_eq!(w.to_array(), [0.0, 0.0]);
    }

    #[test]
    fn dot_commutes(a in vec3_in(-1000.0..1000.0), b in vec3_in(-1000.0..1000.0)) {
        prop_assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn cross_anticommutes(a in vec3_in(-100.0..100.0), b in vec3_in(-100.0..100.0)) {
        prop_assert_eq!(a.cross(&b), -b.cross(&a));
    }

    #[test]
    fn clamp_length_bounds_and_preserves(
        v in vec2_in(-1000.0..1000.0),
        max_len in 0.0f32..500.0,
    ) {
        let clamped = v.clamp_length(max_len);
        prop_assert!(clamped.length() <= max_len * (1.0 + 1e-5) + 1e-6);
        if v.length() <= max_len {
            prop_assert_eq!(clamped.x().to_bits(), v.x().to_bits());
            prop_assert_eq!(clamped.y().to_bits(), v.y().to_bits());
        }
    }

    #[test]
    fn lerp_hits_endpoints_and_clamps(
        a in vec2_in(-10.0..10.0),
        b in vec2_in(-10.0..10.0),
        t in 1.0f32..50.0,
    ) {
        prop_assert_eq!(a.lerp(&b, 0.0), a);
        prop_assert_eq!(a.lerp(&b, 1.0), b);
        prop_assert_eq!(a.lerp(&b, -t), a.lerp(&b, 0.0));
        prop_assert_eq!(a.lerp(&b, t), a.lerp(&b, 1.0));
    }

    #[test]
    fn lerp_unclamped_extrapolates_past_end(a in vec3_in(-10.0..10.0), b in vec3_in(-10.0..10.0)) {
        let past = a.lerp_unclamped(&b, 2.0);
        prop_assert_eq!(past, b + (b - a));
    }

    #[test]
    fn array_round_trip(v in vec3_in(-1e6..1e6)) {
        let arr: [f32; 3] = v.into();
        prop_assert_eq!(Vec3::from(arr), v);
        prop_assert_eq!(Vec2::from(v.to_vec2().to_array()), v.to_vec2());
    }

    #[test]
    fn equality_tolerance_is_per_component(v in vec2_in(-100.0..100.0)) {
        let nudged = Vec2::new(v.x(), v.y() + VECTOR_EPSILON * 4.0);
        // Below 128 the f32 spacing is under 1e-5, so the nudge survives rounding.
        prop_assert_ne!(v, nudged);
        prop_assert_eq!(v, v);
    }
}
