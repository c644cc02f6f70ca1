// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use vecmath::{Vec2, Vec3};

#[test]
fn default_display_is_parenthesised() {
    assert_eq!(Vec2::new(1.0, 2.5).to_string(), "(1, 2.5)");
    assert_eq!(Vec3::new(-1.0, 0.0, 3.25).to_string(), "(-1, 0, 3.25)");
}

#[test]
fn precision_applies_to_each_component() {
    assert_eq!(format!("{:.2}", Vec2::new(1.0, 2.5)), "(1.00, 2.50)");
    assert_eq!(
        format!("{:.1}", Vec3::new(0.04, 1.0, -2.0)),
        "(0.0, 1.0, -2.0)"
    );
}

#[test]
fn width_and_sign_apply_to_each_component() {
    assert_eq!(format!("{:6.1}", Vec2::new(1.0, 2.5)), "(   1.0,    2.5)");
    assert_eq!(
        format!("{:+.1}", Vec3::new(1.0, -2.0, 0.0)),
        "(+1.0, -2.0, +0.0)"
    );
}

#[test]
fn exponent_formats() {
    assert_eq!(format!("{:e}", Vec2::new(1500.0, 0.25)), "(1.5e3, 2.5e-1)");
    assert_eq!(format!("{:E}", Vec2::new(1500.0, 0.25)), "(1.5E3, 2.5E-1)");
}

#[test]
fn non_finite_components_render() {
    assert_eq!(Vec2::NEGATIVE_INFINITY.to_string(), "(-inf, -inf)");
    assert_eq!(Vec3::new(f32::NAN, 0.0, 1.0).to_string(), "(NaN, 0, 1)");
}
