// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{
    Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};

use crate::math::scalar::{clamp01, RAD2DEG, VECTOR_EPSILON};
use crate::math::Vec3;
use crate::MathError;

/// Two-component `f32` vector.
///
/// * A plain `Copy` value: arithmetic always produces a new vector and the
///   operands are left untouched.
/// * `==` compares each component with a fixed tolerance of
///   [`VECTOR_EPSILON`], so it is not transitive. For that reason `Vec2` has
///   no `Eq` or `Hash` impl.
/// * Components may hold NaN or infinities; they propagate like ordinary
///   `f32` arithmetic.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// Number of components.
    pub const LEN: usize = 2;

    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// `(0, 1)`.
    pub const UP: Self = Self::new(0.0, 1.0);

    /// `(0, -1)`.
    pub const DOWN: Self = Self::new(0.0, -1.0);

    /// `(-1, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0);

    /// `(1, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Both components `+∞`.
    pub const POSITIVE_INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY);

    /// Both components `-∞`.
    pub const NEGATIVE_INFINITY: Self = Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Builds a vector from the leading values of `values`.
    ///
    /// Equivalent to [`Vec2::from_slice_at`] with `start = 0`.
    pub fn from_slice(values: &[f32]) -> Self {
        Self::from_slice_at(values, 0)
    }

    /// Builds a vector from `values[start..]`.
    ///
    /// Missing trailing components are zero, extra values are ignored and an
    /// out-of-range `start` yields [`Vec2::ZERO`]. This never fails.
    ///
    /// ```
    /// use vecmath::Vec2;
    /// assert_eq!(Vec2::from_slice_at(&[2.0, 3.0, 4.0], 1), Vec2::new(3.0, 4.0));
    /// assert_eq!(Vec2::from_slice(&[]), Vec2::ZERO);
    /// ```
    pub fn from_slice_at(values: &[f32], start: usize) -> Self {
        Self {
            data: super::fill_from_slice(values, start),
        }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Widens to a [`Vec3`] with `z = 0`.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x(), self.y(), 0.0)
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Checked component access.
    ///
    /// # Errors
    /// [`MathError::IndexOutOfRange`] unless `index` is 0 or 1.
    pub fn component(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| MathError::index_out_of_range(index, Self::LEN))
    }

    /// Checked component write.
    ///
    /// # Errors
    /// [`MathError::IndexOutOfRange`] unless `index` is 0 or 1; the vector is
    /// left unchanged in that case.
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or_else(|| MathError::index_out_of_range(index, Self::LEN))?;
        *slot = value;
        Ok(())
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f32, y: f32) {
        self.data = [x, y];
    }

    /// Squared length. Cheaper than [`Vec2::length`] for comparisons.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        super::components_length(&self.data)
    }

    /// Unit vector in the same direction.
    ///
    /// Vectors with length ≤ [`VECTOR_EPSILON`] normalize to [`Vec2::ZERO`]
    /// instead of producing NaN or infinities.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > VECTOR_EPSILON {
            if len.is_infinite() {
                let unit = *self * (1.0 / self.x().abs().max(self.y().abs()));
                return unit * (1.0 / unit.length());
            }
            *self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// In-place [`Vec2::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Sum of the components.
    pub fn sum(&self) -> f32 {
        self.x() + self.y()
    }

    /// Smallest component.
    pub fn min_element(&self) -> f32 {
        self.x().min(self.y())
    }

    /// Largest component.
    pub fn max_element(&self) -> f32 {
        self.x().max(self.y())
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).length()
    }

    /// Unsigned angle between two vectors in radians, in `[0, π]`.
    ///
    /// If either vector has zero length the result is NaN; callers that can
    /// see degenerate input must check for it themselves.
    pub fn angle(&self, other: &Self) -> f32 {
        let cos = self.dot(other) / (self.length() * other.length());
        // `f32::clamp` keeps NaN, unlike a max/min chain.
        cos.clamp(-1.0, 1.0).acos()
    }

    /// [`Vec2::angle`] in degrees.
    pub fn angle_deg(&self, other: &Self) -> f32 {
        self.angle(other) * RAD2DEG
    }

    /// Angle from `self` to `other` in radians, positive when counter-clockwise,
    /// in `[-π, π]`. Same NaN behaviour as [`Vec2::angle`].
    pub fn signed_angle(&self, other: &Self) -> f32 {
        let unsigned = self.angle(other);
        let cross = self.x() * other.y() - self.y() * other.x();
        if cross < 0.0 {
            -unsigned
        } else {
            unsigned
        }
    }

    /// The vector rotated 90° counter-clockwise.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Reflects `self` off the surface with the given `normal`.
    ///
    /// `normal` is expected to be unit length.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// Returns `self` unchanged when its length is at most `max_length`,
    /// otherwise the same direction rescaled to `max_length`.
    pub fn clamp_length(&self, max_length: f32) -> Self {
        let len = self.length();
        if len > max_length {
            if len.is_infinite() {
                return self.normalized() * max_length;
            }
            *self * (max_length / len)
        } else {
            *self
        }
    }

    /// Linear interpolation with `t` clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.lerp_unclamped(other, clamp01(t))
    }

    /// Linear interpolation without clamping; `t` outside `[0, 1]` extrapolates.
    pub fn lerp_unclamped(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.x() + (other.x() - self.x()) * t,
            self.y() + (other.y() - self.y()) * t,
        )
    }

    /// Moves toward `target` by at most `max_distance`, never overshooting.
    pub fn move_towards(&self, target: &Self, max_distance: f32) -> Self {
        let delta = *target - *self;
        let dist = delta.length();
        if dist <= max_distance || dist == 0.0 {
            return *target;
        }
        *self + delta * (max_distance / dist)
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x().max(other.x()), self.y().max(other.y()))
    }

    /// Component-wise product; same as `self * other`.
    pub fn scale(&self, other: &Self) -> Self {
        *self * *other
    }
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        super::components_approx_eq(&self.data, &other.data)
    }
}

super::impl_component_fmt!(Vec2);

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    /// Panics with the standard out-of-bounds message unless `index < 2`.
    /// Use [`Vec2::component`] for a checked read.
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x() * rhs, self.y() * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Mul for Vec2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x() * rhs.x(), self.y() * rhs.y())
    }
}

/// Division rejects a zero divisor instead of producing infinities.
impl Div<f32> for Vec2 {
    type Output = Result<Self, MathError>;
    fn div(self, rhs: f32) -> Self::Output {
        if rhs == 0.0 {
            return Err(MathError::division_by_zero(&rhs));
        }
        Ok(Self::new(self.x() / rhs, self.y() / rhs))
    }
}

/// Component-wise division; fails if any divisor component is zero.
impl Div for Vec2 {
    type Output = Result<Self, MathError>;
    fn div(self, rhs: Self) -> Self::Output {
        if rhs.data.contains(&0.0) {
            return Err(MathError::division_by_zero(&rhs));
        }
        Ok(Self::new(self.x() / rhs.x(), self.y() / rhs.y()))
    }
}

impl Rem<f32> for Vec2 {
    type Output = Self;
    fn rem(self, rhs: f32) -> Self {
        Self::new(self.x() % rhs, self.y() % rhs)
    }
}

impl Rem for Vec2 {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self::new(self.x() % rhs.x(), self.y() % rhs.y())
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl MulAssign for Vec2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
