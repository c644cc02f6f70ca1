// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{
    Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};

use crate::math::scalar::{clamp01, VECTOR_EPSILON};
use crate::math::Vec2;
use crate::MathError;

/// Three-component `f32` vector.
///
/// * Components may represent either points or directions depending on the
///   calling context; Y is up and Z is forward.
/// * Same value semantics and tolerance-based `==` as [`Vec2`]; no `Eq` or
///   `Hash`.
/// * Narrow to 2D explicitly with [`Vec3::to_vec2`]; there is no lossy
///   `From<Vec3> for Vec2`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// Number of components.
    pub const LEN: usize = 3;

    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// `(0, 1, 0)`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    /// `(0, 0, 1)`.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// All components `+∞`.
    pub const POSITIVE_INFINITY: Self =
        Self::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);

    /// All components `-∞`.
    pub const NEGATIVE_INFINITY: Self =
        Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Builds a vector from the leading values of `values`.
    pub fn from_slice(values: &[f32]) -> Self {
        Self::from_slice_at(values, 0)
    }

    /// Builds a vector from `values[start..]`, zero-filling missing trailing
    /// components and ignoring extras.
    ///
    /// ```
    /// use vecmath::Vec3;
    /// assert_eq!(Vec3::from_slice(&[5.0]), Vec3::new(5.0, 0.0, 0.0));
    /// ```
    pub fn from_slice_at(values: &[f32], start: usize) -> Self {
        Self {
            data: super::fill_from_slice(values, start),
        }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// Drops `z`.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Checked component access.
    ///
    /// # Errors
    /// [`MathError::IndexOutOfRange`] unless `index` is 0, 1 or 2.
    pub fn component(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| MathError::index_out_of_range(index, Self::LEN))
    }

    /// Checked component write; the vector is unchanged on error.
    ///
    /// # Errors
    /// [`MathError::IndexOutOfRange`] unless `index` is 0, 1 or 2.
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or_else(|| MathError::index_out_of_range(index, Self::LEN))?;
        *slot = value;
        Ok(())
    }

    /// Overwrites all three components.
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.data = [x, y, z];
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        super::components_length(&self.data)
    }

    /// Normalises the vector, returning the zero vector if length ≤
    /// [`VECTOR_EPSILON`].
    ///
    /// `VECTOR_EPSILON` is a degeneracy threshold (not numeric precision):
    /// near-zero vectors normalize to zero so callers can detect them without
    /// checking for NaN.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len <= VECTOR_EPSILON {
            return Self::ZERO;
        }
        if len.is_infinite() {
            let largest = self.max_element().max(-self.min_element());
            let unit = *self * (1.0 / largest);
            return unit * (1.0 / unit.length());
        }
        *self * (1.0 / len)
    }

    /// In-place [`Vec3::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Sum of the components.
    pub fn sum(&self) -> f32 {
        self.x() + self.y() + self.z()
    }

    /// Smallest component.
    pub fn min_element(&self) -> f32 {
        self.x().min(self.y()).min(self.z())
    }

    /// Largest component.
    pub fn max_element(&self) -> f32 {
        self.x().max(self.y()).max(self.z())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).length()
    }

    /// Reflects `self` off the plane with the given unit `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// Projects `self` onto `onto`. Projecting onto a near-zero vector yields
    /// [`Vec3::ZERO`].
    pub fn project(&self, onto: &Self) -> Self {
        let len_sq = onto.length_squared();
        if len_sq < VECTOR_EPSILON * VECTOR_EPSILON {
            return Self::ZERO;
        }
        *onto * (self.dot(onto) / len_sq)
    }

    /// Removes the component of `self` along `normal`.
    pub fn project_on_plane(&self, normal: &Self) -> Self {
        *self - self.project(normal)
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

    /// Linear interpolation without clamping.
    pub fn lerp_unclamped(&self, other: &Self, t: f32) -> Self {
        *self + (*other - *self) * t
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
        Self::new(
            self.x().min(other.x()),
            self.y().min(other.y()),
            self.z().min(other.z()),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.x().max(other.x()),
            self.y().max(other.y()),
            self.z().max(other.z()),
        )
    }

    /// Component-wise product; same as `self * other`.
    pub fn scale(&self, other: &Self) -> Self {
        *self * *other
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        super::components_approx_eq(&self.data, &other.data)
    }
}

super::impl_component_fmt!(Vec3);

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use vecmath::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

/// Lossless widening with `z = 0`.
impl From<Vec2> for Vec3 {
    fn from(value: Vec2) -> Self {
        value.to_vec3()
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x() * rhs, self.y() * rhs, self.z() * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x() * rhs.x(), self.y() * rhs.y(), self.z() * rhs.z())
    }
}

impl Div<f32> for Vec3 {
    type Output = Result<Self, MathError>;
    fn div(self, rhs: f32) -> Self::Output {
        if rhs == 0.0 {
            return Err(MathError::division_by_zero(&rhs));
        }
        Ok(Self::new(self.x() / rhs, self.y() / rhs, self.z() / rhs))
    }
}

impl Div for Vec3 {
    type Output = Result<Self, MathError>;
    fn div(self, rhs: Self) -> Self::Output {
        if rhs.data.contains(&0.0) {
            return Err(MathError::division_by_zero(&rhs));
        }
        Ok(Self::new(
            self.x() / rhs.x(),
            self.y() / rhs.y(),
            self.z() / rhs.z(),
        ))
    }
}

impl Rem<f32> for Vec3 {
    type Output = Self;
    fn rem(self, rhs: f32) -> Self {
        Self::new(self.x() % rhs, self.y() % rhs, self.z() % rhs)
    }
}

impl Rem for Vec3 {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self::new(self.x() % rhs.x(), self.y() % rhs.y(), self.z() % rhs.z())
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
