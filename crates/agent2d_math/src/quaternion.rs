//! Quaternions for 3D rotation
//!
//! A quaternion is a real part `s` plus an imaginary 3-vector `u`,
//! `q = s + u.x*i + u.y*j + u.z*k`. Unit quaternions represent rotations;
//! `q` and `-q` represent the same one.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::scalar::{lit, Equivalent, Real};
use crate::vector::Vector3;

/// Above this dot product [`Quaternion::slerp`] switches to normalised
/// linear interpolation, since `sin(theta)` approaches zero.
pub const SLERP_THRESHOLD: f64 = 0.95;

/// Quaternion `s + u`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T = f32> {
    /// Real (scalar) part
    pub s: T,
    /// Imaginary (vector) part
    pub u: Vector3<T>,
}

impl<T: Real> Default for Quaternion<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Real> Quaternion<T> {
    /// The no-rotation quaternion `1 + 0i + 0j + 0k`
    pub const IDENTITY: Self = Self {
        s: T::ONE,
        u: Vector3::new(T::ZERO, T::ZERO, T::ZERO),
    };

    /// `s + x*i + y*j + z*k`
    #[inline]
    pub fn new(s: T, x: T, y: T, z: T) -> Self {
        Self { s, u: Vector3::new(x, y, z) }
    }

    #[inline]
    pub fn from_parts(s: T, u: Vector3<T>) -> Self {
        Self { s, u }
    }

    pub fn nan() -> Self {
        Self::from_parts(T::nan(), Vector3::nan())
    }

    /// Pure quaternion `0 + v`
    #[inline]
    pub fn from_vector(v: Vector3<T>) -> Self {
        Self::from_parts(T::ZERO, v)
    }

    /// Rotation by `angle` radians about `axis`. The axis is normalised.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let half = angle * lit::<T>(0.5);
        Self::from_parts(half.cos(), axis.normalized() * half.sin())
    }

    /// Inner product over all four components
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.s * other.s + self.u.dot(other.u)
    }

    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// `s - u`
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::from_parts(self.s, -self.u)
    }

    /// Unit quaternion in the same direction; NaN for a zero quaternion
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.magnitude()
    }

    /// In-place form of [`normalized`](Self::normalized)
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Multiplicative inverse `conjugate / |q|^2`; NaN for a zero quaternion
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() / self.magnitude_squared()
    }

    pub fn has_nan(&self) -> bool {
        self.s.is_nan() || self.u.has_nan()
    }

    pub fn is_nan(&self) -> bool {
        self.s.is_nan() && self.u.is_nan()
    }

    /// Rotate `v` by this quaternion, assumed to be unit length.
    ///
    /// Equivalent to the imaginary part of `q * v * q.conjugate()`.
    pub fn rotate(self, v: Vector3<T>) -> Vector3<T> {
        let t = self.u.cross(v) * lit::<T>(2.0);
        v + t * self.s + self.u.cross(t)
    }

    /// Componentwise blend `self * (1 - t) + other * t`, not normalised
    #[inline]
    pub fn blend(self, other: Self, t: T) -> Self {
        self * (T::ONE - t) + other * t
    }

    /// Normalised linear interpolation. The result is always a unit
    /// quaternion, or NaN if the blend passes through zero.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self.blend(other, t).normalized()
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// Both inputs are normalised first. If their dot product is negative,
    /// `other` is negated. When the dot product reaches [`SLERP_THRESHOLD`],
    /// the result is the normalised lerp instead.
    pub fn slerp(self, other: Self, t: T) -> Self {
        let q1 = self.normalized();
        let mut q3 = other.normalized();
        let mut d = q1.dot(q3);

        if d < T::ZERO {
            q3 = -q3;
            d = -d;
        }

        if d >= lit::<T>(SLERP_THRESHOLD) {
            return q1.lerp(q3, t);
        }

        let theta = d.acos();
        (q1 * (theta * (T::ONE - t)).sin() + q3 * (theta * t).sin()) / theta.sin()
    }
}

impl<T: Real> Add for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn add(self, q: Self) -> Self {
        Self::from_parts(self.s + q.s, self.u + q.u)
    }
}

impl<T: Real> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, q: Self) {
        self.s += q.s;
        self.u += q.u;
    }
}

impl<T: Real> Sub for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn sub(self, q: Self) -> Self {
        Self::from_parts(self.s - q.s, self.u - q.u)
    }
}

impl<T: Real> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, q: Self) {
        self.s -= q.s;
        self.u -= q.u;
    }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_parts(-self.s, -self.u)
    }
}

impl<T: Real> Mul<T> for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::from_parts(self.s * scalar, self.u * scalar)
    }
}

impl<T: Real> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.s *= scalar;
        self.u *= scalar;
    }
}

impl<T: Real> Div<T> for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn div(self, scalar: T) -> Self {
        if scalar == T::ZERO {
            return Self::nan();
        }
        Self::from_parts(self.s / scalar, self.u / scalar)
    }
}

impl<T: Real> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        *self = *self / scalar;
    }
}

/// Hamilton product
impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;
    fn mul(self, q: Self) -> Self {
        Self::from_parts(
            self.s * q.s - self.u.dot(q.u),
            q.u * self.s + self.u * q.s + self.u.cross(q.u),
        )
    }
}

impl<T: Real> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, q: Self) {
        *self = *self * q;
    }
}

/// `self * q.inverse()`; NaN when `q` has zero length
impl<T: Real> Div for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn div(self, q: Self) -> Self {
        self * q.inverse()
    }
}

impl<T: Real> Equivalent<T> for Quaternion<T> {
    fn equivalent(&self, other: &Self, epsilon: T) -> bool {
        (self.s - other.s).abs() <= epsilon && self.u.equivalent(&other.u, epsilon)
    }
}

// SAFETY: #[repr(C)] with four fields of type T.
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}
