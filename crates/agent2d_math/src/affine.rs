//! 2D affine transforms in homogeneous form
//!
//! [`Affine2`] wraps a [`Matrix3`] whose last row is `(0, 0, 1)`. The
//! first two columns are the linear part and the third column holds the
//! translation, so `M * (x, y, 1)` maps a point and `M * (x, y, 0)` maps a
//! direction.

use serde::{Deserialize, Serialize};

use crate::matrix::{Matrix2, Matrix3};
use crate::point::Point2;
use crate::scalar::{Equivalent, Real};
use crate::vector::{Vector2, Vector3};

/// Homogeneous 2D affine transform
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Affine2<T = f32> {
    matrix: Matrix3<T>,
}

impl<T: Real> Default for Affine2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Affine2<T> {
    pub fn identity() -> Self {
        Self { matrix: Matrix3::identity() }
    }

    /// Local axes `e0`, `e1` placed at `origin`
    pub fn from_axes(origin: Point2<T>, e0: Vector2<T>, e1: Vector2<T>) -> Self {
        Self::from_parts(Matrix2::new(e0, e1), origin.to_vector())
    }

    /// [`from_axes`](Self::from_axes) followed by a parent-space scale.
    ///
    /// The scale applies to the translation as well as to the axes.
    pub fn from_axes_scaled(origin: Point2<T>, e0: Vector2<T>, e1: Vector2<T>, scale: Vector2<T>) -> Self {
        let s = Matrix3::scale(Vector3::new(scale.x, scale.y, T::ONE));
        Self::from_matrix(s * Self::from_axes(origin, e0, e1).matrix)
    }

    /// Linear part `linear` followed by a shift of `translation`
    pub fn from_parts(linear: Matrix2<T>, translation: Vector2<T>) -> Self {
        Self {
            matrix: Matrix3::new(
                homogeneous(linear.cols[0], T::ZERO),
                homogeneous(linear.cols[1], T::ZERO),
                homogeneous(translation, T::ONE),
            ),
        }
    }

    /// Wrap a homogeneous matrix as is. The last row is not checked.
    #[inline]
    pub fn from_matrix(matrix: Matrix3<T>) -> Self {
        Self { matrix }
    }

    #[inline]
    pub fn matrix(&self) -> Matrix3<T> {
        self.matrix
    }

    pub fn translation(offset: Vector2<T>) -> Self {
        Self::from_parts(Matrix2::identity(), offset)
    }

    /// Counter-clockwise rotation about the origin
    pub fn rotation(angle: T) -> Self {
        Self::from_parts(Matrix2::rotation(angle), Vector2::zero())
    }

    pub fn scale(sx: T, sy: T) -> Self {
        Self::from_parts(Matrix2::scale(sx, sy), Vector2::zero())
    }

    /// Split into the linear part and the translation
    pub fn to_components(&self) -> (Matrix2<T>, Vector2<T>) {
        let [c0, c1, c2] = self.matrix.cols;
        let linear = Matrix2::new(Vector2::new(c0.x, c0.y), Vector2::new(c1.x, c1.y));
        (linear, Vector2::new(c2.x, c2.y))
    }

    #[inline]
    pub fn transform_point(&self, p: Point2<T>) -> Point2<T> {
        let h = self.matrix * homogeneous(p.to_vector(), T::ONE);
        Point2::new(h.x, h.y)
    }

    /// Directions ignore the translation
    #[inline]
    pub fn transform_vector(&self, v: Vector2<T>) -> Vector2<T> {
        let h = self.matrix * homogeneous(v, T::ZERO);
        Vector2::new(h.x, h.y)
    }

    /// Inverse transform. A singular linear part gives an all-NaN result.
    pub fn inverse(&self) -> Self {
        Self::from_matrix(self.matrix.inverse())
    }
}

#[inline]
fn homogeneous<T>(v: Vector2<T>, w: T) -> Vector3<T> {
    Vector3::new(v.x, v.y, w)
}

/// `self * other` applies `other` first, then `self`
impl<T: Real> std::ops::Mul for Affine2<T> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::from_matrix(self.matrix * other.matrix)
    }
}

impl<T: Real> std::ops::MulAssign for Affine2<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Real> From<Matrix3<T>> for Affine2<T> {
    fn from(matrix: Matrix3<T>) -> Self {
        Self::from_matrix(matrix)
    }
}

impl<T: Real> From<Affine2<T>> for Matrix3<T> {
    fn from(affine: Affine2<T>) -> Self {
        affine.matrix
    }
}

impl<T: Real> Equivalent<T> for Affine2<T> {
    fn equivalent(&self, other: &Self, epsilon: T) -> bool {
        self.matrix.equivalent(&other.matrix, epsilon)
    }
}
