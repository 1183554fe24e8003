//! Affine reference frames
//!
//! A frame places a local coordinate system inside its parent: a linear
//! basis plus an origin offset.
//!
//! - `to_parent(p) = basis * p + origin`
//! - `to_local(p)  = basis^-1 * (p - origin)`
//!
//! Both mutators come in an in-place form (`translate`, `rotate`) and a
//! pure form (`translated`, `rotated`).
//!
//! A [`Frame2`] converts to and from an [`Affine2`], and
//! [`Frame2::transform`] applies an affine map given in local coordinates.

use serde::{Deserialize, Serialize};

use crate::affine::Affine2;
use crate::basis::Basis;
use crate::matrix::{Matrix2, Matrix3};
use crate::point::Point2;
use crate::quaternion::Quaternion;
use crate::scalar::{Equivalent, Real};
use crate::vector::{Vector2, Vector3};

/// 2D frame: a 2x2 basis and a point origin
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame2<T = f32> {
    pub basis: Matrix2<T>,
    pub origin: Point2<T>,
}

impl<T: Real> Default for Frame2<T> {
    fn default() -> Self {
        Self::from_origin(Point2::ORIGIN)
    }
}

impl<T: Real> Frame2<T> {
    pub fn new(basis: Matrix2<T>, origin: Point2<T>) -> Self {
        Self { basis, origin }
    }

    /// Identity basis placed at `origin`
    pub fn from_origin(origin: Point2<T>) -> Self {
        Self::new(Matrix2::identity(), origin)
    }

    /// Local point expressed in the parent space
    #[inline]
    pub fn to_parent(&self, p: Point2<T>) -> Point2<T> {
        self.origin + self.basis * p.to_vector()
    }

    /// Parent point expressed in the local space
    #[inline]
    pub fn to_local(&self, p: Point2<T>) -> Point2<T> {
        Point2::from_vector(self.basis.inverse() * (p - self.origin))
    }

    /// Local direction in the parent space (origin does not apply)
    #[inline]
    pub fn to_parent_vector(&self, v: Vector2<T>) -> Vector2<T> {
        self.basis * v
    }

    #[inline]
    pub fn to_local_vector(&self, v: Vector2<T>) -> Vector2<T> {
        self.basis.inverse() * v
    }

    /// Move the origin by `offset`
    pub fn translate(&mut self, offset: Vector2<T>) -> &mut Self {
        self.origin += offset;
        self
    }

    pub fn translated(mut self, offset: Vector2<T>) -> Self {
        self.translate(offset);
        self
    }

    /// Rotate the basis counter-clockwise by `angle` radians about the origin
    pub fn rotate(&mut self, angle: T) -> &mut Self {
        self.rotate_matrix(Matrix2::rotation(angle))
    }

    pub fn rotated(mut self, angle: T) -> Self {
        self.rotate(angle);
        self
    }

    /// Left-multiply the basis by an arbitrary linear transform
    pub fn rotate_matrix(&mut self, transform: Matrix2<T>) -> &mut Self {
        self.basis = transform * self.basis;
        self
    }

    pub fn rotated_matrix(mut self, transform: Matrix2<T>) -> Self {
        self.rotate_matrix(transform);
        self
    }

    /// Homogeneous form: `to_affine().transform_point(p) == to_parent(p)`
    pub fn to_affine(&self) -> Affine2<T> {
        Affine2::from_parts(self.basis, self.origin.to_vector())
    }

    /// Apply `m`, expressed in this frame's local coordinates, then
    /// re-split the result into basis and origin
    pub fn transform(&mut self, m: &Affine2<T>) -> &mut Self {
        *self = Self::from(self.to_affine() * *m);
        self
    }

    pub fn transformed(mut self, m: &Affine2<T>) -> Self {
        self.transform(m);
        self
    }
}

impl<T: Real> From<Affine2<T>> for Frame2<T> {
    fn from(m: Affine2<T>) -> Self {
        let (basis, origin) = m.to_components();
        Self::new(basis, Point2::from_vector(origin))
    }
}

impl<T: Real> From<Frame2<T>> for Affine2<T> {
    fn from(frame: Frame2<T>) -> Self {
        frame.to_affine()
    }
}

impl<T: Real> Equivalent<T> for Frame2<T> {
    fn equivalent(&self, other: &Self, epsilon: T) -> bool {
        self.basis.equivalent(&other.basis, epsilon) && self.origin.equivalent(&other.origin, epsilon)
    }
}

/// 3D frame: a [`Basis`] and an origin offset
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame3<T = f32> {
    pub basis: Basis<T>,
    pub origin: Vector3<T>,
}

impl<T: Real> Default for Frame3<T> {
    fn default() -> Self {
        Self::from_origin(Vector3::zero())
    }
}

impl<T: Real> Frame3<T> {
    pub fn new(basis: Basis<T>, origin: Vector3<T>) -> Self {
        Self { basis, origin }
    }

    pub fn from_origin(origin: Vector3<T>) -> Self {
        Self::new(Basis::identity(), origin)
    }

    #[inline]
    pub fn to_parent(&self, p: Vector3<T>) -> Vector3<T> {
        self.basis.to_parent(p) + self.origin
    }

    #[inline]
    pub fn to_local(&self, p: Vector3<T>) -> Vector3<T> {
        self.basis.inverse_matrix() * (p - self.origin)
    }

    #[inline]
    pub fn to_parent_vector(&self, v: Vector3<T>) -> Vector3<T> {
        self.basis.to_parent(v)
    }

    #[inline]
    pub fn to_local_vector(&self, v: Vector3<T>) -> Vector3<T> {
        self.basis.inverse_matrix() * v
    }

    pub fn translate(&mut self, offset: Vector3<T>) -> &mut Self {
        self.origin += offset;
        self
    }

    pub fn translated(mut self, offset: Vector3<T>) -> Self {
        self.translate(offset);
        self
    }

    /// Left-multiply the basis by an arbitrary linear transform
    pub fn rotate(&mut self, transform: Matrix3<T>) -> &mut Self {
        self.basis.rotate(transform);
        self
    }

    pub fn rotated(mut self, transform: Matrix3<T>) -> Self {
        self.rotate(transform);
        self
    }

    /// [`rotate`](Self::rotate) by the rotation matrix of `q`
    pub fn rotate_quaternion(&mut self, q: Quaternion<T>) -> &mut Self {
        self.rotate(Basis::from_quaternion(q).matrix())
    }
}

impl<T: Real> Equivalent<T> for Frame3<T> {
    fn equivalent(&self, other: &Self, epsilon: T) -> bool {
        self.basis.equivalent(&other.basis, epsilon) && self.origin.equivalent(&other.origin, epsilon)
    }
}
