//! Orthonormal 3D basis
//!
//! A [`Basis`] is three orthonormal axes stored as the columns of a
//! [`Matrix3`]. Mapping a local vector into the parent space is `M * v`;
//! since `M` is orthonormal, the reverse mapping is `M^T * v`.

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix3;
use crate::quaternion::Quaternion;
use crate::scalar::{lit, Equivalent, Real};
use crate::vector::Vector3;

/// Orientation of a local frame relative to its parent
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Basis<T = f32> {
    axes: Matrix3<T>,
}

impl<T: Real> Default for Basis<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Basis<T> {
    /// The parent's own axes
    pub fn identity() -> Self {
        Self { axes: Matrix3::identity() }
    }

    /// Wrap three axes as columns. The caller guarantees orthonormality;
    /// see [`orthonormalized`](Self::orthonormalized) otherwise.
    pub fn from_axes(x: Vector3<T>, y: Vector3<T>, z: Vector3<T>) -> Self {
        Self { axes: Matrix3::new(x, y, z) }
    }

    pub fn from_matrix(axes: Matrix3<T>) -> Self {
        Self { axes }
    }

    /// Rotation matrix of `q`. `q` is normalised first.
    pub fn from_quaternion(q: Quaternion<T>) -> Self {
        let q = q.normalized();
        let (s, x, y, z) = (q.s, q.u.x, q.u.y, q.u.z);
        let two = lit::<T>(2.0);
        let one = T::ONE;

        Self::from_axes(
            Vector3::new(
                one - two * (y * y + z * z),
                two * (x * y + s * z),
                two * (x * z - s * y),
            ),
            Vector3::new(
                two * (x * y - s * z),
                one - two * (x * x + z * z),
                two * (y * z + s * x),
            ),
            Vector3::new(
                two * (x * z + s * y),
                two * (y * z - s * x),
                one - two * (x * x + y * y),
            ),
        )
    }

    /// Unit quaternion for this rotation (Shepperd's method).
    ///
    /// Picks the largest of the trace and the diagonal to divide by, so the
    /// square root argument stays well away from zero.
    pub fn to_quaternion(&self) -> Quaternion<T> {
        let m = |r: usize, c: usize| self.axes.get(r, c);
        let one = T::ONE;
        let quarter = lit::<T>(0.25);
        let trace = m(0, 0) + m(1, 1) + m(2, 2);

        let q = if trace > T::ZERO {
            let k = (trace + one).sqrt() * lit::<T>(2.0);
            Quaternion::new(
                quarter * k,
                (m(2, 1) - m(1, 2)) / k,
                (m(0, 2) - m(2, 0)) / k,
                (m(1, 0) - m(0, 1)) / k,
            )
        } else if m(0, 0) > m(1, 1) && m(0, 0) > m(2, 2) {
            let k = (one + m(0, 0) - m(1, 1) - m(2, 2)).sqrt() * lit::<T>(2.0);
            Quaternion::new(
                (m(2, 1) - m(1, 2)) / k,
                quarter * k,
                (m(0, 1) + m(1, 0)) / k,
                (m(0, 2) + m(2, 0)) / k,
            )
        } else if m(1, 1) > m(2, 2) {
            let k = (one + m(1, 1) - m(0, 0) - m(2, 2)).sqrt() * lit::<T>(2.0);
            Quaternion::new(
                (m(0, 2) - m(2, 0)) / k,
                (m(0, 1) + m(1, 0)) / k,
                quarter * k,
                (m(1, 2) + m(2, 1)) / k,
            )
        } else {
            let k = (one + m(2, 2) - m(0, 0) - m(1, 1)).sqrt() * lit::<T>(2.0);
            Quaternion::new(
                (m(1, 0) - m(0, 1)) / k,
                (m(0, 2) + m(2, 0)) / k,
                (m(1, 2) + m(2, 1)) / k,
                quarter * k,
            )
        };
        q.normalized()
    }

    #[inline]
    pub fn matrix(&self) -> Matrix3<T> {
        self.axes
    }

    #[inline]
    pub fn x_axis(&self) -> Vector3<T> {
        self.axes.cols[0]
    }

    #[inline]
    pub fn y_axis(&self) -> Vector3<T> {
        self.axes.cols[1]
    }

    #[inline]
    pub fn z_axis(&self) -> Vector3<T> {
        self.axes.cols[2]
    }

    /// Local vector expressed in the parent space
    #[inline]
    pub fn to_parent(&self, v: Vector3<T>) -> Vector3<T> {
        self.axes * v
    }

    /// Parent vector expressed in the local space
    #[inline]
    pub fn to_local(&self, v: Vector3<T>) -> Vector3<T> {
        self.axes.transpose() * v
    }

    /// Inverse of the axis matrix. For an orthonormal basis this equals the
    /// transpose; a basis bent by [`rotate`](Self::rotate) with a general
    /// linear transform needs the full inverse.
    #[inline]
    pub fn inverse_matrix(&self) -> Matrix3<T> {
        self.axes.inverse()
    }

    /// Left-multiply by `transform`
    pub fn rotate(&mut self, transform: Matrix3<T>) -> &mut Self {
        self.axes = transform * self.axes;
        self
    }

    /// Pure form of [`rotate`](Self::rotate)
    pub fn rotated(mut self, transform: Matrix3<T>) -> Self {
        self.rotate(transform);
        self
    }

    /// Apply `self` inside `parent`: the result maps local vectors of
    /// `self` directly into the space of `parent`'s parent.
    pub fn compose(&self, parent: &Self) -> Self {
        Self { axes: parent.axes * self.axes }
    }

    /// True if the axes are unit length and mutually perpendicular
    pub fn is_orthonormal(&self, epsilon: T) -> bool {
        (self.axes.transpose() * self.axes).equivalent(&Matrix3::identity(), epsilon)
    }

    /// Gram-Schmidt on the axes, keeping the direction of X
    pub fn orthonormalized(&self) -> Self {
        let x = self.x_axis().normalized();
        let y = (self.y_axis() - x * x.dot(self.y_axis())).normalized();
        let z = x.cross(y);
        Self::from_axes(x, y, z)
    }
}

impl<T: Real> Equivalent<T> for Basis<T> {
    fn equivalent(&self, other: &Self, epsilon: T) -> bool {
        self.axes.equivalent(&other.axes, epsilon)
    }
}
