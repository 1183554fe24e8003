//! Square matrices (column-major)
//!
//! `MatrixN` stores N column vectors. `m[c]` is column `c` and `m[c][r]`
//! is the element at row `r`, column `c`; [`Matrix2::get`] and friends take
//! `(row, col)` for readability.
//!
//! Determinants use Laplace expansion along the first row with the
//! `(N-1)x(N-1)` submatrices. The inverse is `adjoint / determinant`.
//! A singular matrix (determinant exactly zero) inverts to all-NaN instead
//! of panicking; callers check with [`Matrix2::has_nan`].

use serde::{Deserialize, Serialize};

use crate::scalar::Real;
use crate::vector::{Vector2, Vector3, Vector4};

/// 2x2 matrix
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2<T = f32> {
    pub cols: [Vector2<T>; 2],
}

/// 3x3 matrix
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix3<T = f32> {
    pub cols: [Vector3<T>; 3],
}

/// 4x4 matrix
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix4<T = f32> {
    pub cols: [Vector4<T>; 4],
}

macro_rules! impl_matrix_common {
    ($name:ident, $vec:ident, $n:literal) => {
        #[allow(clippy::needless_range_loop)]
        impl<T: Real> $name<T> {
            #[inline]
            pub fn from_columns(cols: [$vec<T>; $n]) -> Self {
                Self { cols }
            }

            /// Build from row-major nested arrays, as a matrix is written on paper
            pub fn from_rows(rows: [[T; $n]; $n]) -> Self {
                let mut m = Self::zero();
                for r in 0..$n {
                    for c in 0..$n {
                        m.cols[c][r] = rows[r][c];
                    }
                }
                m
            }

            pub fn zero() -> Self {
                Self { cols: [$vec::splat(T::ZERO); $n] }
            }

            pub fn identity() -> Self {
                let mut m = Self::zero();
                for i in 0..$n {
                    m.cols[i][i] = T::ONE;
                }
                m
            }

            /// All-NaN matrix, the result of inverting a singular matrix
            pub fn nan() -> Self {
                Self { cols: [$vec::nan(); $n] }
            }

            pub fn has_nan(&self) -> bool {
                self.cols.iter().any(|c| c.has_nan())
            }

            pub fn is_nan(&self) -> bool {
                self.cols.iter().all(|c| c.is_nan())
            }

            /// Element at `row`, `col`
            #[inline]
            pub fn get(&self, row: usize, col: usize) -> T {
                self.cols[col][row]
            }

            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: T) {
                self.cols[col][row] = value;
            }

            #[inline]
            pub fn column(&self, col: usize) -> $vec<T> {
                self.cols[col]
            }

            pub fn row(&self, row: usize) -> $vec<T> {
                let mut v = $vec::splat(T::ZERO);
                for c in 0..$n {
                    v[c] = self.cols[c][row];
                }
                v
            }

            pub fn transpose(&self) -> Self {
                let mut m = *self;
                for c in 0..$n {
                    for r in 0..$n {
                        m.cols[c][r] = self.cols[r][c];
                    }
                }
                m
            }

            /// Signed minor: `(-1)^(row + col) * minor(row, col)`
            #[inline]
            pub fn cofactor(&self, row: usize, col: usize) -> T {
                let minor = self.minor(row, col);
                if (row + col) % 2 == 0 {
                    minor
                } else {
                    -minor
                }
            }

            /// Laplace expansion along the first row
            pub fn determinant(&self) -> T {
                let mut det = T::ZERO;
                for c in 0..$n {
                    det += self.get(0, c) * self.cofactor(0, c);
                }
                det
            }

            /// Transpose of the cofactor matrix
            pub fn adjoint(&self) -> Self {
                let mut m = Self::zero();
                for r in 0..$n {
                    for c in 0..$n {
                        // element (c, r) of the adjoint is cofactor (r, c)
                        m.cols[r][c] = self.cofactor(r, c);
                    }
                }
                m
            }

            /// `adjoint / determinant`, or all-NaN when the determinant is zero
            pub fn inverse(&self) -> Self {
                let det = self.determinant();
                if det == T::ZERO {
                    return Self::nan();
                }
                self.adjoint() / det
            }

            /// In-place form of [`inverse`](Self::inverse)
            pub fn invert(&mut self) -> &mut Self {
                *self = self.inverse();
                self
            }

            /// Row-major nested arrays
            pub fn to_rows(&self) -> [[T; $n]; $n] {
                let mut rows = [[T::ZERO; $n]; $n];
                for r in 0..$n {
                    for c in 0..$n {
                        rows[r][c] = self.cols[c][r];
                    }
                }
                rows
            }
        }

        impl<T: Real> Default for $name<T> {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl<T: Real> std::ops::Add for $name<T> {
            type Output = Self;
            fn add(mut self, other: Self) -> Self {
                self += other;
                self
            }
        }

        impl<T: Real> std::ops::AddAssign for $name<T> {
            fn add_assign(&mut self, other: Self) {
                for (a, b) in self.cols.iter_mut().zip(other.cols) {
                    *a += b;
                }
            }
        }

        impl<T: Real> std::ops::Sub for $name<T> {
            type Output = Self;
            fn sub(mut self, other: Self) -> Self {
                self -= other;
                self
            }
        }

        impl<T: Real> std::ops::SubAssign for $name<T> {
            fn sub_assign(&mut self, other: Self) {
                for (a, b) in self.cols.iter_mut().zip(other.cols) {
                    *a -= b;
                }
            }
        }

        impl<T: Real> std::ops::Neg for $name<T> {
            type Output = Self;
            fn neg(self) -> Self {
                Self { cols: self.cols.map(|c| -c) }
            }
        }

        impl<T: Real> std::ops::Mul<T> for $name<T> {
            type Output = Self;
            fn mul(self, scalar: T) -> Self {
                Self { cols: self.cols.map(|c| c * scalar) }
            }
        }

        impl<T: Real> std::ops::MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, scalar: T) {
                for c in self.cols.iter_mut() {
                    *c *= scalar;
                }
            }
        }

        impl<T: Real> std::ops::Div<T> for $name<T> {
            type Output = Self;
            fn div(self, scalar: T) -> Self {
                if scalar == T::ZERO {
                    return Self::nan();
                }
                Self { cols: self.cols.map(|c| c / scalar) }
            }
        }

        impl<T: Real> std::ops::DivAssign<T> for $name<T> {
            fn div_assign(&mut self, scalar: T) {
                *self = *self / scalar;
            }
        }

        /// Right-multiplication by a column vector: `M * v`
        impl<T: Real> std::ops::Mul<$vec<T>> for $name<T> {
            type Output = $vec<T>;
            fn mul(self, v: $vec<T>) -> $vec<T> {
                let mut out = $vec::splat(T::ZERO);
                for c in 0..$n {
                    out += self.cols[c] * v[c];
                }
                out
            }
        }

        /// Row vector on the left: `v * M == M^T * v`
        impl<T: Real> std::ops::Mul<$name<T>> for $vec<T> {
            type Output = $vec<T>;
            fn mul(self, m: $name<T>) -> $vec<T> {
                let mut out = $vec::splat(T::ZERO);
                for c in 0..$n {
                    out[c] = m.cols[c].dot(self);
                }
                out
            }
        }

        impl std::ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;
            #[inline]
            fn mul(self, m: $name<f32>) -> $name<f32> {
                m * self
            }
        }

        impl std::ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;
            #[inline]
            fn mul(self, m: $name<f64>) -> $name<f64> {
                m * self
            }
        }

        /// `self * other` applies `other` first, then `self`
        impl<T: Real> std::ops::Mul for $name<T> {
            type Output = Self;
            fn mul(self, other: Self) -> Self {
                Self { cols: other.cols.map(|c| self * c) }
            }
        }

        impl<T: Real> std::ops::MulAssign for $name<T> {
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }

        impl<T> std::ops::Index<usize> for $name<T> {
            type Output = $vec<T>;
            #[inline]
            fn index(&self, col: usize) -> &$vec<T> {
                &self.cols[col]
            }
        }

        impl<T> std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, col: usize) -> &mut $vec<T> {
                &mut self.cols[col]
            }
        }

        impl<T: Real> $crate::Equivalent<T> for $name<T> {
            fn equivalent(&self, other: &Self, epsilon: T) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| $crate::Equivalent::equivalent(a, b, epsilon))
            }
        }

        // SAFETY: #[repr(C)] array of Pod columns.
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $name<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $name<T> {}
    };
}

/// Submatrix and minor for N >= 3, where the minor is the determinant of
/// the submatrix one size down
macro_rules! impl_submatrix {
    ($name:ident, $sub:ident, $n:literal) => {
        impl<T: Real> $name<T> {
            /// This matrix with `row` and `col` removed
            pub fn submatrix(&self, row: usize, col: usize) -> $sub<T> {
                let mut out = $sub::zero();
                let mut dc = 0;
                for c in 0..$n {
                    if c == col {
                        continue;
                    }
                    let mut dr = 0;
                    for r in 0..$n {
                        if r == row {
                            continue;
                        }
                        out.cols[dc][dr] = self.cols[c][r];
                        dr += 1;
                    }
                    dc += 1;
                }
                out
            }

            /// Determinant of [`submatrix`](Self::submatrix)
            #[inline]
            pub fn minor(&self, row: usize, col: usize) -> T {
                self.submatrix(row, col).determinant()
            }
        }
    };
}

impl_matrix_common!(Matrix2, Vector2, 2);
impl_matrix_common!(Matrix3, Vector3, 3);
impl_matrix_common!(Matrix4, Vector4, 4);

impl_submatrix!(Matrix3, Matrix2, 3);
impl_submatrix!(Matrix4, Matrix3, 4);

impl<T: Real> Matrix2<T> {
    /// Build from two columns
    pub fn new(c0: impl Into<Vector2<T>>, c1: impl Into<Vector2<T>>) -> Self {
        Self { cols: [c0.into(), c1.into()] }
    }

    /// Minor of a 2x2 matrix: the single element left after removing
    /// `row` and `col`
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> T {
        self.get(1 - row, 1 - col)
    }

    /// Counter-clockwise rotation by `angle` radians.
    ///
    /// Columns are `(cos, sin)` and `(-sin, cos)`.
    pub fn rotation(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::new(Vector2::new(c, s), Vector2::new(-s, c))
    }

    pub fn scale(sx: T, sy: T) -> Self {
        Self::new(Vector2::new(sx, T::ZERO), Vector2::new(T::ZERO, sy))
    }
}

impl<T: Real> Matrix3<T> {
    /// Build from three columns
    pub fn new(
        c0: impl Into<Vector3<T>>,
        c1: impl Into<Vector3<T>>,
        c2: impl Into<Vector3<T>>,
    ) -> Self {
        Self { cols: [c0.into(), c1.into(), c2.into()] }
    }

    pub fn scale(s: Vector3<T>) -> Self {
        let mut m = Self::zero();
        m.set(0, 0, s.x);
        m.set(1, 1, s.y);
        m.set(2, 2, s.z);
        m
    }

    /// Rotation about the X axis by `angle` radians
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::new(
            Vector3::unit_x(),
            Vector3::new(T::ZERO, c, s),
            Vector3::new(T::ZERO, -s, c),
        )
    }

    /// Rotation about the Y axis by `angle` radians
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::new(
            Vector3::new(c, T::ZERO, -s),
            Vector3::unit_y(),
            Vector3::new(s, T::ZERO, c),
        )
    }

    /// Rotation about the Z axis by `angle` radians
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::new(
            Vector3::new(c, s, T::ZERO),
            Vector3::new(-s, c, T::ZERO),
            Vector3::unit_z(),
        )
    }

    /// Rotation about an arbitrary axis (Rodrigues). The axis is normalised.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let a = axis.normalized();
        let (s, c) = (angle.sin(), angle.cos());
        let t = T::ONE - c;
        Self::new(
            Vector3::new(t * a.x * a.x + c, t * a.x * a.y + s * a.z, t * a.x * a.z - s * a.y),
            Vector3::new(t * a.x * a.y - s * a.z, t * a.y * a.y + c, t * a.y * a.z + s * a.x),
            Vector3::new(t * a.x * a.z + s * a.y, t * a.y * a.z - s * a.x, t * a.z * a.z + c),
        )
    }
}

impl<T: Real> Matrix4<T> {
    /// Build from four columns
    pub fn new(
        c0: impl Into<Vector4<T>>,
        c1: impl Into<Vector4<T>>,
        c2: impl Into<Vector4<T>>,
        c3: impl Into<Vector4<T>>,
    ) -> Self {
        Self { cols: [c0.into(), c1.into(), c2.into(), c3.into()] }
    }

    /// Embed a linear transform in the upper-left 3x3 block
    pub fn from_matrix3(m: Matrix3<T>) -> Self {
        Self::new(
            m.cols[0].extend(T::ZERO),
            m.cols[1].extend(T::ZERO),
            m.cols[2].extend(T::ZERO),
            Vector4::new(T::ZERO, T::ZERO, T::ZERO, T::ONE),
        )
    }

    /// Homogeneous translation
    pub fn translation(offset: Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.cols[3] = offset.extend(T::ONE);
        m
    }

    /// Transform a position (`w = 1`)
    pub fn transform_point3(&self, p: Vector3<T>) -> Vector3<T> {
        (*self * p.extend(T::ONE)).xyz()
    }

    /// Transform a direction (`w = 0`), ignoring translation
    pub fn transform_vector3(&self, v: Vector3<T>) -> Vector3<T> {
        (*self * v.extend(T::ZERO)).xyz()
    }
}
