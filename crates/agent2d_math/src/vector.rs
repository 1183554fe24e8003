//! Free geometric vectors
//!
//! Vectors add length, normalisation and the inner product on top of the
//! tuple arithmetic. [`Vector3`] also has the cross product.

use serde::{Deserialize, Serialize};

use crate::scalar::{clamp, lit, Real};
use crate::tuple::{Tuple2, Tuple3, Tuple4};

/// 2D vector
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2<T = f32> {
    pub x: T,
    pub y: T,
}

/// 3D vector
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// 4D vector
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_componentwise!(Vector2, 2 { 0 => x, 1 => y });
impl_componentwise!(Vector3, 3 { 0 => x, 1 => y, 2 => z });
impl_componentwise!(Vector4, 4 { 0 => x, 1 => y, 2 => z, 3 => w });

impl_same_shape_from!(Tuple2, Vector2 { x, y });
impl_same_shape_from!(Tuple3, Vector3 { x, y, z });
impl_same_shape_from!(Tuple4, Vector4 { x, y, z, w });

/// Norms and interpolation, identical for every dimension
macro_rules! impl_vector_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl<T: Real> $name<T> {
            /// Inner product
            #[inline]
            pub fn dot(self, other: Self) -> T {
                T::ZERO $(+ self.$field * other.$field)+
            }

            /// Length squared (no square root)
            #[inline]
            pub fn length_squared(self) -> T {
                self.dot(self)
            }

            /// Euclidean length
            #[inline]
            pub fn length(self) -> T {
                self.length_squared().sqrt()
            }

            /// Unit vector in the same direction.
            ///
            /// A zero vector has no direction and normalises to NaN.
            #[inline]
            pub fn normalized(self) -> Self {
                self / self.length()
            }

            /// In-place form of [`normalized`](Self::normalized)
            #[inline]
            pub fn normalize(&mut self) -> &mut Self {
                *self = self.normalized();
                self
            }

            /// Linear interpolation, `self` at `t = 0` and `other` at `t = 1`
            #[inline]
            pub fn lerp(self, other: Self, t: T) -> Self {
                self + (other - self) * t
            }

            /// Normalised linear interpolation
            #[inline]
            pub fn nlerp(self, other: Self, t: T) -> Self {
                self.lerp(other, t).normalized()
            }

            /// Spherical interpolation between the directions of `self` and
            /// `other`. The result is always unit length.
            ///
            /// Nearly parallel inputs fall back to [`nlerp`](Self::nlerp).
            /// Opposite directions have no unique arc and give NaN.
            pub fn slerp(self, other: Self, t: T) -> Self {
                let a = self.normalized();
                let b = other.normalized();
                let d = a.dot(b);
                if (d - T::ONE).abs() <= lit(1e-4) {
                    return a.nlerp(b, t);
                }
                let d = clamp(d, -T::ONE, T::ONE);
                let theta = d.acos() * t;
                let ortho = (b - a * d).normalized();
                a * theta.cos() + ortho * theta.sin()
            }
        }
    };
}

impl_vector_ops!(Vector2 { x, y });
impl_vector_ops!(Vector3 { x, y, z });
impl_vector_ops!(Vector4 { x, y, z, w });

impl<T> Vector2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Real> Vector2<T> {
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    /// Counter-clockwise perpendicular (rotated by +90 degrees)
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T> Vector3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Real> Vector3<T> {
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    pub fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// Outer (cross) product, right-handed
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Extend with a `w` component
    #[inline]
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl<T> Vector4<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Real> Vector4<T> {
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Drop the `w` component
    #[inline]
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;

    #[test]
    fn test_dot() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);

        let v2 = Vector4::new(1.0f32, 1.0, 1.0, 1.0);
        assert!(approx_eq(&v2.length(), &2.0));
    }

    #[test]
    fn test_normalized_is_unit_length() {
        let vectors = [
            Vector3::new(3.0f64, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.001, 1e3, 7.5),
        ];
        for v in vectors {
            assert!(approx_eq(&v.normalized().length(), &1.0), "{:?}", v);
        }
    }

    #[test]
    fn test_normalize_in_place() {
        let mut v = Vector2::new(0.0f64, -2.0);
        v.normalize();
        assert_eq!(v, Vector2::new(0.0, -1.0));
    }

    #[test]
    fn test_normalize_zero_vector_is_nan() {
        let v = Vector3::<f64>::zero().normalized();
        assert!(v.is_nan());
    }

    #[test]
    fn test_cross() {
        let x = Vector3::<f64>::unit_x();
        let y = Vector3::<f64>::unit_y();
        assert_eq!(x.cross(y), Vector3::unit_z());
        assert_eq!(y.cross(x), -Vector3::unit_z());

        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        let c = a.cross(b);
        assert_eq!(c, Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(c.dot(a), 0.0);
        assert_eq!(c.dot(b), 0.0);
    }

    #[test]
    fn test_perpendicular() {
        let v = Vector2::new(2.0, 1.0);
        assert_eq!(v.perpendicular(), Vector2::new(-1.0, 2.0));
        assert_eq!(v.dot(v.perpendicular()), 0.0);
    }

    #[test]
    fn test_lerp() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(10.0, -10.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 0.5), Vector2::new(5.0, -5.0));
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_nlerp_is_unit_length() {
        let a = Vector2::new(2.0f64, 0.0);
        let b = Vector2::new(0.0, 3.0);
        let mid = a.nlerp(b, 0.5);
        assert!(approx_eq(&mid.length(), &1.0));
        assert!(approx_eq(&mid, &Vector2::new(1.0, 1.5).normalized()));
    }

    #[test]
    fn test_slerp_quarter_turn() {
        let x = Vector2::<f64>::unit_x();
        let y = Vector2::<f64>::unit_y();
        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert!(approx_eq(&x.slerp(y, 0.5), &Vector2::new(half, half)));
        assert!(approx_eq(&x.slerp(y, 0.0), &x));
        assert!(approx_eq(&x.slerp(y, 1.0), &y));

        // constant angular speed: a third of the way is 30 degrees
        let third = x.slerp(y, 1.0 / 3.0);
        let (s, c) = (std::f64::consts::PI / 6.0).sin_cos();
        assert!(approx_eq(&third, &Vector2::new(c, s)));
    }

    #[test]
    fn test_slerp_ignores_input_length() {
        let a = Vector3::new(0.0f64, 0.0, 5.0);
        let b = Vector3::new(0.0, 0.25, 0.0);
        for t in [0.0, 0.2, 0.7, 1.0] {
            assert!(approx_eq(&a.slerp(b, t).length(), &1.0), "t = {}", t);
        }
    }

    #[test]
    fn test_slerp_parallel_and_opposite() {
        let a = Vector2::new(1.0f64, 1.0);
        assert!(approx_eq(&a.slerp(a * 3.0, 0.5), &a.normalized()));

        let opposite = Vector2::new(1.0f64, 0.0).slerp(Vector2::new(-1.0, 0.0), 0.5);
        assert!(opposite.is_nan());
    }

    #[test]
    fn test_tuple_conversions() {
        let t = Tuple3::new(1.0, 2.0, 3.0);
        let v: Vector3<f64> = t.into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Tuple3::from(v), t);
    }

    #[test]
    fn test_copy_keeps_every_component() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let w = v;
        assert_eq!(w.x, 1.0);
        assert_eq!(w.y, 2.0);
        assert_eq!(w.z, 3.0);
    }

    #[test]
    fn test_extend_and_xyz() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let v4 = v.extend(4.0);
        assert_eq!(v4, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v4.xyz(), v);
    }
}
