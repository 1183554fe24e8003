//! Raw N-component tuples
//!
//! Tuples carry no geometric meaning. They are the plain aggregate that
//! [`Vector2`](crate::Vector2), [`Point2`](crate::Point2) and friends
//! convert to and from.

use serde::{Deserialize, Serialize};

use crate::scalar::Real;

/// Two scalar components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tuple2<T = f32> {
    pub x: T,
    pub y: T,
}

/// Three scalar components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tuple3<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Four scalar components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tuple4<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Tuple2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Tuple3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T> Tuple4<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl_componentwise!(Tuple2, 2 { 0 => x, 1 => y });
impl_componentwise!(Tuple3, 3 { 0 => x, 1 => y, 2 => z });
impl_componentwise!(Tuple4, 4 { 0 => x, 1 => y, 2 => z, 3 => w });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;

    #[test]
    fn test_new_and_index() {
        let t = Tuple4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(t[0], 1.0);
        assert_eq!(t[1], 2.0);
        assert_eq!(t[2], 3.0);
        assert_eq!(t[3], 4.0);
    }

    #[test]
    fn test_index_mut() {
        let mut t = Tuple3::new(1.0, 2.0, 3.0);
        t[2] = 9.0;
        assert_eq!(t, Tuple3::new(1.0, 2.0, 9.0));
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_index_out_of_range() {
        let t = Tuple2::new(1.0, 2.0);
        let _ = t[2];
    }

    #[test]
    fn test_copy_keeps_every_component() {
        // Copies must be exact; no component may be taken from a neighbour.
        let a = Tuple4::new(1.0, 2.0, 3.0, 4.0);
        let b = a;
        assert_eq!(b.x, 1.0);
        assert_eq!(b.y, 2.0);
        assert_eq!(b.z, 3.0);
        assert_eq!(b.w, 4.0);

        let c = Tuple3::new(5.0, 6.0, 7.0);
        let d = c;
        assert_eq!(d, Tuple3::new(5.0, 6.0, 7.0));
    }

    #[test]
    fn test_add_sub_round_trip() {
        let a = Tuple3::new(1.0, -2.0, 3.0);
        let b = Tuple3::new(10.0, 20.0, -30.0);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn test_compound_assign() {
        let mut t = Tuple2::new(1.0, 2.0);
        t += Tuple2::new(1.0, 1.0);
        assert_eq!(t, Tuple2::new(2.0, 3.0));
        t -= Tuple2::new(2.0, 2.0);
        assert_eq!(t, Tuple2::new(0.0, 1.0));
        t *= 4.0;
        assert_eq!(t, Tuple2::new(0.0, 4.0));
        t /= 2.0;
        assert_eq!(t, Tuple2::new(0.0, 2.0));
    }

    #[test]
    fn test_neg() {
        let t = Tuple4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-t, Tuple4::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn test_scalar_mul_both_sides() {
        let t = Tuple2::new(1.5f32, -2.0);
        assert_eq!(t * 2.0, Tuple2::new(3.0, -4.0));
        assert_eq!(2.0 * t, t * 2.0);
    }

    #[test]
    fn test_div_by_zero_is_nan() {
        let t = Tuple3::new(1.0f64, 0.0, -1.0);
        assert!((t / 0.0).is_nan());
        assert!((t / -0.0).is_nan());

        let mut u = Tuple4::new(1.0f32, 2.0, 3.0, 4.0);
        u /= 0.0;
        assert!(u.is_nan());
    }

    #[test]
    fn test_nan_helpers() {
        let t = Tuple2::new(f64::NAN, 1.0);
        assert!(t.has_nan());
        assert!(!t.is_nan());
        assert!(Tuple2::<f64>::nan().is_nan());
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Tuple2::new(0.1f64 + 0.2, 1.0);
        let b = Tuple2::new(0.3f64, 1.0);
        assert_ne!(a, b);
        assert!(approx_eq(&a, &b));
    }

    #[test]
    fn test_array_conversions() {
        let t: Tuple3<f32> = [1.0, 2.0, 3.0].into();
        assert_eq!(t, Tuple3::new(1.0, 2.0, 3.0));
        let a: [f32; 3] = t.into();
        assert_eq!(a, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_pod_cast() {
        let t = [Tuple2::new(1.0f32, 2.0), Tuple2::new(3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&t);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
