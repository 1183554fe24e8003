//! Affine 2D position
//!
//! A [`Point2`] is a location, not a displacement. The legal arithmetic is
//! point ± vector → point, vector + point → point and point − point → vector.
//! There is no point + point, no scalar multiplication and no negation.

use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::scalar::{Equivalent, Real};
use crate::tuple::Tuple2;
use crate::vector::Vector2;

/// Position in a 2D affine space
///
/// ```
/// use agent2d_math::{Point2, Vector2};
///
/// let p = Point2::ORIGIN + Vector2::new(60.0f32, 30.0);
/// assert_eq!(p - Point2::ORIGIN, Vector2::new(60.0, 30.0));
/// ```
///
/// Adding two points has no meaning and does not compile:
///
/// ```compile_fail
/// use agent2d_math::Point2;
///
/// let _ = Point2::new(1.0f32, 1.0) + Point2::new(1.0f32, 1.0);
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2<T = f32> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Real> Point2<T> {
    pub const ORIGIN: Self = Self::new(T::ZERO, T::ZERO);

    /// The point reached from the origin by `v`
    #[inline]
    pub fn from_vector(v: Vector2<T>) -> Self {
        Self::new(v.x, v.y)
    }

    /// Displacement from the origin to this point
    #[inline]
    pub fn to_vector(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn distance(self, other: Self) -> T {
        (other - self).length()
    }

    /// Affine combination `self + (other - self) * t`
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl<T: Real> Add<Vector2<T>> for Point2<T> {
    type Output = Self;
    #[inline]
    fn add(self, v: Vector2<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl<T: Real> AddAssign<Vector2<T>> for Point2<T> {
    #[inline]
    fn add_assign(&mut self, v: Vector2<T>) {
        self.x += v.x;
        self.y += v.y;
    }
}

impl<T: Real> Sub<Vector2<T>> for Point2<T> {
    type Output = Self;
    #[inline]
    fn sub(self, v: Vector2<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

/// `v + p`, the same point as `p + v`
impl<T: Real> Add<Point2<T>> for Vector2<T> {
    type Output = Point2<T>;
    #[inline]
    fn add(self, p: Point2<T>) -> Point2<T> {
        p + self
    }
}

impl<T: Real> SubAssign<Vector2<T>> for Point2<T> {
    #[inline]
    fn sub_assign(&mut self, v: Vector2<T>) {
        self.x -= v.x;
        self.y -= v.y;
    }
}

impl<T: Real> Sub for Point2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn sub(self, other: Self) -> Vector2<T> {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl<T> Index<usize> for Point2<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Point2 index out of range: {} (len 2)", index),
        }
    }
}

impl<T> IndexMut<usize> for Point2<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Point2 index out of range: {} (len 2)", index),
        }
    }
}

impl<T: Real> Equivalent<T> for Point2<T> {
    #[inline]
    fn equivalent(&self, other: &Self, epsilon: T) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl<T: Real> From<Tuple2<T>> for Point2<T> {
    #[inline]
    fn from(t: Tuple2<T>) -> Self {
        Self::new(t.x, t.y)
    }
}

impl<T: Real> From<Point2<T>> for Tuple2<T> {
    #[inline]
    fn from(p: Point2<T>) -> Self {
        Tuple2::new(p.x, p.y)
    }
}

impl<T: Real> From<[T; 2]> for Point2<T> {
    #[inline]
    fn from(a: [T; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

// SAFETY: #[repr(C)] with two fields of type T.
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Point2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Point2<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;

    #[test]
    fn test_point_plus_vector() {
        let p = Point2::new(0.0, 0.0) + Vector2::new(60.0, 30.0);
        assert_eq!(p, Point2::new(60.0, 30.0));
    }

    #[test]
    fn test_point_minus_point_is_vector() {
        let v = Point2::new(60.0, 30.0) - Point2::new(0.0, 0.0);
        assert_eq!(v, Vector2::new(60.0, 30.0));
    }

    #[test]
    fn test_vector_plus_point() {
        let p = Vector2::new(60.0, 30.0) + Point2::new(1.0, 2.0);
        assert_eq!(p, Point2::new(61.0, 32.0));
        assert_eq!(p, Point2::new(1.0, 2.0) + Vector2::new(60.0, 30.0));
    }

    #[test]
    fn test_origin_const() {
        assert_eq!(Point2::<f64>::ORIGIN, Point2::new(0.0, 0.0));
        assert_eq!(Point2::<f32>::ORIGIN, Point2::default());
    }

    #[test]
    fn test_point_minus_vector() {
        let p = Point2::new(5.0, 5.0) - Vector2::new(1.0, 2.0);
        assert_eq!(p, Point2::new(4.0, 3.0));
    }

    #[test]
    fn test_compound_assign() {
        let mut p = Point2::new(1.0, 1.0);
        p += Vector2::new(2.0, 3.0);
        assert_eq!(p, Point2::new(3.0, 4.0));
        p -= Vector2::new(3.0, 4.0);
        assert_eq!(p, Point2::ORIGIN);
    }

    #[test]
    fn test_vector_round_trip() {
        let v = Vector2::new(3.0, -7.0);
        assert_eq!(Point2::from_vector(v).to_vector(), v);
        assert_eq!(Point2::ORIGIN + v, Point2::from_vector(v));
    }

    #[test]
    fn test_distance_and_lerp() {
        let a = Point2::new(1.0f64, 1.0);
        let b = Point2::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert!(approx_eq(&a.lerp(b, 0.5), &Point2::new(2.5, 3.0)));
    }

    #[test]
    fn test_index() {
        let mut p = Point2::new(1.0, 2.0);
        assert_eq!(p[0], 1.0);
        p[1] = 9.0;
        assert_eq!(p.y, 9.0);
    }

    #[test]
    fn test_tuple_conversion() {
        let p: Point2<f32> = Tuple2::new(1.0, 2.0).into();
        assert_eq!(Tuple2::from(p), Tuple2::new(1.0, 2.0));
    }
}
