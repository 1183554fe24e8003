//! Simple 2D shapes for draw dispatch
//!
//! Shapes are pure geometric data: no colours, no pens. A canvas matches on
//! [`Polytype`] to pick the primitive to draw.

use serde::{Deserialize, Serialize};

use crate::frame::Frame2;
use crate::point::Point2;
use crate::scalar::{lit, Real};
use crate::vector::Vector2;

/// Discriminant of a [`Polytype`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolytypeKind {
    Circle,
    Rect,
    Triangle,
}

/// Circle given by its centre and radius
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle<T = f32> {
    pub origin: Point2<T>,
    pub radius: T,
}

/// Axis-aligned rectangle given by two opposite corners
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect<T = f32> {
    /// Corner with the smaller coordinates
    pub min: Point2<T>,
    /// Corner with the larger coordinates
    pub max: Point2<T>,
}

/// Triangle given by its three vertices
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle<T = f32> {
    pub vertices: [Point2<T>; 3],
}

/// Line segment between two points, with a unit normal (for walls)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment<T = f32> {
    pub start: Point2<T>,
    pub end: Point2<T>,
    /// Unit length, set at construction
    normal: Vector2<T>,
}

/// Any drawable shape
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Polytype<T = f32> {
    Circle(Circle<T>),
    Rect(Rect<T>),
    Triangle(Triangle<T>),
}

impl<T: Real> Circle<T> {
    pub fn new(origin: Point2<T>, radius: T) -> Self {
        Self { origin, radius }
    }
}

impl<T: Real> Rect<T> {
    /// Build from any two opposite corners
    pub fn from_corners(a: Point2<T>, b: Point2<T>) -> Self {
        let lo = |p: T, q: T| if p < q { p } else { q };
        let hi = |p: T, q: T| if p < q { q } else { p };
        Self {
            min: Point2::new(lo(a.x, b.x), lo(a.y, b.y)),
            max: Point2::new(hi(a.x, b.x), hi(a.y, b.y)),
        }
    }

    /// Rectangle of `size` centred on `center`
    pub fn from_center_size(center: Point2<T>, size: Vector2<T>) -> Self {
        let half = size * lit::<T>(0.5);
        Self::from_corners(center - half, center + half)
    }

    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2<T> {
        self.min.lerp(self.max, lit::<T>(0.5))
    }
}

impl<T: Real> Triangle<T> {
    pub fn new(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Self {
        Self { vertices: [a, b, c] }
    }

    pub fn centroid(&self) -> Point2<T> {
        let [a, b, c] = self.vertices;
        let sum = (a - Point2::ORIGIN) + (b - Point2::ORIGIN) + (c - Point2::ORIGIN);
        Point2::from_vector(sum / lit::<T>(3.0))
    }

    /// Signed area, positive when the vertices wind counter-clockwise
    pub fn signed_area(&self) -> T {
        let [a, b, c] = self.vertices;
        let (ab, ac) = (b - a, c - a);
        (ab.x * ac.y - ab.y * ac.x) * lit::<T>(0.5)
    }

    /// Vertices mapped from `frame`'s local space into its parent
    pub fn transformed(&self, frame: &Frame2<T>) -> Self {
        Self { vertices: self.vertices.map(|v| frame.to_parent(v)) }
    }
}

impl<T: Real> Segment<T> {
    /// Segment whose normal is the counter-clockwise perpendicular of
    /// `end - start`. A zero-length segment gets a NaN normal.
    pub fn new(start: Point2<T>, end: Point2<T>) -> Self {
        Self::with_normal(start, end, (end - start).perpendicular())
    }

    /// Segment with an explicit normal, normalised here
    pub fn with_normal(start: Point2<T>, end: Point2<T>, normal: Vector2<T>) -> Self {
        Self {
            start,
            end,
            normal: normal.normalized(),
        }
    }

    #[inline]
    pub fn normal(&self) -> Vector2<T> {
        self.normal
    }

    pub fn direction(&self) -> Vector2<T> {
        self.end - self.start
    }

    pub fn length(&self) -> T {
        self.direction().length()
    }

    pub fn midpoint(&self) -> Point2<T> {
        self.start.lerp(self.end, lit::<T>(0.5))
    }

    pub fn translated(&self, offset: Vector2<T>) -> Self {
        Self { start: self.start + offset, end: self.end + offset, ..*self }
    }

    /// Endpoints and normal mapped from `frame`'s local space into its parent
    pub fn transformed(&self, frame: &Frame2<T>) -> Self {
        Self::with_normal(
            frame.to_parent(self.start),
            frame.to_parent(self.end),
            frame.to_parent_vector(self.normal),
        )
    }
}

impl<T: Real> Polytype<T> {
    pub fn kind(&self) -> PolytypeKind {
        match self {
            Polytype::Circle(_) => PolytypeKind::Circle,
            Polytype::Rect(_) => PolytypeKind::Rect,
            Polytype::Triangle(_) => PolytypeKind::Triangle,
        }
    }

    /// Centre of the circle, centre of the rectangle or triangle centroid
    pub fn centroid(&self) -> Point2<T> {
        match self {
            Polytype::Circle(c) => c.origin,
            Polytype::Rect(r) => r.center(),
            Polytype::Triangle(t) => t.centroid(),
        }
    }

    pub fn translated(&self, offset: Vector2<T>) -> Self {
        match *self {
            Polytype::Circle(c) => Polytype::Circle(Circle::new(c.origin + offset, c.radius)),
            Polytype::Rect(r) => Polytype::Rect(Rect {
                min: r.min + offset,
                max: r.max + offset,
            }),
            Polytype::Triangle(t) => Polytype::Triangle(Triangle {
                vertices: t.vertices.map(|v| v + offset),
            }),
        }
    }
}

impl<T> From<Circle<T>> for Polytype<T> {
    fn from(c: Circle<T>) -> Self {
        Polytype::Circle(c)
    }
}

impl<T> From<Rect<T>> for Polytype<T> {
    fn from(r: Rect<T>) -> Self {
        Polytype::Rect(r)
    }
}

impl<T> From<Triangle<T>> for Polytype<T> {
    fn from(t: Triangle<T>) -> Self {
        Polytype::Triangle(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_kind_discriminant() {
        let shapes: [Polytype<f64>; 3] = [
            Circle::new(Point2::ORIGIN, 1.0).into(),
            Rect::from_corners(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)).into(),
            Triangle::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)).into(),
        ];
        let kinds: Vec<_> = shapes.iter().map(Polytype::kind).collect();
        assert_eq!(kinds, vec![PolytypeKind::Circle, PolytypeKind::Rect, PolytypeKind::Triangle]);
    }

    #[test]
    fn test_rect_from_corners_orders_components() {
        let r = Rect::from_corners(Point2::new(5.0, -1.0), Point2::new(1.0, 3.0));
        assert_eq!(r.min, Point2::new(1.0, -1.0));
        assert_eq!(r.max, Point2::new(5.0, 3.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 4.0);
        assert_eq!(r.center(), Point2::new(3.0, 1.0));
    }

    #[test]
    fn test_rect_from_center_size() {
        let r = Rect::from_center_size(Point2::new(60.0, 30.0), Vector2::new(20.0, 10.0));
        assert_eq!(r.min, Point2::new(50.0, 25.0));
        assert_eq!(r.max, Point2::new(70.0, 35.0));
        assert_eq!(r.center(), Point2::new(60.0, 30.0));
    }

    #[test]
    fn test_triangle_centroid_and_area() {
        let t = Triangle::new(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0), Point2::new(0.0, 3.0));
        assert_eq!(t.centroid(), Point2::new(1.0, 1.0));
        assert_eq!(t.signed_area(), 4.5);
        let flipped = Triangle::new(t.vertices[0], t.vertices[2], t.vertices[1]);
        assert_eq!(flipped.signed_area(), -4.5);
    }

    #[test]
    fn test_segment() {
        let s = Segment::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_eq!(s.direction(), Vector2::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.midpoint(), Point2::new(2.5, 3.0));
        assert_eq!(s.translated(Vector2::new(-1.0, -1.0)).start, Point2::ORIGIN);
    }

    #[test]
    fn test_segment_normal_is_unit() {
        let s = Segment::new(Point2::new(1.0f64, 1.0), Point2::new(4.0, 5.0));
        assert!(approx_eq(&s.normal(), &Vector2::new(-0.8, 0.6)));
        assert!(approx_eq(&s.normal().dot(s.direction()), &0.0));

        let wall = Segment::with_normal(Point2::ORIGIN, Point2::new(10.0f64, 0.0), Vector2::new(0.0, -4.0));
        assert_eq!(wall.normal(), Vector2::new(0.0, -1.0));
        assert_eq!(wall.translated(Vector2::new(0.0, 5.0)).normal(), wall.normal());
    }

    #[test]
    fn test_degenerate_segment_normal_is_nan() {
        let p = Point2::new(2.0f64, 2.0);
        assert!(Segment::new(p, p).normal().is_nan());
    }

    #[test]
    fn test_transformed_by_frame() {
        let frame = Frame2::from_origin(Point2::new(10.0, 10.0)).rotated(FRAC_PI_2);
        let s = Segment::new(Point2::ORIGIN, Point2::new(2.0, 0.0)).transformed(&frame);
        assert_eq!(s.start, Point2::new(10.0, 10.0));
        assert!(approx_eq(&s.end, &Point2::new(10.0, 12.0)));
        // local +y normal turns to parent -x
        assert!(approx_eq(&s.normal(), &Vector2::new(-1.0, 0.0)));
        assert!(approx_eq(&s.normal().length(), &1.0));

        let t = Triangle::new(Point2::ORIGIN, Point2::new(1.0, 0.0), Point2::new(0.0, 1.0))
            .transformed(&frame);
        assert!(approx_eq(&t.signed_area(), &0.5));
    }

    #[test]
    fn test_polytype_translated_keeps_kind() {
        let shape: Polytype<f64> = Circle::new(Point2::ORIGIN, 1.0).into();
        let moved = shape.translated(Vector2::new(2.0, 3.0));
        assert_eq!(moved.kind(), PolytypeKind::Circle);
        assert_eq!(moved.centroid(), Point2::new(2.0, 3.0));
    }
}
