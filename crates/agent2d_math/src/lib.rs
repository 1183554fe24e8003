//! Linear and affine algebra for agent2d
//!
//! Generic over a [`Real`] scalar (`f32` or `f64`). Every type is a plain
//! `Copy` value.
//!
//! ## Core Types
//!
//! - [`Tuple2`], [`Tuple3`], [`Tuple4`] - raw componentwise aggregates
//! - [`Vector2`], [`Vector3`], [`Vector4`] - free vectors with norms and products
//! - [`Point2`] - affine position (point ± vector, point − point)
//! - [`Matrix2`], [`Matrix3`], [`Matrix4`] - column-major square matrices
//! - [`Affine2`] - homogeneous 2D transform, splits into linear part + translation
//! - [`Quaternion`] - rotations, with `slerp`
//! - [`Basis`], [`Frame2`], [`Frame3`] - reference frames
//!
//! ## Shape Types
//!
//! - [`Polytype`] - `Circle`, `Rect` or `Triangle`, for draw dispatch
//! - [`Segment`] - line segment
//!
//! ## Undefined results
//!
//! Nothing here panics on bad numbers. Division by zero, inverting a
//! singular matrix and dividing by a zero quaternion all return a value of
//! the usual shape filled with NaN. Test with `has_nan()` / `is_nan()`.

#[macro_use]
mod macros;

pub mod scalar;
mod tuple;
mod vector;
mod point;
pub mod matrix;
pub mod affine;
pub mod quaternion;
mod basis;
pub mod frame;
pub mod shape;

pub use scalar::{approx_eq, clamp, constants, equivalent, sgn, to_degrees, to_radian, Equivalent, Real};
pub use tuple::{Tuple2, Tuple3, Tuple4};
pub use vector::{Vector2, Vector3, Vector4};
pub use point::Point2;
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use affine::Affine2;
pub use quaternion::{Quaternion, SLERP_THRESHOLD};
pub use basis::Basis;
pub use frame::{Frame2, Frame3};
pub use shape::{Circle, Polytype, PolytypeKind, Rect, Segment, Triangle};
