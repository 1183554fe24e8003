//! Scalar abstraction and tolerance comparison
//!
//! Every type in this crate is generic over a [`Real`] scalar: any
//! `num_traits` float with compile-time `ZERO`/`ONE`. Undefined results
//! (division by zero, singular inversion) are reported as NaN rather than by
//! panicking.

use std::fmt;

use num_traits::{ConstOne, ConstZero, Float, FloatConst, FromPrimitive, NumAssign};

/// Floating point scalar used by every math type
pub trait Real:
    Float
    + FloatConst
    + FromPrimitive
    + NumAssign
    + ConstZero
    + ConstOne
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Default tolerance for [`Equivalent`] comparisons
    const EPSILON: Self;
}

impl Real for f32 {
    const EPSILON: Self = 1e-6;
}

impl Real for f64 {
    const EPSILON: Self = 1e-6;
}

/// `value` as a `T`, NaN if it is not representable
#[inline]
pub(crate) fn lit<T: Real>(value: f64) -> T {
    T::from_f64(value).unwrap_or_else(T::nan)
}

/// Epsilon-tolerant comparison
///
/// `==` on the math types is exact. Use this for anything that went through
/// a square root, a trig function or a division.
pub trait Equivalent<T: Real> {
    /// True when every component differs by at most `epsilon`.
    /// NaN is never equivalent to anything.
    fn equivalent(&self, other: &Self, epsilon: T) -> bool;
}

impl Equivalent<f32> for f32 {
    #[inline]
    fn equivalent(&self, other: &Self, epsilon: f32) -> bool {
        (*self - *other).abs() <= epsilon
    }
}

impl Equivalent<f64> for f64 {
    #[inline]
    fn equivalent(&self, other: &Self, epsilon: f64) -> bool {
        (*self - *other).abs() <= epsilon
    }
}

/// Free-function form of [`Equivalent::equivalent`]
#[inline]
pub fn equivalent<T: Real, E: Equivalent<T>>(a: &E, b: &E, epsilon: T) -> bool {
    a.equivalent(b, epsilon)
}

/// [`equivalent`] with the default epsilon of 1e-6
#[inline]
pub fn approx_eq<T: Real, E: Equivalent<T>>(a: &E, b: &E) -> bool {
    a.equivalent(b, T::EPSILON)
}

/// `v` limited to `[lower, upper]`
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lower: T, upper: T) -> T {
    if v < lower {
        lower
    } else if v > upper {
        upper
    } else {
        v
    }
}

/// Sign of `a` as -1, 0 or 1. NaN maps to 0.
#[inline]
pub fn sgn<T: Real>(a: T) -> T {
    if a > T::ZERO {
        T::ONE
    } else if a < T::ZERO {
        -T::ONE
    } else {
        T::ZERO
    }
}

/// Degrees to radians
#[inline]
pub fn to_radian<T: Real>(degrees: T) -> T {
    degrees * T::PI() / lit(180.0)
}

/// Radians to degrees
#[inline]
pub fn to_degrees<T: Real>(radians: T) -> T {
    radians * lit(180.0) / T::PI()
}

/// Angle constants, evaluated at compile time
pub mod constants {
    pub const PI: f64 = std::f64::consts::PI;
    pub const TAU: f64 = 2.0 * PI;
    /// Half of pi (a right angle)
    pub const PI_2: f64 = PI / 2.0;
    pub const PI_4: f64 = PI / 4.0;
    pub const DEG_TO_RAD: f64 = PI / 180.0;
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}
