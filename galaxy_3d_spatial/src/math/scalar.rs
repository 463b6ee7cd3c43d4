/// Scalar types usable as box/rectangle coordinates.
///
/// Every concrete type carries its own sentinels: floating point boxes
/// use infinities for the empty state and NaN for an invalidated
/// rectangle, integer types use `MAX`/`MIN` for both.

use std::fmt;
use num_traits::{Float, Num};

/// Coordinate scalar (f32, f64, i32).
pub trait Scalar: Num + Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// `min` corner of an empty box. Loses every `min` comparison.
    const EMPTY_MIN: Self;
    /// `max` corner of an empty box. Loses every `max` comparison.
    const EMPTY_MAX: Self;
    /// Fill value for the `min` corner of a rectangle whose intersection is empty.
    const RECT_INVALID_MIN: Self;
    /// Fill value for the `max` corner of a rectangle whose intersection is empty.
    const RECT_INVALID_MAX: Self;

    /// `a < b ? a : b`
    #[inline]
    fn min_of(a: Self, b: Self) -> Self {
        if a < b { a } else { b }
    }

    /// `a > b ? a : b`
    #[inline]
    fn max_of(a: Self, b: Self) -> Self {
        if a > b { a } else { b }
    }

    /// `a + b`, wrapping around for integers so sentinel corners never panic.
    #[inline]
    fn wrapping_add(a: Self, b: Self) -> Self {
        a + b
    }

    /// `a - b`, wrapping around for integers.
    #[inline]
    fn wrapping_sub(a: Self, b: Self) -> Self {
        a - b
    }

    /// `a * b`, wrapping around for integers.
    #[inline]
    fn wrapping_mul(a: Self, b: Self) -> Self {
        a * b
    }
}

/// Floating point scalar (f32, f64).
///
/// Ray, segment, sphere and plane tests, transforms and frustum
/// extraction are only defined for these.
pub trait Real: Scalar + Float {
    /// 0.5, used for centers and extents.
    fn half() -> Self {
        Self::one() / (Self::one() + Self::one())
    }
}

impl Scalar for f32 {
    const EMPTY_MIN: Self = f32::INFINITY;
    const EMPTY_MAX: Self = f32::NEG_INFINITY;
    const RECT_INVALID_MIN: Self = f32::NAN;
    const RECT_INVALID_MAX: Self = f32::NAN;
}

impl Scalar for f64 {
    const EMPTY_MIN: Self = f64::INFINITY;
    const EMPTY_MAX: Self = f64::NEG_INFINITY;
    const RECT_INVALID_MIN: Self = f64::NAN;
    const RECT_INVALID_MAX: Self = f64::NAN;
}

impl Scalar for i32 {
    const EMPTY_MIN: Self = i32::MAX;
    const EMPTY_MAX: Self = i32::MIN;
    const RECT_INVALID_MIN: Self = i32::MAX;
    const RECT_INVALID_MAX: Self = i32::MIN;

    fn wrapping_add(a: Self, b: Self) -> Self {
        i32::wrapping_add(a, b)
    }

    fn wrapping_sub(a: Self, b: Self) -> Self {
        i32::wrapping_sub(a, b)
    }

    fn wrapping_mul(a: Self, b: Self) -> Self {
        i32::wrapping_mul(a, b)
    }
}

impl Real for f32 {}
impl Real for f64 {}
