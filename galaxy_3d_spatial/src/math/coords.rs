/// Read-only accessors over externally supplied points, directions and matrices.

use glam::{DMat4, DVec2, DVec3, IVec2, IVec3, Mat4, Vec2, Vec3, Vec3A};
use super::scalar::{Real, Scalar};

/// Anything exposing `x` / `y` coordinates.
pub trait Coord2<S: Scalar> {
    fn x(&self) -> S;
    fn y(&self) -> S;
}

/// Anything exposing `x` / `y` / `z` coordinates.
pub trait Coord3<S: Scalar> {
    fn x(&self) -> S;
    fn y(&self) -> S;
    fn z(&self) -> S;
}

/// A 4x4 matrix readable in column-major order.
///
/// `cols()[c][r]` is the element in column `c`, row `r`. The named
/// accessors follow the same convention: `m31()` is column 3, row 1
/// (the y translation of an affine matrix).
pub trait ColumnMatrix4<S: Scalar> {
    fn cols(&self) -> [[S; 4]; 4];

    fn m00(&self) -> S { self.cols()[0][0] }
    fn m01(&self) -> S { self.cols()[0][1] }
    fn m02(&self) -> S { self.cols()[0][2] }
    fn m03(&self) -> S { self.cols()[0][3] }
    fn m10(&self) -> S { self.cols()[1][0] }
    fn m11(&self) -> S { self.cols()[1][1] }
    fn m12(&self) -> S { self.cols()[1][2] }
    fn m13(&self) -> S { self.cols()[1][3] }
    fn m20(&self) -> S { self.cols()[2][0] }
    fn m21(&self) -> S { self.cols()[2][1] }
    fn m22(&self) -> S { self.cols()[2][2] }
    fn m23(&self) -> S { self.cols()[2][3] }
    fn m30(&self) -> S { self.cols()[3][0] }
    fn m31(&self) -> S { self.cols()[3][1] }
    fn m32(&self) -> S { self.cols()[3][2] }
    fn m33(&self) -> S { self.cols()[3][3] }
}

/// Pair of ray/segment parameters `(t_near, t_far)`.
///
/// The hit points are `origin + t * dir` for each parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<S: Real> {
    pub near: S,
    pub far: S,
}

impl<S: Real> Interval<S> {
    pub fn new(near: S, far: S) -> Self {
        Self { near, far }
    }

    /// `far - near`
    pub fn length(&self) -> S {
        self.far - self.near
    }
}

impl From<Interval<f32>> for Vec2 {
    fn from(interval: Interval<f32>) -> Self {
        Vec2::new(interval.near, interval.far)
    }
}

impl From<Interval<f64>> for DVec2 {
    fn from(interval: Interval<f64>) -> Self {
        DVec2::new(interval.near, interval.far)
    }
}

// ===== glam =====

impl Coord2<f32> for Vec2 {
    fn x(&self) -> f32 { self.x }
    fn y(&self) -> f32 { self.y }
}

impl Coord2<f64> for DVec2 {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

impl Coord2<i32> for IVec2 {
    fn x(&self) -> i32 { self.x }
    fn y(&self) -> i32 { self.y }
}

impl Coord3<f32> for Vec3 {
    fn x(&self) -> f32 { self.x }
    fn y(&self) -> f32 { self.y }
    fn z(&self) -> f32 { self.z }
}

impl Coord3<f32> for Vec3A {
    fn x(&self) -> f32 { self.x }
    fn y(&self) -> f32 { self.y }
    fn z(&self) -> f32 { self.z }
}

impl Coord3<f64> for DVec3 {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
    fn z(&self) -> f64 { self.z }
}

impl Coord3<i32> for IVec3 {
    fn x(&self) -> i32 { self.x }
    fn y(&self) -> i32 { self.y }
    fn z(&self) -> i32 { self.z }
}

impl ColumnMatrix4<f32> for Mat4 {
    fn cols(&self) -> [[f32; 4]; 4] {
        self.to_cols_array_2d()
    }
}

impl ColumnMatrix4<f64> for DMat4 {
    fn cols(&self) -> [[f64; 4]; 4] {
        self.to_cols_array_2d()
    }
}

// ===== plain data =====

impl<S: Scalar> Coord2<S> for [S; 2] {
    fn x(&self) -> S { self[0] }
    fn y(&self) -> S { self[1] }
}

impl<S: Scalar> Coord2<S> for (S, S) {
    fn x(&self) -> S { self.0 }
    fn y(&self) -> S { self.1 }
}

impl<S: Scalar> Coord3<S> for [S; 3] {
    fn x(&self) -> S { self[0] }
    fn y(&self) -> S { self[1] }
    fn z(&self) -> S { self[2] }
}

impl<S: Scalar> Coord3<S> for (S, S, S) {
    fn x(&self) -> S { self.0 }
    fn y(&self) -> S { self.1 }
    fn z(&self) -> S { self.2 }
}

impl<S: Scalar> ColumnMatrix4<S> for [[S; 4]; 4] {
    fn cols(&self) -> [[S; 4]; 4] {
        *self
    }
}

impl<S: Scalar, T: Coord2<S> + ?Sized> Coord2<S> for &T {
    fn x(&self) -> S { (**self).x() }
    fn y(&self) -> S { (**self).y() }
}

impl<S: Scalar, T: Coord3<S> + ?Sized> Coord3<S> for &T {
    fn x(&self) -> S { (**self).x() }
    fn y(&self) -> S { (**self).y() }
    fn z(&self) -> S { (**self).z() }
}
