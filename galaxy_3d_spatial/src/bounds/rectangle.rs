/// Rectangle: 2D axis-aligned bounds.
///
/// Same layout and conventions as `AABB` restricted to x/y, with one
/// boundary difference: `contains_point` is strict (a point on an edge is
/// outside) while `contains_rectangle` and `intersects_rectangle` are
/// inclusive, so two rectangles sharing an edge intersect although the
/// edge points belong to neither.
///
/// A failed `intersection` fills all four fields with the per-type invalid
/// sentinel (`NaN` for floats, `MAX`/`MIN` for integers).

use std::fmt;
use crate::math::{Coord2, Real, Scalar};

/// 2D axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle<S: Scalar = f32> {
    /// Minimum corner (x, y)
    pub min: [S; 2],
    /// Maximum corner (x, y)
    pub max: [S; 2],
}

pub type Rectanglef = Rectangle<f32>;
pub type Rectangled = Rectangle<f64>;
pub type Rectanglei = Rectangle<i32>;

impl<S: Scalar> Default for Rectangle<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> Rectangle<S> {
    /// Create an empty rectangle (union identity).
    pub fn new() -> Self {
        Self {
            min: [S::EMPTY_MIN; 2],
            max: [S::EMPTY_MAX; 2],
        }
    }

    pub fn from_coords(min_x: S, min_y: S, max_x: S, max_y: S) -> Self {
        Self {
            min: [min_x, min_y],
            max: [max_x, max_y],
        }
    }

    pub fn from_min_max(min: impl Coord2<S>, max: impl Coord2<S>) -> Self {
        Self {
            min: [min.x(), min.y()],
            max: [max.x(), max.y()],
        }
    }

    /// The invalidated state left behind by a non-overlapping intersection.
    pub fn invalid() -> Self {
        Self {
            min: [S::RECT_INVALID_MIN; 2],
            max: [S::RECT_INVALID_MAX; 2],
        }
    }

    pub fn set_min(&mut self, min: impl Coord2<S>) -> &mut Self {
        self.min = [min.x(), min.y()];
        self
    }

    pub fn set_max(&mut self, max: impl Coord2<S>) -> &mut Self {
        self.max = [max.x(), max.y()];
        self
    }

    pub fn width(&self) -> S {
        S::wrapping_sub(self.max[0], self.min[0])
    }

    pub fn height(&self) -> S {
        S::wrapping_sub(self.max[1], self.min[1])
    }

    pub fn area(&self) -> S {
        S::wrapping_mul(self.width(), self.height())
    }

    /// `[width, height]`
    pub fn size(&self) -> [S; 2] {
        [self.width(), self.height()]
    }

    /// `min < max` on both axes.
    pub fn is_valid(&self) -> bool {
        self.min[0] < self.max[0] && self.min[1] < self.max[1]
    }

    pub fn correct_bounds(&mut self) -> &mut Self {
        for axis in 0..2 {
            if self.min[axis] > self.max[axis] {
                std::mem::swap(&mut self.min[axis], &mut self.max[axis]);
            }
        }
        self
    }

    // ===== UNION / INTERSECTION =====

    pub fn union(&self, other: &Rectangle<S>) -> Rectangle<S> {
        let mut dest = *self;
        dest.merge(other);
        dest
    }

    pub fn merge(&mut self, other: &Rectangle<S>) -> &mut Self {
        for axis in 0..2 {
            self.min[axis] = S::min_of(self.min[axis], other.min[axis]);
            self.max[axis] = S::max_of(self.max[axis], other.max[axis]);
        }
        self
    }

    pub fn union_point(&self, p: impl Coord2<S>) -> Rectangle<S> {
        let mut dest = *self;
        dest.take_point(p);
        dest
    }

    pub fn take_point(&mut self, p: impl Coord2<S>) -> &mut Self {
        let p = [p.x(), p.y()];
        for axis in 0..2 {
            self.min[axis] = S::min_of(self.min[axis], p[axis]);
            self.max[axis] = S::max_of(self.max[axis], p[axis]);
        }
        self
    }

    pub fn intersection(&self, other: &Rectangle<S>) -> Rectangle<S> {
        let mut dest = *self;
        dest.intersect(other);
        dest
    }

    /// Shrink to the overlap with `other`; becomes `invalid()` when there is none.
    pub fn intersect(&mut self, other: &Rectangle<S>) -> &mut Self {
        for axis in 0..2 {
            self.min[axis] = S::max_of(self.min[axis], other.min[axis]);
            self.max[axis] = S::min_of(self.max[axis], other.max[axis]);
        }
        if !self.is_valid() {
            *self = Self::invalid();
        }
        self
    }

    // ===== QUERIES =====

    /// Point strictly inside. Points on an edge are not contained.
    pub fn contains_point(&self, p: impl Coord2<S>) -> bool {
        let (x, y) = (p.x(), p.y());
        x > self.min[0] && x < self.max[0] && y > self.min[1] && y < self.max[1]
    }

    /// `other` lies within this rectangle; shared edges are allowed.
    pub fn contains_rectangle(&self, other: &Rectangle<S>) -> bool {
        other.min[0] >= self.min[0]
            && other.max[0] <= self.max[0]
            && other.min[1] >= self.min[1]
            && other.max[1] <= self.max[1]
    }

    /// Rectangles overlap or touch.
    pub fn intersects_rectangle(&self, other: &Rectangle<S>) -> bool {
        self.max[0] >= other.min[0]
            && self.min[0] <= other.max[0]
            && self.max[1] >= other.min[1]
            && self.min[1] <= other.max[1]
    }

    // ===== TRANSLATE / SCALE =====

    pub fn translated(&self, offset: impl Coord2<S>) -> Rectangle<S> {
        let mut dest = *self;
        dest.translate(offset);
        dest
    }

    pub fn translate(&mut self, offset: impl Coord2<S>) -> &mut Self {
        let offset = [offset.x(), offset.y()];
        for axis in 0..2 {
            self.min[axis] = S::wrapping_add(self.min[axis], offset[axis]);
            self.max[axis] = S::wrapping_add(self.max[axis], offset[axis]);
        }
        self
    }

    /// Scale both corners around `anchor`: `corner' = (corner - anchor) * s + anchor`.
    pub fn scaled(&self, sx: S, sy: S, anchor: impl Coord2<S>) -> Rectangle<S> {
        let mut dest = *self;
        dest.scale(sx, sy, anchor);
        dest
    }

    pub fn scale(&mut self, sx: S, sy: S, anchor: impl Coord2<S>) -> &mut Self {
        let anchor = [anchor.x(), anchor.y()];
        let factor = [sx, sy];
        for axis in 0..2 {
            self.min[axis] = S::wrapping_add(
                S::wrapping_mul(S::wrapping_sub(self.min[axis], anchor[axis]), factor[axis]),
                anchor[axis],
            );
            self.max[axis] = S::wrapping_add(
                S::wrapping_mul(S::wrapping_sub(self.max[axis], anchor[axis]), factor[axis]),
                anchor[axis],
            );
        }
        self
    }

    /// Uniform scale around `anchor`.
    pub fn scaled_uniform(&self, factor: S, anchor: impl Coord2<S>) -> Rectangle<S> {
        self.scaled(factor, factor, anchor)
    }
}

impl<S: Real> Rectangle<S> {
    pub fn center(&self) -> [S; 2] {
        let h = S::half();
        [
            self.min[0] + self.width() * h,
            self.min[1] + self.height() * h,
        ]
    }
}

impl<S: Scalar> fmt::Display for Rectangle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {}) < ({} {})", self.min[0], self.min[1], self.max[0], self.max[1])
    }
}

#[cfg(test)]
#[path = "rectangle_tests.rs"]
mod tests;
