//! Shape representations: construction, accessors, translation.
//!
//! All five shapes are plain `Copy` value types over `i64` coordinates.
//! Construction validates nothing beyond structure; degenerate inputs (equal
//! line points, zero-length segments) are defined behavior, see the per-type
//! docs. Translation is the only mutation any shape supports.

use std::ops::{Add, AddAssign, Sub};

use crate::algebra::Vec2;

/// A location in the plane: a [`Vec2`] interpreted as a position.
///
/// Wraps the vector instead of being one so that locations and displacements
/// stay distinct types: `Point - Point` is a `Vec2`, `Point + Vec2` is a
/// `Point`. Equality is exact coordinate equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point(pub Vec2);

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Point(Vec2::new(x, y))
    }
    #[inline]
    pub fn x(&self) -> i64 {
        self.0.x
    }
    #[inline]
    pub fn y(&self) -> i64 {
        self.0.y
    }
    /// The displacement from the origin to this point.
    #[inline]
    pub fn to_vec(self) -> Vec2 {
        self.0
    }
    /// Translate in place by `by`.
    #[inline]
    pub fn translate(&mut self, by: Vec2) {
        self.0 += by;
    }
}

impl From<Vec2> for Point {
    #[inline]
    fn from(v: Vec2) -> Self {
        Point(v)
    }
}

impl Sub for Point {
    type Output = Vec2;
    /// Displacement from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Point) -> Vec2 {
        self.0 - rhs.0
    }
}

impl Add<Vec2> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vec2) -> Point {
        Point(self.0 + rhs)
    }
}

impl AddAssign<Vec2> for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.0 += rhs;
    }
}

/// Closed segment between two points, endpoints included.
///
/// `a == b` is allowed and degenerates to a single point; the predicates
/// handle the zero-length direction explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Segment { a, b }
    }
    /// Direction vector `b - a` (zero for a degenerate segment).
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }
    /// Translate both endpoints in place.
    #[inline]
    pub fn translate(&mut self, by: Vec2) {
        self.a += by;
        self.b += by;
    }
}

/// Infinite line in implicit form `a·x + b·y + c = 0`.
///
/// Built from two points; no canonicalization, so the same geometric line has
/// many coefficient scalings. Equal construction points yield the degenerate
/// `(0, 0, 0)` line, whose equation every point satisfies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Line {
    /// Line through `start` and `finish` (callers pass distinct points for a
    /// non-degenerate line).
    #[inline]
    pub fn through(start: Point, finish: Point) -> Self {
        Line {
            a: start.y() - finish.y(),
            b: finish.x() - start.x(),
            c: start.x() * finish.y() - finish.x() * start.y(),
        }
    }
    /// Signed value of `a·x + b·y + c` at `p`. Zero iff `p` lies on the line;
    /// the sign tells which open half-plane contains `p`.
    #[inline]
    pub fn eval(&self, p: Point) -> i64 {
        self.a * p.x() + self.b * p.y() + self.c
    }
    /// Translate in place: the normal `(a, b)` is invariant, only the offset
    /// moves, `c -= a·dx + b·dy`.
    #[inline]
    pub fn translate(&mut self, by: Vec2) {
        self.c -= self.a * by.x + self.b * by.y;
    }
}

/// Half-line `{origin + t·dir : t >= 0}`.
///
/// `dir` must be nonzero for the direction-based predicates to be meaningful;
/// this is a debug-asserted caller precondition, not a release check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ray {
    pub origin: Point,
    pub dir: Vec2,
}

impl Ray {
    /// Ray from `origin` through `through`, with `origin != through`.
    #[inline]
    pub fn new(origin: Point, through: Point) -> Self {
        debug_assert!(origin != through, "ray needs two distinct points");
        Ray {
            origin,
            dir: through - origin,
        }
    }
    /// The infinite line supporting this ray.
    #[inline]
    pub fn supporting_line(&self) -> Line {
        Line::through(self.origin, self.origin + self.dir)
    }
    /// Translate the origin in place; the direction is translation-invariant.
    #[inline]
    pub fn translate(&mut self, by: Vec2) {
        self.origin += by;
    }
}

/// Circle of non-negative integer radius around a center point.
///
/// Containment tests the closed disk `|p - center|² <= r²`; segment crossing
/// tests the boundary circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Circle {
    pub center: Point,
    pub radius: i64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: i64) -> Self {
        debug_assert!(radius >= 0, "circle radius must be non-negative");
        Circle { center, radius }
    }
    /// Translate the center in place; the radius is invariant.
    #[inline]
    pub fn translate(&mut self, by: Vec2) {
        self.center += by;
    }
}
