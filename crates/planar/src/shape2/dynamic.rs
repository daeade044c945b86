//! Uniform shape handling for heterogeneous collections.
//!
//! `Shape` is the capability set every concrete shape implements; `AnyShape`
//! is the closed sum over the five kinds. Cloning an `AnyShape` is plain
//! value duplication (all shapes are `Copy` data), so collections that own
//! their elements need no boxing or manual lifetime plumbing.

use crate::algebra::Vec2;

use super::types::{Circle, Line, Point, Ray, Segment};

/// Capabilities shared by every planar shape.
pub trait Shape {
    /// Rigid translation by `by`, in place.
    fn translate(&mut self, by: Vec2);
    /// Does the shape contain `p`?
    fn contains_point(&self, p: Point) -> bool;
    /// Does the shape cross `seg`?
    fn cross_segment(&self, seg: &Segment) -> bool;
}

macro_rules! impl_shape {
    ($($ty:ident),+) => {$(
        impl Shape for $ty {
            #[inline]
            fn translate(&mut self, by: Vec2) {
                $ty::translate(self, by)
            }
            #[inline]
            fn contains_point(&self, p: Point) -> bool {
                $ty::contains_point(self, p)
            }
            #[inline]
            fn cross_segment(&self, seg: &Segment) -> bool {
                $ty::cross_segment(self, seg)
            }
        }
    )+};
}

impl_shape!(Point, Segment, Line, Ray, Circle);

/// Closed sum over the five shape kinds.
///
/// `Clone`/`Copy` make heterogeneous owned collections (`Vec<AnyShape>`)
/// trivial; dispatch is a match, not a vtable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyShape {
    Point(Point),
    Segment(Segment),
    Line(Line),
    Ray(Ray),
    Circle(Circle),
}

impl Shape for AnyShape {
    fn translate(&mut self, by: Vec2) {
        match self {
            AnyShape::Point(s) => s.translate(by),
            AnyShape::Segment(s) => s.translate(by),
            AnyShape::Line(s) => s.translate(by),
            AnyShape::Ray(s) => s.translate(by),
            AnyShape::Circle(s) => s.translate(by),
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        match self {
            AnyShape::Point(s) => s.contains_point(p),
            AnyShape::Segment(s) => s.contains_point(p),
            AnyShape::Line(s) => s.contains_point(p),
            AnyShape::Ray(s) => s.contains_point(p),
            AnyShape::Circle(s) => s.contains_point(p),
        }
    }

    fn cross_segment(&self, seg: &Segment) -> bool {
        match self {
            AnyShape::Point(s) => s.cross_segment(seg),
            AnyShape::Segment(s) => s.cross_segment(seg),
            AnyShape::Line(s) => s.cross_segment(seg),
            AnyShape::Ray(s) => s.cross_segment(seg),
            AnyShape::Circle(s) => s.cross_segment(seg),
        }
    }
}

impl From<Point> for AnyShape {
    #[inline]
    fn from(s: Point) -> Self {
        AnyShape::Point(s)
    }
}
impl From<Segment> for AnyShape {
    #[inline]
    fn from(s: Segment) -> Self {
        AnyShape::Segment(s)
    }
}
impl From<Line> for AnyShape {
    #[inline]
    fn from(s: Line) -> Self {
        AnyShape::Line(s)
    }
}
impl From<Ray> for AnyShape {
    #[inline]
    fn from(s: Ray) -> Self {
        AnyShape::Ray(s)
    }
}
impl From<Circle> for AnyShape {
    #[inline]
    fn from(s: Circle) -> Self {
        AnyShape::Circle(s)
    }
}
