//! Random shapes in a bounded integer box (replay tokens).
//!
//! Purpose
//! - Deterministic, reproducible shape sampling for randomized tests and the
//!   criterion benches. Coordinates stay inside a box that keeps every
//!   predicate in the overflow-safe range by default.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//! so draw `k` of a run is recoverable without replaying draws `0..k`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::COORD_LIMIT;

use super::dynamic::AnyShape;
use super::types::{Circle, Line, Point, Ray, Segment};

/// Coordinate box `[-max_coord, max_coord]²` for sampled points; radii are
/// drawn from `[0, max_coord]`.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub max_coord: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_coord: COORD_LIMIT,
        }
    }
}

impl Bounds {
    #[inline]
    fn coord<R: Rng>(&self, rng: &mut R) -> i64 {
        let m = self.max_coord.max(1);
        rng.gen_range(-m..=m)
    }
}

/// The five shape kinds, for callers steering the mixed sampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Point,
    Segment,
    Line,
    Ray,
    Circle,
}

impl ShapeKind {
    /// All five kinds, in declaration order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Point,
        ShapeKind::Segment,
        ShapeKind::Line,
        ShapeKind::Ray,
        ShapeKind::Circle,
    ];
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

pub fn draw_point<R: Rng>(b: Bounds, rng: &mut R) -> Point {
    Point::new(b.coord(rng), b.coord(rng))
}

/// A second point distinct from `p` (needed by line/ray construction).
fn draw_distinct_from<R: Rng>(b: Bounds, rng: &mut R, p: Point) -> Point {
    loop {
        let q = draw_point(b, rng);
        if q != p {
            return q;
        }
    }
}

/// Endpoints drawn independently; degenerate segments are possible and legal.
pub fn draw_segment<R: Rng>(b: Bounds, rng: &mut R) -> Segment {
    Segment::new(draw_point(b, rng), draw_point(b, rng))
}

pub fn draw_line<R: Rng>(b: Bounds, rng: &mut R) -> Line {
    let p = draw_point(b, rng);
    Line::through(p, draw_distinct_from(b, rng, p))
}

pub fn draw_ray<R: Rng>(b: Bounds, rng: &mut R) -> Ray {
    let p = draw_point(b, rng);
    Ray::new(p, draw_distinct_from(b, rng, p))
}

pub fn draw_circle<R: Rng>(b: Bounds, rng: &mut R) -> Circle {
    let r = rng.gen_range(0..=b.max_coord.max(1));
    Circle::new(draw_point(b, rng), r)
}

pub fn draw_shape_of<R: Rng>(kind: ShapeKind, b: Bounds, rng: &mut R) -> AnyShape {
    match kind {
        ShapeKind::Point => AnyShape::Point(draw_point(b, rng)),
        ShapeKind::Segment => AnyShape::Segment(draw_segment(b, rng)),
        ShapeKind::Line => AnyShape::Line(draw_line(b, rng)),
        ShapeKind::Ray => AnyShape::Ray(draw_ray(b, rng)),
        ShapeKind::Circle => AnyShape::Circle(draw_circle(b, rng)),
    }
}

/// Draw one shape of a uniformly random kind, replayable by token.
pub fn draw_shape(b: Bounds, tok: ReplayToken) -> AnyShape {
    let mut rng = tok.to_std_rng();
    let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
    draw_shape_of(kind, b, &mut rng)
}
