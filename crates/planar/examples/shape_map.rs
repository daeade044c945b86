//! Heterogeneous shape map walkthrough.
//!
//! Purpose
//! - Show the consumer side of the library: build a mixed collection of
//!   shapes behind `AnyShape`, translate the whole map rigidly, and run the
//!   containment/crossing predicates uniformly over it.
//!
//! Everything is exact integer arithmetic, so the printed answers are
//! bit-for-bit reproducible.

use planar::prelude::*;

fn main() {
    let mut map: Vec<AnyShape> = vec![
        Point::new(1, 1).into(),
        Segment::new(Point::new(0, 0), Point::new(4, 4)).into(),
        Line::through(Point::new(0, 2), Point::new(2, 0)).into(),
        Ray::new(Point::new(0, 0), Point::new(1, 0)).into(),
        Circle::new(Point::new(0, 0), 5).into(),
    ];

    let query = Point::new(2, 2);
    let probe = Segment::new(Point::new(-1, 1), Point::new(6, 1));

    println!("before translation (query={:?}):", (query.x(), query.y()));
    report(&map, query, &probe);

    let shift = Vec2::new(10, -10);
    for shape in &mut map {
        shape.translate(shift);
    }

    println!("after translating every shape by ({}, {}):", shift.x, shift.y);
    report(&map, query, &probe);

    // Clone is plain value duplication: mutating the copy leaves the map alone.
    let mut copy = map[4];
    copy.translate(Vec2::new(1000, 1000));
    assert_ne!(copy, map[4]);
}

fn report(map: &[AnyShape], query: Point, probe: &Segment) {
    for (i, shape) in map.iter().enumerate() {
        println!(
            "  shape {i}: contains_point={} cross_segment={}",
            shape.contains_point(query),
            shape.cross_segment(probe),
        );
    }
}
