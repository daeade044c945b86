//! Criterion benchmarks for the exact predicate engine.
//! Focus sizes: n in {16, 128, 1024} shape pairs per batch.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::shape2::rand::{draw_circle, draw_segment, draw_shape_of, Bounds, ShapeKind};
use planar::{Segment, Shape, Vec2};
use rand::{rngs::StdRng, SeedableRng};

fn random_segment_pairs(n: usize, seed: u64) -> Vec<(Segment, Segment)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let b = Bounds::default();
    (0..n)
        .map(|_| (draw_segment(b, &mut rng), draw_segment(b, &mut rng)))
        .collect()
}

fn random_soup(n: usize, seed: u64) -> Vec<planar::AnyShape> {
    let mut rng = StdRng::seed_from_u64(seed);
    let b = Bounds::default();
    (0..n)
        .map(|k| draw_shape_of(ShapeKind::ALL[k % ShapeKind::ALL.len()], b, &mut rng))
        .collect()
}

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");
    for &n in &[16usize, 128, 1024] {
        group.bench_with_input(BenchmarkId::new("segment_cross_segment", n), &n, |b, &n| {
            b.iter_batched(
                || random_segment_pairs(n, 43),
                |pairs| {
                    let mut hits = 0usize;
                    for (s, t) in &pairs {
                        if s.cross_segment(t) {
                            hits += 1;
                        }
                    }
                    hits
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("circle_cross_segment", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(7);
                    let bounds = Bounds::default();
                    (0..n)
                        .map(|_| (draw_circle(bounds, &mut rng), draw_segment(bounds, &mut rng)))
                        .collect::<Vec<_>>()
                },
                |pairs| {
                    let mut hits = 0usize;
                    for (c, s) in &pairs {
                        if c.cross_segment(s) {
                            hits += 1;
                        }
                    }
                    hits
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("anyshape_dispatch", n), &n, |b, &n| {
            let probe = {
                let mut rng = StdRng::seed_from_u64(11);
                draw_segment(Bounds::default(), &mut rng)
            };
            b.iter_batched(
                || random_soup(n, 43),
                |mut soup| {
                    let mut hits = 0usize;
                    for s in &mut soup {
                        s.translate(Vec2::new(1, -1));
                        if s.cross_segment(&probe) {
                            hits += 1;
                        }
                    }
                    hits
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_predicates);
criterion_main!(benches);
