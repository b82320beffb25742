//! Benchmarks for incremental triangulation construction.
//!
//! Measures end-to-end `triangulate` runtime across point-cloud sizes for
//! two distributions: a regular grid (maximally cocircular, stressing the
//! boundary classification of the in-circumcircle test) and a deterministic
//! scattered cloud (stressing point location and legalization).

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use delaunay2d::prelude::*;
use std::hint::black_box;

/// Creates a regular `n_side` x `n_side` grid of points.
fn generate_grid_points(n_side: usize) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(n_side * n_side);
    for i in 0..n_side {
        for j in 0..n_side {
            #[allow(clippy::cast_precision_loss)]
            points.push(Point2::new(i as f64, j as f64));
        }
    }
    points
}

/// Creates a deterministic scattered cloud in the positive quadrant.
///
/// A fixed linear congruential generator keeps runs comparable without a
/// seedable RNG dependency.
fn generate_scattered_points(count: usize) -> Vec<Point2<f64>> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        #[allow(clippy::cast_precision_loss)]
        let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
        unit * 100.0
    };
    (0..count).map(|_| Point2::new(next(), next())).collect()
}

fn bench_grid_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulation_creation/grid");
    for n_side in [5_usize, 10, 20] {
        let points = generate_grid_points(n_side);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(points.len()),
            &points,
            |b, points| {
                b.iter(|| triangulate(black_box(points)).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_scattered_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulation_creation/scattered");
    for count in [25_usize, 100, 400] {
        let points = generate_scattered_points(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &points,
            |b, points| {
                b.iter(|| triangulate(black_box(points)).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_incremental_reuse(c: &mut Criterion) {
    // Rebuilding through one triangulator instance, as a caller animating a
    // growing point set would.
    let points = generate_scattered_points(100);
    c.bench_function("triangulation_creation/rebuild_100", |b| {
        let mut triangulator = DelaunayTriangulator::new(points.clone());
        b.iter(|| {
            triangulator.triangulate().unwrap();
            black_box(triangulator.number_of_triangles())
        });
    });
}

criterion_group!(
    benches,
    bench_grid_triangulation,
    bench_scattered_triangulation,
    bench_incremental_reuse
);
criterion_main!(benches);
