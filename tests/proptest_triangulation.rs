//! Property-based tests for triangulation construction.
//!
//! Random point clouds are triangulated and the classical invariants are
//! checked on every successful run: the empty-circumcircle property and
//! containment within the convex hull. Coverage can genuinely fall short
//! of the hull area (a point in the thin band just inside a hull edge can
//! flip that edge against a super-triangle neighbor, and the sliver is
//! purged with the super vertices), so exact coverage is asserted only on
//! the fixed fixtures in `triangulation.rs`. Runs that abort on a
//! hull-boundary vertex are discarded; the deterministic failure path has
//! its own test there too.

use delaunay2d::prelude::*;
use proptest::prelude::*;

/// Area of the convex hull of `points` (monotone chain), zero when the
/// distinct points are fewer than three or collinear.
fn convex_hull_area(points: &[Point2<f64>]) -> f64 {
    let mut sorted: Vec<(f64, f64)> = points.iter().map(|p| (p.x(), p.y())).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("finite coordinates"));
    sorted.dedup();
    if sorted.len() < 3 {
        return 0.0;
    }

    let cross = |o: (f64, f64), a: (f64, f64), b: (f64, f64)| {
        (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
    };

    let half = |iter: &[(f64, f64)]| {
        let mut chain: Vec<(f64, f64)> = Vec::new();
        for &p in iter {
            while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0
            {
                chain.pop();
            }
            chain.push(p);
        }
        chain
    };

    let mut lower = half(&sorted);
    let reversed: Vec<_> = sorted.iter().rev().copied().collect();
    let mut upper = half(&reversed);
    lower.pop();
    upper.pop();
    lower.append(&mut upper);

    let mut doubled = 0.0;
    for i in 0..lower.len() {
        let (x1, y1) = lower[i];
        let (x2, y2) = lower[(i + 1) % lower.len()];
        doubled += x1 * y2 - x2 * y1;
    }
    doubled.abs() / 2.0
}

fn arb_points(max_len: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), 3..max_len)
        .prop_map(|coords| coords.into_iter().map(|(x, y)| Point2::new(x, y)).collect())
}

proptest! {
    #[test]
    fn triangulation_is_delaunay(points in arb_points(40)) {
        let mut triangulator = DelaunayTriangulator::new(points);
        match triangulator.triangulate() {
            Ok(()) => triangulator.validate_delaunay().unwrap(),
            Err(TriangulationError::HullBoundaryVertex { .. })
            | Err(TriangulationError::DegenerateApex { .. }) => {
                prop_assume!(false);
            }
        }
    }

    #[test]
    fn triangles_stay_within_the_convex_hull(points in arb_points(30)) {
        let result = triangulate(&points);
        prop_assume!(result.is_ok());
        let triangles = result.unwrap();

        let covered: f64 = triangles.iter().map(Triangle::area).sum();
        let hull = convex_hull_area(&points);
        prop_assert!(
            covered <= hull + 1e-6 * hull.max(1.0),
            "covered {covered}, hull {hull}"
        );
    }

    #[test]
    fn all_vertices_come_from_the_input(points in arb_points(25)) {
        let result = triangulate(&points);
        prop_assume!(result.is_ok());
        let triangles = result.unwrap();

        for triangle in &triangles {
            for vertex in triangle.vertices() {
                prop_assert!(
                    points.iter().any(|p| p.approx_eq(&vertex)),
                    "vertex {vertex} not among the inputs"
                );
            }
        }
    }

    #[test]
    fn construction_is_deterministic(points in arb_points(25)) {
        let first = triangulate(&points);
        let second = triangulate(&points);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "one run failed, the other did not"),
        }
    }
}
