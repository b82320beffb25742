//! Triangles and their geometric queries.
//!
//! A [`Triangle`] is an ordered, immutable triple of points. The vertex
//! order is preserved as given (no canonical sorting), so two triangles
//! built from the same points in different orders are distinct values; the
//! predicates are winding-independent where the algorithm requires it.

use crate::geometry::edge::Edge;
use crate::geometry::point::Point2;
use crate::geometry::predicates::{in_circumcircle, orient2d, InCircle, Orientation};
use crate::geometry::traits::coordinate::CoordinateScalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign of a scalar with exact-zero handling.
///
/// `Float::signum` maps `0.0` to `1.0`, which would misclassify points
/// lying exactly on a triangle edge, so the containment test uses this
/// three-way sign instead.
#[inline]
fn sign<T: CoordinateScalar>(value: T) -> i8 {
    if value > T::zero() {
        1
    } else if value < T::zero() {
        -1
    } else {
        0
    }
}

#[inline]
fn cross<T: CoordinateScalar>(ux: T, uy: T, vx: T, vy: T) -> T {
    ux * vy - uy * vx
}

/// A triangle described by three vertices.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::triangle::Triangle;
/// use delaunay2d::point;
///
/// let t = Triangle::new(point!(0.0, 0.0), point!(2.0, 0.0), point!(0.0, 2.0));
/// assert!(t.contains(&point!(0.5, 0.5)));
/// assert!(!t.contains(&point!(3.0, 3.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: CoordinateScalar", deserialize = "T: CoordinateScalar"))]
pub struct Triangle<T>
where
    T: CoordinateScalar,
{
    a: Point2<T>,
    b: Point2<T>,
    c: Point2<T>,
}

impl<T> Triangle<T>
where
    T: CoordinateScalar,
{
    /// Creates a new triangle from three vertices, order preserved.
    #[inline]
    pub const fn new(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Self {
        Self { a, b, c }
    }

    /// Returns the first vertex.
    #[inline]
    #[must_use]
    pub fn a(&self) -> Point2<T> {
        self.a
    }

    /// Returns the second vertex.
    #[inline]
    #[must_use]
    pub fn b(&self) -> Point2<T> {
        self.b
    }

    /// Returns the third vertex.
    #[inline]
    #[must_use]
    pub fn c(&self) -> Point2<T> {
        self.c
    }

    /// Returns the vertices in order.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> [Point2<T>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three edges `(a, b)`, `(b, c)`, `(c, a)`.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> [Edge<T>; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Returns the winding of this triangle.
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        orient2d(&self.a, &self.b, &self.c)
    }

    /// Tests whether `point` lies strictly inside this triangle.
    ///
    /// Uses the same-sign cross-product test against the three oriented
    /// edges. A point exactly on an edge produces a zero cross product and
    /// is reported as *not* contained, which routes it to the boundary-case
    /// insertion path of the triangulator.
    #[must_use]
    pub fn contains(&self, point: &Point2<T>) -> bool {
        let pab = cross(
            point.x() - self.a.x(),
            point.y() - self.a.y(),
            self.b.x() - self.a.x(),
            self.b.y() - self.a.y(),
        );
        let pbc = cross(
            point.x() - self.b.x(),
            point.y() - self.b.y(),
            self.c.x() - self.b.x(),
            self.c.y() - self.b.y(),
        );
        if sign(pab) != sign(pbc) {
            return false;
        }
        let pca = cross(
            point.x() - self.c.x(),
            point.y() - self.c.y(),
            self.a.x() - self.c.x(),
            self.a.y() - self.c.y(),
        );
        sign(pab) == sign(pca)
    }

    /// Tests whether `point` lies inside this triangle's circumcircle,
    /// independent of winding.
    #[inline]
    #[must_use]
    pub fn circumcircle_contains(&self, point: &Point2<T>) -> InCircle {
        in_circumcircle(&self.a, &self.b, &self.c, point)
    }

    /// Tests whether this triangle owns both endpoints of `edge`, under
    /// approximate point equality.
    #[must_use]
    pub fn is_neighbor_of(&self, edge: &Edge<T>) -> bool {
        let start = edge.start();
        let end = edge.end();
        self.has_vertex(&start) && self.has_vertex(&end)
    }

    /// Tests whether `vertex` is one of this triangle's vertices, under
    /// approximate point equality.
    #[inline]
    #[must_use]
    pub fn has_vertex(&self, vertex: &Point2<T>) -> bool {
        self.a.approx_eq(vertex) || self.b.approx_eq(vertex) || self.c.approx_eq(vertex)
    }

    /// Returns the apex: the vertex of this triangle that is not an endpoint
    /// of `edge`.
    ///
    /// Returns `None` when every vertex matches an endpoint of `edge`, which
    /// only happens for degenerate slivers whose vertices coincide within
    /// tolerance.
    #[must_use]
    pub fn opposite_vertex(&self, edge: &Edge<T>) -> Option<Point2<T>> {
        [self.a, self.b, self.c]
            .into_iter()
            .find(|v| !edge.has_endpoint(v))
    }

    /// Returns the edge of this triangle nearest to `point` together with
    /// its distance.
    ///
    /// Ties between the first two edges fall through to the edge `(c, a)`;
    /// the selection is deterministic for fixed inputs.
    #[must_use]
    pub fn nearest_edge_to(&self, point: &Point2<T>) -> (Edge<T>, T) {
        let [eab, ebc, eca] = self.edges();
        let d0 = eab.distance_to(point);
        let d1 = ebc.distance_to(point);
        let d2 = eca.distance_to(point);

        if d0 < d1 && d0 < d2 {
            (eab, d0)
        } else if d1 < d0 && d1 < d2 {
            (ebc, d1)
        } else {
            (eca, d2)
        }
    }

    /// Returns the area of this triangle.
    #[must_use]
    pub fn area(&self) -> T {
        let two = T::one() + T::one();
        cross(
            self.b.x() - self.a.x(),
            self.b.y() - self.a.y(),
            self.c.x() - self.a.x(),
            self.c.y() - self.a.y(),
        )
        .abs()
            / two
    }

    /// Tests whether this triangle overlaps `other`.
    ///
    /// Separating-edge test: two triangles are disjoint exactly when some
    /// edge of one has all three vertices of the other strictly on the side
    /// opposite its own apex.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !Self::edge_separates(&self.a, &self.b, &self.c, other)
            && !Self::edge_separates(&self.b, &self.c, &self.a, other)
            && !Self::edge_separates(&self.c, &self.a, &self.b, other)
    }

    /// Smallest vertex-to-vertex distance between this triangle and
    /// `other`.
    #[must_use]
    pub fn closest_vertex_distance(&self, other: &Self) -> T {
        let mut best = T::infinity();
        for v in self.vertices() {
            for w in other.vertices() {
                best = best.min(v.distance_to(&w));
            }
        }
        best
    }

    /// Tests whether any vertex of `other` is closer than `distance` to a
    /// vertex of this triangle.
    #[inline]
    #[must_use]
    pub fn distance_closer_than(&self, distance: T, other: &Self) -> bool {
        self.closest_vertex_distance(other) < distance
    }

    fn edge_separates(start: &Point2<T>, end: &Point2<T>, apex: &Point2<T>, other: &Self) -> bool {
        let ex = end.x() - start.x();
        let ey = end.y() - start.y();
        let apex_side = sign(cross(apex.x() - start.x(), apex.y() - start.y(), ex, ey));

        other.vertices().into_iter().all(|v| {
            sign(cross(v.x() - start.x(), v.y() - start.y(), ex, ey)) == -apex_side
        })
    }
}

impl<T> fmt::Display for Triangle<T>
where
    T: CoordinateScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;
    use approx::assert_relative_eq;

    fn right_triangle() -> Triangle<f64> {
        Triangle::new(point!(0.0, 0.0), point!(2.0, 0.0), point!(0.0, 2.0))
    }

    #[test]
    fn orientation_follows_vertex_order() {
        let t = right_triangle();
        assert_eq!(t.orientation(), Orientation::POSITIVE);
        let cw = Triangle::new(t.c(), t.b(), t.a());
        assert_eq!(cw.orientation(), Orientation::NEGATIVE);
    }

    #[test]
    fn containment_interior_and_exterior() {
        let t = right_triangle();
        assert!(t.contains(&point!(0.5, 0.5)));
        assert!(!t.contains(&point!(2.0, 2.0)));
        assert!(!t.contains(&point!(-0.1, 0.5)));
    }

    #[test]
    fn containment_excludes_points_on_edges() {
        let t = right_triangle();
        // On edge (a, b), (b, c) and (c, a) respectively.
        assert!(!t.contains(&point!(1.0, 0.0)));
        assert!(!t.contains(&point!(1.0, 1.0)));
        assert!(!t.contains(&point!(0.0, 1.0)));
    }

    #[test]
    fn circumcircle_query_ignores_winding() {
        let ccw = right_triangle();
        let cw = Triangle::new(ccw.c(), ccw.b(), ccw.a());
        let inside = point!(1.0, 1.0);
        assert_eq!(ccw.circumcircle_contains(&inside), InCircle::INSIDE);
        assert_eq!(cw.circumcircle_contains(&inside), InCircle::INSIDE);
        let outside = point!(4.0, 4.0);
        assert_eq!(ccw.circumcircle_contains(&outside), InCircle::OUTSIDE);
        assert_eq!(cw.circumcircle_contains(&outside), InCircle::OUTSIDE);
    }

    #[test]
    fn neighbor_and_apex_queries() {
        let t = right_triangle();
        let e = Edge::new(point!(0.0, 0.0), point!(2.0, 0.0));
        assert!(t.is_neighbor_of(&e));
        assert_eq!(t.opposite_vertex(&e), Some(point!(0.0, 2.0)));

        let unrelated = Edge::new(point!(5.0, 5.0), point!(6.0, 5.0));
        assert!(!t.is_neighbor_of(&unrelated));
    }

    #[test]
    fn neighbor_match_tolerates_drift() {
        let t = right_triangle();
        let e = Edge::new(point!(2.0 + 5e-6, -5e-6), point!(5e-6, 2.0));
        assert!(t.is_neighbor_of(&e));
        assert_eq!(t.opposite_vertex(&e), Some(point!(0.0, 0.0)));
    }

    #[test]
    fn degenerate_sliver_has_no_apex() {
        let p = point!(1.0_f64, 1.0);
        let sliver = Triangle::new(p, p, p);
        let e = Edge::new(p, p);
        assert_eq!(sliver.opposite_vertex(&e), None);
    }

    #[test]
    fn nearest_edge_selection() {
        let t = right_triangle();
        // Below the triangle: nearest is (a, b).
        let (e, d) = t.nearest_edge_to(&point!(1.0, -1.0));
        assert!(e.approx_eq(&Edge::new(point!(0.0, 0.0), point!(2.0, 0.0))));
        assert_relative_eq!(d, 1.0);

        // Beyond the hypotenuse: nearest is (b, c).
        let (e, d) = t.nearest_edge_to(&point!(2.0, 2.0));
        assert!(e.approx_eq(&Edge::new(point!(2.0, 0.0), point!(0.0, 2.0))));
        assert_relative_eq!(d, 2.0_f64.sqrt());

        // Left of the triangle: nearest is (c, a).
        let (e, d) = t.nearest_edge_to(&point!(-1.0, 1.0));
        assert!(e.approx_eq(&Edge::new(point!(0.0, 2.0), point!(0.0, 0.0))));
        assert_relative_eq!(d, 1.0);
    }

    #[test]
    fn area_of_right_triangle() {
        assert_relative_eq!(right_triangle().area(), 2.0);
        let degenerate = Triangle::new(point!(0.0, 0.0), point!(1.0, 1.0), point!(2.0, 2.0));
        assert_relative_eq!(degenerate.area(), 0.0);
    }

    #[test]
    fn separated_triangles_do_not_intersect() {
        let t = right_triangle();
        let far = Triangle::new(point!(5.0, 5.0), point!(6.0, 5.0), point!(5.0, 6.0));
        assert!(!t.intersects(&far));
        assert!(!far.intersects(&t));
    }

    #[test]
    fn overlapping_triangles_intersect() {
        let t = right_triangle();
        let overlapping =
            Triangle::new(point!(0.5, 0.5), point!(3.0, 0.5), point!(0.5, 3.0));
        assert!(t.intersects(&overlapping));
        assert!(overlapping.intersects(&t));
    }

    #[test]
    fn closest_vertex_distance_between_triangles() {
        let t = right_triangle();
        let other = Triangle::new(point!(5.0, 0.0), point!(6.0, 0.0), point!(5.0, 1.0));
        assert_relative_eq!(t.closest_vertex_distance(&other), 3.0);
        assert!(t.distance_closer_than(3.5, &other));
        assert!(!t.distance_closer_than(3.0, &other));
    }

    #[test]
    fn serde_roundtrip() {
        let t = right_triangle();
        let json = serde_json::to_string(&t).unwrap();
        let back: Triangle<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }

    #[test]
    fn display_lists_vertices() {
        let t = Triangle::new(point!(0.0_f64, 0.0), point!(1.0, 0.0), point!(0.0, 1.0));
        assert_eq!(t.to_string(), "{(0, 0), (1, 0), (0, 1)}");
    }
}
