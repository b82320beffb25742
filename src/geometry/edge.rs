//! Undirected edges between 2D points.
//!
//! Edges are structural descriptors, not stored entities: the triangulation
//! never owns an edge, it derives them from triangles on demand. Two edges
//! are equal when their endpoint pairs match in either order under the
//! approximate point equality of [`Point2::approx_eq`].

use crate::geometry::point::Point2;
use crate::geometry::predicates::closest_point_on_segment;
use crate::geometry::traits::coordinate::CoordinateScalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An undirected edge between two points.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::edge::Edge;
/// use delaunay2d::point;
///
/// let e = Edge::new(point!(0.0, 0.0), point!(1.0, 0.0));
/// let reversed = Edge::new(point!(1.0, 0.0), point!(0.0, 0.0));
/// assert!(e.approx_eq(&reversed));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: CoordinateScalar", deserialize = "T: CoordinateScalar"))]
pub struct Edge<T>
where
    T: CoordinateScalar,
{
    start: Point2<T>,
    end: Point2<T>,
}

impl<T> Edge<T>
where
    T: CoordinateScalar,
{
    /// Creates a new edge from its endpoints.
    #[inline]
    pub const fn new(start: Point2<T>, end: Point2<T>) -> Self {
        Self { start, end }
    }

    /// Returns the start endpoint.
    #[inline]
    #[must_use]
    pub fn start(&self) -> Point2<T> {
        self.start
    }

    /// Returns the end endpoint.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Point2<T> {
        self.end
    }

    /// Tests whether `other` joins the same two points, in either order,
    /// under approximate point equality.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.start.approx_eq(&other.start) && self.end.approx_eq(&other.end))
            || (self.start.approx_eq(&other.end) && self.end.approx_eq(&other.start))
    }

    /// Tests whether `point` is one of this edge's endpoints under
    /// approximate point equality.
    #[inline]
    #[must_use]
    pub fn has_endpoint(&self, point: &Point2<T>) -> bool {
        self.start.approx_eq(point) || self.end.approx_eq(point)
    }

    /// Returns the closest point to `point` on this edge (clamped to the
    /// segment).
    #[inline]
    #[must_use]
    pub fn closest_point_to(&self, point: &Point2<T>) -> Point2<T> {
        closest_point_on_segment(&self.start, &self.end, point)
    }

    /// Returns the distance from `point` to this edge.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, point: &Point2<T>) -> T {
        self.closest_point_to(point).distance_to(point)
    }

    /// Returns the length of this edge.
    #[inline]
    #[must_use]
    pub fn length(&self) -> T {
        self.start.distance_to(&self.end)
    }
}

impl<T> fmt::Display for Edge<T>
where
    T: CoordinateScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}
