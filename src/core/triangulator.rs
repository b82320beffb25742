//! Incremental Delaunay triangulation of a 2D point set.
//!
//! Bowyer-Watson style construction: a large super-triangle is seeded
//! first, points are inserted one at a time with edge legalization after
//! each insertion, and triangles touching the super-triangle vertices are
//! purged at the end.
//!
//! The super-triangle scale is derived from `max(x, y)` over all points,
//! not `max(|x|, |y|)`. For point sets dominated by large-magnitude
//! negative coordinates the super-triangle may fail to enclose the input,
//! and construction either aborts with
//! [`TriangulationError::HullBoundaryVertex`] or silently yields a
//! corrupted triangulation. Callers should offset negative-dominant data
//! into the positive quadrant before triangulating.

use crate::core::triangle_soup::{TriangleKey, TriangleSoup};
use crate::geometry::edge::Edge;
use crate::geometry::point::Point2;
use crate::geometry::predicates::InCircle;
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::geometry::triangle::Triangle;
use smallvec::SmallVec;
use thiserror::Error;

/// Errors during triangulation construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// An inserted point landed on the outer boundary of the working set
    /// with no opposing triangle to absorb it.
    ///
    /// Splitting the single boundary triangle would admit the point, but
    /// that repair is not implemented; construction stops instead.
    #[error("point {point} lies on the boundary of the triangulation and cannot be inserted")]
    HullBoundaryVertex {
        /// The offending point, formatted as `(x, y)`.
        point: String,
    },

    /// A triangle expected to provide an apex vertex had all three vertices
    /// on the edge in question. Only degenerate working sets (coincident
    /// vertices within tolerance) can produce this.
    #[error("no apex vertex opposite edge {edge}; the working set is degenerate")]
    DegenerateApex {
        /// The edge whose apex lookup failed, formatted as `[start - end]`.
        edge: String,
    },
}

/// Errors reported by [`DelaunayTriangulator::validate_delaunay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationValidationError {
    /// An input point lies strictly inside the circumcircle of a result
    /// triangle.
    #[error("point {point} lies inside the circumcircle of triangle {triangle}")]
    CircumcircleViolation {
        /// The offending point, formatted as `(x, y)`.
        point: String,
        /// The violated triangle, formatted as `{a, b, c}`.
        triangle: String,
    },
}

/// Incremental 2D Delaunay triangulator.
///
/// Owns the ordered input point sequence and the triangle working set for
/// the duration of one [`triangulate`](Self::triangulate) call. The
/// construction is single-threaded and synchronous; it runs to completion
/// or failure before returning.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::triangulator::DelaunayTriangulator;
/// use delaunay2d::point;
///
/// let mut triangulator = DelaunayTriangulator::new(vec![
///     point!(0.0, 0.0),
///     point!(1.0, 0.0),
///     point!(0.0, 1.0),
///     point!(1.0, 1.0),
/// ]);
/// triangulator.triangulate().unwrap();
/// assert_eq!(triangulator.number_of_triangles(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DelaunayTriangulator<T>
where
    T: CoordinateScalar,
{
    points: Vec<Point2<T>>,
    soup: TriangleSoup<T>,
}

impl<T> DelaunayTriangulator<T>
where
    T: CoordinateScalar,
{
    /// Creates a triangulator over the given point sequence.
    ///
    /// Insertion order follows the sequence order; it can change the
    /// intermediate triangulation shape but not, up to numerical
    /// tie-breaking, the final geometric result.
    #[must_use]
    pub fn new(points: Vec<Point2<T>>) -> Self {
        Self {
            points,
            soup: TriangleSoup::new(),
        }
    }

    /// Returns the input point sequence.
    #[must_use]
    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    /// Iterates over the triangles of the current triangulation.
    ///
    /// Only meaningful after a successful [`triangulate`](Self::triangulate)
    /// call; after a failed call the working set holds whatever partial
    /// state existed at the point of failure.
    pub fn triangles(&self) -> impl Iterator<Item = &Triangle<T>> {
        self.soup.triangles()
    }

    /// Number of triangles in the current triangulation.
    #[must_use]
    pub fn number_of_triangles(&self) -> usize {
        self.soup.len()
    }

    /// Builds the Delaunay triangulation of the point sequence.
    ///
    /// Fewer than three points succeed immediately with an empty result.
    /// Exactly collinear inputs also succeed with an empty result: every
    /// candidate triangle is degenerate, so nothing survives the final
    /// purge.
    ///
    /// Repeated calls rebuild from scratch; the working set is reset first.
    ///
    /// # Errors
    ///
    /// [`TriangulationError::HullBoundaryVertex`] when a point lands on the
    /// outer boundary with no opposing triangle, and
    /// [`TriangulationError::DegenerateApex`] when coincident vertices
    /// degenerate the working set. In both cases the working set is left in
    /// its partial state and must not be read.
    pub fn triangulate(&mut self) -> Result<(), TriangulationError> {
        self.soup.clear();

        if self.points.len() < 3 {
            return Ok(());
        }

        let super_triangle = self.super_triangle();
        self.soup.insert(super_triangle);

        for i in 0..self.points.len() {
            let point = self.points[i];
            self.insert_point(point)?;
        }

        for vertex in super_triangle.vertices() {
            self.soup.remove_with_vertex(&vertex);
        }

        Ok(())
    }

    /// Builds the bounding super-triangle.
    ///
    /// The scale is sixteen times the largest coordinate seen (clamped to
    /// at least zero); the vertices `(0, 3M)`, `(3M, 0)`, `(-3M, -3M)`
    /// enclose the input whenever non-negative magnitudes dominate. The
    /// factor keeps the super-triangle vertices far enough away that the
    /// final triangulation stays convex after the purge.
    fn super_triangle(&self) -> Triangle<T> {
        let max_coordinate = self
            .points
            .iter()
            .map(|p| p.x().max(p.y()))
            .fold(T::zero(), T::max);

        let two = T::one() + T::one();
        let sixteen = two * two * two * two;
        let m = max_coordinate * sixteen;
        let three_m = m + m + m;

        Triangle::new(
            Point2::new(T::zero(), three_m),
            Point2::new(three_m, T::zero()),
            Point2::new(-three_m, -three_m),
        )
    }

    fn insert_point(&mut self, point: Point2<T>) -> Result<(), TriangulationError> {
        if let Some(key) = self.soup.locate(&point) {
            // Interior case: split the containing triangle into three.
            let triangle = self.soup.remove(key).expect("locate returned a live key");
            let [a, b, c] = triangle.vertices();

            self.soup.insert(Triangle::new(a, b, point));
            self.soup.insert(Triangle::new(b, c, point));
            self.soup.insert(Triangle::new(c, a, point));

            let seeds: SmallVec<[Edge<T>; 4]> = SmallVec::from_iter([
                Edge::new(a, b),
                Edge::new(b, c),
                Edge::new(c, a),
            ]);
            self.legalize(point, seeds)
        } else {
            // The point lies on an edge (or escaped every containment test
            // through a floating-point gap). Split the pair of triangles
            // around the nearest edge into four.
            let hull_failure = || TriangulationError::HullBoundaryVertex {
                point: point.to_string(),
            };

            let edge = self.soup.nearest_edge(&point).ok_or_else(hull_failure)?;
            let first_key = self.soup.find_one_sharing(&edge).ok_or_else(hull_failure)?;
            let second_key = self
                .soup
                .find_neighbor(first_key, &edge)
                .ok_or_else(hull_failure)?;

            let first_apex = self.apex_of(first_key, &edge)?;
            let second_apex = self.apex_of(second_key, &edge)?;

            self.soup.remove(first_key);
            self.soup.remove(second_key);

            let start = edge.start();
            let end = edge.end();
            self.soup.insert(Triangle::new(start, first_apex, point));
            self.soup.insert(Triangle::new(end, first_apex, point));
            self.soup.insert(Triangle::new(start, second_apex, point));
            self.soup.insert(Triangle::new(end, second_apex, point));

            let seeds: SmallVec<[Edge<T>; 4]> = SmallVec::from_iter([
                Edge::new(start, first_apex),
                Edge::new(end, first_apex),
                Edge::new(start, second_apex),
                Edge::new(end, second_apex),
            ]);
            self.legalize(point, seeds)
        }
    }

    /// Restores the empty-circumcircle property around `point`.
    ///
    /// Worklist formulation of recursive edge flipping: each entry is an
    /// edge opposite `point` in some triangle of its star. An entry whose
    /// owning triangle has since been flipped away is skipped; a flip
    /// replaces the edge's two owners with the two triangles on the other
    /// diagonal and queues the freshly exposed edges. Each flip strictly
    /// improves local Delaunay-ness, so the loop terminates.
    fn legalize(
        &mut self,
        point: Point2<T>,
        mut worklist: SmallVec<[Edge<T>; 4]>,
    ) -> Result<(), TriangulationError> {
        while let Some(edge) = worklist.pop() {
            let Some(key) = self.star_triangle_owning(&point, &edge) else {
                continue;
            };
            let Some(neighbor_key) = self.soup.find_neighbor(key, &edge) else {
                continue;
            };
            let Some(neighbor) = self.soup.get(neighbor_key).copied() else {
                continue;
            };
            if neighbor.circumcircle_contains(&point) != InCircle::INSIDE {
                continue;
            }

            let apex = self.apex_of(neighbor_key, &edge)?;

            self.soup.remove(key);
            self.soup.remove(neighbor_key);
            self.soup.insert(Triangle::new(apex, edge.start(), point));
            self.soup.insert(Triangle::new(apex, edge.end(), point));

            worklist.push(Edge::new(apex, edge.start()));
            worklist.push(Edge::new(apex, edge.end()));
        }
        Ok(())
    }

    /// Finds the triangle of `point`'s star that owns `edge`, if it is
    /// still live.
    fn star_triangle_owning(&self, point: &Point2<T>, edge: &Edge<T>) -> Option<TriangleKey> {
        self.soup
            .iter()
            .find(|(_, t)| t.has_vertex(point) && t.is_neighbor_of(edge))
            .map(|(k, _)| k)
    }

    fn apex_of(&self, key: TriangleKey, edge: &Edge<T>) -> Result<Point2<T>, TriangulationError> {
        self.soup
            .get(key)
            .and_then(|t| t.opposite_vertex(edge))
            .ok_or_else(|| TriangulationError::DegenerateApex {
                edge: edge.to_string(),
            })
    }

    /// Checks the empty-circumcircle property of the current triangulation
    /// against the input points.
    ///
    /// # Errors
    ///
    /// [`TriangulationValidationError::CircumcircleViolation`] naming the
    /// first offending point/triangle pair.
    pub fn validate_delaunay(&self) -> Result<(), TriangulationValidationError> {
        for triangle in self.soup.triangles() {
            for point in &self.points {
                if triangle.has_vertex(point) {
                    continue;
                }
                if triangle.circumcircle_contains(point) == InCircle::INSIDE {
                    return Err(TriangulationValidationError::CircumcircleViolation {
                        point: point.to_string(),
                        triangle: triangle.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// One-shot convenience: triangulates `points` and returns the resulting
/// triangles.
///
/// # Errors
///
/// Propagates any [`TriangulationError`] from
/// [`DelaunayTriangulator::triangulate`].
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::triangulator::triangulate;
/// use delaunay2d::point;
///
/// let triangles = triangulate(&[
///     point!(0.0, 0.0),
///     point!(2.0, 0.0),
///     point!(1.0, 2.0),
/// ])
/// .unwrap();
/// assert_eq!(triangles.len(), 1);
/// ```
pub fn triangulate<T>(points: &[Point2<T>]) -> Result<Vec<Triangle<T>>, TriangulationError>
where
    T: CoordinateScalar,
{
    let mut triangulator = DelaunayTriangulator::new(points.to_vec());
    triangulator.triangulate()?;
    Ok(triangulator.triangles().copied().collect())
}
