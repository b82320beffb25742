//! Immutable 2D points with approximate equality.
//!
//! # Equality semantics
//!
//! `Point2` carries two notions of equality and they are **not** the same:
//!
//! - the derived [`PartialEq`] is exact, coordinate for coordinate. It is
//!   what determinism checks and hash-free set comparisons use.
//! - [`Point2::approx_eq`] compares coordinates within
//!   [`CoordinateScalar::default_tolerance`]. Every vertex and edge match
//!   performed by the triangulation goes through this method, because points
//!   that are geometrically coincident may differ in their low-order bits
//!   after upstream floating-point arithmetic.

use crate::geometry::traits::coordinate::CoordinateScalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the 2D plane.
///
/// Value type with no identity beyond its coordinates; instances are
/// immutable once constructed.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::point::Point2;
///
/// let p = Point2::new(1.0, 2.0);
/// assert_eq!(p.x(), 1.0);
/// assert_eq!(p.y(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
// The explicit bound replaces the derive's inferred `T: Deserialize<'de>`,
// which is ambiguous against the `DeserializeOwned` supertrait of
// `CoordinateScalar`.
#[serde(bound(serialize = "T: CoordinateScalar", deserialize = "T: CoordinateScalar"))]
pub struct Point2<T>
where
    T: CoordinateScalar,
{
    x: T,
    y: T,
}

impl<T> Point2<T>
where
    T: CoordinateScalar,
{
    /// Creates a new point from its coordinates.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[inline]
    #[must_use]
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the y coordinate.
    #[inline]
    #[must_use]
    pub fn y(&self) -> T {
        self.y
    }

    /// Returns the coordinates as an array.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Tests whether this point coincides with `other` within the scalar's
    /// default tolerance, compared per coordinate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay2d::geometry::point::Point2;
    ///
    /// let p = Point2::new(1.0_f64, 2.0);
    /// assert!(p.approx_eq(&Point2::new(1.0 + 1e-7, 2.0)));
    /// assert!(!p.approx_eq(&Point2::new(1.1, 2.0)));
    /// ```
    #[inline]
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        let tol = T::default_tolerance();
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }

    /// Euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl<T> fmt::Display for Point2<T>
where
    T: CoordinateScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> From<[T; 2]> for Point2<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Convenience macro for constructing a [`Point2`].
///
/// # Examples
///
/// ```rust
/// use delaunay2d::point;
///
/// let p = point!(1.0, 2.0);
/// assert_eq!(p.x(), 1.0);
/// ```
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::geometry::point::Point2::new($x, $y)
    };
}
