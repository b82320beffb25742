//! The mutable working set of triangles.
//!
//! `TriangleSoup` owns every live triangle during construction. Triangles
//! are keyed by an arena handle rather than by value, so removing one
//! triangle can never accidentally remove a different triangle that happens
//! to share the same three coordinates (duplicate input points make such
//! coincidences real).
//!
//! Iteration follows slot-map order, which is deterministic for a fixed
//! sequence of insert/remove operations. The geometric queries below return
//! the *first* match in that order; this is the documented tie-break for
//! [`TriangleSoup::locate`] and [`TriangleSoup::nearest_edge`].

use crate::geometry::edge::Edge;
use crate::geometry::point::Point2;
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::geometry::triangle::Triangle;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle identifying a live triangle in a [`TriangleSoup`].
    ///
    /// Keys are invalidated by removal; a stale key simply misses.
    pub struct TriangleKey;
}

/// An unordered collection of triangles supporting the geometric queries of
/// incremental insertion.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::triangle_soup::TriangleSoup;
/// use delaunay2d::geometry::triangle::Triangle;
/// use delaunay2d::point;
///
/// let mut soup = TriangleSoup::new();
/// let key = soup.insert(Triangle::new(
///     point!(0.0, 0.0),
///     point!(4.0, 0.0),
///     point!(0.0, 4.0),
/// ));
///
/// assert_eq!(soup.locate(&point!(1.0, 1.0)), Some(key));
/// assert_eq!(soup.locate(&point!(5.0, 5.0)), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriangleSoup<T>
where
    T: CoordinateScalar,
{
    triangles: SlotMap<TriangleKey, Triangle<T>>,
}

impl<T> TriangleSoup<T>
where
    T: CoordinateScalar,
{
    /// Creates an empty soup.
    #[must_use]
    pub fn new() -> Self {
        Self {
            triangles: SlotMap::with_key(),
        }
    }

    /// Number of live triangles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Tests whether the soup holds no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Inserts a triangle and returns its handle.
    #[inline]
    pub fn insert(&mut self, triangle: Triangle<T>) -> TriangleKey {
        self.triangles.insert(triangle)
    }

    /// Removes the triangle behind `key`, returning it if it was live.
    #[inline]
    pub fn remove(&mut self, key: TriangleKey) -> Option<Triangle<T>> {
        self.triangles.remove(key)
    }

    /// Returns the triangle behind `key` if it is live.
    #[inline]
    #[must_use]
    pub fn get(&self, key: TriangleKey) -> Option<&Triangle<T>> {
        self.triangles.get(key)
    }

    /// Tests whether `key` refers to a live triangle.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: TriangleKey) -> bool {
        self.triangles.contains_key(key)
    }

    /// Removes all triangles.
    #[inline]
    pub fn clear(&mut self) {
        // A fresh arena, not `SlotMap::clear()`: clearing keeps freed slots
        // on a free list, so a rebuild would allocate keys in a different
        // slot order and break the documented determinism of iteration.
        self.triangles = SlotMap::with_key();
    }

    /// Iterates over `(key, triangle)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (TriangleKey, &Triangle<T>)> {
        self.triangles.iter()
    }

    /// Iterates over the triangles in slot order.
    pub fn triangles(&self) -> impl Iterator<Item = &Triangle<T>> {
        self.triangles.values()
    }

    /// Returns the first triangle whose containment test succeeds for
    /// `point`, or `None` if the point lies outside every triangle.
    ///
    /// A point exactly on a shared edge is contained by neither owner and
    /// yields `None`.
    #[must_use]
    pub fn locate(&self, point: &Point2<T>) -> Option<TriangleKey> {
        self.triangles
            .iter()
            .find(|(_, t)| t.contains(point))
            .map(|(k, _)| k)
    }

    /// Returns the triangle other than `triangle` that shares `edge`, or
    /// `None` when `edge` lies on the outer boundary.
    #[must_use]
    pub fn find_neighbor(&self, triangle: TriangleKey, edge: &Edge<T>) -> Option<TriangleKey> {
        self.triangles
            .iter()
            .find(|(k, t)| *k != triangle && t.is_neighbor_of(edge))
            .map(|(k, _)| k)
    }

    /// Returns the first triangle owning `edge`, if any.
    ///
    /// Which of the (at most two) owners is returned depends on iteration
    /// order; callers pair it with [`Self::find_neighbor`] to reach the
    /// other.
    #[must_use]
    pub fn find_one_sharing(&self, edge: &Edge<T>) -> Option<TriangleKey> {
        self.triangles
            .iter()
            .find(|(_, t)| t.is_neighbor_of(edge))
            .map(|(k, _)| k)
    }

    /// Returns the edge across all triangles whose distance to `point` is
    /// minimal, or `None` when the soup is empty.
    ///
    /// Ties keep the edge of the earlier triangle in iteration order.
    #[must_use]
    pub fn nearest_edge(&self, point: &Point2<T>) -> Option<Edge<T>> {
        let mut best: Option<(Edge<T>, T)> = None;
        for triangle in self.triangles.values() {
            let (edge, distance) = triangle.nearest_edge_to(point);
            match &best {
                Some((_, d)) if distance >= *d => {}
                _ => best = Some((edge, distance)),
            }
        }
        best.map(|(edge, _)| edge)
    }

    /// Removes every triangle that has `vertex` among its vertices, under
    /// approximate point equality.
    pub fn remove_with_vertex(&mut self, vertex: &Point2<T>) {
        self.triangles.retain(|_, t| !t.has_vertex(vertex));
    }
}
