//! # delaunay2d
//!
//! Incremental 2D Delaunay triangulation of arbitrary point sets using
//! Bowyer-Watson point insertion.
//!
//! # Features
//!
//! - Incremental construction: a bounding super-triangle is seeded, points
//!   are inserted one at a time, and illegal edges are flipped until the
//!   empty-circumcircle property holds
//! - Generic floating-point coordinate types (`f32` and `f64` via
//!   [`CoordinateScalar`](geometry::traits::coordinate::CoordinateScalar))
//! - Explicit approximate point equality with a named tolerance, so vertex
//!   and edge matching survive upstream floating-point drift
//! - Serialization of the geometric value types with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use delaunay2d::prelude::*;
//!
//! let points = vec![
//!     point!(0.0, 0.0),
//!     point!(1.0, 0.0),
//!     point!(0.0, 1.0),
//!     point!(1.0, 1.0),
//! ];
//!
//! let mut triangulator = DelaunayTriangulator::new(points);
//! triangulator.triangulate().unwrap();
//!
//! // The unit square triangulates into two right triangles.
//! assert_eq!(triangulator.number_of_triangles(), 2);
//! let total_area: f64 = triangulator.triangles().map(|t| t.area()).sum();
//! assert!((total_area - 1.0).abs() < 1e-9);
//! ```
//!
//! # Degenerate and hostile input
//!
//! - Fewer than three points, and exactly collinear point sets, succeed
//!   with an empty triangle list.
//! - A point landing on the outer boundary of the working set with no
//!   opposing triangle aborts construction with
//!   [`TriangulationError::HullBoundaryVertex`](core::triangulator::TriangulationError);
//!   no repair is attempted.
//! - Duplicate points (within tolerance) are tolerated and may yield
//!   zero-area triangles.
//! - NaN or infinite coordinates are not defended against; callers must
//!   pre-validate.
//!
//! # Determinism
//!
//! For a fixed input sequence, construction is fully deterministic: the
//! working set iterates in slot order, every query tie-break keeps the
//! first candidate in that order, and repeated runs produce identical
//! triangle sequences.

#![forbid(unsafe_code)]

/// Core triangulation machinery: the triangle working set and the
/// incremental triangulator.
pub mod core {
    pub mod triangle_soup;
    pub mod triangulator;

    pub use triangle_soup::*;
    pub use triangulator::*;
}

/// Geometric value types and predicates.
pub mod geometry {
    pub mod edge;
    pub mod point;
    pub mod predicates;
    pub mod triangle;

    pub mod traits {
        pub mod coordinate;
        pub use coordinate::*;
    }

    pub use edge::*;
    pub use point::*;
    pub use predicates::*;
    pub use triangle::*;
}

/// Convenience re-exports of the public API.
pub mod prelude {
    pub use crate::core::triangle_soup::{TriangleKey, TriangleSoup};
    pub use crate::core::triangulator::{
        triangulate, DelaunayTriangulator, TriangulationError, TriangulationValidationError,
    };
    pub use crate::geometry::edge::Edge;
    pub use crate::geometry::point::Point2;
    pub use crate::geometry::predicates::{
        closest_point_on_segment, in_circumcircle, orient2d, InCircle, Orientation,
    };
    pub use crate::geometry::traits::coordinate::CoordinateScalar;
    pub use crate::geometry::triangle::Triangle;
    pub use crate::point;
}
