//! Scalar trait for 2D coordinate types.
//!
//! The triangulation is generic over its coordinate scalar so that callers
//! can choose between `f32` and `f64` precision. The trait bundles the
//! floating-point operations the predicates need together with the
//! **approximate-equality tolerance** that vertex and edge matching rely on
//! throughout the algorithm. Points produced by upstream floating-point
//! computation are rarely bit-identical even when geometrically coincident,
//! so all matching goes through this tolerance rather than exact equality.

use num_traits::Float;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Trait for scalars usable as 2D coordinates.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::traits::coordinate::CoordinateScalar;
///
/// fn within_tolerance<T: CoordinateScalar>(a: T, b: T) -> bool {
///     (a - b).abs() <= T::default_tolerance()
/// }
///
/// assert!(within_tolerance(1.0_f64, 1.0 + 1e-7));
/// assert!(!within_tolerance(1.0_f64, 1.1));
/// ```
pub trait CoordinateScalar:
    Float + Default + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + 'static
{
    /// Absolute tolerance under which two coordinates are considered equal.
    ///
    /// The tolerance is deliberately the same magnitude for `f32` and `f64`:
    /// the matching contract is geometric, not precision-driven.
    fn default_tolerance() -> Self;
}

impl CoordinateScalar for f32 {
    fn default_tolerance() -> Self {
        1e-5
    }
}

impl CoordinateScalar for f64 {
    fn default_tolerance() -> Self {
        1e-5
    }
}
