pub mod distance;

/// N-dimensional point type.
pub type PointN<const N: usize> = nalgebra::Point<f64, N>;

/// N-dimensional vector type.
pub type VectorN<const N: usize> = nalgebra::SVector<f64, N>;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Squared-length threshold below which a reference segment is treated as
/// degenerate (its endpoints coincide) and point-to-line distances fall back
/// to point-to-point distances.
///
/// Known limitation: this is an absolute threshold, independent of coordinate
/// magnitude. Inputs with very large or very small coordinate ranges may see
/// near-degenerate segments classified the other way.
pub const DEGENERATE_SEGMENT_EPS: f64 = 1e-14;
