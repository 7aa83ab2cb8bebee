pub mod error;
pub mod math;
pub mod simplify;

pub use error::{Result, SimplifyError};
pub use math::distance::{DistanceMetric, Perpendicular};
pub use simplify::{simplify, simplify_indices, simplify_range, simplify_xy, simplify_xyz};
