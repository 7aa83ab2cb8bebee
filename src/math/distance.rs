use crate::math::{PointN, VectorN, DEGENERATE_SEGMENT_EPS};

/// Squared point-to-line distance, generic over dimension.
///
/// The provided methods implement the projection formulation: the residual of
/// `p - a` after removing its component along the line direction. Implementors
/// for specific dimensions override [`DistanceMetric::deviation_sq`] with a
/// cheaper formula; the generic body is the fallback for higher dimensions.
pub trait DistanceMetric<const N: usize> {
    /// Returns the squared perpendicular distance from `p` to the infinite
    /// line through `a` with direction `ab`.
    ///
    /// `ab_len_sq` is the squared length of `ab`. Both are passed in so that
    /// scan loops compute them once per reference segment rather than once
    /// per point. `ab_len_sq` must be non-degenerate (see
    /// [`DEGENERATE_SEGMENT_EPS`]); callers handle the degenerate case before
    /// entering their loop.
    #[must_use]
    fn deviation_sq(p: &PointN<N>, a: &PointN<N>, ab: &VectorN<N>, ab_len_sq: f64) -> f64 {
        let ap = p - a;
        let t = ap.dot(ab) / ab_len_sq;
        (ap - ab * t).norm_squared()
    }

    /// Returns the squared perpendicular distance from `p` to the infinite
    /// line through `a` and `b`.
    ///
    /// If the segment is degenerate (`a` and `b` coincide within
    /// [`DEGENERATE_SEGMENT_EPS`]), returns the squared distance from `p`
    /// to `a` instead. Never fails; returns 0 when `p` lies on the line.
    #[must_use]
    fn point_to_line_dist_sq(p: &PointN<N>, a: &PointN<N>, b: &PointN<N>) -> f64 {
        let ab = b - a;
        let ab_len_sq = ab.norm_squared();

        if ab_len_sq < DEGENERATE_SEGMENT_EPS {
            return (p - a).norm_squared();
        }

        Self::deviation_sq(p, a, &ab, ab_len_sq)
    }
}

/// Euclidean perpendicular distance with fast paths for 2D and 3D.
///
/// 2D and 3D use the cross-product formulation; dimensions above 3 fall back
/// to the trait's generic projection formulation.
pub struct Perpendicular;

impl DistanceMetric<2> for Perpendicular {
    fn deviation_sq(p: &PointN<2>, a: &PointN<2>, ab: &VectorN<2>, ab_len_sq: f64) -> f64 {
        // https://en.wikipedia.org/wiki/Distance_from_a_point_to_a_line#Line_defined_by_two_points
        // Scalar 2D cross product; avoids materializing `p - a`.
        let cross = ab.y * (p.x - a.x) - ab.x * (p.y - a.y);
        cross * cross / ab_len_sq
    }
}

impl DistanceMetric<3> for Perpendicular {
    fn deviation_sq(p: &PointN<3>, a: &PointN<3>, ab: &VectorN<3>, ab_len_sq: f64) -> f64 {
        // https://en.wikipedia.org/wiki/Distance_from_a_point_to_a_line#Another_vector_formulation
        (p - a).cross(ab).norm_squared() / ab_len_sq
    }
}

macro_rules! impl_projected_metric {
    ($($dim:literal)*) => {
        $(impl DistanceMetric<$dim> for Perpendicular {})*
    };
}

// Higher dimensions take the generic projection path.
impl_projected_metric!(4 5 6 7 8 9 10 11 12 13 14 15 16);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point2, Point3};
    use approx::assert_relative_eq;

    #[test]
    fn dist_2d_perpendicular() {
        // Point (1, 3) to the line y = 0.
        let d = Perpendicular::point_to_line_dist_sq(
            &Point2::new(1.0, 3.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert_relative_eq!(d, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn dist_2d_diagonal_line() {
        // Point (2, -1) to the line through (0,0) and (4,2):
        // cross = 2*2 - 4*(-1) = 8, len_sq = 20, d_sq = 64/20.
        let d = Perpendicular::point_to_line_dist_sq(
            &Point2::new(2.0, -1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 2.0),
        );
        assert_relative_eq!(d, 64.0 / 20.0, epsilon = 1e-12);
    }

    #[test]
    fn dist_2d_point_on_line_is_zero() {
        let d = Perpendicular::point_to_line_dist_sq(
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 2.0),
        );
        assert!(d.abs() < 1e-15, "d={d}");
    }

    #[test]
    fn dist_2d_beyond_segment_end() {
        // The line is infinite: a point past `b` but on the line is at
        // distance 0, not distance-to-endpoint.
        let d = Perpendicular::point_to_line_dist_sq(
            &Point2::new(10.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
        );
        assert!(d.abs() < 1e-15, "d={d}");
    }

    #[test]
    fn dist_2d_degenerate_falls_back_to_point() {
        let d = Perpendicular::point_to_line_dist_sq(
            &Point2::new(3.0, 4.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(0.0, 0.0),
        );
        assert_relative_eq!(d, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn dist_3d_perpendicular() {
        // Point (0, 0, 1) to the x-axis.
        let d = Perpendicular::point_to_line_dist_sq(
            &Point3::new(0.0, 0.0, 1.0),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
        );
        assert_relative_eq!(d, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn dist_3d_oblique() {
        // Point (1, 1, 1) to the line through the origin along (1, 0, 0):
        // perpendicular component is (0, 1, 1), d_sq = 2.
        let d = Perpendicular::point_to_line_dist_sq(
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(5.0, 0.0, 0.0),
        );
        assert_relative_eq!(d, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn dist_3d_degenerate_falls_back_to_point() {
        let d = Perpendicular::point_to_line_dist_sq(
            &Point3::new(1.0, 2.0, 2.0),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 0.0, 0.0),
        );
        assert_relative_eq!(d, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn dist_4d_projection_fallback() {
        // Line along the first axis; (1, 3, 0, 0) deviates by 3.
        let d = Perpendicular::point_to_line_dist_sq(
            &PointN::<4>::from([1.0, 3.0, 0.0, 0.0]),
            &PointN::<4>::from([0.0, 0.0, 0.0, 0.0]),
            &PointN::<4>::from([2.0, 0.0, 0.0, 0.0]),
        );
        assert_relative_eq!(d, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn dist_4d_point_on_line_is_zero() {
        let d = Perpendicular::point_to_line_dist_sq(
            &PointN::<4>::from([3.0, 3.0, 3.0, 3.0]),
            &PointN::<4>::from([0.0, 0.0, 0.0, 0.0]),
            &PointN::<4>::from([1.0, 1.0, 1.0, 1.0]),
        );
        assert!(d.abs() < 1e-15, "d={d}");
    }

    #[test]
    fn projection_fallback_matches_cross_formula_in_3d() {
        // The default trait body is dimension-generic; check it against the
        // specialized 3D cross formula on an arbitrary configuration.
        struct Projected;
        impl DistanceMetric<3> for Projected {}

        let p = Point3::new(0.3, -1.7, 2.4);
        let a = Point3::new(1.0, 2.0, -0.5);
        let b = Point3::new(-2.0, 0.4, 3.1);

        let fast = Perpendicular::point_to_line_dist_sq(&p, &a, &b);
        let generic = Projected::point_to_line_dist_sq(&p, &a, &b);
        assert_relative_eq!(fast, generic, epsilon = 1e-12);
    }
}
