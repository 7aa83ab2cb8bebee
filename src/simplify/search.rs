use crate::math::distance::DistanceMetric;
use crate::math::{PointN, DEGENERATE_SEGMENT_EPS};

/// Finds the point of maximum squared distance from `points[start]` over the
/// range `(start, end)`, both endpoints exclusive.
///
/// This is the degenerate-segment variant, used when `points[start]` and
/// `points[end]` coincide and there is no reference line to measure against.
/// Returns `(max_dist_sq, index)`; `(0.0, start)` when the range has no
/// interior points.
pub(crate) fn most_distant_point<const N: usize>(
    points: &[PointN<N>],
    start: usize,
    end: usize,
) -> (f64, usize) {
    debug_assert!(start < end, "start index must be smaller than end index");
    debug_assert!(
        end < points.len(),
        "end index must be smaller than the point count"
    );

    let mut max_dist_sq = 0.0;
    let mut max_index = start;

    for i in start + 1..end {
        let dist_sq = (points[i] - points[start]).norm_squared();

        if dist_sq > max_dist_sq {
            max_dist_sq = dist_sq;
            max_index = i;
        }
    }

    (max_dist_sq, max_index)
}

/// Finds the point of maximum squared perpendicular distance from the line
/// through `points[start]` and `points[end]`, over `(start, end)` exclusive.
///
/// The line direction and its squared length are computed once and reused
/// for every point in the scan. If the reference segment is degenerate the
/// search falls back to [`most_distant_point`].
///
/// Ties are broken by strict `>` comparison: the first point reaching the
/// maximum (lowest index) wins.
pub(crate) fn most_distant_point_from_line<const N: usize, M: DistanceMetric<N>>(
    points: &[PointN<N>],
    start: usize,
    end: usize,
) -> (f64, usize) {
    debug_assert!(start < end, "start index must be smaller than end index");
    debug_assert!(
        end < points.len(),
        "end index must be smaller than the point count"
    );

    let a = points[start];
    let ab = points[end] - a;
    let ab_len_sq = ab.norm_squared();

    if ab_len_sq < DEGENERATE_SEGMENT_EPS {
        return most_distant_point(points, start, end);
    }

    let mut max_dist_sq = 0.0;
    let mut max_index = start;

    for i in start + 1..end {
        let dist_sq = M::deviation_sq(&points[i], &a, &ab, ab_len_sq);

        if dist_sq > max_dist_sq {
            max_dist_sq = dist_sq;
            max_index = i;
        }
    }

    (max_dist_sq, max_index)
}
