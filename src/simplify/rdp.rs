use crate::math::distance::DistanceMetric;
use crate::math::PointN;
use crate::simplify::search::most_distant_point_from_line;

/// Recursive Ramer-Douglas-Peucker over the index range `[start, end]`.
///
/// Appends the indices of retained points to `keep` in strictly increasing
/// order. The accumulator must already end with `start`: the outermost caller
/// seeds it with the initial index, and because the left sub-range is always
/// resolved before the right one, each recursive call finds its own start
/// already in place. No sorting or deduplication is ever needed.
///
/// Preconditions (debug-asserted, not re-checked in release builds):
/// `start < end < points.len()` and `epsilon_sq >= 0`. The caller-facing
/// entry points in [`crate::simplify`] validate these before calling.
pub fn rdp_range<const N: usize, M: DistanceMetric<N>>(
    points: &[PointN<N>],
    start: usize,
    end: usize,
    epsilon_sq: f64,
    keep: &mut Vec<usize>,
) {
    debug_assert!(start < end, "start index must be smaller than end index");
    debug_assert!(
        end < points.len(),
        "end index must be smaller than the point count"
    );
    debug_assert!(epsilon_sq >= 0.0, "epsilon_sq must be non-negative");
    debug_assert_eq!(
        keep.last(),
        Some(&start),
        "accumulator must end with the range start"
    );

    let (max_dist_sq, max_index) = most_distant_point_from_line::<N, M>(points, start, end);

    if max_dist_sq > epsilon_sq {
        // The chord is too coarse; split at the furthest point, left first.
        rdp_range::<N, M>(points, start, max_index, epsilon_sq, keep);
        rdp_range::<N, M>(points, max_index, end, epsilon_sq, keep);
    } else {
        // The chord covers the whole range; `start` is already kept.
        keep.push(end);
    }
}
