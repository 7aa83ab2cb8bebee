mod rdp;
mod search;

pub use rdp::rdp_range;

use crate::error::{Result, SimplifyError};
use crate::math::distance::{DistanceMetric, Perpendicular};
use crate::math::{Point2, Point3, PointN};

/// Simplifies a polyline, returning the indices of the retained points.
///
/// `epsilon` is the maximum allowed perpendicular deviation of a dropped
/// point from the chord that replaces it; it is squared internally so the
/// engine never takes a square root. Polylines with two or fewer points are
/// returned unchanged (indices `0..n`), without invoking the engine.
///
/// The returned indices are strictly increasing, start at `0`, and end at
/// `points.len() - 1` whenever the input has at least two points.
///
/// # Errors
///
/// Returns [`SimplifyError::NegativeEpsilon`] if `epsilon < 0`.
pub fn simplify_indices<const N: usize>(points: &[PointN<N>], epsilon: f64) -> Result<Vec<usize>>
where
    Perpendicular: DistanceMetric<N>,
{
    if epsilon < 0.0 {
        return Err(SimplifyError::NegativeEpsilon(epsilon));
    }

    let n = points.len();
    if n <= 2 {
        return Ok((0..n).collect());
    }

    let mut keep = Vec::with_capacity(n);
    keep.push(0);
    rdp_range::<N, Perpendicular>(points, 0, n - 1, epsilon * epsilon, &mut keep);

    Ok(keep)
}

/// Simplifies a polyline, returning the retained points themselves.
///
/// # Errors
///
/// Returns [`SimplifyError::NegativeEpsilon`] if `epsilon < 0`.
pub fn simplify<const N: usize>(points: &[PointN<N>], epsilon: f64) -> Result<Vec<PointN<N>>>
where
    Perpendicular: DistanceMetric<N>,
{
    let keep = simplify_indices(points, epsilon)?;
    Ok(keep.into_iter().map(|i| points[i]).collect())
}

/// Simplifies the sub-range `[start, end]` of a polyline, returning the
/// indices of the retained points (starting at `start`, ending at `end`).
///
/// Unlike [`simplify_indices`], the range is validated here so that a bad
/// call fails fast instead of hitting the engine's debug-only assertions.
///
/// # Errors
///
/// Returns [`SimplifyError::NegativeEpsilon`] if `epsilon < 0`,
/// [`SimplifyError::InsufficientPoints`] if the polyline has fewer than two
/// points, and [`SimplifyError::InvalidRange`] unless
/// `start < end < points.len()`.
pub fn simplify_range<const N: usize>(
    points: &[PointN<N>],
    start: usize,
    end: usize,
    epsilon: f64,
) -> Result<Vec<usize>>
where
    Perpendicular: DistanceMetric<N>,
{
    if epsilon < 0.0 {
        return Err(SimplifyError::NegativeEpsilon(epsilon));
    }
    if points.len() < 2 {
        return Err(SimplifyError::InsufficientPoints(points.len()));
    }
    if start >= end || end >= points.len() {
        return Err(SimplifyError::InvalidRange {
            start,
            end,
            len: points.len(),
        });
    }

    let mut keep = Vec::with_capacity(end - start + 1);
    keep.push(start);
    rdp_range::<N, Perpendicular>(points, start, end, epsilon * epsilon, &mut keep);

    Ok(keep)
}

/// Simplifies a 2D polyline given as one coordinate buffer per axis,
/// returning the retained coordinates in the same per-axis layout.
///
/// # Errors
///
/// Returns [`SimplifyError::NegativeEpsilon`] if `epsilon < 0` and
/// [`SimplifyError::LengthMismatch`] if the buffers differ in length.
pub fn simplify_xy(x: &[f64], y: &[f64], epsilon: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    if epsilon < 0.0 {
        return Err(SimplifyError::NegativeEpsilon(epsilon));
    }
    if x.len() != y.len() {
        return Err(SimplifyError::LengthMismatch(x.len(), y.len()));
    }

    let points: Vec<Point2> = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| Point2::new(xi, yi))
        .collect();
    let keep = simplify_indices(&points, epsilon)?;

    Ok((
        keep.iter().map(|&i| x[i]).collect(),
        keep.iter().map(|&i| y[i]).collect(),
    ))
}

/// Simplifies a 3D polyline given as one coordinate buffer per axis.
///
/// # Errors
///
/// Returns [`SimplifyError::NegativeEpsilon`] if `epsilon < 0` and
/// [`SimplifyError::LengthMismatch`] if any two buffers differ in length.
pub fn simplify_xyz(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    epsilon: f64,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    if epsilon < 0.0 {
        return Err(SimplifyError::NegativeEpsilon(epsilon));
    }
    if x.len() != y.len() {
        return Err(SimplifyError::LengthMismatch(x.len(), y.len()));
    }
    if x.len() != z.len() {
        return Err(SimplifyError::LengthMismatch(x.len(), z.len()));
    }

    let points: Vec<Point3> = x
        .iter()
        .zip(y)
        .zip(z)
        .map(|((&xi, &yi), &zi)| Point3::new(xi, yi, zi))
        .collect();
    let keep = simplify_indices(&points, epsilon)?;

    Ok((
        keep.iter().map(|&i| x[i]).collect(),
        keep.iter().map(|&i| y[i]).collect(),
        keep.iter().map(|&i| z[i]).collect(),
    ))
}
