//! Geometric deviation metrics.
//!
//! These summarize how far an observed path bows away from the ideal
//! straight response. They assume the normalized convention in which a path
//! starts at the origin and ends near `(1, 1)` (or `(1, 1.5)`), i.e. after
//! [`time_normalize`](crate::time_normalize),
//! [`canonicalize_direction`](crate::canonicalize_direction) and
//! [`normalize_range`](crate::normalize_range).
//!
//! | Metric | Output |
//! |--------|--------|
//! | [`max_deviation`] | signed scalar |
//! | [`auc`] | signed area between path and endpoint chord |
//! | [`auc2`] | signed area against the start axis, minus the chord triangle |
//! | [`velocity`] | per-step distance, length `n - 1` |
//! | [`relative_distance`] | closeness to two mirrored targets, length `n` |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrajectoryError};
use crate::math::geometry::{hypot, rotate_path, shoelace_sum};
use crate::validation::{require_finite, require_min_len, require_same_len};

/// Signed maximum deviation from the ideal straight line.
///
/// The path is rotated about the origin by `atan(x[last] / y[last])` radians,
/// which stands the line from `(0, 0)` to the endpoint upright on the y axis.
/// The rotated x values are then the signed offsets from that line. The
/// result is `|min(rx)|` when the largest offset is on the negative side
/// (towards the alternative response) and `-|max(rx)|` otherwise.
///
/// The ideal line is taken to start at the origin; paths that do not are
/// measured against the line from the origin to their endpoint.
///
/// # Errors
///
/// Returns an error if the lengths differ, the path is empty, a coordinate
/// is NaN or infinite, or `y[last] == 0` (the rotation angle is undefined).
///
/// # Example
///
/// ```
/// use trajectory_metrics::max_deviation;
///
/// // Bows up the left side before reaching (1, 1)
/// let x = [0.0, 0.0, 1.0];
/// let y = [0.0, 1.0, 1.0];
/// let md = max_deviation(&x, &y)?;
/// assert!((md - 0.5_f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), trajectory_metrics::TrajectoryError>(())
/// ```
pub fn max_deviation(x: &[f64], y: &[f64]) -> Result<f64> {
    require_same_len(x, y)?;
    require_min_len(x, 1)?;
    require_finite(x, "x coordinate")?;
    require_finite(y, "y coordinate")?;

    let (end_x, end_y) = (x[x.len() - 1], y[y.len() - 1]);
    if end_y == 0.0 {
        return Err(TrajectoryError::degenerate(
            "final y coordinate is zero; rotation angle undefined",
        ));
    }

    let radians = (end_x / end_y).atan();
    let (rx, _) = rotate_path(x, y, radians);

    let min_rx = rx.iter().copied().fold(f64::INFINITY, f64::min);
    let max_rx = rx.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let max_positive = min_rx.abs();
    let max_negative = max_rx.abs();
    if max_positive > max_negative {
        Ok(max_positive)
    } else {
        Ok(-max_negative)
    }
}

/// Signed area enclosed by the path and the chord joining its endpoints.
///
/// The path is closed by connecting the last point back to the first and
/// the shoelace sum is halved. Paths bowing to the left of a rightward,
/// upward chord give positive areas.
///
/// # Errors
///
/// Returns an error if the lengths differ.
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64> {
    require_same_len(x, y)?;
    Ok(shoelace_sum(x, y) / 2.0)
}

/// Signed area against the start axis, minus the straight-line triangle.
///
/// The polygon is closed through the corner point `(x[last], y[0])` instead
/// of the direct chord; its area is reduced by the triangle the straight
/// line forms with that axis, `0.5 · |x[last] − x[0]| · |y[last] − y[0]|`.
/// For paths heading right and up this matches [`auc`]; the two diverge
/// when the chord runs against one axis. Paths passed through
/// [`canonicalize_direction`](crate::canonicalize_direction) and
/// [`normalize_range`](crate::normalize_range) onto an increasing range
/// always head right and up, so there the two values are identical and do
/// not count as separate measures.
///
/// # Errors
///
/// Returns an error if the lengths differ or the path is empty.
pub fn auc2(x: &[f64], y: &[f64]) -> Result<f64> {
    require_same_len(x, y)?;
    require_min_len(x, 1)?;

    let (first_x, first_y) = (x[0], y[0]);
    let (last_x, last_y) = (x[x.len() - 1], y[y.len() - 1]);

    let mut closed_x = x.to_vec();
    let mut closed_y = y.to_vec();
    closed_x.push(last_x);
    closed_y.push(first_y);

    let area = shoelace_sum(&closed_x, &closed_y) / 2.0;
    let triangle = 0.5 * (last_x - first_x).abs() * (last_y - first_y).abs();
    Ok(area - triangle)
}

/// Euclidean distance travelled between consecutive samples.
///
/// Output has one element fewer than the input (empty for paths shorter
/// than 2).
///
/// # Errors
///
/// Returns an error if the lengths differ.
pub fn velocity(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    require_same_len(x, y)?;
    Ok(x.windows(2)
        .zip(y.windows(2))
        .map(|(wx, wy)| hypot(wx[1] - wx[0], wy[1] - wy[0]))
        .collect())
}

/// Relative-distance curve with the raw distances it is built from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelativeDistance {
    /// `d1 / (d1 + d2)` per sample.
    pub relative: Vec<f64>,
    /// Distance to the first target `(x[0], y[last])`.
    pub d1: Vec<f64>,
    /// Distance to the mirrored target `(-x[0], y[last])`.
    pub d2: Vec<f64>,
}

/// Relative closeness to two mirrored response targets.
///
/// The targets are `(x[0], y[last])` and `(-x[0], y[last])`. Each sample
/// gets `d1 / (d1 + d2)`: near 0 close to the first target, near 1 close to
/// the second. A sample sitting on both targets at once (only possible when
/// `x[0] == 0`) yields NaN.
///
/// # Errors
///
/// Returns an error if the lengths differ or the path is empty.
pub fn relative_distance(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    relative_distance_full(x, y).map(|rd| rd.relative)
}

/// [`relative_distance`] together with the per-target distance curves.
///
/// # Errors
///
/// Same as [`relative_distance`].
pub fn relative_distance_full(x: &[f64], y: &[f64]) -> Result<RelativeDistance> {
    require_same_len(x, y)?;
    require_min_len(x, 1)?;

    let (target1_x, target_y) = (x[0], y[y.len() - 1]);
    let target2_x = -target1_x;

    let n = x.len();
    let mut out = RelativeDistance {
        relative: Vec::with_capacity(n),
        d1: Vec::with_capacity(n),
        d2: Vec::with_capacity(n),
    };
    for (&px, &py) in x.iter().zip(y.iter()) {
        let d1 = hypot(px - target1_x, py - target_y);
        let d2 = hypot(px - target2_x, py - target_y);
        out.relative.push(d1 / (d1 + d2));
        out.d1.push(d1);
        out.d2.push(d2);
    }
    Ok(out)
}
