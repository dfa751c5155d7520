//! Spatial normalization of single coordinate sequences.
//!
//! Trajectories recorded on different screens, or towards mirrored response
//! targets, are brought onto one frame by [`canonicalize_direction`] (flip
//! leftward runs to rightward) followed by [`normalize_range`] (anchor the
//! first and last samples to fixed values).

use crate::error::{Result, TrajectoryError};
use crate::math::interp::interp;
use crate::validation::{require_finite, require_min_len};

/// Rescale `coord` so its first sample maps to `start` and its last to `end`.
///
/// The mapping is linear and anchored at the endpoints of the sequence, not
/// its extremes, so samples that overshoot the endpoints land outside
/// `[start, end]`. The anchors are padded by one span on each side,
/// `[coord[0] - span, coord[last] + span] -> [start - new_span, end + new_span]`,
/// and samples beyond the padded anchors are clamped to them.
///
/// Decreasing sequences are handled by ordering the padded anchors, so the
/// endpoint mapping holds in both directions. Overshoot past the padded
/// anchors has not been checked against recorded data.
///
/// # Errors
///
/// Returns an error if `coord` has fewer than 2 samples, holds a NaN or
/// infinite value, or its first and last samples are equal.
///
/// # Example
///
/// ```
/// use trajectory_metrics::normalize_range;
///
/// let x = [200.0, 180.0, 260.0, 400.0];
/// let normalized = normalize_range(&x, 0.0, 1.0)?;
/// assert!(normalized[0].abs() < 1e-12);
/// assert!((normalized[3] - 1.0).abs() < 1e-12);
/// assert!(normalized[1] < 0.0);
/// # Ok::<(), trajectory_metrics::TrajectoryError>(())
/// ```
pub fn normalize_range(coord: &[f64], start: f64, end: f64) -> Result<Vec<f64>> {
    require_min_len(coord, 2)?;
    require_finite(coord, "coordinate")?;

    let first = coord[0];
    let last = coord[coord.len() - 1];
    let old_span = last - first;
    let new_span = end - start;
    if old_span == 0.0 || !old_span.is_finite() {
        return Err(TrajectoryError::degenerate(
            "first and last coordinates must differ",
        ));
    }

    let lower = (first - old_span, start - new_span);
    let upper = (last + old_span, end + new_span);
    let (xp, fp) = if old_span > 0.0 {
        ([lower.0, upper.0], [lower.1, upper.1])
    } else {
        ([upper.0, lower.0], [upper.1, lower.1])
    };

    Ok(coord.iter().map(|&v| interp(v, &xp, &fp)).collect())
}

/// Mirror a decreasing sequence about its first sample.
///
/// If the last sample is below the first, every value becomes
/// `-(v - coord[0]) + coord[0]`; otherwise (including flat sequences) the
/// input is returned unchanged. The result is always non-decreasing overall,
/// so applying this twice is the same as applying it once.
///
/// # Example
///
/// ```
/// use trajectory_metrics::canonicalize_direction;
///
/// assert_eq!(canonicalize_direction(&[10.0, 11.0, 12.0]), vec![10.0, 11.0, 12.0]);
/// assert_eq!(canonicalize_direction(&[10.0, 9.0, 8.0]), vec![10.0, 11.0, 12.0]);
/// ```
#[must_use]
pub fn canonicalize_direction(coord: &[f64]) -> Vec<f64> {
    match (coord.first(), coord.last()) {
        (Some(&first), Some(&last)) if last - first < 0.0 => {
            coord.iter().map(|&v| -(v - first) + first).collect()
        }
        _ => coord.to_vec(),
    }
}
