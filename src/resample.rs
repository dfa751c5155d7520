//! Resampling of irregularly time-stamped paths.
//!
//! Two resamplers are provided:
//!
//! - [`time_normalize`]: a fixed count of evenly spaced steps spanning the
//!   trial, so trials of any duration line up index by index.
//! - [`uniform_time`]: a fixed wall-clock interval, padded with the final
//!   position up to a common duration so trials keep their real timing.

use crate::error::{Result, TrajectoryError};
use crate::math::interp::{half_open_grid, interp_all};
use crate::path::NormalizedPath;
use crate::validation::{
    require_finite, require_min_len, require_non_decreasing, require_same_len,
    require_strictly_increasing,
};

/// Relative slack when counting interval steps, so a duration that is a
/// whole number of intervals in decimal stays whole after rounding.
const STEP_TOLERANCE: f64 = 1e-9;

/// Number of whole `interval` steps in `span`, tolerant of float rounding.
fn whole_steps(span: f64, interval: f64) -> usize {
    let ratio = span / interval;
    (ratio + STEP_TOLERANCE * ratio.abs().max(1.0)).floor() as usize
}

/// Resample a path to `steps` evenly spaced time steps.
///
/// Timestamps are generated over the half-open interval `[t[0], t[last])`
/// with spacing `(t[last] - t[0]) / steps`, so the final recorded timestamp
/// is never itself a sample. `x` and `y` are linearly interpolated at each
/// generated timestamp.
///
/// # Arguments
///
/// * `x`, `y` - Coordinates, same length as `t`
/// * `t` - Non-decreasing timestamps
/// * `steps` - Output length (101 by convention)
///
/// # Errors
///
/// Returns an error if:
/// - Lengths differ or fewer than 2 samples are given
/// - Timestamps decrease, or any timestamp or coordinate is not finite
/// - The time span is zero
/// - `steps` is zero
///
/// # Example
///
/// ```
/// use trajectory_metrics::time_normalize;
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [0.0, 0.0, 0.0, 0.0];
/// let t = [0.0, 10.0, 20.0, 30.0];
///
/// let normalized = time_normalize(&x, &y, &t, 4)?;
/// assert_eq!(normalized.len(), 4);
/// assert_eq!(normalized.t[0], 0.0);
/// assert!(normalized.t[3] < 30.0);
/// # Ok::<(), trajectory_metrics::TrajectoryError>(())
/// ```
pub fn time_normalize(x: &[f64], y: &[f64], t: &[f64], steps: usize) -> Result<NormalizedPath> {
    require_same_len(t, x)?;
    require_same_len(t, y)?;
    require_min_len(t, 2)?;
    require_non_decreasing(t)?;
    require_finite(x, "x coordinate")?;
    require_finite(y, "y coordinate")?;
    if steps == 0 {
        return Err(TrajectoryError::invalid_config("steps must be at least 1"));
    }

    let (start, end) = (t[0], t[t.len() - 1]);
    if end <= start {
        return Err(TrajectoryError::degenerate("zero time span"));
    }

    let nt = half_open_grid(start, end, steps);
    let nx = interp_all(&nt, t, x);
    let ny = interp_all(&nt, t, y);

    Ok(NormalizedPath { x: nx, y: ny, t: nt })
}

/// Resample one coordinate to a fixed interval and pad to a fixed duration.
///
/// The coordinate is interpolated at `0, interval, 2·interval, …` up to and
/// including the last recorded timestamp, then the final interpolated value
/// is repeated until the output holds exactly
/// `floor(max_duration / interval)` samples. The padding models the cursor
/// resting on the response after the trial ends.
///
/// Timestamps are expected to start near 0 (milliseconds since trial start);
/// grid points before `t[0]` take `coord[0]`. Step counts allow for float
/// rounding, so `t[last] = 0.7` with `interval = 0.1` samples 0.7 itself.
///
/// # Errors
///
/// Returns an error if:
/// - Lengths differ or no samples are given
/// - Timestamps are not strictly increasing, or any timestamp or coordinate
///   is not finite
/// - `interval` is not positive or `max_duration < interval`
/// - The recorded grid needs more than `floor(max_duration / interval)`
///   samples ([`TrajectoryError::OutOfRange`]); long trials are rejected,
///   never truncated
///
/// # Example
///
/// ```
/// use trajectory_metrics::uniform_time;
///
/// let coord = [0.0, 0.5, 1.0];
/// let t = [0.0, 10.0, 20.0];
///
/// let padded = uniform_time(&coord, &t, 10.0, 60.0)?;
/// assert_eq!(padded, vec![0.0, 0.5, 1.0, 1.0, 1.0, 1.0]);
/// # Ok::<(), trajectory_metrics::TrajectoryError>(())
/// ```
pub fn uniform_time(coord: &[f64], t: &[f64], interval: f64, max_duration: f64) -> Result<Vec<f64>> {
    require_same_len(t, coord)?;
    require_min_len(t, 1)?;
    require_strictly_increasing(t)?;
    require_finite(coord, "coordinate")?;
    if !interval.is_finite() || interval <= 0.0 {
        return Err(TrajectoryError::invalid_config(
            "interval must be positive and finite",
        ));
    }
    if !max_duration.is_finite() || max_duration < interval {
        return Err(TrajectoryError::invalid_config(
            "max_duration must be finite and at least interval",
        ));
    }

    let last_t = t[t.len() - 1];
    let required = whole_steps(max_duration, interval);
    let recorded = whole_steps(last_t.max(0.0), interval) + 1;
    if recorded > required {
        return Err(TrajectoryError::out_of_range(last_t, max_duration));
    }

    let grid: Vec<f64> = (0..recorded).map(|k| k as f64 * interval).collect();
    let mut regular = interp_all(&grid, t, coord);

    let hold = regular[regular.len() - 1];
    regular.resize(required, hold);
    Ok(regular)
}
