//! Input checks shared by the resampling and deviation operations.
//!
//! Each check returns the first problem found so callers can propagate it
//! with `?`.

use crate::error::{Result, TrajectoryError};

/// Require at least `min` samples.
pub(crate) fn require_min_len(values: &[f64], min: usize) -> Result<()> {
    if values.len() < min {
        return Err(TrajectoryError::trajectory_too_short(min, values.len()));
    }
    Ok(())
}

/// Require `other` to have the same length as `reference`.
pub(crate) fn require_same_len(reference: &[f64], other: &[f64]) -> Result<()> {
    if reference.len() != other.len() {
        return Err(TrajectoryError::length_mismatch(reference.len(), other.len()));
    }
    Ok(())
}

/// Require finite, non-decreasing timestamps.
pub(crate) fn require_non_decreasing(timestamps: &[f64]) -> Result<()> {
    require_finite(timestamps, "timestamp")?;
    for i in 1..timestamps.len() {
        if timestamps[i] < timestamps[i - 1] {
            return Err(TrajectoryError::NonMonotonicTimestamps { index: i });
        }
    }
    Ok(())
}

/// Require finite, strictly increasing timestamps.
pub(crate) fn require_strictly_increasing(timestamps: &[f64]) -> Result<()> {
    require_finite(timestamps, "timestamp")?;
    for i in 1..timestamps.len() {
        if timestamps[i] <= timestamps[i - 1] {
            return Err(TrajectoryError::NonMonotonicTimestamps { index: i });
        }
    }
    Ok(())
}

/// Require every value to be finite; `what` names the values in the error.
pub(crate) fn require_finite(values: &[f64], what: &str) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(TrajectoryError::non_finite(format!(
            "{what} at index {i}"
        ))),
        None => Ok(()),
    }
}
