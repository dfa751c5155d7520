//! Threshold-crossing detection for movement onset.
//!
//! [`first_crossing_index`] returns 0 both when the first sample already
//! crosses and when no sample ever does. Callers that need to tell those
//! apart should use [`find_crossing`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrajectoryError};
use crate::validation::require_same_len;

/// Which side of the threshold counts as crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CrossingDirection {
    /// First sample strictly above the threshold.
    #[default]
    Ascending,
    /// First sample strictly below the threshold.
    Descending,
}

impl CrossingDirection {
    /// Whether `value` lies beyond `threshold` in this direction.
    #[inline]
    #[must_use]
    pub fn crosses(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Ascending => value > threshold,
            Self::Descending => value < threshold,
        }
    }
}

/// Index of the first sample beyond `threshold`, or 0 if there is none.
///
/// The 0 fallback is ambiguous with a crossing at the very first sample.
///
/// # Example
///
/// ```
/// use trajectory_metrics::{first_crossing_index, CrossingDirection};
///
/// let y = [0.0, 0.0, 0.02, 0.5];
/// assert_eq!(first_crossing_index(&y, 0.01, CrossingDirection::Ascending), 2);
/// assert_eq!(first_crossing_index(&y, 0.9, CrossingDirection::Ascending), 0);
/// ```
#[must_use]
pub fn first_crossing_index(y: &[f64], threshold: f64, direction: CrossingDirection) -> usize {
    find_crossing(y, threshold, direction).unwrap_or(0)
}

/// Index of the first sample beyond `threshold`, if any.
#[must_use]
pub fn find_crossing(y: &[f64], threshold: f64, direction: CrossingDirection) -> Option<usize> {
    y.iter().position(|&v| direction.crosses(v, threshold))
}

/// Timestamp of the first sample beyond `threshold`.
///
/// Returns `t[first_crossing_index(y, ..)]`, so a path that never crosses
/// reports its first timestamp.
///
/// # Errors
///
/// Returns an error if `t` and `y` differ in length or are empty.
pub fn first_crossing_time(
    t: &[f64],
    y: &[f64],
    threshold: f64,
    direction: CrossingDirection,
) -> Result<f64> {
    require_same_len(t, y)?;
    let index = first_crossing_index(y, threshold, direction);
    t.get(index)
        .copied()
        .ok_or_else(|| TrajectoryError::trajectory_too_short(1, 0))
}
