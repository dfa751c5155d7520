//! Trajectory data structures.
//!
//! A [`Path`] is one trial's recorded `(x, y, t)` samples. A
//! [`NormalizedPath`] is the fixed-length result of resampling a path.
//! Both are immutable once built: every transform returns a new value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resample::time_normalize;
use crate::validation::{require_non_decreasing, require_same_len};

/// A single trial's recorded trajectory.
///
/// Invariants: `x`, `y` and `t` have equal length and `t` is finite and
/// non-decreasing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    x: Vec<f64>,
    y: Vec<f64>,
    t: Vec<f64>,
}

impl Path {
    /// Build a path from owned coordinate and timestamp vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ or the timestamps go backwards
    /// or are not finite.
    pub fn new(x: Vec<f64>, y: Vec<f64>, t: Vec<f64>) -> Result<Self> {
        require_same_len(&x, &y)?;
        require_same_len(&x, &t)?;
        require_non_decreasing(&t)?;
        Ok(Self { x, y, t })
    }

    /// Build a path from any columns whose values convert into `f64`.
    ///
    /// # Example
    ///
    /// ```
    /// use trajectory_metrics::Path;
    ///
    /// let x: Vec<i32> = vec![0, 3, 10];
    /// let y: [f32; 3] = [0.0, 5.5, 20.0];
    /// let t = vec![0u16, 10, 20];
    /// let path = Path::from_columns(x, y, t)?;
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.x()[1], 3.0);
    /// # Ok::<(), trajectory_metrics::TrajectoryError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`Path::new`].
    pub fn from_columns<X, Y, T>(x: X, y: Y, t: T) -> Result<Self>
    where
        X: IntoIterator,
        X::Item: Into<f64>,
        Y: IntoIterator,
        Y::Item: Into<f64>,
        T: IntoIterator,
        T::Item: Into<f64>,
    {
        Self::new(
            x.into_iter().map(Into::into).collect(),
            y.into_iter().map(Into::into).collect(),
            t.into_iter().map(Into::into).collect(),
        )
    }

    /// X coordinates.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y coordinates.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Timestamps.
    #[must_use]
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Whether the path has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Time between first and last sample (0 for paths shorter than 2).
    #[must_use]
    pub fn duration(&self) -> f64 {
        match (self.t.first(), self.t.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Resample to `steps` evenly spaced time steps.
    ///
    /// # Errors
    ///
    /// See [`time_normalize`].
    pub fn time_normalize(&self, steps: usize) -> Result<NormalizedPath> {
        time_normalize(&self.x, &self.y, &self.t, steps)
    }
}

/// A path resampled onto a fixed-length time grid.
///
/// All three sequences have the requested length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalizedPath {
    /// Resampled x coordinates.
    pub x: Vec<f64>,
    /// Resampled y coordinates.
    pub y: Vec<f64>,
    /// Generated timestamps.
    pub t: Vec<f64>,
}

impl NormalizedPath {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Whether the path has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}
