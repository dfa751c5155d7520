//! Configuration for trajectory normalization.
//!
//! This module provides the [`TrajectoryConfig`] struct which centralizes the
//! tunable parameters of the normalization pipeline, along with builder
//! methods for the common overrides.
//!
//! # Example
//!
//! ```
//! use trajectory_metrics::TrajectoryConfig;
//!
//! // Use default configuration (101 time steps, 10 ms / 3000 ms padding)
//! let config = TrajectoryConfig::default();
//!
//! // Longer trials, coarser sampling
//! let config = TrajectoryConfig::default()
//!     .with_interval_ms(20.0)
//!     .with_max_duration_ms(5000.0);
//! assert!(config.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrajectoryError};
use crate::onset::CrossingDirection;

/// Default number of time-normalized samples.
pub const DEFAULT_TIME_STEPS: usize = 101;

/// Default uniform-time sampling interval (ms).
pub const DEFAULT_INTERVAL_MS: f64 = 10.0;

/// Default uniform-time padded duration (ms).
pub const DEFAULT_MAX_DURATION_MS: f64 = 3000.0;

/// Default movement-onset threshold.
pub const DEFAULT_ONSET_THRESHOLD: f64 = 0.01;

/// Configuration for trajectory normalization and summary.
///
/// # Resampling
///
/// - `time_steps`: Sample count for time normalization.
/// - `interval_ms` / `max_duration_ms`: Grid and padded length for uniform time.
///
/// # Spatial
///
/// - `range_start` / `range_end`: Values the first and last coordinate map to.
/// - `canonicalize_direction`: Mirror leftward trials onto the rightward side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectoryConfig {
    /// Number of evenly spaced samples produced by time normalization.
    pub time_steps: usize,

    /// Sampling interval for uniform-time resampling (ms).
    pub interval_ms: f64,

    /// Total duration uniform-time output is padded to (ms).
    /// Output length is `floor(max_duration_ms / interval_ms)`.
    pub max_duration_ms: f64,

    /// Threshold the normalized y coordinate must cross for movement onset.
    pub onset_threshold: f64,

    /// Whether onset is the first sample above or below the threshold.
    pub onset_direction: CrossingDirection,

    /// Value the first coordinate maps to.
    pub range_start: f64,

    /// Value the last coordinate maps to.
    pub range_end: f64,

    /// Whether to flip decreasing x runs before range normalization.
    pub canonicalize_direction: bool,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            time_steps: DEFAULT_TIME_STEPS,
            interval_ms: DEFAULT_INTERVAL_MS,
            max_duration_ms: DEFAULT_MAX_DURATION_MS,
            onset_threshold: DEFAULT_ONSET_THRESHOLD,
            onset_direction: CrossingDirection::Ascending,
            range_start: 0.0,
            range_end: 1.0,
            canonicalize_direction: true,
        }
    }
}

impl TrajectoryConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.time_steps == 0 {
            return Err(TrajectoryError::invalid_config(
                "time_steps must be at least 1",
            ));
        }
        if !self.interval_ms.is_finite() || self.interval_ms <= 0.0 {
            return Err(TrajectoryError::invalid_config(
                "interval_ms must be positive and finite",
            ));
        }
        if !self.max_duration_ms.is_finite() || self.max_duration_ms < self.interval_ms {
            return Err(TrajectoryError::invalid_config(
                "max_duration_ms must be finite and at least interval_ms",
            ));
        }
        if !self.onset_threshold.is_finite() {
            return Err(TrajectoryError::invalid_config(
                "onset_threshold must be finite",
            ));
        }
        if !self.range_start.is_finite() || !self.range_end.is_finite() {
            return Err(TrajectoryError::invalid_config("range must be finite"));
        }
        if self.range_start == self.range_end {
            return Err(TrajectoryError::invalid_config(
                "range_start and range_end must differ",
            ));
        }
        Ok(())
    }

    /// Number of samples uniform-time resampling produces.
    #[must_use]
    pub fn uniform_length(&self) -> usize {
        (self.max_duration_ms / self.interval_ms).floor() as usize
    }

    /// Set the number of time-normalized samples.
    #[must_use]
    pub const fn with_time_steps(mut self, steps: usize) -> Self {
        self.time_steps = steps;
        self
    }

    /// Set the uniform-time sampling interval.
    #[must_use]
    pub const fn with_interval_ms(mut self, interval_ms: f64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Set the uniform-time padded duration.
    #[must_use]
    pub const fn with_max_duration_ms(mut self, max_duration_ms: f64) -> Self {
        self.max_duration_ms = max_duration_ms;
        self
    }

    /// Set the onset threshold and direction.
    #[must_use]
    pub const fn with_onset_threshold(mut self, threshold: f64, direction: CrossingDirection) -> Self {
        self.onset_threshold = threshold;
        self.onset_direction = direction;
        self
    }

    /// Set the target range for spatial normalization.
    #[must_use]
    pub const fn with_range(mut self, start: f64, end: f64) -> Self {
        self.range_start = start;
        self.range_end = end;
        self
    }

    /// Enable/disable mirroring of leftward trials.
    #[must_use]
    pub const fn with_canonicalize_direction(mut self, enabled: bool) -> Self {
        self.canonicalize_direction = enabled;
        self
    }
}
