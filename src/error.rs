//! Error types for trajectory normalization and deviation metrics.
//!
//! Every fallible operation in the crate returns [`Result`]. Failures are
//! raised rather than coerced into NaN; the only NaN the crate produces is
//! the one the arithmetic itself yields (see
//! [`relative_distance`](crate::deviation::relative_distance)).

use thiserror::Error;

/// Main error type for trajectory operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    /// Input cannot support the computation (zero span, zero denominator).
    #[error("Degenerate input: {context}")]
    DegenerateInput { context: String },

    /// Recorded duration does not fit in the padded uniform-time grid.
    ///
    /// Raised when sampling `0..=duration` needs more grid points than
    /// `max_duration` holds, which can happen slightly below `max_duration`
    /// when it is not a whole number of intervals.
    #[error("Trial duration {duration} needs more uniform-time samples than maximum duration {max_duration} allows")]
    OutOfRange { duration: f64, max_duration: f64 },

    /// Path has too few samples.
    #[error("Trajectory too short: need at least {min} points, got {actual}")]
    TrajectoryTooShort { min: usize, actual: usize },

    /// Parallel sequences have different lengths.
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Timestamps go backwards at the given index.
    #[error("Timestamps must be monotonically increasing at index {index}")]
    NonMonotonicTimestamps { index: usize },

    /// NaN or Inf where a finite value is required.
    #[error("Non-finite value: {context}")]
    NonFinite { context: String },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Textual list could not be parsed.
    #[error("Could not parse list from {input:?}")]
    Parse { input: String },
}

/// Result type alias for trajectory operations.
pub type Result<T> = std::result::Result<T, TrajectoryError>;

impl TrajectoryError {
    /// Create a degenerate input error.
    #[must_use]
    pub fn degenerate(context: impl Into<String>) -> Self {
        Self::DegenerateInput {
            context: context.into(),
        }
    }

    /// Create an out-of-range duration error.
    #[must_use]
    pub const fn out_of_range(duration: f64, max_duration: f64) -> Self {
        Self::OutOfRange {
            duration,
            max_duration,
        }
    }

    /// Create a trajectory too short error.
    #[must_use]
    pub const fn trajectory_too_short(min: usize, actual: usize) -> Self {
        Self::TrajectoryTooShort { min, actual }
    }

    /// Create a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create a non-finite value error.
    #[must_use]
    pub fn non_finite(context: impl Into<String>) -> Self {
        Self::NonFinite {
            context: context.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(input: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
        }
    }

    /// Whether this error means the input cannot support the computation.
    ///
    /// Too-short paths count as degenerate alongside zero spans and zero
    /// denominators.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::DegenerateInput { .. } | Self::TrajectoryTooShort { .. }
        )
    }
}
