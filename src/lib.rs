//! Trajectory Metrics Library
//!
//! Normalization and geometric deviation metrics for 2D response
//! trajectories, such as mouse-cursor paths recorded during a two-choice
//! task.
//!
//! Raw paths are irregularly sampled and differ in duration, screen
//! position and direction. This library brings them onto a common basis and
//! summarizes how far each one bows away from the straight "ideal" response.
//!
//! # Pipeline
//!
//! 1. **Resample**: [`time_normalize`] to a fixed number of steps, or
//!    [`uniform_time`] to a fixed interval padded to a fixed duration
//! 2. **Canonicalize**: [`canonicalize_direction`] mirrors leftward trials,
//!    [`normalize_range`] anchors start and end at fixed values
//! 3. **Measure**: [`max_deviation`], [`auc`], [`auc2`], [`velocity`],
//!    [`relative_distance`], and onset via [`first_crossing_time`]
//!
//! [`summarize_trials`] runs the whole pipeline over a set of trials,
//! excluding (not aborting on) trials that fail.
//!
//! # Quick Start
//!
//! ```
//! use trajectory_metrics::{
//!     canonicalize_direction, max_deviation, normalize_range, time_normalize,
//! };
//!
//! // A leftward response that bows towards the right-hand option
//! let x = [0.0, 12.0, 5.0, -80.0, -190.0, -200.0];
//! let y = [0.0, 40.0, 110.0, 220.0, 290.0, 300.0];
//! let t = [0.0, 120.0, 250.0, 390.0, 560.0, 700.0];
//!
//! let resampled = time_normalize(&x, &y, &t, 101)?;
//! let nx = normalize_range(&canonicalize_direction(&resampled.x), 0.0, 1.0)?;
//! let ny = normalize_range(&resampled.y, 0.0, 1.0)?;
//!
//! let md = max_deviation(&nx, &ny)?;
//! assert!(md > 0.0);
//! # Ok::<(), trajectory_metrics::TrajectoryError>(())
//! ```
//!
//! # Conventions
//!
//! Deviation metrics assume normalized coordinates: the path starts at the
//! origin and the ideal line runs to its own endpoint, canonically `(1, 1)`
//! or `(1, 1.5)`. Every function is pure and works on one path at a time,
//! so batches can be split across threads freely.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod batch;
pub mod config;
pub mod deviation;
pub mod error;
pub mod math;
pub mod onset;
pub mod parse;
pub mod path;
pub mod resample;
pub mod spatial;
mod validation;

// Re-exports for convenient access
pub use batch::{
    average_path, summarize_trial, summarize_trials, BatchSummary, MeanPath, Trial, TrialSummary,
};
pub use config::TrajectoryConfig;
pub use deviation::{
    auc, auc2, max_deviation, relative_distance, relative_distance_full, velocity,
    RelativeDistance,
};
pub use error::{Result, TrajectoryError};
pub use onset::{find_crossing, first_crossing_index, first_crossing_time, CrossingDirection};
pub use parse::parse_list;
pub use path::{NormalizedPath, Path};
pub use resample::{time_normalize, uniform_time};
pub use spatial::{canonicalize_direction, normalize_range};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Conventional number of time-normalized steps.
pub const DEFAULT_TIME_STEPS: usize = config::DEFAULT_TIME_STEPS;
