//! Per-trial summaries over a set of recorded trials.
//!
//! A dataset is a slice of [`Trial`]s, each an independent [`Path`] with an
//! optional condition label. Every trial goes through the same pipeline:
//!
//! 1. Time-normalize to `config.time_steps` samples
//! 2. Mirror leftward x runs (if `config.canonicalize_direction`)
//! 3. Range-normalize x and y onto `[range_start, range_end]`
//! 4. Compute max deviation, both AUC variants, onset time, peak velocity
//!
//! A trial that fails any step is reported and left out; it never aborts
//! the rest of the batch.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::TrajectoryConfig;
use crate::deviation::{auc, auc2, max_deviation, velocity};
use crate::error::{Result, TrajectoryError};
use crate::onset::{find_crossing, first_crossing_time};
use crate::path::{NormalizedPath, Path};
use crate::spatial::{canonicalize_direction, normalize_range};
use crate::validation::require_same_len;

/// One recorded trial.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trial {
    /// Recorded trajectory.
    pub path: Path,
    /// Experimental condition, carried through to the summary.
    pub condition: Option<String>,
}

impl Trial {
    /// Create an unlabelled trial.
    #[must_use]
    pub fn new(path: Path) -> Self {
        Self {
            path,
            condition: None,
        }
    }

    /// Attach a condition label.
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Normalized path and scalar metrics for one trial.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrialSummary {
    /// Condition label of the source trial.
    pub condition: Option<String>,
    /// Time- and range-normalized path.
    pub path: NormalizedPath,
    /// Signed maximum deviation from the ideal line.
    pub max_deviation: f64,
    /// Area between path and endpoint chord.
    pub auc: f64,
    /// Area against the start axis minus the chord triangle.
    pub auc2: f64,
    /// Timestamp of the first normalized y sample past the onset threshold.
    /// Equals the first timestamp when the path never crosses.
    pub onset_time: f64,
    /// Whether the onset threshold was actually crossed.
    pub onset_detected: bool,
    /// Largest per-step distance on the normalized path.
    pub peak_velocity: f64,
}

/// Outcome of summarizing a batch of trials.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Summaries of trials that processed cleanly, in input order.
    pub summaries: Vec<TrialSummary>,
    /// Index into the input slice and error for each excluded trial.
    pub failures: Vec<(usize, TrajectoryError)>,
}

impl BatchSummary {
    /// Number of trials processed, successful or not.
    #[must_use]
    pub fn total(&self) -> usize {
        self.summaries.len() + self.failures.len()
    }

    /// Summaries whose condition label equals `condition`.
    pub fn for_condition<'a>(&'a self, condition: &'a str) -> impl Iterator<Item = &'a TrialSummary> {
        self.summaries
            .iter()
            .filter(move |s| s.condition.as_deref() == Some(condition))
    }
}

/// Per-timepoint mean of several normalized paths.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeanPath {
    /// Mean x at each time step.
    pub x: Vec<f64>,
    /// Mean y at each time step.
    pub y: Vec<f64>,
}

/// Run the normalization pipeline and metrics on one trial.
///
/// # Errors
///
/// Returns the first error raised by configuration validation, resampling,
/// spatial normalization or the deviation metrics.
pub fn summarize_trial(trial: &Trial, config: &TrajectoryConfig) -> Result<TrialSummary> {
    config.validate()?;

    let resampled = trial.path.time_normalize(config.time_steps)?;

    let x = if config.canonicalize_direction {
        canonicalize_direction(&resampled.x)
    } else {
        resampled.x
    };
    let x = normalize_range(&x, config.range_start, config.range_end)?;
    let y = normalize_range(&resampled.y, config.range_start, config.range_end)?;
    let t = resampled.t;

    let max_dev = max_deviation(&x, &y)?;
    let area = auc(&x, &y)?;
    let area2 = auc2(&x, &y)?;
    let onset_time = first_crossing_time(&t, &y, config.onset_threshold, config.onset_direction)?;
    let onset_detected = find_crossing(&y, config.onset_threshold, config.onset_direction).is_some();
    let peak_velocity = velocity(&x, &y)?
        .into_iter()
        .fold(0.0, f64::max);

    Ok(TrialSummary {
        condition: trial.condition.clone(),
        path: NormalizedPath { x, y, t },
        max_deviation: max_dev,
        auc: area,
        auc2: area2,
        onset_time,
        onset_detected,
        peak_velocity,
    })
}

/// Summarize every trial independently.
///
/// Failing trials are logged at `warn` level and collected in
/// [`BatchSummary::failures`].
///
/// # Example
///
/// ```
/// use trajectory_metrics::{summarize_trials, Path, Trial, TrajectoryConfig};
///
/// let good = Path::new(vec![0.0, 10.0, 40.0], vec![0.0, 50.0, 100.0], vec![0.0, 300.0, 600.0])?;
/// let still = Path::new(vec![0.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0])?;
///
/// let trials = vec![
///     Trial::new(good).with_condition("control"),
///     Trial::new(still).with_condition("lure"),
/// ];
/// let batch = summarize_trials(&trials, &TrajectoryConfig::default());
/// assert_eq!(batch.summaries.len(), 1);
/// assert_eq!(batch.failures[0].0, 1);
/// # Ok::<(), trajectory_metrics::TrajectoryError>(())
/// ```
#[must_use]
pub fn summarize_trials(trials: &[Trial], config: &TrajectoryConfig) -> BatchSummary {
    let mut batch = BatchSummary::default();
    for (index, trial) in trials.iter().enumerate() {
        match summarize_trial(trial, config) {
            Ok(summary) => {
                debug!(
                    index,
                    condition = ?trial.condition,
                    max_deviation = summary.max_deviation,
                    auc = summary.auc,
                    "trial summarized"
                );
                batch.summaries.push(summary);
            }
            Err(err) => {
                warn!(index, condition = ?trial.condition, error = %err, "excluding trial");
                batch.failures.push((index, err));
            }
        }
    }
    debug!(
        succeeded = batch.summaries.len(),
        failed = batch.failures.len(),
        "batch summarized"
    );
    batch
}

/// Average several normalized paths index by index.
///
/// # Errors
///
/// Returns an error if `paths` is empty or the paths differ in length.
pub fn average_path(paths: &[NormalizedPath]) -> Result<MeanPath> {
    let first = paths
        .first()
        .ok_or_else(|| TrajectoryError::trajectory_too_short(1, 0))?;
    let len = first.x.len();

    let mut x = vec![0.0; len];
    let mut y = vec![0.0; len];
    for path in paths {
        require_same_len(&first.x, &path.x)?;
        require_same_len(&first.x, &path.y)?;
        for i in 0..len {
            x[i] += path.x[i];
            y[i] += path.y[i];
        }
    }

    let n = paths.len() as f64;
    for v in x.iter_mut().chain(y.iter_mut()) {
        *v /= n;
    }
    Ok(MeanPath { x, y })
}
