//! Parsing of stringified coordinate lists.
//!
//! Exported datasets often store each trial's samples as a list literal in
//! a single cell, e.g. `"[12,15,19]"`.

use crate::error::{Result, TrajectoryError};

/// Parse a list literal such as `"[1,2,3]"` into numbers.
///
/// Leading and trailing whitespace and square brackets are stripped, the
/// remainder is split on commas, and each item is trimmed and parsed as a
/// float. Integer items parse too.
///
/// # Errors
///
/// Returns [`TrajectoryError::Parse`] if any item is not a number,
/// including the empty list `"[]"`. Never panics.
///
/// # Example
///
/// ```
/// use trajectory_metrics::parse_list;
///
/// assert_eq!(parse_list("[1,2,3]")?, vec![1.0, 2.0, 3.0]);
/// assert_eq!(parse_list(" [0.5, -2] ")?, vec![0.5, -2.0]);
/// assert!(parse_list("[1,two,3]").is_err());
/// # Ok::<(), trajectory_metrics::TrajectoryError>(())
/// ```
pub fn parse_list(input: &str) -> Result<Vec<f64>> {
    let inner = input
        .trim()
        .trim_matches(|c: char| c == '[' || c == ']');

    inner
        .split(',')
        .map(|item| {
            item.trim()
                .parse::<f64>()
                .map_err(|_| TrajectoryError::parse(input))
        })
        .collect()
}
