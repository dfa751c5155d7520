//! One-dimensional linear interpolation.
//!
//! [`interp`] follows the usual "clamp outside the table" convention: query
//! points left of the first knot take the first value and points right of
//! the last knot take the last value. Knot positions must be non-decreasing.

/// Linearly interpolate `fp` (sampled at `xp`) at `x`.
///
/// `xp` must be non-empty, non-decreasing and the same length as `fp`.
/// Repeated knots resolve to the right-most duplicate. A NaN query yields
/// NaN.
///
/// # Example
///
/// ```
/// use trajectory_metrics::math::interp;
///
/// let xp = [0.0, 10.0, 20.0];
/// let fp = [0.0, 1.0, 4.0];
/// assert_eq!(interp(5.0, &xp, &fp), 0.5);
/// assert_eq!(interp(15.0, &xp, &fp), 2.5);
/// assert_eq!(interp(-3.0, &xp, &fp), 0.0);
/// assert_eq!(interp(99.0, &xp, &fp), 4.0);
/// ```
#[must_use]
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert!(!xp.is_empty());
    debug_assert_eq!(xp.len(), fp.len());

    if x.is_nan() {
        return f64::NAN;
    }

    let last = xp.len() - 1;
    if x < xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }

    // xp[j] <= x < xp[j + 1]
    let j = xp.partition_point(|&v| v <= x) - 1;
    let slope = (fp[j + 1] - fp[j]) / (xp[j + 1] - xp[j]);
    fp[j] + slope * (x - xp[j])
}

/// Interpolate every query point in `xs`.
#[must_use]
pub fn interp_all(xs: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| interp(x, xp, fp)).collect()
}

/// `count` evenly spaced values over the half-open interval `[start, end)`.
///
/// Value `i` is `start + i * (end - start) / count`, so `end` itself is never
/// produced.
#[must_use]
pub fn half_open_grid(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = (end - start) / count as f64;
    (0..count).map(|i| start + i as f64 * step).collect()
}
