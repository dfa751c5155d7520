//! Planar geometry helpers for the deviation metrics.
//!
//! Rotation uses nalgebra's [`Rotation2`]; the remaining helpers are plain
//! slice arithmetic.

use nalgebra::{Point2, Rotation2};

/// Rotate `(x, y)` counter-clockwise about the origin by `radians`.
///
/// Uses the standard rotation `(cos·x − sin·y, sin·x + cos·y)`.
#[inline]
#[must_use]
pub fn rotate(x: f64, y: f64, radians: f64) -> (f64, f64) {
    let rotated = Rotation2::new(radians) * Point2::new(x, y);
    (rotated.x, rotated.y)
}

/// Rotate every point of a path, returning the rotated x and y sequences.
#[must_use]
pub fn rotate_path(x: &[f64], y: &[f64], radians: f64) -> (Vec<f64>, Vec<f64>) {
    let rotation = Rotation2::new(radians);
    x.iter()
        .zip(y.iter())
        .map(|(&px, &py)| {
            let p = rotation * Point2::new(px, py);
            (p.x, p.y)
        })
        .unzip()
}

/// Cyclic cross-product sum over a closed polygon.
///
/// Each vertex `i` is paired with its predecessor `j` (vertex 0 with the
/// last vertex) and contributes `x[i]·y[j] − y[i]·x[j]`. The result is
/// twice the signed area, positive for clockwise vertex order.
#[must_use]
pub fn shoelace_sum(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let mut j = n - 1;
    let mut total = 0.0;
    for i in 0..n {
        total += x[i] * y[j] - y[i] * x[j];
        j = i;
    }
    total
}

/// Euclidean length of the vector `(dx, dy)`.
#[inline]
#[must_use]
pub fn hypot(dx: f64, dy: f64) -> f64 {
    dx.hypot(dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_rotate_quarter_turn() {
        let (x, y) = rotate(1.0, 0.0, FRAC_PI_2);
        assert_relative_eq!(x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_matches_formula() {
        let (px, py, rad) = (0.3, -1.7, 0.8_f64);
        let (x, y) = rotate(px, py, rad);
        assert_relative_eq!(x, rad.cos() * px - rad.sin() * py, epsilon = 1e-12);
        assert_relative_eq!(y, rad.sin() * px + rad.cos() * py, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_path_diagonal_onto_axis() {
        // The diagonal ends up on the y axis after a 45° turn.
        let (rx, ry) = rotate_path(&[0.0, 0.5, 1.0], &[0.0, 0.5, 1.0], FRAC_PI_4);
        for v in &rx {
            assert_relative_eq!(*v, 0.0, epsilon = 1e-12);
        }
        assert_relative_eq!(ry[2], 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_shoelace_unit_square() {
        // Clockwise square
        let x = [0.0, 0.0, 1.0, 1.0];
        let y = [0.0, 1.0, 1.0, 0.0];
        assert_relative_eq!(shoelace_sum(&x, &y), 2.0);

        // Counter-clockwise flips the sign
        let x = [0.0, 1.0, 1.0, 0.0];
        let y = [0.0, 0.0, 1.0, 1.0];
        assert_relative_eq!(shoelace_sum(&x, &y), -2.0);
    }

    #[test]
    fn test_shoelace_collinear_is_zero() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        assert_relative_eq!(shoelace_sum(&x, &y), 0.0);
        assert_relative_eq!(shoelace_sum(&[], &[]), 0.0);
    }

    #[test]
    fn test_hypot() {
        assert_relative_eq!(hypot(3.0, 4.0), 5.0);
    }
}
