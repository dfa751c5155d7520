//! End-to-end tests for resampling and spatial normalization.
//!
//! These exercise the public API on synthetic cursor paths with irregular
//! sampling, mirrored directions and trials of different durations.

use approx::assert_relative_eq;
use trajectory_metrics::{
    canonicalize_direction, first_crossing_index, first_crossing_time, max_deviation,
    normalize_range, parse_list, time_normalize, uniform_time, CrossingDirection, Path,
    TrajectoryError,
};

// =============================================================================
// TRAJECTORY GENERATORS
// =============================================================================

/// Irregularly sampled reach from the origin towards `(end_x, end_y)`.
///
/// Sampling jitters between 13 and 19 ms like a real pointer event stream.
fn generate_reach(n: usize, end_x: f64, end_y: f64, bow: f64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut t = Vec::with_capacity(n);
    let mut now = 0.0;
    for i in 0..n {
        let s = i as f64 / (n - 1) as f64;
        // Smoothstep progress, slow start and finish
        let p = s * s * (3.0 - 2.0 * s);
        x.push(end_x * p - bow * (std::f64::consts::PI * p).sin());
        y.push(end_y * p);
        t.push(now);
        now += 13.0 + (i * 5 % 7) as f64;
    }
    (x, y, t)
}

// =============================================================================
// TIME NORMALIZATION
// =============================================================================

#[test]
fn test_time_normalize_fixed_length_for_any_duration() {
    for (n, steps) in [(12, 101), (57, 101), (230, 101), (40, 20), (5, 3)] {
        let (x, y, t) = generate_reach(n, 300.0, 450.0, 40.0);
        let out = time_normalize(&x, &y, &t, steps).unwrap();
        assert_eq!(out.x.len(), steps);
        assert_eq!(out.y.len(), steps);
        assert_eq!(out.t.len(), steps);

        // First sample is the recorded start
        assert_relative_eq!(out.t[0], t[0]);
        assert_relative_eq!(out.x[0], x[0], epsilon = 1e-12);
        assert_relative_eq!(out.y[0], y[0], epsilon = 1e-12);

        // Grid is evenly spaced and stops short of the last timestamp
        let step = (t[t.len() - 1] - t[0]) / steps as f64;
        for w in out.t.windows(2) {
            assert_relative_eq!(w[1] - w[0], step, epsilon = 1e-9);
        }
        assert!(out.t[steps - 1] < t[t.len() - 1]);
    }
}

#[test]
fn test_time_normalize_four_steps() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 0.0, 0.0, 0.0];
    let t = [0.0, 10.0, 20.0, 30.0];

    let out = time_normalize(&x, &y, &t, 4).unwrap();
    let expected_t = [0.0, 7.5, 15.0, 22.5];
    for i in 0..4 {
        assert_relative_eq!(out.t[i], expected_t[i], epsilon = 1e-12);
        assert_relative_eq!(out.x[i], expected_t[i] / 10.0, epsilon = 1e-12);
        assert_relative_eq!(out.y[i], 0.0);
    }
}

#[test]
fn test_time_normalize_with_held_timestamps() {
    // Duplicate timestamps appear when the recorder drops a frame.
    let x = [0.0, 0.2, 0.4, 0.6];
    let y = [0.0, 0.1, 0.5, 1.0];
    let t = [0.0, 20.0, 20.0, 40.0];
    let out = time_normalize(&x, &y, &t, 8).unwrap();
    assert_eq!(out.len(), 8);
    assert!(out.x.iter().all(|v| v.is_finite()));
}

#[test]
fn test_path_from_integer_columns() {
    // Pixel coordinates and millisecond timestamps straight from a log
    let path = Path::from_columns(
        vec![512i32, 515, 530, 601, 700],
        vec![760i32, 700, 610, 420, 300],
        vec![0u32, 17, 33, 50, 67],
    )
    .unwrap();
    let out = path.time_normalize(101).unwrap();
    assert_eq!(out.len(), 101);
    assert_relative_eq!(out.x[0], 512.0);
}

#[test]
fn test_time_normalize_zero_span_is_degenerate() {
    let err = time_normalize(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0], 101)
        .unwrap_err();
    assert!(err.is_degenerate());
}

// =============================================================================
// UNIFORM TIME
// =============================================================================

#[test]
fn test_uniform_time_length_is_fixed() {
    for n in [5, 30, 90, 150] {
        let (x, _, t) = generate_reach(n, 1.0, 1.0, 0.0);
        assert!(t[t.len() - 1] < 2990.0);

        let out = uniform_time(&x, &t, 10.0, 3000.0).unwrap();
        assert_eq!(out.len(), 300);

        // Everything after the recorded grid repeats the final value
        let recorded = (t[t.len() - 1] / 10.0).floor() as usize + 1;
        let hold = out[recorded - 1];
        assert!(out[recorded..].iter().all(|&v| v == hold));
    }
}

#[test]
fn test_uniform_time_other_interval() {
    let (x, _, t) = generate_reach(40, 1.0, 1.0, 0.0);
    let out = uniform_time(&x, &t, 25.0, 2000.0).unwrap();
    assert_eq!(out.len(), 80);
    assert_relative_eq!(out[0], x[0]);
}

#[test]
fn test_uniform_time_rejects_long_trial() {
    let (x, _, t) = generate_reach(250, 1.0, 1.0, 0.0);
    assert!(t[t.len() - 1] > 3000.0);
    match uniform_time(&x, &t, 10.0, 3000.0) {
        Err(TrajectoryError::OutOfRange {
            duration,
            max_duration,
        }) => {
            assert_eq!(duration, t[t.len() - 1]);
            assert_eq!(max_duration, 3000.0);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn test_uniform_time_in_seconds() {
    // Same reach recorded in seconds instead of milliseconds
    let (x, _, t_ms) = generate_reach(30, 1.0, 1.0, 0.0);
    let t: Vec<f64> = t_ms.iter().map(|v| v / 1000.0).collect();
    let last = x[x.len() - 1];

    let out = uniform_time(&x, &t, 0.01, 3.0).unwrap();
    assert_eq!(out.len(), 300);
    let recorded = (t_ms[t_ms.len() - 1] / 10.0).floor() as usize + 1;
    assert!(out[recorded..].iter().all(|&v| v == out[recorded - 1]));

    // Fifths of a second ending on a whole number of 0.1 s steps
    let t = [0.0, 0.35, 0.7];
    let coord = [0.0, 0.2, last];
    let out = uniform_time(&coord, &t, 0.1, 1.0).unwrap();
    assert_eq!(out.len(), 10);
    assert!(out[7..].iter().all(|&v| v == last));
}

#[test]
fn test_uniform_time_non_integer_ratio() {
    // 13 ms steps over a 2000 ms window: floor(2000 / 13) = 153 samples
    let (x, _, t) = generate_reach(20, 1.0, 1.0, 0.0);
    let out = uniform_time(&x, &t, 13.0, 2000.0).unwrap();
    assert_eq!(out.len(), 153);
    assert_relative_eq!(out[0], x[0]);

    // Padding holds the value at the last grid point inside the recording
    let recorded = (t[t.len() - 1] / 13.0).floor() as usize + 1;
    assert!(out[recorded..].iter().all(|&v| v == out[recorded - 1]));
    assert!(out[recorded - 1] <= x[x.len() - 1]);
}

#[test]
fn test_uniform_time_late_first_sample() {
    // Recording starts 45 ms into the trial; earlier grid points hold x[0].
    let (x, _, t) = generate_reach(25, 1.0, 1.0, 0.0);
    let x: Vec<f64> = x.iter().map(|v| v + 0.25).collect();
    let t: Vec<f64> = t.iter().map(|v| v + 45.0).collect();

    let out = uniform_time(&x, &t, 10.0, 3000.0).unwrap();
    assert_eq!(out.len(), 300);
    assert!(out[..5].iter().all(|&v| v == 0.25));
}

// =============================================================================
// MALFORMED COORDINATES
// =============================================================================

#[test]
fn test_non_finite_coordinates_are_rejected() {
    let (x, y, t) = generate_reach(30, 300.0, 400.0, 20.0);

    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut dirty = x.clone();
        dirty[12] = bad;

        assert!(matches!(
            normalize_range(&dirty, 0.0, 1.0),
            Err(TrajectoryError::NonFinite { .. })
        ));
        assert!(matches!(
            max_deviation(&dirty, &y),
            Err(TrajectoryError::NonFinite { .. })
        ));
        assert!(matches!(
            time_normalize(&dirty, &y, &t, 101),
            Err(TrajectoryError::NonFinite { .. })
        ));
        assert!(matches!(
            uniform_time(&dirty, &t, 10.0, 3000.0),
            Err(TrajectoryError::NonFinite { .. })
        ));
    }
}

// =============================================================================
// SPATIAL NORMALIZATION
// =============================================================================

#[test]
fn test_normalize_range_maps_endpoints() {
    let (x, y, _) = generate_reach(50, 380.0, -420.0, 60.0);
    for (start, end) in [(0.0, 1.0), (0.0, 1.5), (-1.0, 1.0), (1.0, 0.0)] {
        let nx = normalize_range(&x, start, end).unwrap();
        let ny = normalize_range(&y, start, end).unwrap();
        assert_relative_eq!(nx[0], start, epsilon = 1e-12);
        assert_relative_eq!(nx[49], end, epsilon = 1e-12);
        assert_relative_eq!(ny[0], start, epsilon = 1e-12);
        assert_relative_eq!(ny[49], end, epsilon = 1e-12);
    }
}

#[test]
fn test_normalize_range_allows_overshoot() {
    // Overshoots the endpoint by 10% of the span before settling.
    let coord = [0.0, 50.0, 110.0, 100.0];
    let out = normalize_range(&coord, 0.0, 1.0).unwrap();
    assert_relative_eq!(out[2], 1.1, epsilon = 1e-12);
}

#[test]
fn test_canonicalize_direction_aligns_mirrored_trials() {
    let (right, _, _) = generate_reach(40, 300.0, 400.0, 30.0);
    let left: Vec<f64> = right.iter().map(|v| -v).collect();

    assert_eq!(canonicalize_direction(&right), right);
    assert_eq!(canonicalize_direction(&left), right);

    let once = canonicalize_direction(&left);
    assert_eq!(canonicalize_direction(&once), once);
}

// =============================================================================
// ONSET AND PARSING
// =============================================================================

#[test]
fn test_onset_on_normalized_path() {
    let (x, y, t) = generate_reach(60, 300.0, 400.0, 0.0);
    let out = time_normalize(&x, &y, &t, 101).unwrap();
    let ny = normalize_range(&out.y, 0.0, 1.0).unwrap();

    let index = first_crossing_index(&ny, 0.01, CrossingDirection::Ascending);
    assert!(index > 0);
    assert!(ny[index] > 0.01);
    assert!(ny[index - 1] <= 0.01);

    let onset = first_crossing_time(&out.t, &ny, 0.01, CrossingDirection::Ascending).unwrap();
    assert_eq!(onset, out.t[index]);
}

#[test]
fn test_first_crossing_index_example() {
    assert_eq!(
        first_crossing_index(&[0.0, 0.0, 0.02, 0.5], 0.01, CrossingDirection::Ascending),
        2
    );
}

#[test]
fn test_parsed_columns_feed_resampler() {
    let x = parse_list("[0,4,15,40,80,100]").unwrap();
    let y = parse_list("[0, 10, 30, 60, 90, 100]").unwrap();
    let t = parse_list("[0,16,33,50,66,83]").unwrap();
    let out = time_normalize(&x, &y, &t, 101).unwrap();
    assert_eq!(out.len(), 101);

    assert!(parse_list("[0,16,,50]").is_err());
}
