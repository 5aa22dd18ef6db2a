//! Confidence interval estimation tests.

use approx::assert_relative_eq;
use bootstrap_inference::inference::{
    confidence_intervals, normal_approximation_intervals, replicate_summary,
};
use bootstrap_inference::model::BootstrapError;
use faer::Mat;

// ============================================================================
// Percentile Intervals
// ============================================================================

#[test]
fn test_one_interval_per_column_ordered() {
    let matrix = Mat::from_fn(60, 4, |i, j| ((i * 31 + j * 7) % 23) as f64 + 100.0 * j as f64);

    let intervals = confidence_intervals(&matrix, 0.95).expect("intervals should succeed");

    assert_eq!(intervals.len(), 4);
    for (j, ci) in intervals.iter().enumerate() {
        assert!(ci.lower <= ci.upper, "column {j}: lower > upper");
        // Columns are offset by 100j, so intervals must track their column
        assert!(ci.lower >= 100.0 * j as f64);
        assert!(ci.upper < 100.0 * j as f64 + 23.0);
    }
}

#[test]
fn test_zero_variance_matrix_collapses_to_point() {
    let matrix = Mat::from_fn(50, 3, |_, j| match j {
        0 => -2.0,
        1 => 0.0,
        _ => 7.5,
    });

    let intervals = confidence_intervals(&matrix, 0.95).unwrap();

    for (j, v) in [-2.0, 0.0, 7.5].iter().enumerate() {
        assert_relative_eq!(intervals[j].lower, *v, epsilon = 1e-12);
        assert_relative_eq!(intervals[j].upper, *v, epsilon = 1e-12);
    }
}

#[test]
fn test_linear_interpolation_between_ranks() {
    // Column [1, 2, 3, 4]: 2.5th percentile at rank h = 0.075,
    // 97.5th at h = 2.925
    let matrix = Mat::from_fn(4, 1, |i, _| (i + 1) as f64);

    let intervals = confidence_intervals(&matrix, 0.95).unwrap();

    assert_relative_eq!(intervals[0].lower, 1.075, epsilon = 1e-10);
    assert_relative_eq!(intervals[0].upper, 3.925, epsilon = 1e-10);
}

#[test]
fn test_narrower_level_gives_narrower_interval() {
    let matrix = Mat::from_fn(200, 1, |i, _| (i as f64 * 13.7) % 50.0);

    let wide = confidence_intervals(&matrix, 0.99).unwrap();
    let narrow = confidence_intervals(&matrix, 0.80).unwrap();

    assert!(narrow[0].width() < wide[0].width());
}

#[test]
fn test_pure_function_of_input() {
    let matrix = Mat::from_fn(80, 2, |i, j| ((i * 41 + j * 13) % 29) as f64);

    let first = confidence_intervals(&matrix, 0.95).unwrap();
    let second = confidence_intervals(&matrix, 0.95).unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Normal Approximation
// ============================================================================

#[test]
fn test_normal_intervals_are_mean_centered() {
    let matrix = Mat::from_fn(101, 1, |i, _| i as f64);

    let intervals = normal_approximation_intervals(&matrix, 0.95).unwrap();

    assert_relative_eq!(intervals[0].midpoint(), 50.0, epsilon = 1e-9);
    assert!(intervals[0].contains(50.0));
}

#[test]
fn test_methods_roughly_agree_on_uniform_spread() {
    let matrix = Mat::from_fn(500, 1, |i, _| (i as f64 * 0.618) % 1.0);

    let percentile = confidence_intervals(&matrix, 0.95).unwrap();
    let normal = normal_approximation_intervals(&matrix, 0.95).unwrap();

    // Same data, so the two intervals should overlap substantially
    assert!(normal[0].contains(percentile[0].midpoint()));
    assert!(percentile[0].contains(normal[0].midpoint()));
}

// ============================================================================
// Summaries
// ============================================================================

#[test]
fn test_replicate_summary_mean_and_std() {
    let matrix = Mat::from_fn(4, 2, |i, j| if j == 0 { (i + 1) as f64 } else { 5.0 });

    let (estimates, std_errors) = replicate_summary(&matrix);

    assert_relative_eq!(estimates[0], 2.5, epsilon = 1e-12);
    assert_relative_eq!(estimates[1], 5.0, epsilon = 1e-12);
    // Sample variance of [1, 2, 3, 4] is 5/3
    assert_relative_eq!(std_errors[0], (5.0f64 / 3.0).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(std_errors[1], 0.0, epsilon = 1e-12);
}

// ============================================================================
// Precondition Violations
// ============================================================================

#[test]
fn test_empty_matrix_is_invalid() {
    let no_rows = Mat::<f64>::zeros(0, 3);
    let no_cols = Mat::<f64>::zeros(3, 0);

    assert!(matches!(
        confidence_intervals(&no_rows, 0.95),
        Err(BootstrapError::EmptyCoefficientMatrix)
    ));
    assert!(matches!(
        normal_approximation_intervals(&no_cols, 0.95),
        Err(BootstrapError::EmptyCoefficientMatrix)
    ));
}

#[test]
fn test_level_outside_unit_interval_is_invalid() {
    let matrix = Mat::from_fn(10, 1, |i, _| i as f64);

    for level in [0.0, 1.0, -0.2, 1.7] {
        assert!(matches!(
            confidence_intervals(&matrix, level),
            Err(BootstrapError::InvalidConfidenceLevel(_))
        ));
    }
}
