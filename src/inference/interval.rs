//! Confidence intervals over replicate-matrix columns.

use super::quantile::quantile_sorted;
use crate::core::ConfidenceInterval;
use crate::model::BootstrapError;
use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, Normal};

/// Compute a percentile confidence interval for every matrix column.
///
/// Each column of `replicates` is treated as the empirical distribution of
/// one coefficient across bootstrap samples. For confidence level `level`
/// the bounds are the `alpha/2` and `1 - alpha/2` quantiles of that
/// distribution (`alpha = 1 - level`), with linear interpolation between
/// closest ranks. At the default 0.95 level these are the 2.5th and 97.5th
/// percentiles.
///
/// The returned intervals are positionally aligned with the matrix columns,
/// and `lower <= upper` holds for every pair.
///
/// # Errors
///
/// `EmptyCoefficientMatrix` if the matrix has no rows or no columns;
/// `InvalidConfidenceLevel` if `level` is outside (0, 1).
pub fn confidence_intervals(
    replicates: &Mat<f64>,
    level: f64,
) -> Result<Vec<ConfidenceInterval>, BootstrapError> {
    validate(replicates, level)?;

    let alpha = 1.0 - level;
    let mut intervals = Vec::with_capacity(replicates.ncols());

    for j in 0..replicates.ncols() {
        let mut values = column_values(replicates, j);
        values.sort_unstable_by(|a, b| a.total_cmp(b));

        let lower = quantile_sorted(&values, alpha / 2.0);
        let upper = quantile_sorted(&values, 1.0 - alpha / 2.0);
        intervals.push(ConfidenceInterval::new(lower, upper));
    }

    Ok(intervals)
}

/// Compute a normal-approximation interval for every matrix column.
///
/// Bounds are `mean ± z · sd`, with `z` the standard normal quantile at
/// `1 - alpha/2` and `sd` the sample standard deviation of the column (the
/// bootstrap standard error). Assumes the replicate distribution is roughly
/// Gaussian; the percentile method makes no such assumption.
///
/// # Errors
///
/// Same conditions as [`confidence_intervals`].
pub fn normal_approximation_intervals(
    replicates: &Mat<f64>,
    level: f64,
) -> Result<Vec<ConfidenceInterval>, BootstrapError> {
    validate(replicates, level)?;

    let normal = Normal::new(0.0, 1.0).expect("valid standard normal parameters");
    let alpha = 1.0 - level;
    let z = normal.inverse_cdf(1.0 - alpha / 2.0);

    let mut intervals = Vec::with_capacity(replicates.ncols());

    for j in 0..replicates.ncols() {
        let values = column_values(replicates, j);
        let mean = column_mean(&values);
        let sd = column_std_dev(&values, mean);

        let margin = if sd.is_nan() { 0.0 } else { z * sd };
        intervals.push(ConfidenceInterval::new(mean - margin, mean + margin));
    }

    Ok(intervals)
}

/// Column means and sample standard deviations of a replicate matrix.
///
/// The mean is the bootstrap point estimate of each coefficient; the
/// standard deviation is its bootstrap standard error (NaN with a single
/// replicate row).
pub fn replicate_summary(replicates: &Mat<f64>) -> (Col<f64>, Col<f64>) {
    let m = replicates.ncols();
    let mut estimates = Col::zeros(m);
    let mut std_errors = Col::zeros(m);

    for j in 0..m {
        let values = column_values(replicates, j);
        let mean = column_mean(&values);
        estimates[j] = mean;
        std_errors[j] = column_std_dev(&values, mean);
    }

    (estimates, std_errors)
}

fn validate(replicates: &Mat<f64>, level: f64) -> Result<(), BootstrapError> {
    if replicates.nrows() == 0 || replicates.ncols() == 0 {
        return Err(BootstrapError::EmptyCoefficientMatrix);
    }
    if level <= 0.0 || level >= 1.0 {
        return Err(BootstrapError::InvalidConfidenceLevel(level));
    }
    Ok(())
}

pub(crate) fn column_values(matrix: &Mat<f64>, j: usize) -> Vec<f64> {
    (0..matrix.nrows()).map(|i| matrix[(i, j)]).collect()
}

pub(crate) fn column_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); NaN for a single value.
pub(crate) fn column_std_dev(values: &[f64], mean: f64) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }

    let ss: f64 = values.iter().map(|&v| (v - mean).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}
