//! Bootstrap result structures.

use super::interval::ConfidenceInterval;
use faer::{Col, Mat};

/// Complete result from a bootstrap run.
///
/// Holds the replicate coefficient matrix together with the per-coefficient
/// intervals and summary statistics derived from it. Column `j` everywhere
/// refers to the same coefficient: the intercept at column 0 when included,
/// then the slopes in the order the fitted models report them.
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// Replicated coefficients, one row per bootstrap sample.
    pub replicates: Mat<f64>,

    /// Confidence interval per coefficient, aligned with the matrix columns.
    pub intervals: Vec<ConfidenceInterval>,

    /// Mean of each replicate column (bootstrap point estimate).
    pub estimates: Col<f64>,

    /// Sample standard deviation of each replicate column
    /// (the bootstrap standard error). NaN when only one replicate exists.
    pub std_errors: Col<f64>,

    /// Number of bootstrap samples drawn.
    pub n_bootstrap: usize,

    /// Rows per bootstrap sample.
    pub sample_size: usize,

    /// Confidence level the intervals were computed at.
    pub confidence_level: f64,

    /// Whether column 0 of the replicate matrix is the intercept.
    pub include_intercept: bool,
}

impl BootstrapResult {
    /// Number of coefficients tracked (columns of the replicate matrix).
    pub fn n_parameters(&self) -> usize {
        self.replicates.ncols()
    }

    /// Interval for coefficient `j`, if it exists.
    pub fn interval(&self, j: usize) -> Option<&ConfidenceInterval> {
        self.intervals.get(j)
    }

    /// Copy of replicate column `j` (the empirical distribution of one
    /// coefficient across all bootstrap samples).
    ///
    /// # Panics
    ///
    /// Panics if `j` is out of bounds.
    pub fn replicate_column(&self, j: usize) -> Col<f64> {
        Col::from_fn(self.replicates.nrows(), |i| self.replicates[(i, j)])
    }
}
