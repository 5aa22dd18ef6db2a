//! The bootstrap pipeline: resample, fit, extract, summarize.

use crate::core::{
    BootstrapOptions, BootstrapOptionsBuilder, BootstrapResult, Dataset, IntervalMethod,
};
use crate::inference::{
    confidence_intervals, extract_coefficients, normal_approximation_intervals, replicate_summary,
};
use crate::model::{BootstrapError, FittedModel};
use crate::sampling::resample_with;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Drives a full bootstrap analysis around a caller-supplied fitting step.
///
/// The runner owns only configuration; every `run` is independent. It draws
/// the configured number of samples, fits one model per sample through the
/// callback, stacks the fitted parameters into a replicate matrix, and
/// derives intervals and summary statistics from it. Sample `i` always
/// produces model `i` and replicate row `i`.
///
/// # Example
///
/// ```rust,ignore
/// use bootstrap_inference::prelude::*;
///
/// let result = Bootstrap::builder()
///     .n_bootstrap(500)
///     .seed(42)
///     .build()
///     .run(&data, |sample| ols_fit(sample))?;
///
/// assert_eq!(result.n_parameters(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Bootstrap {
    options: BootstrapOptions,
}

impl Bootstrap {
    /// Create a new runner with the given options.
    pub fn new(options: BootstrapOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the runner.
    pub fn builder() -> BootstrapBuilder {
        BootstrapBuilder::default()
    }

    /// The options this runner was configured with.
    pub fn options(&self) -> &BootstrapOptions {
        &self.options
    }

    /// Run the bootstrap analysis on `data`.
    ///
    /// `fit` is called once per bootstrap sample and must return a fitted
    /// model exposing one intercept and a coefficient sequence of the same
    /// length for every sample. The first fitting failure aborts the run;
    /// there are no partial results.
    ///
    /// # Errors
    ///
    /// Propagates option validation errors, resampling precondition
    /// violations, coefficient-shape mismatches, and fitting failures
    /// (wrapped in `FitFailed` with the sample index).
    pub fn run<M, F, E>(&self, data: &Dataset, mut fit: F) -> Result<BootstrapResult, BootstrapError>
    where
        M: FittedModel,
        F: FnMut(&Dataset) -> Result<M, E>,
        E: fmt::Display,
    {
        self.options.validate()?;

        let k = self.options.n_bootstrap;
        let n = self.options.sample_size.unwrap_or_else(|| data.n_rows());

        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let samples = resample_with(data, k, n, &mut rng)?;

        let mut models = Vec::with_capacity(k);
        for (index, sample) in samples.iter().enumerate() {
            let model = fit(sample).map_err(|e| BootstrapError::FitFailed {
                index,
                message: e.to_string(),
            })?;
            models.push(model);
        }

        let replicates = extract_coefficients(&models, self.options.include_intercept)?;

        let level = self.options.confidence_level;
        let intervals = match self.options.interval_method {
            IntervalMethod::Percentile => confidence_intervals(&replicates, level)?,
            IntervalMethod::NormalApproximation => {
                normal_approximation_intervals(&replicates, level)?
            }
        };

        let (estimates, std_errors) = replicate_summary(&replicates);

        Ok(BootstrapResult {
            replicates,
            intervals,
            estimates,
            std_errors,
            n_bootstrap: k,
            sample_size: n,
            confidence_level: level,
            include_intercept: self.options.include_intercept,
        })
    }
}

/// Builder for `Bootstrap`.
#[derive(Debug, Clone, Default)]
pub struct BootstrapBuilder {
    builder: BootstrapOptionsBuilder,
}

impl BootstrapBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bootstrap samples.
    pub fn n_bootstrap(mut self, k: usize) -> Self {
        self.builder = self.builder.n_bootstrap(k);
        self
    }

    /// Set the rows per sample (defaults to the source row count).
    pub fn sample_size(mut self, n: usize) -> Self {
        self.builder = self.builder.sample_size(n);
        self
    }

    /// Set the confidence level for intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Set whether the intercept column is included.
    pub fn include_intercept(mut self, include: bool) -> Self {
        self.builder = self.builder.include_intercept(include);
        self
    }

    /// Set the interval construction method.
    pub fn interval_method(mut self, method: IntervalMethod) -> Self {
        self.builder = self.builder.interval_method(method);
        self
    }

    /// Seed the resampling RNG for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.builder = self.builder.seed(seed);
        self
    }

    /// Build the runner. Options are validated at `run` time.
    pub fn build(self) -> Bootstrap {
        Bootstrap::new(self.builder.build_unchecked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelCoefficients;
    use std::convert::Infallible;

    fn toy_data() -> Dataset {
        Dataset::from_columns(&[("x", vec![1.0, 2.0, 3.0, 4.0])]).unwrap()
    }

    #[test]
    fn test_constant_fit_collapses_intervals() {
        let result = Bootstrap::builder()
            .n_bootstrap(25)
            .seed(4)
            .build()
            .run(&toy_data(), |_| {
                Ok::<_, Infallible>(ModelCoefficients::from_slice(1.5, &[-2.0]))
            })
            .expect("run should succeed");

        assert_eq!(result.replicates.nrows(), 25);
        assert_eq!(result.n_parameters(), 2);
        assert!((result.intervals[0].lower - 1.5).abs() < 1e-12);
        assert!((result.intervals[0].upper - 1.5).abs() < 1e-12);
        assert!((result.intervals[1].lower + 2.0).abs() < 1e-12);
        assert!((result.estimates[1] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_size_defaults_to_source_rows() {
        let result = Bootstrap::builder()
            .n_bootstrap(5)
            .seed(8)
            .build()
            .run(&toy_data(), |_| {
                Ok::<_, Infallible>(ModelCoefficients::from_slice(0.0, &[1.0]))
            })
            .expect("run should succeed");

        assert_eq!(result.sample_size, 4);
        assert_eq!(result.n_bootstrap, 5);
    }

    #[test]
    fn test_builder_options_roundtrip() {
        let runner = Bootstrap::builder()
            .n_bootstrap(42)
            .confidence_level(0.9)
            .include_intercept(false)
            .build();

        let options = runner.options();
        assert_eq!(options.n_bootstrap, 42);
        assert!((options.confidence_level - 0.9).abs() < 1e-12);
        assert!(!options.include_intercept);
    }
}
