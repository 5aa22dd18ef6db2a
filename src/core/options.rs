//! Bootstrap options and configuration.

use super::interval::IntervalMethod;
use thiserror::Error;

/// Configuration options for a bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Number of bootstrap samples to draw (default: 1000).
    pub n_bootstrap: usize,
    /// Rows per sample; `None` uses the source dataset's row count.
    pub sample_size: Option<usize>,
    /// Confidence level for intervals (default: 0.95).
    pub confidence_level: f64,
    /// Whether the intercept is included in the coefficient matrix (default: true).
    pub include_intercept: bool,
    /// Interval construction method (default: percentile).
    pub interval_method: IntervalMethod,
    /// Deterministic seed for the resampling RNG; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            n_bootstrap: 1000,
            sample_size: None,
            confidence_level: 0.95,
            include_intercept: true,
            interval_method: IntervalMethod::Percentile,
            seed: None,
        }
    }
}

/// Errors that can occur when validating bootstrap options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("n_bootstrap must be at least 1, got {0}")]
    InvalidBootstrapCount(usize),
    #[error("sample_size must be at least 1, got {0}")]
    InvalidSampleSize(usize),
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
}

impl BootstrapOptions {
    /// Create a new builder for bootstrap options.
    pub fn builder() -> BootstrapOptionsBuilder {
        BootstrapOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.n_bootstrap < 1 {
            return Err(OptionsError::InvalidBootstrapCount(self.n_bootstrap));
        }
        if let Some(n) = self.sample_size {
            if n < 1 {
                return Err(OptionsError::InvalidSampleSize(n));
            }
        }
        if self.confidence_level <= 0.0 || self.confidence_level >= 1.0 {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        Ok(())
    }
}

/// Builder for `BootstrapOptions`.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptionsBuilder {
    options: BootstrapOptions,
}

impl BootstrapOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bootstrap samples.
    pub fn n_bootstrap(mut self, k: usize) -> Self {
        self.options.n_bootstrap = k;
        self
    }

    /// Set the rows per sample.
    pub fn sample_size(mut self, n: usize) -> Self {
        self.options.sample_size = Some(n);
        self
    }

    /// Set the confidence level for intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Set whether the intercept column is included.
    pub fn include_intercept(mut self, include: bool) -> Self {
        self.options.include_intercept = include;
        self
    }

    /// Set the interval construction method.
    pub fn interval_method(mut self, method: IntervalMethod) -> Self {
        self.options.interval_method = method;
        self
    }

    /// Seed the resampling RNG for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<BootstrapOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> BootstrapOptions {
        self.options
    }
}
