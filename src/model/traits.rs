//! Core trait for fitted regression models.

use crate::core::{DatasetError, OptionsError};
use faer::Col;
use thiserror::Error;

/// Errors that can occur during bootstrap analysis.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("bootstrap sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    #[error("bootstrap sample size must be at least 1, got {0}")]
    InvalidSampleSize(usize),

    #[error("model sequence is empty")]
    EmptyModelSequence,

    #[error("coefficient count mismatch: model {index} has {got} coefficients, expected {expected}")]
    CoefficientCountMismatch {
        index: usize,
        got: usize,
        expected: usize,
    },

    #[error("coefficient matrix has no rows or no columns")]
    EmptyCoefficientMatrix,

    #[error("confidence level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("invalid dataset: {0}")]
    InvalidDataset(#[from] DatasetError),

    #[error("model fit failed on sample {index}: {message}")]
    FitFailed { index: usize, message: String },
}

/// A fitted linear model that can report its estimated parameters.
///
/// This is the only contract the toolkit places on the fitting step: one
/// intercept scalar and an ordered coefficient sequence, one entry per
/// predictor used in fitting. Any regression implementation satisfying it
/// can be bootstrapped; fitting itself happens outside this crate.
///
/// All models fed into one analysis must have been fit with the same
/// predictor set, so their coefficient sequences have equal length and
/// consistent order.
pub trait FittedModel {
    /// The estimated intercept.
    fn intercept(&self) -> f64;

    /// The estimated slope coefficients, in predictor order.
    fn coefficients(&self) -> &Col<f64>;

    /// Number of slope coefficients (convenience method).
    fn n_coefficients(&self) -> usize {
        self.coefficients().nrows()
    }
}

impl<T: FittedModel + ?Sized> FittedModel for &T {
    fn intercept(&self) -> f64 {
        (**self).intercept()
    }

    fn coefficients(&self) -> &Col<f64> {
        (**self).coefficients()
    }
}

impl<T: FittedModel + ?Sized> FittedModel for Box<T> {
    fn intercept(&self) -> f64 {
        (**self).intercept()
    }

    fn coefficients(&self) -> &Col<f64> {
        (**self).coefficients()
    }
}
