//! Bootstrap uncertainty estimation for linear-regression coefficients.
//!
//! This library estimates the sampling distribution of regression
//! coefficients empirically: resample the dataset with replacement, refit a
//! model on every resample, and read confidence intervals off the
//! percentiles of the replicated coefficients. No parametric assumptions
//! about the error distribution are required.
//!
//! Model fitting itself is the caller's responsibility: any estimator that
//! can report an intercept and an ordered coefficient sequence plugs in
//! through the [`model::FittedModel`] trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use bootstrap_inference::prelude::*;
//!
//! let data = Dataset::from_columns(&[("x", xs), ("y", ys)])?;
//!
//! let result = Bootstrap::builder()
//!     .n_bootstrap(500)
//!     .confidence_level(0.95)
//!     .seed(42)
//!     .build()
//!     .run(&data, |sample| fit_my_model(sample))?;
//!
//! for (name, interval) in data.column_names().iter().zip(&result.intervals) {
//!     println!("{name}: [{:.3}, {:.3}]", interval.lower, interval.upper);
//! }
//! ```

pub mod bootstrap;
pub mod core;
pub mod inference;
pub mod model;
pub mod sampling;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{Bootstrap, BootstrapBuilder};
    pub use crate::core::{
        BootstrapOptions, BootstrapOptionsBuilder, BootstrapResult, ConfidenceInterval, Dataset,
        DatasetError, IntervalMethod, OptionsError,
    };
    pub use crate::inference::{
        confidence_intervals, extract_coefficients, normal_approximation_intervals,
    };
    pub use crate::model::{BootstrapError, FittedModel, ModelCoefficients};
    pub use crate::sampling::{resample, resample_with};
}

pub use crate::bootstrap::Bootstrap;
pub use crate::core::{
    BootstrapOptions, BootstrapResult, ConfidenceInterval, Dataset, IntervalMethod,
};
pub use crate::model::{BootstrapError, FittedModel, ModelCoefficients};
