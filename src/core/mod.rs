//! Core types for bootstrap analysis.

mod dataset;
mod interval;
mod options;
mod result;

pub use dataset::{Dataset, DatasetError};
pub use interval::{ConfidenceInterval, IntervalMethod};
pub use options::{BootstrapOptions, BootstrapOptionsBuilder, OptionsError};
pub use result::BootstrapResult;
