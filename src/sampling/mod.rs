//! Bootstrap resampling of tabular data.

mod resample;

pub use resample::{resample, resample_with};
