//! Fitted-model capability trait and error types.

mod coefficients;
mod traits;

pub use coefficients::ModelCoefficients;
pub use traits::{BootstrapError, FittedModel};
