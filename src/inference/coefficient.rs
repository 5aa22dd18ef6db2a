//! Stacking fitted-model parameters into a replicate matrix.

use crate::model::{BootstrapError, FittedModel};
use faer::Mat;

/// Stack the parameters of `k` fitted models into a `k × (p+1)` matrix.
///
/// Row `i` holds model `i`'s parameters: the intercept in column 0,
/// followed by the slope coefficients in their original order. With
/// `include_intercept == false` the intercept column is dropped and the
/// result is `k × p`.
///
/// All models must report the same coefficient count `p`; this is the shape
/// precondition of the downstream interval estimator, checked here rather
/// than left to an index error.
///
/// # Errors
///
/// `EmptyModelSequence` if `models` is empty; `CoefficientCountMismatch`
/// if any model disagrees with the first on coefficient count.
pub fn extract_coefficients<M: FittedModel>(
    models: &[M],
    include_intercept: bool,
) -> Result<Mat<f64>, BootstrapError> {
    let first = models.first().ok_or(BootstrapError::EmptyModelSequence)?;
    let p = first.n_coefficients();

    for (index, model) in models.iter().enumerate() {
        let got = model.n_coefficients();
        if got != p {
            return Err(BootstrapError::CoefficientCountMismatch {
                index,
                got,
                expected: p,
            });
        }
    }

    let k = models.len();
    let matrix = if include_intercept {
        Mat::from_fn(k, p + 1, |i, j| {
            if j == 0 {
                models[i].intercept()
            } else {
                models[i].coefficients()[j - 1]
            }
        })
    } else {
        Mat::from_fn(k, p, |i, j| models[i].coefficients()[j])
    };

    Ok(matrix)
}
