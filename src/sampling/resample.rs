//! Row resampling with replacement.

use crate::core::Dataset;
use crate::model::BootstrapError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw `k` bootstrap samples of `n` rows each from `data`.
///
/// Every sample is built from `n` row indices drawn independently and
/// uniformly with replacement, so a source row may appear zero, one, or
/// several times in one sample. Row order within a sample is the draw
/// order. Draws are independent across the `k` samples, and the source
/// dataset is never modified.
///
/// `n` may exceed the source row count; sampling with replacement makes
/// oversized samples well-defined.
///
/// # Arguments
///
/// * `data` - Source dataset, must have at least one row
/// * `k` - Number of samples to produce, at least 1
/// * `n` - Rows per sample, at least 1
/// * `rng` - Random number generator; seed it for reproducible draws
///
/// # Returns
///
/// An ordered sequence of exactly `k` datasets of exactly `n` rows each,
/// sharing the source's column schema.
pub fn resample_with<R: Rng>(
    data: &Dataset,
    k: usize,
    n: usize,
    rng: &mut R,
) -> Result<Vec<Dataset>, BootstrapError> {
    if data.is_empty() {
        return Err(BootstrapError::EmptyDataset);
    }
    if k < 1 {
        return Err(BootstrapError::InvalidSampleCount(k));
    }
    if n < 1 {
        return Err(BootstrapError::InvalidSampleSize(n));
    }

    let n_rows = data.n_rows();
    let mut indices = vec![0usize; n];
    let mut samples = Vec::with_capacity(k);

    for _ in 0..k {
        for slot in indices.iter_mut() {
            *slot = rng.random_range(0..n_rows);
        }
        samples.push(data.select_rows(&indices));
    }

    Ok(samples)
}

/// Draw `k` bootstrap samples of `n` rows each using OS entropy.
///
/// Successive runs produce different samples; use [`resample_with`] with a
/// seeded generator when reproducibility matters.
pub fn resample(data: &Dataset, k: usize, n: usize) -> Result<Vec<Dataset>, BootstrapError> {
    let mut rng = StdRng::from_os_rng();
    resample_with(data, k, n, &mut rng)
}
