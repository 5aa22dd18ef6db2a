//! Common test utilities and data generators.

use bootstrap_inference::core::Dataset;
use bootstrap_inference::model::ModelCoefficients;

/// Generate a dataset with columns "x" and "y" where y = intercept + slope * x + noise.
///
/// x is spread evenly over [0, 10); noise is uniform in
/// [-noise_std, noise_std] from a deterministic generator.
pub fn generate_linear_dataset(
    n_rows: usize,
    intercept: f64,
    slope: f64,
    noise_std: f64,
    seed: u64,
) -> Dataset {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut xs = Vec::with_capacity(n_rows);
    let mut ys = Vec::with_capacity(n_rows);

    for i in 0..n_rows {
        let x = 10.0 * i as f64 / n_rows as f64;
        let y = intercept + slope * x + noise_std * next_rand(&mut rng_state);
        xs.push(x);
        ys.push(y);
    }

    Dataset::from_columns(&[("x", xs), ("y", ys)]).expect("columns have equal length")
}

/// Fit a simple linear regression y = a + b * x by least squares on the
/// "x" and "y" columns of `sample`.
///
/// This stands in for the external model-fitting step of the pipeline.
pub fn fit_line(sample: &Dataset) -> Result<ModelCoefficients, String> {
    let x = sample.column("x").map_err(|e| e.to_string())?;
    let y = sample.column("y").map_err(|e| e.to_string())?;

    let n = x.nrows() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let sxx: f64 = x.iter().map(|&xi| (xi - x_mean).powi(2)).sum();
    let sxy: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
        .sum();

    if sxx == 0.0 {
        return Err("degenerate sample: constant predictor".to_string());
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    Ok(ModelCoefficients::from_slice(intercept, &[slope]))
}
