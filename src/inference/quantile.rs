//! Quantile computation with linear interpolation.

/// Compute a quantile from pre-sorted data.
///
/// Uses the R-7 quantile definition: the rank `h = (n - 1) * q` is split
/// into its integer and fractional parts, and the result interpolates
/// linearly between the two closest order statistics. This matches the
/// default percentile definition of most numeric environments.
///
/// # Arguments
///
/// * `sorted` - Slice sorted in ascending order; no verification is performed
/// * `q` - Quantile probability in [0, 1]
///
/// # Panics
///
/// Panics if `sorted` is empty or if `q` is outside [0, 1].
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&q),
        "Quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    let h = (n - 1) as f64 * q;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        sorted[n - 1]
    } else if h_frac == 0.0 {
        sorted[h_floor]
    } else {
        sorted[h_floor] + h_frac * (sorted[h_floor + 1] - sorted[h_floor])
    }
}

/// Compute a quantile from unsorted data.
///
/// Copies and sorts the input, then delegates to [`quantile_sorted`].
/// When several quantiles of the same data are needed, sort once and call
/// [`quantile_sorted`] directly.
///
/// # Panics
///
/// Panics if `data` is empty or if `q` is outside [0, 1].
pub fn quantile(data: &[f64], q: f64) -> f64 {
    assert!(!data.is_empty(), "Cannot compute quantile of empty slice");

    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    quantile_sorted(&sorted, q)
}
