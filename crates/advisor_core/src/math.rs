//! Rounding and percentile helpers shared by the computation crates.

/// Rounds `x` to `dp` decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use advisor_core::math::round_dp;
///
/// assert_eq!(round_dp(1234.5678, 2), 1234.57);
/// assert_eq!(round_dp(-0.125, 2), -0.13);
/// ```
#[inline]
pub fn round_dp(x: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (x * factor).round() / factor
}

/// Linear-interpolation percentile over a sorted, non-empty slice.
///
/// Uses the rank definition `p/100 * (n - 1)` with linear interpolation
/// between the bracketing order statistics, matching the percentile
/// definition of the original service's aggregation.
///
/// # Panics
///
/// Panics if `sorted` is empty or `p` is outside [0, 100]. Callers pass
/// fixed percentile labels over a validated non-empty result buffer.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "percentile of empty slice");
    assert!((0.0..=100.0).contains(&p), "percentile {p} outside [0, 100]");

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p / 100.0 * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;
    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}
