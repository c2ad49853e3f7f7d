//! Evenly spaced sampling grids shared by the curve generators

/// The `i`-th of `n` linearly spaced values from `start` to `end`
///
/// The last value is exactly `end`.
#[inline]
pub(crate) fn linspace_at(start: f64, end: f64, n: usize, i: usize) -> f64 {
    if n < 2 {
        return start;
    }
    if i + 1 == n {
        return end;
    }
    let step = (end - start) / (n - 1) as f64;
    start + i as f64 * step
}

/// `n` linearly spaced values from `start` to `end` (inclusive)
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| linspace_at(start, end, n, i)).collect()
}

/// `n` values spaced evenly in log10 between `10^start_exp` and `10^end_exp`
pub(crate) fn logspace(start_exp: f64, end_exp: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 10f64.powf(linspace_at(start_exp, end_exp, n, i)))
        .collect()
}
