//! Descriptive statistics over numeric slices.
//!
//! Functions take plain `&[f64]`. The same operations are available as
//! methods through [`SequenceStats`](crate::ext::SequenceStats).
//!
//! # Conventions
//!
//! - **Degenerate input** follows IEEE 754: the mean of an empty slice and
//!   the sample variance of a single value are NaN.
//! - **Population vs. sample**: `population = true` divides by `n`,
//!   `false` divides by `n − 1` (Bessel's correction). Sample is the
//!   default everywhere a flag is not given.
//! - **Quartiles** expect data already sorted ascending and do not sort.
//!
//! # Algorithms
//!
//! - **Sum**: Neumaier compensated summation.
//! - **Variance**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).

use crate::error::{ensure_same_len, Result};

/// Divisor for a sum of squared deviations over `n` values.
#[inline]
pub(crate) fn bessel_divisor(n: usize, population: bool) -> f64 {
    if population {
        n as f64
    } else {
        n as f64 - 1.0
    }
}

/// Neumaier compensated sum.
///
/// An improved variant of Kahan summation that also handles the case
/// where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik
/// und Mechanik* 54(1), pp. 39–51.
///
/// # Examples
/// ```
/// use u_mathkit::stats::sum;
/// assert_eq!(sum(&[1e100, 1.0, -1e100]), 1.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    let mut total = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = total + x;
        if total.abs() >= x.abs() {
            c += (total - t) + x;
        } else {
            c += (x - t) + total;
        }
        total = t;
    }
    // Once the running sum is infinite or NaN the compensation is NaN.
    if total.is_finite() {
        total + c
    } else {
        total
    }
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    sum(data) / data.len() as f64
}

/// Variance of `data`, population (`÷ n`) or sample (`÷ (n − 1)`).
///
/// NaN for an empty slice, and for a single value when `population` is
/// `false`.
///
/// # Examples
/// ```
/// use u_mathkit::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v, true) - 4.0).abs() < 1e-12);
/// assert!((variance(&v, false) - 32.0 / 7.0).abs() < 1e-12);
/// ```
pub fn variance(data: &[f64], population: bool) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let mut count = 0_u64;
    let mut running_mean = 0.0_f64;
    let mut m2 = 0.0_f64;
    for &x in data {
        count += 1;
        let delta = x - running_mean;
        running_mean += delta / count as f64;
        m2 += delta * (x - running_mean);
    }
    m2 / bessel_divisor(data.len(), population)
}

/// Standard deviation, `√variance(data, population)`.
pub fn std_dev(data: &[f64], population: bool) -> f64 {
    variance(data, population).sqrt()
}

/// Value at relative position `p ∈ [0, 1]` of **pre-sorted** data.
///
/// With `pos = n·p`: when `pos` is a whole number strictly between `0` and
/// `n`, the result is the mean of `sorted[pos − 1]` and `sorted[pos]`;
/// otherwise it is `sorted[⌊pos⌋]`, clamped to the last element. This is
/// the "median of halves" convention, so `quartile(d, 0.5)` is the usual
/// median.
///
/// # Returns
/// - `None` if `sorted` is empty or `p` is outside `[0, 1]`.
///
/// # Examples
/// ```
/// use u_mathkit::stats::quartile;
/// let d = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// assert_eq!(quartile(&d, 0.25), Some(2.5));
/// assert_eq!(quartile(&d, 0.75), Some(6.5));
/// ```
pub fn quartile(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let pos = n as f64 * p;
    let idx = pos.floor() as usize;
    if pos.fract() == 0.0 && idx > 0 && idx < n {
        Some((sorted[idx - 1] + sorted[idx]) / 2.0)
    } else {
        Some(sorted[idx.min(n - 1)])
    }
}

/// Median of pre-sorted data.
///
/// # Examples
/// ```
/// use u_mathkit::stats::median;
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
/// ```
pub fn median(sorted: &[f64]) -> Option<f64> {
    quartile(sorted, 0.5)
}

/// First quartile of pre-sorted data.
pub fn q1(sorted: &[f64]) -> Option<f64> {
    quartile(sorted, 0.25)
}

/// Third quartile of pre-sorted data.
pub fn q3(sorted: &[f64]) -> Option<f64> {
    quartile(sorted, 0.75)
}

/// Interquartile range `q3 − q1` of pre-sorted data.
pub fn iqr(sorted: &[f64]) -> Option<f64> {
    Some(q3(sorted)? - q1(sorted)?)
}

/// Standard score of `value` against `data`: `(value − mean) / s`, where
/// `s` is the sample standard deviation.
pub fn zscore(data: &[f64], value: f64) -> f64 {
    (value - mean(data)) / std_dev(data, false)
}

/// Smallest element strictly greater than `limit`.
///
/// With no limit this is the plain minimum. `None` when no element
/// qualifies.
pub fn min_above(data: &[f64], limit: Option<f64>) -> Option<f64> {
    data.iter()
        .copied()
        .filter(|&x| limit.map_or(true, |l| x > l))
        .reduce(f64::min)
}

/// Largest element strictly less than `limit`.
///
/// With no limit this is the plain maximum. `None` when no element
/// qualifies.
pub fn max_below(data: &[f64], limit: Option<f64>) -> Option<f64> {
    data.iter()
        .copied()
        .filter(|&x| limit.map_or(true, |l| x < l))
        .reduce(f64::max)
}

/// Pearson's chi-square statistic `Σ (oᵢ − eᵢ)² / eᵢ`.
///
/// # Errors
/// [`MathError::LengthMismatch`](crate::error::MathError::LengthMismatch)
/// if the slices differ in length.
///
/// # Examples
/// ```
/// use u_mathkit::stats::chi_square;
/// let x2 = chi_square(&[10.0, 20.0], &[15.0, 15.0]).unwrap();
/// assert!((x2 - 10.0 / 3.0).abs() < 1e-12);
/// ```
pub fn chi_square(observed: &[f64], expected: &[f64]) -> Result<f64> {
    ensure_same_len(observed.len(), expected.len())?;
    if expected.contains(&0.0) {
        log::warn!("chi_square: expected frequency of zero, statistic will be infinite or NaN");
    }
    let terms: Vec<f64> = observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| (o - e).powi(2) / e)
        .collect();
    Ok(sum(&terms))
}

// ============================================================================
// Tests
// ============================================================================
