//! Simple linear regression and goodness-of-fit.
//!
//! [`lin_reg`] fits `y = slope·x + intercept` by ordinary least squares in
//! closed form. [`residuals`], [`rss`], [`tss`] and [`r2`] decompose the
//! fit for any regression equation, not only linear ones.

use crate::error::{ensure_same_len, Result};
use crate::stats::{bessel_divisor, mean, std_dev, sum};

/// Result of [`lin_reg`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRegression {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient.
    pub r: f64,
}

impl LinearRegression {
    /// Evaluates the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        x * self.slope + self.intercept
    }

    /// The fitted line as a standalone function.
    ///
    /// # Examples
    /// ```
    /// use u_mathkit::regression::lin_reg;
    /// let fit = lin_reg(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0], false).unwrap();
    /// let f = fit.equation();
    /// assert!((f(10.0) - 21.0).abs() < 1e-12);
    /// ```
    pub fn equation(&self) -> impl Fn(f64) -> f64 {
        let (slope, intercept) = (self.slope, self.intercept);
        move |x| x * slope + intercept
    }
}

/// Ordinary least-squares fit of `y` on `x`.
///
/// - slope = Σ(x − x̄)(y − ȳ) / Σ(x − x̄)²
/// - intercept = (Σy − slope·Σx) / n
/// - r = Σ[(x − x̄)/sₓ · (y − ȳ)/s_y] / d
///
/// The standard deviations and `d` use the same `population` flag (`d = n`
/// for a population, `n − 1` for a sample), so `r` is the Pearson
/// coefficient either way.
///
/// Constant `x` gives a NaN or infinite slope.
///
/// # Errors
/// [`MathError::LengthMismatch`](crate::error::MathError::LengthMismatch)
/// if `x` and `y` differ in length.
pub fn lin_reg(x: &[f64], y: &[f64], population: bool) -> Result<LinearRegression> {
    ensure_same_len(x.len(), y.len())?;
    let n = x.len();
    let x_bar = mean(x);
    let y_bar = mean(y);

    let cross: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (xi - x_bar) * (yi - y_bar))
        .collect();
    let squares: Vec<f64> = x.iter().map(|&xi| (xi - x_bar).powi(2)).collect();
    let sxx = sum(&squares);
    if sxx == 0.0 {
        log::warn!("lin_reg: x has zero variance over {n} points, slope is undefined");
    }
    let slope = sum(&cross) / sxx;
    let intercept = (sum(y) - slope * sum(x)) / n as f64;

    let sdx = std_dev(x, population);
    let sdy = std_dev(y, population);
    let standardized: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (xi - x_bar) / sdx * (yi - y_bar) / sdy)
        .collect();
    let r = sum(&standardized) / bessel_divisor(n, population);

    Ok(LinearRegression {
        slope,
        intercept,
        r,
    })
}

/// Observed minus predicted, `yᵢ − f(xᵢ)`.
pub fn residuals<F>(x: &[f64], y: &[f64], f: F) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    ensure_same_len(x.len(), y.len())?;
    Ok(x.iter().zip(y).map(|(&xi, &yi)| yi - f(xi)).collect())
}

/// Residual sum of squares.
pub fn rss<F>(x: &[f64], y: &[f64], f: F) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let squared: Vec<f64> = residuals(x, y, f)?.into_iter().map(|e| e * e).collect();
    Ok(sum(&squared))
}

/// Total sum of squares, `Σ (y − ȳ)²`.
pub fn tss(y: &[f64]) -> f64 {
    let y_bar = mean(y);
    let squared: Vec<f64> = y.iter().map(|&yi| (yi - y_bar).powi(2)).collect();
    sum(&squared)
}

/// Coefficient of determination, `1 − RSS/TSS`.
///
/// # Examples
/// ```
/// use u_mathkit::regression::{lin_reg, r2};
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0, 4.0, 5.0, 4.0, 5.0];
/// let fit = lin_reg(&x, &y, false).unwrap();
/// assert!((r2(&x, &y, |v| fit.predict(v)).unwrap() - 0.6).abs() < 1e-12);
/// ```
pub fn r2<F>(x: &[f64], y: &[f64], f: F) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    Ok(1.0 - rss(x, y, f)? / tss(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;

    const X: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
    const Y: [f64; 5] = [2.0, 4.0, 5.0, 4.0, 5.0];

    #[test]
    fn test_perfect_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let fit = lin_reg(&x, &y, false).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.r - 1.0).abs() < 1e-12);
        assert!((r2(&x, &y, fit.equation()).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_fit() {
        let fit = lin_reg(&X, &Y, false).unwrap();
        assert!((fit.slope - 0.6).abs() < 1e-12);
        assert!((fit.intercept - 2.2).abs() < 1e-12);
        assert!((fit.r - 6.0 / 60.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_population_flag_gives_same_r() {
        let sample = lin_reg(&X, &Y, false).unwrap();
        let population = lin_reg(&X, &Y, true).unwrap();
        assert!((sample.r - population.r).abs() < 1e-12);
        assert_eq!(sample.slope, population.slope);
    }

    #[test]
    fn test_negative_correlation() {
        let fit = lin_reg(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0], false).unwrap();
        assert!((fit.r + 1.0).abs() < 1e-12);
        assert!((fit.slope + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_x_slope_is_nan() {
        let fit = lin_reg(&[2.0, 2.0], &[1.0, 3.0], false).unwrap();
        assert!(fit.slope.is_nan());
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            lin_reg(&[1.0, 2.0], &[1.0], false),
            Err(MathError::LengthMismatch { left: 2, right: 1 })
        );
        assert!(residuals(&[1.0], &[], |x| x).is_err());
        assert!(rss(&[1.0], &[], |x| x).is_err());
        assert!(r2(&[1.0], &[], |x| x).is_err());
    }

    #[test]
    fn test_residuals_and_sums() {
        let fit = lin_reg(&X, &Y, false).unwrap();
        let res = residuals(&X, &Y, |v| fit.predict(v)).unwrap();
        let expected = [-0.8, 0.6, 1.0, -0.6, -0.2];
        for (r, e) in res.iter().zip(expected) {
            assert!((r - e).abs() < 1e-12);
        }
        assert!((rss(&X, &Y, |v| fit.predict(v)).unwrap() - 2.4).abs() < 1e-12);
        assert!((tss(&Y) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_predict_matches_equation() {
        let fit = LinearRegression {
            slope: 3.0,
            intercept: -1.0,
            r: 1.0,
        };
        let f = fit.equation();
        assert_eq!(fit.predict(2.0), 5.0);
        assert_eq!(f(2.0), 5.0);
    }
}
