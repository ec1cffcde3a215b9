//! Logarithms and roots.

/// Logarithm of `x` in `base`, or the natural logarithm when `base` is `None`.
///
/// # Examples
/// ```
/// use u_mathkit::elementary::log;
/// assert!((log(1000.0, Some(10.0)) - 3.0).abs() < 1e-12);
/// assert!((log(std::f64::consts::E, None) - 1.0).abs() < 1e-15);
/// ```
pub fn log(x: f64, base: Option<f64>) -> f64 {
    match base {
        Some(b) => x.ln() / b.ln(),
        None => x.ln(),
    }
}

/// Natural logarithm.
#[inline]
pub fn ln(x: f64) -> f64 {
    x.ln()
}

/// The `n`-th root of `value`, computed as `value^(1/n)`.
///
/// Negative `value` with a non-integer exponent yields NaN, as with
/// [`f64::powf`]. Use [`f64::cbrt`] for signed cube roots.
pub fn root(value: f64, n: f64) -> f64 {
    value.powf(1.0 / n)
}
