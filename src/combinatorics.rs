//! Factorials, permutations, and combinations.
//!
//! Results are `f64` so that values past `20!` stay representable (up to
//! `170!`). Beyond that the product overflows to infinity.

/// `n! = 1·2·…·n`, with `0! = 1`.
///
/// # Examples
/// ```
/// use u_mathkit::combinatorics::factorial;
/// assert_eq!(factorial(0), 1.0);
/// assert_eq!(factorial(5), 120.0);
/// ```
pub fn factorial(n: u64) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Number of ordered arrangements of `r` items drawn from `n`, `n!/(n−r)!`.
///
/// Returns `0` when `r > n`.
pub fn npr(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    factorial(n) / factorial(n - r)
}

/// Number of unordered selections of `r` items from `n`, `n!/((n−r)!·r!)`.
///
/// Returns `0` when `r > n`.
///
/// # Examples
/// ```
/// use u_mathkit::combinatorics::ncr;
/// assert_eq!(ncr(5, 2), 10.0);
/// ```
pub fn ncr(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    factorial(n) / (factorial(n - r) * factorial(r))
}
