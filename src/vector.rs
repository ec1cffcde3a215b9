//! Elementwise operations on numeric vectors.
//!
//! Vectors are plain `&[f64]`. Binary operations require both operands to
//! have the same length and report [`MathError::LengthMismatch`] otherwise;
//! nothing is truncated or padded.
//!
//! [`MathError::LengthMismatch`]: crate::error::MathError::LengthMismatch

use crate::error::{ensure_same_len, Result};

/// Combines two equal-length slices pairwise with `f`.
///
/// # Examples
/// ```
/// use u_mathkit::vector::zip_with;
/// let v = zip_with(&[1, 2], &[3, 4], |a, b| a * b).unwrap();
/// assert_eq!(v, vec![3, 8]);
/// assert!(zip_with(&[1], &[3, 4], |a, b| a * b).is_err());
/// ```
pub fn zip_with<A, B, T, F>(a: &[A], b: &[B], mut f: F) -> Result<Vec<T>>
where
    F: FnMut(&A, &B) -> T,
{
    ensure_same_len(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| f(x, y)).collect())
}

/// Elementwise sum `a + b`.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    zip_with(a, b, |x, y| x + y)
}

/// Elementwise difference `a − b`.
pub fn sub(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    zip_with(a, b, |x, y| x - y)
}

/// Elementwise quotient `a / b`. Zero divisors give ±infinity or NaN.
pub fn div(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    zip_with(a, b, |x, y| x / y)
}

/// Dot product `Σ aᵢ·bᵢ`.
///
/// # Examples
/// ```
/// use u_mathkit::vector::dot;
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
/// ```
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    ensure_same_len(a.len(), b.len())?;
    Ok(dot_unchecked(a, b))
}

pub(crate) fn dot_unchecked(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Squared Euclidean norm, `v·v`.
pub fn length_squared(v: &[f64]) -> f64 {
    dot_unchecked(v, v)
}

/// Euclidean norm, `√(v·v)`.
pub fn length(v: &[f64]) -> f64 {
    length_squared(v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;

    #[test]
    fn test_add_sub() {
        assert_eq!(add(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), vec![4.0, 6.0]);
        assert_eq!(sub(&[1.0, 2.0], &[3.0, 5.0]).unwrap(), vec![-2.0, -3.0]);
    }

    #[test]
    fn test_div_by_zero_propagates() {
        let q = div(&[1.0, 0.0], &[0.0, 0.0]).unwrap();
        assert_eq!(q[0], f64::INFINITY);
        assert!(q[1].is_nan());
    }

    #[test]
    fn test_length_mismatch() {
        let err = MathError::LengthMismatch { left: 2, right: 3 };
        assert_eq!(add(&[1.0, 2.0], &[1.0, 2.0, 3.0]), Err(err.clone()));
        assert_eq!(sub(&[1.0, 2.0], &[1.0, 2.0, 3.0]), Err(err.clone()));
        assert_eq!(div(&[1.0, 2.0], &[1.0, 2.0, 3.0]), Err(err.clone()));
        assert_eq!(dot(&[1.0, 2.0], &[1.0, 2.0, 3.0]), Err(err));
    }

    #[test]
    fn test_empty_vectors() {
        assert_eq!(add(&[], &[]).unwrap(), Vec::<f64>::new());
        assert_eq!(dot(&[], &[]).unwrap(), 0.0);
        assert_eq!(length(&[]), 0.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(length(&[3.0, 4.0]), 5.0);
        assert_eq!(length_squared(&[3.0, 4.0]), 25.0);
    }
}
