//! Real roots of quadratic equations.

/// Real roots of `ax² + bx + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// Negative discriminant.
    None,
    /// Discriminant within `f64::EPSILON` of zero: one repeated root.
    One(f64),
    /// Two distinct roots, `(−b + √Δ)/(2a)` first.
    Two(f64, f64),
}

impl QuadraticRoots {
    /// Number of distinct real roots.
    pub fn len(&self) -> usize {
        match self {
            QuadraticRoots::None => 0,
            QuadraticRoots::One(_) => 1,
            QuadraticRoots::Two(..) => 2,
        }
    }

    /// Whether there are no real roots.
    pub fn is_empty(&self) -> bool {
        matches!(self, QuadraticRoots::None)
    }

    /// The roots in declaration order.
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            QuadraticRoots::None => Vec::new(),
            QuadraticRoots::One(x) => vec![x],
            QuadraticRoots::Two(x1, x2) => vec![x1, x2],
        }
    }
}

/// `b² − 4ac`.
#[inline]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solves `ax² + bx + c = 0` over the reals with the quadratic formula.
///
/// A discriminant in `[0, ε)` is treated as zero and yields the single
/// root `−b/(2a)`. `a == 0` is not special-cased; the division produces
/// infinities or NaN.
///
/// # Examples
/// ```
/// use u_mathkit::algebra::{solve_quadratic, QuadraticRoots};
/// assert_eq!(solve_quadratic(1.0, 0.0, -4.0), QuadraticRoots::Two(2.0, -2.0));
/// assert_eq!(solve_quadratic(1.0, 2.0, 1.0), QuadraticRoots::One(-1.0));
/// assert_eq!(solve_quadratic(1.0, 0.0, 1.0), QuadraticRoots::None);
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticRoots {
    let disc = discriminant(a, b, c);
    if disc < 0.0 {
        log::debug!("quadratic {a}x² + {b}x + {c}: discriminant {disc} < 0, no real roots");
        return QuadraticRoots::None;
    }
    let two_a = 2.0 * a;
    if disc < f64::EPSILON {
        return QuadraticRoots::One(-b / two_a);
    }
    let sqrt_disc = disc.sqrt();
    QuadraticRoots::Two((-b + sqrt_disc) / two_a, (-b - sqrt_disc) / two_a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<f64>) -> Vec<f64> {
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        v
    }

    #[test]
    fn test_discriminant() {
        assert_eq!(discriminant(1.0, 0.0, -4.0), 16.0);
        assert_eq!(discriminant(1.0, 2.0, 1.0), 0.0);
    }

    #[test]
    fn test_two_roots_as_set() {
        let roots = solve_quadratic(1.0, 0.0, -4.0);
        assert_eq!(roots.len(), 2);
        assert_eq!(sorted(roots.to_vec()), vec![-2.0, 2.0]);
    }

    #[test]
    fn test_perfect_square() {
        assert_eq!(solve_quadratic(1.0, 2.0, 1.0).to_vec(), vec![-1.0]);
    }

    #[test]
    fn test_no_real_roots() {
        let roots = solve_quadratic(1.0, 0.0, 1.0);
        assert!(roots.is_empty());
        assert!(roots.to_vec().is_empty());
    }

    #[test]
    fn test_leading_coefficient_divides_both_roots() {
        // 2x² − 10x + 12 = 2(x − 2)(x − 3)
        assert_eq!(
            sorted(solve_quadratic(2.0, -10.0, 12.0).to_vec()),
            vec![2.0, 3.0]
        );
    }

    #[test]
    fn test_tiny_positive_discriminant_is_single_root() {
        // b = 2⁻²⁷, c = 0: Δ = 2⁻⁵⁴ exactly, positive but below machine epsilon.
        let b = 2f64.powi(-27);
        let disc = discriminant(1.0, b, 0.0);
        assert!(disc > 0.0 && disc < f64::EPSILON, "Δ = {disc:e}");
        assert_eq!(solve_quadratic(1.0, b, 0.0), QuadraticRoots::One(-b / 2.0));
    }
}
