//! Random number generation, uniform sampling, and shuffling.
//!
//! Every function takes the generator explicitly so results can be
//! reproduced from a seed.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use u_mathkit::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Uniform real in `[min, max)`, computed as `min + u·(max − min)`.
///
/// When `min > max` the result lies in `(max, min]` instead; no check is
/// made.
///
/// # Examples
/// ```
/// use u_mathkit::random::{create_rng, random_real};
/// let mut rng = create_rng(7);
/// let x = random_real(&mut rng, 2.0, 5.0);
/// assert!((2.0..5.0).contains(&x));
/// ```
pub fn random_real<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let u: f64 = rng.random();
    min + u * (max - min)
}

/// Uniform integer in `[min, max]`, both ends inclusive.
///
/// Implemented as `floor(random_real(min, max + 1))`.
pub fn random_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    let x = random_real(rng, min as f64, max as f64 + 1.0).floor() as i64;
    // u·(max+1−min) may round up to exactly max+1 for very wide ranges.
    x.min(max)
}

/// Returns a uniformly chosen element, or `None` if `items` is empty.
pub fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation and hands the same slice back
/// for chaining.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use u_mathkit::random::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// shuffle(&mut v, &mut rng).sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<'a, T, R: Rng>(slice: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    let n = slice.len();
    if n <= 1 {
        return slice;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
    slice
}

// ============================================================================
// Tests
// ============================================================================
