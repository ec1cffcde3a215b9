//! Method-call syntax for the free functions in this crate.
//!
//! Import the traits to call statistics directly on slices and vectors.
//! Nothing changes for code that does not import them.
//!
//! # Examples
//! ```
//! use u_mathkit::ext::{SequenceExt, SequenceStats};
//! use u_mathkit::random::create_rng;
//!
//! let mut data = vec![4.0, 1.0, 3.0, 2.0];
//! data.sort_by(f64::total_cmp);
//! assert_eq!(data.median(), Some(2.5));
//! assert_eq!(data.mean(), 2.5);
//!
//! let mut rng = create_rng(1);
//! data.shuffle(&mut rng);
//! assert_eq!(data.len(), 4);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use crate::{random, sequence, stats};

/// Statistics on a numeric sequence. See [`crate::stats`].
pub trait SequenceStats {
    fn sum(&self) -> f64;
    fn mean(&self) -> f64;
    fn variance(&self, population: bool) -> f64;
    fn std_dev(&self, population: bool) -> f64;
    /// Expects ascending order.
    fn quartile(&self, p: f64) -> Option<f64>;
    /// Expects ascending order.
    fn median(&self) -> Option<f64>;
    /// Expects ascending order.
    fn q1(&self) -> Option<f64>;
    /// Expects ascending order.
    fn q3(&self) -> Option<f64>;
    /// Expects ascending order.
    fn iqr(&self) -> Option<f64>;
    fn zscore(&self, value: f64) -> f64;
    fn min_above(&self, limit: Option<f64>) -> Option<f64>;
    fn max_below(&self, limit: Option<f64>) -> Option<f64>;
}

impl SequenceStats for [f64] {
    fn sum(&self) -> f64 {
        stats::sum(self)
    }

    fn mean(&self) -> f64 {
        stats::mean(self)
    }

    fn variance(&self, population: bool) -> f64 {
        stats::variance(self, population)
    }

    fn std_dev(&self, population: bool) -> f64 {
        stats::std_dev(self, population)
    }

    fn quartile(&self, p: f64) -> Option<f64> {
        stats::quartile(self, p)
    }

    fn median(&self) -> Option<f64> {
        stats::median(self)
    }

    fn q1(&self) -> Option<f64> {
        stats::q1(self)
    }

    fn q3(&self) -> Option<f64> {
        stats::q3(self)
    }

    fn iqr(&self) -> Option<f64> {
        stats::iqr(self)
    }

    fn zscore(&self, value: f64) -> f64 {
        stats::zscore(self, value)
    }

    fn min_above(&self, limit: Option<f64>) -> Option<f64> {
        stats::min_above(self, limit)
    }

    fn max_below(&self, limit: Option<f64>) -> Option<f64> {
        stats::max_below(self, limit)
    }
}

/// Element-type-agnostic helpers on any sequence.
pub trait SequenceExt<T> {
    /// Uniformly chosen element, `None` if empty.
    fn pick<R: Rng>(&self, rng: &mut R) -> Option<&T>;
    /// Fisher-Yates shuffle in place; returns the same sequence.
    fn shuffle<R: Rng>(&mut self, rng: &mut R) -> &mut [T];
    fn pluck<U, F: FnMut(&T) -> U>(&self, f: F) -> Vec<U>;
    fn obj_map<V, F: FnMut(&T) -> V>(&self, f: F) -> HashMap<T, V>
    where
        T: Eq + Hash + Clone;
}

impl<T> SequenceExt<T> for [T] {
    fn pick<R: Rng>(&self, rng: &mut R) -> Option<&T> {
        random::pick(self, rng)
    }

    fn shuffle<R: Rng>(&mut self, rng: &mut R) -> &mut [T] {
        random::shuffle(self, rng)
    }

    fn pluck<U, F: FnMut(&T) -> U>(&self, f: F) -> Vec<U> {
        sequence::pluck(self, f)
    }

    fn obj_map<V, F: FnMut(&T) -> V>(&self, f: F) -> HashMap<T, V>
    where
        T: Eq + Hash + Clone,
    {
        sequence::obj_map(self, f)
    }
}
