//! # u-mathkit
//!
//! A toolkit of everyday formulas: trigonometry with a degrees/radians
//! mode, combinatorics, the quadratic formula, vector and matrix helpers,
//! descriptive statistics, simple linear regression, and boxplot
//! summaries.
//!
//! ## Modules
//!
//! - [`trig`] — `TrigContext` carrying the angle mode
//! - [`elementary`] — logarithms and roots
//! - [`random`] — seeded RNG, uniform sampling, Fisher-Yates shuffle
//! - [`vector`] / [`matrix`] — elementwise ops, norms, matrix product
//! - [`combinatorics`] / [`algebra`] — factorials, nPr/nCr, quadratic roots
//! - [`stats`] — sums, moments, quartiles, chi-square
//! - [`regression`] / [`boxplot`] — least-squares fit, Tukey fences
//! - [`sequence`] — ranges, generators, projection, column printing
//! - [`ext`] — the above as methods on slices
//!
//! ## Design Philosophy
//!
//! - **No hidden state**: the angle mode is a value, randomness takes an
//!   explicit generator
//! - **IEEE semantics for degenerate input**: NaN and infinity propagate;
//!   only shape mismatches are errors
//! - **Opt-in methods**: extension traits must be imported

pub mod algebra;
pub mod boxplot;
pub mod combinatorics;
pub mod elementary;
pub mod error;
pub mod ext;
pub mod matrix;
pub mod random;
pub mod regression;
pub mod sequence;
pub mod stats;
pub mod trig;
pub mod vector;

pub use error::{MathError, Result};
pub use ext::{SequenceExt, SequenceStats};
pub use trig::{AngleMode, TrigContext};
