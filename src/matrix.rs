//! Dense matrices stored as a sequence of row vectors.
//!
//! A matrix is any `&[Vec<f64>]` whose rows all have the same width. The
//! empty slice is the 0×0 matrix.

use crate::error::{MathError, Result};
use crate::vector::dot_unchecked;

/// Returns `(rows, cols)` after checking that `m` is rectangular.
pub fn shape(m: &[Vec<f64>]) -> Result<(usize, usize)> {
    let cols = m.first().map_or(0, Vec::len);
    for (row, r) in m.iter().enumerate() {
        if r.len() != cols {
            return Err(MathError::RaggedMatrix {
                row,
                expected: cols,
                found: r.len(),
            });
        }
    }
    Ok((m.len(), cols))
}

/// Column `j` of `m`, top to bottom.
///
/// # Errors
/// - [`MathError::RaggedMatrix`] if `m` is not rectangular.
/// - [`MathError::ColumnOutOfRange`] if `j` is not below the column count.
pub fn col(m: &[Vec<f64>], j: usize) -> Result<Vec<f64>> {
    let (_, cols) = shape(m)?;
    if j >= cols {
        return Err(MathError::ColumnOutOfRange { column: j, cols });
    }
    Ok(col_unchecked(m, j))
}

/// Caller guarantees `m` is rectangular with more than `j` columns.
fn col_unchecked(m: &[Vec<f64>], j: usize) -> Vec<f64> {
    m.iter().map(|row| row[j]).collect()
}

/// The `n`×`n` identity matrix.
pub fn identity(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

/// Swaps rows and columns.
pub fn transpose(m: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let (_, cols) = shape(m)?;
    Ok((0..cols).map(|j| col_unchecked(m, j)).collect())
}

/// Matrix product `a · b`.
///
/// Entry `(i, j)` is the dot product of row `i` of `a` with column `j` of
/// `b`. Requires `cols(a) == rows(b)`.
///
/// # Errors
/// - [`MathError::RaggedMatrix`] if either operand is not rectangular.
/// - [`MathError::DimensionMismatch`] if the inner dimensions differ.
///
/// # Examples
/// ```
/// use u_mathkit::matrix::mmul;
/// let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
/// let b = vec![vec![5.0], vec![6.0]];
/// assert_eq!(mmul(&a, &b).unwrap(), vec![vec![17.0], vec![39.0]]);
/// ```
pub fn mmul(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let (_, a_cols) = shape(a)?;
    let (b_rows, b_cols) = shape(b)?;
    if a_cols != b_rows {
        return Err(MathError::DimensionMismatch {
            left_cols: a_cols,
            right_rows: b_rows,
        });
    }
    let b_columns: Vec<Vec<f64>> = (0..b_cols).map(|j| col_unchecked(b, j)).collect();
    Ok(a
        .iter()
        .map(|row| b_columns.iter().map(|c| dot_unchecked(row, c)).collect())
        .collect())
}
