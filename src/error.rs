//! Error type shared by every fallible operation in the crate.
//!
//! Only shape problems are reported as errors. Degenerate numeric input
//! (dividing by a zero variance, reciprocal trig at an asymptote) follows
//! IEEE 754 and yields infinity or NaN instead.

/// Errors raised by paired-sequence and matrix operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Two sequences that must be paired elementwise differ in length.
    LengthMismatch { left: usize, right: usize },
    /// Column count of the left matrix differs from the row count of the right.
    DimensionMismatch { left_cols: usize, right_rows: usize },
    /// A matrix row does not have the same width as the first row.
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A column index is not below the matrix's column count.
    ColumnOutOfRange { column: usize, cols: usize },
    /// Text could not be parsed as an angle mode.
    InvalidAngleMode(String),
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::LengthMismatch { left, right } => {
                write!(f, "list length mismatch: {left} != {right}")
            }
            MathError::DimensionMismatch {
                left_cols,
                right_rows,
            } => write!(
                f,
                "cannot multiply: left has {left_cols} columns, right has {right_rows} rows"
            ),
            MathError::RaggedMatrix {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged matrix: row {row} has {found} columns, expected {expected}"
            ),
            MathError::ColumnOutOfRange { column, cols } => {
                write!(f, "column {column} out of range for matrix with {cols} columns")
            }
            MathError::InvalidAngleMode(s) => {
                write!(f, "invalid angle mode {s:?}, expected \"deg\" or \"rad\"")
            }
        }
    }
}

impl std::error::Error for MathError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MathError>;

/// Fails with [`MathError::LengthMismatch`] unless both lengths agree.
pub(crate) fn ensure_same_len(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(MathError::LengthMismatch { left, right });
    }
    Ok(())
}
