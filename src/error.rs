//! Error taxonomy for rejected input.
//!
//! Every variant describes a caller mistake and carries enough context to fix
//! the request. None of them are transient, so nothing here is retried.

use thiserror::Error;

/// Reasons a matrix or mode selector is rejected before any scanning happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Rows of the matrix do not all share the same length, or there are no
    /// rows at all (reported as row 0 with `expected == found == 0`).
    #[error("{}", shape_message(.row, .expected, .found))]
    InvalidShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell holds something other than 0 or 1.
    #[error("permitted values for 'matrix': (0 | 1); found {value} at row {row}, column {column}")]
    InvalidValue { row: usize, column: usize, value: i64 },
    /// The mode selector is not one of the recognised tokens.
    #[error("permitted values for 'evaluationMode': [ONES, ZEROES]; found '{token}'")]
    InvalidMode { token: String },
}

impl MatrixError {
    /// Shape error for a matrix without any row.
    pub fn no_rows() -> Self {
        Self::InvalidShape {
            row: 0,
            expected: 0,
            found: 0,
        }
    }

    pub fn invalid_mode(token: impl Into<String>) -> Self {
        Self::InvalidMode {
            token: token.into(),
        }
    }
}

// A ragged row never has `found == expected`, so equality marks the
// empty matrix.
fn shape_message(row: &usize, expected: &usize, found: &usize) -> String {
    if expected == found {
        "'matrix' must hold at least one row; all rows must have the same length".to_owned()
    } else {
        format!(
            "all 'matrix' rows must have the same length: row {row} has {found} columns, expected {expected}"
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MatrixError>;
