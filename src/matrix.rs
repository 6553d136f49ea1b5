//! Input validation and the validated binary matrix.
//!
//! Callers hand over rows of plain integers. [`validate`] checks the two
//! invariants every other module relies on (rectangular shape, cells in
//! `{0, 1}`), and [`BinaryMatrix`] is the compact, already-checked copy the
//! scanning code works from.

use crate::error::{MatrixError, Result};

/// Raw cell type accepted at the boundary.
pub type Cell = i64;

/// Check that `rows` is rectangular and binary.
///
/// Shape is checked over all rows before any value is inspected, so a ragged
/// matrix is always reported as [`MatrixError::InvalidShape`] even if it also
/// holds bad values. A matrix without rows has no shape and is rejected the
/// same way; rows of length zero are accepted. Returns `(rows, columns)` on
/// success.
pub fn validate<R: AsRef<[Cell]>>(rows: &[R]) -> Result<(usize, usize)> {
    let Some(first) = rows.first() else {
        return Err(MatrixError::no_rows());
    };
    let expected = first.as_ref().len();

    if let Some((row, found)) = rows
        .iter()
        .map(|r| r.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(MatrixError::InvalidShape {
            row,
            expected,
            found,
        });
    }

    for (row, cells) in rows.iter().enumerate() {
        if let Some((column, &value)) = cells
            .as_ref()
            .iter()
            .enumerate()
            .find(|&(_, &v)| v != 0 && v != 1)
        {
            return Err(MatrixError::InvalidValue { row, column, value });
        }
    }

    Ok((rows.len(), expected))
}

/// A rectangular matrix whose cells are known to be 0 or 1.
///
/// Stored row-major in a single buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<u8>,
}

impl BinaryMatrix {
    /// Validate `rows` and copy them into a compact matrix.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        let (n_rows, columns) = validate(rows)?;
        let mut cells = Vec::with_capacity(n_rows * columns);
        for r in rows {
            cells.extend(r.as_ref().iter().map(|&v| v as u8));
        }
        Ok(Self {
            rows: n_rows,
            columns,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// True when the matrix has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells of row `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[u8] {
        let start = i * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Cell at `(row, column)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Copy back out into the boundary representation.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.rows)
            .map(|i| self.row(i).iter().map(|&v| Cell::from(v)).collect())
            .collect()
    }
}
