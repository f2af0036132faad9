//! Core matrix access trait
//!
//! A storage-agnostic read view of a sparse matrix: optional element
//! lookup, shape and stored-entry count.

use crate::SparseMatrix;

/// Minimal read interface for sparse matrices
pub trait SparseAccess {
    /// Get the stored element at the specified position
    ///
    /// Returns `None` if nothing is stored there, which includes
    /// positions outside the matrix.
    fn get_element(&self, row: usize, col: usize) -> Option<i64>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Fraction of cells holding a stored element; zero for an empty shape
    fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        let cells = rows as f64 * cols as f64;
        if cells == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / cells
        }
    }
}

impl SparseAccess for SparseMatrix {
    fn get_element(&self, row: usize, col: usize) -> Option<i64> {
        match self.get(row, col) {
            0 => None,
            value => Some(value),
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        self.shape()
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}
