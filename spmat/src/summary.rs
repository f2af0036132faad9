//! Shape and fill statistics for a matrix, serializable to JSON

use serde::Serialize;
use spmat_core::SparseAccess;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixSummary {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    pub density: f64,
}

impl MatrixSummary {
    pub fn of<M: SparseAccess>(matrix: &M) -> Self {
        let (rows, cols) = matrix.dimensions();
        Self {
            rows,
            cols,
            nnz: matrix.nnz(),
            density: matrix.density(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for MatrixSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dimensions: {} x {}", self.rows, self.cols)?;
        writeln!(f, "Non-zero elements: {}", self.nnz)?;
        write!(f, "Density: {:.6}%", self.density * 100.0)
    }
}
