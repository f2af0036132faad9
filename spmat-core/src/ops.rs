//! Pairwise arithmetic on sparse matrices
//!
//! Every operation returns a fresh matrix and leaves its operands alone.
//! Values are `i64`. A result entry that does not fit `i64` yields
//! [`SpmatError::Overflow`]; products are summed in `i128` so the outcome
//! does not depend on summation order.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::{Result, SparseMatrix, SpmatError};

/// Binary operation kind, used for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const fn failure_prefix(&self) -> &'static str {
        match self {
            Operation::Add => "Cannot add",
            Operation::Subtract => "Cannot subtract",
            Operation::Multiply => "Cannot multiply",
        }
    }

    pub const fn shape_requirement(&self) -> &'static str {
        match self {
            Operation::Add => "matrix dimensions must match for addition",
            Operation::Subtract => "matrix dimensions must match for subtraction",
            Operation::Multiply => {
                "number of columns in first matrix must equal number of rows in second matrix"
            }
        }
    }
}

impl SparseMatrix {
    /// Element-wise sum; both operands must have the same shape
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.elementwise(other, Operation::Add, i64::checked_add)
    }

    /// Element-wise difference `self - other`; both operands must have the same shape
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.elementwise(other, Operation::Subtract, i64::checked_sub)
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() x other.cols()`. `other` is indexed by row first so
    /// only pairs with `self.col == other.row` are visited.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.cols() != other.rows() {
            return Err(self.mismatch(other, Operation::Multiply));
        }

        let mut other_rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for (row, col, value) in other.iter() {
            other_rows.entry(row).or_default().push((col, value));
        }

        // i64 x i64 always fits i128, so only the final sum can overflow
        let mut sums: HashMap<(usize, usize), i128> = HashMap::new();
        for (row, inner, left) in self.iter() {
            let Some(matches) = other_rows.get(&inner) else {
                continue;
            };
            for &(col, right) in matches {
                let sum = sums.entry((row, col)).or_insert(0);
                *sum = sum
                    .checked_add(left as i128 * right as i128)
                    .ok_or(SpmatError::Overflow { row, col })?;
            }
        }

        let mut result = SparseMatrix::new(self.rows(), other.cols());
        for ((row, col), sum) in sums {
            let value = i64::try_from(sum).map_err(|_| SpmatError::Overflow { row, col })?;
            result.set(row, col, value)?;
        }

        Ok(result)
    }

    fn elementwise(
        &self,
        other: &SparseMatrix,
        op: Operation,
        combine: fn(i64, i64) -> Option<i64>,
    ) -> Result<SparseMatrix> {
        if self.shape() != other.shape() {
            return Err(self.mismatch(other, op));
        }

        let mut result = self.clone();
        for (row, col, value) in other.iter() {
            let combined =
                combine(result.get(row, col), value).ok_or(SpmatError::Overflow { row, col })?;
            result.set(row, col, combined)?;
        }

        Ok(result)
    }

    fn mismatch(&self, other: &SparseMatrix, op: Operation) -> SpmatError {
        SpmatError::DimensionMismatch {
            op,
            left: self.shape(),
            right: other.shape(),
        }
    }
}
