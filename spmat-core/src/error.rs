//! Error types for sparse matrix operations

use crate::ops::Operation;

/// Message shared by every text format violation
pub const WRONG_FORMAT_MESSAGE: &str = "Input file has wrong format";

/// Errors that can occur while parsing, mutating or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Malformed text input; `line` is 1-based and counts blank lines.
    /// `line == 0` means the input as a whole (too few lines).
    WrongFormat { line: usize },
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        op: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// `set` called outside the matrix shape
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A result entry does not fit `i64`
    Overflow { row: usize, col: usize },
}

impl SpmatError {
    pub(crate) const fn wrong_format(line: usize) -> Self {
        SpmatError::WrongFormat { line }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::WrongFormat { line: 0 } => write!(f, "{WRONG_FORMAT_MESSAGE}"),
            SpmatError::WrongFormat { line } => write!(f, "{WRONG_FORMAT_MESSAGE} (line {line})"),
            SpmatError::DimensionMismatch { op, left, right } => write!(
                f,
                "{} {}x{} and {}x{}: {}",
                op.failure_prefix(),
                left.0,
                left.1,
                right.0,
                right.1,
                op.shape_requirement()
            ),
            SpmatError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Invalid row or column index ({row}, {col}) for {rows}x{cols} matrix"
            ),
            SpmatError::Overflow { row, col } => {
                write!(f, "Integer overflow computing entry ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
