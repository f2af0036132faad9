//! Coordinate-keyed sparse matrix storage
//!
//! Non-zero entries live in a hash map keyed by `(row, col)`, so element
//! lookup and update are O(1) amortized. Absent coordinates read as zero.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::validation::validate_coordinate;
use crate::Result;

/// Integer sparse matrix with a fixed shape
///
/// The entry map never holds a zero value and never holds a coordinate
/// outside `[0, rows) x [0, cols)`; [`SparseMatrix::set`] is the only
/// mutator and enforces both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given shape
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix by applying `set` to each entry in order
    ///
    /// Later entries for the same coordinate replace earlier ones, and a
    /// zero value removes whatever was there.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `(row, col)`, or zero when nothing is stored there
    ///
    /// Reads are not bounds checked: a coordinate outside the shape can
    /// never be stored, so it simply reads as zero.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Store `value` at `(row, col)`, removing the entry when `value` is zero
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        validate_coordinate(row, col, self.rows, self.cols)?;

        if value == 0 {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Stored entries sorted ascending by (row, col)
    pub fn entries(&self) -> Vec<(usize, usize, i64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_unstable();
        sorted
    }
}
