//! serde support: `{ "rows", "cols", "entries": [{ "row", "col", "value" }] }`
//!
//! Deserialization rebuilds the matrix through `set`, so out-of-range
//! coordinates are rejected and zero values are dropped.

use alloc::vec::Vec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SparseMatrix;

#[derive(Serialize, Deserialize)]
struct MatrixEntry {
    row: usize,
    col: usize,
    value: i64,
}

#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    entries: Vec<MatrixEntry>,
}

impl Serialize for SparseMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixRepr {
            rows: self.rows(),
            cols: self.cols(),
            entries: self
                .entries()
                .into_iter()
                .map(|(row, col, value)| MatrixEntry { row, col, value })
                .collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SparseMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MatrixRepr::deserialize(deserializer)?;
        SparseMatrix::from_entries(
            repr.rows,
            repr.cols,
            repr.entries.into_iter().map(|e| (e.row, e.col, e.value)),
        )
        .map_err(serde::de::Error::custom)
    }
}
