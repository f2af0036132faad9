//! Abstract access interfaces for sparse matrices

pub mod matrix;

pub use matrix::SparseAccess;
