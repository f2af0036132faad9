#![no_std]

//! spmat core - Integer Sparse Matrix Definitions
//!
//! This crate provides the sparse storage representation, the textual
//! matrix format and the arithmetic on top of it. It performs no I/O.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::*;
pub use format::parse;
pub use matrix::SparseMatrix;
pub use ops::Operation;
pub use traits::*;
