//! spmat - Integer Sparse Matrices
//!
//! This library loads and saves sparse integer matrices in a small text
//! format and combines them with addition, subtraction and multiplication.
//!
//! ## Architecture
//!
//! - **spmat-core**: storage, text format, validation and arithmetic (no I/O)
//! - **spmat**: file-backed load/save, file-level errors, logging and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{load, save};
//!
//! fn example() -> Result<(), spmat::FileError> {
//!     let a = load("a.txt")?;
//!     let b = load("b.txt")?;
//!     let product = a.multiply(&b)?;
//!     save(&product, "product.txt")?;
//!     Ok(())
//! }
//! ```

pub use spmat_core::{
    // Core traits
    SparseAccess,
    // Storage and format
    parse, SparseMatrix,
    // Error handling
    Operation, Result, SpmatError, WRONG_FORMAT_MESSAGE,
};

pub mod error;
pub mod file_io;
#[cfg(feature = "serde")]
pub mod summary;

pub use error::FileError;
pub use file_io::{load, save};
#[cfg(feature = "serde")]
pub use summary::MatrixSummary;
