//! File-level errors
//!
//! Wraps [`SpmatError`] with the failures only a file-backed caller can
//! see. A missing file is its own variant so callers can report it apart
//! from malformed content.

use std::path::PathBuf;

use spmat_core::SpmatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    /// The file to load does not exist
    #[error("File {} not found", path.display())]
    NotFound { path: PathBuf },

    /// Any other I/O failure while reading or writing `path`
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content or arithmetic error from the core
    #[error(transparent)]
    Matrix(#[from] SpmatError),
}

impl FileError {
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            FileError::NotFound { path }
        } else {
            FileError::Io { path, source }
        }
    }
}
