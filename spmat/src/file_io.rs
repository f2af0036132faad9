//! File I/O for the matrix text format
//!
//! Handles are opened and dropped inside each call. `load` reads the whole
//! file before parsing, so the handle is already released when a parse
//! error is returned.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use spmat_core::{parse, SparseMatrix};
use tracing::debug;

use crate::FileError;

/// Read and validate a matrix from `path`
///
/// Fails with [`FileError::NotFound`] when the file is absent and with
/// [`FileError::Matrix`] when its content is malformed.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SparseMatrix, FileError> {
    let path = path.as_ref();

    let text = {
        let mut file = File::open(path).map_err(|e| FileError::from_io(path.to_path_buf(), e))?;
        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| FileError::from_io(path.to_path_buf(), e))?;
        text
    };

    let matrix = parse(&text)?;
    debug!(
        path = %path.display(),
        rows = matrix.rows(),
        cols = matrix.cols(),
        nnz = matrix.nnz(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Write `matrix` to `path` in the text format, replacing any existing file
pub fn save<P: AsRef<Path>>(matrix: &SparseMatrix, path: P) -> Result<(), FileError> {
    let path = path.as_ref();
    let io_err = |e| FileError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{matrix}").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(
        path = %path.display(),
        rows = matrix.rows(),
        cols = matrix.cols(),
        nnz = matrix.nnz(),
        "saved matrix"
    );
    Ok(())
}
