//! Coordinate bounds validation

use crate::SpmatError;

/// Check that `(row, col)` lies inside a `rows x cols` shape
pub const fn validate_coordinate(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(), SpmatError> {
    if row >= rows || col >= cols {
        return Err(SpmatError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Convert signed coordinates read from text into in-bounds indices
///
/// Anything negative or past the shape is a format error on `line`.
pub fn validate_entry_coordinate(
    row: i64,
    col: i64,
    rows: usize,
    cols: usize,
    line: usize,
) -> Result<(usize, usize), SpmatError> {
    let row = usize::try_from(row).map_err(|_| SpmatError::wrong_format(line))?;
    let col = usize::try_from(col).map_err(|_| SpmatError::wrong_format(line))?;

    validate_coordinate(row, col, rows, cols).map_err(|_| SpmatError::wrong_format(line))?;
    Ok((row, col))
}
