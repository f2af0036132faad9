//! Text format for sparse matrices
//!
//! ```text
//! rows=<rows>
//! cols=<cols>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Blank lines are ignored anywhere and every line is trimmed before it is
//! interpreted. Serialization emits entries sorted by coordinate so output
//! is reproducible.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::validation::{parse_entry_line, parse_header_line, validate_entry_coordinate};
use crate::{Result, SparseMatrix, SpmatError};

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Parse a matrix from its text representation
///
/// Entries are applied in order through [`SparseMatrix::set`]: a repeated
/// coordinate keeps the last value, and a later zero removes it.
pub fn parse(text: &str) -> Result<SparseMatrix> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let [(rows_line, rows_text), (cols_line, cols_text), body @ ..] = lines.as_slice() else {
        return Err(SpmatError::WrongFormat { line: 0 });
    };

    let rows = parse_header_line(rows_text, ROWS_KEY, *rows_line)?;
    let cols = parse_header_line(cols_text, COLS_KEY, *cols_line)?;

    let mut matrix = SparseMatrix::new(rows, cols);
    for &(line, entry_text) in body {
        let (row, col, value) = parse_entry_line(entry_text, line)?;
        let (row, col) = validate_entry_coordinate(row, col, rows, cols, line)?;
        matrix.set(row, col, value)?;
    }

    Ok(matrix)
}

impl SparseMatrix {
    /// Serialize to the text format, entries in ascending coordinate order
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{ROWS_KEY}={}", self.rows())?;
        writeln!(f, "{COLS_KEY}={}", self.cols())?;
        for (row, col, value) in self.entries() {
            writeln!(f, "({row}, {col}, {value})")?;
        }
        Ok(())
    }
}

impl FromStr for SparseMatrix {
    type Err = SpmatError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_parse_basic() {
        let m = parse("rows=2\ncols=3\n(0, 0, 1)\n(1, 2, -4)\n").unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.entries(), vec![(0, 0, 1), (1, 2, -4)]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let text = "\n  rows=2  \n\n\tcols=2\n\n   (1, 1, 3)   \n\r\n";
        let m = parse(text).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.get(1, 1), 3);
    }

    #[test]
    fn test_parse_header_only() {
        let m = parse("rows=4\ncols=5").unwrap();
        assert_eq!(m.shape(), (4, 5));
        assert!(m.is_empty());
    }

    #[test]
    fn test_parse_too_few_lines() {
        assert_eq!(parse(""), Err(SpmatError::WrongFormat { line: 0 }));
        assert_eq!(parse("\n\n"), Err(SpmatError::WrongFormat { line: 0 }));
        assert_eq!(parse("rows=2"), Err(SpmatError::WrongFormat { line: 0 }));
    }

    #[test]
    fn test_parse_missing_cols_header() {
        assert_eq!(
            parse("rows=2\n(0, 0, 1)\n"),
            Err(SpmatError::WrongFormat { line: 2 })
        );
    }

    #[test]
    fn test_parse_headers_out_of_order() {
        assert_eq!(
            parse("cols=2\nrows=2\n"),
            Err(SpmatError::WrongFormat { line: 1 })
        );
    }

    #[test]
    fn test_parse_reports_original_line_numbers() {
        let text = "rows=2\n\ncols=2\n\n(0, 0, 1)\n(0, 0, x)\n";
        assert_eq!(parse(text), Err(SpmatError::WrongFormat { line: 6 }));
    }

    #[test]
    fn test_parse_rejects_fractional_value() {
        assert_eq!(
            parse("rows=2\ncols=2\n(0, 0, 1.5)\n"),
            Err(SpmatError::WrongFormat { line: 3 })
        );
    }

    #[test]
    fn test_parse_rejects_out_of_bounds_entry() {
        assert_eq!(
            parse("rows=2\ncols=2\n(2, 0, 1)\n"),
            Err(SpmatError::WrongFormat { line: 3 })
        );
        assert_eq!(
            parse("rows=2\ncols=2\n(0, -1, 1)\n"),
            Err(SpmatError::WrongFormat { line: 3 })
        );
        // Any entry is out of bounds for an empty shape
        assert!(parse("rows=0\ncols=0\n(0, 0, 1)\n").is_err());
    }

    #[test]
    fn test_parse_duplicate_coordinates_last_wins() {
        let m = parse("rows=2\ncols=2\n(0, 0, 1)\n(0, 0, 7)\n").unwrap();
        assert_eq!(m.entries(), vec![(0, 0, 7)]);

        let m = parse("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n(0, 0, 0)\n").unwrap();
        assert_eq!(m.entries(), vec![(1, 1, 2)]);
    }

    #[test]
    fn test_parse_explicit_zero_not_stored() {
        let m = parse("rows=2\ncols=2\n(0, 1, 0)\n").unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_to_text_sorted() {
        let m = SparseMatrix::from_entries(3, 2, vec![(2, 1, 5), (0, 1, -1), (2, 0, 3)]).unwrap();
        assert_eq!(
            m.to_text(),
            "rows=3\ncols=2\n(0, 1, -1)\n(2, 0, 3)\n(2, 1, 5)\n"
        );
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(SparseMatrix::new(0, 0).to_text(), "rows=0\ncols=0\n");
    }

    #[test]
    fn test_text_round_trip() {
        let m = SparseMatrix::from_entries(
            4,
            4,
            vec![(3, 3, i64::MIN), (0, 2, i64::MAX), (1, 0, -12), (2, 2, 1)],
        )
        .unwrap();
        let back: SparseMatrix = m.to_text().parse().unwrap();
        assert_eq!(back, m);
        assert_eq!(back.to_text(), m.to_text());
    }

    #[test]
    fn test_zero_suppressed_in_output() {
        let mut m = SparseMatrix::from_entries(2, 2, vec![(0, 0, 1), (1, 0, 2)]).unwrap();
        m.set(0, 0, 0).unwrap();
        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.to_text(), "rows=2\ncols=2\n(1, 0, 2)\n");
    }
}
