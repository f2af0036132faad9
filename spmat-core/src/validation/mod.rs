//! Validation utilities for the matrix text format
//!
//! Pure functions with no I/O: strict integer parsing, line-level
//! grammar checks and coordinate bounds checks.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_coordinate, validate_entry_coordinate};
pub use parsing::{parse_entry_line, parse_header_line, parse_integer};
