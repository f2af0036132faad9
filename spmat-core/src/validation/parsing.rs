//! Parsing utilities for matrix text format lines
//!
//! Every function here reports failures as [`SpmatError::WrongFormat`]
//! tagged with the 1-based line number it was given.

use crate::SpmatError;

/// Parse a strict base-10 `i64`
///
/// Accepts an optional leading `+` or `-` followed by one or more ASCII
/// digits. Whitespace, decimal points, exponents, digit separators and
/// values outside the `i64` range are all rejected.
pub fn parse_integer(s: &str, line: usize) -> Result<i64, SpmatError> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() {
        return Err(SpmatError::wrong_format(line));
    }

    // Accumulate toward the sign so i64::MIN parses without overflow
    let mut result: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(SpmatError::wrong_format(line));
        }

        let digit = (byte - b'0') as i64;
        let scaled = result.checked_mul(10);
        result = match (scaled, negative) {
            (Some(v), true) => v.checked_sub(digit),
            (Some(v), false) => v.checked_add(digit),
            (None, _) => None,
        }
        .ok_or(SpmatError::wrong_format(line))?;
    }

    Ok(result)
}

/// Parse a `<key>=<integer>` header line into a non-negative dimension
pub fn parse_header_line(text: &str, key: &str, line: usize) -> Result<usize, SpmatError> {
    let value = text
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or(SpmatError::wrong_format(line))?;

    let parsed = parse_integer(value, line)?;
    usize::try_from(parsed).map_err(|_| SpmatError::wrong_format(line))
}

/// Parse a `(<row>, <col>, <value>)` entry line
///
/// Returns the raw signed triple; coordinate bounds are checked separately
/// once the shape is known.
pub fn parse_entry_line(text: &str, line: usize) -> Result<(i64, i64, i64), SpmatError> {
    let inner = text
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(SpmatError::wrong_format(line))?;

    let mut fields = inner.split(',');
    let mut next_field = || -> Result<i64, SpmatError> {
        let field = fields.next().ok_or(SpmatError::wrong_format(line))?;
        parse_integer(field.trim(), line)
    };

    let row = next_field()?;
    let col = next_field()?;
    let value = next_field()?;

    if fields.next().is_some() {
        return Err(SpmatError::wrong_format(line));
    }

    Ok((row, col, value))
}
