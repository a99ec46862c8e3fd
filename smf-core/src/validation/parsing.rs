//! Parsing utilities for matrix text fields
//!
//! These helpers only recognise syntax. Line numbers and error messages
//! are attached by the callers in [`crate::format`].

use crate::format::constants::{ENTRY_CLOSE, ENTRY_FIELDS, ENTRY_OPEN, FIELD_SEPARATOR};

/// Parse a signed integer field, ignoring surrounding whitespace
pub fn parse_integer(field: &str) -> Option<i64> {
    field.trim().parse().ok()
}

/// Parse a `key=<integer>` line
///
/// The key must appear literally at the start of the line. Whitespace
/// between `=` and the number is tolerated.
pub fn parse_keyed(line: &str, key: &str) -> Option<i64> {
    line.strip_prefix(key).and_then(parse_integer)
}

/// Split an entry line of the form `(a, b, c)` into its three raw fields
///
/// Returns `None` when the parentheses are missing or the field count is
/// not exactly three. The fields are returned untrimmed.
pub fn split_entry(line: &str) -> Option<[&str; ENTRY_FIELDS]> {
    let inner = line.strip_prefix(ENTRY_OPEN)?.strip_suffix(ENTRY_CLOSE)?;

    let mut fields = inner.split(FIELD_SEPARATOR);
    let row = fields.next()?;
    let col = fields.next()?;
    let value = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    Some([row, col, value])
}
