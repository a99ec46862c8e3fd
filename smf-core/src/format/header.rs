//! Header lines of the matrix text format
//!
//! The first two non-blank lines of every matrix file fix its dimensions:
//!
//! ```text
//! rows=<non-negative integer>
//! cols=<non-negative integer>
//! ```

use alloc::format;
use core::fmt;

use super::constants::{COLS_KEY, HEADER_LINES, LINE_SEPARATOR, ROWS_KEY};
use super::SourceLine;
use crate::error::{Result, SmfError};
use crate::validation::parse_keyed;

/// Matrix dimensions as declared by the header lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl MatrixHeader {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse the header from the first two non-blank lines
    ///
    /// Fails when fewer than two lines are available, when either line is
    /// not `key=<integer>` with the expected key, or when a dimension is
    /// negative.
    pub fn read<'a, I>(lines: &mut I) -> Result<Self>
    where
        I: Iterator<Item = SourceLine<'a>>,
    {
        let rows_line = lines.next();
        let cols_line = lines.next();

        match (rows_line, cols_line) {
            (Some(rows_line), Some(cols_line)) => Self::parse(&rows_line, &cols_line),
            (found, _) => Err(SmfError::format(
                None,
                format!(
                    "expected {HEADER_LINES} header lines (`{ROWS_KEY}` and `{COLS_KEY}`), found {} non-blank line(s)",
                    usize::from(found.is_some())
                ),
            )),
        }
    }

    /// Parse the header from an explicit `rows=` line and `cols=` line
    pub fn parse(rows_line: &SourceLine<'_>, cols_line: &SourceLine<'_>) -> Result<Self> {
        let rows = parse_dimension(rows_line, ROWS_KEY)?;
        let cols = parse_dimension(cols_line, COLS_KEY)?;
        Ok(Self { rows, cols })
    }
}

fn parse_dimension(line: &SourceLine<'_>, key: &str) -> Result<usize> {
    let value = parse_keyed(line.text, key).ok_or_else(|| {
        SmfError::format(
            Some(line.number),
            format!("expected `{key}<integer>`, found `{}`", line.text),
        )
    })?;

    usize::try_from(value).map_err(|_| {
        SmfError::format(
            Some(line.number),
            format!("`{key}` must be non-negative, found {value}"),
        )
    })
}

impl fmt::Display for MatrixHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ROWS_KEY}{}{LINE_SEPARATOR}{COLS_KEY}{}",
            self.rows, self.cols
        )
    }
}
