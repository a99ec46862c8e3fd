//! Entry lines of the matrix text format, `(row, col, value)`

use alloc::format;
use core::fmt;

use super::{MatrixHeader, SourceLine};
use crate::error::{Result, SmfError};
use crate::validation::{coordinate_in_range, parse_integer, split_entry};

/// A single matrix element as it appears on an entry line
///
/// Ordering is lexicographic by `(row, col)`, which is the order entries
/// are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Parse an entry line and check its coordinate against `header`
    ///
    /// Zero values are accepted here; dropping them is the caller's job.
    pub fn parse(line: &SourceLine<'_>, header: &MatrixHeader) -> Result<Self> {
        let malformed = |detail: &str| {
            SmfError::format(
                Some(line.number),
                format!("{detail} in entry `{}`", line.text),
            )
        };

        let fields = split_entry(line.text)
            .ok_or_else(|| malformed("expected `(row, col, value)`"))?;

        let mut numbers = [0i64; 3];
        for (number, field) in numbers.iter_mut().zip(fields) {
            *number = parse_integer(field)
                .ok_or_else(|| malformed(&format!("`{}` is not an integer", field.trim())))?;
        }
        let [row, col, value] = numbers;

        let (row, col) = coordinate_in_range(row, col, header.rows, header.cols).ok_or_else(|| {
            SmfError::format(
                Some(line.number),
                format!(
                    "entry ({row}, {col}) is outside the {}x{} matrix",
                    header.rows, header.cols
                ),
            )
        })?;

        Ok(Self { row, col, value })
    }
}

impl From<(usize, usize, i64)> for Entry {
    fn from((row, col, value): (usize, usize, i64)) -> Self {
        Self { row, col, value }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}
