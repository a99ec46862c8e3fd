//! Coordinate bounds validation

use crate::error::{Result, SmfError};

/// Check that `(row, col)` addresses an element of a `rows x cols` matrix
pub fn check_index(row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
    if row >= rows || col >= cols {
        return Err(SmfError::Index {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Convert a signed coordinate read from text into an in-range index pair
///
/// Negative coordinates and coordinates past the dimensions yield `None`.
pub fn coordinate_in_range(row: i64, col: i64, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let row = usize::try_from(row).ok().filter(|&r| r < rows)?;
    let col = usize::try_from(col).ok().filter(|&c| c < cols)?;
    Some((row, col))
}
