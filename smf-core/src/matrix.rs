//! Sparse integer matrix with nonzero-only storage
//!
//! Only nonzero values are kept, keyed by `(row, col)`. Every write goes
//! through a pruning store so a value that becomes zero is removed
//! instead of stored, and memory stays proportional to the nonzero count.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::Result;
use crate::format::{Entry, MatrixHeader};
use crate::traits::MatrixShape;
use crate::validation::{check_index, check_multipliable, check_same_shape};

/// Sparse matrix of `i64` values with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix from explicit entries
    ///
    /// Entries are applied in order through [`set_element`](Self::set_element),
    /// so later entries overwrite earlier ones and zero values clear a cell.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn header(&self) -> MatrixHeader {
        MatrixHeader::new(self.rows, self.cols)
    }

    /// Number of stored nonzero values
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Value at `(row, col)`, `0` when nothing is stored there
    pub fn get_element(&self, row: usize, col: usize) -> Result<i64> {
        check_index(row, col, self.rows, self.cols)?;
        Ok(self.value_at(row, col))
    }

    /// Write `value` at `(row, col)`; writing `0` removes the cell
    pub fn set_element(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        check_index(row, col, self.rows, self.cols)?;
        self.store(row, col, value);
        Ok(())
    }

    /// Stored entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Entry::new(row, col, value))
    }

    /// Stored entries sorted ascending by `(row, col)`
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.iter().collect();
        entries.sort_unstable();
        entries
    }

    /// Element-wise sum; both operands must have the same dimensions
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        check_same_shape("add", self, other)?;
        Ok(self.combine(other, |a, b| a + b))
    }

    /// Element-wise difference; both operands must have the same dimensions
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        check_same_shape("subtract", self, other)?;
        Ok(self.combine(other, |a, b| a - b))
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.cols() == other.rows()` and yields a
    /// `self.rows() x other.cols()` matrix. The nonzeros of `other` are
    /// grouped by row first, so the work is proportional to the number of
    /// matching pairs rather than to `rows * cols * inner`.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        check_multipliable(self, other)?;

        let mut other_rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for (&(k, j), &b) in &other.entries {
            other_rows.entry(k).or_default().push((j, b));
        }

        let mut result = SparseMatrix::new(self.rows, other.cols);
        for (&(i, k), &a) in &self.entries {
            let Some(bucket) = other_rows.get(&k) else {
                continue;
            };
            for &(j, b) in bucket {
                let sum = result.value_at(i, j) + a * b;
                result.store(i, j, sum);
            }
        }

        log::debug!(
            "multiply {}x{} by {}x{}: {} nonzero in result",
            self.rows,
            self.cols,
            other.rows,
            other.cols,
            result.nnz()
        );
        Ok(result)
    }

    /// Start from a copy of `self` and fold every entry of `other` into it
    fn combine(&self, other: &SparseMatrix, op: impl Fn(i64, i64) -> i64) -> SparseMatrix {
        let mut result = self.clone();
        for (&(row, col), &value) in &other.entries {
            let combined = op(result.value_at(row, col), value);
            result.store(row, col, combined);
        }

        log::debug!(
            "element-wise over {}x{}: {} + {} nonzero in, {} out",
            self.rows,
            self.cols,
            self.nnz(),
            other.nnz(),
            result.nnz()
        );
        result
    }

    fn value_at(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Insert or overwrite, pruning zeros. Callers guarantee the bounds.
    fn store(&mut self, row: usize, col: usize, value: i64) {
        if value == 0 {
            if self.entries.remove(&(row, col)).is_some() {
                log::trace!("pruned ({row}, {col})");
            }
        } else {
            self.entries.insert((row, col), value);
        }
    }
}

impl MatrixShape for SparseMatrix {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}
