//! Shape abstraction shared by matrix checks and diagnostics

/// Dimensions and fill of a sparse matrix
pub trait MatrixShape {
    /// Matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of stored non-zero elements
    fn nnz(&self) -> usize;

    fn rows(&self) -> usize {
        self.dimensions().0
    }

    fn cols(&self) -> usize {
        self.dimensions().1
    }

    /// Returns `true` when no element is stored
    fn is_empty(&self) -> bool {
        self.nnz() == 0
    }

    /// Fraction of the `rows * cols` cells that are non-zero
    ///
    /// Matrices with a zero dimension have density `0.0`.
    fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        let cells = rows as f64 * cols as f64;
        if cells == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / cells
        }
    }
}
