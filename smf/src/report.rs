//! JSON rendering of a result matrix
//!
//! The report carries the same information as the text encoding, with
//! entries in the same `(row, col)` order:
//!
//! ```json
//! {"rows":2,"cols":2,"nnz":1,"entries":[{"row":0,"col":1,"value":-8}]}
//! ```

use serde::{Deserialize, Serialize};
use smf_core::{Entry, SparseMatrix};

/// Serializable summary of a matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixReport {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    pub entries: Vec<Entry>,
}

impl MatrixReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&SparseMatrix> for MatrixReport {
    fn from(matrix: &SparseMatrix) -> Self {
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            nnz: matrix.nnz(),
            entries: matrix.entries(),
        }
    }
}
