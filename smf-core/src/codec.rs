//! Text decoding and encoding for [`SparseMatrix`]

use alloc::string::String;
use core::fmt::{self, Write};
use core::str::FromStr;

use crate::error::{Result, SmfError};
use crate::format::constants::LINE_SEPARATOR;
use crate::format::{non_blank_lines, Entry, MatrixHeader};
use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Decode a matrix from its text form
    ///
    /// Blank lines are ignored. The first malformed line aborts the whole
    /// decode; there is no partial result. Entries with value `0` are
    /// accepted and not stored, and a repeated coordinate keeps the last
    /// value.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut lines = non_blank_lines(text);
        let header = MatrixHeader::read(&mut lines)?;

        let mut matrix = SparseMatrix::new(header.rows, header.cols);
        for line in lines {
            let Entry { row, col, value } = Entry::parse(&line, &header)?;
            matrix.set_element(row, col, value)?;
        }

        log::debug!(
            "decoded {}x{} matrix with {} nonzero entries",
            header.rows,
            header.cols,
            matrix.nnz()
        );
        Ok(matrix)
    }

    /// Encode the matrix as text, entries sorted by `(row, col)`
    ///
    /// Lines are separated by `\n` with no trailing newline.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail
        let _ = self.write_text(&mut text);
        text
    }

    /// Stream the text encoding into `out`
    pub fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", self.header())?;
        for entry in self.entries() {
            write!(out, "{LINE_SEPARATOR}{entry}")?;
        }
        Ok(())
    }
}

impl FromStr for SparseMatrix {
    type Err = SmfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MatrixShape;
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const MATRIX_A: &str = "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n(1, 0, 3)\n(1, 1, 4)";
    const MATRIX_B: &str = "rows=2\ncols=2\n(0, 0, 5)\n(1, 1, -4)";

    #[test]
    fn test_decode() {
        let matrix = SparseMatrix::from_text(MATRIX_A).unwrap();
        assert_eq!(matrix.dimensions(), (2, 2));
        assert_eq!(matrix.nnz(), 4);
        assert_eq!(matrix.get_element(1, 0), Ok(3));
    }

    #[test]
    fn test_decode_is_lenient_on_layout() {
        let text = "\n\n  rows=3  \n\ncols=2\n\n   ( 2 ,1,  -7 )  \n(0,0,9)\n\n";
        let matrix: SparseMatrix = text.parse().unwrap();

        assert_eq!(
            matrix.entries(),
            vec![Entry::new(0, 0, 9), Entry::new(2, 1, -7)]
        );
    }

    #[test]
    fn test_decode_drops_zero_entries() {
        let matrix = SparseMatrix::from_text("rows=2\ncols=2\n(0, 0, 0)\n(1, 1, 3)").unwrap();
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get_element(0, 0), Ok(0));
    }

    #[test]
    fn test_decode_repeated_coordinate_keeps_last() {
        let matrix =
            SparseMatrix::from_text("rows=1\ncols=1\n(0, 0, 4)\n(0, 0, 6)").unwrap();
        assert_eq!(matrix.get_element(0, 0), Ok(6));

        let matrix =
            SparseMatrix::from_text("rows=1\ncols=1\n(0, 0, 4)\n(0, 0, 0)").unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_decode_header_only() {
        let matrix = SparseMatrix::from_text("rows=0\ncols=0").unwrap();
        assert_eq!(matrix, SparseMatrix::new(0, 0));
    }

    #[test]
    fn test_decode_rejects_unmatched_paren() {
        let err = SparseMatrix::from_text("rows=2\ncols=2\n(0,0,5").unwrap_err();
        assert!(err.is_format_error());
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_decode_rejects_out_of_bounds_entry() {
        let err = SparseMatrix::from_text("rows=2\ncols=2\n(3, 0, 1)").unwrap_err();
        assert!(err.is_format_error());
        assert!(err.to_string().contains("outside the 2x2 matrix"));
    }

    #[test]
    fn test_decode_rejects_missing_headers() {
        for text in ["", "rows=2", "(0, 0, 1)\n(1, 1, 1)", "rows=2\n(0, 0, 1)"] {
            let err = SparseMatrix::from_text(text).unwrap_err();
            assert!(err.is_format_error(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_decode_rejects_extra_header_keys() {
        let err = SparseMatrix::from_text("rows=2\ncols=2\nnnz=1\n(0, 0, 1)").unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_decode_reports_original_line_numbers() {
        let err = SparseMatrix::from_text("\nrows=2\n\ncols=2\n\n(0, 0, 1)\n\n(0, 0, x)")
            .unwrap_err();
        assert_eq!(err.line(), Some(8));
    }

    #[test]
    fn test_encode_sorted() {
        let mut matrix = SparseMatrix::new(3, 3);
        matrix.set_element(2, 0, 1).unwrap();
        matrix.set_element(0, 2, -5).unwrap();
        matrix.set_element(0, 1, 8).unwrap();
        matrix.set_element(1, 1, 0).unwrap();

        assert_eq!(
            matrix.to_text(),
            "rows=3\ncols=3\n(0, 1, 8)\n(0, 2, -5)\n(2, 0, 1)"
        );
        assert_eq!(matrix.to_string(), matrix.to_text());
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(SparseMatrix::new(4, 1).to_text(), "rows=4\ncols=1");
    }

    #[test]
    fn test_encode_normalizes_input() {
        let matrix = SparseMatrix::from_text("rows=2\ncols=2\n(1,1,-4)\n(0,0,5)\n(0,1,0)").unwrap();
        assert_eq!(matrix.to_text(), MATRIX_B);
    }

    #[test]
    fn test_concrete_scenario() {
        let a: SparseMatrix = MATRIX_A.parse().unwrap();
        let b: SparseMatrix = MATRIX_B.parse().unwrap();

        assert_eq!(
            a.add(&b).unwrap().to_text(),
            "rows=2\ncols=2\n(0, 0, 6)\n(0, 1, 2)\n(1, 0, 3)"
        );
        assert_eq!(
            a.multiply(&b).unwrap().to_text(),
            "rows=2\ncols=2\n(0, 0, 5)\n(0, 1, -8)\n(1, 0, 15)\n(1, 1, -16)"
        );
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..50 {
            let rows = rng.gen_range(0..8);
            let cols = rng.gen_range(0..8);
            let mut matrix = SparseMatrix::new(rows, cols);
            if rows > 0 && cols > 0 {
                for _ in 0..rng.gen_range(0..20) {
                    let value = rng.gen_range(-1000..=1000);
                    matrix
                        .set_element(rng.gen_range(0..rows), rng.gen_range(0..cols), value)
                        .unwrap();
                }
            }

            let decoded = SparseMatrix::from_text(&matrix.to_text()).unwrap();
            assert_eq!(decoded, matrix);
        }
    }

    #[test]
    fn test_write_text_matches_display() {
        let matrix: SparseMatrix = MATRIX_A.parse().unwrap();
        let mut out = String::new();
        matrix.write_text(&mut out).unwrap();
        assert_eq!(out, format!("{matrix}"));
    }
}
