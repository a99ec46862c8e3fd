//! File I/O for matrix text files
//!
//! Reading is a single blocking read to completion followed by a decode.
//! Failures to read a source are reported as format errors naming the path.

use std::fs;
use std::path::Path;

use smf_core::{SmfError, SparseMatrix};

/// Read and decode the matrix stored at `path`
pub fn read_matrix(path: impl AsRef<Path>) -> smf_core::Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| unreadable(path, e))?;
    decode(path, &text)
}

/// Read and decode the matrix at `path` through a read-only memory map
#[cfg(feature = "mmap")]
pub fn read_matrix_mmap(path: impl AsRef<Path>) -> smf_core::Result<SparseMatrix> {
    use memmap2::MmapOptions;

    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| unreadable(path, e))?;
    let len = file.metadata().map_err(|e| unreadable(path, e))?.len();
    if len == 0 {
        // Zero-length mappings are rejected on some platforms
        return decode(path, "");
    }

    // SAFETY: Read-only mapping; the bytes are validated as UTF-8 before use
    let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(|e| unreadable(path, e))?;
    let text = std::str::from_utf8(&mmap).map_err(|e| {
        SmfError::format(None, format!("{} is not valid UTF-8: {e}", path.display()))
    })?;
    decode(path, text)
}

/// Read using the memory-mapped reader when requested
#[cfg(feature = "mmap")]
pub fn read_matrix_with(path: impl AsRef<Path>, use_mmap: bool) -> smf_core::Result<SparseMatrix> {
    if use_mmap {
        read_matrix_mmap(path)
    } else {
        read_matrix(path)
    }
}

/// Read the matrix at `path`; memory mapping is not compiled in
#[cfg(not(feature = "mmap"))]
pub fn read_matrix_with(path: impl AsRef<Path>, _use_mmap: bool) -> smf_core::Result<SparseMatrix> {
    read_matrix(path)
}

/// Write the text encoding of `matrix` to `path`, newline-terminated
pub fn write_matrix(path: impl AsRef<Path>, matrix: &SparseMatrix) -> std::io::Result<()> {
    let mut text = matrix.to_text();
    text.push('\n');
    fs::write(path, text)
}

fn decode(path: &Path, text: &str) -> smf_core::Result<SparseMatrix> {
    match SparseMatrix::from_text(text) {
        Ok(matrix) => {
            log::debug!("read {} ({} nonzero)", path.display(), matrix.nnz());
            Ok(matrix)
        }
        Err(err) => {
            log::warn!("failed to decode {}: {err}", path.display());
            Err(err)
        }
    }
}

fn unreadable(path: &Path, err: std::io::Error) -> SmfError {
    SmfError::format(None, format!("cannot read {}: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("smf-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_matrix() {
        let path = scratch_file("read.txt", b"rows=2\ncols=2\n\n(1, 0, 3)\n");
        let matrix = read_matrix(&path).unwrap();
        assert_eq!(matrix.to_text(), "rows=2\ncols=2\n(1, 0, 3)");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_format_error() {
        let path = std::env::temp_dir().join("smf-this-file-does-not-exist.txt");
        let err = read_matrix(&path).unwrap_err();
        assert!(err.is_format_error());
        assert!(err.to_string().contains("cannot read"));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_malformed_file_keeps_line_number() {
        let path = scratch_file("bad.txt", b"rows=2\ncols=2\n(0, 0, 1)\n(9, 9, 9)\n");
        let err = read_matrix(&path).unwrap_err();
        assert_eq!(err.line(), Some(4));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_write_then_read() {
        let matrix = SparseMatrix::from_entries(3, 2, [(2, 1, -8), (0, 0, 1)]).unwrap();
        let path = std::env::temp_dir().join(format!("smf-{}-write.txt", std::process::id()));

        write_matrix(&path, &matrix).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "rows=3\ncols=2\n(0, 0, 1)\n(2, 1, -8)\n"
        );
        assert_eq!(read_matrix(&path).unwrap(), matrix);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_golden_files() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let a = read_matrix(data.join("a.txt")).unwrap();
        let b = read_matrix(data.join("b.txt")).unwrap();

        let sum = fs::read_to_string(data.join("a_plus_b.txt")).unwrap();
        let product = fs::read_to_string(data.join("a_times_b.txt")).unwrap();
        assert_eq!(a.add(&b).unwrap().to_text() + "\n", sum);
        assert_eq!(a.multiply(&b).unwrap().to_text() + "\n", product);
    }

    #[cfg(feature = "mmap")]
    #[test]
    fn test_mmap_reader_agrees() {
        let path = scratch_file("mmap.txt", b"rows=3\ncols=3\n(0, 2, 5)\n(2, 2, -1)\n");
        assert_eq!(read_matrix_mmap(&path).unwrap(), read_matrix(&path).unwrap());
        assert_eq!(read_matrix_with(&path, true).unwrap(), read_matrix_with(&path, false).unwrap());
        fs::remove_file(path).unwrap();
    }

    #[cfg(feature = "mmap")]
    #[test]
    fn test_mmap_reader_edge_cases() {
        let empty = scratch_file("empty.txt", b"");
        assert!(read_matrix_mmap(&empty).unwrap_err().is_format_error());
        fs::remove_file(empty).unwrap();

        let binary = scratch_file("binary.txt", &[0xff, 0xfe, 0x00]);
        let err = read_matrix_mmap(&binary).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
        fs::remove_file(binary).unwrap();
    }
}
