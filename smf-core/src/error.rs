//! Error types for sparse matrix operations

use alloc::string::String;
use core::fmt;

/// Errors raised by decoding, element access and matrix arithmetic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SmfError {
    /// Malformed matrix text, or a source that could not be read
    #[error("invalid matrix format{}: {message}", AtLine(.line))]
    Format {
        /// 1-based line in the original input, when the failure is tied to one
        line: Option<usize>,
        /// Human-readable description
        message: String,
    },

    /// Operand dimensions incompatible with the requested operation
    #[error(
        "dimension mismatch for {operation}: {} and {}",
        Shape(.left),
        Shape(.right)
    )]
    Dimension {
        /// Operation that rejected its operands
        operation: &'static str,
        /// Left operand as (rows, cols)
        left: (usize, usize),
        /// Right operand as (rows, cols)
        right: (usize, usize),
    },

    /// Element access outside the matrix bounds
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    Index {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Coarse classification of [`SmfError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    Dimension,
    Index,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Format => "FormatError",
            ErrorKind::Dimension => "DimensionError",
            ErrorKind::Index => "IndexError",
        };
        f.write_str(name)
    }
}

impl SmfError {
    /// Build a format error, optionally tied to a 1-based input line
    pub fn format(line: Option<usize>, message: impl Into<String>) -> Self {
        SmfError::Format {
            line,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SmfError::Format { .. } => ErrorKind::Format,
            SmfError::Dimension { .. } => ErrorKind::Dimension,
            SmfError::Index { .. } => ErrorKind::Index,
        }
    }

    /// Returns `true` for malformed input or unreadable sources.
    pub fn is_format_error(&self) -> bool {
        matches!(self, SmfError::Format { .. })
    }

    /// Returns `true` for incompatible operand shapes.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, SmfError::Dimension { .. })
    }

    /// Returns `true` for out-of-bounds element access.
    pub fn is_index_error(&self) -> bool {
        matches!(self, SmfError::Index { .. })
    }

    /// Line number carried by a format error, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            SmfError::Format { line, .. } => *line,
            _ => None,
        }
    }
}

struct AtLine<'a>(&'a Option<usize>);

impl fmt::Display for AtLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(line) => write!(f, " at line {line}"),
            None => Ok(()),
        }
    }
}

struct Shape<'a>(&'a (usize, usize));

impl fmt::Display for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0 .0, self.0 .1)
    }
}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SmfError>;
