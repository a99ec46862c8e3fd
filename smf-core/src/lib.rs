#![cfg_attr(not(test), no_std)]

//! SMF Core - Sparse Integer Matrices and their Text Format
//!
//! This crate provides the sparse matrix type, its arithmetic, and the
//! definitions of the line-oriented text format it is read from and
//! written to. It performs no I/O.
//!
//! ```
//! use smf_core::SparseMatrix;
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 4)".parse()?;
//! let b: SparseMatrix = "rows=2\ncols=2\n(1, 1, -4)".parse()?;
//!
//! assert_eq!(a.add(&b)?.to_text(), "rows=2\ncols=2\n(0, 0, 1)");
//! # Ok::<(), smf_core::SmfError>(())
//! ```

extern crate alloc;

pub mod codec;
pub mod error;
pub mod format;
pub mod matrix;
pub mod traits;
pub mod validation;

pub use error::{ErrorKind, Result, SmfError};
pub use format::{Entry, MatrixHeader};
pub use matrix::SparseMatrix;
pub use traits::MatrixShape;
