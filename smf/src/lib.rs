//! SMF - Sparse Integer Matrix Files
//!
//! This library reads sparse integer matrices from their text format,
//! applies addition, subtraction or multiplication, and renders the
//! result as text or as a JSON report.
//!
//! ## Architecture
//!
//! - **smf-core**: the matrix type, its arithmetic and the text format (no I/O)
//! - **smf**: file I/O, operation dispatch and the console driver
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smf::{read_matrix, Operation};
//!
//! fn example() -> smf::Result<()> {
//!     let a = read_matrix("a.txt")?;
//!     let b = read_matrix("b.txt")?;
//!
//!     let product = Operation::Multiply.apply(&a, &b)?;
//!     println!("{product}");
//!     Ok(())
//! }
//! ```

// Re-export the core matrix type and format definitions
pub use smf_core::{Entry, ErrorKind, MatrixHeader, MatrixShape, SmfError, SparseMatrix};

pub mod config;
pub mod driver;
pub mod error;
pub mod file_io;
pub mod operation;
pub mod report;

pub use config::{OutputFormat, RunConfig};
pub use driver::{compute, Driver, Outcome};
pub use error::{DriverError, Result};
#[cfg(feature = "mmap")]
pub use file_io::read_matrix_mmap;
pub use file_io::{read_matrix, read_matrix_with, write_matrix};
pub use operation::Operation;
pub use report::MatrixReport;
