//! Interactive driver: prompt, load, compute, print
//!
//! The driver reads whatever the [`RunConfig`] leaves open (operation and
//! operand paths) from its input, runs the operation through the matrix
//! core and prints the result. Errors from the core are printed as
//! `Error: <message>` and end the run without failing the process.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use smf_core::{MatrixShape, SmfError, SparseMatrix};

use crate::config::{OutputFormat, RunConfig};
use crate::error::{DriverError, Result};
use crate::file_io::{read_matrix_with, write_matrix};
use crate::operation::Operation;
use crate::report::MatrixReport;

const BANNER: &str = "Sparse Matrix Operations";
const MENU: &str = "Select an operation: add, subtract, multiply";
const OPERATION_PROMPT: &str = "Enter operation: ";
const LEFT_PROMPT: &str = "Enter path for the first matrix file: ";
const RIGHT_PROMPT: &str = "Enter path for the second matrix file: ";
const INVALID_OPERATION: &str = "Invalid operation selected.";
const RESULT_HEADING: &str = "Resultant Matrix:";

/// How a driver run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The result was printed or written
    Completed,
    /// The operation name was not recognised; no file was read
    InvalidOperation(String),
    /// The matrix core rejected an operand or the operation
    Failed(SmfError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// Console session over an input and an output stream
pub struct Driver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the driver, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run one operation, prompting for anything `config` does not provide
    pub fn run(&mut self, config: &RunConfig) -> Result<Outcome> {
        let operation = match config.operation {
            Some(operation) => operation,
            None => {
                writeln!(self.output, "{BANNER}")?;
                writeln!(self.output, "{MENU}")?;
                let answer = self.prompt(OPERATION_PROMPT)?;
                match answer.parse::<Operation>() {
                    Ok(operation) => operation,
                    Err(DriverError::UnknownOperation(name)) => {
                        log::info!("rejected operation {name:?}");
                        writeln!(self.output, "{INVALID_OPERATION}")?;
                        return Ok(Outcome::InvalidOperation(name));
                    }
                    Err(other) => return Err(other),
                }
            }
        };

        let left = self.path_or_prompt(config.left.as_deref(), LEFT_PROMPT)?;
        let right = self.path_or_prompt(config.right.as_deref(), RIGHT_PROMPT)?;

        let result = match compute(operation, &left, &right, config.use_mmap) {
            Ok(result) => result,
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                return Ok(Outcome::Failed(err));
            }
        };

        self.emit(&result, config)?;
        Ok(Outcome::Completed)
    }

    fn emit(&mut self, result: &SparseMatrix, config: &RunConfig) -> Result<()> {
        match (&config.output, config.format) {
            (Some(path), OutputFormat::Text) => {
                write_matrix(path, result)?;
                writeln!(self.output, "Result written to {}", path.display())?;
            }
            (Some(path), OutputFormat::Json) => {
                let json = MatrixReport::from(result).to_json_pretty()?;
                std::fs::write(path, json + "\n")?;
                writeln!(self.output, "Result written to {}", path.display())?;
            }
            (None, OutputFormat::Text) => {
                writeln!(self.output, "\n{RESULT_HEADING}")?;
                writeln!(self.output, "{result}")?;
            }
            (None, OutputFormat::Json) => {
                writeln!(self.output, "{}", MatrixReport::from(result).to_json()?)?;
            }
        }
        Ok(())
    }

    fn path_or_prompt(&mut self, preset: Option<&Path>, prompt: &str) -> Result<PathBuf> {
        match preset {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(PathBuf::from(self.prompt(prompt)?)),
        }
    }

    /// Print `prompt` and read one trimmed line; end of input reads as empty
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Load both operands and apply `operation`
pub fn compute(
    operation: Operation,
    left: &Path,
    right: &Path,
    use_mmap: bool,
) -> smf_core::Result<SparseMatrix> {
    let left = read_matrix_with(left, use_mmap)?;
    let right = read_matrix_with(right, use_mmap)?;
    log::info!(
        "{operation}: {}x{} (density {:.4}) with {}x{} (density {:.4})",
        left.rows(),
        left.cols(),
        left.density(),
        right.rows(),
        right.cols(),
        right.density()
    );

    operation.apply(&left, &right)
}
