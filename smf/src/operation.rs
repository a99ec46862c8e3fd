//! The three arithmetic operations offered by the driver

use std::fmt;
use std::str::FromStr;

use smf_core::SparseMatrix;

use crate::error::DriverError;

/// Binary matrix operation selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Every operation, in the order they are offered
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply the operation to `left` and `right`
    pub fn apply(self, left: &SparseMatrix, right: &SparseMatrix) -> smf_core::Result<SparseMatrix> {
        match self {
            Operation::Add => left.add(right),
            Operation::Subtract => left.subtract(right),
            Operation::Multiply => left.multiply(right),
        }
    }
}

impl FromStr for Operation {
    type Err = DriverError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| DriverError::UnknownOperation(s.trim().to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
