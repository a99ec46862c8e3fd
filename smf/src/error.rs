//! Errors surfaced by the driver layer

use smf_core::SmfError;

/// Everything that can stop a driver run
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Operation name other than add, subtract or multiply
    #[error("unknown operation `{0}` (expected add, subtract or multiply)")]
    UnknownOperation(String),

    /// Decode or arithmetic failure reported by the matrix core
    #[error(transparent)]
    Matrix(#[from] SmfError),

    /// Console or output file failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failure
    #[error("failed to render JSON report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, DriverError>;

impl DriverError {
    /// Returns `true` when the failure came from the matrix core.
    pub fn is_matrix_error(&self) -> bool {
        matches!(self, DriverError::Matrix(_))
    }
}
