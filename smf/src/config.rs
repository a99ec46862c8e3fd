//! Run configuration for the driver

use std::path::PathBuf;

use crate::operation::Operation;

/// How a result matrix is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The matrix text format
    #[default]
    Text,
    /// A JSON report
    Json,
}

/// Everything a driver run needs; missing pieces are prompted for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Operation to apply, prompted for when absent
    pub operation: Option<Operation>,
    /// Left operand file, prompted for when absent
    pub left: Option<PathBuf>,
    /// Right operand file, prompted for when absent
    pub right: Option<PathBuf>,
    pub format: OutputFormat,
    /// Write the result here instead of to the console
    pub output: Option<PathBuf>,
    /// Read operands through a memory map
    pub use_mmap: bool,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn with_inputs(mut self, left: impl Into<PathBuf>, right: impl Into<PathBuf>) -> Self {
        self.left = Some(left.into());
        self.right = Some(right.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    /// Returns `true` when the run needs no interactive input.
    pub fn is_complete(&self) -> bool {
        self.operation.is_some() && self.left.is_some() && self.right.is_some()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            operation: None,
            left: None,
            right: None,
            format: OutputFormat::Text,
            output: None,
            use_mmap: cfg!(feature = "mmap"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = RunConfig::new()
            .with_operation(Operation::Multiply)
            .with_inputs("a.txt", "b.txt")
            .with_format(OutputFormat::Json)
            .with_mmap(false);

        assert!(config.is_complete());
        assert_eq!(config.left, Some(PathBuf::from("a.txt")));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.use_mmap);
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_default_is_interactive() {
        let config = RunConfig::default();
        assert!(!config.is_complete());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!RunConfig::new().with_operation(Operation::Add).is_complete());
    }
}
