//! Text format definitions for sparse matrix files
//!
//! A matrix file is a `rows=` line, a `cols=` line and zero or more
//! `(row, col, value)` entry lines. Blank lines are ignored anywhere.

pub mod constants;
pub mod entry;
pub mod header;

pub use entry::Entry;
pub use header::MatrixHeader;

/// A non-blank input line with its 1-based position in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the original text
    pub number: usize,
    /// Line content with surrounding whitespace removed
    pub text: &'a str,
}

/// Iterate over the lines of `text` that are not blank after trimming
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = SourceLine<'_>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| SourceLine {
            number: index + 1,
            text: line.trim(),
        })
        .filter(|line| !line.text.is_empty())
}
