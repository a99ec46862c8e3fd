//! Literal tokens of the sparse matrix text format

/// Key of the first header line, `rows=<n>`
pub const ROWS_KEY: &str = "rows=";

/// Key of the second header line, `cols=<n>`
pub const COLS_KEY: &str = "cols=";

/// Number of header lines preceding the entries
pub const HEADER_LINES: usize = 2;

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between the fields of an entry
pub const FIELD_SEPARATOR: char = ',';

/// Fields per entry: row, column, value
pub const ENTRY_FIELDS: usize = 3;

/// Line terminator used when encoding
pub const LINE_SEPARATOR: char = '\n';
