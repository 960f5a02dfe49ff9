//! Markdown pipe-table parser.

use crate::error::{ConvertError, Result};
use crate::table::Table;

/// Header, separator, and at least one data line.
const MIN_LINES: usize = 3;

/// Parse a markdown pipe table into a [`Table`].
///
/// Leading and trailing whitespace of the whole input is ignored. Blank lines
/// between data rows are skipped; the header and separator must be the first
/// two lines.
pub fn parse_markdown(input: &str) -> Result<Table> {
    let lines: Vec<&str> = input.trim().split('\n').collect();
    if lines.len() < MIN_LINES {
        return Err(ConvertError::format("minimum 3 lines required"));
    }

    let headers = split_row(lines[0]);
    if headers.is_empty() {
        return Err(ConvertError::format("no headers found"));
    }

    let separator = split_row(lines[1]);
    if separator.len() != headers.len() {
        return Err(ConvertError::format("separator line doesn't match headers"));
    }
    if !separator.iter().all(|cell| is_valid_separator(cell)) {
        return Err(ConvertError::format("invalid separator line"));
    }

    let mut rows = Vec::with_capacity(lines.len() - 2);
    for line in &lines[2..] {
        if line.trim().is_empty() {
            continue;
        }
        let row = split_row(line);
        if row.len() != headers.len() {
            return Err(ConvertError::format("inconsistent column count in row"));
        }
        rows.push(row);
    }

    Table::new(headers, rows)
}

/// Split one table line into trimmed cells.
///
/// Returns an empty vector when the trimmed line is not wrapped in pipes.
pub fn split_row(line: &str) -> Vec<String> {
    let inner = match line
        .trim()
        .strip_prefix('|')
        .and_then(|rest| rest.strip_suffix('|'))
    {
        Some(inner) => inner,
        None => return Vec::new(),
    };

    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// A separator cell is non-empty and made only of `-` and `:`.
pub fn is_valid_separator(cell: &str) -> bool {
    let cell = cell.trim();
    !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':')
}
