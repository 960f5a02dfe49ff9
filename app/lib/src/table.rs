//! The format-agnostic table model shared by every parser and formatter.

use crate::error::{ConvertError, Result};

/// An ordered header row plus equal-width data rows, all cells as text.
///
/// A `Table` can only be obtained through [`Table::new`], which rejects rows
/// whose cell count differs from the header count. There are no mutators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table, checking that every row has one cell per header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let columns = headers.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(ConvertError::validation(format!(
                "row {} has {} cells, expected {}",
                index + 1,
                row.len(),
                columns
            )));
        }

        Ok(Self { headers, rows })
    }

    /// Header cells, in column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in source order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (the header row is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
