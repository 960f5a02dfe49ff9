//! CSV formatter.

use crate::error::{ConvertError, Result};
use crate::table::Table;

/// Render a table as CSV: the header record, then every data record.
///
/// Fields are quoted only when they contain a comma, a quote or a line
/// break. Records end with `\n`.
pub fn format_csv(table: &Table) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(table.headers())
        .map_err(ConvertError::CsvWriteError)?;
    for row in table.rows() {
        writer
            .write_record(row)
            .map_err(ConvertError::CsvWriteError)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
