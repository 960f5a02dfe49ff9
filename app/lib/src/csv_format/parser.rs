//! CSV parser.

use crate::error::{ConvertError, Result};
use crate::table::Table;

/// Parse CSV text into a [`Table`], taking the first record as headers.
///
/// Quoting is strict: a quoted field must be closed and followed by a comma
/// or line break, and a `"` may not appear inside an unquoted field.
pub fn parse_csv(input: &str) -> Result<Table> {
    check_quoting(input)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(input.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(ConvertError::CsvParseError)?;
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let mut records = records.into_iter();
    let headers = records
        .next()
        .ok_or_else(|| ConvertError::validation("empty CSV file"))?;

    Table::new(headers, records.collect())
}

/// Reject quoting the `csv` reader would otherwise recover from silently.
fn check_quoting(input: &str) -> Result<()> {
    let bytes = input.as_bytes();
    let mut line = 1;
    let mut line_start = 0;
    let mut field_start = true;
    // Position of the opening quote of the field being read, if quoted.
    let mut open_quote: Option<(usize, usize)> = None;

    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        let column = i - line_start + 1;

        if open_quote.is_some() {
            match byte {
                b'"' if bytes.get(i + 1) == Some(&b'"') => i += 1,
                b'"' => {
                    open_quote = None;
                    if !matches!(bytes.get(i + 1), None | Some(b',' | b'\n' | b'\r')) {
                        return Err(syntax_error(
                            line,
                            column,
                            "extraneous or missing \" in quoted field",
                        ));
                    }
                }
                b'\n' => {
                    line += 1;
                    line_start = i + 1;
                }
                _ => {}
            }
            i += 1;
            continue;
        }

        match byte {
            b'"' if field_start => {
                open_quote = Some((line, column));
                field_start = false;
            }
            b'"' => return Err(syntax_error(line, column, "bare \" in non-quoted field")),
            b',' => field_start = true,
            b'\n' => {
                line += 1;
                line_start = i + 1;
                field_start = true;
            }
            b'\r' => {}
            _ => field_start = false,
        }
        i += 1;
    }

    match open_quote {
        Some((line, column)) => Err(syntax_error(line, column, "unterminated quoted field")),
        None => Ok(()),
    }
}

fn syntax_error(line: usize, column: usize, message: &str) -> ConvertError {
    ConvertError::CsvSyntaxError {
        line,
        column,
        message: message.to_string(),
    }
}
