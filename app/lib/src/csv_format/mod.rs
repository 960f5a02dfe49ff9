//! Comma-separated values backed by the `csv` crate.
//!
//! The first record is the header row. All records must have the same number
//! of fields; quoting follows RFC 4180.

mod formatter;
mod parser;

pub use formatter::format_csv;
pub use parser::parse_csv;
