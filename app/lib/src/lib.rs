//! # Tabconv
//!
//! Bidirectional conversion between GitHub-flavored markdown pipe tables and
//! comma-separated values.
//!
//! Both formats parse into a shared [`Table`] and render from it, so a
//! conversion is always parse-then-format:
//!
//! ```
//! use tabconv::{convert, Direction};
//!
//! let md = convert("a,b\n1,2\n", Direction::CsvToMarkdown).unwrap();
//! assert_eq!(md, "| a | b |\n|---|---|\n| 1 | 2 |\n");
//! ```
//!
//! The library performs no file I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod csv_format;
pub mod error;
pub mod markdown;
pub mod table;

pub use convert::{convert, Converter, Direction, TableFormat};
pub use csv_format::{format_csv, parse_csv};
pub use error::{ConvertError, Result};
pub use markdown::{format_markdown, parse_markdown};
pub use table::Table;
