//! GitHub-flavored markdown pipe tables.
//!
//! The parser accepts a single table made of a header line, a separator line
//! and data lines. The formatter renders a left-justified, column-aligned
//! table that the parser reads back.

mod formatter;
mod parser;

pub use formatter::{column_widths, format_markdown};
pub use parser::{is_valid_separator, parse_markdown, split_row};
