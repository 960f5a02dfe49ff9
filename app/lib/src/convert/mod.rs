//! Conversion driver.
//!
//! The set of formats is closed, so formats and directions are plain enums
//! and dispatch is a `match`.

use std::fmt;

use crate::csv_format::{format_csv, parse_csv};
use crate::error::Result;
use crate::markdown::{format_markdown, parse_markdown};
use crate::table::Table;

/// A textual table representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// GitHub-flavored markdown pipe table.
    Markdown,
    /// Comma-separated values.
    Csv,
}

impl TableFormat {
    /// Parse text in this format into a table.
    pub fn parse(&self, input: &str) -> Result<Table> {
        match self {
            TableFormat::Markdown => parse_markdown(input),
            TableFormat::Csv => parse_csv(input),
        }
    }

    /// Render a table in this format.
    pub fn format(&self, table: &Table) -> Result<String> {
        match self {
            TableFormat::Markdown => Ok(format_markdown(table)),
            TableFormat::Csv => format_csv(table),
        }
    }

    /// File extension conventionally used for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Markdown => "md",
            TableFormat::Csv => "csv",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            TableFormat::Markdown => "markdown",
            TableFormat::Csv => "CSV",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Markdown input, CSV output.
    MarkdownToCsv,
    /// CSV input, markdown output.
    CsvToMarkdown,
}

impl Direction {
    /// Format of the input text.
    pub fn source(&self) -> TableFormat {
        match self {
            Direction::MarkdownToCsv => TableFormat::Markdown,
            Direction::CsvToMarkdown => TableFormat::Csv,
        }
    }

    /// Format of the output text.
    pub fn target(&self) -> TableFormat {
        match self {
            Direction::MarkdownToCsv => TableFormat::Csv,
            Direction::CsvToMarkdown => TableFormat::Markdown,
        }
    }
}

/// Runs one parse-then-format conversion in a fixed direction.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    direction: Direction,
}

impl Converter {
    /// Create a converter for the given direction.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// The direction this converter runs in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Parse `input` in the source format.
    pub fn parse(&self, input: &str) -> Result<Table> {
        self.direction.source().parse(input)
    }

    /// Render `table` in the target format.
    pub fn format(&self, table: &Table) -> Result<String> {
        self.direction.target().format(table)
    }

    /// Parse `input` and render it in the target format.
    ///
    /// Returns the first error encountered; no partial output is produced.
    pub fn convert(&self, input: &str) -> Result<String> {
        let table = self.parse(input)?;
        self.format(&table)
    }
}

/// Convert `input` in the given direction.
pub fn convert(input: &str, direction: Direction) -> Result<String> {
    Converter::new(direction).convert(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    #[test]
    fn test_direction_formats() {
        assert_eq!(Direction::MarkdownToCsv.source(), TableFormat::Markdown);
        assert_eq!(Direction::MarkdownToCsv.target(), TableFormat::Csv);
        assert_eq!(Direction::CsvToMarkdown.source(), TableFormat::Csv);
        assert_eq!(Direction::CsvToMarkdown.target(), TableFormat::Markdown);
    }

    #[test]
    fn test_converter_follows_direction() {
        let converter = Converter::new(Direction::CsvToMarkdown);
        assert_eq!(converter.direction(), Direction::CsvToMarkdown);

        let table = converter.parse("x\n1\n").unwrap();
        assert_eq!(converter.format(&table).unwrap(), "| x |\n|---|\n| 1 |\n");
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(TableFormat::Markdown.extension(), "md");
        assert_eq!(TableFormat::Csv.extension(), "csv");
        assert_eq!(TableFormat::Csv.to_string(), "CSV");
    }

    #[test]
    fn test_csv_to_markdown() {
        let output = convert("a,b\n1,2\n3,4", Direction::CsvToMarkdown).unwrap();
        assert_eq!(output, "| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n");
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_csv_header_only_to_markdown() {
        let output = convert("h1,h2\n", Direction::CsvToMarkdown).unwrap();
        assert_eq!(output, "| h1 | h2 |\n|----|----|\n");
    }

    #[test]
    fn test_markdown_to_csv() {
        let input = "| name | city |\n|------|------|\n| Ann | Oslo, NO |\n";
        let output = convert(input, Direction::MarkdownToCsv).unwrap();
        assert_eq!(output, "name,city\nAnn,\"Oslo, NO\"\n");
    }

    #[test]
    fn test_empty_csv_fails() {
        let result = convert("", Direction::CsvToMarkdown);
        assert!(matches!(result, Err(ConvertError::ValidationError { .. })));
    }

    #[test]
    fn test_invalid_markdown_fails() {
        let result = Converter::new(Direction::MarkdownToCsv).convert("| a |\n| b |\n| 1 |");
        match result {
            Err(e) => assert_eq!(e.to_string(), "invalid markdown table: invalid separator line"),
            Ok(out) => panic!("expected failure, got {:?}", out),
        }
    }

    #[test]
    fn test_converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }
}
