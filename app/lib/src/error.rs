//! Error types for table conversion.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while parsing or formatting a table.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input is well-formed but semantically unusable (e.g. an empty CSV file).
    #[error("validation error: {message}")]
    ValidationError {
        /// Description of the violated rule.
        message: String,
    },

    /// Structural violation of the markdown pipe-table grammar.
    #[error("invalid markdown table: {message}")]
    FormatError {
        /// Description of the grammar violation.
        message: String,
    },

    /// The CSV decoder rejected the input.
    #[error("failed to read CSV: {0}")]
    CsvParseError(#[source] csv::Error),

    /// Quoting in the CSV input is malformed (unterminated or stray `"`).
    #[error("failed to read CSV: line {line}, column {column}: {message}")]
    CsvSyntaxError {
        /// 1-based line of the offending quote.
        line: usize,
        /// 1-based byte column of the offending quote.
        column: usize,
        /// Description of the quoting violation.
        message: String,
    },

    /// The CSV encoder failed while writing a record.
    #[error("failed to write CSV: {0}")]
    CsvWriteError(#[source] csv::Error),

    /// Flushing the encoded output failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Encoded output was not valid UTF-8.
    #[error("encoded output is not valid UTF-8: {0}")]
    Utf8Error(#[from] FromUtf8Error),
}

impl ConvertError {
    /// Build a [`ConvertError::ValidationError`].
    pub fn validation(message: impl Into<String>) -> Self {
        ConvertError::ValidationError {
            message: message.into(),
        }
    }

    /// Build a [`ConvertError::FormatError`].
    pub fn format(message: impl Into<String>) -> Self {
        ConvertError::FormatError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = ConvertError::validation("empty CSV file");
        assert_eq!(err.to_string(), "validation error: empty CSV file");
    }

    #[test]
    fn test_format_display() {
        let err = ConvertError::format("no headers found");
        assert_eq!(err.to_string(), "invalid markdown table: no headers found");
    }

    #[test]
    fn test_csv_parse_error_exposes_source() {
        use std::error::Error as _;

        let csv_err = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,b\n1,2,3\n".as_bytes())
            .records()
            .find_map(|r| r.err())
            .expect("unequal field counts must fail");
        let err = ConvertError::CsvParseError(csv_err);

        assert!(err.to_string().starts_with("failed to read CSV: "));
        assert!(err.source().is_some());
    }
}
