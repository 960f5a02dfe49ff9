//! Run configuration resolved from command-line flags.

use std::path::Path;

use anyhow::{bail, Result};
use tabconv::{Direction, TableFormat};

/// Path that stands for stdin (as input) or stdout (as output).
pub const STDIO: &str = "-";

/// Validated configuration for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input file, or `-` for stdin.
    pub input: String,
    /// Output file, or `-` for stdout.
    pub output: String,
    /// Conversion direction.
    pub direction: Direction,
}

impl Config {
    /// Validate raw flag values.
    ///
    /// Exactly one of `to_csv` / `to_md` must be set. When no output path is
    /// given it is derived from the input path, except for stdin input which
    /// goes to stdout.
    pub fn from_args(
        input: Option<String>,
        output: Option<String>,
        to_csv: bool,
        to_md: bool,
    ) -> Result<Self> {
        let input = match input {
            Some(path) if !path.is_empty() => path,
            _ => bail!("Input file path is required (use --in <FILE>)"),
        };

        let direction = match (to_csv, to_md) {
            (true, false) => Direction::MarkdownToCsv,
            (false, true) => Direction::CsvToMarkdown,
            _ => bail!("Must specify exactly one of --to-csv or --to-md"),
        };

        let output = match output {
            Some(path) if !path.is_empty() => path,
            _ if input == STDIO => STDIO.to_string(),
            _ => default_output_path(&input, direction.target()),
        };

        Ok(Self {
            input,
            output,
            direction,
        })
    }
}

/// Replace the extension of `input` with the one used by `format`.
pub fn default_output_path(input: &str, format: TableFormat) -> String {
    Path::new(input)
        .with_extension(format.extension())
        .to_string_lossy()
        .into_owned()
}
