mod config;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use tabconv::Converter;

use config::{Config, STDIO};

/// Convert markdown pipe tables to CSV and back
#[derive(Parser)]
#[command(name = "tabconv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Convert from markdown to CSV
    #[arg(long)]
    to_csv: bool,

    /// Convert from CSV to markdown
    #[arg(long)]
    to_md: bool,

    /// Input file path (use '-' for stdin)
    #[arg(long = "in", value_name = "FILE")]
    input: Option<String>,

    /// Output file path (defaults to the input path with the target extension)
    #[arg(long = "out", value_name = "FILE")]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = Config::from_args(cli.input, cli.output, cli.to_csv, cli.to_md)?;
    debug!("Resolved configuration: {:?}", config);

    let content = read_input(&config.input)?;
    debug!("Input size: {} bytes", content.len());

    let converter = Converter::new(config.direction);
    let direction = converter.direction();
    let table = converter
        .parse(&content)
        .context("Error converting input")?;
    debug!(
        "Parsed {} as {} columns, {} rows",
        direction.source(),
        table.column_count(),
        table.row_count()
    );

    let output = converter
        .format(&table)
        .context("Error formatting output")?;
    debug!("Output size: {} bytes", output.len());

    write_output(&config.output, &output)?;

    if !cli.quiet && config.output != STDIO {
        println!(
            "Successfully converted to {}: {}",
            direction.target(),
            config.output
        );
    }

    Ok(())
}

/// Set up logging based on verbosity flags; `RUST_LOG` takes precedence.
fn setup_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// Read input from file or stdin
fn read_input(input: &str) -> Result<String> {
    if input == STDIO {
        // Piped table text
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        // Whole file, decoded as UTF-8
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}

/// Write output to file or stdout
fn write_output(output: &str, content: &str) -> Result<()> {
    if output == STDIO {
        // Stdout carries only the converted table
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
    } else {
        // Single write once conversion has fully succeeded
        fs::write(output, content)
            .with_context(|| format!("Failed to write output file: {}", output))?;
    }
    Ok(())
}
