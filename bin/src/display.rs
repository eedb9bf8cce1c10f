//! Display utilities and output formatting for the ventana CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;
use ventana_lib::prelude::*;

/// Output format for tables and exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Csv,
    Tsv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file format, or `None` for the terminal table.
    pub(crate) const fn output_format(self) -> Option<OutputFormat> {
        match self {
            Self::Text => None,
            Self::Csv => Some(OutputFormat::Csv),
            Self::Tsv => Some(OutputFormat::Tsv),
            Self::Json => Some(OutputFormat::Json),
            Self::Ndjson => Some(OutputFormat::Ndjson),
        }
    }
}

/// Parses a `YYYY-MM-DD` date argument.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date: {s}"))
}

/// Opens `output` for writing, or stdout when `None`.
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    Ok(match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout()),
    })
}

/// Writes return records in a file format.
pub(crate) fn write_returns(
    records: &[ReturnRecord],
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let writer = open_output(output)?;
    match format {
        OutputFormat::Csv => CsvFormatter::new().write_returns(records, writer)?,
        OutputFormat::Tsv => CsvFormatter::tsv().write_returns(records, writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_returns(records, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_returns(records, writer)?,
    }
    Ok(())
}

/// Writes a price history in a file format.
pub(crate) fn write_prices(
    history: &PriceHistory,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let writer = open_output(output)?;
    match format {
        OutputFormat::Csv => CsvFormatter::new().write_prices(history, writer)?,
        OutputFormat::Tsv => CsvFormatter::tsv().write_prices(history, writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_prices(history, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_prices(history, writer)?,
    }
    Ok(())
}

/// Renders the return table shown on the terminal.
pub(crate) fn returns_table(records: &[ReturnRecord]) -> String {
    let mut table = format!(
        "{:<15} {:<10} {:<10} {:>6} {:>14} {:>20}\n",
        "PERIOD", "START", "END", "DAYS", "RAW RETURN %", "ANNUALIZED RETURN %"
    );
    table.push_str(&"-".repeat(80));
    table.push('\n');
    for record in records {
        table.push_str(&format!(
            "{:<15} {:<10} {:<10} {:>6} {:>14.4} {:>20.4}\n",
            record.period.label(),
            record.start.to_string(),
            record.end.to_string(),
            record.holding_days,
            record.raw_return_pct,
            record.annualized_return_pct
        ));
    }
    table
}

/// Renders the window table shown on the terminal.
pub(crate) fn windows_table(windows: &WindowSet) -> String {
    let mut table = format!(
        "{:<15} {:<10} {:<10} {:>8}\n",
        "PERIOD", "START", "END", "SESSIONS"
    );
    table.push_str(&"-".repeat(46));
    table.push('\n');
    for window in windows {
        table.push_str(&format!(
            "{:<15} {:<10} {:<10} {:>8}\n",
            window.period().label(),
            window.start().to_string(),
            window.end().to_string(),
            window.len()
        ));
    }
    table
}

/// Creates a spinner on stderr, hidden in quiet mode.
pub(crate) fn spinner(message: String, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
