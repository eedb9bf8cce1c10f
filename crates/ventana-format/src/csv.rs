//! CSV output format.

use std::io::Write;
use ventana_types::ReturnRecord;

use crate::{FormatError, Formatter, PriceHistory};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_returns<W: Write + Send>(
        &self,
        records: &[ReturnRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "period{d}start{d}end{d}holding_days{d}raw_return_pct{d}annualized_return_pct"
            )?;
        }

        for record in records {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                record.period.as_str(),
                record.start,
                record.end,
                record.holding_days,
                record.raw_return_pct,
                record.annualized_return_pct
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    fn write_prices<W: Write + Send>(
        &self,
        history: &PriceHistory,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "date{d}instrument{d}price")?;
        }

        for row in history.rows() {
            writeln!(writer, "{}{d}{}{d}{}", row.date, row.instrument, row.price)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
