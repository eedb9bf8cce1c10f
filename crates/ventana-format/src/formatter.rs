//! Output format abstraction.

use serde::Serialize;
use std::io::Write;
use thiserror::Error;
use ventana_types::{Instrument, PricePoint, PriceSeries, ReturnRecord, Session};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// Tab-separated values.
    Tsv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Tsv, Self::Json, Self::Ndjson]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The close price history of one instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    /// The instrument the prices belong to.
    pub instrument: Instrument,
    /// Prices in date order.
    pub points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Creates a price history.
    #[must_use]
    pub const fn new(instrument: Instrument, points: Vec<PricePoint>) -> Self {
        Self { instrument, points }
    }

    /// Extracts one instrument's column from a price table.
    #[must_use]
    pub fn from_series(series: &PriceSeries, instrument: Instrument) -> Self {
        Self::new(instrument, series.column(instrument))
    }

    /// Returns the number of prices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no prices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = PriceRow> + '_ {
        self.points.iter().map(|p| PriceRow {
            date: p.date,
            instrument: self.instrument,
            price: p.price,
        })
    }
}

/// Flat price record as written to files.
#[derive(Debug, Serialize)]
pub(crate) struct PriceRow {
    pub(crate) date: Session,
    pub(crate) instrument: Instrument,
    pub(crate) price: f64,
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a return table to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_returns<W: Write + Send>(
        &self,
        records: &[ReturnRecord],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes a price history to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_prices<W: Write + Send>(
        &self,
        history: &PriceHistory,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
        assert!(matches!(
            "parquet".parse::<OutputFormat>(),
            Err(FormatError::UnknownFormat(_))
        ));
        for format in OutputFormat::all() {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), *format);
        }
    }

    #[test]
    fn test_price_history_from_series() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let mut series = PriceSeries::new();
        series.insert(day, Instrument::Gld, 215.3);
        series.insert(day, Instrument::Ivv, 544.9);

        let history = PriceHistory::from_series(&series, Instrument::Gld);
        assert_eq!(history.len(), 1);
        assert_eq!(history.points[0], PricePoint::new(day, 215.3));
        assert!(PriceHistory::from_series(&series, Instrument::Xlv).is_empty());
    }
}
