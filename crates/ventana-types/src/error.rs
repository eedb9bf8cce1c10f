//! Error types for ventana.

use chrono::NaiveDate;
use thiserror::Error;

use crate::Instrument;

/// Result type alias for ventana operations.
pub type Result<T> = std::result::Result<T, VentanaError>;

/// Errors that can occur while computing windows and returns or fetching prices.
#[derive(Error, Debug)]
pub enum VentanaError {
    /// The reference date is not a trading session of the exchange.
    #[error("Invalid reference date: {date} is not a {exchange} session")]
    InvalidReferenceDate {
        /// The rejected reference date.
        date: NaiveDate,
        /// Exchange code of the calendar.
        exchange: String,
    },

    /// The calendar has no session data covering the requested date.
    #[error("No {exchange} calendar data for {date}")]
    NoCalendarData {
        /// The date outside calendar coverage.
        date: NaiveDate,
        /// Exchange code of the calendar.
        exchange: String,
    },

    /// A calendar operation needed a session and got a closed date.
    #[error("{date} is not a {exchange} session")]
    NotASession {
        /// The closed date.
        date: NaiveDate,
        /// Exchange code of the calendar.
        exchange: String,
    },

    /// The price table has no price for the instrument on the session.
    #[error("Missing {instrument} price for {date}")]
    MissingPrice {
        /// The instrument column that was looked up.
        instrument: Instrument,
        /// The session row that was looked up.
        date: NaiveDate,
    },

    /// The price table holds a zero, negative or non-finite price.
    #[error("Invalid {instrument} price {price} for {date}")]
    InvalidPrice {
        /// The instrument column that was looked up.
        instrument: Instrument,
        /// The session row that was looked up.
        date: NaiveDate,
        /// The rejected price.
        price: f64,
    },

    /// Annualization over a zero-day holding period.
    #[error("Division by zero: holding period of 0 calendar days cannot be annualized")]
    DivisionByZero,

    /// A window could not be built from the given sessions.
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid data format.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No data available for the requested period.
    #[error("No data available for {instrument} in requested range")]
    NoDataAvailable {
        /// The instrument that had no data.
        instrument: Instrument,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
