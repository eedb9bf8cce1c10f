//! Yahoo! Finance chart URL construction.

use ventana_types::{DateRange, Instrument};

/// Base URL of the Yahoo! Finance v8 chart endpoint.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Builds the daily chart URL for an instrument over a date range.
///
/// URL format:
/// `{BASE_URL}/{TICKER}?period1={start}&period2={end}&interval=1d&events=div%7Csplit`
/// where `start` is UTC midnight of the first day and `end` is UTC midnight
/// after the last day, both as Unix seconds.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ventana_fetch::url::chart_url;
/// use ventana_types::{DateRange, Instrument};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let url = chart_url(Instrument::Ivv, DateRange::single_day(day));
/// assert_eq!(
///     url,
///     "https://query1.finance.yahoo.com/v8/finance/chart/IVV?period1=1704153600&period2=1704240000&interval=1d&events=div%7Csplit"
/// );
/// ```
#[must_use]
pub fn chart_url(instrument: Instrument, range: DateRange) -> String {
    format!(
        "{}/{}?period1={}&period2={}&interval=1d&events=div%7Csplit",
        BASE_URL,
        instrument.ticker(),
        range.start_utc().timestamp(),
        range.end_utc_exclusive().timestamp()
    )
}
