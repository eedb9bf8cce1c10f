//! Trading-calendar-aware trailing returns for a fixed ETF universe.
//!
//! This is a facade crate that re-exports functionality from the ventana
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use ventana_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let calendar = XmexCalendar::new();
//!     let reference = chrono::NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
//!     let windows = compute_windows(reference, &calendar)?;
//!
//!     let client = PriceClient::with_defaults()?;
//!     let range = DateRange::new(windows.iter().map(|w| w.start()).min().unwrap(), reference)?;
//!     let prices = fetch_prices(&client, Instrument::all(), range).await?;
//!
//!     for record in compute_returns(&prices, &windows, Instrument::Ivv)? {
//!         println!("{record}");
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ventana/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use ventana_types::*;

// Re-export calendars
pub use ventana_calendar::{
    CalendarBounds, CalendarRegistry, Direction, ExchangeCalendar, WeekdayCalendar, XMEX,
    XmexCalendar, easter_sunday,
};

// Re-export the window and return calculators
pub use ventana_returns::{
    DAY_COUNT_BASIS, annualize, calendar_days_between, compute_return, compute_returns,
    raw_return,
};
pub use ventana_windows::{
    compute_window, compute_windows, period_start, previous_business_day, previous_period_start,
    trailing_anchor,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use ventana_fetch::{
    ClientConfig, DailyClose, FetchError, PriceClient, fetch_instrument, fetch_prices,
    parse_chart, url,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use ventana_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, PriceHistory,
};

/// Computes the windows for `reference` and the returns of `instrument` over
/// them.
///
/// # Errors
///
/// Fails if the windows cannot be computed for `reference` or any window
/// lacks a price; see [`compute_windows`] and [`compute_returns`].
pub fn trailing_returns<C>(
    series: &PriceSeries,
    calendar: &C,
    reference: Session,
    instrument: Instrument,
) -> Result<(WindowSet, Vec<ReturnRecord>)>
where
    C: ExchangeCalendar + ?Sized,
{
    let windows = compute_windows(reference, calendar)?;
    let records = compute_returns(series, &windows, instrument)?;
    tracing::info!(%instrument, %reference, records = records.len(), "computed trailing returns");
    Ok((windows, records))
}

/// Returns the date range a price download must cover for `windows`.
///
/// # Errors
///
/// Returns an error if the set holds no windows.
pub fn required_range(windows: &WindowSet) -> Result<DateRange> {
    let start = windows
        .iter()
        .map(DateWindow::start)
        .min()
        .ok_or_else(|| VentanaError::InvalidWindow("no windows to cover".to_string()))?;
    Ok(DateRange::new(start, windows.reference())?)
}

/// Prelude module for convenient imports.
///
/// ```
/// use ventana_lib::prelude::*;
/// ```
pub mod prelude {
    pub use ventana_types::{
        DateRange, DateWindow, Instrument, Period, PricePoint, PriceSeries, Result, ReturnRecord,
        Session, VentanaError, WindowSet,
    };

    pub use ventana_calendar::{CalendarRegistry, Direction, ExchangeCalendar, XmexCalendar};
    pub use ventana_returns::compute_returns;
    pub use ventana_windows::compute_windows;

    pub use crate::{required_range, trailing_returns};

    #[cfg(feature = "fetch")]
    pub use ventana_fetch::{ClientConfig, PriceClient, fetch_prices};

    #[cfg(feature = "format")]
    pub use ventana_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat, PriceHistory};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trailing_returns_end_to_end() {
        let calendar = XmexCalendar::new();
        let reference = date(2024, 6, 12);
        let sessions = calendar
            .sessions_in_range(date(2023, 6, 1), reference)
            .unwrap();

        let mut series = PriceSeries::new();
        for session in &sessions {
            series.insert(*session, Instrument::Xlv, 140.0);
        }
        series.insert(reference, Instrument::Xlv, 147.0);

        let (windows, records) =
            trailing_returns(&series, &calendar, reference, Instrument::Xlv).unwrap();
        assert_eq!(records.len(), windows.len());
        for record in &records {
            assert_relative_eq!(record.raw_return_pct, 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_required_range_spans_longest_window() {
        let calendar = XmexCalendar::new();
        let reference = date(2024, 6, 12);
        let windows = compute_windows(reference, &calendar).unwrap();
        let range = required_range(&windows).unwrap();
        assert_eq!(range.start, date(2023, 6, 12));
        assert_eq!(range.end, reference);
    }

    #[test]
    fn test_trailing_returns_rejects_holiday() {
        let calendar = XmexCalendar::new();
        let series = PriceSeries::new();
        assert!(matches!(
            trailing_returns(&series, &calendar, date(2024, 12, 12), Instrument::Ivv),
            Err(VentanaError::InvalidReferenceDate { .. })
        ));
    }
}
