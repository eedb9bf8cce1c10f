//! Return records over date windows.

use tracing::debug;
use ventana_types::{DateWindow, Instrument, PriceSeries, Result, ReturnRecord, WindowSet};

use crate::math::{annualize, calendar_days_between, raw_return};

/// Computes the return of `instrument` over every window of `windows`.
///
/// Records follow the order of `windows`.
///
/// # Errors
///
/// Fails on the first window that fails; no partial result is returned.
/// See [`compute_return`].
pub fn compute_returns(
    series: &PriceSeries,
    windows: &WindowSet,
    instrument: Instrument,
) -> Result<Vec<ReturnRecord>> {
    windows
        .iter()
        .map(|window| compute_return(series, window, instrument))
        .collect()
}

/// Computes the return of `instrument` between the first and last session of
/// `window`.
///
/// # Errors
///
/// Returns [`VentanaError::MissingPrice`] if either end of the window has no
/// price, [`VentanaError::InvalidPrice`] if that price is zero, negative or not
/// finite, and [`VentanaError::DivisionByZero`] if the window spans zero
/// calendar days.
///
/// [`VentanaError::MissingPrice`]: ventana_types::VentanaError::MissingPrice
/// [`VentanaError::InvalidPrice`]: ventana_types::VentanaError::InvalidPrice
/// [`VentanaError::DivisionByZero`]: ventana_types::VentanaError::DivisionByZero
pub fn compute_return(
    series: &PriceSeries,
    window: &DateWindow,
    instrument: Instrument,
) -> Result<ReturnRecord> {
    let period = window.period();
    let start = window.start();
    let end = window.end();
    let price_start = series.get(start, instrument)?;
    let price_end = series.get(end, instrument)?;

    let holding_days = calendar_days_between(start, end);
    let raw = raw_return(price_start, price_end);
    let annualized = annualize(raw, holding_days)?;
    debug!(%instrument, %period, %start, %end, holding_days, raw, "computed return");

    Ok(ReturnRecord {
        period,
        start,
        end,
        holding_days,
        raw_return_pct: raw * 100.0,
        annualized_return_pct: annualized * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;
    use ventana_calendar::{ExchangeCalendar, XmexCalendar};
    use ventana_types::{Period, PricePoint, VentanaError};
    use ventana_windows::{compute_window, compute_windows};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A steadily rising price for every XMEX session from December 2022 on.
    fn rising_series(instrument: Instrument) -> PriceSeries {
        let cal = XmexCalendar::new();
        let sessions = cal
            .sessions_in_range(date(2022, 12, 1), date(2024, 12, 31))
            .unwrap();
        let mut series = PriceSeries::new();
        series.insert_column(
            instrument,
            sessions
                .into_iter()
                .enumerate()
                .map(|(i, d)| PricePoint::new(d, 100.0 + i as f64 * 0.25)),
        );
        series
    }

    #[test]
    fn test_month_to_date_return_mid_month() {
        let cal = XmexCalendar::new();
        let series = rising_series(Instrument::Ivv);
        let reference = date(2024, 6, 12);
        let window = compute_window(reference, &cal, Period::MonthToDate).unwrap();

        let elapsed = cal.sessions_in_range(date(2024, 6, 1), reference).unwrap();
        assert_eq!(window.len(), elapsed.len() + 1);

        let record = compute_return(&series, &window, Instrument::Ivv).unwrap();
        let start = series.price(window.start(), Instrument::Ivv).unwrap();
        let end = series.price(reference, Instrument::Ivv).unwrap();
        assert_abs_diff_eq!(record.raw_return_pct, (end / start - 1.0) * 100.0, epsilon = 1e-9);
        assert_eq!(record.holding_days, 12);
        assert_abs_diff_eq!(
            record.annualized_return_pct,
            record.raw_return_pct / 12.0 * 360.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_missing_start_price_aborts() {
        let cal = XmexCalendar::new();
        let reference = date(2024, 6, 12);
        let base = date(2024, 5, 31);
        let windows = compute_windows(reference, &cal).unwrap();

        let mut series = PriceSeries::new();
        series.insert_column(
            Instrument::Gld,
            rising_series(Instrument::Gld)
                .column(Instrument::Gld)
                .into_iter()
                .filter(|p| p.date != base),
        );

        let result = compute_returns(&series, &windows, Instrument::Gld);
        assert!(matches!(
            result,
            Err(VentanaError::MissingPrice { instrument: Instrument::Gld, date }) if date == base
        ));
    }

    #[test]
    fn test_missing_instrument_column() {
        let cal = XmexCalendar::new();
        let series = rising_series(Instrument::Xlv);
        let windows = compute_windows(date(2024, 6, 12), &cal).unwrap();
        assert!(matches!(
            compute_returns(&series, &windows, Instrument::Mchi),
            Err(VentanaError::MissingPrice { .. })
        ));
    }

    #[test]
    fn test_360_day_window_annualizes_to_raw() {
        let start = date(2023, 6, 16);
        let end = date(2024, 6, 10);
        assert_eq!(calendar_days_between(start, end), 360);

        let mut series = PriceSeries::new();
        series.insert(start, Instrument::Govt, 22.40);
        series.insert(end, Instrument::Govt, 23.15);
        let window = DateWindow::new(Period::Last365Sessions, vec![start, end]).unwrap();

        let record = compute_return(&series, &window, Instrument::Govt).unwrap();
        assert_abs_diff_eq!(
            record.annualized_return_pct,
            record.raw_return_pct,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_single_session_window_is_division_by_zero() {
        let day = date(2024, 6, 12);
        let mut series = PriceSeries::new();
        series.insert(day, Instrument::Ivv, 540.0);
        let window = DateWindow::new(Period::MonthToDate, vec![day]).unwrap();
        assert!(matches!(
            compute_return(&series, &window, Instrument::Ivv),
            Err(VentanaError::DivisionByZero)
        ));
    }

    #[test]
    fn test_zero_start_price_is_rejected() {
        let start = date(2024, 5, 31);
        let end = date(2024, 6, 12);
        let mut series = PriceSeries::new();
        series.insert(start, Instrument::Xlv, 0.0);
        series.insert(end, Instrument::Xlv, 147.0);
        let window = DateWindow::new(Period::MonthToDate, vec![start, end]).unwrap();

        assert!(matches!(
            compute_return(&series, &window, Instrument::Xlv),
            Err(VentanaError::InvalidPrice { date, .. }) if date == start
        ));
    }

    #[test]
    fn test_nan_price_aborts_all_windows() {
        let cal = XmexCalendar::new();
        let reference = date(2024, 6, 12);
        let windows = compute_windows(reference, &cal).unwrap();
        let mut series = rising_series(Instrument::Ivv);
        series.insert(reference, Instrument::Ivv, f64::NAN);

        assert!(matches!(
            compute_returns(&series, &windows, Instrument::Ivv),
            Err(VentanaError::InvalidPrice { instrument: Instrument::Ivv, date, .. }) if date == reference
        ));
    }

    #[test]
    fn test_records_follow_window_order() {
        let cal = XmexCalendar::new();
        let series = rising_series(Instrument::Mchi);
        let windows = compute_windows(date(2024, 10, 15), &cal).unwrap();
        let records = compute_returns(&series, &windows, Instrument::Mchi).unwrap();

        assert_eq!(records.len(), windows.len());
        for (record, window) in records.iter().zip(&windows) {
            assert_eq!(record.period, window.period());
            assert_eq!(record.start, window.start());
            assert_eq!(record.end, window.end());
            assert!(record.holding_days >= 1);
            assert!(record.raw_return_pct > 0.0);
        }
        assert_eq!(
            records,
            compute_returns(&series, &windows, Instrument::Mchi).unwrap()
        );
    }
}
