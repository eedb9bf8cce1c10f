//! Return formulas.

use chrono::NaiveDate;
use ventana_types::{Result, VentanaError};

/// Days in the year used to annualize returns.
pub const DAY_COUNT_BASIS: f64 = 360.0;

/// Returns the simple return between two prices as a fraction.
#[must_use]
pub fn raw_return(price_start: f64, price_end: f64) -> f64 {
    price_end / price_start - 1.0
}

/// Scales a raw return linearly to a [`DAY_COUNT_BASIS`]-day year.
///
/// # Errors
///
/// Returns [`VentanaError::DivisionByZero`] if `holding_days` is zero.
pub fn annualize(raw: f64, holding_days: i64) -> Result<f64> {
    if holding_days == 0 {
        return Err(VentanaError::DivisionByZero);
    }
    Ok(raw / holding_days as f64 * DAY_COUNT_BASIS)
}

/// Returns the number of calendar days from `start` to `end`.
#[must_use]
pub fn calendar_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_raw_return() {
        assert_relative_eq!(raw_return(100.0, 110.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(raw_return(50.0, 40.0), -0.2, epsilon = 1e-12);
        assert_eq!(raw_return(42.0, 42.0), 0.0);
    }

    #[test]
    fn test_annualize() {
        assert_relative_eq!(annualize(0.01, 36).unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(annualize(0.05, 360).unwrap(), 0.05, epsilon = 1e-12);
        assert!(matches!(annualize(0.05, 0), Err(VentanaError::DivisionByZero)));
    }

    #[test]
    fn test_calendar_days_between() {
        assert_eq!(calendar_days_between(date(2024, 5, 31), date(2024, 6, 12)), 12);
        assert_eq!(calendar_days_between(date(2023, 12, 29), date(2024, 12, 31)), 368);
        assert_eq!(calendar_days_between(date(2024, 6, 12), date(2024, 6, 12)), 0);
        assert!(calendar_days_between(date(2024, 6, 7), date(2024, 6, 10)) >= 1);
    }
}
