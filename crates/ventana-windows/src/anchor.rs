//! Calendar-date anchors for each period.

use chrono::{Datelike, Months, NaiveDate};
use ventana_types::Period;

/// Returns the first calendar day of the reference date's month or year.
///
/// Returns `None` for trailing periods.
#[must_use]
pub fn period_start(reference: NaiveDate, period: Period) -> Option<NaiveDate> {
    match period {
        Period::MonthToDate => reference.with_day(1),
        Period::YearToDate => NaiveDate::from_ymd_opt(reference.year(), 1, 1),
        _ => None,
    }
}

/// Returns the first calendar day of the month or year before the reference
/// date's.
///
/// Returns `None` for trailing periods.
#[must_use]
pub fn previous_period_start(reference: NaiveDate, period: Period) -> Option<NaiveDate> {
    match period {
        Period::MonthToDate => reference.checked_sub_months(Months::new(1))?.with_day(1),
        Period::YearToDate => NaiveDate::from_ymd_opt(reference.year() - 1, 1, 1),
        _ => None,
    }
}

/// Returns the reference date moved back by the period's calendar months.
///
/// The day is clamped to the end of the target month (March 31 minus one month
/// is February 28 or 29). Returns `None` for to-date periods.
#[must_use]
pub fn trailing_anchor(reference: NaiveDate, period: Period) -> Option<NaiveDate> {
    let months = period.months()?;
    reference.checked_sub_months(Months::new(months))
}
