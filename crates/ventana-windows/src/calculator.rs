//! Window calculation against an exchange calendar.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;
use ventana_calendar::{Direction, ExchangeCalendar};
use ventana_types::{DateWindow, Period, Result, Session, VentanaError, WindowSet};

use crate::anchor::{period_start, previous_period_start, trailing_anchor};

/// Computes the six return windows ending on `reference`.
///
/// Windows are returned in [`Period::all`] order.
///
/// # Errors
///
/// Returns [`VentanaError::InvalidReferenceDate`] if `reference` is not a
/// session of `calendar` (including dates outside its coverage), and
/// [`VentanaError::NoCalendarData`] if a window reaches past the calendar's
/// first session.
pub fn compute_windows<C>(reference: NaiveDate, calendar: &C) -> Result<WindowSet>
where
    C: ExchangeCalendar + ?Sized,
{
    validate_reference(reference, calendar)?;
    let previous = previous_business_day(reference, calendar)?;

    let windows = Period::all()
        .iter()
        .map(|period| build_window(reference, calendar, *period))
        .collect::<Result<Vec<_>>>()?;

    WindowSet::new(reference, previous, windows)
}

/// Computes the window of a single period ending on `reference`.
///
/// # Errors
///
/// Same as [`compute_windows`].
pub fn compute_window<C>(reference: NaiveDate, calendar: &C, period: Period) -> Result<DateWindow>
where
    C: ExchangeCalendar + ?Sized,
{
    validate_reference(reference, calendar)?;
    build_window(reference, calendar, period)
}

/// Returns the business day before `reference`.
///
/// Steps back three days from a Monday and one day otherwise; if that day is
/// closed, takes the nearest earlier session.
///
/// # Errors
///
/// Returns [`VentanaError::NoCalendarData`] if no earlier session is covered.
pub fn previous_business_day<C>(reference: NaiveDate, calendar: &C) -> Result<Session>
where
    C: ExchangeCalendar + ?Sized,
{
    let back = if reference.weekday() == Weekday::Mon { 3 } else { 1 };
    let naive = reference
        .checked_sub_days(Days::new(back))
        .ok_or_else(|| calendar.no_data(reference))?;

    if calendar.is_session(naive) {
        Ok(naive)
    } else {
        calendar.previous_close(naive)
    }
}

fn validate_reference<C>(reference: NaiveDate, calendar: &C) -> Result<()>
where
    C: ExchangeCalendar + ?Sized,
{
    if calendar.is_session(reference) {
        Ok(())
    } else {
        Err(VentanaError::InvalidReferenceDate {
            date: reference,
            exchange: calendar.code().to_string(),
        })
    }
}

fn build_window<C>(reference: Session, calendar: &C, period: Period) -> Result<DateWindow>
where
    C: ExchangeCalendar + ?Sized,
{
    let sessions = if period.is_to_date() {
        to_date_sessions(reference, calendar, period)?
    } else {
        trailing_sessions(reference, calendar, period)?
    };
    DateWindow::new(period, sessions)
}

/// Sessions from the last close before the period's first session through
/// `reference`.
fn to_date_sessions<C>(reference: Session, calendar: &C, period: Period) -> Result<Vec<Session>>
where
    C: ExchangeCalendar + ?Sized,
{
    let start = period_start(reference, period).ok_or_else(|| calendar.no_data(reference))?;
    let mut first = calendar.date_to_session(start, Direction::Next)?;

    // On the period's first session, measure over the previous period instead.
    if first == reference {
        let previous =
            previous_period_start(reference, period).ok_or_else(|| calendar.no_data(reference))?;
        first = calendar.date_to_session(previous, Direction::Next)?;
        debug!(%reference, %period, %first, "re-anchored to previous period");
    }

    let elapsed = calendar.sessions_in_range(first, reference)?.len();
    let count = i64::try_from(elapsed + 1)
        .map_err(|_| VentanaError::InvalidWindow(format!("{period} window is too long")))?;
    calendar.sessions_window(reference, -count)
}

/// Sessions from the session on or before the calendar-month anchor through
/// `reference`.
fn trailing_sessions<C>(reference: Session, calendar: &C, period: Period) -> Result<Vec<Session>>
where
    C: ExchangeCalendar + ?Sized,
{
    let anchor = trailing_anchor(reference, period).ok_or_else(|| calendar.no_data(reference))?;
    let anchor_session = calendar.date_to_session(anchor, Direction::Previous)?;
    debug!(%reference, %period, %anchor, %anchor_session, "trailing anchor");
    calendar.sessions_in_range(anchor_session, reference)
}
