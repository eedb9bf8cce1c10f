//! The exchange calendar abstraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ventana_types::{DateRange, Result, Session, VentanaError};

/// Direction in which to look for the nearest session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Look forward in time.
    Next,
    /// Look backward in time.
    Previous,
}

impl Direction {
    /// Steps a date one day in this direction.
    fn step(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Next => date.succ_opt(),
            Self::Previous => date.pred_opt(),
        }
    }
}

/// First and last date a calendar has session data for (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarBounds {
    /// Earliest covered date.
    pub first: NaiveDate,
    /// Latest covered date.
    pub last: NaiveDate,
}

impl CalendarBounds {
    /// Creates calendar bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `first` is after `last`.
    pub fn new(first: NaiveDate, last: NaiveDate) -> Result<Self> {
        let range = DateRange::new(first, last)?;
        Ok(Self {
            first: range.start,
            last: range.end,
        })
    }

    /// Returns true if the date lies within the bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last
    }
}

impl Default for CalendarBounds {
    fn default() -> Self {
        Self {
            first: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or(NaiveDate::MIN),
            last: NaiveDate::from_ymd_opt(2099, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

/// A trading calendar for one exchange.
///
/// Implementors only decide session membership and coverage; the lookup and
/// enumeration operations are provided on top of [`is_session`].
///
/// Every provided operation fails with [`VentanaError::NoCalendarData`] when it
/// would need a date outside [`bounds`].
///
/// [`is_session`]: ExchangeCalendar::is_session
/// [`bounds`]: ExchangeCalendar::bounds
pub trait ExchangeCalendar: Send + Sync + std::fmt::Debug {
    /// Returns the exchange code (e.g. `XMEX`).
    fn code(&self) -> &str;

    /// Returns the dates this calendar covers.
    fn bounds(&self) -> CalendarBounds;

    /// Returns true if the date is a trading session.
    ///
    /// Dates outside the calendar's bounds are never sessions.
    fn is_session(&self, date: NaiveDate) -> bool;

    /// Returns the name of the exchange holiday falling on `date`, if any.
    fn holiday_name(&self, _date: NaiveDate) -> Option<&'static str> {
        None
    }

    /// Returns true if the calendar has data for the date.
    fn covers(&self, date: NaiveDate) -> bool {
        self.bounds().contains(date)
    }

    /// Returns the nearest session strictly before `date`.
    ///
    /// # Errors
    ///
    /// Returns [`VentanaError::NoCalendarData`] if `date` is outside the bounds
    /// or no earlier session is covered.
    fn previous_close(&self, date: NaiveDate) -> Result<Session> {
        self.check_coverage(date)?;
        let prior = date.pred_opt().ok_or_else(|| self.no_data(date))?;
        if !self.covers(prior) {
            return Err(self.no_data(prior));
        }
        self.date_to_session(prior, Direction::Previous)
    }

    /// Returns `date` if it is a session, otherwise the nearest session in
    /// `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`VentanaError::NoCalendarData`] if the search leaves the bounds.
    fn date_to_session(&self, date: NaiveDate, direction: Direction) -> Result<Session> {
        self.check_coverage(date)?;
        let mut current = date;
        loop {
            if self.is_session(current) {
                return Ok(current);
            }
            current = direction
                .step(current)
                .filter(|d| self.covers(*d))
                .ok_or_else(|| self.no_data(current))?;
        }
    }

    /// Returns all sessions from `start` through `end`, inclusive, ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if `start > end` or either end is outside the bounds.
    fn sessions_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Session>> {
        let range = DateRange::new(start, end)?;
        self.check_coverage(start)?;
        self.check_coverage(end)?;
        Ok(range.days().filter(|d| self.is_session(*d)).collect())
    }

    /// Returns `|offset|` sessions including `anchor`, ascending.
    ///
    /// A negative offset walks backward from `anchor` (which ends the window),
    /// a positive one walks forward (`anchor` starts the window).
    ///
    /// # Errors
    ///
    /// Returns [`VentanaError::NotASession`] if `anchor` is closed,
    /// [`VentanaError::InvalidWindow`] for a zero offset and
    /// [`VentanaError::NoCalendarData`] if the walk leaves the bounds.
    fn sessions_window(&self, anchor: Session, offset: i64) -> Result<Vec<Session>> {
        if offset == 0 {
            return Err(VentanaError::InvalidWindow(
                "session window offset must be non-zero".to_string(),
            ));
        }
        self.check_coverage(anchor)?;
        if !self.is_session(anchor) {
            return Err(VentanaError::NotASession {
                date: anchor,
                exchange: self.code().to_string(),
            });
        }

        let direction = if offset < 0 {
            Direction::Previous
        } else {
            Direction::Next
        };
        let count = offset.unsigned_abs() as usize;
        let mut sessions = Vec::with_capacity(count);
        sessions.push(anchor);
        let mut current = anchor;
        while sessions.len() < count {
            let step = direction
                .step(current)
                .filter(|d| self.covers(*d))
                .ok_or_else(|| self.no_data(current))?;
            current = self.date_to_session(step, direction)?;
            sessions.push(current);
        }

        if direction == Direction::Previous {
            sessions.reverse();
        }
        Ok(sessions)
    }

    /// Returns the session `n` sessions before `anchor`.
    ///
    /// # Errors
    ///
    /// Same as [`sessions_window`](ExchangeCalendar::sessions_window).
    fn session_offset(&self, anchor: Session, n: u32) -> Result<Session> {
        let window = self.sessions_window(anchor, -(i64::from(n) + 1))?;
        Ok(window[0])
    }

    /// Fails with [`VentanaError::NoCalendarData`] if the date is not covered.
    fn check_coverage(&self, date: NaiveDate) -> Result<()> {
        if self.covers(date) {
            Ok(())
        } else {
            Err(self.no_data(date))
        }
    }

    /// Builds the out-of-coverage error for a date.
    fn no_data(&self, date: NaiveDate) -> VentanaError {
        VentanaError::NoCalendarData {
            date,
            exchange: self.code().to_string(),
        }
    }
}

/// A calendar open every weekday, for tests and exchanges without holiday data.
#[derive(Debug, Clone, Default)]
pub struct WeekdayCalendar {
    bounds: CalendarBounds,
}

impl WeekdayCalendar {
    /// Creates a weekday calendar with the given bounds.
    #[must_use]
    pub const fn new(bounds: CalendarBounds) -> Self {
        Self { bounds }
    }
}

impl ExchangeCalendar for WeekdayCalendar {
    fn code(&self) -> &str {
        "WEEKDAYS"
    }

    fn bounds(&self) -> CalendarBounds {
        self.bounds
    }

    fn is_session(&self, date: NaiveDate) -> bool {
        self.covers(date) && crate::holidays::is_weekday(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekdays_2024() -> WeekdayCalendar {
        WeekdayCalendar::new(CalendarBounds::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap())
    }

    #[test]
    fn test_date_to_session_directions() {
        let cal = weekdays_2024();
        // Saturday 2024-06-08
        let saturday = date(2024, 6, 8);
        assert_eq!(
            cal.date_to_session(saturday, Direction::Next).unwrap(),
            date(2024, 6, 10)
        );
        assert_eq!(
            cal.date_to_session(saturday, Direction::Previous).unwrap(),
            date(2024, 6, 7)
        );
        let wednesday = date(2024, 6, 12);
        assert_eq!(
            cal.date_to_session(wednesday, Direction::Previous).unwrap(),
            wednesday
        );
    }

    #[test]
    fn test_previous_close_is_strict() {
        let cal = weekdays_2024();
        assert_eq!(
            cal.previous_close(date(2024, 6, 11)).unwrap(),
            date(2024, 6, 10)
        );
        assert_eq!(
            cal.previous_close(date(2024, 6, 10)).unwrap(),
            date(2024, 6, 7)
        );
    }

    #[test]
    fn test_sessions_in_range_skips_weekends() {
        let cal = weekdays_2024();
        let sessions = cal
            .sessions_in_range(date(2024, 6, 7), date(2024, 6, 11))
            .unwrap();
        assert_eq!(
            sessions,
            vec![date(2024, 6, 7), date(2024, 6, 10), date(2024, 6, 11)]
        );
    }

    #[test]
    fn test_sessions_window_backward_and_forward() {
        let cal = weekdays_2024();
        let back = cal.sessions_window(date(2024, 6, 11), -3).unwrap();
        assert_eq!(
            back,
            vec![date(2024, 6, 7), date(2024, 6, 10), date(2024, 6, 11)]
        );
        let forward = cal.sessions_window(date(2024, 6, 7), 2).unwrap();
        assert_eq!(forward, vec![date(2024, 6, 7), date(2024, 6, 10)]);
        assert_eq!(cal.session_offset(date(2024, 6, 11), 2).unwrap(), date(2024, 6, 7));
    }

    #[test]
    fn test_sessions_window_errors() {
        let cal = weekdays_2024();
        assert!(matches!(
            cal.sessions_window(date(2024, 6, 8), -2),
            Err(VentanaError::NotASession { .. })
        ));
        assert!(matches!(
            cal.sessions_window(date(2024, 6, 10), 0),
            Err(VentanaError::InvalidWindow(_))
        ));
        assert!(matches!(
            cal.sessions_window(date(2024, 1, 3), -10),
            Err(VentanaError::NoCalendarData { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds() {
        let cal = weekdays_2024();
        assert!(!cal.is_session(date(2025, 1, 2)));
        assert!(matches!(
            cal.date_to_session(date(2023, 12, 29), Direction::Previous),
            Err(VentanaError::NoCalendarData { .. })
        ));
        // 2024-01-01 is a Monday; nothing earlier is covered.
        assert!(matches!(
            cal.previous_close(date(2024, 1, 1)),
            Err(VentanaError::NoCalendarData { .. })
        ));
        assert!(cal.sessions_in_range(date(2024, 2, 1), date(2024, 1, 1)).is_err());
    }
}
