//! Exchange trading calendars for the ventana trailing-returns calculator.
//!
//! This crate provides the session calendar the window calculator walks over:
//!
//! - [`ExchangeCalendar`] - Session membership, nearest-session lookup and
//!   session enumeration
//! - [`XmexCalendar`] - The Mexican Stock Exchange calendar
//! - [`CalendarRegistry`] - Calendars keyed by exchange code
//!
//! # Example
//!
//! ```
//! use ventana_calendar::{CalendarRegistry, Direction};
//!
//! let registry = CalendarRegistry::global();
//! let xmex = registry.get("xmex").expect("XMEX is registered");
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 29).unwrap();
//! assert!(!xmex.is_session(date));
//! let session = xmex.date_to_session(date, Direction::Previous).unwrap();
//! assert_eq!(session.to_string(), "2024-03-27");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ventana/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calendar;
mod holidays;
mod xmex;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use calendar::{CalendarBounds, Direction, ExchangeCalendar, WeekdayCalendar};
pub use holidays::easter_sunday;
pub use xmex::{XMEX, XmexCalendar};

/// Global calendar registry instance.
static REGISTRY: OnceLock<CalendarRegistry> = OnceLock::new();

/// Builds a calendar covering the given bounds.
type CalendarBuilder = fn(CalendarBounds) -> Box<dyn ExchangeCalendar>;

#[derive(Debug)]
struct Entry {
    calendar: Box<dyn ExchangeCalendar>,
    build: CalendarBuilder,
}

/// Registry of the supported exchange calendars.
///
/// Each exchange code maps to a builder taking calendar bounds, along with an
/// instance built with the default bounds.
#[derive(Debug)]
pub struct CalendarRegistry {
    entries: HashMap<String, Entry>,
}

impl CalendarRegistry {
    /// Returns the global calendar registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    fn load() -> Self {
        let mut registry = Self {
            entries: HashMap::new(),
        };
        registry.register(XMEX, |bounds| Box::new(XmexCalendar::with_bounds(bounds)));
        registry
    }

    fn register(&mut self, code: &str, build: CalendarBuilder) {
        let entry = Entry {
            calendar: build(CalendarBounds::default()),
            build,
        };
        self.entries.insert(code.to_lowercase(), entry);
    }

    /// Looks up a calendar with default bounds by exchange code
    /// (case-insensitive).
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&dyn ExchangeCalendar> {
        self.entries
            .get(&code.to_lowercase())
            .map(|entry| &*entry.calendar)
    }

    /// Builds the calendar of an exchange code with custom bounds.
    ///
    /// Returns `None` for unknown exchange codes.
    #[must_use]
    pub fn with_bounds(
        &self,
        code: &str,
        bounds: CalendarBounds,
    ) -> Option<Box<dyn ExchangeCalendar>> {
        self.entries
            .get(&code.to_lowercase())
            .map(|entry| (entry.build)(bounds))
    }

    /// Returns all registered exchange codes sorted alphabetically.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.values().map(|e| e.calendar.code()).collect();
        codes.sort_unstable();
        codes
    }

    /// Returns the number of registered calendars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = CalendarRegistry::global();
        assert!(!registry.is_empty());
        assert_eq!(registry.codes(), vec!["XMEX"]);
    }

    #[test]
    fn test_get_case_insensitive() {
        let registry = CalendarRegistry::global();
        assert!(registry.get("XMEX").is_some());
        assert!(registry.get("xmex").is_some());
        assert!(registry.get("XNYS").is_none());
    }

    #[test]
    fn test_default_instance_has_default_bounds() {
        let cal = CalendarRegistry::global().get("xmex").unwrap();
        assert_eq!(cal.bounds(), CalendarBounds::default());
    }

    #[test]
    fn test_with_bounds() {
        let registry = CalendarRegistry::global();
        let first = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let last = chrono::NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let bounds = CalendarBounds::new(first, last).unwrap();

        let cal = registry.with_bounds("Xmex", bounds).unwrap();
        assert_eq!(cal.code(), "XMEX");
        assert_eq!(cal.bounds(), bounds);
        assert!(!cal.covers(chrono::NaiveDate::from_ymd_opt(2021, 1, 4).unwrap()));
        assert!(registry.with_bounds("XLON", bounds).is_none());
    }
}
