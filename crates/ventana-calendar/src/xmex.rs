//! Mexican Stock Exchange (Bolsa Mexicana de Valores) calendar.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::holidays::{Holiday, HolidayRule, is_weekday};
use crate::{CalendarBounds, ExchangeCalendar};

/// Exchange code of the Mexican Stock Exchange.
pub const XMEX: &str = "XMEX";

// The 2006 labour law reform moved three civic holidays to Mondays.
static CONSTITUTION_FIXED: HolidayRule = HolidayRule::Fixed { month: 2, day: 5 };
static CONSTITUTION_MONDAY: HolidayRule = HolidayRule::NthWeekday {
    month: 2,
    weekday: Weekday::Mon,
    n: 1,
};
static JUAREZ_FIXED: HolidayRule = HolidayRule::Fixed { month: 3, day: 21 };
static JUAREZ_MONDAY: HolidayRule = HolidayRule::NthWeekday {
    month: 3,
    weekday: Weekday::Mon,
    n: 3,
};
static REVOLUTION_FIXED: HolidayRule = HolidayRule::Fixed { month: 11, day: 20 };
static REVOLUTION_MONDAY: HolidayRule = HolidayRule::NthWeekday {
    month: 11,
    weekday: Weekday::Mon,
    n: 3,
};

const LAST_FIXED_CIVIC_YEAR: i32 = 2005;

static HOLIDAYS: &[Holiday] = &[
    Holiday {
        name: "New Year's Day",
        rule: HolidayRule::Fixed { month: 1, day: 1 },
    },
    Holiday {
        name: "Constitution Day",
        rule: HolidayRule::Changed {
            until_year: LAST_FIXED_CIVIC_YEAR,
            before: &CONSTITUTION_FIXED,
            after: &CONSTITUTION_MONDAY,
        },
    },
    Holiday {
        name: "Benito Juárez's Birthday",
        rule: HolidayRule::Changed {
            until_year: LAST_FIXED_CIVIC_YEAR,
            before: &JUAREZ_FIXED,
            after: &JUAREZ_MONDAY,
        },
    },
    Holiday {
        name: "Holy Thursday",
        rule: HolidayRule::EasterOffset(-3),
    },
    Holiday {
        name: "Good Friday",
        rule: HolidayRule::EasterOffset(-2),
    },
    Holiday {
        name: "Labour Day",
        rule: HolidayRule::Fixed { month: 5, day: 1 },
    },
    Holiday {
        name: "Independence Day",
        rule: HolidayRule::Fixed { month: 9, day: 16 },
    },
    Holiday {
        name: "Day of the Dead",
        rule: HolidayRule::Fixed { month: 11, day: 2 },
    },
    Holiday {
        name: "Revolution Day",
        rule: HolidayRule::Changed {
            until_year: LAST_FIXED_CIVIC_YEAR,
            before: &REVOLUTION_FIXED,
            after: &REVOLUTION_MONDAY,
        },
    },
    Holiday {
        name: "Day of Our Lady of Guadalupe",
        rule: HolidayRule::Fixed { month: 12, day: 12 },
    },
    Holiday {
        name: "Christmas Day",
        rule: HolidayRule::Fixed { month: 12, day: 25 },
    },
];

/// Trading calendar of the Mexican Stock Exchange.
///
/// Sessions are weekdays that are not exchange holidays. Holidays that fall
/// on a weekend are not moved to a weekday.
#[derive(Debug, Clone, Default)]
pub struct XmexCalendar {
    bounds: CalendarBounds,
}

impl XmexCalendar {
    /// Creates the calendar with the default coverage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calendar covering only the given dates.
    #[must_use]
    pub const fn with_bounds(bounds: CalendarBounds) -> Self {
        Self { bounds }
    }

    /// Returns the exchange holidays of a year in date order.
    #[must_use]
    pub fn holidays(&self, year: i32) -> Vec<(NaiveDate, &'static str)> {
        let mut days: Vec<_> = HOLIDAYS
            .iter()
            .filter_map(|h| h.rule.date_in(year).map(|d| (d, h.name)))
            .collect();
        days.sort_by_key(|(d, _)| *d);
        days
    }
}

impl ExchangeCalendar for XmexCalendar {
    fn code(&self) -> &str {
        XMEX
    }

    fn bounds(&self) -> CalendarBounds {
        self.bounds
    }

    fn is_session(&self, date: NaiveDate) -> bool {
        self.covers(date) && is_weekday(date) && self.holiday_name(date).is_none()
    }

    fn holiday_name(&self, date: NaiveDate) -> Option<&'static str> {
        HOLIDAYS
            .iter()
            .find(|h| h.rule.date_in(date.year()) == Some(date))
            .map(|h| h.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_2024_holidays_closed() {
        let cal = XmexCalendar::new();
        for closed in [
            date(2024, 1, 1),
            date(2024, 2, 5),
            date(2024, 3, 18),
            date(2024, 3, 28),
            date(2024, 3, 29),
            date(2024, 5, 1),
            date(2024, 9, 16),
            date(2024, 11, 18),
            date(2024, 12, 12),
            date(2024, 12, 25),
        ] {
            assert!(!cal.is_session(closed), "{closed} should be closed");
        }
    }

    #[test]
    fn test_weekends_closed_and_weekdays_open() {
        let cal = XmexCalendar::new();
        assert!(!cal.is_session(date(2024, 6, 8)));
        assert!(!cal.is_session(date(2024, 6, 9)));
        assert!(cal.is_session(date(2024, 6, 10)));
        assert!(cal.is_session(date(2024, 3, 27)));
    }

    #[test]
    fn test_fixed_civic_holidays_before_reform() {
        let cal = XmexCalendar::new();
        // 2003-03-21 was a Friday.
        assert_eq!(
            cal.holiday_name(date(2003, 3, 21)),
            Some("Benito Juárez's Birthday")
        );
        assert!(cal.is_session(date(2003, 3, 17)));
    }

    #[test]
    fn test_holidays_sorted() {
        let cal = XmexCalendar::new();
        let holidays = cal.holidays(2024);
        assert_eq!(holidays.len(), 11);
        assert!(holidays.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(holidays[0], (date(2024, 1, 1), "New Year's Day"));
    }

    #[test]
    fn test_easter_week_lookup() {
        let cal = XmexCalendar::new();
        assert_eq!(
            cal.date_to_session(date(2024, 3, 29), Direction::Previous)
                .unwrap(),
            date(2024, 3, 27)
        );
        assert_eq!(
            cal.date_to_session(date(2024, 3, 28), Direction::Next).unwrap(),
            date(2024, 4, 1)
        );
    }

    #[test]
    fn test_custom_bounds() {
        let bounds = CalendarBounds::new(date(2020, 1, 1), date(2020, 12, 31)).unwrap();
        let cal = XmexCalendar::with_bounds(bounds);
        assert!(!cal.is_session(date(2021, 1, 4)));
        assert!(cal.is_session(date(2020, 1, 2)));
    }
}
