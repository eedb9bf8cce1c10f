//! Holiday rules and date helpers.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Returns true for Monday through Friday.
pub(crate) fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns Easter Sunday of the given Gregorian year.
///
/// Anonymous Gregorian computus (Meeus/Jones/Butcher).
#[must_use]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// A rule producing at most one holiday per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HolidayRule {
    /// Same month and day every year.
    Fixed { month: u32, day: u32 },
    /// The n-th weekday of a month (n starts at 1).
    NthWeekday { month: u32, weekday: Weekday, n: u8 },
    /// Offset in days from Easter Sunday (negative is before).
    EasterOffset(i64),
    /// One rule until `until_year` inclusive, another afterwards.
    Changed {
        until_year: i32,
        before: &'static Self,
        after: &'static Self,
    },
}

impl HolidayRule {
    /// Returns the holiday date in `year`, if the rule produces one.
    pub(crate) fn date_in(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            Self::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            Self::NthWeekday { month, weekday, n } => {
                NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
            }
            Self::EasterOffset(offset) => {
                let easter = easter_sunday(year)?;
                if offset < 0 {
                    easter.checked_sub_days(Days::new(offset.unsigned_abs()))
                } else {
                    easter.checked_add_days(Days::new(offset.unsigned_abs()))
                }
            }
            Self::Changed {
                until_year,
                before,
                after,
            } => {
                if year <= until_year {
                    before.date_in(year)
                } else {
                    after.date_in(year)
                }
            }
        }
    }
}

/// A named holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Holiday {
    pub(crate) name: &'static str,
    pub(crate) rule: HolidayRule,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_sunday() {
        assert_eq!(easter_sunday(2019), Some(date(2019, 4, 21)));
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2038), Some(date(2038, 4, 25)));
    }

    #[test]
    fn test_nth_weekday_rule() {
        let rule = HolidayRule::NthWeekday {
            month: 3,
            weekday: Weekday::Mon,
            n: 3,
        };
        assert_eq!(rule.date_in(2024), Some(date(2024, 3, 18)));
    }

    #[test]
    fn test_easter_offset_rule() {
        assert_eq!(
            HolidayRule::EasterOffset(-2).date_in(2024),
            Some(date(2024, 3, 29))
        );
    }

    #[test]
    fn test_changed_rule() {
        static BEFORE: HolidayRule = HolidayRule::Fixed { month: 2, day: 5 };
        static AFTER: HolidayRule = HolidayRule::NthWeekday {
            month: 2,
            weekday: Weekday::Mon,
            n: 1,
        };
        let rule = HolidayRule::Changed {
            until_year: 2005,
            before: &BEFORE,
            after: &AFTER,
        };
        assert_eq!(rule.date_in(2005), Some(date(2005, 2, 5)));
        assert_eq!(rule.date_in(2007), Some(date(2007, 2, 5)));
        assert_eq!(rule.date_in(2008), Some(date(2008, 2, 4)));
    }
}
