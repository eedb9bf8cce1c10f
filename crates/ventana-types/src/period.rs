//! Trailing return period definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named return period.
///
/// The declaration order is the order in which windows are computed and
/// returns are reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Period {
    /// From the last session of the previous month through the reference date.
    #[serde(rename = "month_to_date")]
    MonthToDate,
    /// From the last session of the previous year through the reference date.
    #[serde(rename = "year_to_date")]
    YearToDate,
    /// Trailing one calendar month.
    #[serde(rename = "last_30_sessions")]
    Last30Sessions,
    /// Trailing three calendar months.
    #[serde(rename = "last_90_sessions")]
    Last90Sessions,
    /// Trailing six calendar months.
    #[serde(rename = "last_180_sessions")]
    Last180Sessions,
    /// Trailing twelve calendar months.
    #[serde(rename = "last_365_sessions")]
    Last365Sessions,
}

impl Period {
    /// Returns the period identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MonthToDate => "month_to_date",
            Self::YearToDate => "year_to_date",
            Self::Last30Sessions => "last_30_sessions",
            Self::Last90Sessions => "last_90_sessions",
            Self::Last180Sessions => "last_180_sessions",
            Self::Last365Sessions => "last_365_sessions",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MonthToDate => "Month to date",
            Self::YearToDate => "Year to date",
            Self::Last30Sessions => "Last 30 days",
            Self::Last90Sessions => "Last 90 days",
            Self::Last180Sessions => "Last 180 days",
            Self::Last365Sessions => "Last 365 days",
        }
    }

    /// Returns the calendar-month lookback of a trailing period, or None for
    /// the to-date periods.
    #[must_use]
    pub const fn months(&self) -> Option<u32> {
        match self {
            Self::MonthToDate | Self::YearToDate => None,
            Self::Last30Sessions => Some(1),
            Self::Last90Sessions => Some(3),
            Self::Last180Sessions => Some(6),
            Self::Last365Sessions => Some(12),
        }
    }

    /// Returns true for month-to-date and year-to-date.
    #[must_use]
    pub const fn is_to_date(&self) -> bool {
        matches!(self, Self::MonthToDate | Self::YearToDate)
    }

    /// Returns all periods in reporting order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::MonthToDate,
            Self::YearToDate,
            Self::Last30Sessions,
            Self::Last90Sessions,
            Self::Last180Sessions,
            Self::Last365Sessions,
        ]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month_to_date" | "mtd" => Ok(Self::MonthToDate),
            "year_to_date" | "ytd" => Ok(Self::YearToDate),
            "last_30_sessions" | "30d" | "1m" => Ok(Self::Last30Sessions),
            "last_90_sessions" | "90d" | "3m" => Ok(Self::Last90Sessions),
            "last_180_sessions" | "180d" | "6m" => Ok(Self::Last180Sessions),
            "last_365_sessions" | "365d" | "1y" | "12m" => Ok(Self::Last365Sessions),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid period string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(String);

impl std::fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid period '{}', expected one of: mtd, ytd, 1m, 3m, 6m, 1y",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}
