//! Return table rows.

use serde::{Deserialize, Serialize};

use crate::{Period, Session};

/// Raw and annualized return of one instrument over one window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    /// The period the window was computed for.
    pub period: Period,
    /// First session of the window.
    pub start: Session,
    /// Last session of the window.
    pub end: Session,
    /// Calendar days between `start` and `end`.
    pub holding_days: i64,
    /// Raw return, in percent.
    pub raw_return_pct: f64,
    /// Linearly annualized return on a 360-day basis, in percent.
    pub annualized_return_pct: f64,
}

impl std::fmt::Display for ReturnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.4}% ({:.4}% annualized)",
            self.period, self.raw_return_pct, self.annualized_return_pct
        )
    }
}
