//! Date windows of exchange sessions.

use serde::{Deserialize, Serialize};

use crate::{Period, Result, Session, VentanaError};

/// A non-empty, strictly ascending run of sessions for one period.
///
/// Strict ordering rules out duplicates, so the first and last sessions are
/// the window bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateWindow")]
pub struct DateWindow {
    period: Period,
    sessions: Vec<Session>,
}

#[derive(Deserialize)]
struct RawDateWindow {
    period: Period,
    sessions: Vec<Session>,
}

impl TryFrom<RawDateWindow> for DateWindow {
    type Error = VentanaError;

    fn try_from(raw: RawDateWindow) -> Result<Self> {
        Self::new(raw.period, raw.sessions)
    }
}

impl DateWindow {
    /// Creates a window, validating that `sessions` is non-empty and strictly
    /// ascending.
    ///
    /// # Errors
    ///
    /// Returns [`VentanaError::InvalidWindow`] if the sessions are empty,
    /// unordered or repeated.
    pub fn new(period: Period, sessions: Vec<Session>) -> Result<Self> {
        if sessions.is_empty() {
            return Err(VentanaError::InvalidWindow(format!(
                "{period} window has no sessions"
            )));
        }
        if let Some(pair) = sessions.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(VentanaError::InvalidWindow(format!(
                "{period} window is not strictly ascending at {} -> {}",
                pair[0], pair[1]
            )));
        }
        Ok(Self { period, sessions })
    }

    /// Returns the period this window was computed for.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Returns the sessions in ascending order.
    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Returns the first session.
    #[must_use]
    pub fn start(&self) -> Session {
        self.sessions[0]
    }

    /// Returns the last session.
    #[must_use]
    pub fn end(&self) -> Session {
        self.sessions[self.sessions.len() - 1]
    }

    /// Returns the number of sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Always false; windows are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Returns the number of calendar days between the first and last session.
    #[must_use]
    pub fn calendar_days(&self) -> i64 {
        (self.end() - self.start()).num_days()
    }

    /// Returns true if the window contains the session.
    #[must_use]
    pub fn contains(&self, session: Session) -> bool {
        self.sessions.binary_search(&session).is_ok()
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} to {} ({} sessions)",
            self.period,
            self.start(),
            self.end(),
            self.len()
        )
    }
}

/// The windows computed for one reference date, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindowSet")]
pub struct WindowSet {
    reference: Session,
    previous_session: Session,
    windows: Vec<DateWindow>,
}

#[derive(Deserialize)]
struct RawWindowSet {
    reference: Session,
    previous_session: Session,
    windows: Vec<DateWindow>,
}

impl TryFrom<RawWindowSet> for WindowSet {
    type Error = VentanaError;

    fn try_from(raw: RawWindowSet) -> Result<Self> {
        Self::new(raw.reference, raw.previous_session, raw.windows)
    }
}

impl WindowSet {
    /// Creates a window set.
    ///
    /// # Errors
    ///
    /// Returns [`VentanaError::InvalidWindow`] if a window does not end on
    /// `reference` or `previous_session` is not before it.
    pub fn new(
        reference: Session,
        previous_session: Session,
        windows: Vec<DateWindow>,
    ) -> Result<Self> {
        if previous_session >= reference {
            return Err(VentanaError::InvalidWindow(format!(
                "previous session {previous_session} is not before {reference}"
            )));
        }
        if let Some(window) = windows.iter().find(|w| w.end() != reference) {
            return Err(VentanaError::InvalidWindow(format!(
                "{} window ends on {} instead of {reference}",
                window.period(),
                window.end()
            )));
        }
        Ok(Self {
            reference,
            previous_session,
            windows,
        })
    }

    /// Returns the reference date the windows end on.
    #[must_use]
    pub const fn reference(&self) -> Session {
        self.reference
    }

    /// Returns the business day before the reference date.
    ///
    /// Informational only; returns are computed from the windows.
    #[must_use]
    pub const fn previous_session(&self) -> Session {
        self.previous_session
    }

    /// Looks up the window for a period.
    #[must_use]
    pub fn get(&self, period: Period) -> Option<&DateWindow> {
        self.windows.iter().find(|w| w.period() == period)
    }

    /// Returns the windows in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DateWindow> {
        self.windows.iter()
    }

    /// Returns the number of windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns true if the set holds no windows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl<'a> IntoIterator for &'a WindowSet {
    type Item = &'a DateWindow;
    type IntoIter = std::slice::Iter<'a, DateWindow>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.iter()
    }
}
