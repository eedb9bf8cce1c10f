//! CLI command implementations.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ventana_lib::prelude::*;

use crate::display::parse_date;
use crate::settings::Settings;

pub(crate) mod calendar;
pub(crate) mod history;
pub(crate) mod info;
pub(crate) mod list;
pub(crate) mod returns;
pub(crate) mod windows;

/// Parses an instrument argument, falling back to the configured default.
pub(crate) fn resolve_instrument(settings: &Settings, arg: Option<&str>) -> Result<Instrument> {
    arg.map_or(Ok(settings.default_instrument), |s| {
        s.parse::<Instrument>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| {
                let tickers: Vec<_> = Instrument::all().iter().map(|i| i.ticker()).collect();
                format!("Valid instruments: {}", tickers.join(", "))
            })
    })
}

/// Parses a reference date argument.
///
/// Without an argument, uses the latest session on or before `today`.
pub(crate) fn resolve_reference(
    calendar: &dyn ExchangeCalendar,
    arg: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => {
            let session = calendar
                .date_to_session(today, Direction::Previous)
                .context("No session on or before today")?;
            if session != today {
                tracing::info!(%today, %session, "today is not a session, using the latest one");
            }
            Ok(session)
        }
    }
}
