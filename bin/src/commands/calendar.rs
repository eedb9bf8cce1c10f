//! Calendar command implementation.

use anyhow::Result;
use ventana_lib::prelude::*;
use ventana_lib::previous_business_day;

use crate::display::parse_date;
use crate::settings::Settings;

/// Shows whether a date is a session and its neighbouring sessions.
pub(crate) fn show_calendar(settings: &Settings, date_str: &str) -> Result<()> {
    let calendar = settings.calendar()?;
    let date = parse_date(date_str)?;

    println!("Exchange:  {}", calendar.code());
    println!("Date:      {} ({})", date, date.format("%A"));

    if !calendar.covers(date) {
        let bounds = calendar.bounds();
        println!("Status:    no calendar data ({} to {})", bounds.first, bounds.last);
        return Ok(());
    }

    let status = match calendar.holiday_name(date) {
        _ if calendar.is_session(date) => "session".to_string(),
        Some(name) => format!("closed ({name})"),
        None => "closed (weekend)".to_string(),
    };
    println!("Status:    {status}");

    if let Ok(previous) = calendar.previous_close(date) {
        println!("Previous:  {previous}");
    }
    if let Some(next) = date
        .succ_opt()
        .and_then(|d| calendar.date_to_session(d, Direction::Next).ok())
    {
        println!("Next:      {next}");
    }
    if calendar.is_session(date) {
        if let Ok(business_day) = previous_business_day(date, &*calendar) {
            println!("Previous business day: {business_day}");
        }
    }
    Ok(())
}
