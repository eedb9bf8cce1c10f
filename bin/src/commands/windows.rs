//! Windows command implementation.

use anyhow::{Context, Result};
use ventana_lib::prelude::*;

use crate::commands::resolve_reference;
use crate::display::windows_table;
use crate::settings::Settings;

/// Shows the six return windows for a reference date.
pub(crate) fn show_windows(settings: &Settings, date_str: Option<&str>) -> Result<()> {
    let calendar = settings.calendar()?;
    let today = chrono::Local::now().date_naive();
    let reference = resolve_reference(&*calendar, date_str, today)?;

    let windows = compute_windows(reference, &*calendar)
        .with_context(|| format!("Cannot compute windows for {reference}"))?;

    println!("Reference:        {}", windows.reference());
    println!("Previous session: {}", windows.previous_session());
    println!();
    print!("{}", windows_table(&windows));
    Ok(())
}
