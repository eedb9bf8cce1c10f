//! Returns command implementation.
//!
//! Downloads the whole instrument universe so that dates missing any
//! instrument are dropped before the returns are computed.

use anyhow::{Context, Result};
use std::path::PathBuf;
use ventana_lib::prelude::*;

use crate::commands::{resolve_instrument, resolve_reference};
use crate::display::{Format, returns_table, spinner, write_returns};
use crate::settings::Settings;

/// Downloads prices and prints the trailing returns of an instrument.
pub(crate) async fn returns(
    settings: &Settings,
    instrument_arg: Option<&str>,
    date_str: Option<&str>,
    format: Format,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let instrument = resolve_instrument(settings, instrument_arg)?;
    let calendar = settings.calendar()?;
    let today = chrono::Local::now().date_naive();
    let reference = resolve_reference(&*calendar, date_str, today)?;

    let windows = compute_windows(reference, &*calendar)
        .with_context(|| format!("Cannot compute windows for {reference}"))?;
    let range = required_range(&windows)?;

    let client = PriceClient::new(settings.client_config())?;
    let progress = spinner(format!("Downloading prices {range}"), quiet);
    let prices = fetch_prices(&client, Instrument::all(), range).await;
    progress.finish_and_clear();
    let prices = prices.context("Failed to download prices")?;
    tracing::info!(rows = prices.len(), "downloaded price table");

    let records = compute_returns(&prices, &windows, instrument)
        .with_context(|| format!("Cannot compute {instrument} returns for {reference}"))?;

    match format.output_format() {
        Some(file_format) => write_returns(&records, file_format, output.as_deref())?,
        None => {
            println!("{} ({})", instrument.name(), instrument.ticker());
            println!("Reference:        {}", windows.reference());
            println!("Previous session: {}", windows.previous_session());
            println!();
            print!("{}", returns_table(&records));
        }
    }

    if let Some(path) = output.filter(|_| !quiet) {
        eprintln!("Output written to: {}", path.display());
    }
    Ok(())
}
