//! History command implementation.

use anyhow::{Context, Result};
use std::path::PathBuf;
use ventana_lib::prelude::*;

use crate::commands::resolve_instrument;
use crate::display::{Format, parse_date, spinner, write_prices};
use crate::settings::Settings;

/// Downloads and exports the close price history of an instrument.
pub(crate) async fn history(
    settings: &Settings,
    instrument_arg: Option<&str>,
    start_str: Option<&str>,
    end_str: Option<&str>,
    format: Format,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let instrument = resolve_instrument(settings, instrument_arg)?;
    let start = start_str.map_or(Ok(settings.history_start), parse_date)?;
    let end = match end_str {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let range = DateRange::new(start, end)?;

    let client = PriceClient::new(settings.client_config())?;
    let progress = spinner(format!("Downloading {instrument} {range}"), quiet);
    let prices = fetch_prices(&client, &[instrument], range).await;
    progress.finish_and_clear();
    let prices = prices.with_context(|| format!("Failed to download {instrument} prices"))?;

    let history = PriceHistory::from_series(&prices, instrument);
    let file_format = format.output_format().unwrap_or_default();
    write_prices(&history, file_format, output.as_deref())?;

    if let Some(path) = output.filter(|_| !quiet) {
        eprintln!("{} prices written to: {}", history.len(), path.display());
    }
    Ok(())
}
