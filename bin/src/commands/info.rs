//! Info command implementation.

use anyhow::Result;

use crate::commands::resolve_instrument;
use crate::settings::Settings;

/// Shows the details of one instrument.
pub(crate) fn show_info(instrument_id: &str) -> Result<()> {
    let instrument = resolve_instrument(&Settings::default(), Some(instrument_id))?;

    println!("Instrument:  {}", instrument.name());
    println!("Ticker:      {}", instrument.ticker());
    println!("Class:       {}", instrument.asset_class());
    println!("Description: {}", instrument.description());
    Ok(())
}
