//! List command implementation.

use anyhow::Result;
use ventana_lib::prelude::*;

/// Lists the instrument universe.
pub(crate) fn list_instruments() -> Result<()> {
    println!("{:<8} {:<45} {:<10}", "TICKER", "NAME", "CLASS");
    println!("{}", "-".repeat(65));

    for instrument in Instrument::all() {
        println!(
            "{:<8} {:<45} {:<10}",
            instrument.ticker(),
            instrument.name(),
            instrument.asset_class().to_string()
        );
    }

    println!("\nTotal: {} instruments", Instrument::all().len());
    Ok(())
}
