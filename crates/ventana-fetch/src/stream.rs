//! Concurrent price download pipeline.

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};
use ventana_types::{DateRange, Instrument, PriceSeries, Result, VentanaError};

use crate::{DailyClose, PriceClient, parse_chart};

/// Downloads the daily closes of one instrument over a date range.
///
/// # Errors
///
/// Returns [`VentanaError::Http`] if the download fails,
/// [`VentanaError::Parse`] if the response cannot be decoded, and
/// [`VentanaError::NoDataAvailable`] if the range holds no closes.
pub async fn fetch_instrument(
    client: &PriceClient,
    instrument: Instrument,
    range: DateRange,
) -> Result<Vec<DailyClose>> {
    debug!(%instrument, %range, "downloading chart");

    let body = client
        .download_chart(instrument, range)
        .await
        .map_err(|e| VentanaError::Http(e.to_string()))?
        .ok_or(VentanaError::NoDataAvailable { instrument })?;

    let closes = parse_chart(&body)?;
    if closes.is_empty() {
        return Err(VentanaError::NoDataAvailable { instrument });
    }
    debug!(%instrument, rows = closes.len(), "parsed chart");
    Ok(closes)
}

/// Downloads several instruments concurrently and aligns them by date.
///
/// At most `client.config().concurrency` downloads run at once. Dates missing
/// a price for any instrument are dropped from the result.
///
/// # Errors
///
/// Fails if any instrument fails; see [`fetch_instrument`].
pub async fn fetch_prices(
    client: &PriceClient,
    instruments: &[Instrument],
    range: DateRange,
) -> Result<PriceSeries> {
    let concurrency = client.config().concurrency.max(1);

    let columns: Vec<(Instrument, Vec<DailyClose>)> = stream::iter(instruments.iter().copied())
        .map(|instrument| async move {
            let closes = fetch_instrument(client, instrument, range).await?;
            Ok::<_, VentanaError>((instrument, closes))
        })
        .buffer_unordered(concurrency)
        .try_collect()
        .await?;

    let mut series = PriceSeries::new();
    for (instrument, closes) in columns {
        series.insert_column(instrument, closes.iter().map(DailyClose::to_point));
    }

    let dropped = series.drop_incomplete();
    if dropped > 0 {
        info!(dropped, "dropped dates without a price for every instrument");
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_fetch_prices_with_no_instruments() {
        let client = PriceClient::with_defaults().unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let series = fetch_prices(&client, &[], DateRange::single_day(day))
            .await
            .unwrap();
        assert!(series.is_empty());
    }
}
