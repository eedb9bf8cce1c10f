//! Chart response decoding.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use ventana_types::{PricePoint, Result, VentanaError};

/// One day of a chart response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyClose {
    /// Trading date in the exchange's local time.
    pub date: NaiveDate,
    /// Raw close price.
    pub close: f64,
    /// Close adjusted for splits and distributions, when reported.
    pub adjclose: Option<f64>,
}

impl DailyClose {
    /// Returns the adjusted close, falling back to the raw close.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.adjclose.unwrap_or(self.close)
    }

    /// Converts to a price point carrying [`DailyClose::price`].
    #[must_use]
    pub fn to_point(&self) -> PricePoint {
        PricePoint::new(self.date, self.price())
    }
}

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize, Debug)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    meta: Meta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug, Default)]
struct Meta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteList>,
    #[serde(default)]
    adjclose: Option<Vec<AdjCloseList>>,
}

#[derive(Deserialize, Debug)]
struct QuoteList {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Deserialize, Debug)]
struct AdjCloseList {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

impl ChartResult {
    fn check_consistency(&self) -> Result<()> {
        let n = self.timestamp.len();
        if n == 0 {
            return Ok(());
        }
        let quote = self
            .indicators
            .quote
            .first()
            .ok_or_else(|| VentanaError::Parse("chart has no quote block".to_string()))?;
        if quote.close.len() != n {
            return Err(inconsistent("close", quote.close.len(), n));
        }
        if let Some(adj) = self.adjclose() {
            if adj.len() != n {
                return Err(inconsistent("adjclose", adj.len(), n));
            }
        }
        Ok(())
    }

    fn adjclose(&self) -> Option<&[Option<f64>]> {
        self.indicators
            .adjclose
            .as_ref()
            .and_then(|lists| lists.first())
            .map(|list| list.adjclose.as_slice())
    }

    fn closes(&self) -> Result<Vec<DailyClose>> {
        self.check_consistency()?;
        let Some(quote) = self.indicators.quote.first() else {
            return Ok(Vec::new());
        };
        let adjclose = self.adjclose();

        let mut closes: Vec<DailyClose> = Vec::with_capacity(self.timestamp.len());
        for (i, ts) in self.timestamp.iter().enumerate() {
            let Some(close) = quote.close[i] else {
                continue;
            };
            let local = ts + self.meta.gmtoffset;
            let date = DateTime::from_timestamp(local, 0)
                .ok_or_else(|| VentanaError::Parse(format!("invalid timestamp {ts}")))?
                .date_naive();
            let day = DailyClose {
                date,
                close,
                adjclose: adjclose.and_then(|adj| adj[i]),
            };
            if day.price() <= 0.0 {
                return Err(VentanaError::Parse(format!(
                    "non-positive close {} on {date}",
                    day.price()
                )));
            }
            // A trailing live quote repeats the last session's date.
            match closes.last_mut() {
                Some(last) if last.date == date => *last = day,
                _ => closes.push(day),
            }
        }
        Ok(closes)
    }
}

fn inconsistent(field: &str, len: usize, expected: usize) -> VentanaError {
    VentanaError::Parse(format!(
        "inconsistent chart data: {len} {field} values for {expected} timestamps"
    ))
}

/// Decodes a Yahoo! Finance v8 chart response into daily closes.
///
/// Days without a close are skipped. An empty list means the range held no
/// sessions.
///
/// # Errors
///
/// Returns [`VentanaError::Parse`] if the body is not a chart response, the
/// API reported an error, or the indicator arrays do not match the timestamps.
pub fn parse_chart(body: &[u8]) -> Result<Vec<DailyClose>> {
    let response: ChartResponse =
        serde_json::from_slice(body).map_err(|e| VentanaError::Parse(e.to_string()))?;
    let chart = response.chart;

    if let Some(error) = chart.error {
        return Err(VentanaError::Parse(format!(
            "chart API error {}: {}",
            error.code, error.description
        )));
    }

    let result = chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| VentanaError::Parse("empty chart result".to_string()))?;
    result.closes()
}
