//! Fixtures for the ventana benchmarks.

use chrono::NaiveDate;
use ventana_lib::{ExchangeCalendar, Instrument, PriceSeries, Result, Session, XmexCalendar};

/// Returns the XMEX sessions from `start` through `end`.
///
/// # Errors
///
/// Returns an error if the range is inverted or outside calendar coverage.
pub fn sessions(start: NaiveDate, end: NaiveDate) -> Result<Vec<Session>> {
    XmexCalendar::new().sessions_in_range(start, end)
}

/// Builds a price table with a deterministic random walk for every
/// instrument over the given sessions.
#[must_use]
pub fn synthetic_series(sessions: &[Session]) -> PriceSeries {
    let mut series = PriceSeries::new();
    for (column, instrument) in Instrument::all().iter().enumerate() {
        let mut price = 50.0 + 25.0 * column as f64;
        let mut state = 0x9E37_79B9_u64 + column as u64;
        for session in sessions {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let step = ((state >> 33) % 200) as f64 / 10_000.0 - 0.01;
            price *= 1.0 + step;
            series.insert(*session, *instrument, price);
        }
    }
    series
}

/// Renders a chart response body for the given daily closes.
#[must_use]
pub fn chart_body(sessions: &[Session]) -> String {
    let timestamps: Vec<i64> = sessions
        .iter()
        .map(|d| d.and_hms_opt(14, 30, 0).map_or(0, |dt| dt.and_utc().timestamp()))
        .collect();
    let closes: Vec<f64> = (0..sessions.len()).map(|i| 100.0 + i as f64 * 0.1).collect();
    serde_json::json!({
        "chart": {
            "result": [{
                "meta": {"symbol": "IVV", "gmtoffset": -18000},
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{"close": closes}],
                    "adjclose": [{"adjclose": closes}]
                }
            }],
            "error": null
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_synthetic_series_is_complete() {
        let days = sessions(date(2024, 1, 1), date(2024, 3, 31)).unwrap();
        let mut series = synthetic_series(&days);
        assert_eq!(series.len(), days.len());
        assert_eq!(series.drop_incomplete(), 0);
        assert!(series.sessions().all(|d| {
            Instrument::all()
                .iter()
                .all(|i| series.price(d, *i).is_some_and(|p| p > 0.0))
        }));
    }

    #[test]
    fn test_chart_body_parses() {
        let days = sessions(date(2024, 6, 3), date(2024, 6, 14)).unwrap();
        let closes = ventana_lib::parse_chart(chart_body(&days).as_bytes()).unwrap();
        assert_eq!(closes.len(), days.len());
        assert_eq!(closes[0].date, days[0]);
    }
}
