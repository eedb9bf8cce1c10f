//! Close prices indexed by session.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{Instrument, Result, Session, VentanaError};

/// A single dated close price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Session date.
    pub date: Session,
    /// Adjusted close price.
    pub price: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub const fn new(date: Session, price: f64) -> Self {
        Self { date, price }
    }
}

/// Close prices indexed by session, one column per instrument.
///
/// Rows are kept in date order. A freshly merged series may have holes where
/// an instrument did not trade; call [`PriceSeries::drop_incomplete`] before
/// computing returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    instruments: BTreeSet<Instrument>,
    rows: BTreeMap<Session, BTreeMap<Instrument, f64>>,
}

impl PriceSeries {
    /// Creates an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the price of an instrument on a session.
    pub fn insert(&mut self, date: Session, instrument: Instrument, price: f64) {
        self.instruments.insert(instrument);
        self.rows.entry(date).or_default().insert(instrument, price);
    }

    /// Adds a whole column of prices for one instrument.
    pub fn insert_column<I>(&mut self, instrument: Instrument, points: I)
    where
        I: IntoIterator<Item = PricePoint>,
    {
        self.instruments.insert(instrument);
        for point in points {
            self.rows
                .entry(point.date)
                .or_default()
                .insert(instrument, point.price);
        }
    }

    /// Returns the price of an instrument on a session, if present.
    #[must_use]
    pub fn price(&self, date: Session, instrument: Instrument) -> Option<f64> {
        self.rows.get(&date)?.get(&instrument).copied()
    }

    /// Returns the price of an instrument on a session.
    ///
    /// # Errors
    ///
    /// Returns [`VentanaError::MissingPrice`] if the row or column is absent
    /// and [`VentanaError::InvalidPrice`] if the price is not a positive
    /// finite number.
    pub fn get(&self, date: Session, instrument: Instrument) -> Result<f64> {
        let price = self
            .price(date, instrument)
            .ok_or(VentanaError::MissingPrice { instrument, date })?;
        if !price.is_finite() || price <= 0.0 {
            return Err(VentanaError::InvalidPrice {
                instrument,
                date,
                price,
            });
        }
        Ok(price)
    }

    /// Returns the price history of one instrument in date order.
    #[must_use]
    pub fn column(&self, instrument: Instrument) -> Vec<PricePoint> {
        self.rows
            .iter()
            .filter_map(|(date, row)| row.get(&instrument).map(|p| PricePoint::new(*date, *p)))
            .collect()
    }

    /// Removes rows lacking a price for any instrument of the series.
    ///
    /// Returns the number of rows removed.
    pub fn drop_incomplete(&mut self) -> usize {
        let before = self.rows.len();
        let width = self.instruments.len();
        self.rows.retain(|_, row| row.len() == width);
        before - self.rows.len()
    }

    /// Returns the instruments with at least one price.
    pub fn instruments(&self) -> impl Iterator<Item = Instrument> + '_ {
        self.instruments.iter().copied()
    }

    /// Returns all session dates in ascending order.
    pub fn sessions(&self) -> impl Iterator<Item = Session> + '_ {
        self.rows.keys().copied()
    }

    /// Returns the earliest session with a row.
    #[must_use]
    pub fn first_session(&self) -> Option<Session> {
        self.rows.keys().next().copied()
    }

    /// Returns the latest session with a row.
    #[must_use]
    pub fn last_session(&self) -> Option<Session> {
        self.rows.keys().next_back().copied()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the series has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
