//! Core types for the ventana trailing-returns calculator.
//!
//! This crate provides the fundamental data structures used throughout ventana:
//!
//! - [`Instrument`] - The closed set of tracked exchange-traded funds
//! - [`Period`] - The six trailing return periods
//! - [`DateWindow`] - An ascending run of exchange sessions for one period
//! - [`WindowSet`] - The windows computed for one reference date
//! - [`PriceSeries`] - Close prices indexed by session, one column per instrument
//! - [`ReturnRecord`] - Raw and annualized return for one window
//! - [`DateRange`] - Date range for data retrieval

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ventana/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod instrument;
mod period;
mod price;
mod record;
mod window;

pub use date_range::{DateRange, DayIterator};
pub use error::{DateRangeError, Result, VentanaError};
pub use instrument::{AssetClass, Instrument, InstrumentParseError};
pub use period::{Period, PeriodParseError};
pub use price::{PricePoint, PriceSeries};
pub use record::ReturnRecord;
pub use window::{DateWindow, WindowSet};

/// A calendar date that is an open trading day for some exchange.
///
/// The exchange is implied by the calendar that produced the date.
pub type Session = chrono::NaiveDate;
