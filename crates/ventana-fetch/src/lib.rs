//! Daily close price download for the ventana trailing-returns calculator.
//!
//! This crate provides the price data source:
//!
//! - [`url::chart_url`] - Constructs Yahoo! Finance chart URLs
//! - [`PriceClient`] - HTTP client with connection pooling and retries
//! - [`parse_chart`] - Chart response decoding
//! - [`fetch_prices`] - Concurrent download of an aligned price table

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ventana/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chart;
mod client;
mod stream;
pub mod url;

pub use chart::{DailyClose, parse_chart};
pub use client::{ClientConfig, FetchError, PriceClient};
pub use stream::{fetch_instrument, fetch_prices};
