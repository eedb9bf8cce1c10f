//! Raw and annualized trailing returns for the ventana calculator.
//!
//! This crate turns a [`WindowSet`](ventana_types::WindowSet) and a
//! [`PriceSeries`](ventana_types::PriceSeries) into return records:
//!
//! - [`compute_returns`] - One record per window, all or nothing
//! - [`compute_return`] - A single window
//! - [`raw_return`], [`annualize`], [`calendar_days_between`] - The formulas

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ventana/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calculator;
mod math;

pub use calculator::{compute_return, compute_returns};
pub use math::{DAY_COUNT_BASIS, annualize, calendar_days_between, raw_return};
