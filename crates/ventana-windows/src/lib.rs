//! Trading-calendar-aware date windows for the ventana trailing-returns calculator.
//!
//! This crate provides the window calculator:
//!
//! - [`compute_windows`] - All six windows for a reference date
//! - [`compute_window`] - A single period's window
//! - [`previous_business_day`] - The business day before a reference date
//!
//! # Example
//!
//! ```
//! use ventana_calendar::XmexCalendar;
//! use ventana_types::Period;
//! use ventana_windows::compute_windows;
//!
//! let calendar = XmexCalendar::new();
//! let reference = chrono::NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
//! let windows = compute_windows(reference, &calendar).unwrap();
//!
//! let mtd = windows.get(Period::MonthToDate).unwrap();
//! assert_eq!(mtd.end(), reference);
//! assert_eq!(mtd.start().to_string(), "2024-05-31");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ventana/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod anchor;
mod calculator;

pub use anchor::{period_start, previous_period_start, trailing_anchor};
pub use calculator::{compute_window, compute_windows, previous_business_day};
