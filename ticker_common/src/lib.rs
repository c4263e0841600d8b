//!
//! Common types and utilities for the crypto ticker refresher.
//!
//! This crate aggregates:
//! - `error` — unified error type `TickerError` used across the workspace.
//! - `result` — handy `Result<T, TickerError>` alias.
//! - `config` — built-in endpoint, file locations, and display constants.
//! - `quote` — `Quote` records and the timestamped `QuoteSnapshot`.
//! - `watchlist` — the ordered symbol list and its parsing helpers.
//! - `format` — price formatting and output line assembly.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod format;
pub mod quote;
pub mod result;
pub mod watchlist;

pub use error::TickerError;
pub use quote::{Quote, QuoteSnapshot};
pub use result::Result;
pub use watchlist::Watchlist;
