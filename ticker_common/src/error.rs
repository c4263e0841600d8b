//! Error types shared by the ticker crates.
//!
//! None of these are fatal to a refresh run: fetch errors collapse into "no fresh
//! data", cache read errors into "no usable cache", and write errors are logged.
use std::io;

use thiserror::Error;

/// Unified error type for the ticker workspace.
#[derive(Error, Debug)]
pub enum TickerError {
    /// Connection failure, timeout, or non-2xx status from the price service.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body is not a sequence of `{symbol, price}` records.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Cache file is missing, unreadable, or not a valid snapshot.
    #[error("Cache read error: {0}")]
    CacheRead(String),

    /// Cache snapshot exists but is outside the freshness window.
    #[error("Cache expired: snapshot is {age_secs}s old")]
    CacheExpired {
        /// Age of the snapshot in seconds; negative when dated in the future.
        age_secs: i64,
    },

    /// Snapshot could not be serialized or written.
    #[error("Cache write error: {0}")]
    CacheWrite(String),

    /// Output line could not be written to its destination.
    #[error("Output write error: {0}")]
    OutputWrite(String),

    /// Invalid configuration value (e.g. an empty watchlist override).
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
