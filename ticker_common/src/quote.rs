//! Quote records and timestamped snapshots.
//!
//! A `Quote` is one `{symbol, price}` entry as returned by the price service. The price
//! is kept as the decimal string the service sent; numeric interpretation happens only
//! when formatting. A `QuoteSnapshot` is the full list from one successful fetch plus
//! the instant it was taken, and is what gets persisted as the fallback cache.
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TickerError;
use crate::result::Result;

/// Market price for a single trading pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Trading pair symbol (e.g., `BTCUSDT`).
    pub symbol: String,
    /// Last price as a decimal string.
    pub price: String,
}

impl Quote {
    /// Creates a quote from a symbol and a price string.
    pub fn new(symbol: &str, price: &str) -> Self {
        Quote {
            symbol: String::from(symbol),
            price: String::from(price),
        }
    }
}

/// Quotes from one successful fetch, stamped with the fetch time.
///
/// Serialized as `{"timestamp": <ISO-8601>, "data": [Quote, ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    /// When the quotes were fetched.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Quotes in service response order.
    #[serde(rename = "data")]
    pub quotes: Vec<Quote>,
}

impl QuoteSnapshot {
    /// Creates a snapshot of `quotes` taken at `timestamp`.
    pub fn new(quotes: Vec<Quote>, timestamp: DateTime<Utc>) -> Self {
        QuoteSnapshot { timestamp, quotes }
    }

    /// Whole seconds elapsed between the snapshot and `now`.
    pub fn age_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.timestamp).num_seconds()
    }

    /// Returns the snapshot if `0 <= age < max_age_secs`, otherwise `CacheExpired`.
    ///
    /// Snapshots dated in the future are rejected as well.
    pub fn ensure_fresh(self, now: DateTime<Utc>, max_age_secs: i64) -> Result<Self> {
        let age_secs = self.age_secs(now);
        if (0..max_age_secs).contains(&age_secs) {
            Ok(self)
        } else {
            Err(TickerError::CacheExpired { age_secs })
        }
    }
}

/// Parses an ISO-8601 timestamp.
///
/// RFC 3339 strings with an offset are taken as-is. Naive timestamps without an offset
/// (`2024-05-01T12:30:00.123456`) are interpreted in local time.
pub fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| format!("invalid timestamp {:?}: {}", raw, e))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|ts| ts.with_timezone(&Utc))
        .ok_or_else(|| format!("nonexistent local time {:?}", raw))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
