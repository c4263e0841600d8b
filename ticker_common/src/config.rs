//! Built-in defaults for the refresher.
//!
//! Paths and the endpoint can be overridden from the command line; the remaining
//! values are fixed.
use std::time::Duration;

/// Price ticker endpoint returning the full market as `[{symbol, price}]`.
pub const API_URL: &str = "https://api.binance.com/api/v3/ticker/price";
/// File read by the desktop widget.
pub const OUTPUT_FILE: &str = "/tmp/cryptoConkyData";
/// Snapshot of the last successful fetch.
pub const CACHE_FILE: &str = "/tmp/cryptoConkyCache.json";
/// Append-only run log.
pub const LOG_FILE: &str = "/tmp/cryptoConky.log";

/// Symbols displayed when no watchlist override is given, in display order.
pub const DEFAULT_SYMBOLS: [&str; 7] = [
    "BTCUSDT", "ETHUSDT", "XRPUSDT", "ADAUSDT", "SOLUSDT", "LTCUSDT", "TRXUSDT",
];

/// User agent sent with every price request.
pub const USER_AGENT: &str = "CryptoTicker/1.0";
/// Upper bound for the single network call of a run.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
/// A cached snapshot is usable while its age is strictly below this many seconds.
pub const CACHE_MAX_AGE_SECS: i64 = 300;

/// Quote-currency suffix stripped from symbols for display.
pub const QUOTE_SUFFIX: &str = "USDT";
/// Leading spaces before the joined quotes, used by the widget's horizontal scroll.
pub const LINE_PAD_WIDTH: usize = 50;

/// Line emitted when there are no quotes to show.
pub const NO_DATA: &str = "No data available";
/// Line emitted when the fetch failed and no fresh cache exists.
pub const API_ERROR: &str = "API Error - No data available";
