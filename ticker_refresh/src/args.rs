//! Command-line arguments for the ticker refresher.
//!
//! Every flag has a built-in default, so the usual scheduler entry is the bare binary.
use clap::Parser;
use ticker_common::config::{API_URL, CACHE_FILE, LOG_FILE, OUTPUT_FILE};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Price ticker endpoint returning `[{symbol, price}]` for the whole market.
    #[clap(long, default_value = API_URL)]
    pub api_url: String,

    /// File the formatted line is written to.
    #[clap(long, default_value = OUTPUT_FILE)]
    pub output: String,

    /// JSON snapshot used as a fallback when the service is unreachable.
    #[clap(long, default_value = CACHE_FILE)]
    pub cache: String,

    /// Append-only log file.
    #[clap(long, default_value = LOG_FILE)]
    pub log_file: String,

    /// Comma-separated symbols to display, in order (e.g. `BTCUSDT,ETHUSDT`).
    #[clap(long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// Path to a text file with symbols to display.
    /// Symbols may be separated by commas, spaces, or new lines.
    /// Takes precedence over `--symbols`.
    #[clap(long)]
    pub watchlist: Option<String>,
}
