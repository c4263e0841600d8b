//! Crypto Ticker Refresher — fetches current prices for a watchlist of trading pairs
//! and writes them as a single line for a desktop widget (e.g. Conky) to display.
//!
//! Each invocation is independent and meant to be started periodically by an external
//! scheduler (cron, a systemd timer, or the widget itself):
//!
//! - `fetcher` — one HTTP request for the full market price list.
//! - `cache` — JSON snapshot of the last successful fetch, reused for up to five
//!   minutes when the service is unreachable.
//! - `refresh` — the fetch/fallback decision and the final write of the line.
//! - `publisher` — overwrites the output file read by the widget.
//!
//! The process always exits with status 0; failures are reported in the log file and
//! in the content of the output line.
//!
//! Usage example (CLI):
//! ```bash
//! ticker_refresh --symbols BTCUSDT,ETHUSDT,SOLUSDT --output /tmp/cryptoConkyData
//! ```
#![warn(missing_docs)]
mod args;
mod cache;
mod fetcher;
mod logger;
mod publisher;
mod refresh;

use crate::args::Args;
use crate::cache::SnapshotCache;
use crate::fetcher::HttpQuoteSource;
use crate::logger::init_logger;
use chrono::Utc;
use clap::Parser;
use clap::error::ErrorKind;
use log::{debug, info, warn};
use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use ticker_common::config::FETCH_TIMEOUT;
use ticker_common::watchlist::WatchlistParser;
use ticker_common::{Result, Watchlist};

fn main() {
    let Some(args) = parse_args(std::env::args_os()) else {
        return;
    };

    init_logger(&normalize_path(&args.log_file));
    info!("Starting crypto ticker update");

    let watchlist = resolve_watchlist(&args);
    debug!("Watchlist: {:?}", watchlist.symbols());

    let source = HttpQuoteSource::new(&args.api_url, FETCH_TIMEOUT);
    let cache = SnapshotCache::new(normalize_path(&args.cache));
    let outcome = refresh::run_once(
        &source,
        &cache,
        &watchlist,
        &normalize_path(&args.output),
        Utc::now(),
    );
    debug!("Refresh finished: {:?}", outcome);
}

/// Parses the command line.
///
/// Invalid arguments are reported on stderr and yield `None`, so the run stops before
/// any file is touched. `--help` and `--version` print and exit with status 0.
fn parse_args<I, T>(raw: I) -> Option<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(raw) {
        Ok(args) => Some(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("Invalid arguments, nothing published: {}", e.to_string().trim());
            None
        }
    }
}

/// Picks the watchlist: `--watchlist` file, then `--symbols`, then the built-in list.
/// An unusable override is logged and replaced by the default.
fn resolve_watchlist(args: &Args) -> Watchlist {
    let custom = if let Some(path) = &args.watchlist {
        Some(load_watchlist_file(&normalize_path(path)))
    } else if !args.symbols.is_empty() {
        Some(Watchlist::new(&args.symbols))
    } else {
        None
    };

    match custom {
        Some(Ok(watchlist)) => watchlist,
        Some(Err(e)) => {
            warn!("Ignoring watchlist override: {}", e);
            Watchlist::default()
        }
        None => Watchlist::default(),
    }
}

fn load_watchlist_file(path: &Path) -> Result<Watchlist> {
    let file = File::open(path)?;
    Watchlist::parse_from_file(BufReader::new(file))
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
