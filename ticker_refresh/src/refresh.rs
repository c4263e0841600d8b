//! Refresh state machine.
//!
//! ```text
//! FETCHING --ok--> SUCCESS --> save snapshot (best effort), format live quotes
//!     |
//!     +--err--> FAILURE --fresh cache--> CACHE_HIT  --> format cached quotes
//!                   |
//!                   +------otherwise---> CACHE_MISS --> "API Error - No data available"
//! ```
//!
//! Every branch ends with a best-effort write of the line. Nothing here fails the run.
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use ticker_common::config::{API_ERROR, CACHE_MAX_AGE_SECS};
use ticker_common::format::format_line;
use ticker_common::{QuoteSnapshot, Watchlist};

use crate::cache::SnapshotCache;
use crate::fetcher::QuoteSource;
use crate::publisher::LinePublisher;

/// Which branch produced the output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Line built from freshly fetched quotes.
    Live(String),
    /// Fetch failed; line built from a fresh cached snapshot.
    Cached(String),
    /// Fetch failed and no usable snapshot exists.
    Unavailable(String),
}

impl RefreshOutcome {
    /// The line to publish.
    pub fn line(&self) -> &str {
        match self {
            RefreshOutcome::Live(line)
            | RefreshOutcome::Cached(line)
            | RefreshOutcome::Unavailable(line) => line,
        }
    }
}

/// Runs the fetch/fallback decision and returns the resulting line.
///
/// On success the fetched quotes are persisted as a snapshot stamped `now`. On failure
/// the cached snapshot is used only if it is younger than the freshness window.
pub fn refresh<S: QuoteSource + ?Sized>(
    source: &S,
    cache: &SnapshotCache,
    watchlist: &Watchlist,
    now: DateTime<Utc>,
) -> RefreshOutcome {
    match source.fetch() {
        Ok(quotes) => {
            let snapshot = QuoteSnapshot::new(quotes, now);
            if let Err(e) = cache.save(&snapshot) {
                error!("Failed to save cache: {}", e);
            }
            RefreshOutcome::Live(format_line(Some(snapshot.quotes.as_slice()), watchlist))
        }
        Err(e) => {
            error!("API request failed: {}", e);
            warn!("Using cached data due to API failure");
            match cache.load_fresh(now, CACHE_MAX_AGE_SECS) {
                Ok(snapshot) => {
                    info!(
                        "Using snapshot from {} ({}s old)",
                        snapshot.timestamp,
                        snapshot.age_secs(now)
                    );
                    RefreshOutcome::Cached(format_line(Some(snapshot.quotes.as_slice()), watchlist))
                }
                Err(e) => {
                    error!("Failed to load cache: {}", e);
                    RefreshOutcome::Unavailable(API_ERROR.to_string())
                }
            }
        }
    }
}

/// One full invocation: refresh, then publish the line to `output`.
pub fn run_once<S: QuoteSource + ?Sized>(
    source: &S,
    cache: &SnapshotCache,
    watchlist: &Watchlist,
    output: &Path,
    now: DateTime<Utc>,
) -> RefreshOutcome {
    let outcome = refresh(source, cache, watchlist, now);

    if let Err(e) = LinePublisher::publish(output, outcome.line()) {
        error!("Failed to write output file: {}", e);
    } else if let RefreshOutcome::Live(_) = outcome {
        info!("Successfully updated crypto data");
    }
    outcome
}
