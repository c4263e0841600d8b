//! On-disk snapshot cache.
//!
//! The snapshot of the last successful fetch is kept as a single JSON file and reused
//! only while it is fresh. No locking: runs are serialized by the scheduler, and a
//! partially written file simply fails to parse.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use ticker_common::{QuoteSnapshot, Result, TickerError};

/// JSON file holding the last `QuoteSnapshot`.
pub struct SnapshotCache {
    path: PathBuf,
}

impl SnapshotCache {
    /// Creates a cache backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotCache { path: path.into() }
    }

    /// Location of the cache file.
    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the cache file with `snapshot`.
    pub fn save(&self, snapshot: &QuoteSnapshot) -> Result<()> {
        let json =
            serde_json::to_vec(snapshot).map_err(|e| TickerError::CacheWrite(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| {
            TickerError::CacheWrite(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Reads the snapshot regardless of its age.
    pub fn load(&self) -> Result<QuoteSnapshot> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| TickerError::CacheRead(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&raw).map_err(|e| TickerError::CacheRead(e.to_string()))
    }

    /// Reads the snapshot and checks it is younger than `max_age_secs` at `now`.
    pub fn load_fresh(&self, now: DateTime<Utc>, max_age_secs: i64) -> Result<QuoteSnapshot> {
        self.load()?.ensure_fresh(now, max_age_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::tempdir;
    use ticker_common::Quote;

    fn sample(timestamp: DateTime<Utc>) -> QuoteSnapshot {
        QuoteSnapshot::new(
            vec![
                Quote::new("BTCUSDT", "64000.01"),
                Quote::new("ETHUSDT", "3100.5"),
            ],
            timestamp,
        )
    }

    #[test]
    fn saved_snapshot_reads_back() {
        let dir = tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path().join("cache.json"));
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        cache.save(&sample(ts)).unwrap();
        assert_eq!(cache.load().unwrap(), sample(ts));
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path().join("cache.json"));
        let first = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let second = first + Duration::seconds(60);

        cache.save(&sample(first)).unwrap();
        cache
            .save(&QuoteSnapshot::new(vec![Quote::new("XRPUSDT", "0.52")], second))
            .unwrap();

        let loaded = cache.load().unwrap();
        assert_eq!(loaded.timestamp, second);
        assert_eq!(loaded.quotes, vec![Quote::new("XRPUSDT", "0.52")]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path().join("absent.json"));
        assert!(matches!(cache.load(), Err(TickerError::CacheRead(_))));
    }

    #[test]
    fn truncated_file_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, r#"{"timestamp":"2024-05-01T12:00:00Z","data":[{"sym"#).unwrap();
        let cache = SnapshotCache::new(&path);
        assert!(matches!(cache.load(), Err(TickerError::CacheRead(_))));
    }

    #[test]
    fn write_into_missing_directory_is_write_error() {
        let dir = tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path().join("nope").join("cache.json"));
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert!(matches!(
            cache.save(&sample(ts)),
            Err(TickerError::CacheWrite(_))
        ));
    }

    #[test]
    fn load_fresh_applies_window() {
        let dir = tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path().join("cache.json"));
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        cache.save(&sample(now - Duration::seconds(299))).unwrap();
        assert!(cache.load_fresh(now, 300).is_ok());

        cache.save(&sample(now - Duration::seconds(301))).unwrap();
        assert!(matches!(
            cache.load_fresh(now, 300),
            Err(TickerError::CacheExpired { .. })
        ));
    }
}
