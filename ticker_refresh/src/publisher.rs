//! Publishing the formatted line for the desktop widget.
use std::fs;
use std::path::Path;

use log::debug;
use ticker_common::{Result, TickerError};

/// Helper type for writing the output line.
pub struct LinePublisher;

impl LinePublisher {
    /// Overwrites `path` with exactly `line` (no trailing newline).
    pub fn publish(path: &Path, line: &str) -> Result<()> {
        fs::write(path, line)
            .map_err(|e| TickerError::OutputWrite(format!("{}: {}", path.display(), e)))?;
        debug!("Wrote {} bytes to {}", line.len(), path.display());
        Ok(())
    }
}
