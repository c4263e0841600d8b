//! Log file setup.
//!
//! Lines look like `2024-05-01 12:30:00,123 - INFO - message` and are appended to the
//! configured file. `RUST_LOG` overrides the default `info` level.
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use env_logger::{Builder, Target};
use log::Level;

/// Initializes the global logger, writing to `path`.
///
/// Falls back to stderr when the file cannot be opened, so a bad log location never
/// prevents the output from being published.
pub fn init_logger(path: &Path) {
    let mut builder = Builder::new();
    builder
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| write_record(buf, Local::now(), record.level(), *record.args()));

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Cannot open log file {}: {}", path.display(), e);
            builder.target(Target::Stderr);
        }
    }

    if builder.try_init().is_err() {
        eprintln!("Logger already initialized");
    }
}

/// Writes one `timestamp - LEVEL - message` line.
fn write_record<W: Write>(
    buf: &mut W,
    at: DateTime<Local>,
    level: Level,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    writeln!(
        buf,
        "{} - {} - {}",
        at.format("%Y-%m-%d %H:%M:%S,%3f"),
        level,
        args
    )
}
