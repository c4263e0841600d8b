//! Ordered symbol watchlist and its parsing helpers.
//!
//! The watchlist decides both which quotes are displayed and in what order. Symbols are
//! normalized to upper case; duplicates keep their first position.
use std::io::BufRead;
use std::str::FromStr;

use crate::config::DEFAULT_SYMBOLS;
use crate::error::TickerError;
use crate::result::Result;

/// Trait providing file parsing for watchlists.
pub trait WatchlistParser: Sized {
    /// Parses symbols from a buffered reader.
    ///
    /// Symbols may be separated by commas, spaces, or new lines. Returns an error if
    /// reading fails or no symbol is found.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Self>;
}

/// Static, ordered list of trading pair symbols to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    symbols: Vec<String>,
}

impl Watchlist {
    /// Builds a watchlist from raw symbols, trimming, upper-casing and dropping blanks
    /// and repeats. Fails with `Config` when nothing is left.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for raw in symbols {
            let symbol = raw.as_ref().trim().to_ascii_uppercase();
            if symbol.is_empty() || normalized.contains(&symbol) {
                continue;
            }
            normalized.push(symbol);
        }
        if normalized.is_empty() {
            return Err(TickerError::Config(String::from("watchlist is empty")));
        }
        Ok(Watchlist {
            symbols: normalized,
        })
    }

    /// Symbols in display order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Iterates symbols in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl Default for Watchlist {
    fn default() -> Self {
        Watchlist {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FromStr for Watchlist {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self> {
        Watchlist::new(s.split(|c: char| c == ',' || c.is_whitespace()))
    }
}

impl WatchlistParser for Watchlist {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Self> {
        let mut symbols = Vec::new();
        for line_result in reader.lines() {
            let line = line_result.map_err(TickerError::Io)?;
            symbols.extend(
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .map(str::to_string),
            );
        }
        Watchlist::new(symbols)
    }
}
