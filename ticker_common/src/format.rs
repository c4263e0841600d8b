//! Price formatting and output line assembly.
//!
//! Prices are rendered with a number of decimals chosen from the magnitude of the
//! parsed value; see [`format_price`]. [`format_line`] joins the watched quotes into
//! the single line read by the desktop widget.
use std::collections::HashMap;

use crate::config::{LINE_PAD_WIDTH, NO_DATA, QUOTE_SUFFIX};
use crate::quote::Quote;
use crate::watchlist::Watchlist;

/// Formats a price string for display.
///
/// | value      | decimals | thousands separator |
/// |------------|----------|---------------------|
/// | >= 10 000  | 0        | yes                 |
/// | >= 1 000   | 1        | yes                 |
/// | >= 100     | 2        | no                  |
/// | >= 10      | 3        | no                  |
/// | >= 1       | 4        | no                  |
/// | >= 0.1     | 5        | no                  |
/// | otherwise  | 6        | no                  |
///
/// The tier comes from the parsed value before rounding, so `"999.999"` renders as
/// `"$1000.00"`. Input that is not a finite number is returned as `$` plus the raw text.
/// Digit separators such as `_` are not accepted, so `"1_000"` renders as `"$1_000"`.
pub fn format_price(price: &str) -> String {
    let value = match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return format!("${}", price),
    };
    let (decimals, grouped) = tier(value);
    let digits = format!("{:.*}", decimals, value);
    if grouped {
        format!("${}", group_thousands(&digits))
    } else {
        format!("${}", digits)
    }
}

fn tier(value: f64) -> (usize, bool) {
    if value >= 10_000.0 {
        (0, true)
    } else if value >= 1_000.0 {
        (1, true)
    } else if value >= 100.0 {
        (2, false)
    } else if value >= 10.0 {
        (3, false)
    } else if value >= 1.0 {
        (4, false)
    } else if value >= 0.1 {
        (5, false)
    } else {
        (6, false)
    }
}

/// Inserts `,` every three digits of the integer part.
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    let (sign, int_digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + int_digits.len() / 3 + 1);
    grouped.push_str(sign);
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Display form of a symbol: the quote-currency suffix is dropped (`BTCUSDT` -> `BTC`).
pub fn display_symbol(symbol: &str) -> &str {
    symbol.strip_suffix(QUOTE_SUFFIX).unwrap_or(symbol)
}

/// Builds the widget line from `quotes`, in `watchlist` order.
///
/// Watched symbols missing from `quotes` are skipped. Entries look like
/// `BTC - $50,000` and are joined by single spaces after a fixed-width pad. An empty or
/// absent quote collection yields `"No data available"` without padding.
pub fn format_line(quotes: Option<&[Quote]>, watchlist: &Watchlist) -> String {
    let quotes = match quotes {
        Some(quotes) if !quotes.is_empty() => quotes,
        _ => return NO_DATA.to_string(),
    };

    // later duplicates overwrite earlier ones
    let prices: HashMap<&str, &str> = quotes
        .iter()
        .map(|q| (q.symbol.as_str(), q.price.as_str()))
        .collect();

    let entries: Vec<String> = watchlist
        .iter()
        .filter_map(|symbol| {
            prices
                .get(symbol)
                .map(|price| format!("{} - {}", display_symbol(symbol), format_price(price)))
        })
        .collect();

    format!("{}{}", " ".repeat(LINE_PAD_WIDTH), entries.join(" "))
}
