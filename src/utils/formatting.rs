//! Formatting utilities used for CLI, print and export outputs.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_CODES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));

pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

/// `2h 5m` style duration.
pub fn format_time<H: std::fmt::Display, M: std::fmt::Display>(hours: H, minutes: M) -> String {
    format!("{}h {}m", hours, minutes)
}

pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

pub fn format_distance(km: f64) -> String {
    format!("{:.2} km", km)
}

/// Display form of a ledger date (`05 Mar 2024` by default).
///
/// Falls back to ISO when the configured pattern is not valid chrono syntax.
pub fn format_date(date: &NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_CODES.replace_all(s, "").into_owned()
}

/// Width in terminal columns, ignoring ANSI color codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}
