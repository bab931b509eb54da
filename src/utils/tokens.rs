//! Token list parsing for the entry form and the search box.

use regex::Regex;
use std::sync::LazyLock;

static SEARCH_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("static regex"));

/// Tokens typed in the entry form: comma separated, blanks dropped.
pub fn parse_entry_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokens typed in the search box: commas and/or whitespace separate them.
pub fn parse_search_tokens(raw: &str) -> Vec<String> {
    SEARCH_SEPARATORS
        .split(raw.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
