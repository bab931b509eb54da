/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const ORANGE: &str = "\x1b[38;5;208m";

/// Greys out zero values (`0h 0m`, `0.00 km`) in table cells.
pub fn colorize_zero(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "0h 0m" || v == "0.00 km" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Day-off cells are highlighted the way the summary cards are.
pub fn day_off(value: &str) -> String {
    format!("{ORANGE}{value}{RESET}")
}
