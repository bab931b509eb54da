//! Mandatory off-day rule: once a worker has a recorded day off, every
//! 7th day after the most recent one (on or before the candidate date) is
//! blocked for regular work.

use crate::models::Entry;
use chrono::NaiveDate;

/// Days between two consecutive mandatory day offs.
pub const OFF_DAY_CYCLE: i64 = 7;

/// Latest explicit day off recorded for `token` on or before `date`.
pub fn last_day_off(entries: &[Entry], token: &str, date: NaiveDate) -> Option<NaiveDate> {
    entries
        .iter()
        .filter(|e| e.token == token && e.is_day_off && e.date <= date)
        .map(|e| e.date)
        .max()
}

/// True when `date` falls on a mandatory off day for `token`.
///
/// Always recomputed from the full history; without any recorded day off the
/// rule has no effect.
pub fn is_off_day_for_person(entries: &[Entry], token: &str, date: NaiveDate) -> bool {
    let Some(last) = last_day_off(entries, token, date) else {
        return false;
    };

    let days_since = (date - last).num_days();
    days_since > 0 && days_since % OFF_DAY_CYCLE == 0
}
