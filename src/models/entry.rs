use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ledger record: a worked day or a day off for a single token.
///
/// `section1..3` and `amount` are derived once, when the entry is created,
/// and are never recomputed afterwards (a later rate change does not touch them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub token: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_day_off: bool,
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub total_distance: f64,
    #[serde(default)]
    pub section1: f64,
    #[serde(default)]
    pub section2: f64,
    #[serde(default)]
    pub section3: f64,
    #[serde(default)]
    pub amount: f64,
}

impl Entry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Work details shared by every entry produced from one submission.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorkDetails {
    pub hours: u32,
    pub minutes: u32,
    pub total_distance: f64,
}

/// Validated-shape input for `entry add` / `entry edit`.
///
/// `tokens` is the raw comma separated field as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySubmission {
    pub tokens: String,
    pub date: NaiveDate,
    pub is_day_off: bool,
    pub work: WorkDetails,
}
