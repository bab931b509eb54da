use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional CLI date, defaulting to today.
pub fn parse_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(today()),
    }
}
