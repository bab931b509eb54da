// src/export/excel_date.rs

use chrono::NaiveDate;

/// Days since the Excel epoch (1899-12-30) for an ISO `YYYY-MM-DD` cell,
/// or `None` when the cell is not a date.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}
