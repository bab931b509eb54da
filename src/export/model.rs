// src/export/model.rs

use crate::config::Config;
use crate::core::report::{Report, ReportRow};
use crate::utils::{format_amount, format_date, format_distance, format_time};
use serde::Serialize;

/// Flat record used by every export writer.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub position: usize,
    pub token: String,
    pub name: String,
    pub date: String,
    pub day_off: bool,
    pub hours: u32,
    pub minutes: u32,
    pub hourly_rate: f64,
    pub total_distance: f64,
    pub section1: f64,
    pub section2: f64,
    pub section3: f64,
    pub amount: f64,
}

impl From<&ReportRow> for EntryExport {
    fn from(row: &ReportRow) -> Self {
        let e = &row.entry;
        Self {
            position: row.position,
            token: e.token.clone(),
            name: row.name.clone(),
            date: e.date_str(),
            day_off: e.is_day_off,
            hours: e.hours,
            minutes: e.minutes,
            hourly_rate: row.hourly_rate,
            total_distance: e.total_distance,
            section1: e.section1,
            section2: e.section2,
            section3: e.section3,
            amount: e.amount,
        }
    }
}

/// Header for CSV / XLSX / PDF, in field order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "position",
        "token",
        "name",
        "date",
        "day_off",
        "hours",
        "minutes",
        "hourly_rate",
        "total_distance",
        "section1",
        "section2",
        "section3",
        "amount",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.position.to_string(),
        e.token.clone(),
        e.name.clone(),
        e.date.clone(),
        if e.day_off { "yes" } else { "no" }.to_string(),
        e.hours.to_string(),
        e.minutes.to_string(),
        format!("{:.2}", e.hourly_rate),
        format!("{:.2}", e.total_distance),
        format!("{:.2}", e.section1),
        format!("{:.2}", e.section2),
        format!("{:.2}", e.section3),
        format!("{:.2}", e.amount),
    ]
}

pub(crate) fn entries_to_table(entries: &[EntryExport]) -> Vec<Vec<String>> {
    entries.iter().map(entry_to_row).collect()
}

/// Plain-text cells of the print view, one line per report row.
/// Day Off rows carry the label in the time column and leave the rest blank.
pub(crate) fn print_cells(report: &Report, cfg: &Config) -> Vec<Vec<String>> {
    report
        .rows
        .iter()
        .map(|row| {
            let e = &row.entry;
            let mut cells = vec![
                row.position.to_string(),
                e.token.clone(),
                row.name.clone(),
                format_date(&e.date, &cfg.date_format),
            ];
            if e.is_day_off {
                cells.push("Day Off".to_string());
                cells.extend(std::iter::repeat_n(String::new(), 6));
            } else {
                cells.extend([
                    format_time(e.hours, e.minutes),
                    format_amount(row.hourly_rate, &cfg.currency_symbol),
                    format_distance(e.total_distance),
                    format_distance(e.section1),
                    format_distance(e.section2),
                    format_distance(e.section3),
                    format_amount(e.amount, &cfg.currency_symbol),
                ]);
            }
            cells
        })
        .collect()
}
