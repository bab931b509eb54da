//! Terminal rendering of the directory, the entry table and the driver
//! summary. Pure projection of a `Report`; nothing here touches storage.

use crate::config::Config;
use crate::core::report::{DriverCard, Report};
use crate::models::{Employee, Totals};
use crate::ui::messages::header;
use crate::utils::colors::{colorize_zero, day_off};
use crate::utils::table::Table;
use crate::utils::{format_amount, format_date, format_distance, format_time};

pub const ENTRY_HEADERS: [&str; 11] = [
    "#",
    "Token",
    "Name",
    "Date",
    "Overtime Hours",
    "Overtime Rate 1hr",
    "Total Distance",
    "Section 1 (50km)",
    "Section 2 (25km)",
    "Section 3 (Remaining)",
    "Amount",
];

pub fn employees_table(employees: &[Employee], cfg: &Config) -> String {
    let mut table = Table::with_headers(&["#", "Name", "Token", "Hourly Rate"]);
    for (i, e) in employees.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            e.name.clone(),
            e.token.clone(),
            format_amount(e.hourly_rate, &cfg.currency_symbol),
        ]);
    }
    table.render(&cfg.separator_char)
}

pub fn entries_table(report: &Report, cfg: &Config) -> String {
    let mut table = Table::with_headers(&ENTRY_HEADERS);

    for row in &report.rows {
        let e = &row.entry;
        let mut cells = vec![
            row.position.to_string(),
            e.token.clone(),
            row.name.clone(),
            format_date(&e.date, &cfg.date_format),
        ];

        if e.is_day_off {
            cells.push(day_off("Day Off"));
            cells.extend(std::iter::repeat_n(String::new(), 6));
        } else {
            cells.extend([
                colorize_zero(&format_time(e.hours, e.minutes)),
                format_amount(row.hourly_rate, &cfg.currency_symbol),
                colorize_zero(&format_distance(e.total_distance)),
                colorize_zero(&format_distance(e.section1)),
                colorize_zero(&format_distance(e.section2)),
                colorize_zero(&format_distance(e.section3)),
                format_amount(e.amount, &cfg.currency_symbol),
            ]);
        }

        table.add_row(cells);
    }

    table.render(&cfg.separator_char)
}

/// The grand totals line shown under the table.
pub fn totals_lines(totals: &Totals, cfg: &Config) -> Vec<String> {
    vec![
        format!(
            "Total Time: {}",
            format_time(totals.total_hours, totals.total_minutes)
        ),
        format!(
            "Total Amount: {}",
            format_amount(totals.total_amount, &cfg.currency_symbol)
        ),
        format!("Total Distance: {}", format_distance(totals.total_distance)),
        format!("Section 1 (50km): {}", format_distance(totals.section1)),
        format!("Section 2 (25km): {}", format_distance(totals.section2)),
        format!("Section 3 (Remaining): {}", format_distance(totals.section3)),
    ]
}

/// `Days Off: n` line of a driver card, only when there are any.
pub fn days_off_line(card: &DriverCard) -> Option<String> {
    (card.summary.day_offs > 0).then(|| format!("Days Off: {}", card.summary.day_offs))
}

/// Lines of one driver card; `Days Off` only appears when there are any.
pub fn driver_card_lines(card: &DriverCard, cfg: &Config) -> Vec<String> {
    let mut lines = totals_lines(&card.summary.totals, cfg);
    lines.extend(days_off_line(card));
    lines
}

pub fn print_report(report: &Report, cfg: &Config) {
    header("Entries", &cfg.separator_char);
    print!("{}", entries_table(report, cfg));

    println!();
    for line in totals_lines(&report.totals, cfg) {
        println!("{line}");
    }

    print_driver_summary(report, cfg);
}

pub fn print_driver_summary(report: &Report, cfg: &Config) {
    header("Driver Summary", &cfg.separator_char);

    for card in &report.drivers {
        println!("\n{} ({})", card.name, card.token);
        for line in totals_lines(&card.summary.totals, cfg) {
            println!("  {line}");
        }
        if let Some(line) = days_off_line(card) {
            println!("  {}", day_off(&line));
        }
    }
}
