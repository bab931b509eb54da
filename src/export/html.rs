// src/export/html.rs

use crate::config::Config;
use crate::core::report::Report;
use crate::export::model::print_cells;
use crate::ui::render::{ENTRY_HEADERS, days_off_line, totals_lines};

const PRINT_CSS: &str = "\
body { font-family: Arial, sans-serif; padding: 20px; }
table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
th, td { border: 1px solid #ccc; padding: 8px; text-align: left; }
th { background: #eee; }
h2, h3 { margin-top: 20px; }
.day-off td:nth-child(5), p.day-off { color: #b36b00; font-weight: bold; }
.driver-card { border: 1px solid #ddd; border-radius: 4px; padding: 15px; margin-bottom: 15px; background: #f9f9f9; }
";

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Standalone printable HTML page for a filtered report.
pub fn render_print_html(report: &Report, cfg: &Config) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">\n");
    html.push_str("<title>Print Details</title>\n");
    html.push_str(&format!("<style>\n{PRINT_CSS}</style>\n"));
    html.push_str("</head><body>\n");

    html.push_str("<h2>Filtered Entries</h2>\n<table><thead><tr>");
    for h in ENTRY_HEADERS {
        html.push_str(&format!("<th>{}</th>", escape(h)));
    }
    html.push_str("</tr></thead><tbody>\n");

    for (row, cells) in report.rows.iter().zip(print_cells(report, cfg)) {
        let class = if row.entry.is_day_off {
            " class=\"day-off\""
        } else {
            ""
        };
        html.push_str(&format!("<tr{class}>"));
        for cell in cells {
            html.push_str(&format!("<td>{}</td>", escape(&cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody></table>\n");

    html.push_str("<div class=\"totals\">\n");
    for line in totals_lines(&report.totals, cfg) {
        html.push_str(&format!("<p>{}</p>\n", escape(&line)));
    }
    html.push_str("</div>\n");

    html.push_str("<h2>Driver Summary</h2>\n");
    for card in &report.drivers {
        html.push_str("<div class=\"driver-card\">\n");
        html.push_str(&format!(
            "<h3>{} ({})</h3>\n",
            escape(&card.name),
            escape(&card.token)
        ));
        for line in totals_lines(&card.summary.totals, cfg) {
            html.push_str(&format!("<p>{}</p>\n", escape(&line)));
        }
        if let Some(line) = days_off_line(card) {
            html.push_str(&format!("<p class=\"day-off\">{}</p>\n", escape(&line)));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body></html>\n");
    html
}
