// src/export/pdf_export.rs

use crate::config::Config;
use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::export::model::{entries_to_table, get_headers, print_cells};
use crate::export::pdf::PdfManager;
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use crate::ui::render::{ENTRY_HEADERS, driver_card_lines, totals_lines};
use std::io;
use std::path::Path;

/// Flat PDF export: one table with every exported field.
pub(crate) fn export_pdf(entries: &[EntryExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = entries_to_table(entries);

    let mut pdf = PdfManager::new();
    pdf.write_title(title);
    pdf.write_table(&headers, &data_vec);

    save(pdf, path)?;

    notify_export_success("PDF", path);
    Ok(())
}

/// Printable report: entry table, grand totals and one card per driver.
pub(crate) fn print_pdf(report: &Report, cfg: &Config, path: &Path) -> AppResult<()> {
    info(format!("Writing print view to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();

    pdf.write_title("Filtered Entries");
    pdf.write_table(&ENTRY_HEADERS, &print_cells(report, cfg));
    pdf.write_gap();
    for line in totals_lines(&report.totals, cfg) {
        pdf.write_line(&line);
    }

    pdf.write_gap();
    pdf.write_title("Driver Summary");
    for card in &report.drivers {
        pdf.write_gap();
        pdf.write_line(&format!("{} ({})", card.name, card.token));
        for line in driver_card_lines(card, cfg) {
            pdf.write_line(&format!("    {line}"));
        }
    }

    save(pdf, path)?;

    notify_export_success("PDF print", path);
    Ok(())
}

fn save(pdf: PdfManager, path: &Path) -> AppResult<()> {
    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))
}
