// src/export/logic.rs

use crate::config::Config;
use crate::core::directory::EmployeeDirectory;
use crate::core::ledger::EntryLedger;
use crate::core::report::Report;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::html::render_print_html;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::pdf_export::{export_pdf, print_pdf};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, PrintFormat, notify_export_success};
use crate::ui::messages::{info, warning};
use crate::utils::path::absolute_output;
use std::path::PathBuf;

/// Load both stores and build the filtered report.
fn load_report(pool: &DbPool, search: &Option<String>) -> AppResult<Report> {
    let directory = EmployeeDirectory::load(pool)?;
    let ledger = EntryLedger::load(pool)?;
    let search = search.as_deref().unwrap_or("");
    Ok(Report::build(ledger.all(), &directory, search))
}

/// Resolve the output path and make sure it may be written.
fn prepare_output(file: &str, force: bool) -> AppResult<PathBuf> {
    let path = absolute_output(file)?;
    ensure_writable(&path, force)?;
    ensure_parent(&path)?;
    Ok(path)
}

fn pdf_title(search: &Option<String>) -> String {
    match search.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => format!("Entries for tokens {s}"),
        _ => "All entries".to_string(),
    }
}

/// Flat data export of the (optionally filtered) ledger.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute output path (`~` is expanded)
    /// - `search`: comma/space separated tokens; `None` exports everything
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        search: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = prepare_output(file, force)?;
        let report = load_report(pool, search)?;

        if report.is_empty() {
            warning("No entries found for the selected tokens.");
            return Ok(());
        }

        let rows: Vec<EntryExport> = report.rows.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
            ExportFormat::Pdf => export_pdf(&rows, &path, &pdf_title(search))?,
        }

        Ok(())
    }
}

/// Printable view: entry table, totals and driver cards.
pub struct PrintLogic;

impl PrintLogic {
    pub fn print(
        pool: &mut DbPool,
        cfg: &Config,
        format: PrintFormat,
        file: &str,
        search: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = prepare_output(file, force)?;
        let report = load_report(pool, search)?;

        if report.is_empty() {
            warning("No entries found for the selected tokens.");
            return Ok(());
        }

        match format {
            PrintFormat::Html => {
                info(format!("Writing print view to HTML: {}", path.display()));
                std::fs::write(&path, render_print_html(&report, cfg))?;
                notify_export_success("HTML print", &path);
            }
            PrintFormat::Pdf => print_pdf(&report, cfg, &path)?,
        }

        Ok(())
    }
}
