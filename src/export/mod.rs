// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod html;
mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use html::render_print_html;
pub use logic::{ExportLogic, PrintLogic};
pub use model::EntryExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every writer.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

/// Output surface of the print view.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PrintFormat {
    Html,
    Pdf,
}
