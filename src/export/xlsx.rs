// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{entry_to_row, get_headers};
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Columns holding text even when the content looks numeric (tokens).
const TEXT_COLUMNS: [&str; 2] = ["token", "name"];

/// Export XLSX with banded rows and auto-sized columns.
pub(crate) fn export_xlsx(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Entries").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, entry) in entries.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in entry_to_row(entry).iter().enumerate() {
            let as_text = TEXT_COLUMNS.contains(&headers[col]);
            write_xlsx_cell(worksheet, row, col as u16, value, band_color, as_text)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell: ISO dates become Excel dates, numbers stay numeric.
fn write_xlsx_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    as_text: bool,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if !as_text {
        if let Some(serial) = parse_to_excel_date(s) {
            let fmt = base.set_num_format("dd mmm yyyy");
            worksheet
                .write_with_format(row, col, serial, &fmt)
                .map_err(to_export_error)?;
            return Ok(());
        }

        if let Ok(num) = s.parse::<f64>() {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, num, &fmt)
                .map_err(to_export_error)?;
            return Ok(());
        }
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
