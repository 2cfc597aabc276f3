//! Styled XLSX rendering of the attendance ledger. The status columns carry
//! the kiosk's two-color convention: green for Present/OK, red for Absent/NG.

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ledger::attendance::ATTENDANCE_HEADERS;
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const PASS_FILL: Color = Color::RGB(0xC6EFCE);
const FAIL_FILL: Color = Color::RGB(0xFFC7CE);

/// Export XLSX with status coloring and auto column widths.
pub(crate) fn export_xlsx(records: &[AttendanceRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if records.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_app_error)?;
        workbook.save(path_str(path)?).map_err(to_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in ATTENDANCE_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = ATTENDANCE_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    for (row_index, record) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let fill = if record.attendance == AttendanceStatus::Present {
            PASS_FILL
        } else {
            FAIL_FILL
        };

        let text = Format::new().set_border(FormatBorder::Thin);
        let number = Format::new()
            .set_align(FormatAlign::Right)
            .set_border(FormatBorder::Thin);
        let status = Format::new()
            .set_background_color(fill)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        let cells = record.to_row();
        for (col, value) in cells.iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, &text, &number, &status)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Columns 0..=3 are text, 4 is the numeric reading, 5..=6 are the colored
/// status cells.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    text: &Format,
    number: &Format,
    status: &Format,
) -> AppResult<()> {
    match col {
        4 => {
            let level: f64 = value.parse().unwrap_or(0.0);
            worksheet
                .write_with_format(row, col, level, number)
                .map_err(to_app_error)?;
        }
        5 | 6 => {
            worksheet
                .write_with_format(row, col, value, status)
                .map_err(to_app_error)?;
        }
        _ => {
            worksheet
                .write_with_format(row, col, value, text)
                .map_err(to_app_error)?;
        }
    }
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))
}
