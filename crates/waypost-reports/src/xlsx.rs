//! XLSX rendering.
//!
//! Same logical content as the PDF path: title, subtitle, period line,
//! filled header row, one row per record, numeric format on the amount
//! column, fixed column widths. The workbook is returned as a buffer for
//! the caller to hand off as a download.

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::error::{Error, Result};
use crate::row::{total, Letterhead, Period, ReportRow, COLUMNS};

const COLUMN_WIDTHS: [f64; 5] = [14.0, 16.0, 28.0, 42.0, 14.0];
const HEADER_FILL: u32 = 0xD9E1F2;

/// Renders a report as an `.xlsx` buffer.
pub fn render_xlsx(
    letterhead: &Letterhead,
    label: &str,
    period: &Period,
    rows: &[ReportRow],
) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_sheet(worksheet, letterhead, label, period, rows)
        .map_err(|e| Error::xlsx(e.to_string()))?;
    workbook
        .save_to_buffer()
        .map_err(|e| Error::xlsx(e.to_string()))
}

fn write_sheet(
    worksheet: &mut Worksheet,
    letterhead: &Letterhead,
    label: &str,
    period: &Period,
    rows: &[ReportRow],
) -> std::result::Result<(), XlsxError> {
    let title = format!("{label} Report");

    let title_fmt = Format::new().set_bold().set_font_size(14);
    let header_fmt = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin);
    let amount_fmt = Format::new().set_num_format("#,##0.00");
    let total_fmt = Format::new().set_bold().set_num_format("#,##0.00");
    let bold_fmt = Format::new().set_bold();

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    worksheet.write_string_with_format(0, 0, title.as_str(), &title_fmt)?;
    worksheet.write_string(1, 0, letterhead.company.as_str())?;
    worksheet.write_string(2, 0, format!("Period: {period}").as_str())?;

    let header_row = 4;
    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(header_row, col as u16, *name, &header_fmt)?;
    }

    let mut row_idx = header_row + 1;
    for row in rows {
        let date = row.date.format("%d %b %Y").to_string();
        worksheet.write_string(row_idx, 0, date.as_str())?;
        worksheet.write_string(row_idx, 1, row.reference.as_str())?;
        worksheet.write_string(row_idx, 2, row.party.as_str())?;
        worksheet.write_string(row_idx, 3, row.detail.as_str())?;
        worksheet.write_number_with_format(row_idx, 4, row.amount, &amount_fmt)?;
        row_idx += 1;
    }

    worksheet.write_string_with_format(row_idx, 3, "Total", &bold_fmt)?;
    worksheet.write_number_with_format(row_idx, 4, total(rows), &total_fmt)?;
    Ok(())
}
