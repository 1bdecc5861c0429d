//! PDF rendering.
//!
//! Landscape A4, builtin Helvetica, letterhead block, then the table with
//! a repeated header row on page breaks and a trailing total row.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::error::{Error, Result};
use crate::row::{format_amount, total, Letterhead, Period, ReportRow, COLUMNS};

const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 12.0;
const ROW_STEP: f32 = 7.0;

// Left edge of each column, in millimetres.
const COLUMN_X: [f32; 5] = [12.0, 47.0, 87.0, 152.0, 247.0];

/// Renders a report as PDF bytes.
///
/// The title derives from the caller-supplied report-type label
/// (`"Charges"` becomes `"Charges Report"`). Rows are laid out in server
/// order; the final row is the computed total of the amount column.
pub fn render_pdf(
    letterhead: &Letterhead,
    label: &str,
    period: &Period,
    rows: &[ReportRow],
) -> Result<Vec<u8>> {
    let title = format!("{label} Report");
    let (doc, page, layer) = PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "table");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::pdf(e.to_string()))?;

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN;

    // Letterhead block
    layer.use_text(&letterhead.company, 16.0, Mm(MARGIN), Mm(y), &bold);
    y -= 6.0;
    layer.use_text(&letterhead.address, 9.0, Mm(MARGIN), Mm(y), &regular);
    y -= 5.0;
    layer.use_text(&letterhead.phone, 9.0, Mm(MARGIN), Mm(y), &regular);
    y -= 10.0;

    layer.use_text(&title, 13.0, Mm(MARGIN), Mm(y), &bold);
    y -= 6.0;
    layer.use_text(format!("Period: {period}"), 10.0, Mm(MARGIN), Mm(y), &regular);
    y -= 10.0;

    write_header_row(&layer, &bold, y);
    y -= ROW_STEP;

    for row in rows {
        if y < MARGIN + ROW_STEP {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "table");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - MARGIN;
            write_header_row(&layer, &bold, y);
            y -= ROW_STEP;
        }

        let cells = [
            row.date.format("%d %b %Y").to_string(),
            row.reference.clone(),
            row.party.clone(),
            row.detail.clone(),
            format_amount(row.amount),
        ];
        for (text, x) in cells.iter().zip(COLUMN_X) {
            layer.use_text(text, 9.0, Mm(x), Mm(y), &regular);
        }
        y -= ROW_STEP;
    }

    if y < MARGIN + ROW_STEP {
        let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "table");
        layer = doc.get_page(next_page).get_layer(next_layer);
        y = PAGE_HEIGHT - MARGIN;
    }
    layer.use_text("Total", 10.0, Mm(COLUMN_X[3]), Mm(y), &bold);
    layer.use_text(format_amount(total(rows)), 10.0, Mm(COLUMN_X[4]), Mm(y), &bold);

    doc.save_to_bytes().map_err(|e| Error::pdf(e.to_string()))
}

fn write_header_row(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    for (text, x) in COLUMNS.iter().zip(COLUMN_X) {
        layer.use_text(*text, 9.5, Mm(x), Mm(y), bold);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rows(count: usize) -> Vec<ReportRow> {
        let date = NaiveDate::from_ymd_opt(2026, 7, 14).unwrap();
        (0..count)
            .map(|i| ReportRow {
                date,
                reference: format!("CHG-{i:03}"),
                party: "Meridian Textiles".to_string(),
                detail: "Loading charges".to_string(),
                amount: 100.5,
            })
            .collect()
    }

    fn period() -> Period {
        Period {
            from: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 7, 31).unwrap(),
        }
    }

    #[test]
    fn test_render_pdf_produces_pdf_bytes() {
        let bytes = render_pdf(&Letterhead::default(), "Charges", &period(), &rows(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_pdf_empty_rows_still_renders() {
        let bytes = render_pdf(&Letterhead::default(), "Charges", &period(), &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_pdf_long_report_page_breaks() {
        // Enough rows to spill onto a second page.
        let bytes = render_pdf(&Letterhead::default(), "Charges", &period(), &rows(60)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
