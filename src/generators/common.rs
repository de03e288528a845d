//! Common utilities for document generation.
//!
//! Shared helpers for dates, DOCX building blocks, and serializing a
//! finished document to bytes.

use std::io::Cursor;

use chrono::{Local, NaiveDate};
use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Run, Table, TableCell, TableRow,
};

use super::GeneratorError;

/// Accent color used for headings and branded table sections (dark blue).
pub const ACCENT_COLOR: &str = "1F4E78";

/// Muted gray for footer text.
pub const FOOTER_GRAY: &str = "808080";

/// Current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as `DD-MM-YYYY` (forms and spreadsheets).
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Format a date as `DD Month YYYY` (letters).
pub fn long_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// Append `text` to a run, converting embedded newlines into line breaks.
pub fn text_with_breaks(mut run: Run, text: &str) -> Run {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    run
}

/// Bold accent-colored heading paragraph. `size` is in half-points.
pub fn heading(text: &str, size: usize) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(size).color(ACCENT_COLOR))
}

/// Heading centered on the page.
pub fn heading_centered(text: &str, size: usize) -> Paragraph {
    heading(text, size).align(AlignmentType::Center)
}

/// Plain body paragraph, newline-aware.
pub fn body(text: &str) -> Paragraph {
    Paragraph::new().add_run(text_with_breaks(Run::new(), text))
}

/// Bullet list entry.
pub fn bullet(text: &str) -> Paragraph {
    body(&format!("• {text}"))
}

/// Indented bullet list entry (second level).
pub fn sub_bullet(text: &str) -> Paragraph {
    body(&format!("• {text}")).indent(Some(720), None, None, None)
}

/// Paragraph containing only a page break.
pub fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

/// Plain table cell, newline-aware.
pub fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(body(text))
}

/// Bold table cell.
pub fn bold_cell(text: &str) -> TableCell {
    TableCell::new()
        .add_paragraph(Paragraph::new().add_run(text_with_breaks(Run::new().bold(), text)))
}

/// Two-column field/value table. Rows with an empty value render as a merged
/// bold accent-colored section header spanning both columns.
pub fn field_value_table(rows: &[(&str, &str)], grid: Vec<usize>) -> Table {
    let table_rows = rows
        .iter()
        .map(|(field, value)| {
            if value.is_empty() {
                let header = TableCell::new()
                    .add_paragraph(Paragraph::new().add_run(
                        text_with_breaks(Run::new().bold().color(ACCENT_COLOR), field),
                    ))
                    .grid_span(2);
                TableRow::new(vec![header])
            } else {
                TableRow::new(vec![cell(field), cell(value)])
            }
        })
        .collect();

    Table::new(table_rows).set_grid(grid)
}

/// Serialize a finished DOCX builder to bytes.
pub fn pack_docx(docx: Docx) -> Result<Vec<u8>, GeneratorError> {
    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| GeneratorError::Docx(e.to_string()))?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_short_date_format() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(short_date(date), "05-01-2025");
    }

    #[test]
    fn test_long_date_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(long_date(date), "14 March 2025");
    }

    #[test]
    fn test_due_date_crosses_month_and_leap_boundaries() {
        let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            jan31 + chrono::Duration::days(30),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        let jan31_leapless = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(
            jan31_leapless + chrono::Duration::days(30),
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
        );
    }

    #[test]
    fn test_pack_docx_produces_zip_container() {
        let docx = Docx::new().add_paragraph(body("hello"));
        let bytes = pack_docx(docx).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }
}
