//! Generator for the quotation workbook.
//!
//! Shares the invoice's formula chain: per-row amount, subtotal, SST and
//! total are live formulas recalculated by the opening application.

use chrono::Duration;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Formula, Workbook};

use super::common::{short_date, today};
use super::{ArtifactKind, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

const FILE_NAME: &str = "07_Quotation_Template.xlsx";

const ACCENT: u32 = 0x1F4E78;

/// Fixed rental duration multiplier baked into the sample amount formulas.
const DURATION_DAYS: i64 = 5;

pub fn create_quotation(profile: &CompanyProfile) -> Result<GeneratedArtifact, GeneratorError> {
    let quoted = today();
    let valid_until = quoted + Duration::days(30);

    let mut workbook = Workbook::new();

    let title_format = Format::new()
        .set_bold()
        .set_font_size(16)
        .set_font_color(Color::RGB(ACCENT));
    let bold = Format::new().set_bold();
    let right_bold = Format::new().set_bold().set_align(FormatAlign::Right);
    let header = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(ACCENT))
        .set_border(FormatBorder::Thin);
    let border = Format::new().set_border(FormatBorder::Thin);
    let money = Format::new()
        .set_num_format("#,##0.00")
        .set_border(FormatBorder::Thin);
    let money_bold = Format::new().set_num_format("#,##0.00").set_bold();
    let total_label = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(ACCENT));
    let total_value = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(ACCENT))
        .set_num_format("#,##0.00");

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Quotation")?;

        worksheet.set_column_width(0, 35)?;
        worksheet.set_column_width(1, 10)?;
        worksheet.set_column_width(2, 15)?;
        worksheet.set_column_width(3, 15)?;

        worksheet.merge_range(0, 0, 0, 3, "QUOTATION / SEBUT HARGA", &title_format)?;

        worksheet.write_string_with_format(2, 0, profile.name.as_str(), &bold)?;
        worksheet.write_string(
            3,
            0,
            format!("Tax ID: {} | Reg: {}", profile.tax_id, profile.reg_no),
        )?;
        worksheet.write_string(
            4,
            0,
            format!("Phone: {} | Email: {}", profile.phone, profile.email),
        )?;
        worksheet.write_string(5, 0, profile.address.as_str())?;

        worksheet.write_string_with_format(2, 2, "Quote #:", &right_bold)?;
        worksheet.write_string(2, 3, "<<QT-YYMMDD-XXXXX>>")?;
        worksheet.write_string_with_format(3, 2, "Quote Date:", &right_bold)?;
        worksheet.write_string(3, 3, short_date(quoted))?;
        worksheet.write_string_with_format(4, 2, "Valid Until:", &right_bold)?;
        worksheet.write_string(4, 3, short_date(valid_until))?;

        worksheet.write_string_with_format(7, 0, "Client Information:", &bold)?;
        worksheet.write_string(8, 0, "Client: <<Client Name>>")?;
        worksheet.write_string(9, 0, "Address: <<Address>>")?;
        worksheet.write_string(10, 0, "Attn: <<Contact Person>>")?;

        worksheet.write_string_with_format(12, 0, "Description", &header)?;
        worksheet.write_string_with_format(12, 1, "Duration", &header)?;
        worksheet.write_string_with_format(12, 2, "Rate (RM)", &header)?;
        worksheet.write_string_with_format(12, 3, "Amount (RM)", &header)?;

        let items: [(&str, &str, i64); 2] = [
            ("Hydraulic Excavator", "5 days", 8500),
            ("Operator Service", "5 days", 2000),
        ];

        let start_row: u32 = 13; // first item lands in spreadsheet row 14
        for (i, (description, duration, rate)) in items.iter().enumerate() {
            let row = start_row + i as u32;
            worksheet.write_string_with_format(row, 0, *description, &border)?;
            worksheet.write_string_with_format(row, 1, *duration, &border)?;
            worksheet.write_number_with_format(row, 2, *rate as f64, &money)?;
            worksheet.write_formula_with_format(
                row,
                3,
                Formula::new(format!("={rate}*{DURATION_DAYS}")),
                &money,
            )?;
        }

        let end_a1 = start_row + items.len() as u32; // last item row, 1-based
        let subtotal_row = end_a1 + 1;
        let subtotal_a1 = subtotal_row + 1;
        worksheet.write_string_with_format(subtotal_row, 2, "Subtotal:", &bold)?;
        worksheet.write_formula_with_format(
            subtotal_row,
            3,
            Formula::new(format!("=SUM(D{}:D{end_a1})", start_row + 1)),
            &money_bold,
        )?;

        let sst_row = subtotal_row + 1;
        let sst_a1 = sst_row + 1;
        worksheet.write_string_with_format(sst_row, 2, "SST 6%:", &bold)?;
        worksheet.write_formula_with_format(
            sst_row,
            3,
            Formula::new(format!("=D{subtotal_a1}*0.06")),
            &money_bold,
        )?;

        let total_row = sst_row + 1;
        worksheet.write_string_with_format(total_row, 2, "TOTAL QUOTATION (RM):", &total_label)?;
        worksheet.write_formula_with_format(
            total_row,
            3,
            Formula::new(format!("=D{subtotal_a1}+D{sst_a1}")),
            &total_value,
        )?;

        let terms_row = total_row + 2;
        worksheet.write_string_with_format(terms_row, 0, "Terms & Conditions:", &bold)?;
        worksheet.write_string(
            terms_row + 1,
            0,
            "1. Payment Terms: 50% deposit upon confirmation, 50% upon completion.",
        )?;
        worksheet.write_string(terms_row + 2, 0, "2. Validity: This quotation is valid for 30 days.")?;
        worksheet.write_string(
            terms_row + 3,
            0,
            "3. Client to provide mandatory 'All-Risk' insurance.",
        )?;
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(GeneratedArtifact::new(
        FILE_NAME,
        bytes,
        ArtifactKind::Workbook,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::models::sample_profile;

    #[test]
    fn test_quotation_artifact() {
        let artifact = create_quotation(&sample_profile()).unwrap();
        assert_eq!(artifact.filename, "07_Quotation_Template.xlsx");
        assert_eq!(&artifact.bytes[0..2], b"PK");
    }

    #[test]
    fn test_quotation_formula_cells() {
        let artifact = create_quotation(&sample_profile()).unwrap();
        let mut archive =
            zip::ZipArchive::new(std::io::Cursor::new(artifact.bytes)).unwrap();
        let mut sheet = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name("xl/worksheets/sheet1.xml").unwrap(),
            &mut sheet,
        )
        .unwrap();

        assert!(sheet.contains("8500*5"));
        assert!(sheet.contains("2000*5"));
        assert!(sheet.contains("SUM(D14:D15)"));
        assert!(sheet.contains("D17*0.06"));
        assert!(sheet.contains("D17+D18"));
    }
}
