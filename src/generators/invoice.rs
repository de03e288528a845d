//! Generator for the professional invoice workbook.
//!
//! Amount, subtotal, SST and total cells hold live spreadsheet formulas so
//! the opening application recalculates them when the user edits line items.

use chrono::Duration;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Formula, Workbook};

use super::common::{short_date, today};
use super::{ArtifactKind, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

const FILE_NAME: &str = "03_Professional_Invoice.xlsx";

const ACCENT: u32 = 0x1F4E78;

pub fn create_invoice(profile: &CompanyProfile) -> Result<GeneratedArtifact, GeneratorError> {
    let issued = today();
    let due = issued + Duration::days(30);

    let mut workbook = Workbook::new();

    let title_format = Format::new()
        .set_bold()
        .set_font_size(16)
        .set_font_color(Color::RGB(ACCENT));
    let bold = Format::new().set_bold();
    let right_bold = Format::new().set_bold().set_align(FormatAlign::Right);
    let italic = Format::new().set_italic();
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
        worksheet.set_name("Invoice")?;

        worksheet.set_column_width(0, 35)?;
        worksheet.set_column_width(1, 10)?;
        worksheet.set_column_width(2, 15)?;
        worksheet.set_column_width(3, 15)?;

        worksheet.merge_range(0, 0, 0, 3, "PROFESSIONAL INVOICE / INVOIS PROFESIONAL", &title_format)?;

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

        worksheet.write_string_with_format(2, 2, "Invoice Number / No. Invois:", &right_bold)?;
        worksheet.write_string(2, 3, "<<INV-2025-XXXXX>>")?;
        worksheet.write_string_with_format(3, 2, "Invoice Date / Tarikh Invois:", &right_bold)?;
        worksheet.write_string(3, 3, short_date(issued))?;
        worksheet.write_string_with_format(4, 2, "Due Date / Tarikh Luput:", &right_bold)?;
        worksheet.write_string(4, 3, short_date(due))?;

        worksheet.write_string_with_format(7, 0, "Bill To / Bil Kepada:", &bold)?;
        worksheet.write_string(8, 0, "Client: <<Client Name>>")?;
        worksheet.write_string(9, 0, "Address: <<Address>>")?;
        worksheet.write_string(10, 0, "Attn: <<Contact Person>>")?;
        worksheet.write_string(11, 0, "Reference / Rujukan: <<PO Number>>")?;

        worksheet.write_string_with_format(13, 0, "Description / Keterangan", &header)?;
        worksheet.write_string_with_format(13, 1, "Qty / Kuantiti", &header)?;
        worksheet.write_string_with_format(13, 2, "Unit Price / Harga Unit (RM)", &header)?;
        worksheet.write_string_with_format(13, 3, "Amount / Jumlah (RM)", &header)?;

        let items: [(&str, f64, f64); 3] = [
            ("Equipment Rental - 5 days", 5.0, 8500.0),
            ("Operator Service - 5 days", 5.0, 2000.0),
            ("Delivery & Pickup", 1.0, 1500.0),
        ];

        let start_row: u32 = 14; // first item lands in spreadsheet row 15
        for (i, (description, qty, price)) in items.iter().enumerate() {
            let row = start_row + i as u32;
            let a1_row = row + 1;
            worksheet.write_string_with_format(row, 0, *description, &border)?;
            worksheet.write_number_with_format(row, 1, *qty, &border)?;
            worksheet.write_number_with_format(row, 2, *price, &money)?;
            worksheet.write_formula_with_format(
                row,
                3,
                Formula::new(format!("=B{a1_row}*C{a1_row}")),
                &money,
            )?;
        }

        let end_a1 = start_row + items.len() as u32; // last item row, 1-based
        let subtotal_row = end_a1 + 1; // 0-based index; spreadsheet row end_a1 + 2
        let subtotal_a1 = subtotal_row + 1;
        worksheet.write_string_with_format(subtotal_row, 2, "Subtotal / Jumlah Kecil:", &bold)?;
        worksheet.write_formula_with_format(
            subtotal_row,
            3,
            Formula::new(format!("=SUM(D{}:D{end_a1})", start_row + 1)),
            &money_bold,
        )?;

        let sst_row = subtotal_row + 1;
        let sst_a1 = sst_row + 1;
        worksheet.write_string_with_format(sst_row, 2, "SST 6% / Cukai SST 6%:", &bold)?;
        worksheet.write_formula_with_format(
            sst_row,
            3,
            Formula::new(format!("=D{subtotal_a1}*0.06")),
            &money_bold,
        )?;

        let total_row = sst_row + 1;
        worksheet.write_string_with_format(total_row, 2, "TOTAL / JUMLAH (RM):", &total_label)?;
        worksheet.write_formula_with_format(
            total_row,
            3,
            Formula::new(format!("=D{subtotal_a1}+D{sst_a1}")),
            &total_value,
        )?;

        let payment_row = total_row + 2;
        worksheet.write_string_with_format(payment_row, 0, "Payment Details / Butiran Bayaran:", &bold)?;
        worksheet.write_string(
            payment_row + 1,
            0,
            "Payment Terms / Terma Bayaran: Net 30 days from invoice date",
        )?;
        worksheet.write_string(payment_row + 2, 0, format!("Bank: {}", profile.bank_name))?;
        worksheet.write_string(
            payment_row + 3,
            0,
            format!("Account: {}", profile.bank_account),
        )?;
        worksheet.write_string_with_format(
            payment_row + 4,
            0,
            "Thank you for your business! / Terima kasih atas urus niaga anda!",
            &italic,
        )?;
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(GeneratedArtifact::new(
        FILE_NAME,
        bytes,
        ArtifactKind::Workbook,
    ))
}
