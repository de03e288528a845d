//! Generator for the equipment service & maintenance log workbook.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Formula, Workbook};

use super::{ArtifactKind, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

const FILE_NAME: &str = "04_Equipment_Service_Log.xlsx";

const ACCENT: u32 = 0x1F4E78;

const COLUMNS: [(&str, f64); 11] = [
    ("Equipment ID / ID Peralatan", 15.0),
    ("Location / Lokasi", 15.0),
    ("Date / Tarikh", 12.0),
    ("Hour Meter / Bacaan Meter Jam", 12.0),
    ("Service Type / Jenis Servis", 15.0),
    ("Description / Keterangan", 30.0),
    ("Parts Used / Alat Ganti", 25.0),
    ("Labour Cost / Kos Buruh (RM)", 15.0),
    ("Parts Cost / Kos Alat Ganti (RM)", 15.0),
    ("Total Cost / Jumlah Kos (RM)", 15.0),
    ("Next Service Due / Servis Seterusnya", 18.0),
];

struct LogRow {
    equipment_id: &'static str,
    location: &'static str,
    date: &'static str,
    hour_meter: f64,
    service_type: &'static str,
    description: &'static str,
    parts_used: &'static str,
    labour_cost: f64,
    parts_cost: f64,
    next_service: &'static str,
}

const SAMPLE_ROWS: [LogRow; 3] = [
    LogRow {
        equipment_id: "EQ-001",
        location: "Site A",
        date: "2025-01-15",
        hour_meter: 1200.0,
        service_type: "Routine",
        description: "500-hour service, oil change",
        parts_used: "Oil, Filters",
        labour_cost: 500.0,
        parts_cost: 850.0,
        next_service: "2025-02-15",
    },
    LogRow {
        equipment_id: "EQ-002",
        location: "Yard",
        date: "2025-01-18",
        hour_meter: 2100.0,
        service_type: "Repair",
        description: "Replaced hydraulic hose",
        parts_used: "Hose #H123",
        labour_cost: 1200.0,
        parts_cost: 450.0,
        next_service: "2025-01-25",
    },
    LogRow {
        equipment_id: "EQ-003",
        location: "Site B",
        date: "2025-01-20",
        hour_meter: 4500.0,
        service_type: "Inspection",
        description: "Pre-rental safety check",
        parts_used: "None",
        labour_cost: 300.0,
        parts_cost: 0.0,
        next_service: "2025-03-20",
    },
];

pub fn create_service_log(profile: &CompanyProfile) -> Result<GeneratedArtifact, GeneratorError> {
    let mut workbook = Workbook::new();

    let title_format = Format::new()
        .set_bold()
        .set_font_size(16)
        .set_font_color(Color::RGB(ACCENT))
        .set_align(FormatAlign::Center);
    let centered = Format::new().set_align(FormatAlign::Center);
    let header = Format::new()
        .set_bold()
        .set_font_size(10)
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(ACCENT))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);
    let border = Format::new().set_border(FormatBorder::Thin);
    let money = Format::new()
        .set_num_format("#,##0.00")
        .set_border(FormatBorder::Thin);

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Service Log")?;

        for (i, (_, width)) in COLUMNS.iter().enumerate() {
            worksheet.set_column_width(i as u16, *width)?;
        }

        let last_col = (COLUMNS.len() - 1) as u16;
        worksheet.merge_range(
            0,
            0,
            0,
            last_col,
            "EQUIPMENT SERVICE & MAINTENANCE LOG / LOG SERVIS & PENYELENGGARAAN PERALATAN",
            &title_format,
        )?;
        worksheet.merge_range(1, 0, 1, last_col, profile.name.as_str(), &centered)?;

        for (col, (name, _)) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(3, col as u16, *name, &header)?;
        }

        let start_row: u32 = 4; // first entry lands in spreadsheet row 5
        for (i, log) in SAMPLE_ROWS.iter().enumerate() {
            let row = start_row + i as u32;
            let a1_row = row + 1;
            worksheet.write_string_with_format(row, 0, log.equipment_id, &border)?;
            worksheet.write_string_with_format(row, 1, log.location, &border)?;
            worksheet.write_string_with_format(row, 2, log.date, &border)?;
            worksheet.write_number_with_format(row, 3, log.hour_meter, &border)?;
            worksheet.write_string_with_format(row, 4, log.service_type, &border)?;
            worksheet.write_string_with_format(row, 5, log.description, &border)?;
            worksheet.write_string_with_format(row, 6, log.parts_used, &border)?;
            worksheet.write_number_with_format(row, 7, log.labour_cost, &money)?;
            worksheet.write_number_with_format(row, 8, log.parts_cost, &money)?;
            worksheet.write_formula_with_format(
                row,
                9,
                Formula::new(format!("=H{a1_row}+I{a1_row}")),
                &money,
            )?;
            worksheet.write_string_with_format(row, 10, log.next_service, &border)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(GeneratedArtifact::new(
        FILE_NAME,
        bytes,
        ArtifactKind::Workbook,
    ))
}
