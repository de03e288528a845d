//! Generator for the pre-delivery inspection checklist.

use docx_rs::{Docx, Paragraph, Run, Table, TableRow};

use super::branding::apply_branding;
use super::common::{body, cell, heading, heading_centered, pack_docx, text_with_breaks};
use super::{ArtifactKind, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

const FILE_NAME: &str = "08_Delivery_Checklist.docx";

const CHECKLIST_ITEMS: [&str; 11] = [
    "Equipment Cleanliness - Clean and free of debris",
    "Fluid Levels - Oil, water, hydraulic at proper levels",
    "Tires & Wheels - No damage, proper pressure",
    "Engine Start - Starts smoothly, no unusual noise",
    "Brake System - Responsive braking, no leaks",
    "Hydraulic System - No leaks, operates smoothly",
    "Lights & Indicators - All working properly",
    "Safety Features - Guards, mirrors, horn, beacon intact",
    "Hour Meter Reading Recorded - <<Hours>>",
    "Documentation - Manuals and records provided to client",
    "Photos Taken - All angles, interior, and any existing damage",
];

pub fn create_delivery_checklist(
    profile: &CompanyProfile,
) -> Result<GeneratedArtifact, GeneratorError> {
    let details = Table::new(vec![
        TableRow::new(vec![cell("Delivery Date"), cell("<<Date>>")]),
        TableRow::new(vec![cell("Equipment ID"), cell("<<Equipment ID>>")]),
        TableRow::new(vec![cell("Client"), cell("<<Client Name>>")]),
        TableRow::new(vec![cell("Delivery Address"), cell("<<Address>>")]),
        TableRow::new(vec![cell("Inspector"), cell("<<Inspector Name>>")]),
    ])
    .set_grid(vec![2880, 6480]);

    let mut docx = apply_branding(Docx::new(), profile)
        .add_paragraph(heading_centered("EQUIPMENT PRE-DELIVERY CHECKLIST", 40))
        .add_paragraph(heading_centered(
            "SENARAI SEMAK PRA-PENGHANTARAN PERALATAN",
            28,
        ))
        .add_paragraph(Paragraph::new())
        .add_table(details)
        .add_paragraph(Paragraph::new())
        .add_paragraph(heading("CHECKLIST / SENARAI SEMAK", 28));

    for item in CHECKLIST_ITEMS {
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(text_with_breaks(Run::new(), item))
                .add_run(text_with_breaks(
                    Run::new(),
                    "\n  Status: ☐ OK  ☐ Issue (See notes)",
                )),
        );
    }

    docx = docx
        .add_paragraph(Paragraph::new())
        .add_paragraph(heading("Notes / Nota:", 24))
        .add_paragraph(body(
            "_________________________________________________________________",
        ))
        .add_paragraph(body(
            "_________________________________________________________________",
        ))
        .add_paragraph(Paragraph::new())
        .add_paragraph(heading("Sign-off / Pengesahan:", 24))
        .add_paragraph(body(
            "We confirm the equipment listed above has been inspected and delivered in good \
             working order.",
        ))
        .add_paragraph(body(
            "Kami mengesahkan peralatan di atas telah diperiksa dan dihantar dalam keadaan baik.",
        ))
        .add_paragraph(body("\n\nInspector Signature: _____________________"))
        .add_paragraph(body("Client Signature: _____________________"))
        .add_paragraph(body("Date: _____________________"));

    Ok(GeneratedArtifact::new(
        FILE_NAME,
        pack_docx(docx)?,
        ArtifactKind::Document,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::models::sample_profile;

    #[test]
    fn test_delivery_checklist_artifact() {
        let artifact = create_delivery_checklist(&sample_profile()).unwrap();
        assert_eq!(artifact.filename, "08_Delivery_Checklist.docx");
        assert_eq!(&artifact.bytes[0..2], b"PK");
    }

    #[test]
    fn test_checklist_has_eleven_items() {
        assert_eq!(CHECKLIST_ITEMS.len(), 11);
    }
}
