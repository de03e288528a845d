//! Generator for the machinery booking form.

use docx_rs::{Docx, Paragraph, Run};

use super::branding::apply_branding;
use super::common::{field_value_table, heading_centered, pack_docx, short_date, today};
use super::text::{DISCLAIMER_EN, DISCLAIMER_MS};
use super::{ArtifactKind, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

const FILE_NAME: &str = "02_Machinery_Booking_Form.docx";

pub fn create_booking_form(profile: &CompanyProfile) -> Result<GeneratedArtifact, GeneratorError> {
    let booking_date = short_date(today());

    let fields: Vec<(&str, &str)> = vec![
        ("Booking Date", booking_date.as_str()),
        ("Booking Reference", "<<BK-YYMMDD-XXXXX>>"),
        ("", ""),
        ("CLIENT COMPANY DETAILS", ""),
        ("Company Name", "<<Company Name>>"),
        ("Registration No.", "<<Registration>>"),
        ("Address", "<<Address>>"),
        ("Phone", "<<Phone>>"),
        ("Email", "<<Email>>"),
        ("", ""),
        ("SITE CONTACT PERSON", ""),
        ("Name", "<<Contact Name>>"),
        ("Phone", "<<Contact Phone>>"),
        ("", ""),
        ("RENTAL SITE", ""),
        ("Site Name", "<<Site Name>>"),
        ("Site Address", "<<Site Address>>"),
        ("", ""),
        ("RENTAL PERIOD & PAYMENT", ""),
        ("Start Date & Time", "<<Date & Time>>"),
        ("End Date & Time", "<<Date & Time>>"),
        ("Duration", "<<Days/Weeks>>"),
        ("Purchase Order (PO) #", "<<PO Number>>"),
        ("", ""),
        ("EQUIPMENT REQUIRED", ""),
        ("Equipment 1", "<<Description>> - Qty: <<Qty>>"),
        ("Equipment 2", "<<Description>> - Qty: <<Qty>>"),
        ("Operator Required?", "☐ Yes  ☐ No"),
        ("", ""),
        ("Authorized By", "<<Name>>"),
        ("Signature", "\n\n_______________________"),
    ];

    let docx = apply_branding(Docx::new(), profile)
        .add_paragraph(heading_centered("MACHINERY BOOKING FORM", 40))
        .add_paragraph(heading_centered("BORANG TEMPAHAN PERALATAN", 28))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(DISCLAIMER_EN).size(16)))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(DISCLAIMER_MS).size(16)))
        .add_paragraph(Paragraph::new())
        .add_table(field_value_table(&fields, vec![3600, 5760]));

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
    fn test_booking_form_artifact() {
        let artifact = create_booking_form(&sample_profile()).unwrap();
        assert_eq!(artifact.filename, "02_Machinery_Booking_Form.docx");
        assert_eq!(&artifact.bytes[0..2], b"PK");
    }
}
