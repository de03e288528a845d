//! Generator for the customer portal access request form.

use docx_rs::{Docx, Paragraph};

use super::branding::apply_branding;
use super::common::{body, field_value_table, heading, heading_centered, pack_docx};
use super::{ArtifactKind, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

const FILE_NAME: &str = "06_Customer_Portal_Form.docx";

pub fn create_portal_form(profile: &CompanyProfile) -> Result<GeneratedArtifact, GeneratorError> {
    let fields: Vec<(&str, &str)> = vec![
        ("Company Name", "<<Company Name>>"),
        ("Registration No.", "<<Reg No>>"),
        ("", ""),
        ("PRIMARY AUTHORIZED USER", ""),
        ("Contact Name", "<<Contact Name>>"),
        ("Designation", "<<Job Title>>"),
        ("Email Address (Username)", "<<Email>>"),
        ("Phone Number", "<<Phone>>"),
        ("", ""),
        ("PORTAL ACCESS REQUIRED", ""),
        (
            "Access Features",
            "☐ View/Download Invoices\n☐ Make Online Payments\n☐ Track Equipment On-Site\n☐ Log Service Requests",
        ),
        ("Notification Preferences", "☐ Email Notifications ☐ SMS Alerts"),
    ];

    let docx = apply_branding(Docx::new(), profile)
        .add_paragraph(heading_centered("CUSTOMER PORTAL ACCESS REQUEST FORM", 40))
        .add_paragraph(heading_centered("BORANG PERMOHONAN AKSES PORTAL PELANGGAN", 28))
        .add_paragraph(Paragraph::new())
        .add_paragraph(body(
            "Please complete this form to register for online access to your account, where you \
             can track equipment, view invoices, and make payments.",
        ))
        .add_paragraph(Paragraph::new())
        .add_table(field_value_table(&fields, vec![3600, 5760]))
        .add_paragraph(Paragraph::new())
        .add_paragraph(heading("Declaration / Pengisytiharan", 24))
        .add_paragraph(body(
            "I, the undersigned, confirm that I am an authorized representative of the \
             above-named company and request access to the customer portal.",
        ))
        .add_paragraph(body("\n\nSignature: _____________________"))
        .add_paragraph(body("Name: _____________________"))
        .add_paragraph(body("Date: _____________________"))
        .add_paragraph(body("Company Stamp: "));

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
    fn test_portal_form_artifact() {
        let artifact = create_portal_form(&sample_profile()).unwrap();
        assert_eq!(artifact.filename, "06_Customer_Portal_Form.docx");
        assert_eq!(&artifact.bytes[0..2], b"PK");
    }
}
