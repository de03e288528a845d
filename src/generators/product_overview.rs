//! Generator for the product overview (sales copy for the pack itself).

use docx_rs::{AlignmentType, Docx, Paragraph, Run};

use super::branding::apply_branding;
use super::common::{body, bullet, heading, heading_centered, pack_docx, page_break, text_with_breaks};
use super::{ArtifactKind, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

const FILE_NAME: &str = "10_Product_Overview.docx";

const PACKAGE_CONTENTS: [&str; 10] = [
    "01. Equipment Rental Agreement - 12+ page complete contract (EN/MS)",
    "02. Machinery Booking Form - Professional bilingual form",
    "03. Professional Invoice - Auto-calculated with SST (EN/MS)",
    "04. Equipment Service Log - Detailed maintenance tracking (EN/MS)",
    "05. Payment Reminder Letter - Overdue invoice follow-up (EN/MS)",
    "06. Customer Portal Form - Client online access registration",
    "07. Quotation Template - Professional quote system (Excel)",
    "08. Delivery Checklist - Pre-delivery equipment inspection (EN/MS)",
    "09. User Guide - Complete instructions and workflow (PDF)",
    "10. Product Overview (This Doc) - Sales materials and description",
];

pub fn create_product_overview(
    profile: &CompanyProfile,
) -> Result<GeneratedArtifact, GeneratorError> {
    let mut docx = apply_branding(Docx::new(), profile)
        .add_paragraph(heading_centered("COMPLETE BILINGUAL BUSINESS TEMPLATE PACK", 40))
        .add_paragraph(heading_centered("FOR MALAYSIAN MACHINERY RENTAL SMEs", 28))
        .add_paragraph(Paragraph::new())
        .add_paragraph(body(
            "Stop worrying about managing your rental business. Our comprehensive template pack \
             provides everything needed to run professional, compliant, and profitable rental \
             operations.\n\n\
             Berhenti bimbang tentang menguruskan perniagaan sewaan anda. Pakej templat \
             komprehensif kami menyediakan semua yang diperlukan untuk menjalankan operasi \
             sewaan yang profesional dan menguntungkan.\n\n",
        ))
        .add_paragraph(heading("KEY BENEFITS / FAEDAH UTAMA:", 28))
        .add_paragraph(body(
            "✓ All-in-One Solution - 10 essential templates\n\
             ✓ Professional Branding - Your company info and logo on every document\n\
             ✓ Bilingual Ready - English + Bahasa Melayu for clear communication\n\
             ✓ Auto-Calculations - Formulas in Excel templates for Invoices & Quotes\n\
             ✓ Legal Protection - A comprehensive rental agreement included\n\
             ✓ Multiple Formats - DOCX, XLSX, PDF\n\
             ✓ Time Saving - Pre-formatted, just fill in client details\n\
             ✓ Cost Effective - Professional quality documents instantly\n",
        ))
        .add_paragraph(page_break())
        .add_paragraph(heading("PACKAGE CONTENTS / KANDUNGAN PAKEJ:", 28));

    for item in PACKAGE_CONTENTS {
        docx = docx.add_paragraph(bullet(item));
    }

    docx = docx.add_paragraph(Paragraph::new()).add_paragraph(
        Paragraph::new()
            .add_run(text_with_breaks(
                Run::new().bold(),
                "Ready to Professionalize Your Operations?\nSedia untuk Memprofesionalkan Operasi Anda?\n\n",
            ))
            .add_run(text_with_breaks(
                Run::new(),
                "Get instant access to all 10 professional templates.\n\
                 Dapatkan akses segera ke semua 10 templat profesional.",
            ))
            .align(AlignmentType::Center),
    );

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
    fn test_product_overview_artifact() {
        let artifact = create_product_overview(&sample_profile()).unwrap();
        assert_eq!(artifact.filename, "10_Product_Overview.docx");
        assert_eq!(&artifact.bytes[0..2], b"PK");
    }
}
