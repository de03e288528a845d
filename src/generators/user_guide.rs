//! Generator for the PDF user guide describing the pack and its workflow.

use super::pdf::PdfWriter;
use super::text::DISCLAIMER_TEXT;
use super::{ArtifactKind, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

const FILE_NAME: &str = "09_User_Guide.pdf";

pub fn create_user_guide(profile: &CompanyProfile) -> Result<GeneratedArtifact, GeneratorError> {
    let mut writer = PdfWriter::new();

    writer.byline(&profile.name);
    writer.spacer(8.0);
    writer.title("BILINGUAL BUSINESS OPERATIONS TEMPLATE PACK");
    writer.spacer(6.0);
    writer.heading("Complete Professional Solution for Malaysian Machinery Rental SMEs");
    writer.spacer(8.0);
    writer.paragraph(&format!("LEGAL DISCLAIMER: {DISCLAIMER_TEXT}"));

    writer.heading("WHAT'S INCLUDED:");
    let included = [
        "1. Equipment Rental Agreement - Complete legal contract (EN/MS)",
        "2. Machinery Booking Form - Professional bilingual form",
        "3. Professional Invoice - Auto-calculated Excel template (EN/MS)",
        "4. Equipment Service Log - Maintenance tracking spreadsheet (EN/MS)",
        "5. Payment Reminder Letter - Overdue payment follow-up (EN/MS)",
        "6. Customer Portal Form - Online client access registration",
        "7. Quotation Template - Professional quotes with auto-calc",
        "8. Delivery Checklist - Pre-delivery inspection (EN/MS)",
        "9. User Guide (This Doc) - Complete instructions",
        "10. Product Overview - Sales materials",
    ];
    for item in included {
        writer.bullet("-", item);
    }

    writer.heading("HOW TO USE:");
    let steps = [
        "STEP 1: Open the desired template in Microsoft Word/Excel or Google Docs/Sheets.",
        "STEP 2: Find all text marked with <<placeholders>>.",
        "STEP 3: Replace the placeholders with your client's or job's specific information.",
        "STEP 4: For Excel files (Invoice, Quote, Log), enter your data and the formulas will auto-calculate.",
        "STEP 5: Save the document with a new name (e.g., 'Invoice_ClientName_Date.xlsx').",
    ];
    for (i, step) in steps.iter().enumerate() {
        writer.bullet(&format!("{}.", i + 1), step);
    }

    writer.heading("RECOMMENDED WORKFLOW:");
    let workflow = [
        "Client inquires -> Use Booking Form to capture details (including PO #).",
        "Confirm booking -> Send Quotation Template.",
        "Client confirms -> Send Equipment Rental Agreement for signature.",
        "Before delivery -> Use Delivery Checklist for inspection.",
        "Job completion -> Issue Professional Invoice (use PO # as reference).",
        "Payment overdue -> Send Payment Reminder Letter.",
        "After service -> Update Equipment Service Log (note Hour Meter).",
    ];
    for (i, step) in workflow.iter().enumerate() {
        writer.bullet(&format!("{}.", i + 1), step);
    }

    writer.heading("CUSTOMIZATION TIPS:");
    let tips = [
        "Your main company details (name, address, bank) are already included.",
        "You can add your company logo to the headers of the Word documents.",
        "Adjust tax rates (e.g., SST 6%) in the Excel formulas if needed.",
        "Crucial: Review the legal clauses in the Agreement with a professional.",
    ];
    for tip in tips {
        writer.bullet("-", tip);
    }

    let bytes = writer.finish("Bilingual Business Operations Template Pack - User Guide");
    Ok(GeneratedArtifact::new(FILE_NAME, bytes, ArtifactKind::Pdf))
}
