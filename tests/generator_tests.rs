use std::io::Read;

use template_pack_server::generators::{self, ArtifactKind, GeneratedArtifact};
use template_pack_server::pack::models::CompanyProfile;

fn test_profile() -> CompanyProfile {
    CompanyProfile {
        name: "Kuala Machinery Sdn Bhd".to_string(),
        phone: "+60 3-1234 5678".to_string(),
        email: "ops@kualamachinery.example".to_string(),
        address: "12 Jalan Industri, 81200 Johor Bahru".to_string(),
        tax_id: "SST-1234-5678".to_string(),
        reg_no: "202201012345".to_string(),
        bank_name: "Maybank".to_string(),
        bank_account: "5123 4567 8901".to_string(),
        swift_code: "MBBEMYKL".to_string(),
    }
}

fn assert_docx(artifact: &GeneratedArtifact, expected_name: &str) {
    assert_eq!(artifact.filename, expected_name);
    assert_eq!(artifact.kind, ArtifactKind::Document);
    assert_eq!(&artifact.bytes[0..2], b"PK");
}

fn assert_xlsx(artifact: &GeneratedArtifact, expected_name: &str) {
    assert_eq!(artifact.filename, expected_name);
    assert_eq!(artifact.kind, ArtifactKind::Workbook);
    assert_eq!(&artifact.bytes[0..2], b"PK");
}

/// Read one named part out of a ZIP-container artifact (DOCX/XLSX).
fn container_entry(bytes: &[u8], entry: &str) -> String {
    let cursor = std::io::Cursor::new(bytes.to_vec());
    let mut archive = zip::ZipArchive::new(cursor).unwrap();
    let mut part = archive.by_name(entry).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// Extract the first worksheet XML from an XLSX artifact.
fn sheet_xml(artifact: &GeneratedArtifact) -> String {
    container_entry(&artifact.bytes, "xl/worksheets/sheet1.xml")
}

#[test]
fn test_rental_agreement_generator() {
    let artifact = generators::create_rental_agreement(&test_profile()).unwrap();
    assert_docx(&artifact, "01_Equipment_Rental_Agreement.docx");
}

#[test]
fn test_booking_form_generator() {
    let artifact = generators::create_booking_form(&test_profile()).unwrap();
    assert_docx(&artifact, "02_Machinery_Booking_Form.docx");
}

#[test]
fn test_invoice_generator() {
    let artifact = generators::create_invoice(&test_profile()).unwrap();
    assert_xlsx(&artifact, "03_Professional_Invoice.xlsx");

    let xml = sheet_xml(&artifact);
    assert!(xml.contains("B15*C15"));
    assert!(xml.contains("SUM(D15:D17)"));
    assert!(xml.contains("D19*0.06"));
    assert!(xml.contains("D19+D20"));
}

#[test]
fn test_service_log_generator() {
    let artifact = generators::create_service_log(&test_profile()).unwrap();
    assert_xlsx(&artifact, "04_Equipment_Service_Log.xlsx");

    let xml = sheet_xml(&artifact);
    assert!(xml.contains("H5+I5"));
    assert!(xml.contains("H7+I7"));
}

#[test]
fn test_payment_reminder_generator() {
    let artifact = generators::create_payment_reminder(&test_profile()).unwrap();
    assert_docx(&artifact, "05_Payment_Reminder_Letter.docx");
}

#[test]
fn test_portal_form_generator() {
    let artifact = generators::create_portal_form(&test_profile()).unwrap();
    assert_docx(&artifact, "06_Customer_Portal_Form.docx");
}

#[test]
fn test_quotation_generator() {
    let artifact = generators::create_quotation(&test_profile()).unwrap();
    assert_xlsx(&artifact, "07_Quotation_Template.xlsx");

    let xml = sheet_xml(&artifact);
    assert!(xml.contains("SUM(D14:D15)"));
    assert!(xml.contains("D17*0.06"));
    assert!(xml.contains("D17+D18"));
}

#[test]
fn test_delivery_checklist_generator() {
    let artifact = generators::create_delivery_checklist(&test_profile()).unwrap();
    assert_docx(&artifact, "08_Delivery_Checklist.docx");
}

#[test]
fn test_user_guide_generator() {
    let artifact = generators::create_user_guide(&test_profile()).unwrap();
    assert_eq!(artifact.filename, "09_User_Guide.pdf");
    assert_eq!(artifact.kind, ArtifactKind::Pdf);
    assert!(artifact.bytes.starts_with(b"%PDF-1.4"));
    assert!(artifact.bytes.ends_with(b"%%EOF\n"));
}

#[test]
fn test_product_overview_generator() {
    let artifact = generators::create_product_overview(&test_profile()).unwrap();
    assert_docx(&artifact, "10_Product_Overview.docx");
}

#[test]
fn test_docx_archives_contain_document_part() {
    // Word refuses files without word/document.xml; make sure the container
    // layout is intact for a representative document.
    let artifact = generators::create_rental_agreement(&test_profile()).unwrap();
    let cursor = std::io::Cursor::new(artifact.bytes);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();
    assert!(archive.by_name("word/document.xml").is_ok());
}

#[test]
fn test_every_document_footer_carries_page_number_field() {
    // The page number must be an updatable field reference resolved by the
    // viewing application, not a literal digit, in each rich-text document.
    let profile = test_profile();
    let documents = [
        generators::create_rental_agreement(&profile).unwrap(),
        generators::create_booking_form(&profile).unwrap(),
        generators::create_payment_reminder(&profile).unwrap(),
        generators::create_portal_form(&profile).unwrap(),
        generators::create_delivery_checklist(&profile).unwrap(),
        generators::create_product_overview(&profile).unwrap(),
    ];

    for artifact in &documents {
        let cursor = std::io::Cursor::new(artifact.bytes.clone());
        let mut archive = zip::ZipArchive::new(cursor).unwrap();

        let footer_names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .filter(|name| name.starts_with("word/footer"))
            .collect();
        assert!(
            !footer_names.is_empty(),
            "{} should carry a footer part",
            artifact.filename
        );

        let mut footer_xml = String::new();
        for name in footer_names {
            archive
                .by_name(&name)
                .unwrap()
                .read_to_string(&mut footer_xml)
                .unwrap();
        }
        assert!(
            footer_xml.contains("PAGE"),
            "{} footer should hold an updatable page field",
            artifact.filename
        );
        assert!(footer_xml.contains("Phone:"), "{}", artifact.filename);
    }
}

#[test]
fn test_repeated_generation_is_deterministic() {
    let profile = test_profile();

    // The PDF writer emits no container metadata, so the full byte stream
    // must match run to run.
    let first = generators::create_user_guide(&profile).unwrap();
    let second = generators::create_user_guide(&profile).unwrap();
    assert_eq!(first.bytes, second.bytes);

    // DOCX and XLSX packaging stamps creation times into the container, so
    // compare the content parts instead of the raw archives. Embedded date
    // strings only move with the calendar day.
    let first = generators::create_rental_agreement(&profile).unwrap();
    let second = generators::create_rental_agreement(&profile).unwrap();
    assert_eq!(
        container_entry(&first.bytes, "word/document.xml"),
        container_entry(&second.bytes, "word/document.xml")
    );

    let first = generators::create_invoice(&profile).unwrap();
    let second = generators::create_invoice(&profile).unwrap();
    assert_eq!(sheet_xml(&first), sheet_xml(&second));
}

#[test]
fn test_profile_values_reach_document_xml() {
    let artifact = generators::create_rental_agreement(&test_profile()).unwrap();
    let cursor = std::io::Cursor::new(artifact.bytes);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();
    let mut document = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    document.read_to_string(&mut xml).unwrap();

    assert!(xml.contains("Kuala Machinery Sdn Bhd"));
    assert!(xml.contains("202201012345"));
}
