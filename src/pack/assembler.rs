//! Pack assembler: runs the ten generators in their fixed order, serializes
//! each artifact into a scoped temporary workspace, and archives the
//! workspace contents into a single in-memory ZIP bundle.

use std::fs;
use std::io::{Cursor, Write};

use tempfile::tempdir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::generators::{self, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

/// Download name of the finished bundle.
pub const BUNDLE_FILE_NAME: &str = "Bilingual_Business_Template_Pack.zip";

/// Number of documents in a complete pack.
pub const PACK_SIZE: usize = 10;

/// Invoke every generator in the documented order. Any single failure aborts
/// the whole pack; no partial results are returned.
pub fn generate_all(profile: &CompanyProfile) -> Result<Vec<GeneratedArtifact>, GeneratorError> {
    Ok(vec![
        generators::create_rental_agreement(profile)?,
        generators::create_booking_form(profile)?,
        generators::create_invoice(profile)?,
        generators::create_service_log(profile)?,
        generators::create_payment_reminder(profile)?,
        generators::create_portal_form(profile)?,
        generators::create_quotation(profile)?,
        generators::create_delivery_checklist(profile)?,
        generators::create_user_guide(profile)?,
        generators::create_product_overview(profile)?,
    ])
}

/// Generate the full pack and return the compressed bundle bytes.
///
/// The temporary workspace is removed on every exit path, including generator
/// failure, when the `tempdir` guard drops.
pub fn assemble(profile: &CompanyProfile) -> Result<Vec<u8>, GeneratorError> {
    let workspace = tempdir().map_err(GeneratorError::Workspace)?;

    for artifact in generate_all(profile)? {
        let path = workspace.path().join(&artifact.filename);
        fs::write(&path, &artifact.bytes).map_err(GeneratorError::WriteArtifact)?;
    }

    // Entry names carry NN_ prefixes, so sorting restores the documented order.
    let mut entries: Vec<_> = fs::read_dir(workspace.path())
        .map_err(GeneratorError::ReadWorkspace)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(GeneratorError::ReadWorkspace)?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let bytes = fs::read(entry.path()).map_err(GeneratorError::ReadWorkspace)?;
        archive.start_file(name, options)?;
        archive.write_all(&bytes).map_err(GeneratorError::ArchiveIo)?;
    }

    let cursor = archive.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::models::sample_profile;

    const EXPECTED_ENTRIES: [&str; 10] = [
        "01_Equipment_Rental_Agreement.docx",
        "02_Machinery_Booking_Form.docx",
        "03_Professional_Invoice.xlsx",
        "04_Equipment_Service_Log.xlsx",
        "05_Payment_Reminder_Letter.docx",
        "06_Customer_Portal_Form.docx",
        "07_Quotation_Template.xlsx",
        "08_Delivery_Checklist.docx",
        "09_User_Guide.pdf",
        "10_Product_Overview.docx",
    ];

    #[test]
    fn test_generate_all_order_and_names() {
        let artifacts = generate_all(&sample_profile()).unwrap();
        assert_eq!(artifacts.len(), PACK_SIZE);
        for (artifact, expected) in artifacts.iter().zip(EXPECTED_ENTRIES) {
            assert_eq!(artifact.filename, expected);
            assert!(!artifact.bytes.is_empty());
        }
    }

    #[test]
    fn test_assemble_bundle_entries() {
        let bundle = assemble(&sample_profile()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bundle)).unwrap();
        assert_eq!(archive.len(), PACK_SIZE);

        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, EXPECTED_ENTRIES);
        // Flat archive: no directory components
        assert!(names.iter().all(|name| !name.contains('/')));
    }
}
