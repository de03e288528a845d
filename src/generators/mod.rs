//! Template generators - one module per document in the pack.
//!
//! Each generator is a pure function taking a validated [`CompanyProfile`]
//! and returning one in-memory artifact (DOCX, XLSX or PDF) under its fixed
//! archive file name.
//!
//! [`CompanyProfile`]: crate::pack::models::CompanyProfile

pub mod booking_form;
pub mod branding;
pub mod common;
pub mod delivery_checklist;
pub mod invoice;
pub mod payment_reminder;
pub mod pdf;
pub mod portal_form;
pub mod product_overview;
pub mod quotation;
pub mod rental_agreement;
pub mod service_log;
pub mod text;
pub mod user_guide;
pub mod validation;

pub use booking_form::create_booking_form;
pub use delivery_checklist::create_delivery_checklist;
pub use invoice::create_invoice;
pub use payment_reminder::create_payment_reminder;
pub use portal_form::create_portal_form;
pub use product_overview::create_product_overview;
pub use quotation::create_quotation;
pub use rental_agreement::create_rental_agreement;
pub use service_log::create_service_log;
pub use user_guide::create_user_guide;

use thiserror::Error;

/// Errors that can occur while generating documents or packaging the bundle.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to build DOCX document: {0}")]
    Docx(String),
    #[error("failed to build XLSX workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("failed to create temporary workspace: {0}")]
    Workspace(#[source] std::io::Error),
    #[error("failed to write artifact into workspace: {0}")]
    WriteArtifact(#[source] std::io::Error),
    #[error("failed to read workspace entry: {0}")]
    ReadWorkspace(#[source] std::io::Error),
    #[error("failed to write bundle archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("failed to stream artifact into archive: {0}")]
    ArchiveIo(#[source] std::io::Error),
}

/// Format of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Document,
    Workbook,
    Pdf,
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub kind: ArtifactKind,
}

impl GeneratedArtifact {
    pub fn new(filename: &str, bytes: Vec<u8>, kind: ArtifactKind) -> Self {
        Self {
            filename: filename.to_string(),
            bytes,
            kind,
        }
    }
}
