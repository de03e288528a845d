//! Shared formatter: branded header and footer applied to every rich-text
//! document in the pack.

use docx_rs::{AlignmentType, Docx, Footer, Header, PageNum, Paragraph, Run};

use super::common::{ACCENT_COLOR, FOOTER_GRAY};
use crate::pack::models::CompanyProfile;

/// Decorate a document with the company header and contact footer.
///
/// The header carries the company name in bold accent color. The footer lists
/// the contact and registration details followed by a `Page ` label and an
/// auto-updating page-number field, resolved by the viewing application.
pub fn apply_branding(docx: Docx, profile: &CompanyProfile) -> Docx {
    let header = Header::new().add_paragraph(
        Paragraph::new().add_run(
            Run::new()
                .add_text(profile.name.as_str())
                .bold()
                .size(24)
                .color(ACCENT_COLOR),
        ),
    );

    let contact = format!(
        "Phone: {} | Email: {} | Tax ID: {} | Reg: {}",
        profile.phone, profile.email, profile.tax_id, profile.reg_no
    );
    let footer = Footer::new().add_paragraph(
        Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(format!("{contact} | Page "))
                    .size(16)
                    .color(FOOTER_GRAY),
            )
            .add_page_num(PageNum::new())
            .align(AlignmentType::Left),
    );

    docx.header(header).footer(footer)
}
