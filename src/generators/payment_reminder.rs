//! Generator for the payment reminder (dunning) letter.

use docx_rs::{AlignmentType, Docx, Paragraph, Run, Table, TableRow};

use super::branding::apply_branding;
use super::common::{
    body, bold_cell, cell, heading, long_date, pack_docx, text_with_breaks, today,
};
use super::{ArtifactKind, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

const FILE_NAME: &str = "05_Payment_Reminder_Letter.docx";

pub fn create_payment_reminder(
    profile: &CompanyProfile,
) -> Result<GeneratedArtifact, GeneratorError> {
    let invoice_summary = Table::new(vec![
        TableRow::new(vec![cell("Invoice Number"), cell("<<INV-XXXXX>>")]),
        TableRow::new(vec![cell("Invoice Date"), cell("<<Date>>")]),
        TableRow::new(vec![cell("Due Date"), cell("<<Date>>")]),
        TableRow::new(vec![bold_cell("Amount Due (RM)"), bold_cell("<<Amount>>")]),
        TableRow::new(vec![cell("Days Overdue"), cell("<<XX>> days")]),
    ])
    .set_grid(vec![3600, 5760]);

    let docx = apply_branding(Docx::new(), profile)
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(format!("Date: {}", long_date(today()))).size(22))
                .align(AlignmentType::Right),
        )
        .add_paragraph(Paragraph::new())
        .add_paragraph(body("<<Client Company Name>>"))
        .add_paragraph(body("<<Client Address>>"))
        .add_paragraph(body("Attn: <<Contact Person / Accounts Dept>>"))
        .add_paragraph(Paragraph::new())
        .add_paragraph(
            heading("PAYMENT REMINDER / PERINGATAN PEMBAYARAN", 32).align(AlignmentType::Center),
        )
        .add_paragraph(Paragraph::new())
        .add_paragraph(Paragraph::new().add_run(
            Run::new().add_text("Subject: Overdue Payment for Invoice <<INV-XXXXX>>").bold(),
        ))
        .add_paragraph(Paragraph::new())
        .add_paragraph(body(
            "Dear <<Client Name>>,\n\nThis is a friendly reminder that payment for the following \
             invoice is now overdue:",
        ))
        .add_table(invoice_summary)
        .add_paragraph(Paragraph::new())
        .add_paragraph(
            Paragraph::new()
                .add_run(text_with_breaks(
                    Run::new(),
                    "As per our terms, a late payment fee of 1.5% per month may be applied to \
                     overdue accounts.\n\n",
                ))
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    "PLEASE ARRANGE PAYMENT IMMEDIATELY / SILA ATUR PEMBAYARAN DENGAN SERTA-MERTA\n\n",
                ))
                .add_run(text_with_breaks(Run::new(), "Payment can be made to:\n"))
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    &format!(
                        "Bank: {}\nAccount: {}\nAccount Name: {}\n",
                        profile.bank_name, profile.bank_account, profile.name
                    ),
                )),
        )
        .add_paragraph(Paragraph::new())
        .add_paragraph(body(&format!(
            "Please disregard this notice if payment has already been made. If you have any \
             queries, please contact us at {} or {}.\n\nThank you,\n\nAccounts Department\n{}",
            profile.phone, profile.email, profile.name
        )));

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
    fn test_payment_reminder_artifact() {
        let artifact = create_payment_reminder(&sample_profile()).unwrap();
        assert_eq!(artifact.filename, "05_Payment_Reminder_Letter.docx");
        assert_eq!(&artifact.bytes[0..2], b"PK");
    }
}
