//! Generator for the equipment rental agreement.
//!
//! A six-section bilingual contract with an equipment schedule table and a
//! signature table. All client-side details are left as placeholder tokens.

use docx_rs::{AlignmentType, Docx, Paragraph, Run, Table, TableRow};

use super::branding::apply_branding;
use super::common::{
    body, bold_cell, bullet, cell, heading, heading_centered, pack_docx, page_break, sub_bullet,
    text_with_breaks,
};
use super::text::DISCLAIMER_TEXT;
use super::{ArtifactKind, GeneratedArtifact, GeneratorError};
use crate::pack::models::CompanyProfile;

const FILE_NAME: &str = "01_Equipment_Rental_Agreement.docx";

pub fn create_rental_agreement(
    profile: &CompanyProfile,
) -> Result<GeneratedArtifact, GeneratorError> {
    let mut docx = apply_branding(Docx::new(), profile);

    docx = docx
        .add_paragraph(heading_centered("EQUIPMENT RENTAL AGREEMENT", 40))
        .add_paragraph(heading_centered("PERJANJIAN SEWAAN PERALATAN", 28))
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(DISCLAIMER_TEXT).italic().size(16))
                .align(AlignmentType::Center),
        )
        .add_paragraph(Paragraph::new());

    docx = docx
        .add_paragraph(heading("1. PARTIES AND EQUIPMENT SCHEDULE", 32))
        .add_paragraph(heading("1. PIHAK-PIHAK DAN JADUAL PERALATAN", 28))
        .add_paragraph(heading("1.1 Parties to this Agreement", 24))
        .add_paragraph(
            Paragraph::new()
                .add_run(text_with_breaks(
                    Run::new(),
                    "This Equipment Rental Agreement is entered into as of <<Date>> between:\n\n",
                ))
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    &format!("PROVIDER: {}\n", profile.name),
                ))
                .add_run(text_with_breaks(
                    Run::new(),
                    &format!(
                        "Registration: {}\nAddress: {}\nPhone: {}\nEmail: {}\n\n",
                        profile.reg_no, profile.address, profile.phone, profile.email
                    ),
                ))
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    "CLIENT: <<Client Company Name>>\n",
                ))
                .add_run(text_with_breaks(
                    Run::new(),
                    "Registration: <<Client Reg No>>\nContact: <<Contact Person>>\nPhone: <<Phone>>\nEmail: <<Email>>",
                )),
        )
        .add_paragraph(heading("1.1 Pihak-Pihak Kepada Perjanjian Ini", 24))
        .add_paragraph(
            Paragraph::new()
                .add_run(text_with_breaks(
                    Run::new(),
                    "Perjanjian ini dimulai pada <<Tarikh>> antara:\n\n",
                ))
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    &format!("PEMBEKAL: {}\n", profile.name),
                ))
                .add_run(text_with_breaks(
                    Run::new(),
                    &format!(
                        "Pendaftaran: {}\nAlamat: {}\nTelefon: {}\n\n",
                        profile.reg_no, profile.address, profile.phone
                    ),
                ))
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    "PELANGGAN: <<Nama Syarikat Pelanggan>>\n",
                ))
                .add_run(text_with_breaks(
                    Run::new(),
                    "Pendaftaran: <<No. Pendaftaran Pelanggan>>",
                )),
        );

    docx = docx
        .add_paragraph(heading("1.2 Equipment Schedule", 24))
        .add_paragraph(body(
            "The following equipment ('Equipment') is subject to the terms of this Agreement:",
        ))
        .add_table(equipment_schedule_table())
        .add_paragraph(body("Total Replacement Value: RM 925,000"))
        .add_paragraph(Paragraph::new());

    docx = docx
        .add_paragraph(heading("2. FINANCIAL TERMS AND SECURITY DEPOSIT", 32))
        .add_paragraph(heading("2. TERMA KEWANGAN DAN DEPOSIT KESELAMATAN", 28))
        .add_paragraph(heading("2.1 Detailed Payment Clause", 24))
        .add_paragraph(
            Paragraph::new()
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    "Rental Rate / Kadar Sewaan:\n",
                ))
                .add_run(text_with_breaks(
                    Run::new(),
                    "- Daily Rate / Kadar Harian: RM <<Amount>> per day\n\
                     - Weekly Rate / Kadar Mingguan: RM <<Amount>> per week\n\
                     - Monthly Rate / Kadar Bulanan: RM <<Amount>> per month\n\n",
                ))
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    "Payment Schedule / Jadual Pembayaran:\n",
                ))
                .add_run(text_with_breaks(
                    Run::new(),
                    "- 50% deposit upon booking confirmation\n\
                     - 50% upon job completion and return of equipment\n\n",
                ))
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    "Bank Details / Butiran Bank:\n",
                ))
                .add_run(text_with_breaks(
                    Run::new(),
                    &format!(
                        "- Bank: {}\n- Account: {}\n- SWIFT: {}",
                        profile.bank_name, profile.bank_account, profile.swift_code
                    ),
                )),
        )
        .add_paragraph(heading("2.2 Late Payment Penalties", 24))
        .add_paragraph(body(
            "Payments not received by the due date shall incur a late fee of 1.5% per month \
             (18% per annum) or the maximum rate permitted by law, whichever is lower. \
             Bayaran yang tidak diterima akan dikenakan yuran lewat sebanyak 1.5% setiap bulan.",
        ))
        .add_paragraph(heading("2.3 Security Deposit", 24))
        .add_paragraph(body(
            "The Client shall provide a Security Deposit of RM <<Amount>> prior to delivery. \
             This deposit shall be held as security against any damage, loss, theft, or unpaid rent. \
             The Security Deposit shall be returned within 14 days of equipment's safe return, \
             less any deductions for repairs or outstanding amounts.\n\n\
             Pelanggan harus memberikan Deposit Keselamatan sebanyak RM <<Jumlah>> sebelum penghantaran. \
             Deposit ini akan disimpan sebagai keamanan terhadap sebarang kerosakan, kehilangan, atau kecurian. \
             Deposit akan dikembalikan dalam 14 hari selepas pulangan peralatan, tolak sebarang potongan.",
        ));

    docx = docx
        .add_paragraph(heading("3. RISK, LIABILITY AND INSURANCE", 32))
        .add_paragraph(heading("3. RISIKO, LIABILITI DAN INSURANS", 28))
        .add_paragraph(heading("3.1 Loss or Damage - Risk Transfer", 24))
        .add_paragraph(body(
            "The Client assumes all risk and responsibility for the equipment from the moment of \
             delivery until its return. The Client is responsible for the full cost of repair or \
             replacement, valued at the amount specified in the Equipment Schedule, if the \
             equipment is lost, stolen, or damaged beyond reasonable wear and tear, regardless of cause.\n\n\
             Pelanggan memikul semua risiko dan tanggungjawab untuk peralatan sejak penghantaran \
             hingga pulangan. Pelanggan bertanggungjawab untuk kos penuh pembaikan atau penggantian \
             jika peralatan hilang atau rosak.",
        ))
        .add_paragraph(heading("3.2 Mandatory Client Insurance", 24))
        .add_paragraph(
            Paragraph::new()
                .add_run(text_with_breaks(
                    Run::new(),
                    "The Client shall procure and maintain at its own expense:\n\n",
                ))
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    "(i) All-Risk Physical Damage Insurance\n",
                ))
                .add_run(text_with_breaks(
                    Run::new(),
                    &format!(
                        "- Coverage Amount: Full Replacement Value of all equipment\n\
                         - Named Loss Payee: {}\n\
                         - Deductible: Not to exceed RM 10,000 per occurrence\n\n",
                        profile.name
                    ),
                ))
                .add_run(text_with_breaks(
                    Run::new().bold(),
                    "(ii) Commercial General Liability Insurance\n",
                ))
                .add_run(text_with_breaks(
                    Run::new(),
                    &format!(
                        "- Minimum Coverage: RM 2,000,000 per occurrence\n\
                         - Named Additional Insured: {}\n\n\
                         A valid Certificate of Insurance must be provided to the Provider 3 business days prior to delivery.",
                        profile.name
                    ),
                )),
        )
        .add_paragraph(heading("3.3 Indemnification", 24))
        .add_paragraph(body(
            "The Client agrees to indemnify, defend, and hold harmless the Provider, its officers, \
             and employees from and against any and all claims, liabilities, damages, losses, costs, \
             and expenses (including reasonable attorney's fees) arising from the Client's \
             possession, use, operation, or transportation of the Equipment, except to the extent \
             directly resulting from the Provider's gross negligence or willful misconduct.",
        ));

    docx = docx
        .add_paragraph(heading("4. OPERATIONAL RESPONSIBILITIES", 32))
        .add_paragraph(heading("4. TANGGUNGJAWAB OPERASIONAL", 28))
        .add_paragraph(heading("4.1 Provider Responsibilities", 24))
        .add_paragraph(bullet("The Provider shall:"))
        .add_paragraph(sub_bullet("Deliver equipment in good working order"))
        .add_paragraph(sub_bullet("Ensure routine maintenance prior to delivery"))
        .add_paragraph(sub_bullet("Provide clear operational instructions"))
        .add_paragraph(sub_bullet(&format!(
            "Provide 24/7 support for breakdowns at: {}",
            profile.phone
        )))
        .add_paragraph(heading("4.2 Client Responsibilities", 24))
        .add_paragraph(bullet("The Client shall:"))
        .add_paragraph(sub_bullet(
            "Perform routine daily maintenance (check fluids, tire pressure, etc.)",
        ))
        .add_paragraph(sub_bullet(
            "Immediately cease operation and report defects to the Provider",
        ))
        .add_paragraph(sub_bullet(
            "Ensure only trained and certified personnel operate equipment",
        ))
        .add_paragraph(sub_bullet("Comply with all safety guidelines and local laws"))
        .add_paragraph(sub_bullet(
            "Not attempt any repairs without Provider's written consent",
        ))
        .add_paragraph(sub_bullet(
            "Return equipment in same condition as received, less fair wear and tear",
        ));

    docx = docx
        .add_paragraph(heading("5. TERMINATION AND RECALL", 32))
        .add_paragraph(heading("5. PENAMATAN DAN PENGINGAT KEMBALI", 28))
        .add_paragraph(heading("5.1 Termination for Breach (Default)", 24))
        .add_paragraph(bullet(
            "The Provider may terminate immediately and repossess the equipment if:",
        ))
        .add_paragraph(sub_bullet("Client fails to pay within 7 days of due date"))
        .add_paragraph(sub_bullet("Client breaches any material term of this Agreement"))
        .add_paragraph(sub_bullet("Client uses equipment illegally or in an unsafe manner"))
        .add_paragraph(sub_bullet("Client's insurance coverage lapses"))
        .add_paragraph(sub_bullet("Client becomes insolvent or bankrupt"))
        .add_paragraph(heading("5.2 Recall Notice", 24))
        .add_paragraph(body(
            "Provider reserves the right to recall any or all equipment upon 10 days written \
             notice to the Client. Pembekal berhak memanggil balik peralatan dengan notis \
             bertulis 10 hari.",
        ))
        .add_paragraph(heading("5.3 Equipment Return", 24))
        .add_paragraph(body(
            "Upon end of rental, Client shall return equipment in same condition as received. \
             Provider will conduct final inspection within 5 business days. Repair costs will \
             be deducted from Security Deposit. Balance returned within 14 days.",
        ));

    docx = docx
        .add_paragraph(heading("6. GENERAL PROVISIONS", 32))
        .add_paragraph(heading("6.1 Governing Law", 24))
        .add_paragraph(body(
            "This Agreement shall be governed by and construed in accordance with the laws of \
             Malaysia. Both parties submit to the exclusive jurisdiction of Malaysian courts.\n\n\
             Perjanjian ini akan ditadbir oleh undang-undang Malaysia. Kedua-dua pihak menyerah \
             kepada bidang kuasa eksklusif mahkamah Malaysia.",
        ));

    docx = docx
        .add_paragraph(page_break())
        .add_paragraph(heading("SIGNATURES / TANDATANGAN", 32))
        .add_paragraph(body(
            "IN WITNESS WHEREOF, the parties have executed this Agreement as of the date first \
             written above.",
        ))
        .add_table(signature_table(profile));

    Ok(GeneratedArtifact::new(
        FILE_NAME,
        pack_docx(docx)?,
        ArtifactKind::Document,
    ))
}

fn equipment_schedule_table() -> Table {
    let header = TableRow::new(vec![
        bold_cell("Equipment ID"),
        bold_cell("Description"),
        bold_cell("Make & Model"),
        bold_cell("Condition"),
        bold_cell("Replacement Value (RM)"),
    ]);

    let rows = [
        ["EQ-001", "Hydraulic Excavator", "Caterpillar 320", "Good, 1,200 hrs", "450000"],
        ["EQ-002", "Wheel Loader", "Komatsu WA470", "Good, 2,100 hrs", "380000"],
        ["EQ-003", "Air Compressor", "Atlas Copco", "Good, 4,500 hrs", "95000"],
    ];

    let mut table_rows = vec![header];
    for row in rows {
        table_rows.push(TableRow::new(row.iter().map(|value| cell(value)).collect()));
    }

    Table::new(table_rows).set_grid(vec![1600, 2100, 2100, 2100, 1900])
}

fn signature_table(profile: &CompanyProfile) -> Table {
    let rows = vec![
        TableRow::new(vec![
            bold_cell("PROVIDER / PEMBEKAL"),
            bold_cell("CLIENT / PELANGGAN"),
        ]),
        TableRow::new(vec![cell(&profile.name), cell("<<Client Company Name>>")]),
        TableRow::new(vec![
            cell("\n\nSigned: _____________________"),
            cell("\n\nSigned: _____________________"),
        ]),
        TableRow::new(vec![
            cell("Name: _____________________"),
            cell("Name: _____________________"),
        ]),
        TableRow::new(vec![
            cell("Title: _____________________"),
            cell("Title: _____________________"),
        ]),
        TableRow::new(vec![
            cell("Date: _____________________"),
            cell("Date: _____________________"),
        ]),
        TableRow::new(vec![
            cell("\n\nStamp: [Company Stamp]"),
            cell("\n\nStamp: [Company Stamp]"),
        ]),
    ];

    Table::new(rows).set_grid(vec![4680, 4680])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::models::sample_profile;

    #[test]
    fn test_rental_agreement_artifact() {
        let artifact = create_rental_agreement(&sample_profile()).unwrap();
        assert_eq!(artifact.filename, "01_Equipment_Rental_Agreement.docx");
        assert_eq!(artifact.kind, ArtifactKind::Document);
        // DOCX is a zip container
        assert_eq!(&artifact.bytes[0..2], b"PK");
    }
}
