//! Minimal PDF writer for the user guide.
//!
//! Constructs valid PDF 1.4 files directly, using the built-in Helvetica
//! fonts so no font files ship with the server. Content flows top to bottom
//! and breaks onto a new page when the current one fills up.

const PAGE_WIDTH: f64 = 612.0;
const PAGE_HEIGHT: f64 = 792.0;
const MARGIN: f64 = 54.0;
const TOP_Y: f64 = PAGE_HEIGHT - MARGIN;
const BOTTOM_Y: f64 = MARGIN;

/// Accent color matching the DOCX headings (1F4E78), as RGB fractions.
const ACCENT_RGB: &str = "0.122 0.306 0.471";

/// Approximate characters that fit on one body line at 10pt Helvetica.
const WRAP_COLUMNS: usize = 95;

pub struct PdfWriter {
    pages: Vec<String>,
    content: String,
    y: f64,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            content: String::new(),
            y: TOP_Y,
        }
    }

    /// Bold company byline at body size.
    pub fn byline(&mut self, text: &str) {
        self.text_line("F1", 10.0, MARGIN, "0 0 0", text, 14.0);
    }

    /// Document title, large and accent-colored.
    pub fn title(&mut self, text: &str) {
        self.text_line("F1", 16.0, MARGIN, ACCENT_RGB, text, 24.0);
    }

    /// Section heading.
    pub fn heading(&mut self, text: &str) {
        self.ensure_room(40.0);
        self.y -= 6.0;
        self.text_line("F1", 12.0, MARGIN, ACCENT_RGB, text, 18.0);
    }

    /// Word-wrapped body paragraph.
    pub fn paragraph(&mut self, text: &str) {
        for line in wrap(text, WRAP_COLUMNS) {
            self.text_line("F2", 10.0, MARGIN, "0 0 0", &line, 14.0);
        }
        self.y -= 4.0;
    }

    /// Marker-prefixed list entry with a hanging indent for wrapped lines.
    pub fn bullet(&mut self, marker: &str, text: &str) {
        let indent = MARGIN + 18.0;
        for (i, line) in wrap(text, WRAP_COLUMNS - 4).into_iter().enumerate() {
            self.ensure_room(14.0);
            if i == 0 {
                self.text_line("F2", 10.0, MARGIN + 4.0, "0 0 0", marker, 0.0);
            }
            self.text_line("F2", 10.0, indent, "0 0 0", &line, 14.0);
        }
    }

    pub fn spacer(&mut self, pts: f64) {
        self.y -= pts;
    }

    /// Serialize to PDF bytes. `title` lands in the document info dictionary.
    pub fn finish(mut self, title: &str) -> Vec<u8> {
        if !self.content.is_empty() || self.pages.is_empty() {
            self.pages.push(std::mem::take(&mut self.content));
        }

        let page_count = self.pages.len();
        let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 6 + 2 * i)).collect();

        let mut objects: Vec<String> = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!(
                "<< /Type /Pages /Kids [{}] /Count {page_count} >>",
                kids.join(" ")
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
            format!("<< /Title ({}) >>", pdf_escape(title)),
        ];

        for (i, stream) in self.pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
                 /Contents {} 0 R /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> >>",
                7 + 2 * i
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                stream.len(),
                stream
            ));
        }

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets: Vec<usize> = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
        }

        let xref_offset = pdf.len();
        let num_objects = objects.len() + 1; // +1 for the free entry
        pdf.push_str(&format!("xref\n0 {num_objects}\n"));
        pdf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {num_objects} /Root 1 0 R /Info 5 0 R >>\n"
        ));
        pdf.push_str(&format!("startxref\n{xref_offset}\n%%EOF\n"));

        pdf.into_bytes()
    }

    fn ensure_room(&mut self, needed: f64) {
        if self.y - needed < BOTTOM_Y {
            self.pages.push(std::mem::take(&mut self.content));
            self.y = TOP_Y;
        }
    }

    fn text_line(&mut self, font: &str, size: f64, x: f64, color: &str, text: &str, advance: f64) {
        self.ensure_room(advance);
        self.content.push_str(&format!("{color} rg\n"));
        self.content.push_str("BT\n");
        self.content.push_str(&format!("/{font} {size:.0} Tf\n"));
        self.content.push_str(&format!("{x:.0} {:.0} Td\n", self.y));
        self.content.push_str(&format!("({}) Tj\n", pdf_escape(text)));
        self.content.push_str("ET\n");
        self.y -= advance;
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape special characters for PDF string literals.
fn pdf_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Greedy word wrap at `max` columns.
fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
