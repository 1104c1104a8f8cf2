//! PDF document rendering.
//!
//! Generates PDF 1.4 files directly, with the built-in Helvetica fonts so no
//! font files are needed. A document has a title line, a generated-on line
//! and a table that flows over as many pages as it needs, repeating the
//! header row at the top of each page.
//!
//! Layout works in distances from the top edge of the page; they are flipped
//! into PDF's bottom-up coordinates only when drawing.

use crate::config::PdfConfig;
use crate::error::{LeaveError, LeaveResult};
use crate::reports::ReportProjection;

const BOLD_FONT: &str = "F1";
const REGULAR_FONT: &str = "F2";

/// Average Helvetica glyph width as a fraction of the font size.
const AVERAGE_GLYPH_WIDTH: f64 = 0.5;

/// Line height as a multiple of the font size.
const LINE_SPACING: f64 = 1.15;

/// Renders a projection into PDF bytes.
///
/// `generated_on` is printed verbatim after "Generated on: ".
pub fn render_document(
    projection: &ReportProjection,
    generated_on: &str,
    settings: &PdfConfig,
) -> LeaveResult<Vec<u8>> {
    let layout = TableLayout::new(settings, projection.headers.len())?;
    let mut pages: Vec<String> = Vec::new();
    let mut page = String::new();

    draw_text(
        &mut page,
        BOLD_FONT,
        settings.title_font_size,
        settings.margin,
        settings.page_height - settings.title_top,
        &projection.title,
    );
    draw_text(
        &mut page,
        REGULAR_FONT,
        settings.meta_font_size,
        settings.margin,
        settings.page_height - settings.meta_top,
        &format!("Generated on: {generated_on}"),
    );

    if !projection.headers.is_empty() {
        let header_cells = layout.wrap_row(&projection.headers);
        if layout.lines_fitting(settings.table_top + layout.row_height(&header_cells)) == 0 {
            return Err(layout_error("header row leaves no room for table rows"));
        }

        let mut top = layout.draw_header(&mut page, &header_cells, settings.table_top);
        let mut rows_on_page = 0usize;

        for (index, row) in projection.body().iter().enumerate() {
            let fill = (index % 2 == 1).then_some(settings.alternate_fill);
            let mut cells = layout.wrap_row(row);

            loop {
                if rows_on_page > 0 && layout.lines_fitting(top) < line_count(&cells) {
                    pages.push(std::mem::take(&mut page));
                    top = layout.draw_header(&mut page, &header_cells, settings.table_top);
                    rows_on_page = 0;
                }

                // A row taller than the free space continues on the next page.
                let rest = split_lines(&mut cells, layout.lines_fitting(top));
                top = layout.draw_row(&mut page, &cells, top, fill, REGULAR_FONT, [0, 0, 0]);
                rows_on_page += 1;

                if rest.iter().all(Vec::is_empty) {
                    break;
                }
                cells = rest;
                pages.push(std::mem::take(&mut page));
                top = layout.draw_header(&mut page, &header_cells, settings.table_top);
                rows_on_page = 0;
            }
        }
    }

    pages.push(page);
    Ok(assemble(&pages, &projection.title, settings))
}

/// Column geometry and text wrapping for the table.
struct TableLayout<'a> {
    settings: &'a PdfConfig,
    column_width: f64,
    line_height: f64,
    max_chars: usize,
    bottom: f64,
}

impl<'a> TableLayout<'a> {
    fn new(settings: &'a PdfConfig, columns: usize) -> LeaveResult<Self> {
        let table_width = settings.page_width - 2.0 * settings.margin;
        let bottom = settings.page_height - settings.margin_bottom;
        let line_height = settings.body_font_size * LINE_SPACING;

        if table_width <= 0.0 || settings.body_font_size <= 0.0 {
            return Err(layout_error("page is narrower than its margins"));
        }
        if settings.table_top + line_height + 2.0 * settings.cell_padding > bottom {
            return Err(layout_error("page leaves no room below the header block"));
        }

        let column_width = table_width / columns.max(1) as f64;
        let text_width = column_width - 2.0 * settings.cell_padding;
        let glyph_width = settings.body_font_size * AVERAGE_GLYPH_WIDTH;
        let max_chars = ((text_width / glyph_width).floor() as usize).max(1);

        Ok(Self {
            settings,
            column_width,
            line_height,
            max_chars,
            bottom,
        })
    }

    fn wrap_row(&self, cells: &[String]) -> Vec<Vec<String>> {
        cells.iter().map(|c| wrap_text(c, self.max_chars)).collect()
    }

    fn row_height(&self, cells: &[Vec<String>]) -> f64 {
        line_count(cells) as f64 * self.line_height + 2.0 * self.settings.cell_padding
    }

    /// Number of text lines a row starting at `top` can hold above the bottom
    /// margin.
    fn lines_fitting(&self, top: f64) -> usize {
        let available = self.bottom - top - 2.0 * self.settings.cell_padding;
        if available < self.line_height {
            return 0;
        }
        ((available + 1e-6) / self.line_height).floor() as usize
    }

    fn draw_header(&self, page: &mut String, cells: &[Vec<String>], top: f64) -> f64 {
        self.draw_row(
            page,
            cells,
            top,
            Some(self.settings.header_fill),
            BOLD_FONT,
            self.settings.header_text,
        )
    }

    /// Draws one row whose top edge sits at `top`; returns the next row's top.
    fn draw_row(
        &self,
        page: &mut String,
        cells: &[Vec<String>],
        top: f64,
        fill: Option<[u8; 3]>,
        font: &str,
        text_color: [u8; 3],
    ) -> f64 {
        let s = self.settings;
        let height = self.row_height(cells);
        let table_width = self.column_width * cells.len() as f64;

        if let Some(rgb) = fill {
            page.push_str(&format!("{} rg\n", rgb_operands(rgb)));
            page.push_str(&format!(
                "{:.2} {:.2} {:.2} {:.2} re f\n",
                s.margin,
                s.page_height - top - height,
                table_width,
                height
            ));
        }

        page.push_str(&format!("{} rg\n", rgb_operands(text_color)));
        for (col, lines) in cells.iter().enumerate() {
            let x = s.margin + col as f64 * self.column_width + s.cell_padding;
            for (line_idx, line) in lines.iter().enumerate() {
                let baseline = top
                    + s.cell_padding
                    + s.body_font_size * 0.85
                    + line_idx as f64 * self.line_height;
                draw_text(page, font, s.body_font_size, x, s.page_height - baseline, line);
            }
        }

        top + height
    }
}

fn line_count(cells: &[Vec<String>]) -> usize {
    cells.iter().map(Vec::len).max().unwrap_or(1).max(1)
}

/// Keeps the first `keep` lines of every cell and returns the remainder.
fn split_lines(cells: &mut [Vec<String>], keep: usize) -> Vec<Vec<String>> {
    cells
        .iter_mut()
        .map(|lines| {
            if lines.len() > keep {
                lines.split_off(keep)
            } else {
                Vec::new()
            }
        })
        .collect()
}

fn layout_error(message: &str) -> LeaveError {
    LeaveError::Serialization {
        format: "PDF".to_string(),
        message: message.to_string(),
    }
}

fn rgb_operands(rgb: [u8; 3]) -> String {
    format!(
        "{:.3} {:.3} {:.3}",
        f64::from(rgb[0]) / 255.0,
        f64::from(rgb[1]) / 255.0,
        f64::from(rgb[2]) / 255.0
    )
}

fn draw_text(page: &mut String, font: &str, size: f64, x: f64, y: f64, text: &str) {
    page.push_str("BT\n");
    page.push_str(&format!("/{font} {size:.1} Tf\n"));
    page.push_str(&format!("{x:.2} {y:.2} Td\n"));
    page.push_str(&format!("({}) Tj\n", pdf_escape(text)));
    page.push_str("ET\n");
}

/// Greedy word wrap; words longer than a line are split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..max_chars).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.len()
        } else {
            current.chars().count() + 1 + word.len()
        };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Escapes a string literal; characters outside printable ASCII become `?`.
fn pdf_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            c if c.is_ascii() && !c.is_ascii_control() => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

/// Writes the page content streams out as a complete PDF file.
///
/// Object layout: 1 catalog, 2 page tree, 3 bold font, 4 regular font,
/// 5 info, then a page object and a content stream per page.
fn assemble(pages: &[String], title: &str, settings: &PdfConfig) -> Vec<u8> {
    let mut pdf: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets: Vec<usize> = Vec::new();

    let first_page = 6;
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", first_page + 2 * i))
        .collect();

    let mut object = |pdf: &mut Vec<u8>, body: String| {
        offsets.push(pdf.len());
        let number = offsets.len();
        pdf.extend_from_slice(format!("{number} 0 obj\n{body}\nendobj\n").as_bytes());
    };

    object(&mut pdf, "<< /Type /Catalog /Pages 2 0 R >>".to_string());
    object(
        &mut pdf,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ),
    );
    object(
        &mut pdf,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );
    object(
        &mut pdf,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );
    object(
        &mut pdf,
        format!(
            "<< /Title ({}) /Producer (leave-desk) >>",
            pdf_escape(title)
        ),
    );

    for (i, content) in pages.iter().enumerate() {
        let content_ref = first_page + 2 * i + 1;
        object(
            &mut pdf,
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {content_ref} 0 R \
                 /Resources << /Font << /{BOLD_FONT} 3 0 R /{REGULAR_FONT} 4 0 R >> >> >>",
                settings.page_width, settings.page_height
            ),
        );
        object(
            &mut pdf,
            format!(
                "<< /Length {} >>\nstream\n{content}endstream",
                content.len()
            ),
        );
    }

    let xref_offset = pdf.len();
    let size = offsets.len() + 1;
    let mut trailer = format!("xref\n0 {size}\n0000000000 65535 f \n");
    for offset in &offsets {
        trailer.push_str(&format!("{offset:010} 00000 n \n"));
    }
    trailer.push_str(&format!(
        "trailer\n<< /Size {size} /Root 1 0 R /Info 5 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
    ));
    pdf.extend_from_slice(trailer.as_bytes());

    pdf
}
