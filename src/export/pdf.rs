// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

struct PageBuf {
    content_id: Ref,
    content: Content,
}

/// Minimal A4-landscape document writer: titles, text lines and paginated
/// tables flowing top to bottom. Always holds at least one page.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    next_id: i32,
    page_refs: Vec<Ref>,
    pages: Vec<PageBuf>,
    /// Vertical cursor on the last page.
    y: f32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Helvetica with the standard encoding only covers ASCII reliably.
pub(crate) fn pdf_safe(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '₹' => out.push_str("Rs."),
            '€' => out.push_str("EUR "),
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let mut manager = Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            next_id: 4,
            page_refs: Vec::new(),
            pages: Vec::new(),
            y: 0.0,

            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,
            font_size: 8.5,
            header_font_size: 9.0,
            title_font_size: 14.0,
        };
        manager.new_page();
        manager
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        let mut content = Content::new();
        let page_no = format!("Page {}", self.page_refs.len());
        draw_text(
            &mut content,
            self.page_w - self.margin - 50.0,
            self.margin / 2.0,
            self.font_size,
            &page_no,
        );

        self.pages.push(PageBuf {
            content_id,
            content,
        });
        self.y = self.page_h - self.margin;
    }

    /// Move the cursor down by `height`, breaking the page when needed.
    /// Returns the new baseline and the content stream to draw on.
    fn reserve(&mut self, height: f32) -> (f32, &mut Content) {
        if self.y - height < self.margin {
            self.new_page();
        }
        self.y -= height;

        let last = self.pages.len() - 1;
        (self.y, &mut self.pages[last].content)
    }

    pub fn write_title(&mut self, title: &str) {
        let size = self.title_font_size;
        let x = self.margin;
        let (y, content) = self.reserve(size + 12.0);
        draw_text(content, x, y + 6.0, size, title);
    }

    pub fn write_line(&mut self, text: &str) {
        let size = self.font_size + 1.0;
        let x = self.margin;
        let h = self.row_h;
        let (y, content) = self.reserve(h);
        draw_text(content, x, y + 5.0, size, text);
    }

    pub fn write_gap(&mut self) {
        let h = self.row_h / 2.0;
        self.reserve(h);
    }

    /// Column widths from header + content length, scaled down to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.len() as f32 * 5.2 + 8.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = w.max(cell.len() as f32 * 5.0 + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;
        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }
        widths
    }

    fn write_row(&mut self, widths: &[f32], row: &[String], size: f32, fill: Option<f32>) {
        let x_start = self.margin;
        let h = self.row_h;
        let (y, content) = self.reserve(h);

        if let Some(gray) = fill {
            content.save_state();
            content.set_fill_gray(gray);
            content.rect(x_start, y, widths.iter().sum(), h);
            content.fill_nonzero();
            content.restore_state();
        }

        let mut x = x_start;
        for (w, text) in widths.iter().zip(row.iter()) {
            draw_text(content, x + 3.0, y + 5.0, size, text);
            content.save_state();
            content.set_stroke_gray(0.65);
            content.rect(x, y, *w, h);
            content.stroke();
            content.restore_state();
            x += w;
        }
    }

    /// Table with the header repeated on every page it spans.
    pub fn write_table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let header_size = self.header_font_size;
        let size = self.font_size;

        self.write_row(&widths, &header_row, header_size, Some(0.86));

        for (i, row) in rows.iter().enumerate() {
            if self.y - self.row_h < self.margin {
                self.new_page();
                self.write_row(&widths, &header_row, header_size, Some(0.86));
            }
            let zebra = if i % 2 == 0 { Some(0.96) } else { None };
            self.write_row(&widths, row, size, zebra);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        for page in std::mem::take(&mut self.pages) {
            self.pdf.stream(page.content_id, &page.content.finish());
        }

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .count(self.page_refs.len() as i32)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    let safe = pdf_safe(text);
    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(safe.as_bytes()));
    content.end_text();
}
