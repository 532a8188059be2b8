//! Summary document: paginated table layout and its PDF rendering.
//!
//! Geometry is in millimetres on an A4 page, y growing downwards from the
//! top edge. A new page starts when the cursor passes [`PAGE_BREAK_Y`]
//! before a body row, and the header row is repeated at the top of every
//! page.

use anyhow::{Context, Result, anyhow};
use cartola_core::SummaryRow;
use chrono::NaiveDateTime;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const SUMMARY_TITLE: &str = "Resumen de Transacciones";
pub const SUMMARY_COLUMNS: [&str; 3] = ["GRUPO", "VALOR", "PERCENTAGE"];

pub const TOP_MARGIN: f64 = 10.0;
pub const TITLE_HEIGHT: f64 = 10.0;
pub const TITLE_GAP: f64 = 5.0;
pub const ROW_HEIGHT: f64 = 10.0;
pub const PAGE_BREAK_Y: f64 = 250.0;

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
pub const SIDE_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Bold, filled
    Header,
    /// Body rows alternate shading, starting unshaded
    Body { shaded: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    /// Top edge of the row on its page
    pub y: f64,
    pub style: RowStyle,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub rows: Vec<LayoutRow>,
}

impl Page {
    pub fn body_rows(&self) -> impl Iterator<Item = &LayoutRow> {
        self.rows.iter().filter(|r| r.style != RowStyle::Header)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLayout {
    pub title: String,
    pub pages: Vec<Page>,
}

fn header_row(y: f64) -> LayoutRow {
    LayoutRow {
        y,
        style: RowStyle::Header,
        cells: SUMMARY_COLUMNS.iter().map(|c| c.to_string()).collect(),
    }
}

/// Lay the summary table out into pages. The title sits only on page one.
pub fn layout_summary(rows: &[SummaryRow]) -> SummaryLayout {
    let mut pages = Vec::new();
    let mut y = TOP_MARGIN + TITLE_HEIGHT + TITLE_GAP;
    let mut page = Page {
        rows: vec![header_row(y)],
    };
    y += ROW_HEIGHT;
    let mut shaded = false;

    for row in rows {
        if y > PAGE_BREAK_Y {
            pages.push(std::mem::take(&mut page));
            y = TOP_MARGIN;
            page.rows.push(header_row(y));
            y += ROW_HEIGHT;
        }

        page.rows.push(LayoutRow {
            y,
            style: RowStyle::Body { shaded },
            cells: vec![
                row.category.clone(),
                row.formatted_total.clone(),
                row.share.to_string(),
            ],
        });
        y += ROW_HEIGHT;
        shaded = !shaded;
    }
    pages.push(page);

    SummaryLayout {
        title: SUMMARY_TITLE.to_string(),
        pages,
    }
}

const TITLE_SIZE: f32 = 16.0;
const HEADER_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
const FOOTER_SIZE: f32 = 8.0;

/// Helvetica averages about half an em per glyph; good enough to centre
/// short cell values without font metrics.
const AVG_GLYPH_EM: f64 = 0.5;
const MM_PER_PT: f64 = 25.4 / 72.0;

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}

/// Layout y (top-down) → PDF y (bottom-up)
fn pdf_y(y: f64) -> Mm {
    Mm((PAGE_HEIGHT - y) as f32)
}

fn text_width(text: &str, size: f32) -> f64 {
    text.chars().count() as f64 * size as f64 * AVG_GLYPH_EM * MM_PER_PT
}

fn centered_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size: f32,
    left: f64,
    width: f64,
    baseline: f64,
) {
    let x = left + ((width - text_width(text, size)) / 2.0).max(0.0);
    layer.use_text(text, size, Mm(x as f32), pdf_y(baseline), font);
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn draw_row(layer: &PdfLayerReference, fonts: &Fonts, row: &LayoutRow, column_width: f64) {
    let (fill, text_color, font, size) = match row.style {
        RowStyle::Header => (rgb(0, 102, 204), rgb(255, 255, 255), &fonts.bold, HEADER_SIZE),
        RowStyle::Body { shaded: true } => (rgb(230, 230, 230), rgb(0, 0, 0), &fonts.regular, BODY_SIZE),
        RowStyle::Body { shaded: false } => (rgb(255, 255, 255), rgb(0, 0, 0), &fonts.regular, BODY_SIZE),
    };

    for (i, cell) in row.cells.iter().enumerate() {
        let left = SIDE_MARGIN + i as f64 * column_width;
        let rect = Rect::new(
            Mm(left as f32),
            pdf_y(row.y + ROW_HEIGHT),
            Mm((left + column_width) as f32),
            pdf_y(row.y),
        )
        .with_mode(PaintMode::FillStroke)
        .with_winding(WindingOrder::NonZero);

        layer.set_fill_color(fill.clone());
        layer.add_rect(rect);

        layer.set_fill_color(text_color.clone());
        centered_text(layer, font, cell, size, left, column_width, row.y + ROW_HEIGHT * 0.65);
    }
}

/// Render the laid-out summary as a PDF: title on the first page, blue
/// bold header rows, grey/white body rows, a footer with page numbers.
pub fn render_pdf(layout: &SummaryLayout, generated_at: Option<NaiveDateTime>) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        layout.title.as_str(),
        Mm(PAGE_WIDTH as f32),
        Mm(PAGE_HEIGHT as f32),
        "Resumen",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("loading Helvetica: {}", e))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("loading Helvetica-Bold: {}", e))?,
    };

    let content_width = PAGE_WIDTH - 2.0 * SIDE_MARGIN;
    let column_width = content_width / SUMMARY_COLUMNS.len() as f64;
    let page_count = layout.pages.len();

    for (i, page) in layout.pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (p, l) = doc.add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Resumen");
            doc.get_page(p).get_layer(l)
        };
        layer.set_outline_color(rgb(0, 0, 0));
        layer.set_outline_thickness(0.2);

        if i == 0 {
            layer.set_fill_color(rgb(0, 51, 102));
            centered_text(
                &layer,
                &fonts.bold,
                &layout.title,
                TITLE_SIZE,
                SIDE_MARGIN,
                content_width,
                TOP_MARGIN + TITLE_HEIGHT * 0.7,
            );
        }

        for row in &page.rows {
            draw_row(&layer, &fonts, row, column_width);
        }

        let mut footer = format!("Pagina {}/{}", i + 1, page_count);
        if let Some(ts) = generated_at {
            footer = format!("Generado: {} - {}", ts.format("%Y-%m-%d %H:%M"), footer);
        }
        layer.set_fill_color(rgb(0, 0, 0));
        layer.use_text(footer, FOOTER_SIZE, Mm(SIDE_MARGIN as f32), Mm(10.0), &fonts.regular);
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow!("rendering summary PDF: {}", e))
}

/// Write the summary PDF to `path`.
pub fn write_summary_pdf(
    path: impl AsRef<Path>,
    layout: &SummaryLayout,
    generated_at: Option<NaiveDateTime>,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_pdf(layout, generated_at)?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(&bytes)
        .with_context(|| format!("writing {}", path.display()))?;
    out.flush()?;
    Ok(())
}
