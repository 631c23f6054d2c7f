//! PDF backend: one page per poster, built-in Helvetica faces.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use glam::DVec2;
use printpdf::path::PaintMode;
use printpdf::*;

use crate::errors::DocumentError;
use crate::types::{Color as RgbColor, Length, LengthVector};

use super::instructions::{Canvas, DrawInstruction, Font, FontFamily, replay};

/// A multi-page poster document.
pub struct PosterDocument {
    doc: PdfDocumentReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    pages: usize,
}

impl PosterDocument {
    pub fn new(title: &str) -> Result<Self, DocumentError> {
        let doc = PdfDocument::empty(title);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;
        Ok(PosterDocument { doc, regular, bold, pages: 0 })
    }

    /// Append a page of `page_size` and paint `instructions` on it.
    pub fn add_page(&mut self, page_size: LengthVector, instructions: &[DrawInstruction]) {
        let (page, layer) = self.doc.add_page(mm(page_size.x), mm(page_size.y), "Poster");
        let layer = self.doc.get_page(page).get_layer(layer);
        let mut canvas = PdfCanvas {
            layer,
            regular: &self.regular,
            bold: &self.bold,
        };
        replay(instructions, &mut canvas);
        self.pages += 1;
        crate::log::debug!(page = self.pages, instructions = instructions.len(), "added page");
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn save(self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.doc.save(&mut writer).map_err(|e| DocumentError::Pdf(e.to_string()))?;
        crate::log::info!(path = %path.display(), "wrote document");
        Ok(())
    }

    pub fn to_bytes(self) -> Result<Vec<u8>, DocumentError> {
        self.doc.save_to_bytes().map_err(|e| DocumentError::Pdf(e.to_string()))
    }
}

fn mm(length: Length) -> Mm {
    Mm::from(Pt(length.points() as f32))
}

fn pdf_color(color: RgbColor) -> Color {
    let (r, g, b) = color.to_unit_rgb();
    Color::Rgb(Rgb::new(r as f32, g as f32, b as f32, None))
}

/// Paints draw instructions onto one page layer.
struct PdfCanvas<'a> {
    layer: PdfLayerReference,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
}

impl PdfCanvas<'_> {
    fn point(&self, v: LengthVector) -> (Mm, Mm) {
        let DVec2 { x, y } = v.to_dvec2();
        (Mm::from(Pt(x as f32)), Mm::from(Pt(y as f32)))
    }

    fn rect(&self, bottom_left: LengthVector, top_right: LengthVector, mode: PaintMode) -> Rect {
        let (llx, lly) = self.point(bottom_left);
        let (urx, ury) = self.point(top_right);
        Rect::new(llx, lly, urx, ury).with_mode(mode)
    }

    fn font(&self, font: Font) -> &IndirectFontRef {
        match (font.family, font.bold) {
            (FontFamily::Helvetica, false) => self.regular,
            (FontFamily::Helvetica, true) => self.bold,
        }
    }
}

impl Canvas for PdfCanvas<'_> {
    fn fill_rect(&mut self, bottom_left: LengthVector, top_right: LengthVector, fill: RgbColor) {
        self.layer.set_fill_color(pdf_color(fill));
        self.layer.add_rect(self.rect(bottom_left, top_right, PaintMode::Fill));
    }

    fn stroke_fill_rect(
        &mut self,
        bottom_left: LengthVector,
        top_right: LengthVector,
        stroke: RgbColor,
        fill: RgbColor,
        stroke_width: Length,
    ) {
        self.layer.set_fill_color(pdf_color(fill));
        self.layer.set_outline_color(pdf_color(stroke));
        self.layer.set_outline_thickness(stroke_width.points() as f32);
        self.layer.add_rect(self.rect(bottom_left, top_right, PaintMode::FillStroke));
    }

    fn draw_text(&mut self, origin: LengthVector, text: &str, font: Font, size_points: f64, color: RgbColor) {
        let DVec2 { x, y } = origin.to_translation().translation;
        self.layer.set_fill_color(pdf_color(color));
        self.layer.use_text(
            text,
            size_points as f32,
            Mm::from(Pt(x as f32)),
            Mm::from(Pt(y as f32)),
            self.font(font),
        );
    }
}
