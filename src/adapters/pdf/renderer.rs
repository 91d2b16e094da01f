//! PDF rendering with printpdf
//!
//! Uses the builtin Helvetica faces so no font files are needed. The canvas
//! measures from the top-left corner while PDF measures from the
//! bottom-left, so every `y` is flipped against the page height.

use super::DocumentRenderer;
use crate::core::layout::{Color, DocumentCanvas, DrawOp, FontWeight};
use crate::domain::GenerationFailure;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Point, Polygon, Rgb};
use std::io::BufWriter;

const LAYER_NAME: &str = "Layer 1";

/// Renders canvases to PDF with printpdf
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintPdfRenderer;

impl PrintPdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn for_weight(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

impl DocumentRenderer for PrintPdfRenderer {
    fn render(&self, canvas: &DocumentCanvas, title: &str) -> Result<Vec<u8>, GenerationFailure> {
        let width = Mm(canvas.width());
        let height = Mm(canvas.height());
        let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(render_error)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(render_error)?,
        };

        for (index, page) in canvas.pages().iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_ref, layer_ref) = doc.add_page(width, height, LAYER_NAME);
                doc.get_page(page_ref).get_layer(layer_ref)
            };

            for op in page.ops() {
                draw(&layer, &fonts, canvas.height(), op);
            }
        }

        let mut buf = BufWriter::new(Vec::new());
        doc.save(&mut buf).map_err(render_error)?;
        let bytes = buf
            .into_inner()
            .map_err(|e| GenerationFailure::Render(e.to_string()))?;

        tracing::debug!(
            pages = canvas.page_count(),
            size_bytes = bytes.len(),
            "Rendered PDF"
        );

        Ok(bytes)
    }
}

fn draw(layer: &PdfLayerReference, fonts: &Fonts, page_height: f32, op: &DrawOp) {
    match op {
        DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            let top = page_height - y;
            let bottom = top - height;
            let corners = [
                (*x, bottom),
                (x + width, bottom),
                (x + width, top),
                (*x, top),
            ];
            layer.set_fill_color(pdf_color(*color));
            layer.add_polygon(Polygon {
                rings: vec![corners
                    .iter()
                    .map(|(px, py)| (Point::new(Mm(*px), Mm(*py)), false))
                    .collect()],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
        }
        DrawOp::Text { text, x, y, style } => {
            layer.set_fill_color(pdf_color(style.color));
            layer.use_text(
                text.as_str(),
                style.size_pt,
                Mm(*x),
                Mm(page_height - y),
                fonts.for_weight(style.weight),
            );
        }
    }
}

fn pdf_color(color: Color) -> printpdf::Color {
    let channel = |v: u8| f32::from(v) / 255.0;
    printpdf::Color::Rgb(Rgb::new(
        channel(color.r),
        channel(color.g),
        channel(color.b),
        None,
    ))
}

fn render_error(err: impl std::fmt::Display) -> GenerationFailure {
    GenerationFailure::Render(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::TextStyle;

    #[test]
    fn test_render_produces_pdf_bytes() {
        let mut canvas = DocumentCanvas::a4();
        canvas.fill_rect(0.0, 0.0, 210.0, 45.0, Color::rgb(41, 128, 185));
        canvas.text("RealState ERP", 14.0, 30.0, TextStyle::bold(28.0, Color::WHITE));
        canvas.add_page();
        canvas.text("Page 2 of 2", 100.0, 287.0, TextStyle::regular(8.0, Color::gray(128)));

        let bytes = PrintPdfRenderer::new()
            .render(&canvas, "Property Inventory Report")
            .unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 200);
    }

    #[test]
    fn test_pdf_color_scales_channels() {
        match pdf_color(Color::rgb(255, 0, 51)) {
            printpdf::Color::Rgb(rgb) => {
                assert!((rgb.r - 1.0).abs() < f32::EPSILON);
                assert!(rgb.g.abs() < f32::EPSILON);
                assert!((rgb.b - 0.2).abs() < 1e-6);
            }
            other => panic!("unexpected colour space: {other:?}"),
        }
    }
}
