//! In-memory document canvas
//!
//! The canvas accumulates draw commands page by page before anything is
//! rendered. Coordinates are millimetres with the origin at the top-left
//! corner of the page; text `y` is the baseline.

use super::metrics;

/// A4 page width in millimetres
pub const A4_WIDTH_MM: f32 = 210.0;
/// A4 page height in millimetres
pub const A4_HEIGHT_MM: f32 = 297.0;

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    pub const WHITE: Color = Color::gray(255);
}

/// Font weight; the renderer maps these onto a regular and a bold face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Horizontal anchoring of a text run relative to its `x` coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Text styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_pt: f32,
    pub weight: FontWeight,
    pub color: Color,
}

impl TextStyle {
    pub const fn regular(size_pt: f32, color: Color) -> Self {
        Self {
            size_pt,
            weight: FontWeight::Regular,
            color,
        }
    }

    pub const fn bold(size_pt: f32, color: Color) -> Self {
        Self {
            size_pt,
            weight: FontWeight::Bold,
            color,
        }
    }
}

/// A single draw command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Filled rectangle; `(x, y)` is the top-left corner
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    /// Text run with its left edge at `x` and baseline at `y`
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
}

/// One page worth of draw commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    ops: Vec<DrawOp>,
}

impl Page {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text runs on this page, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::FillRect { .. } => None,
        })
    }
}

/// Paginated drawing surface
///
/// Always holds at least one page. Drawing goes to the current (last) page
/// unless a page index is given explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentCanvas {
    width_mm: f32,
    height_mm: f32,
    pages: Vec<Page>,
}

impl DocumentCanvas {
    /// Creates a canvas with a single empty page
    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
            pages: vec![Page::default()],
        }
    }

    /// Creates an A4 portrait canvas
    pub fn a4() -> Self {
        Self::new(A4_WIDTH_MM, A4_HEIGHT_MM)
    }

    pub fn width(&self) -> f32 {
        self.width_mm
    }

    pub fn height(&self) -> f32 {
        self.height_mm
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the page drawing currently goes to
    pub fn current_page(&self) -> usize {
        self.pages.len() - 1
    }

    /// Appends a blank page and makes it current; returns its index
    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::default());
        self.current_page()
    }

    /// Fills a rectangle on the current page
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let page = self.current_page();
        self.push(
            page,
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            },
        );
    }

    /// Draws left-aligned text on the current page
    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, style: TextStyle) {
        let page = self.current_page();
        self.text_on(page, text, x, y, style, TextAlign::Left);
    }

    /// Draws text on a specific page, anchoring it at `x` per `align`
    ///
    /// Out-of-range page indexes are ignored.
    pub fn text_on(
        &mut self,
        page: usize,
        text: impl Into<String>,
        x: f32,
        y: f32,
        style: TextStyle,
        align: TextAlign,
    ) {
        let text = text.into();
        let width = metrics::text_width_mm(&text, style.size_pt);
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        self.push(
            page,
            DrawOp::Text {
                text,
                x: left,
                y,
                style,
            },
        );
    }

    /// Draws aligned text on the current page
    pub fn text_aligned(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        style: TextStyle,
        align: TextAlign,
    ) {
        let page = self.current_page();
        self.text_on(page, text, x, y, style, align);
    }

    /// All text runs with the page index they were drawn on
    pub fn texts(&self) -> impl Iterator<Item = (usize, &str)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(idx, page)| page.texts().map(move |t| (idx, t)))
    }

    fn push(&mut self, page: usize, op: DrawOp) {
        if let Some(p) = self.pages.get_mut(page) {
            p.ops.push(op);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: TextStyle = TextStyle::regular(10.0, Color::gray(0));

    #[test]
    fn test_new_canvas_has_one_page() {
        let canvas = DocumentCanvas::a4();
        assert_eq!(canvas.page_count(), 1);
        assert_eq!(canvas.current_page(), 0);
        assert_eq!(canvas.width(), A4_WIDTH_MM);
    }

    #[test]
    fn test_drawing_goes_to_current_page() {
        let mut canvas = DocumentCanvas::a4();
        canvas.text("first", 10.0, 10.0, BODY);
        canvas.add_page();
        canvas.text("second", 10.0, 10.0, BODY);

        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(texts, vec![(0, "first"), (1, "second")]);
    }

    #[test]
    fn test_text_alignment_moves_left_edge() {
        let mut canvas = DocumentCanvas::a4();
        canvas.text_aligned("abc", 100.0, 10.0, BODY, TextAlign::Right);
        canvas.text_aligned("abc", 100.0, 20.0, BODY, TextAlign::Center);

        let width = metrics::text_width_mm("abc", 10.0);
        let xs: Vec<f32> = canvas.pages()[0]
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert!((xs[0] - (100.0 - width)).abs() < 1e-4);
        assert!((xs[1] - (100.0 - width / 2.0)).abs() < 1e-4);
    }

    #[test]
    fn test_text_on_out_of_range_page_is_ignored() {
        let mut canvas = DocumentCanvas::a4();
        canvas.text_on(5, "lost", 0.0, 0.0, BODY, TextAlign::Left);
        assert_eq!(canvas.texts().count(), 0);
    }
}
