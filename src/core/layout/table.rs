//! Paginated table layout
//!
//! Lays out a header row and body rows onto a [`DocumentCanvas`], starting a
//! new page (with the header repeated) whenever the next row would cross the
//! bottom margin. Cell text wraps to the column width.

use super::canvas::{Color, DocumentCanvas, TextAlign, TextStyle};
use super::metrics::{self, PT_TO_MM};
use crate::domain::GenerationFailure;

/// Baseline offset from the top of a text line, as a fraction of the font size
const BASELINE_RATIO: f32 = 0.8;

/// How a column's width is determined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Exact width in millimetres
    Fixed(f32),
    /// Share of the width left over after fixed columns
    Auto,
}

/// Column definition
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub header: String,
    pub width: ColumnWidth,
    pub align: TextAlign,
}

impl Column {
    pub fn new(header: impl Into<String>, width: ColumnWidth, align: TextAlign) -> Self {
        Self {
            header: header.into(),
            width,
            align,
        }
    }
}

/// Visual and pagination settings for a table
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    /// Top of the header row on the first page
    pub start_y: f32,
    /// Left and right page margin
    pub margin_x: f32,
    /// Where the table resumes on continuation pages
    pub margin_top: f32,
    /// Rows may not extend below `page height - margin_bottom`
    pub margin_bottom: f32,
    pub font_size_pt: f32,
    pub cell_padding: f32,
    pub header_fill: Color,
    pub header_text: Color,
    pub body_text: Color,
    /// Fill for the 1st, 3rd, 5th... body rows
    pub alternate_fill: Color,
    /// Smallest width an auto column may shrink to
    pub min_auto_width: f32,
}

/// Where the table ended up
#[derive(Debug, Clone, PartialEq)]
pub struct TableOutcome {
    /// Bottom edge of the last row drawn, on `last_page`
    pub final_y: f32,
    pub rows_drawn: usize,
    pub first_page: usize,
    pub last_page: usize,
}

/// A table ready to be drawn
#[derive(Debug, Clone)]
pub struct Table<'a> {
    columns: &'a [Column],
    style: &'a TableStyle,
}

impl<'a> Table<'a> {
    pub fn new(columns: &'a [Column], style: &'a TableStyle) -> Self {
        Self { columns, style }
    }

    /// Computes the width of every column for the given content
    pub fn resolve_widths(
        &self,
        page_width: f32,
        rows: &[Vec<String>],
    ) -> Result<Vec<f32>, GenerationFailure> {
        let style = self.style;
        let table_width = page_width - 2.0 * style.margin_x;
        let fixed_total: f32 = self
            .columns
            .iter()
            .filter_map(|c| match c.width {
                ColumnWidth::Fixed(w) => Some(w),
                ColumnWidth::Auto => None,
            })
            .sum();

        let auto_indexes: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.width == ColumnWidth::Auto)
            .map(|(i, _)| i)
            .collect();

        let available = table_width - fixed_total;
        if available < style.min_auto_width * auto_indexes.len() as f32 || available < 0.0 {
            return Err(GenerationFailure::Layout(format!(
                "fixed columns ({fixed_total:.1}mm) leave no room in a {table_width:.1}mm table"
            )));
        }

        let naturals: Vec<f32> = auto_indexes
            .iter()
            .map(|&i| self.natural_width(i, rows))
            .collect();
        let auto_widths = distribute(available, &naturals, style.min_auto_width);

        let mut widths: Vec<f32> = self
            .columns
            .iter()
            .map(|c| match c.width {
                ColumnWidth::Fixed(w) => w,
                ColumnWidth::Auto => 0.0,
            })
            .collect();
        for (slot, width) in auto_indexes.into_iter().zip(auto_widths) {
            widths[slot] = width;
        }
        Ok(widths)
    }

    /// Draws the table starting at `style.start_y` on the current page
    pub fn draw(
        &self,
        canvas: &mut DocumentCanvas,
        rows: &[Vec<String>],
    ) -> Result<TableOutcome, GenerationFailure> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(GenerationFailure::Layout(format!(
                    "row {index} has {} cells, expected {}",
                    row.len(),
                    self.columns.len()
                )));
            }
        }

        let style = self.style;
        let widths = self.resolve_widths(canvas.width(), rows)?;
        let bottom_limit = canvas.height() - style.margin_bottom;

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let header_height = self.row_height(&headers, &widths);

        let mut y = style.start_y;
        if let Some(first) = rows.first() {
            if y + header_height + self.row_height(first, &widths) > bottom_limit {
                canvas.add_page();
                y = style.margin_top;
            }
        }
        let first_page = canvas.current_page();

        self.draw_header(canvas, &headers, &widths, y);
        y += header_height;

        for (index, row) in rows.iter().enumerate() {
            let height = self.row_height(row, &widths);
            if y + height > bottom_limit {
                if style.margin_top + header_height + height > bottom_limit {
                    return Err(GenerationFailure::Layout(format!(
                        "row {index} is {height:.1}mm tall and cannot fit on a page"
                    )));
                }
                canvas.add_page();
                y = style.margin_top;
                self.draw_header(canvas, &headers, &widths, y);
                y += header_height;
            }

            let fill = (index % 2 == 0).then_some(style.alternate_fill);
            let text = TextStyle::regular(style.font_size_pt, style.body_text);
            self.draw_row(canvas, row, &widths, y, height, fill, text, None);
            y += height;
        }

        Ok(TableOutcome {
            final_y: y,
            rows_drawn: rows.len(),
            first_page,
            last_page: canvas.current_page(),
        })
    }

    fn draw_header(&self, canvas: &mut DocumentCanvas, headers: &[String], widths: &[f32], y: f32) {
        let style = self.style;
        let height = self.row_height(headers, widths);
        let text = TextStyle::bold(style.font_size_pt, style.header_text);
        self.draw_row(
            canvas,
            headers,
            widths,
            y,
            height,
            Some(style.header_fill),
            text,
            Some(TextAlign::Center),
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_row(
        &self,
        canvas: &mut DocumentCanvas,
        cells: &[String],
        widths: &[f32],
        y: f32,
        height: f32,
        fill: Option<Color>,
        text: TextStyle,
        align_override: Option<TextAlign>,
    ) {
        let style = self.style;
        let table_width: f32 = widths.iter().sum();
        if let Some(color) = fill {
            canvas.fill_rect(style.margin_x, y, table_width, height, color);
        }

        let line_height = metrics::line_height_mm(style.font_size_pt);
        let first_baseline =
            y + style.cell_padding + style.font_size_pt * PT_TO_MM * BASELINE_RATIO;

        let mut x = style.margin_x;
        for ((cell, width), column) in cells.iter().zip(widths).zip(self.columns) {
            let align = align_override.unwrap_or(column.align);
            let anchor = match align {
                TextAlign::Left => x + style.cell_padding,
                TextAlign::Center => x + width / 2.0,
                TextAlign::Right => x + width - style.cell_padding,
            };
            let lines = self.wrap_cell(cell, *width);
            for (n, line) in lines.into_iter().enumerate() {
                let baseline = first_baseline + line_height * n as f32;
                canvas.text_aligned(line, anchor, baseline, text, align);
            }
            x += width;
        }
    }

    fn row_height(&self, cells: &[String], widths: &[f32]) -> f32 {
        let lines = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| self.wrap_cell(cell, *width).len())
            .max()
            .unwrap_or(1);
        lines as f32 * metrics::line_height_mm(self.style.font_size_pt)
            + 2.0 * self.style.cell_padding
    }

    fn wrap_cell(&self, text: &str, width: f32) -> Vec<String> {
        let inner = (width - 2.0 * self.style.cell_padding).max(1.0);
        metrics::wrap_to_width(text, inner, self.style.font_size_pt)
    }

    fn natural_width(&self, column: usize, rows: &[Vec<String>]) -> f32 {
        let size = self.style.font_size_pt;
        let header = metrics::text_width_mm(&self.columns[column].header, size);
        let widest = rows
            .iter()
            .filter_map(|row| row.get(column))
            .map(|cell| metrics::text_width_mm(cell, size))
            .fold(header, f32::max);
        widest + 2.0 * self.style.cell_padding
    }
}

/// Splits `available` across columns in proportion to `naturals`, never
/// going below `min`
fn distribute(available: f32, naturals: &[f32], min: f32) -> Vec<f32> {
    let mut widths = vec![0.0_f32; naturals.len()];
    let mut pinned = vec![false; naturals.len()];

    loop {
        let pinned_total: f32 = widths
            .iter()
            .zip(&pinned)
            .filter(|(_, p)| **p)
            .map(|(w, _)| *w)
            .sum();
        let remaining = available - pinned_total;
        let weight: f32 = naturals
            .iter()
            .zip(&pinned)
            .filter(|(_, p)| !**p)
            .map(|(n, _)| n.max(f32::EPSILON))
            .sum();

        let mut changed = false;
        for i in 0..naturals.len() {
            if pinned[i] {
                continue;
            }
            let share = remaining * naturals[i].max(f32::EPSILON) / weight;
            if share < min {
                widths[i] = min;
                pinned[i] = true;
                changed = true;
            }
        }

        if !changed {
            for i in 0..naturals.len() {
                if !pinned[i] {
                    widths[i] = remaining * naturals[i].max(f32::EPSILON) / weight;
                }
            }
            return widths;
        }
    }
}
