//! Property inventory report composition
//!
//! Paints each band of the report onto a [`DocumentCanvas`]: branded header,
//! title and metadata, inventory table, summary block and page footers.
//! Positions are millimetres from the top-left page corner.

use super::canvas::{Color, DocumentCanvas, TextAlign, TextStyle};
use super::format::format_listed_date;
use super::metrics;
use super::table::{Column, ColumnWidth, Table, TableOutcome, TableStyle};
use crate::core::export::summary::ReportSummary;
use crate::domain::{GenerationFailure, PropertyRecord, ReportId};

pub const BRAND_BLUE: Color = Color::rgb(41, 128, 185);
pub const TITLE_TEXT: Color = Color::gray(51);
pub const META_TEXT: Color = Color::gray(119);
pub const FOOTER_TEXT: Color = Color::gray(128);
pub const ROW_STRIPE: Color = Color::gray(245);
pub const SUMMARY_FILL: Color = Color::rgb(245, 247, 250);

pub const HEADER_BAND_HEIGHT: f32 = 45.0;
pub const CONTENT_X: f32 = 14.0;
pub const PAGE_MARGIN: f32 = 14.0;

const BRAND_Y: f32 = 30.0;
const BRAND_SIZE: f32 = 28.0;
const TITLE_Y: f32 = 65.0;
const TITLE_SIZE: f32 = 22.0;
const GENERATED_Y: f32 = 75.0;
const REPORT_ID_Y: f32 = 80.0;
const META_SIZE: f32 = 10.0;

pub const TABLE_START_Y: f32 = 90.0;
const TABLE_FONT_SIZE: f32 = 10.0;
const CELL_PADDING: f32 = 6.0;
const PRICE_WIDTH: f32 = 30.0;
const STATUS_WIDTH: f32 = 25.0;
const DATE_WIDTH: f32 = 25.0;
const MIN_AUTO_WIDTH: f32 = 20.0;

const SUMMARY_GAP: f32 = 15.0;
const SUMMARY_X: f32 = 10.0;
const SUMMARY_HEIGHT: f32 = 45.0;
const SUMMARY_TITLE_OFFSET: f32 = 30.0;
const SUMMARY_STATS_OFFSET: f32 = 40.0;
const SUMMARY_TITLE_SIZE: f32 = 14.0;
const SUMMARY_STATS_SIZE: f32 = 10.0;
pub const SUMMARY_TITLE: &str = "Summary Statistics";

const FOOTER_OFFSET: f32 = 10.0;
const FOOTER_SIZE: f32 = 8.0;

/// Paints the coloured header band and brand title on the current page
pub fn paint_header(canvas: &mut DocumentCanvas, brand_title: &str) {
    let width = canvas.width();
    canvas.fill_rect(0.0, 0.0, width, HEADER_BAND_HEIGHT, BRAND_BLUE);
    canvas.text(
        brand_title,
        CONTENT_X,
        BRAND_Y,
        TextStyle::regular(BRAND_SIZE, Color::WHITE),
    );
}

/// Paints the report title and the two metadata lines
pub fn paint_metadata(
    canvas: &mut DocumentCanvas,
    report_title: &str,
    generated_at: &str,
    report_id: &ReportId,
) {
    canvas.text(
        report_title,
        CONTENT_X,
        TITLE_Y,
        TextStyle::regular(TITLE_SIZE, TITLE_TEXT),
    );
    let meta = TextStyle::regular(META_SIZE, META_TEXT);
    canvas.text(format!("Generated: {generated_at}"), CONTENT_X, GENERATED_Y, meta);
    canvas.text(format!("Report ID: {report_id}"), CONTENT_X, REPORT_ID_Y, meta);
}

/// Column layout of the inventory table
pub fn inventory_columns() -> Vec<Column> {
    vec![
        Column::new("Property", ColumnWidth::Auto, TextAlign::Left),
        Column::new("Address", ColumnWidth::Auto, TextAlign::Left),
        Column::new("Price", ColumnWidth::Fixed(PRICE_WIDTH), TextAlign::Right),
        Column::new("Status", ColumnWidth::Fixed(STATUS_WIDTH), TextAlign::Center),
        Column::new("Listed Date", ColumnWidth::Fixed(DATE_WIDTH), TextAlign::Center),
    ]
}

/// Table style of the inventory table
pub fn inventory_table_style() -> TableStyle {
    TableStyle {
        start_y: TABLE_START_Y,
        margin_x: CONTENT_X,
        margin_top: PAGE_MARGIN,
        margin_bottom: PAGE_MARGIN,
        font_size_pt: TABLE_FONT_SIZE,
        cell_padding: CELL_PADDING,
        header_fill: BRAND_BLUE,
        header_text: Color::WHITE,
        body_text: TITLE_TEXT,
        alternate_fill: ROW_STRIPE,
        min_auto_width: MIN_AUTO_WIDTH,
    }
}

/// One table row per record, in input order
pub fn inventory_rows(records: &[PropertyRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.address.clone(),
                r.price.to_string(),
                r.status.to_string(),
                format_listed_date(r.created_at),
            ]
        })
        .collect()
}

/// Lays out the inventory table below the metadata block
pub fn paint_inventory_table(
    canvas: &mut DocumentCanvas,
    records: &[PropertyRecord],
) -> Result<TableOutcome, GenerationFailure> {
    let columns = inventory_columns();
    let style = inventory_table_style();
    Table::new(&columns, &style).draw(canvas, &inventory_rows(records))
}

/// Paints the shaded summary block below the table
///
/// Moves to a new page when the block would cross the bottom margin.
/// Returns the page the block was painted on.
pub fn paint_summary(
    canvas: &mut DocumentCanvas,
    table_final_y: f32,
    summary: &ReportSummary,
) -> usize {
    let mut final_y = table_final_y;
    if final_y + SUMMARY_GAP + SUMMARY_HEIGHT > canvas.height() - PAGE_MARGIN {
        canvas.add_page();
        final_y = PAGE_MARGIN - SUMMARY_GAP;
    }

    let width = canvas.width() - 2.0 * SUMMARY_X;
    canvas.fill_rect(
        SUMMARY_X,
        final_y + SUMMARY_GAP,
        width,
        SUMMARY_HEIGHT,
        SUMMARY_FILL,
    );
    canvas.text(
        SUMMARY_TITLE,
        CONTENT_X,
        final_y + SUMMARY_TITLE_OFFSET,
        TextStyle::regular(SUMMARY_TITLE_SIZE, BRAND_BLUE),
    );

    let style = TextStyle::regular(SUMMARY_STATS_SIZE, TITLE_TEXT);
    let line_height = metrics::line_height_mm(SUMMARY_STATS_SIZE);
    for (i, line) in summary.stat_lines().into_iter().enumerate() {
        canvas.text(
            line,
            CONTENT_X,
            final_y + SUMMARY_STATS_OFFSET + line_height * i as f32,
            style,
        );
    }

    canvas.current_page()
}

/// Footer text for page `number` (1-based) of `total`
pub fn page_label(number: usize, total: usize) -> String {
    format!("Page {number} of {total}")
}

/// Paints "Page i of N" centred at the bottom of every page
///
/// Must run after all content is laid out so N is final.
pub fn paint_page_numbers(canvas: &mut DocumentCanvas) {
    let total = canvas.page_count();
    let x = canvas.width() / 2.0;
    let y = canvas.height() - FOOTER_OFFSET;
    let style = TextStyle::regular(FOOTER_SIZE, FOOTER_TEXT);
    for page in 0..total {
        canvas.text_on(page, page_label(page + 1, total), x, y, style, TextAlign::Center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::canvas::DrawOp;
    use crate::domain::{Money, PropertyStatus, RecordId};
    use chrono::NaiveDate;

    fn record(i: usize) -> PropertyRecord {
        PropertyRecord::builder()
            .id(RecordId::new(i.to_string()).unwrap())
            .name(format!("Property {i}"))
            .address(format!("{i} Elm Street"))
            .price(Money::from_dollars(100_000 + i as u32))
            .status(PropertyStatus::Available)
            .created_at(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_paint_header_band() {
        let mut canvas = DocumentCanvas::a4();
        paint_header(&mut canvas, "RealState ERP");

        let ops = canvas.pages()[0].ops();
        assert!(matches!(
            ops[0],
            DrawOp::FillRect { x, y, height, color, .. }
                if x == 0.0 && y == 0.0 && height == HEADER_BAND_HEIGHT && color == BRAND_BLUE
        ));
        assert!(matches!(
            &ops[1],
            DrawOp::Text { text, x, y, style }
                if text == "RealState ERP" && *x == 14.0 && *y == 30.0 && style.size_pt == 28.0
        ));
    }

    #[test]
    fn test_paint_metadata_lines() {
        let mut canvas = DocumentCanvas::a4();
        let id = ReportId::new("ABC123XYZ").unwrap();
        paint_metadata(&mut canvas, "Property Inventory Report", "1/2/2024, 3:04:05 PM", &id);

        let texts: Vec<_> = canvas.texts().map(|(_, t)| t).collect();
        assert_eq!(
            texts,
            vec![
                "Property Inventory Report",
                "Generated: 1/2/2024, 3:04:05 PM",
                "Report ID: ABC123XYZ",
            ]
        );
    }

    #[test]
    fn test_inventory_rows_format_values() {
        let rows = inventory_rows(&[record(7)]);
        assert_eq!(
            rows[0],
            vec![
                "Property 7".to_string(),
                "7 Elm Street".to_string(),
                "$100,007".to_string(),
                "Available".to_string(),
                "5/1/2024".to_string(),
            ]
        );
    }

    #[test]
    fn test_fixed_columns_wrap_inside_padding() {
        let mut listed = record(1);
        listed.created_at = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut pending = record(2);
        pending.status = PropertyStatus::Pending;

        let mut canvas = DocumentCanvas::a4();
        paint_inventory_table(&mut canvas, &[listed, pending]).unwrap();
        let texts: Vec<_> = canvas.texts().map(|(_, t)| t).collect();

        // 25 mm columns leave 13 mm for text at 10 pt
        for piece in ["Listed", "Date", "Availabl", "e", "1/15/20", "24"] {
            assert!(texts.contains(&piece), "missing {piece:?} in {texts:?}");
        }
        assert!(!texts.contains(&"Listed Date"));
        assert!(texts.contains(&"Pending"));
        assert!(texts.contains(&"Property"));
        assert!(texts.contains(&"Status"));
    }

    #[test]
    fn test_summary_moves_to_new_page_when_full() {
        let mut canvas = DocumentCanvas::a4();
        let summary = ReportSummary::from_records(&[record(1)]).unwrap();
        let page = paint_summary(&mut canvas, 260.0, &summary);

        assert_eq!(page, 1);
        assert_eq!(canvas.page_count(), 2);
        let rect_y = canvas.pages()[1].ops().iter().find_map(|op| match op {
            DrawOp::FillRect { y, .. } => Some(*y),
            _ => None,
        });
        assert_eq!(rect_y, Some(PAGE_MARGIN));
    }

    #[test]
    fn test_summary_stays_on_page_with_room() {
        let mut canvas = DocumentCanvas::a4();
        let summary = ReportSummary::from_records(&[record(1)]).unwrap();
        assert_eq!(paint_summary(&mut canvas, 120.0, &summary), 0);
        assert!(canvas.texts().any(|(_, t)| t == SUMMARY_TITLE));
    }

    #[test]
    fn test_page_numbers_on_every_page() {
        let mut canvas = DocumentCanvas::a4();
        canvas.add_page();
        canvas.add_page();
        paint_page_numbers(&mut canvas);

        for (i, page) in canvas.pages().iter().enumerate() {
            let label = page_label(i + 1, 3);
            assert!(page.texts().any(|t| t == label));
        }
    }
}
