//! Document layout
//!
//! Builds the report as pages of draw commands, independent of the output
//! format:
//! - [`canvas`] - Paginated drawing surface
//! - [`metrics`] - Helvetica text measurement and wrapping
//! - [`table`] - Paginated table with repeated header rows
//! - [`report`] - Placement of every report band
//! - [`format`] - Date, timestamp and file name formatting

pub mod canvas;
pub mod format;
pub mod metrics;
pub mod report;
pub mod table;

pub use canvas::{Color, DocumentCanvas, DrawOp, FontWeight, Page, TextAlign, TextStyle};
pub use report::{
    paint_header, paint_inventory_table, paint_metadata, paint_page_numbers, paint_summary,
};
pub use table::{Column, ColumnWidth, Table, TableOutcome, TableStyle};
