//! Integration tests for loading records and exporting them

use realty_report::adapters::pdf::PrintPdfRenderer;
use realty_report::adapters::sink::FileSink;
use realty_report::adapters::source::{create_record_source, JsonFileSource, RecordSource};
use realty_report::config::{DataConfig, ReportSettings};
use realty_report::core::export::ReportExporter;
use realty_report::domain::{GenerationFailure, Money, PropertyStatus, ReportError};
use std::sync::Arc;
use tempfile::TempDir;

const INVENTORY_JSON: &str = r#"[
  {"id": "101", "name": "Harbour View", "address": "3 Quay Street", "price": 640000, "status": "Available", "createdAt": "2024-03-05"},
  {"id": "102", "name": "Orchard Cottage", "address": "77 Pippin Lane", "price": 410000, "status": "Pending", "createdAt": "2024-04-18"},
  {"id": "103", "name": "Mill House", "address": "1 Weir Road", "price": 780000, "status": "Sold", "createdAt": "2023-12-01"}
]"#;

#[test]
fn test_json_records_export_to_pdf() {
    let temp_dir = TempDir::new().unwrap();
    let records_path = temp_dir.path().join("inventory.json");
    std::fs::write(&records_path, INVENTORY_JSON).unwrap();

    let records = JsonFileSource::new(&records_path).load().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].status, PropertyStatus::Pending);

    let out_dir = temp_dir.path().join("out");
    let exporter = ReportExporter::new(
        ReportSettings::default(),
        Arc::new(PrintPdfRenderer::new()),
        Arc::new(FileSink::new(&out_dir)),
    );
    let report = exporter.generate(&records).unwrap().unwrap();

    assert_eq!(report.summary.total_properties, 3);
    assert_eq!(report.summary.available_properties, 1);
    assert_eq!(report.summary.total_value.to_string(), "$1,830,000");
    assert_eq!(report.summary.average_price.to_string(), "$610,000");
    assert!(out_dir.join(&report.file_name).is_file());
}

#[test]
fn test_factory_prefers_configured_path() {
    let temp_dir = TempDir::new().unwrap();
    let records_path = temp_dir.path().join("inventory.json");
    std::fs::write(&records_path, INVENTORY_JSON).unwrap();

    let config = DataConfig {
        records_path: Some(records_path.to_string_lossy().into_owned()),
    };
    let source = create_record_source(&config);
    assert!(source.describe().contains("inventory.json"));
    assert_eq!(source.load().unwrap().len(), 3);
}

#[test]
fn test_factory_falls_back_to_sample() {
    let source = create_record_source(&DataConfig::default());
    let records = source.load().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].name, "Lakeside Villa");
}

#[test]
fn test_blank_record_name_fails_generation() {
    let temp_dir = TempDir::new().unwrap();
    let records_path = temp_dir.path().join("inventory.json");
    std::fs::write(
        &records_path,
        r#"[{"id": "9", "name": " ", "address": "Nowhere", "price": 1, "status": "Sold", "createdAt": "2024-01-01"}]"#,
    )
    .unwrap();

    let records = JsonFileSource::new(&records_path).load().unwrap();
    let exporter = ReportExporter::new(
        ReportSettings::default(),
        Arc::new(PrintPdfRenderer::new()),
        Arc::new(FileSink::new(temp_dir.path())),
    );
    assert!(matches!(
        exporter.generate(&records),
        Err(GenerationFailure::MalformedRecord { index: 0, .. })
    ));
}

#[test]
fn test_price_beyond_limit_rejected_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let records_path = temp_dir.path().join("inventory.json");
    std::fs::write(
        &records_path,
        r#"[{"id": "1", "name": "Castle", "address": "1 Crown Way", "price": 92233720368547758.07, "status": "Available", "createdAt": "2024-01-01"}]"#,
    )
    .unwrap();

    let result = JsonFileSource::new(&records_path).load();
    assert!(matches!(result, Err(ReportError::Source(_))));
}

#[test]
fn test_largest_price_renders_without_overflow() {
    let temp_dir = TempDir::new().unwrap();
    let records_path = temp_dir.path().join("inventory.json");
    std::fs::write(
        &records_path,
        r#"[
  {"id": "1", "name": "Castle", "address": "1 Crown Way", "price": 1000000000000, "status": "Available", "createdAt": "2024-01-01"},
  {"id": "2", "name": "Palace", "address": "2 Crown Way", "price": 999999999999.99, "status": "Sold", "createdAt": "2024-01-02"}
]"#,
    )
    .unwrap();

    let records = JsonFileSource::new(&records_path).load().unwrap();
    assert_eq!(records[0].price, Money::MAX);

    let exporter = ReportExporter::new(
        ReportSettings::default(),
        Arc::new(PrintPdfRenderer::new()),
        Arc::new(FileSink::new(temp_dir.path())),
    );
    let report = exporter.generate(&records).unwrap().unwrap();

    assert_eq!(report.summary.total_value.to_string(), "$2,000,000,000,000");
    assert_eq!(report.summary.average_price.to_string(), "$1,000,000,000,000");
}
