//! Built-in sample inventory

use super::RecordSource;
use crate::domain::{Money, PropertyRecord, PropertyStatus, RecordId, ReportError, Result};
use chrono::NaiveDate;

/// Name, address, price in dollars, status, listed date
type SampleRow = (&'static str, &'static str, u32, PropertyStatus, (i32, u32, u32));

const SAMPLE_ROWS: [SampleRow; 5] = [
    (
        "Lakeside Villa",
        "14 Shore Drive, Lake Forest, IL",
        850_000,
        PropertyStatus::Available,
        (2024, 1, 15),
    ),
    (
        "Downtown Loft",
        "220 Market Street, Apt 5B, Chicago, IL",
        320_000,
        PropertyStatus::Sold,
        (2023, 11, 2),
    ),
    (
        "Hillside Estate",
        "8 Ridge Road, Highland Park, IL",
        1_200_000,
        PropertyStatus::Available,
        (2024, 2, 20),
    ),
    (
        "Garden Townhouse",
        "57 Elm Court, Evanston, IL",
        450_000,
        PropertyStatus::Pending,
        (2024, 3, 8),
    ),
    (
        "Riverside Penthouse",
        "1 River Plaza, Floor 30, Chicago, IL",
        925_000,
        PropertyStatus::Available,
        (2024, 4, 1),
    ),
];

/// Fixed five-property inventory used when no records file is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleInventory;

impl RecordSource for SampleInventory {
    fn load(&self) -> Result<Vec<PropertyRecord>> {
        SAMPLE_ROWS
            .iter()
            .enumerate()
            .map(|(i, (name, address, price, status, (y, m, d)))| {
                let created_at = NaiveDate::from_ymd_opt(*y, *m, *d).ok_or_else(|| {
                    ReportError::Source(format!("invalid sample date {y}-{m}-{d}"))
                })?;
                PropertyRecord::builder()
                    .id(RecordId::new((i + 1).to_string()).map_err(ReportError::Source)?)
                    .name(*name)
                    .address(*address)
                    .price(Money::from_dollars(*price))
                    .status(*status)
                    .created_at(created_at)
                    .build()
                    .map_err(ReportError::Source)
            })
            .collect()
    }

    fn describe(&self) -> String {
        "sample inventory".to_string()
    }
}
