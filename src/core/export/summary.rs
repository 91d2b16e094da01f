//! Report summary statistics
//!
//! Aggregates computed over the full record set and printed in the summary
//! block below the inventory table.

use crate::domain::{GenerationFailure, Money, PropertyRecord};

/// Summary of the records included in a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of records in the report
    pub total_properties: usize,

    /// Number of records with status Available
    pub available_properties: usize,

    /// Exact sum of all prices
    pub total_value: Money,

    /// `total_value / total_properties`, zero for an empty report
    pub average_price: Money,
}

impl ReportSummary {
    /// Computes the summary for a record set
    ///
    /// # Errors
    ///
    /// Returns [`GenerationFailure::Layout`] if the total overflows
    pub fn from_records(records: &[PropertyRecord]) -> Result<Self, GenerationFailure> {
        let total_value = records.iter().try_fold(Money::ZERO, |acc, r| {
            acc.checked_add(r.price).ok_or_else(|| {
                GenerationFailure::Layout(format!(
                    "portfolio value overflowed while adding record '{}'",
                    r.id
                ))
            })
        })?;

        let total_properties = records.len();
        Ok(Self {
            total_properties,
            available_properties: records.iter().filter(|r| r.is_available()).count(),
            total_value,
            average_price: total_value.average_over(total_properties),
        })
    }

    /// The four labelled lines shown in the summary block
    pub fn stat_lines(&self) -> [String; 4] {
        [
            format!("Total Properties: {}", self.total_properties),
            format!("Available Properties: {}", self.available_properties),
            format!("Total Portfolio Value: {}", self.total_value),
            format!("Average Property Price: {}", self.average_price),
        ]
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_properties = self.total_properties,
            available_properties = self.available_properties,
            total_value = %self.total_value,
            average_price = %self.average_price,
            "Report summary computed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PropertyStatus, RecordId};
    use chrono::NaiveDate;

    fn record(id: &str, price: u32, status: PropertyStatus) -> PropertyRecord {
        PropertyRecord::builder()
            .id(RecordId::new(id).unwrap())
            .name(format!("Property {id}"))
            .address("1 Main St")
            .price(Money::from_dollars(price))
            .status(status)
            .created_at(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_summary_for_sample_portfolio() {
        let records = vec![
            record("1", 850_000, PropertyStatus::Available),
            record("2", 320_000, PropertyStatus::Sold),
            record("3", 1_200_000, PropertyStatus::Available),
            record("4", 450_000, PropertyStatus::Pending),
            record("5", 925_000, PropertyStatus::Available),
        ];

        let summary = ReportSummary::from_records(&records).unwrap();
        assert_eq!(summary.total_properties, 5);
        assert_eq!(summary.available_properties, 3);
        assert_eq!(summary.total_value, Money::from_dollars(3_745_000));
        assert_eq!(summary.average_price, Money::from_dollars(749_000));
        assert_eq!(
            summary.stat_lines(),
            [
                "Total Properties: 5".to_string(),
                "Available Properties: 3".to_string(),
                "Total Portfolio Value: $3,745,000".to_string(),
                "Average Property Price: $749,000".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_for_empty_input_reports_zero() {
        let summary = ReportSummary::from_records(&[]).unwrap();
        assert_eq!(summary.total_properties, 0);
        assert_eq!(summary.available_properties, 0);
        assert_eq!(summary.total_value, Money::ZERO);
        assert_eq!(summary.average_price, Money::ZERO);
        assert_eq!(summary.stat_lines()[3], "Average Property Price: $0");
    }

    #[test]
    fn test_summary_overflow_is_a_failure() {
        let mut priciest = record("a", 1, PropertyStatus::Sold);
        priciest.price = Money::MAX;
        let count = (i64::MAX / Money::MAX.cents()) as usize + 1;
        let records = vec![priciest; count];

        let result = ReportSummary::from_records(&records);
        assert!(matches!(result, Err(GenerationFailure::Layout(_))));
    }
}
