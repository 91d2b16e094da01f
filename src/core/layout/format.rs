//! Display formatting for report values

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::fmt::Display;

/// Listed date as `M/D/YYYY`
pub fn format_listed_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Generation timestamp as `M/D/YYYY, h:mm:ss AM`
pub fn format_generated_at<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Download file name: `<prefix>-<YYYY-MM-DDTHH-MM-SS>.pdf`
///
/// The timestamp is ISO-8601 in UTC without fractional seconds, with colons
/// replaced by hyphens so the name is valid on every filesystem.
pub fn report_file_name(prefix: &str, at: &DateTime<Utc>) -> String {
    format!("{}-{}.pdf", prefix, at.format("%Y-%m-%dT%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_listed_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_listed_date(date), "3/5/2024");

        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_listed_date(date), "12/25/2023");
    }

    #[test]
    fn test_format_generated_at_twelve_hour_clock() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 5, 9).unwrap();
        assert_eq!(format_generated_at(&at), "3/15/2024, 2:05:09 PM");

        let at = Utc.with_ymd_and_hms(2024, 3, 15, 0, 30, 0).unwrap();
        assert_eq!(format_generated_at(&at), "3/15/2024, 12:30:00 AM");
    }

    #[test]
    fn test_report_file_name_replaces_colons() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 45).unwrap();
        let name = report_file_name("real-estate-report", &at);
        assert_eq!(name, "real-estate-report-2024-03-15T10-30-45.pdf");
        assert!(!name.contains(':'));
    }
}
