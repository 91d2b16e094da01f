//! Property record domain model
//!
//! A record is one property entry, rendered as a single row of the inventory
//! report table.

use crate::domain::ids::RecordId;
use crate::domain::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Listing status of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyStatus {
    /// Listed and open to offers
    Available,
    /// Sale completed
    Sold,
    /// Under offer or awaiting approval
    Pending,
}

impl PropertyStatus {
    /// Label shown in the report table
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(PropertyStatus::Available),
            "sold" => Ok(PropertyStatus::Sold),
            "pending" => Ok(PropertyStatus::Pending),
            other => Err(format!(
                "Invalid property status '{other}'. Must be one of: Available, Sold, Pending"
            )),
        }
    }
}

/// A single property listing
///
/// Records are immutable once loaded; the exporter only reads them.
///
/// # Examples
///
/// ```
/// use realty_report::domain::record::{PropertyRecord, PropertyStatus};
/// use realty_report::domain::{Money, RecordId};
/// use chrono::NaiveDate;
///
/// let record = PropertyRecord::builder()
///     .id(RecordId::new("1").unwrap())
///     .name("Sunset Villa")
///     .address("123 Ocean Drive, Malibu, CA")
///     .price(Money::from_dollars(850_000))
///     .status(PropertyStatus::Available)
///     .created_at(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(record.status, PropertyStatus::Available);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Record identifier
    pub id: RecordId,

    /// Property display name
    #[serde(alias = "property")]
    pub name: String,

    /// Street address
    pub address: String,

    /// Listing price
    pub price: Money,

    /// Listing status
    #[serde(deserialize_with = "deserialize_status")]
    pub status: PropertyStatus,

    /// Date the property was listed
    #[serde(alias = "createdAt")]
    pub created_at: NaiveDate,
}

impl PropertyRecord {
    /// Creates a new builder for constructing a PropertyRecord
    pub fn builder() -> PropertyRecordBuilder {
        PropertyRecordBuilder::default()
    }

    /// Checks that the record has everything a table row needs
    pub fn check_renderable(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("record '{}' has an empty name", self.id));
        }
        if self.address.trim().is_empty() {
            return Err(format!("record '{}' has an empty address", self.id));
        }
        Ok(())
    }

    /// True if the property is currently available
    pub fn is_available(&self) -> bool {
        self.status == PropertyStatus::Available
    }
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<PropertyStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    PropertyStatus::from_str(&raw).map_err(serde::de::Error::custom)
}

/// Builder for constructing PropertyRecord instances
#[derive(Debug, Default)]
pub struct PropertyRecordBuilder {
    id: Option<RecordId>,
    name: Option<String>,
    address: Option<String>,
    price: Option<Money>,
    status: Option<PropertyStatus>,
    created_at: Option<NaiveDate>,
}

impl PropertyRecordBuilder {
    /// Creates a new PropertyRecordBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the record ID
    pub fn id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the property name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the street address
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the listing price
    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the listing status
    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the listing date
    pub fn created_at(mut self, created_at: NaiveDate) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the PropertyRecord
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing field
    pub fn build(self) -> Result<PropertyRecord, String> {
        Ok(PropertyRecord {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            address: self.address.ok_or("address is required")?,
            price: self.price.ok_or("price is required")?,
            status: self.status.ok_or("status is required")?,
            created_at: self.created_at.ok_or("created_at is required")?,
        })
    }
}
