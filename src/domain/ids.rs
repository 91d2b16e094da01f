//! Domain identifier types with validation
//!
//! Newtype wrappers for record and report identifiers. Each type ensures type
//! safety and validates its format on construction.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Property record identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use realty_report::domain::ids::RecordId;
/// use std::str::FromStr;
///
/// let id = RecordId::from_str("prop-001").unwrap();
/// assert_eq!(id.as_str(), "prop-001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new RecordId from a string
    ///
    /// Returns `Err` if the identifier is empty or whitespace only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Record ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the record ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Report identifier printed in the report metadata block
///
/// Always [`ReportId::LENGTH`] characters drawn from `0-9` and `A-Z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(String);

impl ReportId {
    /// Number of characters in a report identifier
    pub const LENGTH: usize = 9;

    const CHARSET: &'static [u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    /// Generates a random identifier using the thread-local RNG
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generates a random identifier from the given RNG
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..Self::LENGTH)
            .map(|_| Self::CHARSET[rng.gen_range(0..Self::CHARSET.len())] as char)
            .collect();
        Self(id)
    }

    /// Parses an existing identifier, validating length and alphabet
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.len() != Self::LENGTH {
            return Err(format!(
                "Report ID must be {} characters, got {}",
                Self::LENGTH,
                id.len()
            ));
        }
        if !id.bytes().all(|b| Self::CHARSET.contains(&b)) {
            return Err(format!(
                "Report ID must be uppercase alphanumeric, got: {id}"
            ));
        }
        Ok(Self(id))
    }

    /// Returns the report ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
