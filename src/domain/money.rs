//! Currency amounts
//!
//! Prices are held as whole cents so portfolio totals are exact. The display
//! form is US dollars with thousands separators and no decimals.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A non-negative USD amount stored in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero dollars
    pub const ZERO: Money = Money(0);

    /// Largest accepted amount, one trillion dollars
    pub const MAX: Money = Money(100_000_000_000_000);

    /// Creates an amount from whole dollars
    pub fn from_dollars(dollars: u32) -> Self {
        Self(i64::from(dollars) * 100)
    }

    /// Creates an amount from cents, rejecting negative values and anything
    /// above [`Money::MAX`]
    pub fn from_cents(cents: i64) -> Result<Self, String> {
        if cents < 0 {
            return Err(format!("Amount cannot be negative: {cents} cents"));
        }
        if cents > Self::MAX.0 {
            return Err(format!("Amount is too large: {cents} cents"));
        }
        Ok(Self(cents))
    }

    /// Converts a dollar value with fractional cents, rounding to the nearest cent
    pub fn from_dollars_f64(dollars: f64) -> Result<Self, String> {
        if !dollars.is_finite() {
            return Err(format!("Amount must be a finite number, got {dollars}"));
        }
        if dollars < 0.0 {
            return Err(format!("Amount cannot be negative: {dollars}"));
        }
        let cents = (dollars * 100.0).round();
        if cents > Self::MAX.0 as f64 {
            return Err(format!("Amount is too large: {dollars}"));
        }
        Ok(Self(cents as i64))
    }

    /// Returns the amount in cents
    pub fn cents(self) -> i64 {
        self.0
    }

    /// Adds two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Divides the amount across `count` items, rounding half away from zero
    ///
    /// Returns zero when `count` is zero.
    pub fn average_over(self, count: usize) -> Money {
        if count == 0 {
            return Money::ZERO;
        }
        let count = count as i128;
        let total = i128::from(self.0);
        Money(((total * 2 + count) / (count * 2)) as i64)
    }

    /// Whole dollars, rounding half away from zero
    pub fn whole_dollars(self) -> i64 {
        self.0 / 100 + i64::from(self.0 % 100 >= 50)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.whole_dollars().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "${grouped}")
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        Money::from_dollars_f64(dollars).map_err(serde::de::Error::custom)
    }
}
