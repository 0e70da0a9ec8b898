//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::error::ValueObjectError;

/// Room identifier value object.
///
/// Room identifiers are assigned by the backend and are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RoomId(i64);

impl RoomId {
    /// Create a new RoomId.
    ///
    /// # Arguments
    ///
    /// * `id` - The backend identifier
    ///
    /// # Returns
    ///
    /// A Result containing the RoomId or an error if the value is not positive
    pub fn new(id: i64) -> Result<Self, ValueObjectError> {
        if id <= 0 {
            return Err(ValueObjectError::RoomIdNotPositive(id));
        }
        Ok(Self(id))
    }

    /// Get the inner value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomId> for i64 {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

impl FromStr for RoomId {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| ValueObjectError::RoomIdInvalidFormat(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room type value object (e.g. "Single", "Deluxe Suite").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomType(String);

impl RoomType {
    /// Create a new RoomType.
    ///
    /// Surrounding whitespace is not significant and is trimmed away.
    pub fn new(room_type: String) -> Result<Self, ValueObjectError> {
        let trimmed = room_type.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::RoomTypeEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Nightly room price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    /// Create a new Price. Negative amounts are rejected.
    pub fn new(amount: Decimal) -> Result<Self, ValueObjectError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValueObjectError::PriceNegative(amount.to_string()));
        }
        Ok(Self(amount))
    }

    /// Get the inner amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
