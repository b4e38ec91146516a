//! Review rating and spot average rating

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Star rating attached to a review, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw rating value
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::InvalidRating(value))
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mean rating of a spot, kept with exactly one fractional digit
///
/// Stored as tenths so equality is exact; serialized as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AverageRating(u16);

impl AverageRating {
    /// Mean of `sum / count` rounded half-up to one decimal.
    ///
    /// The tie is decided on the exact integer ratio, so 87/20 (4.35) gives
    /// 4.4 where `f64` rounding of `4.35 * 10.0` can land on 4.3.
    ///
    /// Returns `None` when `count == 0`.
    pub fn from_sum(sum: u64, count: u64) -> Option<Self> {
        if count == 0 {
            return None;
        }
        // round(10 * sum / count) without going through floats
        let tenths = (20 * sum + count) / (2 * count);
        Some(Self(tenths as u16))
    }

    /// Re-quantize a value read back from storage
    pub fn from_f64(value: f64) -> Self {
        Self((value * 10.0).round().max(0.0) as u16)
    }

    #[inline]
    pub const fn tenths(self) -> u16 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for AverageRating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for AverageRating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::from_f64)
    }
}
