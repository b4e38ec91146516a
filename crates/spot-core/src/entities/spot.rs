//! Spot entity - a reviewable location

use chrono::{DateTime, Utc};

use crate::aggregates::SpotStats;
use crate::error::DomainError;
use crate::value_objects::{AverageRating, SpotId, UserId};

/// Spot entity
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub id: SpotId,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_by: Option<UserId>,
    pub review_count: u32,
    pub average_rating: Option<AverageRating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Spot {
    /// Create a spot with no reviews yet
    pub fn new(id: SpotId, new: NewSpot) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: new.name,
            description: new.description,
            address: new.address,
            latitude: new.latitude,
            longitude: new.longitude,
            created_by: new.created_by,
            review_count: 0,
            average_rating: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Current derived statistics
    pub fn stats(&self) -> SpotStats {
        SpotStats {
            review_count: self.review_count,
            average_rating: self.average_rating,
        }
    }

    /// Overwrite derived statistics
    pub fn set_stats(&mut self, stats: SpotStats) {
        self.review_count = stats.review_count;
        self.average_rating = stats.average_rating;
    }

    /// Apply a partial update
    pub fn apply(&mut self, changes: SpotChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(address) = changes.address {
            self.address = Some(address);
        }
        if let Some(latitude) = changes.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = changes.longitude {
            self.longitude = longitude;
        }
        self.updated_at = Utc::now();
    }
}

/// Fields required to create a spot
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpot {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_by: Option<UserId>,
}

impl NewSpot {
    /// Check coordinate ranges
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_coordinates(self.latitude, self.longitude)
    }
}

/// Partial spot update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpotChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl SpotChanges {
    /// Check coordinate ranges against the merged result
    pub fn validate_against(&self, current: &Spot) -> Result<(), DomainError> {
        validate_coordinates(
            self.latitude.unwrap_or(current.latitude),
            self.longitude.unwrap_or(current.longitude),
        )
    }
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), DomainError> {
    if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(DomainError::InvalidCoordinates {
            latitude,
            longitude,
        })
    }
}
