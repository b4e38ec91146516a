//! Spot review statistics

use serde::Serialize;

use crate::value_objects::{AverageRating, Rating};

/// Derived review statistics persisted on a spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SpotStats {
    pub review_count: u32,
    pub average_rating: Option<AverageRating>,
}

impl SpotStats {
    /// Statistics of a spot without reviews
    pub const EMPTY: Self = Self {
        review_count: 0,
        average_rating: None,
    };

    /// Recompute from the full set of ratings on a spot
    pub fn from_ratings<'a, I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = &'a Rating>,
    {
        let (count, sum) = ratings
            .into_iter()
            .fold((0u64, 0u64), |(count, sum), rating| {
                (count + 1, sum + u64::from(rating.value()))
            });

        Self {
            review_count: count as u32,
            average_rating: AverageRating::from_sum(sum, count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(values: &[i64]) -> Vec<Rating> {
        values.iter().map(|v| Rating::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(SpotStats::from_ratings(&ratings(&[])), SpotStats::EMPTY);
    }

    #[test]
    fn test_five_and_three_average_four() {
        let stats = SpotStats::from_ratings(&ratings(&[5, 3]));
        assert_eq!(stats.review_count, 2);
        assert_eq!(stats.average_rating.unwrap().to_string(), "4.0");
    }

    #[test]
    fn test_single_review() {
        let stats = SpotStats::from_ratings(&ratings(&[3]));
        assert_eq!(stats.review_count, 1);
        assert_eq!(stats.average_rating.unwrap().value(), 3.0);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let set = ratings(&[1, 2, 2, 5, 4]);
        assert_eq!(SpotStats::from_ratings(&set), SpotStats::from_ratings(&set));
        assert_eq!(
            SpotStats::from_ratings(&set).average_rating.unwrap().to_string(),
            "2.8"
        );
    }

    #[test]
    fn test_serializes_absent_average_as_null() {
        let json = serde_json::to_value(SpotStats::EMPTY).unwrap();
        assert_eq!(json["review_count"], 0);
        assert!(json["average_rating"].is_null());
    }
}
