//! Filter to ensure minimum quality threshold.
//!
//! Removes books with a low average rating, ensuring we only report
//! well-reviewed titles.

use crate::traits::Filter;
use book_data::BookRecord;

/// Removes records below the rating threshold.
///
/// ## Algorithm
/// For each record:
/// 1. Read the average rating (unrated books carry 0.0)
/// 2. Drop it if the catalog value was not numeric
/// 3. Keep it only if avg_rating >= min_rating
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum average rating, inclusive (typically 4.0)
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Default for MinimumRatingFilter {
    fn default() -> Self {
        Self::new(4.0)
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn keep(&self, record: &BookRecord) -> bool {
        record
            .average_rating()
            .is_some_and(|rating| rating >= self.min_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, rating: Option<f64>) -> BookRecord {
        BookRecord::builder(title).average_rating(rating).build()
    }

    #[test]
    fn test_minimum_rating_filter() {
        let records = vec![
            book("High Rated", Some(4.5)),
            book("Low Rated", Some(3.9)),
            book("Exactly Four", Some(4.0)),
            book("Unrated", Some(0.0)),
            book("Garbled Rating", None),
            book("NaN Rating", Some(f64::NAN)),
        ];

        let filtered = MinimumRatingFilter::default().apply(records);
        let titles: Vec<&str> = filtered.iter().map(BookRecord::title).collect();

        assert_eq!(titles, ["High Rated", "Exactly Four"]);
    }
}
