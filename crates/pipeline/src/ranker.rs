//! Ranking of filtered records.

use book_data::BookRecord;
use std::cmp::Ordering;

/// Sort records by average rating, highest first.
///
/// The sort is stable: records with equal ratings keep their input order.
/// Non-numeric ratings sort after every numeric one.
pub fn rank_by_rating(mut records: Vec<BookRecord>) -> Vec<BookRecord> {
    records.sort_by(|a, b| compare_ratings(b.average_rating(), a.average_rating()));
    tracing::debug!("Ranked {} records by average rating", records.len());
    records
}

fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, rating: Option<f64>) -> BookRecord {
        BookRecord::builder(title).average_rating(rating).build()
    }

    fn titles(records: &[BookRecord]) -> Vec<&str> {
        records.iter().map(BookRecord::title).collect()
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank_by_rating(vec![
            book("Mid", Some(4.2)),
            book("Top", Some(4.9)),
            book("Low", Some(4.0)),
        ]);
        assert_eq!(titles(&ranked), ["Top", "Mid", "Low"]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let ranked = rank_by_rating(vec![
            book("First 4.5", Some(4.5)),
            book("Only 5", Some(5.0)),
            book("Second 4.5", Some(4.5)),
            book("Third 4.5", Some(4.5)),
        ]);
        assert_eq!(
            titles(&ranked),
            ["Only 5", "First 4.5", "Second 4.5", "Third 4.5"]
        );
    }

    #[test]
    fn test_non_numeric_ratings_sort_last() {
        let ranked = rank_by_rating(vec![
            book("Garbled", None),
            book("Unrated", Some(0.0)),
            book("Rated", Some(4.1)),
        ]);
        assert_eq!(titles(&ranked), ["Rated", "Unrated", "Garbled"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_by_rating(Vec::new()).is_empty());
    }
}
