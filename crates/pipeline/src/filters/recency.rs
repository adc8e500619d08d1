//! Filter for publication recency.
//!
//! Keeps books published after a cutoff year, using the year prefix of the
//! catalog's `publishedDate` (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).

use crate::traits::Filter;
use book_data::BookRecord;

/// Filters records based on publication year.
///
/// ## Algorithm
/// 1. Take the first four characters of the published date
/// 2. Drop the record if they are missing or not all digits
/// 3. Keep it only if the year is strictly greater than `after_year`
pub struct RecencyFilter {
    after_year: u16,
}

impl RecencyFilter {
    /// Create a new RecencyFilter.
    ///
    /// # Arguments
    /// * `after_year` - Exclusive lower bound on the publication year (typically 2010)
    pub fn new(after_year: u16) -> Self {
        Self { after_year }
    }
}

impl Default for RecencyFilter {
    fn default() -> Self {
        Self::new(2010)
    }
}

impl Filter for RecencyFilter {
    fn name(&self) -> &str {
        "RecencyFilter"
    }

    fn keep(&self, record: &BookRecord) -> bool {
        record
            .published_year()
            .is_some_and(|year| year > self.after_year)
    }
}
