//! Filter to remove books without a usable page count.

use crate::traits::Filter;
use book_data::BookRecord;

/// Keeps records whose page count is an integer of at least `min_pages`.
///
/// ## Algorithm
/// A page count that was not an integer in the catalog data (`None`) never
/// passes, whatever the threshold.
pub struct MinimumPagesFilter {
    min_pages: i64,
}

impl MinimumPagesFilter {
    /// Create a new MinimumPagesFilter.
    ///
    /// # Arguments
    /// * `min_pages` - Smallest accepted page count (1 rejects zero-page volumes)
    pub fn new(min_pages: i64) -> Self {
        Self { min_pages }
    }
}

impl Default for MinimumPagesFilter {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Filter for MinimumPagesFilter {
    fn name(&self) -> &str {
        "MinimumPagesFilter"
    }

    fn keep(&self, record: &BookRecord) -> bool {
        record
            .page_count()
            .is_some_and(|pages| pages >= self.min_pages)
    }
}
