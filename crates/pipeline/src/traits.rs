//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible inclusion predicates to be applied to a batch of books.

use book_data::BookRecord;

/// Core trait for filtering book records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters take ownership of the Vec<BookRecord> and return a filtered Vec
/// - Kept records must stay in their input order
/// - A record that cannot be evaluated (malformed date, non-numeric rating)
///   is dropped, so applying a filter never fails
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Returns true if the record satisfies this filter's predicate.
    fn keep(&self, record: &BookRecord) -> bool;

    /// Apply this filter to a set of records.
    ///
    /// The default implementation keeps every record for which
    /// [`Filter::keep`] holds.
    fn apply(&self, records: Vec<BookRecord>) -> Vec<BookRecord> {
        records
            .into_iter()
            .filter(|record| {
                let keep = self.keep(record);
                if !keep {
                    tracing::trace!("{} excluded '{}'", self.name(), record.title());
                }
                keep
            })
            .collect()
    }
}
