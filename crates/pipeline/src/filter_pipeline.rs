//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{MinimumPagesFilter, MinimumRatingFilter, RecencyFilter, TitlePresentFilter};
use crate::traits::Filter;
use book_data::BookRecord;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// A record survives the pipeline only if every filter keeps it, and
/// survivors keep their relative input order.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TitlePresentFilter)
///     .add_filter(MinimumPagesFilter::default())
///     .add_filter(RecencyFilter::new(2010))
///     .add_filter(MinimumRatingFilter::new(4.0));
///
/// let filtered = pipeline.apply(records);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard inclusion predicates: a title, at least one page,
    /// published after 2010, and an average rating of at least 4.0.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(TitlePresentFilter)
            .add_filter(MinimumPagesFilter::default())
            .add_filter(RecencyFilter::default())
            .add_filter(MinimumRatingFilter::default())
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    ///
    /// # Returns
    /// The records kept by every filter
    pub fn apply(&self, records: Vec<BookRecord>) -> Vec<BookRecord> {
        let mut current = records;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
