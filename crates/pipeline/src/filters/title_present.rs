//! Filter to remove books without a title.
//!
//! Untitled volumes are unusable in the report and the export, so this is
//! the first filter in the standard pipeline.

use crate::traits::Filter;
use book_data::BookRecord;

/// Removes records whose title is empty.
pub struct TitlePresentFilter;

impl Filter for TitlePresentFilter {
    fn name(&self) -> &str {
        "TitlePresentFilter"
    }

    fn keep(&self, record: &BookRecord) -> bool {
        !record.title().is_empty()
    }
}
