//! Filter implementations for the book pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod minimum_rating;
pub mod page_count;
pub mod recency;
pub mod title_present;

// Re-export for convenience
pub use minimum_rating::MinimumRatingFilter;
pub use page_count::MinimumPagesFilter;
pub use recency::RecencyFilter;
pub use title_present::TitlePresentFilter;
