//! Pipeline for filtering and ranking book records.
//!
//! This crate provides:
//! - Filter trait and implementations for record filtering
//! - FilterPipeline for composing filters
//! - A stable ranker ordering records by average rating
//!
//! ## Architecture
//! The pipeline processes normalized records in stages:
//! 1. Filters remove unwanted records (untitled, no pages, too old, low rated)
//! 2. The ranker sorts the survivors by rating, highest first
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{rank_by_rating, FilterPipeline};
//!
//! let filtered = FilterPipeline::standard().apply(records);
//! let ranked = rank_by_rating(filtered);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranker;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use ranker::rank_by_rating;
