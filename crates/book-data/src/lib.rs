//! # Book Data Crate
//!
//! This crate owns the book record model shared by every stage of the
//! pipeline.
//!
//! ## Main Components
//!
//! - **types**: `RawItem` (catalog JSON) and `BookRecord` (normalized)
//! - **normalize**: total conversion from `RawItem` to `BookRecord`
//! - **export**: atomic CSV export with a fixed header
//! - **error**: error types for exporting
//!
//! ## Example Usage
//!
//! ```ignore
//! use book_data::{export, normalize_all};
//! use std::path::Path;
//!
//! let records = normalize_all(&items);
//! export::write_csv(Path::new("books.csv"), &records)?;
//! ```

// Public modules
pub mod error;
pub mod export;
pub mod normalize;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{BookDataError, Result};
pub use normalize::{normalize, normalize_all};
pub use types::{BookRecord, BookRecordBuilder, RawItem, CSV_HEADERS, LIST_SEPARATOR};
