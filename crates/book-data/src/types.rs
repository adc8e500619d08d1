//! Core domain types for catalog volumes.
//!
//! `RawItem` is the loosely typed record exactly as the catalog returns it,
//! `BookRecord` is the normalized, fully defaulted value every later stage
//! consumes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Raw catalog data
// =============================================================================

/// One entry of the catalog's `items` array.
///
/// Only `volumeInfo` is used. Its fields are kept as untyped JSON because the
/// catalog omits fields freely and occasionally sends them with a different
/// type (a rating as a string, a page count as a float).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: Option<Map<String, Value>>,
}

impl RawItem {
    /// Build an item from one entry of the catalog's `items` array.
    ///
    /// An entry that is not an object, or whose `volumeInfo` is not an
    /// object, yields an item without volume info instead of an error.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut entry) => entry
                .remove("volumeInfo")
                .map(Self::from_volume_info)
                .unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Build an item from a `volumeInfo` JSON value.
    ///
    /// A value that is not a JSON object yields an item without volume info.
    pub fn from_volume_info(value: Value) -> Self {
        match value {
            Value::Object(map) => Self {
                volume_info: Some(map),
            },
            _ => Self::default(),
        }
    }
}

// =============================================================================
// Normalized records
// =============================================================================

/// Column labels of the CSV export, in output order.
///
/// Numbers in the matching cells use Rust's `Display`: a whole rating such
/// as `4.0` is written `4`, not `4.0`. `Ratings Count` is always a
/// non-negative integer; a negative, fractional or non-numeric catalog
/// value is written as `0`.
pub const CSV_HEADERS: [&str; 13] = [
    "Title",
    "Authors",
    "Publisher",
    "Published Date",
    "Average Rating",
    "Ratings Count",
    "Language",
    "Genres",
    "ISBN-10",
    "ISBN-13",
    "Description",
    "Page Count",
    "Cover Image URL",
];

/// Separator used when a list field is rendered as a single cell.
pub const LIST_SEPARATOR: &str = ", ";

/// A normalized book.
///
/// Fields are private; a record is built once (by the normalizer or by
/// [`BookRecordBuilder`]) and only read afterwards.
///
/// `average_rating` is `None` when the catalog sent a value that is not a
/// number, and `page_count` is `None` when the value is not an integer.
/// Missing fields are `Some(0.0)` and `Some(0)` respectively.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    title: String,
    authors: Vec<String>,
    publisher: String,
    published_date: String,
    average_rating: Option<f64>,
    ratings_count: u64,
    language: String,
    genres: Vec<String>,
    isbn_10: String,
    isbn_13: String,
    description: String,
    page_count: Option<i64>,
    cover_image_url: String,
}

impl BookRecord {
    pub fn builder(title: impl Into<String>) -> BookRecordBuilder {
        BookRecordBuilder::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn published_date(&self) -> &str {
        &self.published_date
    }

    pub fn average_rating(&self) -> Option<f64> {
        self.average_rating
    }

    pub fn ratings_count(&self) -> u64 {
        self.ratings_count
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn isbn_10(&self) -> &str {
        &self.isbn_10
    }

    pub fn isbn_13(&self) -> &str {
        &self.isbn_13
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn page_count(&self) -> Option<i64> {
        self.page_count
    }

    pub fn cover_image_url(&self) -> &str {
        &self.cover_image_url
    }

    /// Year taken from the first four characters of the published date.
    ///
    /// Returns `None` when the date is shorter than four characters or any of
    /// them is not an ASCII digit.
    pub fn published_year(&self) -> Option<u16> {
        let prefix = self.published_date.get(..4)?;
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        prefix.parse().ok()
    }

    /// All fields rendered as text, in [`CSV_HEADERS`] order.
    ///
    /// Lists are joined with `", "`; a rating or page count that is not a
    /// number renders as an empty string. See [`CSV_HEADERS`] for how
    /// numbers are written.
    pub fn to_row(&self) -> [String; 13] {
        [
            self.title.clone(),
            self.authors.join(LIST_SEPARATOR),
            self.publisher.clone(),
            self.published_date.clone(),
            self.average_rating
                .map(|r| r.to_string())
                .unwrap_or_default(),
            self.ratings_count.to_string(),
            self.language.clone(),
            self.genres.join(LIST_SEPARATOR),
            self.isbn_10.clone(),
            self.isbn_13.clone(),
            self.description.clone(),
            self.page_count.map(|p| p.to_string()).unwrap_or_default(),
            self.cover_image_url.clone(),
        ]
    }
}

/// Assembles a [`BookRecord`] field by field.
///
/// Every field starts at the same default the normalizer uses for a missing
/// catalog value.
#[derive(Debug, Clone)]
pub struct BookRecordBuilder {
    record: BookRecord,
}

impl BookRecordBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            record: BookRecord {
                title: title.into(),
                authors: Vec::new(),
                publisher: String::new(),
                published_date: String::new(),
                average_rating: Some(0.0),
                ratings_count: 0,
                language: String::new(),
                genres: Vec::new(),
                isbn_10: String::new(),
                isbn_13: String::new(),
                description: String::new(),
                page_count: Some(0),
                cover_image_url: String::new(),
            },
        }
    }

    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.record.publisher = publisher.into();
        self
    }

    pub fn published_date(mut self, date: impl Into<String>) -> Self {
        self.record.published_date = date.into();
        self
    }

    pub fn average_rating(mut self, rating: Option<f64>) -> Self {
        self.record.average_rating = rating;
        self
    }

    pub fn ratings_count(mut self, count: u64) -> Self {
        self.record.ratings_count = count;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.record.language = language.into();
        self
    }

    pub fn genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn isbn_10(mut self, isbn: impl Into<String>) -> Self {
        self.record.isbn_10 = isbn.into();
        self
    }

    pub fn isbn_13(mut self, isbn: impl Into<String>) -> Self {
        self.record.isbn_13 = isbn.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = description.into();
        self
    }

    pub fn page_count(mut self, pages: Option<i64>) -> Self {
        self.record.page_count = pages;
        self
    }

    pub fn cover_image_url(mut self, url: impl Into<String>) -> Self {
        self.record.cover_image_url = url.into();
        self
    }

    pub fn build(self) -> BookRecord {
        self.record
    }
}
