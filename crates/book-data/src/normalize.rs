//! Normalization of raw catalog items into [`BookRecord`]s.
//!
//! Every field is extracted with an explicit default, so normalization is
//! total: missing or oddly typed data yields defaults, never an error.
//! A JSON `null` is treated the same as an absent field.

use serde_json::{Map, Value};

use crate::types::{BookRecord, RawItem};

/// Identifier type tag for 10-digit ISBNs
pub const ISBN_10: &str = "ISBN_10";

/// Identifier type tag for 13-digit ISBNs
pub const ISBN_13: &str = "ISBN_13";

/// Normalize a single catalog item.
pub fn normalize(item: &RawItem) -> BookRecord {
    let empty = Map::new();
    let info = item.volume_info.as_ref().unwrap_or(&empty);

    BookRecord::builder(string_field(info, "title"))
        .authors(string_list(info, "authors"))
        .publisher(string_field(info, "publisher"))
        .published_date(string_field(info, "publishedDate"))
        .average_rating(rating_field(info, "averageRating"))
        .ratings_count(count_field(info, "ratingsCount"))
        .language(string_field(info, "language"))
        .genres(string_list(info, "categories"))
        .isbn_10(identifier(info, ISBN_10))
        .isbn_13(identifier(info, ISBN_13))
        .description(string_field(info, "description"))
        .page_count(integer_field(info, "pageCount"))
        .cover_image_url(thumbnail(info))
        .build()
}

/// Normalize a batch, preserving order.
pub fn normalize_all(items: &[RawItem]) -> Vec<BookRecord> {
    let records: Vec<BookRecord> = items.iter().map(normalize).collect();
    tracing::debug!("Normalized {} catalog items", records.len());
    records
}

/// Look up a field, treating `null` as absent.
fn field<'a>(info: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    info.get(key).filter(|value| !value.is_null())
}

fn string_field(info: &Map<String, Value>, key: &str) -> String {
    field(info, key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_list(info: &Map<String, Value>, key: &str) -> Vec<String> {
    field(info, key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Missing -> `Some(0.0)`, number or numeric string -> value, anything else -> `None`.
///
/// `"NaN"` and `"inf"` parse as floats but are not ratings, so they are `None` too.
fn rating_field(info: &Map<String, Value>, key: &str) -> Option<f64> {
    let rating = match field(info, key) {
        None => return Some(0.0),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    rating.filter(|r| r.is_finite())
}

/// Missing -> `Some(0)`, JSON integer -> value, anything else -> `None`.
fn integer_field(info: &Map<String, Value>, key: &str) -> Option<i64> {
    match field(info, key) {
        None => Some(0),
        Some(value) => value.as_i64(),
    }
}

fn count_field(info: &Map<String, Value>, key: &str) -> u64 {
    field(info, key).and_then(Value::as_u64).unwrap_or(0)
}

/// First `industryIdentifiers` entry whose `type` equals `kind`.
///
/// Entries without a string `type` or `identifier` are skipped.
fn identifier(info: &Map<String, Value>, kind: &str) -> String {
    field(info, "industryIdentifiers")
        .and_then(Value::as_array)
        .and_then(|entries| {
            entries
                .iter()
                .filter_map(Value::as_object)
                .filter(|entry| entry.get("type").and_then(Value::as_str) == Some(kind))
                .find_map(|entry| entry.get("identifier").and_then(Value::as_str))
        })
        .unwrap_or_default()
        .to_string()
}

fn thumbnail(info: &Map<String, Value>) -> String {
    field(info, "imageLinks")
        .and_then(Value::as_object)
        .and_then(|links| links.get("thumbnail"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
