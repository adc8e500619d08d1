//! Console report of the best ranked books.

use std::io::{self, Write};

use book_data::{BookRecord, CSV_HEADERS};

/// Line printed after each reported book
pub const DELIMITER: &str = "---------------------------";

/// Number of books shown when no limit is configured
pub const DEFAULT_TOP_N: usize = 5;

/// Write the first `limit` records, one labeled field per line.
///
/// Prints every record when there are fewer than `limit`; the heading is
/// printed even for an empty batch.
pub fn write_top<W: Write>(out: &mut W, records: &[BookRecord], limit: usize) -> io::Result<()> {
    writeln!(out, "Top {limit} Books:")?;
    for record in records.iter().take(limit) {
        for (label, value) in CSV_HEADERS.iter().zip(record.to_row()) {
            writeln!(out, "{label}: {value}")?;
        }
        writeln!(out, "{DELIMITER}")?;
    }
    out.flush()
}
