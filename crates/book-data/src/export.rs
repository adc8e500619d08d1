//! CSV export of ranked book records.
//!
//! The file always starts with the [`CSV_HEADERS`] row, even when there are
//! no records. Writing goes through a temporary file in the destination
//! directory that is renamed into place only once everything is flushed, so
//! a failed export never leaves a truncated file behind.

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{BookDataError, Result};
use crate::types::{BookRecord, CSV_HEADERS};

/// Write `records` to `path`, replacing any existing file.
pub fn write_csv(path: &Path, records: &[BookRecord]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staging = NamedTempFile::new_in(dir).map_err(|e| BookDataError::io(dir, e))?;
    // The staging file is private (0600); the export keeps the mode of the
    // file it replaces, or gets the usual 0644 when there is none
    if let Some(permissions) = target_permissions(path) {
        staging
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| BookDataError::io(path, e))?;
    }
    write_records(staging.as_file_mut(), records, path)?;
    staging
        .as_file()
        .sync_all()
        .map_err(|e| BookDataError::io(path, e))?;

    // The staging file is removed on drop if persisting fails
    staging
        .persist(path)
        .map_err(|e| BookDataError::io(path, e.error))?;

    tracing::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

/// Render `records` as a CSV string.
///
/// Useful for testing without file I/O.
pub fn to_csv_string(records: &[BookRecord]) -> Result<String> {
    let dummy_path = Path::new("<string>");
    let mut buffer = Vec::new();
    write_records(&mut buffer, records, dummy_path)?;

    String::from_utf8(buffer).map_err(|e| {
        BookDataError::io(
            dummy_path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

fn write_records<W: Write>(sink: W, records: &[BookRecord], path: &Path) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    let csv_err = |source| BookDataError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    csv_writer.write_record(CSV_HEADERS).map_err(csv_err)?;
    for record in records {
        csv_writer.write_record(record.to_row()).map_err(csv_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| BookDataError::io(path, e))?;

    Ok(())
}
