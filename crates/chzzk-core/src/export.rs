//! CSV export for fetched live streams
//!
//! Writes a BOM-prefixed UTF-8 file with a fixed header and a
//! date-stamped filename, so the output opens cleanly in common
//! spreadsheet tools.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::Result;
use crate::types::LiveStream;

/// Fixed filename prefix for export files
pub const EXPORT_PREFIX: &str = "chzzk_lives";

/// Fixed four-column header row
const HEADER: &str = "streamer,title,viewers,category";

/// UTF-8 byte order mark, written first so spreadsheet tools detect the encoding
const BOM: &str = "\u{feff}";

/// Builds the export filename for the given date
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use chzzk_core::export_filename;
/// let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
/// assert_eq!(export_filename(date), "chzzk_lives_2026-08-06.csv");
/// ```
pub fn export_filename(date: NaiveDate) -> String {
    format!("{}_{}.csv", EXPORT_PREFIX, date.format("%Y-%m-%d"))
}

/// Quotes a field when it contains the delimiter, quotes or line breaks
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Writes the BOM, header row and one row per stream
///
/// Viewer counts are written as raw integers, without separators.
///
/// # Arguments
/// * `out` - Destination writer
/// * `streams` - Records to write, one row each
///
/// # Errors
/// Any I/O error from the underlying writer
pub fn write_csv<W: Write>(mut out: W, streams: &[LiveStream]) -> std::io::Result<()> {
    write!(out, "{BOM}")?;
    writeln!(out, "{HEADER}")?;

    for stream in streams {
        writeln!(
            out,
            "{},{},{},{}",
            escape_field(&stream.streamer),
            escape_field(&stream.title),
            stream.viewers,
            escape_field(&stream.category),
        )?;
    }

    out.flush()
}

/// Writes streams to `<dir>/chzzk_lives_<date>.csv`
///
/// # Arguments
/// * `dir` - Directory the file is created in
/// * `streams` - Records to write
/// * `date` - Date stamped into the filename (local date of the export)
///
/// # Returns
/// Path of the written file
///
/// # Errors
/// `Io` on any file-system error. A partially written file is left in
/// place; callers only report the failure.
pub fn export_streams(dir: &Path, streams: &[LiveStream], date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(export_filename(date));
    let file = File::create(&path)?;
    write_csv(BufWriter::new(file), streams)?;

    info!(records = streams.len(), path = %path.display(), "export written");
    Ok(path)
}
