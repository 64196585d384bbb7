//! CSV table reading with a legacy-encoding fallback.
//!
//! Files are decoded as UTF-8 first; on failure the whole file is retried
//! once as Windows-1252 (the superset of the ISO-8859-1 exports some vendors
//! still produce). Headers and cells are trimmed, and short records are
//! padded to the header width.

use std::borrow::Cow;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// An in-memory CSV table: one header row plus data rows, every row padded
/// to the header width.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Decode file bytes, falling back from UTF-8 to Windows-1252 once.
fn decode(path: &Path, bytes: &[u8]) -> Result<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }
    debug!(path = %path.display(), "utf-8 decode failed, retrying as windows-1252");
    let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
    if had_errors {
        return Err(IngestError::Decode {
            path: path.to_path_buf(),
        });
    }
    match text {
        Cow::Borrowed(text) => Ok(text.to_string()),
        Cow::Owned(text) => Ok(text),
    }
}

/// Read a delimiter-separated file with a header row into a [`CsvTable`].
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = decode(path, &bytes)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}
