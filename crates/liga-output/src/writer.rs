//! File writers.
//!
//! The current spreadsheet format is UTF-8 with a byte-order mark (the
//! target system's importer expects one); the legacy format and text files
//! are plain UTF-8.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{OutputError, Result};

/// UTF-8 byte-order mark.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

fn create(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    File::create(path).map_err(|e| OutputError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write a comma-delimited file with a header row, optionally prefixed with
/// a UTF-8 BOM.
pub fn write_csv(
    path: &Path,
    headers: &[&str],
    rows: &[Vec<String>],
    with_bom: bool,
) -> Result<()> {
    let mut file = create(path)?;
    if with_bom {
        file.write_all(UTF8_BOM).map_err(|e| OutputError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    let mut writer = csv::Writer::from_writer(file);
    let encode = |e| OutputError::Csv {
        path: path.to_path_buf(),
        source: e,
    };
    writer.write_record(headers).map_err(encode)?;
    for row in rows {
        writer.write_record(row).map_err(encode)?;
    }
    writer.flush().map_err(|e| OutputError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write newline-terminated text lines.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut file = create(path)?;
    for line in lines {
        writeln!(file, "{line}").map_err(|e| OutputError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}
