//! Inventory ingestion: discovery of source CSV files and table reading
//! with a UTF-8 -> Windows-1252 decode fallback.

pub mod csv_table;
pub mod discovery;
pub mod error;

pub use csv_table::{CsvTable, read_csv_table};
pub use discovery::list_csv_files;
pub use error::{IngestError, Result};
