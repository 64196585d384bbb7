//! Output naming and file writers for the converter.

pub mod error;
pub mod naming;
pub mod writer;

pub use error::{OutputError, Result};
pub use naming::{bucket_txt_name, converted_csv_name};
pub use writer::{write_csv, write_lines};
