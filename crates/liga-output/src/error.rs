use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing output files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
