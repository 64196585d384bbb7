use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while discovering or reading source files.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Both the UTF-8 decode and the single Windows-1252 retry failed.
    #[error("failed to decode {} as UTF-8 or Windows-1252", path.display())]
    Decode { path: PathBuf },

    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
