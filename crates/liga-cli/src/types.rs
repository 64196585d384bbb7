//! Shared result types for the pipeline and summary.

use std::path::PathBuf;

use serde::Serialize;

/// One of the three output schema variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Current,
    Legacy,
    Text,
}

impl Format {
    /// Every variant, in summary order.
    pub const ALL: [Format; 3] = [Format::Current, Format::Legacy, Format::Text];

    /// Short name, also used as the per-format output subdirectory.
    pub fn name(self) -> &'static str {
        match self {
            Format::Current => "current",
            Format::Legacy => "legacy",
            Format::Text => "text",
        }
    }

    /// One-line description for `liga-convert formats`.
    pub fn description(self) -> &'static str {
        match self {
            Format::Current => "LigaMagic spreadsheet import, 28 columns, UTF-8 with BOM",
            Format::Legacy => "legacy LigaMagic spreadsheet, 13 columns, UTF-8",
            Format::Text => "plain-text lines split into extras bucket files",
        }
    }
}

/// One written (or dry-run planned) output file.
#[derive(Debug, Clone, Serialize)]
pub struct OutputFile {
    pub path: PathBuf,
    pub rows: usize,
}

/// Per-input-file conversion summary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileSummary {
    pub input: PathBuf,
    /// Input rows read.
    pub rows: usize,
    pub outputs: Vec<OutputFile>,
    /// Text-variant records that matched no bucket.
    pub dropped: usize,
    pub error: Option<String>,
}

impl FileSummary {
    /// Total rows across this file's outputs.
    pub fn written(&self) -> usize {
        self.outputs.iter().map(|output| output.rows).sum()
    }
}

/// Whole-run result.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub files: Vec<FileSummary>,
    pub dry_run: bool,
}

impl RunResult {
    /// Whether any file failed to convert.
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|file| file.error.is_some())
    }
}
