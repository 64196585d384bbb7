//! CLI library components for the LigaMagic inventory converter.

pub mod logging;
pub mod pipeline;
pub mod types;

pub use pipeline::{ConvertOptions, run};
pub use types::{FileSummary, Format, OutputFile, RunResult};
