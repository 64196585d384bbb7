//! CLI argument definitions for the inventory converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "liga-convert",
    version,
    about = "Convert card inventory CSV exports to the LigaMagic formats",
    long_about = "Convert trading-card inventory CSV exports to the LigaMagic formats.\n\n\
                  Produces the current spreadsheet schema, the legacy spreadsheet\n\
                  schema, and plain-text lines split into extras bucket files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert every CSV file in an input directory.
    Convert(ConvertArgs),

    /// List the supported output formats.
    Formats,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Directory containing the source CSV exports.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output directory for converted files (created if absent).
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output_data")]
    pub output_dir: PathBuf,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "all")]
    pub format: FormatArg,

    /// Write foil+promo+pre-release records to their own text bucket
    /// instead of excluding them.
    #[arg(long = "split-all-extras")]
    pub split_all_extras: bool,

    /// Convert and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the run summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Current,
    Legacy,
    Text,
    All,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
