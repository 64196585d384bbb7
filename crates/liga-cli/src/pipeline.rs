//! Conversion pipeline with explicit stages.
//!
//! 1. **Discover**: list CSV files in the input directory
//! 2. **Ingest**: read each table, UTF-8 with a Windows-1252 fallback
//! 3. **Project**: apply the requested output variants row by row
//! 4. **Write**: emit one file per spreadsheet variant and one per
//!    non-empty text bucket (skipped under dry-run)
//!
//! A file that fails to read or write aborts only that file; the run
//! continues and the failure lands in the summary and exit code.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use liga_ingest::{list_csv_files, read_csv_table};
use liga_model::{CardRecord, ColumnIndex};
use liga_output::{bucket_txt_name, converted_csv_name, write_csv, write_lines};
use liga_transform::{
    AllExtrasPolicy, CURRENT_HEADERS, LEGACY_HEADERS, format_line, partition, project_current,
    project_legacy,
};

use crate::types::{FileSummary, Format, OutputFile, RunResult};

/// Options for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Variants to produce, in order.
    pub formats: Vec<Format>,
    /// Policy for text-variant records with all three extras flags set.
    pub all_extras_policy: AllExtrasPolicy,
    /// Convert and summarize without writing files.
    pub dry_run: bool,
}

/// Convert every CSV file in the input directory.
pub fn run(options: &ConvertOptions) -> Result<RunResult> {
    let files = list_csv_files(&options.input_dir).context("list csv files")?;
    if files.is_empty() {
        info!(
            dir = %options.input_dir.display(),
            "no csv files found in input directory"
        );
    }

    let mut result = RunResult {
        output_dir: options.output_dir.clone(),
        dry_run: options.dry_run,
        ..RunResult::default()
    };

    for path in files {
        let span = info_span!("convert_file", file = %path.display());
        let _guard = span.enter();
        match convert_file(&path, options) {
            Ok(summary) => result.files.push(summary),
            Err(error) => {
                warn!(file = %path.display(), "conversion failed: {error:#}");
                result.files.push(FileSummary {
                    input: path,
                    error: Some(format!("{error:#}")),
                    ..FileSummary::default()
                });
            }
        }
    }

    Ok(result)
}

fn convert_file(path: &Path, options: &ConvertOptions) -> Result<FileSummary> {
    let table = read_csv_table(path).with_context(|| format!("read {}", path.display()))?;
    let index = ColumnIndex::new(&table.headers);
    let records: Vec<CardRecord> = table
        .rows
        .iter()
        .map(|row| CardRecord::from_row(&index, row))
        .collect();
    info!(rows = records.len(), "read input table");

    let mut summary = FileSummary {
        input: path.to_path_buf(),
        rows: records.len(),
        ..FileSummary::default()
    };

    for format in &options.formats {
        match format {
            Format::Current => {
                let rows: Vec<Vec<String>> = records.iter().map(project_current).collect();
                let output = write_spreadsheet(
                    path,
                    options,
                    Format::Current,
                    &CURRENT_HEADERS,
                    &rows,
                    true,
                )?;
                summary.outputs.push(output);
            }
            Format::Legacy => {
                let rows: Vec<Vec<String>> = records.iter().map(project_legacy).collect();
                let output = write_spreadsheet(
                    path,
                    options,
                    Format::Legacy,
                    &LEGACY_HEADERS,
                    &rows,
                    false,
                )?;
                summary.outputs.push(output);
            }
            Format::Text => {
                let split = partition(
                    records.iter().map(CardRecord::extras),
                    options.all_extras_policy,
                );
                if split.dropped > 0 {
                    warn!(
                        dropped = split.dropped,
                        "records matched no extras bucket and were excluded"
                    );
                    summary.dropped = split.dropped;
                }
                for (bucket, indices) in &split.buckets {
                    let lines: Vec<String> = indices
                        .iter()
                        .map(|&idx| format_line(&records[idx]))
                        .collect();
                    let out_path = options
                        .output_dir
                        .join(Format::Text.name())
                        .join(bucket_txt_name(bucket.prefix(), path));
                    if !options.dry_run {
                        write_lines(&out_path, &lines)
                            .with_context(|| format!("write {}", out_path.display()))?;
                    }
                    info!(bucket = bucket.prefix(), rows = lines.len(), "bucket converted");
                    summary.outputs.push(OutputFile {
                        path: out_path,
                        rows: lines.len(),
                    });
                }
            }
        }
    }

    Ok(summary)
}

fn write_spreadsheet(
    path: &Path,
    options: &ConvertOptions,
    format: Format,
    headers: &[&str],
    rows: &[Vec<String>],
    with_bom: bool,
) -> Result<OutputFile> {
    let out_path = options
        .output_dir
        .join(format.name())
        .join(converted_csv_name(path));
    if !options.dry_run {
        write_csv(&out_path, headers, rows, with_bom)
            .with_context(|| format!("write {}", out_path.display()))?;
    }
    info!(format = format.name(), rows = rows.len(), "spreadsheet converted");
    Ok(OutputFile {
        path: out_path,
        rows: rows.len(),
    })
}
