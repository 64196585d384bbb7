//! Output file naming.

use std::path::Path;

fn input_stem(input: &Path) -> &str {
    input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output")
}

/// Spreadsheet output name: `converted_{basename}` with the extension
/// forced to `.csv`.
pub fn converted_csv_name(input: &Path) -> String {
    format!("converted_{}.csv", input_stem(input))
}

/// Text bucket output name: `{bucket}_{basename}` with `.csv` replaced by
/// `.txt`.
pub fn bucket_txt_name(bucket_prefix: &str, input: &Path) -> String {
    format!("{bucket_prefix}_{}.txt", input_stem(input))
}
