use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use liga_cli::types::RunResult;

/// Print the run result as pretty JSON (for `--json`).
pub fn print_summary_json(result: &RunResult) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

pub fn print_summary(result: &RunResult) {
    if result.files.is_empty() {
        println!("No CSV files found in the input directory.");
        return;
    }
    println!("Output: {}", result.output_dir.display());
    if result.dry_run {
        println!("Dry run: no files were written.");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Outputs"),
        header_cell("Written"),
        header_cell("Dropped"),
        header_cell("Status"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for idx in 1..=4 {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut total_rows = 0usize;
    let mut total_written = 0usize;
    let mut total_dropped = 0usize;
    for file in &result.files {
        total_rows += file.rows;
        total_written += file.written();
        total_dropped += file.dropped;
        let name = file
            .input
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("?");
        let status = match &file.error {
            Some(_) => Cell::new("failed").fg(Color::Red),
            None => Cell::new("ok").fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(file.rows),
            Cell::new(file.outputs.len()),
            Cell::new(file.written()),
            dropped_cell(file.dropped),
            status,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(total_written).add_attribute(Attribute::Bold),
        dropped_cell(total_dropped).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    println!("{table}");

    let errors: Vec<_> = result
        .files
        .iter()
        .filter_map(|file| {
            file.error
                .as_ref()
                .map(|error| (file.input.display().to_string(), error))
        })
        .collect();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for (file, error) in errors {
            eprintln!("- {file}: {error}");
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn dropped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}
