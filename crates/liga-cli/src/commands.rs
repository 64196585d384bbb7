//! Command entry points.

use anyhow::Result;

use liga_cli::pipeline::{ConvertOptions, run};
use liga_cli::types::{Format, RunResult};
use liga_transform::AllExtrasPolicy;

use crate::cli::{ConvertArgs, FormatArg};

pub fn run_convert(args: &ConvertArgs) -> Result<RunResult> {
    let formats = match args.format {
        FormatArg::Current => vec![Format::Current],
        FormatArg::Legacy => vec![Format::Legacy],
        FormatArg::Text => vec![Format::Text],
        FormatArg::All => Format::ALL.to_vec(),
    };
    let all_extras_policy = if args.split_all_extras {
        AllExtrasPolicy::Split
    } else {
        AllExtrasPolicy::Drop
    };
    let options = ConvertOptions {
        input_dir: args.input_dir.clone(),
        output_dir: args.output_dir.clone(),
        formats,
        all_extras_policy,
        dry_run: args.dry_run,
    };
    run(&options)
}

pub fn run_formats() {
    for format in Format::ALL {
        println!("{:<10} {}", format.name(), format.description());
    }
}
