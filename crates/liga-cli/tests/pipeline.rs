//! End-to-end tests for the conversion pipeline.

use std::path::Path;

use tempfile::TempDir;

use liga_cli::pipeline::{ConvertOptions, run};
use liga_cli::types::Format;
use liga_transform::AllExtrasPolicy;

const INPUT: &str = "\
Name,Edition,Edition CODE,Collector's number,Condition,Language,Quantity,Foil,Tag,Color,Price
Shock,Ravnica Allegiance Guild Kit,GK2,98,Near Mint,English,4,,,\"White, Black\",
Lightning Bolt,Masters 25,A25,141,Near Mint,English,2,foil,,,1.5
Opt,FNM Promos,F16,12p,Slightly Played,English,1,,Promo,,
Nexus of Fate,Core Set 2019,M19,306,Near Mint,Japanese,1,foil,\"Promo, Pre Release\",,
";

fn setup(policy: AllExtrasPolicy, formats: Vec<Format>, dry_run: bool) -> (TempDir, ConvertOptions) {
    let dir = TempDir::new().unwrap();
    let input_dir = dir.path().join("input_data");
    std::fs::create_dir(&input_dir).unwrap();
    std::fs::write(input_dir.join("cards.csv"), INPUT).unwrap();
    let options = ConvertOptions {
        input_dir,
        output_dir: dir.path().join("output_data"),
        formats,
        all_extras_policy: policy,
        dry_run,
    };
    (dir, options)
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn converts_all_formats() {
    let (_dir, options) = setup(AllExtrasPolicy::Drop, Format::ALL.to_vec(), false);
    let result = run(&options).unwrap();

    assert!(!result.has_errors());
    assert_eq!(result.files.len(), 1);
    let summary = &result.files[0];
    assert_eq!(summary.rows, 4);
    assert_eq!(summary.dropped, 1); // foil + promo + pre-release

    // current: BOM, 28 columns, one output row per input row
    let current = read(&options.output_dir.join("current/converted_cards.csv"));
    assert!(current.starts_with('\u{feff}'));
    let mut lines = current.trim_start_matches('\u{feff}').lines();
    let header = lines.next().unwrap();
    assert_eq!(header.split(',').count(), 28);
    assert_eq!(lines.count(), 4);

    // legacy: no BOM, quoted extras string with the doubled promo
    let legacy = read(&options.output_dir.join("legacy/converted_cards.csv"));
    assert!(!legacy.starts_with('\u{feff}'));
    assert!(legacy.contains("Edicao (PTBR)"));
    assert!(legacy.lines().any(|line| line.contains("\"Foil, Promo, Pre Release\"")));

    // text: three non-empty buckets, one line each; guild code resolved
    let text_dir = options.output_dir.join("text");
    let no_extras = read(&text_dir.join("no_extras_cards.txt"));
    insta::assert_snapshot!(no_extras.trim_end(), @"4 Shock [gk2o] (Near Mint, English) 0");
    let only_foil = read(&text_dir.join("only_foil_cards.txt"));
    assert_eq!(only_foil, "2 Lightning Bolt [A25] (Near Mint, English) 1.5\n");
    let only_promo = read(&text_dir.join("only_promo_cards.txt"));
    assert_eq!(only_promo, "1 Opt [FNMP] (Slightly Played, English) 0\n");
    assert!(!text_dir.join("foil_promo_pre_release_cards.txt").exists());

    // every input row is either written to a bucket or counted as dropped
    let bucket_rows: usize = summary
        .outputs
        .iter()
        .filter(|output| output.path.starts_with(&text_dir))
        .map(|output| output.rows)
        .sum();
    assert_eq!(bucket_rows + summary.dropped, summary.rows);
}

#[test]
fn split_policy_writes_seventh_bucket() {
    let (_dir, options) = setup(AllExtrasPolicy::Split, vec![Format::Text], false);
    let result = run(&options).unwrap();

    assert_eq!(result.files[0].dropped, 0);
    let bucket = options
        .output_dir
        .join("text/foil_promo_pre_release_cards.txt");
    let content = read(&bucket);
    assert_eq!(
        content,
        "1 Nexus of Fate [M19] (Near Mint, Japanese) 0\n"
    );
}

#[test]
fn conversion_is_idempotent() {
    let (_dir, options) = setup(AllExtrasPolicy::Drop, vec![Format::Current], false);
    run(&options).unwrap();
    let first = std::fs::read(options.output_dir.join("current/converted_cards.csv")).unwrap();
    run(&options).unwrap();
    let second = std::fs::read(options.output_dir.join("current/converted_cards.csv")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn dry_run_writes_nothing() {
    let (_dir, options) = setup(AllExtrasPolicy::Drop, Format::ALL.to_vec(), true);
    let result = run(&options).unwrap();

    assert!(!result.has_errors());
    assert!(!result.files[0].outputs.is_empty());
    assert!(!options.output_dir.exists());
}

#[test]
fn empty_directory_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let input_dir = dir.path().join("input_data");
    std::fs::create_dir(&input_dir).unwrap();
    let options = ConvertOptions {
        input_dir,
        output_dir: dir.path().join("output_data"),
        formats: Format::ALL.to_vec(),
        all_extras_policy: AllExtrasPolicy::Drop,
        dry_run: false,
    };

    let result = run(&options).unwrap();
    assert!(result.files.is_empty());
    assert!(!result.has_errors());
}

#[test]
fn missing_columns_degrade_to_empty_fields() {
    let dir = TempDir::new().unwrap();
    let input_dir = dir.path().join("input_data");
    std::fs::create_dir(&input_dir).unwrap();
    std::fs::write(input_dir.join("partial.csv"), "Name,Quantity\nShock,4\n").unwrap();
    let options = ConvertOptions {
        input_dir,
        output_dir: dir.path().join("output_data"),
        formats: vec![Format::Current, Format::Text],
        all_extras_policy: AllExtrasPolicy::Drop,
        dry_run: false,
    };

    let result = run(&options).unwrap();
    assert!(!result.has_errors());

    let current = read(&options.output_dir.join("current/converted_partial.csv"));
    assert!(current.contains("1,,,,,,,,,Shock,,,,4,0,0"));
    let no_extras = read(&options.output_dir.join("text/no_extras_partial.txt"));
    assert_eq!(no_extras, "4 Shock [] (, ) 0\n");
}
