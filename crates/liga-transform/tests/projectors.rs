//! Tests for the three row projectors.

use liga_model::CardRecord;
use liga_transform::{
    CURRENT_HEADERS, LEGACY_HEADERS, extras_string, format_line, project_current, project_legacy,
};

fn record() -> CardRecord {
    CardRecord {
        name: "Lightning Bolt".to_string(),
        edition: "Masters 25".to_string(),
        edition_code: "A25".to_string(),
        collector_number: "141".to_string(),
        condition: "Near Mint".to_string(),
        language: "English".to_string(),
        quantity: "4".to_string(),
        ..CardRecord::default()
    }
}

#[test]
fn current_row_matches_header_width() {
    let row = project_current(&record());
    assert_eq!(row.len(), CURRENT_HEADERS.len());
}

#[test]
fn current_projects_sourced_and_constant_columns() {
    let mut record = record();
    record.edition_code = "F16".to_string();
    record.foil = Some("foil".to_string());
    let row = project_current(&record);

    let get = |header: &str| {
        let idx = CURRENT_HEADERS.iter().position(|h| *h == header).unwrap();
        row[idx].as_str()
    };

    assert_eq!(get("Tipo"), "1");
    assert_eq!(get("Edição Sigla"), "fnmp");
    assert_eq!(get("Número"), "141");
    assert_eq!(get("Edição"), "Masters 25");
    assert_eq!(get("Nome da Carta EN"), "Lightning Bolt");
    assert_eq!(get("Idioma"), "EN");
    assert_eq!(get("Qualidade"), "NM");
    assert_eq!(get("Quantidade Para Somar/Subtrair"), "4");
    assert_eq!(get("Preço"), "0");
    assert_eq!(get("Foil"), "1");
    assert_eq!(get("Pre Release"), "0");
    assert_eq!(get("Promo"), "0");
    assert_eq!(get("DCI"), "0");
    assert_eq!(get("Miscut"), "0");
    assert_eq!(get("Nome da Carta PT"), "");
}

#[test]
fn current_flags_promo_from_collector_suffix() {
    let mut record = record();
    record.collector_number = "141p".to_string();
    let row = project_current(&record);
    let promo_idx = CURRENT_HEADERS.iter().position(|h| *h == "Promo").unwrap();
    assert_eq!(row[promo_idx], "1");
}

#[test]
fn legacy_row_matches_header_width() {
    let row = project_legacy(&record());
    assert_eq!(row.len(), LEGACY_HEADERS.len());
}

#[test]
fn legacy_projects_columns() {
    let row = project_legacy(&record());
    assert_eq!(row[0], ""); // Edicao (PTBR)
    assert_eq!(row[1], "Masters 25");
    assert_eq!(row[2], "A25"); // identity passthrough
    assert_eq!(row[4], "Lightning Bolt");
    assert_eq!(row[5], "4");
    assert_eq!(row[6], "NM");
    assert_eq!(row[7], "EN");
    assert_eq!(row[10], "141");
    assert_eq!(row[11], ""); // no extras
    assert_eq!(row[12], ""); // Comentario
}

#[test]
fn legacy_extras_string_order() {
    let mut record = record();
    record.foil = Some("foil".to_string());
    record.tag = Some("Promo, Pre Release".to_string());
    assert_eq!(extras_string(&record), "Foil, Promo, Pre Release");
}

#[test]
fn legacy_extras_string_repeats_promo_for_suffix() {
    let mut record = record();
    record.tag = Some("Promo".to_string());
    record.collector_number = "7p".to_string();
    assert_eq!(extras_string(&record), "Promo, Promo");
}

#[test]
fn legacy_extras_string_suffix_only() {
    let mut record = record();
    record.collector_number = "7p".to_string();
    assert_eq!(extras_string(&record), "Promo");
}

#[test]
fn text_line_without_price() {
    let line = format_line(&record());
    assert_eq!(line, "4 Lightning Bolt [A25] (Near Mint, English) 0");
}

#[test]
fn text_line_with_price() {
    let mut record = record();
    record.price = 2.5;
    let line = format_line(&record);
    assert_eq!(line, "4 Lightning Bolt [A25] (Near Mint, English) 2.5");
}

#[test]
fn text_line_uses_uppercase_promo_token_and_raw_condition() {
    let mut record = record();
    record.edition_code = "F7".to_string();
    record.condition = "Slightly Played".to_string();
    let line = format_line(&record);
    assert_eq!(line, "4 Lightning Bolt [FNMP] (Slightly Played, English) 0");
}

#[test]
fn text_line_disambiguates_guild_editions() {
    let mut record = record();
    record.edition_code = "GK2".to_string();
    record.color = Some("White, Black".to_string());
    let line = format_line(&record);
    assert!(line.contains("[gk2o]"));
}
