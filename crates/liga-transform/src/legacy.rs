//! Legacy LigaMagic spreadsheet projection.
//!
//! 13-column schema. Extras are a single comma-joined string instead of bit
//! columns, and condition/language/edition use the same code tables as the
//! current variant.

use liga_model::{
    CardRecord, PRE_RELEASE_TAG, PROMO_SUFFIX, PROMO_TAG, SPREADSHEET_EDITIONS, condition_code,
    language_code,
};

/// Column headers, in output order.
pub const LEGACY_HEADERS: [&str; 13] = [
    "Edicao (PTBR)",
    "Edicao (EN)",
    "Edicao (Sigla)",
    "Card (PT)",
    "Card (EN)",
    "Quantidade",
    "Qualidade (M NM SP MP HP D)",
    "Idioma (BR EN DE ES FR IT JP KO RU TW)",
    "Raridade (M R U C)",
    "Cor (W U B R G M A L)",
    "Card #",
    "Extras",
    "Comentario",
];

/// Project one record into the legacy schema.
pub fn project_legacy(record: &CardRecord) -> Vec<String> {
    let edition = SPREADSHEET_EDITIONS.resolve(&record.edition_code, None);
    vec![
        String::new(),                                 // Edicao (PTBR)
        record.edition.clone(),                        // Edicao (EN)
        edition.to_string(),                           // Edicao (Sigla)
        String::new(),                                 // Card (PT)
        record.name.clone(),                           // Card (EN)
        record.quantity.clone(),                       // Quantidade
        condition_code(&record.condition).to_string(), // Qualidade
        language_code(&record.language).to_string(),   // Idioma
        String::new(),                                 // Raridade
        String::new(),                                 // Cor
        record.collector_number.clone(),               // Card #
        extras_string(record),                         // Extras
        String::new(),                                 // Comentario
    ]
}

/// Comma-joined extras column, parts in a fixed order: Foil, tag Promo,
/// tag Pre Release, then collector-number Promo.
///
/// The collector-number check is independent of the tag check, so a record
/// that is a promo by both rules lists `Promo` twice. That matches the
/// format this column replaces.
pub fn extras_string(record: &CardRecord) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if record.foil.is_some() {
        parts.push("Foil");
    }
    if let Some(tag) = record.tag.as_deref() {
        if tag.contains(PROMO_TAG) {
            parts.push("Promo");
        }
        if tag.contains(PRE_RELEASE_TAG) {
            parts.push("Pre Release");
        }
    }
    if record.collector_number.ends_with(PROMO_SUFFIX) {
        parts.push("Promo");
    }
    parts.join(", ")
}
