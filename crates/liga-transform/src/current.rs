//! Current LigaMagic spreadsheet projection.
//!
//! Fixed 28-column schema with Portuguese header names (literal strings of
//! the target system, never translated). `Tipo` is the row type
//! discriminator, always `1`; the "special condition" columns are always `0`.

use liga_model::{CardRecord, Extras, SPREADSHEET_EDITIONS, condition_code, language_code};

/// Column headers, in output order.
pub const CURRENT_HEADERS: [&str; 28] = [
    "Tipo",
    "Edição ID",
    "Edição Sigla",
    "Carta ID",
    "Número",
    "Edição",
    "Raridade",
    "Cor",
    "Nome da Carta PT",
    "Nome da Carta EN",
    "Idioma",
    "Qualidade",
    "Quantidade Existente",
    "Quantidade Para Somar/Subtrair",
    "Preço",
    "Foil",
    "Foil Especial / Foil Etched",
    "Alterada",
    "Assinada",
    "Buy A Box",
    "DCI",
    "FNM",
    "Oversize",
    "Pre Release",
    "Promo",
    "Textless",
    "Misprint",
    "Miscut",
];

/// Project one record into the current schema.
pub fn project_current(record: &CardRecord) -> Vec<String> {
    let extras = record.extras();
    let edition = SPREADSHEET_EDITIONS.resolve(&record.edition_code, None);
    vec![
        "1".to_string(),                               // Tipo
        String::new(),                                 // Edição ID
        edition.to_string(),                           // Edição Sigla
        String::new(),                                 // Carta ID
        record.collector_number.clone(),               // Número
        record.edition.clone(),                        // Edição
        String::new(),                                 // Raridade
        String::new(),                                 // Cor
        String::new(),                                 // Nome da Carta PT
        record.name.clone(),                           // Nome da Carta EN
        language_code(&record.language).to_string(),   // Idioma
        condition_code(&record.condition).to_string(), // Qualidade
        String::new(),                                 // Quantidade Existente
        record.quantity.clone(),                       // Quantidade Para Somar/Subtrair
        "0".to_string(),                               // Preço
        Extras::bit(extras.foil).to_string(),          // Foil
        "0".to_string(),                               // Foil Especial / Foil Etched
        "0".to_string(),                               // Alterada
        "0".to_string(),                               // Assinada
        "0".to_string(),                               // Buy A Box
        "0".to_string(),                               // DCI
        "0".to_string(),                               // FNM
        "0".to_string(),                               // Oversize
        Extras::bit(extras.pre_release).to_string(),   // Pre Release
        Extras::bit(extras.promo).to_string(),         // Promo
        "0".to_string(),                               // Textless
        "0".to_string(),                               // Misprint
        "0".to_string(),                               // Miscut
    ]
}
