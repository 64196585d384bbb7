//! Plain-text line projection.
//!
//! One line per record:
//! `{quantity} {name} [{edition}] ({condition}, {language}) {price}`.
//! Condition and language are the raw input strings, not codes; the edition
//! uses the text-variant mapping (uppercase promo token, guild rules).

use std::fmt::Write as _;

use liga_model::{CardRecord, TEXT_EDITIONS};

/// Format one record as a text line (without trailing newline).
pub fn format_line(record: &CardRecord) -> String {
    let edition = TEXT_EDITIONS.resolve(&record.edition_code, record.color.as_deref());
    let mut line = format!(
        "{} {} [{}] ({}, {})",
        record.quantity, record.name, edition, record.condition, record.language
    );
    if record.price > 0.0 {
        let _ = write!(line, " {}", record.price);
    } else {
        line.push_str(" 0");
    }
    line
}
