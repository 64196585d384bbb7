//! Source-schema record binding.
//!
//! Binding is best effort: columns are matched by trimmed, case-insensitive
//! header name, and a missing column or empty cell degrades the field to its
//! default instead of failing the row.

use std::collections::HashMap;

use crate::extras::Extras;

/// Source export column names.
pub mod columns {
    pub const NAME: &str = "Name";
    pub const EDITION: &str = "Edition";
    pub const EDITION_CODE: &str = "Edition CODE";
    pub const COLLECTOR_NUMBER: &str = "Collector's number";
    pub const CONDITION: &str = "Condition";
    pub const LANGUAGE: &str = "Language";
    pub const QUANTITY: &str = "Quantity";
    pub const FOIL: &str = "Foil";
    pub const TAG: &str = "Tag";
    pub const COLOR: &str = "Color";
    pub const PRICE: &str = "Price";
}

/// Case-insensitive header name -> column position index.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build the index from a header row. The first occurrence wins when a
    /// header repeats.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions = HashMap::new();
        for (idx, header) in headers.into_iter().enumerate() {
            let key = header.as_ref().trim().to_ascii_uppercase();
            positions.entry(key).or_insert(idx);
        }
        Self { positions }
    }

    /// Position of a column, if present.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(&name.to_ascii_uppercase()).copied()
    }
}

/// One input row bound to the source schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardRecord {
    pub name: String,
    pub edition: String,
    pub edition_code: String,
    pub collector_number: String,
    pub condition: String,
    pub language: String,
    /// Raw quantity string, passed through without validation.
    pub quantity: String,
    /// Foil marker; presence is meaningful, the value is not.
    pub foil: Option<String>,
    /// Free-text tag, scanned for promo / pre-release substrings.
    pub tag: Option<String>,
    /// Set-like string of color names, used for guild disambiguation.
    pub color: Option<String>,
    /// Absent or unparseable prices are zero.
    pub price: f64,
}

impl CardRecord {
    /// Bind a raw CSV row against the header index.
    pub fn from_row(index: &ColumnIndex, row: &[String]) -> Self {
        let field = |name: &str| -> String {
            index
                .get(name)
                .and_then(|idx| row.get(idx))
                .map(|value| value.trim().to_string())
                .unwrap_or_default()
        };
        let marker = |name: &str| -> Option<String> {
            index
                .get(name)
                .and_then(|idx| row.get(idx))
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let price = marker(columns::PRICE)
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(0.0);
        Self {
            name: field(columns::NAME),
            edition: field(columns::EDITION),
            edition_code: field(columns::EDITION_CODE),
            collector_number: field(columns::COLLECTOR_NUMBER),
            condition: field(columns::CONDITION),
            language: field(columns::LANGUAGE),
            quantity: field(columns::QUANTITY),
            foil: marker(columns::FOIL),
            tag: marker(columns::TAG),
            color: marker(columns::COLOR),
            price,
        }
    }

    /// Derived extras flags for this record.
    pub fn extras(&self) -> Extras {
        Extras::classify(
            self.foil.as_deref(),
            self.tag.as_deref(),
            &self.collector_number,
        )
    }
}
