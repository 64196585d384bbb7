//! Static code tables with an explicit default-resolution policy.
//!
//! Each table is an immutable list of (source value, target code) pairs plus
//! a [`Fallback`] rule stating what an unmapped value resolves to. Unmapped
//! values are expected input, not errors.

/// What an unmapped value resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Unknown values map to the empty string.
    Empty,
    /// Unknown values pass through unchanged.
    Identity,
}

/// An immutable key/value table with a fixed fallback rule.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    entries: &'static [(&'static str, &'static str)],
    fallback: Fallback,
}

impl CodeTable {
    /// Create a table from a static entry list.
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        fallback: Fallback,
    ) -> Self {
        Self { entries, fallback }
    }

    /// Resolve a value, applying the fallback rule on a miss.
    pub fn resolve<'a>(&self, value: &'a str) -> &'a str {
        for (key, code) in self.entries {
            if *key == value {
                return code;
            }
        }
        match self.fallback {
            Fallback::Empty => "",
            Fallback::Identity => value,
        }
    }

    /// Whether the value has an explicit entry.
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == value)
    }
}

/// Condition name -> two-letter grade code.
pub const CONDITION_CODES: CodeTable = CodeTable::new(
    &[
        ("Near Mint", "NM"),
        ("Slightly Played", "SP"),
        ("Moderately Played", "MP"),
        ("Heavily Played", "HP"),
    ],
    Fallback::Empty,
);

/// Language name -> LigaMagic language code.
pub const LANGUAGE_CODES: CodeTable = CodeTable::new(
    &[
        ("Portuguese", "BR"),
        ("English", "EN"),
        ("Japanese", "JP"),
        ("Spanish", "ES"),
        ("German", "DE"),
        ("French", "FR"),
        ("Italian", "IT"),
        ("Korean", "KO"),
        ("Russian", "RU"),
        ("Traditional Chinese", "TW"),
    ],
    Fallback::Empty,
);

/// Map a condition name to its grade code, empty when unknown.
pub fn condition_code(condition: &str) -> &str {
    CONDITION_CODES.resolve(condition)
}

/// Map a language name to its language code, empty when unknown.
pub fn language_code(language: &str) -> &str {
    LANGUAGE_CODES.resolve(language)
}
