//! Edition code mapping per output variant.
//!
//! Resolution order for every variant:
//! 1. Promo-edition pattern (`F` followed only by digits) -> fixed token.
//! 2. Guild rules, in declaration order (text variant only).
//! 3. Static table lookup.
//! 4. Identity passthrough for anything unmapped.

use crate::lookup::{CodeTable, Fallback};

/// The five card colors used for guild disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// The color name as it appears in the source export's `Color` field.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }
}

/// A guild disambiguation rule: one shared edition code plus the unordered
/// color pair identifying a single guild sub-edition.
#[derive(Debug, Clone, Copy)]
pub struct GuildRule {
    /// The ambiguous edition code covering several guilds.
    pub code: &'static str,
    /// Both colors must appear in the record's color field.
    pub colors: (Color, Color),
    /// The disambiguated edition code.
    pub resolved: &'static str,
}

impl GuildRule {
    fn matches(&self, code: &str, colors: &str) -> bool {
        self.code == code
            && colors.contains(self.colors.0.name())
            && colors.contains(self.colors.1.name())
    }
}

/// Guild sub-edition rules, evaluated in order. Each Guild Kit code covers
/// five two-color guilds told apart by the row's color pair.
const GUILD_RULES: &[GuildRule] = &[
    // Guilds of Ravnica kits
    GuildRule { code: "GK1", colors: (Color::Green, Color::White), resolved: "gk1s" }, // Selesnya
    GuildRule { code: "GK1", colors: (Color::Red, Color::White), resolved: "gk1b" },   // Boros
    GuildRule { code: "GK1", colors: (Color::Black, Color::Green), resolved: "gk1g" }, // Golgari
    GuildRule { code: "GK1", colors: (Color::Blue, Color::Red), resolved: "gk1i" },    // Izzet
    GuildRule { code: "GK1", colors: (Color::Blue, Color::Black), resolved: "gk1d" },  // Dimir
    // Ravnica Allegiance kits
    GuildRule { code: "GK2", colors: (Color::Green, Color::Blue), resolved: "gk2s" },  // Simic
    GuildRule { code: "GK2", colors: (Color::Black, Color::Red), resolved: "gk2r" },   // Rakdos
    GuildRule { code: "GK2", colors: (Color::White, Color::Black), resolved: "gk2o" }, // Orzhov
    GuildRule { code: "GK2", colors: (Color::Red, Color::Green), resolved: "gk2g" },   // Gruul
    GuildRule { code: "GK2", colors: (Color::White, Color::Blue), resolved: "gk2a" },  // Azorius
];

/// One output variant's edition mapper: dynamic rules layered over a static
/// table, with identity passthrough for anything unmapped.
#[derive(Debug, Clone, Copy)]
pub struct EditionMap {
    promo_token: &'static str,
    guild_rules: &'static [GuildRule],
    table: CodeTable,
}

impl EditionMap {
    /// Resolve an edition code. `colors` is the record's raw color field,
    /// consulted only by the guild rules.
    pub fn resolve<'a>(&self, code: &'a str, colors: Option<&str>) -> &'a str {
        if is_promo_edition(code) {
            return self.promo_token;
        }
        if let Some(colors) = colors {
            for rule in self.guild_rules {
                if rule.matches(code, colors) {
                    return rule.resolved;
                }
            }
        }
        self.table.resolve(code)
    }
}

/// Codes matching `F<digits>` are Friday Night Magic promo printings.
fn is_promo_edition(code: &str) -> bool {
    match code.strip_prefix('F') {
        Some(rest) => !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Spreadsheet variants (current and legacy) share the lowercase mapping.
pub const SPREADSHEET_EDITIONS: EditionMap = EditionMap {
    promo_token: "fnmp",
    guild_rules: &[],
    table: CodeTable::new(
        &[("BRR", "rfbro"), ("GK2", "gk2o"), ("PLG21", "pwelb")],
        Fallback::Identity,
    ),
};

/// Text variant: uppercase promo token plus guild disambiguation.
pub const TEXT_EDITIONS: EditionMap = EditionMap {
    promo_token: "FNMP",
    guild_rules: GUILD_RULES,
    table: CodeTable::new(
        &[
            ("BRR", "RFBRO"),
            ("PLG21", "PWELB"),
            ("PDOM", "DW1"),
            ("PW21", "PWP21"),
            ("PLST", "PLIST"),
        ],
        Fallback::Identity,
    ),
};
