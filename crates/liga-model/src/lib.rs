//! Data model for the LigaMagic inventory converter.
//!
//! Source records, the derived extras classifier, and the static code
//! tables (condition, language, edition) shared by every output variant.

pub mod edition;
pub mod extras;
pub mod lookup;
pub mod record;

pub use edition::{Color, EditionMap, GuildRule, SPREADSHEET_EDITIONS, TEXT_EDITIONS};
pub use extras::{Extras, PRE_RELEASE_TAG, PROMO_SUFFIX, PROMO_TAG};
pub use lookup::{CodeTable, Fallback, condition_code, language_code};
pub use record::{CardRecord, ColumnIndex, columns};
