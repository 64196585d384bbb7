//! Derived "extras" attributes of a card copy.

use serde::Serialize;

/// Tag substring marking pre-release printings.
pub const PRE_RELEASE_TAG: &str = "Pre Release";

/// Tag substring marking promo printings.
pub const PROMO_TAG: &str = "Promo";

/// Collector-number suffix marking promo printings.
pub const PROMO_SUFFIX: char = 'p';

/// Boolean attributes derived from the foil marker, tag text, and collector
/// number. The flags are not mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Extras {
    pub foil: bool,
    pub pre_release: bool,
    pub promo: bool,
}

impl Extras {
    /// Classify one record's raw marker fields.
    ///
    /// `foil` counts presence, not value. Either promo condition alone is
    /// sufficient: a "Promo" tag or a collector number ending in `p`.
    pub fn classify(foil: Option<&str>, tag: Option<&str>, collector_number: &str) -> Self {
        let promo_tag = tag.is_some_and(|tag| tag.contains(PROMO_TAG));
        Self {
            foil: foil.is_some(),
            pre_release: tag.is_some_and(|tag| tag.contains(PRE_RELEASE_TAG)),
            promo: promo_tag || collector_number.ends_with(PROMO_SUFFIX),
        }
    }

    /// Whether any flag is set.
    pub fn any(self) -> bool {
        self.foil || self.pre_release || self.promo
    }

    /// Render a flag as a spreadsheet bit column value.
    pub fn bit(flag: bool) -> &'static str {
        if flag { "1" } else { "0" }
    }
}
