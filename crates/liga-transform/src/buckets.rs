//! Extras-combination bucketing for the text variant.
//!
//! Each record lands in at most one bucket; one output file is written per
//! non-empty bucket. Two of the eight flag combinations have no bucket of
//! their own: promo + pre-release without foil is always excluded, and the
//! all-three combination is excluded under the default policy but can be
//! routed to a dedicated bucket. Excluded records are counted, never
//! silently lost.

use std::collections::BTreeMap;

use liga_model::Extras;

/// Policy for records with all three extras flags set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllExtrasPolicy {
    /// Exclude the record from every bucket; the caller reports the count.
    #[default]
    Drop,
    /// Route the record to [`Bucket::FoilPromoPreRelease`].
    Split,
}

/// The disjoint extras combinations, one output file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bucket {
    OnlyFoil,
    OnlyPreRelease,
    OnlyPromo,
    FoilAndPromo,
    FoilAndPreRelease,
    NoExtras,
    /// All three flags; produced only under [`AllExtrasPolicy::Split`].
    FoilPromoPreRelease,
}

impl Bucket {
    /// File-name prefix for this bucket.
    pub fn prefix(self) -> &'static str {
        match self {
            Bucket::OnlyFoil => "only_foil",
            Bucket::OnlyPreRelease => "only_pre_release",
            Bucket::OnlyPromo => "only_promo",
            Bucket::FoilAndPromo => "foil_and_promo",
            Bucket::FoilAndPreRelease => "foil_and_pre_release",
            Bucket::NoExtras => "no_extras",
            Bucket::FoilPromoPreRelease => "foil_promo_pre_release",
        }
    }

    /// Classify one extras combination. `None` means the record is excluded
    /// under the given policy.
    pub fn for_extras(extras: Extras, policy: AllExtrasPolicy) -> Option<Self> {
        match (extras.foil, extras.promo, extras.pre_release) {
            (true, false, false) => Some(Bucket::OnlyFoil),
            (false, false, true) => Some(Bucket::OnlyPreRelease),
            (false, true, false) => Some(Bucket::OnlyPromo),
            (true, true, false) => Some(Bucket::FoilAndPromo),
            (true, false, true) => Some(Bucket::FoilAndPreRelease),
            (false, false, false) => Some(Bucket::NoExtras),
            (false, true, true) => None,
            (true, true, true) => match policy {
                AllExtrasPolicy::Drop => None,
                AllExtrasPolicy::Split => Some(Bucket::FoilPromoPreRelease),
            },
        }
    }
}

/// Result of partitioning one file's records.
#[derive(Debug, Default)]
pub struct Partition {
    /// Input row indices per bucket, input order preserved within a bucket.
    pub buckets: BTreeMap<Bucket, Vec<usize>>,
    /// Records that matched no bucket.
    pub dropped: usize,
}

impl Partition {
    /// Total records placed into buckets.
    pub fn placed(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Partition a sequence of extras combinations into buckets.
pub fn partition<I>(extras: I, policy: AllExtrasPolicy) -> Partition
where
    I: IntoIterator<Item = Extras>,
{
    let mut result = Partition::default();
    for (idx, extras) in extras.into_iter().enumerate() {
        match Bucket::for_extras(extras, policy) {
            Some(bucket) => result.buckets.entry(bucket).or_default().push(idx),
            None => result.dropped += 1,
        }
    }
    result
}
