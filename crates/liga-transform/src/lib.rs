//! Row projectors for the three LigaMagic output variants, plus the
//! extras-combination partitioner used by the text variant.
//!
//! Every projector is a pure function from a bound [`liga_model::CardRecord`]
//! to one output representation; the projectors share the model's code
//! tables and extras classifier and hold no state of their own.

pub mod buckets;
pub mod current;
pub mod legacy;
pub mod text;

pub use buckets::{AllExtrasPolicy, Bucket, Partition, partition};
pub use current::{CURRENT_HEADERS, project_current};
pub use legacy::{LEGACY_HEADERS, extras_string, project_legacy};
pub use text::format_line;
