//! Normalization of free-text evidence fields into controlled vocabularies.
//!
//! All classification here is table-driven (`MatchTables`); the normalizers
//! carry no scoring logic. Unrecognized or sentinel input normalizes to
//! "unknown"/absent, which is a valid outcome, never an error.

pub mod age;
pub mod rock;
pub mod tables;
pub mod tectonic;
pub mod types;

pub use age::normalize_age;
pub use rock::{normalize_rock, normalize_rock_list};
pub use tables::MatchTables;
pub use tectonic::normalize_tectonic;
pub use types::{AgeClass, AgePrefix, CrustType, NormalizedAge, NormalizedTectonic, Regime};

/// Sentinel strings that mean "no data" in any free-text field.
/// Compared after uppercasing and trimming.
pub(crate) const SENTINELS: &[&str] = &["", "NO DATA", "UNKNOWN", "NAN", "NONE", "N/A"];

pub(crate) fn is_sentinel(text: &str) -> bool {
    SENTINELS.contains(&text)
}
