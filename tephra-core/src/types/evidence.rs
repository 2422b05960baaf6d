//! Evidence records consumed by the matching engine.
//!
//! Produced by the ingestion collaborators and never mutated here.
//! Absent fields are `None`, never empty strings or zeros — a dimension
//! with no data must be distinguishable from one that scored zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Both coordinates are finite and within valid ranges.
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

/// A dated eruption. Year is required; month and day refine precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EruptionDate {
    pub year: i32,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl EruptionDate {
    pub fn year_only(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }
}

/// Free-text geological age as reported by the source database.
///
/// `era_text` is the era description ("Holocene", "Pleistocene", ...);
/// `era_prefix` is the optional qualifier ("Early", "Late", "Lower",
/// "Upper") kept separately as a precision signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeologicalAgeText {
    pub era_text: String,
    pub era_prefix: Option<String>,
}

impl GeologicalAgeText {
    pub fn new(era_text: impl Into<String>, era_prefix: Option<String>) -> Self {
        Self {
            era_text: era_text.into(),
            era_prefix,
        }
    }
}

/// Source database a sample was ingested from.
///
/// Affects temporal precision floors: GVP eruption records carry stricter
/// dating rigor than the aggregated geochemical databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceDb {
    /// Smithsonian Global Volcanism Program.
    Gvp,
    /// GEOROC geochemical compilation.
    Georoc,
    /// Any other source.
    Other,
}

impl SourceDb {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gvp => "gvp",
            Self::Georoc => "georoc",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SourceDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A geochemical rock sample as seen by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleEvidence {
    pub location: GeoPoint,
    pub rock_type: Option<String>,
    pub tectonic_setting: Option<String>,
    pub geological_age: Option<GeologicalAgeText>,
    pub eruption_date: Option<EruptionDate>,
    pub source_db: SourceDb,
}

impl SampleEvidence {
    /// Minimal sample: location only, everything else absent.
    pub fn at(location: GeoPoint, source_db: SourceDb) -> Self {
        Self {
            location,
            rock_type: None,
            tectonic_setting: None,
            geological_age: None,
            eruption_date: None,
            source_db,
        }
    }
}

/// A candidate volcano as seen by the engine.
///
/// `rock_type` may list several alternatives separated by `/` as reported
/// by the source; normalization splits and canonicalizes each one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolcanoEvidence {
    pub location: GeoPoint,
    pub rock_type: Option<String>,
    pub tectonic_setting: Option<String>,
}

impl VolcanoEvidence {
    pub fn at(location: GeoPoint) -> Self {
        Self {
            location,
            rock_type: None,
            tectonic_setting: None,
        }
    }
}

/// Literature evidence for a (sample, volcano) association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteratureEvidence {
    pub matched: bool,
    pub confidence: f64,
    pub source: String,
}

impl LiteratureEvidence {
    /// A record is usable only when it is well-formed: matched with a
    /// finite confidence and a non-empty source. Malformed records are
    /// treated as "no literature evidence", never as an error.
    pub fn is_usable(&self) -> bool {
        self.matched && self.confidence.is_finite() && !self.source.is_empty()
    }
}
