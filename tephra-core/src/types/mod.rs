//! Core data types shared across the workspace.

pub mod collections;
pub mod evidence;

pub use evidence::{
    EruptionDate, GeoPoint, GeologicalAgeText, LiteratureEvidence, SampleEvidence, SourceDb,
    VolcanoEvidence,
};
