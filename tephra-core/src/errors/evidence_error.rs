//! Evidence contract violations.
//!
//! Missing optional fields are normal operation and never surface here;
//! these errors mark upstream data-integrity bugs that must fail fast.

use super::error_code::{self, TephraErrorCode};

/// Contract violations in evidence records.
#[derive(Debug, thiserror::Error)]
pub enum EvidenceError {
    #[error("Sample location is not a valid coordinate: lon={lon}, lat={lat}")]
    InvalidSampleLocation { lon: f64, lat: f64 },

    #[error("Volcano location is not a valid coordinate: lon={lon}, lat={lat}")]
    InvalidVolcanoLocation { lon: f64, lat: f64 },
}

impl TephraErrorCode for EvidenceError {
    fn error_code(&self) -> &'static str {
        error_code::EVIDENCE_ERROR
    }
}
