//! Literature evidence lookup seam.
//!
//! In standalone mode no literature is available. An ingestion-adjacent
//! collaborator implements the trait over its citation index; the engine
//! never fetches anything itself.

use crate::types::{LiteratureEvidence, SampleEvidence, VolcanoEvidence};

/// Provider of literature evidence for a (sample, volcano) pair.
///
/// Default implementation returns no evidence.
pub trait LiteratureSource: Send + Sync {
    /// Look up literature evidence for a pair. `None` means no record.
    fn lookup(
        &self,
        sample: &SampleEvidence,
        volcano: &VolcanoEvidence,
    ) -> Option<LiteratureEvidence> {
        let _ = (sample, volcano);
        None
    }
}

/// No-op implementation for standalone mode — never returns evidence.
pub struct NoLiterature;

impl LiteratureSource for NoLiterature {}
