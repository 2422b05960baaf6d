//! Core types for confidence classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hierarchical confidence verdict for a (sample, volcano) pair.
///
/// `None` is reserved for samples with zero candidate volcanoes; the
/// classifier itself only ever produces Low/Medium/High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    None,
}

impl ConfidenceLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::None => "none",
        }
    }

    /// Raise by exactly one level. High stays High; None is terminal.
    pub fn raised_one(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::High,
            Self::None => Self::None,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data-quality metrics attached to every match result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Fraction of the four dimensions with evidence.
    pub coverage: f64,
    /// `1 − coverage`.
    pub uncertainty: f64,
    /// Best-candidate final score minus second-best, for this sample.
    pub gap: f64,
    /// Classified confidence verdict.
    pub confidence: ConfidenceLevel,
}
