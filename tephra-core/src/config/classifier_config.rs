//! Confidence classifier thresholds.
//!
//! Calibrated against the canonical balanced weight set in
//! `WeightConfig`; re-tuning weights requires re-validating these.

use serde::{Deserialize, Serialize};

/// Thresholds for the ordered blocking rule stages.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Stage 1: coverage below this blocks at Low. Default: 0.40.
    pub coverage_floor: Option<f64>,
    /// Stage 2: score gap below this blocks at Low. Default: 0.10.
    pub ambiguity_gap: Option<f64>,
    /// Stage 2: coverage below this counts as "low" for the spatial
    /// uncertainty block. Coverage is quantized to quarters and stage 1
    /// already blocks below 0.40, so this must sit above 0.50 for the
    /// rule to be reachable. Default: 0.60.
    pub low_coverage: Option<f64>,
    /// Stage 3 High: minimum final score. Default: 0.80.
    pub high_score: Option<f64>,
    /// Stage 3 High: minimum coverage. Default: 0.70.
    pub high_coverage: Option<f64>,
    /// Stage 3 High: minimum gap. Default: 0.30.
    pub high_gap: Option<f64>,
    /// Stage 3 Medium: minimum final score. Default: 0.50.
    pub medium_score: Option<f64>,
    /// Stage 3 Medium: minimum coverage. Default: 0.50.
    pub medium_coverage: Option<f64>,
    /// Stage 3 Medium: minimum gap. Default: 0.20.
    pub medium_gap: Option<f64>,
}

impl ClassifierConfig {
    pub fn effective_coverage_floor(&self) -> f64 {
        self.coverage_floor.unwrap_or(0.40)
    }

    pub fn effective_ambiguity_gap(&self) -> f64 {
        self.ambiguity_gap.unwrap_or(0.10)
    }

    pub fn effective_low_coverage(&self) -> f64 {
        self.low_coverage.unwrap_or(0.60)
    }

    pub fn effective_high_score(&self) -> f64 {
        self.high_score.unwrap_or(0.80)
    }

    pub fn effective_high_coverage(&self) -> f64 {
        self.high_coverage.unwrap_or(0.70)
    }

    pub fn effective_high_gap(&self) -> f64 {
        self.high_gap.unwrap_or(0.30)
    }

    pub fn effective_medium_score(&self) -> f64 {
        self.medium_score.unwrap_or(0.50)
    }

    pub fn effective_medium_coverage(&self) -> f64 {
        self.medium_coverage.unwrap_or(0.50)
    }

    pub fn effective_medium_gap(&self) -> f64 {
        self.medium_gap.unwrap_or(0.20)
    }
}
