//! Weighted aggregation of dimension scores.
//!
//! Weights are renormalized over only the dimensions actually present,
//! never diluted by absent ones. Coverage is always recomputed from the
//! dimension set, never stored independently of it.

use serde::{Deserialize, Serialize};
use std::fmt;

use tephra_core::config::WeightConfig;

use crate::score::types::{Dimension, DimensionScore};

/// The per-dimension score set for one (sample, volcano) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionSet {
    pub spatial: DimensionScore,
    pub tectonic: DimensionScore,
    pub petrological: DimensionScore,
    pub temporal: DimensionScore,
}

impl DimensionSet {
    pub fn get(&self, dimension: Dimension) -> DimensionScore {
        match dimension {
            Dimension::Spatial => self.spatial,
            Dimension::Tectonic => self.tectonic,
            Dimension::Petrological => self.petrological,
            Dimension::Temporal => self.temporal,
        }
    }

    /// Dimensions in canonical order with their scores.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, DimensionScore)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    pub fn present_count(&self) -> usize {
        self.iter().filter(|(_, s)| s.is_present()).count()
    }
}

/// Aggregated result: final score plus data-coverage metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Weighted mean over present dimensions, in [0,1].
    pub final_score: f64,
    /// Fraction of the four dimensions with evidence.
    pub coverage: f64,
    /// `1 − coverage`.
    pub uncertainty: f64,
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Aggregate {{ final={:.3}, coverage={:.2}, uncertainty={:.2} }}",
            self.final_score, self.coverage, self.uncertainty
        )
    }
}

/// Combine whichever dimension scores are present into a weighted final
/// score. With no present dimensions the final score is 0.0 and coverage
/// 0 — the classifier's data-sufficiency stage blocks such pairs.
pub fn aggregate(dims: &DimensionSet, weights: &WeightConfig) -> Aggregate {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for (dimension, score) in dims.iter() {
        if let Some(value) = score.value() {
            let w = weight_for(dimension, weights);
            weighted_sum += value * w;
            weight_sum += w;
        }
    }

    let final_score = if weight_sum > 0.0 {
        (weighted_sum / weight_sum).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let coverage = dims.present_count() as f64 / Dimension::ALL.len() as f64;

    Aggregate {
        final_score,
        coverage,
        uncertainty: 1.0 - coverage,
    }
}

fn weight_for(dimension: Dimension, weights: &WeightConfig) -> f64 {
    match dimension {
        Dimension::Spatial => weights.effective_spatial(),
        Dimension::Tectonic => weights.effective_tectonic(),
        Dimension::Petrological => weights.effective_petrological(),
        Dimension::Temporal => weights.effective_temporal(),
    }
}
