//! Matching pipeline orchestrator.
//!
//! `MatchEngine` evaluates one (sample, volcano) pair at a time; a
//! sample's full candidate set must be scored before the score gap — and
//! therefore the confidence verdict — can be computed. `BulkMatcher`
//! parallelizes over samples; every evaluation is a pure function of its
//! inputs, so no coordination is needed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use tephra_core::config::EngineConfig;
use tephra_core::errors::{EvidenceError, MatchError};
use tephra_core::traits::{Cancellable, DistanceProvider, HaversineDistance, LiteratureSource};
use tephra_core::types::{LiteratureEvidence, SampleEvidence, VolcanoEvidence};

use crate::aggregate::{aggregate, DimensionSet};
use crate::confidence::{classify, ConfidenceLevel, QualityMetrics, RuleContext};
use crate::normalize::{normalize_rock, normalize_rock_list, normalize_tectonic, MatchTables};
use crate::score::{score_petrology, score_spatial, score_tectonic, score_temporal};
use crate::score::types::DimensionScore;

/// Per-pair scores: the four dimensions plus the weighted final.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchScores {
    pub dimensions: DimensionSet,
    pub final_score: f64,
}

/// Evidence attached to a match result beyond the dimension scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MatchEvidence {
    pub literature: Option<LiteratureEvidence>,
}

/// The complete result for one (sample, candidate-volcano) pair.
///
/// Produced fresh per pair — candidate identity is part of the key, so
/// results must never be cached keyed only by sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub scores: MatchScores,
    pub quality: QualityMetrics,
    pub evidence: MatchEvidence,
}

/// All candidate results for one sample, plus the winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMatch {
    /// One result per candidate, in input order.
    pub results: Vec<MatchResult>,
    /// Index of the top-scoring candidate, `None` when no candidates.
    pub winner: Option<usize>,
    /// Best final score minus second-best across the candidate set.
    pub gap: f64,
    /// Verdict for the winning candidate; `None` with zero candidates.
    pub confidence: ConfidenceLevel,
}

impl SampleMatch {
    /// The winning candidate's result, if any.
    pub fn winning_result(&self) -> Option<&MatchResult> {
        self.winner.map(|i| &self.results[i])
    }
}

/// The matching engine: config plus compiled tables and the distance
/// seam. Immutable after construction and safely shared across threads.
pub struct MatchEngine {
    config: EngineConfig,
    tables: Arc<MatchTables>,
    distance: Arc<dyn DistanceProvider>,
}

impl MatchEngine {
    /// Engine with builtin tables and haversine distances.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_tables(config, Arc::new(MatchTables::builtin()))
    }

    /// Engine with a custom table pack.
    pub fn with_tables(config: EngineConfig, tables: Arc<MatchTables>) -> Self {
        Self {
            config,
            tables,
            distance: Arc::new(HaversineDistance),
        }
    }

    /// Replace the distance provider (tests inject fixed distances).
    pub fn with_distance(mut self, distance: Arc<dyn DistanceProvider>) -> Self {
        self.distance = distance;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tables(&self) -> &MatchTables {
        &self.tables
    }

    /// Score the four dimensions for one pair.
    ///
    /// Missing fields mark dimensions absent (normal operation); invalid
    /// coordinates are a contract violation and fail fast.
    pub fn score_dimensions(
        &self,
        sample: &SampleEvidence,
        volcano: &VolcanoEvidence,
    ) -> Result<DimensionSet, MatchError> {
        self.validate_locations(sample, volcano)?;

        let distance_km = self.distance.distance_km(sample.location, volcano.location);
        let spatial = score_spatial(distance_km, self.config.spatial.effective_decay_km());

        let tectonic = match (&sample.tectonic_setting, &volcano.tectonic_setting) {
            (Some(s), Some(v)) => {
                let sn = normalize_tectonic(s, &self.tables);
                let vn = normalize_tectonic(v, &self.tables);
                score_tectonic(&sn, &vn)
            }
            _ => DimensionScore::Absent,
        };

        let petrological = match (&sample.rock_type, &volcano.rock_type) {
            (Some(s), Some(v)) => match normalize_rock(s, &self.tables) {
                Some(sample_rock) => {
                    let volcano_rocks = normalize_rock_list(v, &self.tables);
                    score_petrology(&sample_rock, &volcano_rocks, &self.tables)
                }
                None => DimensionScore::Absent,
            },
            _ => DimensionScore::Absent,
        };

        let temporal = score_temporal(sample, &self.config.temporal);

        Ok(DimensionSet {
            spatial,
            tectonic,
            petrological,
            temporal,
        })
    }

    /// Score one (sample, volcano) pair with an externally computed gap.
    ///
    /// The gap comes from the caller because it spans the sample's full
    /// candidate set; this method has no visibility into siblings.
    pub fn score_pair(
        &self,
        sample: &SampleEvidence,
        volcano: &VolcanoEvidence,
        gap: f64,
        literature: Option<LiteratureEvidence>,
    ) -> Result<MatchResult, MatchError> {
        let dimensions = self.score_dimensions(sample, volcano)?;
        Ok(self.finish_pair(dimensions, gap, literature))
    }

    /// Score a sample against its full candidate set, derive the gap,
    /// and classify every candidate.
    ///
    /// With zero candidates the surrounding pipeline owns the verdict:
    /// confidence `None`, no results.
    pub fn match_sample(
        &self,
        sample: &SampleEvidence,
        candidates: &[VolcanoEvidence],
        literature: &dyn LiteratureSource,
    ) -> Result<SampleMatch, MatchError> {
        if candidates.is_empty() {
            return Ok(SampleMatch {
                results: Vec::new(),
                winner: None,
                gap: 0.0,
                confidence: ConfidenceLevel::None,
            });
        }

        // Barrier: every candidate must be scored before the gap exists.
        let mut scored = Vec::with_capacity(candidates.len());
        for volcano in candidates {
            let dimensions = self.score_dimensions(sample, volcano)?;
            let agg = aggregate(&dimensions, &self.config.weights);
            scored.push((dimensions, agg));
        }

        let winner = scored
            .iter()
            .enumerate()
            .max_by(|(_, (_, a)), (_, (_, b))| {
                a.final_score
                    .partial_cmp(&b.final_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
            .unwrap_or(0);

        let best = scored[winner].1.final_score;
        let second_best = scored
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != winner)
            .map(|(_, (_, a))| a.final_score)
            .fold(0.0f64, f64::max);
        let gap = best - second_best;

        let results = scored
            .into_iter()
            .zip(candidates)
            .map(|((dimensions, _), volcano)| {
                let lit = literature.lookup(sample, volcano);
                self.finish_pair(dimensions, gap, lit)
            })
            .collect::<Vec<_>>();

        let confidence = results[winner].quality.confidence;

        tracing::debug!(
            candidates = candidates.len(),
            winner,
            best,
            gap,
            confidence = %confidence,
            "sample matched"
        );

        Ok(SampleMatch {
            results,
            winner: Some(winner),
            gap,
            confidence,
        })
    }

    /// Aggregate, classify, and assemble the result for one pair.
    fn finish_pair(
        &self,
        dimensions: DimensionSet,
        gap: f64,
        literature: Option<LiteratureEvidence>,
    ) -> MatchResult {
        let agg = aggregate(&dimensions, &self.config.weights);

        let ctx = RuleContext {
            final_score: agg.final_score,
            coverage: agg.coverage,
            gap,
            spatial: dimensions.spatial,
            spatial_uncertainty_threshold: self
                .config
                .spatial
                .effective_uncertainty_threshold(),
            literature: literature.as_ref(),
            config: &self.config.classifier,
        };
        let confidence = classify(&ctx);

        // Malformed literature records degrade to "no evidence".
        let literature = literature.filter(LiteratureEvidence::is_usable);

        MatchResult {
            scores: MatchScores {
                dimensions,
                final_score: agg.final_score,
            },
            quality: QualityMetrics {
                coverage: agg.coverage,
                uncertainty: agg.uncertainty,
                gap,
                confidence,
            },
            evidence: MatchEvidence { literature },
        }
    }

    fn validate_locations(
        &self,
        sample: &SampleEvidence,
        volcano: &VolcanoEvidence,
    ) -> Result<(), EvidenceError> {
        if !sample.location.is_valid() {
            return Err(EvidenceError::InvalidSampleLocation {
                lon: sample.location.lon,
                lat: sample.location.lat,
            });
        }
        if !volcano.location.is_valid() {
            return Err(EvidenceError::InvalidVolcanoLocation {
                lon: volcano.location.lon,
                lat: volcano.location.lat,
            });
        }
        Ok(())
    }
}

/// Bulk matcher: embarrassingly parallel over samples.
///
/// Cancellation is checked between sample units; mid-sample work is
/// never interrupted since no partial state is retained.
pub struct BulkMatcher {
    engine: Arc<MatchEngine>,
}

impl BulkMatcher {
    pub fn new(engine: Arc<MatchEngine>) -> Self {
        Self { engine }
    }

    /// Match every sample against its candidate set.
    ///
    /// `candidates_for` is the candidate-retrieval seam: for each sample
    /// it returns the bounded list of nearby volcanoes to score.
    pub fn run<F>(
        &self,
        samples: &[SampleEvidence],
        candidates_for: F,
        literature: &dyn LiteratureSource,
        cancel: &(dyn Cancellable + Sync),
    ) -> Result<Vec<SampleMatch>, MatchError>
    where
        F: Fn(&SampleEvidence) -> Vec<VolcanoEvidence> + Sync,
    {
        use rayon::prelude::*;

        tracing::info!(samples = samples.len(), "bulk matching run started");

        let results: Result<Vec<SampleMatch>, MatchError> = samples
            .par_iter()
            .map(|sample| {
                if cancel.is_cancelled() {
                    return Err(MatchError::Cancelled);
                }
                let candidates = candidates_for(sample);
                self.engine.match_sample(sample, &candidates, literature)
            })
            .collect();

        match &results {
            Ok(matches) => {
                let assigned = matches.iter().filter(|m| m.winner.is_some()).count();
                tracing::info!(
                    samples = samples.len(),
                    assigned,
                    unmatched = samples.len() - assigned,
                    "bulk matching run finished"
                );
            }
            Err(MatchError::Cancelled) => {
                tracing::warn!("bulk matching run cancelled");
            }
            Err(e) => {
                tracing::warn!(error = %e, "bulk matching run failed");
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tephra_core::traits::NoLiterature;
    use tephra_core::types::{EruptionDate, GeoPoint, SourceDb};

    fn engine() -> MatchEngine {
        MatchEngine::new(EngineConfig::default())
    }

    fn sample_at(lon: f64, lat: f64) -> SampleEvidence {
        SampleEvidence::at(GeoPoint::new(lon, lat), SourceDb::Georoc)
    }

    fn volcano_at(lon: f64, lat: f64) -> VolcanoEvidence {
        VolcanoEvidence::at(GeoPoint::new(lon, lat))
    }

    #[test]
    fn test_invalid_sample_location_fails_fast() {
        let sample = sample_at(f64::NAN, 0.0);
        let volcano = volcano_at(0.0, 0.0);
        let result = engine().score_dimensions(&sample, &volcano);
        assert!(matches!(
            result,
            Err(MatchError::Evidence(EvidenceError::InvalidSampleLocation { .. }))
        ));
    }

    #[test]
    fn test_minimal_pair_has_only_spatial() {
        let dims = engine()
            .score_dimensions(&sample_at(0.0, 0.0), &volcano_at(0.0, 0.0))
            .unwrap();
        assert!(dims.spatial.is_present());
        assert_eq!(dims.tectonic, DimensionScore::Absent);
        assert_eq!(dims.petrological, DimensionScore::Absent);
        assert_eq!(dims.temporal, DimensionScore::Absent);
    }

    #[test]
    fn test_zero_candidates_is_confidence_none() {
        let m = engine()
            .match_sample(&sample_at(0.0, 0.0), &[], &NoLiterature)
            .unwrap();
        assert_eq!(m.confidence, ConfidenceLevel::None);
        assert!(m.winner.is_none());
        assert!(m.results.is_empty());
    }

    #[test]
    fn test_winner_is_highest_final_score() {
        let mut sample = sample_at(-155.28, 19.42);
        sample.rock_type = Some("Basalt".to_string());

        let mut near = volcano_at(-155.29, 19.43);
        near.rock_type = Some("Basalt".to_string());
        let far = volcano_at(-156.5, 20.5);

        let m = engine()
            .match_sample(&sample, &[far, near], &NoLiterature)
            .unwrap();
        assert_eq!(m.winner, Some(1));
        assert!(m.gap > 0.0);
    }

    #[test]
    fn test_coverage_invariant_holds_per_result() {
        let mut sample = sample_at(-155.28, 19.42);
        sample.rock_type = Some("Basalt".to_string());
        sample.eruption_date = Some(EruptionDate::year_only(1984));

        let mut volcano = volcano_at(-155.29, 19.43);
        volcano.rock_type = Some("Basalt / Andesite".to_string());

        let m = engine()
            .match_sample(&sample, &[volcano], &NoLiterature)
            .unwrap();
        let r = m.winning_result().unwrap();
        let present = r.scores.dimensions.present_count();
        assert_eq!(r.quality.coverage, present as f64 / 4.0);
        assert_eq!(r.quality.uncertainty, 1.0 - r.quality.coverage);
    }

    #[test]
    fn test_single_candidate_gap_is_its_score() {
        let mut sample = sample_at(-155.28, 19.42);
        sample.rock_type = Some("Basalt".to_string());
        let mut volcano = volcano_at(-155.29, 19.43);
        volcano.rock_type = Some("Basalt".to_string());

        let m = engine()
            .match_sample(&sample, &[volcano], &NoLiterature)
            .unwrap();
        let best = m.winning_result().unwrap().scores.final_score;
        assert!((m.gap - best).abs() < 1e-12);
    }

    #[test]
    fn test_bulk_run_matches_all_samples() {
        let engine = Arc::new(engine());
        let matcher = BulkMatcher::new(engine);
        let samples: Vec<SampleEvidence> =
            (0..20).map(|i| sample_at(i as f64 * 0.1, 0.0)).collect();
        let cancel = tephra_core::traits::CancellationToken::new();

        let results = matcher
            .run(
                &samples,
                |s| vec![VolcanoEvidence::at(s.location)],
                &NoLiterature,
                &cancel,
            )
            .unwrap();
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|m| m.winner == Some(0)));
    }

    #[test]
    fn test_bulk_run_cancellation() {
        let engine = Arc::new(engine());
        let matcher = BulkMatcher::new(engine);
        let samples: Vec<SampleEvidence> =
            (0..8).map(|i| sample_at(i as f64 * 0.1, 0.0)).collect();
        let cancel = tephra_core::traits::CancellationToken::new();
        cancel.cancel();

        let result = matcher.run(&samples, |_| Vec::new(), &NoLiterature, &cancel);
        assert!(matches!(result, Err(MatchError::Cancelled)));
    }
}
