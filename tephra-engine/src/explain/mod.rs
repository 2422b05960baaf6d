//! Human-readable explanations for match results.
//!
//! Pure formatting over an already-computed `MatchResult`: nothing here
//! re-derives a score, so an explanation can never disagree with the
//! numbers it describes.

use serde::{Deserialize, Serialize};
use std::fmt;

use tephra_core::config::EngineConfig;

use crate::confidence::ConfidenceLevel;
use crate::pipeline::MatchResult;
use crate::score::types::Dimension;

/// Which part of the evaluation a statement describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementCategory {
    Spatial,
    Tectonic,
    Petrological,
    Temporal,
    Literature,
    Quality,
}

impl StatementCategory {
    fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Spatial => Self::Spatial,
            Dimension::Tectonic => Self::Tectonic,
            Dimension::Petrological => Self::Petrological,
            Dimension::Temporal => Self::Temporal,
        }
    }
}

/// One tagged, human-readable statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub category: StatementCategory,
    pub text: String,
}

/// Structured caveats a consumer can filter on without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningFlag {
    /// Too few dimensions had evidence to trust the score.
    LowCoverage,
    /// The runner-up candidate scored nearly as high.
    AmbiguousMatch,
    /// The nearest volcano is far enough that attribution is doubtful.
    HighSpatialUncertainty,
}

/// The full explanation for one (sample, volcano) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationReport {
    pub confidence: ConfidenceLevel,
    pub statements: Vec<Statement>,
    pub warnings: Vec<WarningFlag>,
}

impl fmt::Display for ExplanationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "confidence: {}", self.confidence)?;
        for statement in &self.statements {
            writeln!(f, "  {}", statement.text)?;
        }
        for warning in &self.warnings {
            writeln!(f, "  warning: {warning:?}")?;
        }
        Ok(())
    }
}

/// Build the explanation for one result.
///
/// Present dimensions each get a statement; absent ones are summarized
/// in a single coverage line. Warning thresholds mirror the classifier's
/// configured thresholds so the text never contradicts the verdict.
pub fn explain(result: &MatchResult, config: &EngineConfig) -> ExplanationReport {
    let mut statements = Vec::new();

    for (dimension, score) in result.scores.dimensions.iter() {
        if let Some(value) = score.value() {
            statements.push(Statement {
                category: StatementCategory::for_dimension(dimension),
                text: format!(
                    "{} agreement scored {:.2} ({})",
                    dimension,
                    value,
                    strength_word(value)
                ),
            });
        }
    }

    if let Some(lit) = &result.evidence.literature {
        statements.push(Statement {
            category: StatementCategory::Literature,
            text: format!(
                "literature confirms this pairing (confidence {:.2}, {})",
                lit.confidence, lit.source
            ),
        });
    }

    let q = &result.quality;
    statements.push(Statement {
        category: StatementCategory::Quality,
        text: format!(
            "final score {:.2} from {} of 4 dimensions (coverage {:.0}%)",
            result.scores.final_score,
            result.scores.dimensions.present_count(),
            q.coverage * 100.0
        ),
    });

    let mut warnings = Vec::new();
    if q.coverage < config.classifier.effective_low_coverage() {
        warnings.push(WarningFlag::LowCoverage);
    }
    if q.gap < config.classifier.effective_ambiguity_gap() {
        warnings.push(WarningFlag::AmbiguousMatch);
    }
    let spatially_uncertain = match result.scores.dimensions.spatial.value() {
        Some(v) => v < config.spatial.effective_uncertainty_threshold(),
        None => true,
    };
    if spatially_uncertain {
        warnings.push(WarningFlag::HighSpatialUncertainty);
    }

    ExplanationReport {
        confidence: q.confidence,
        statements,
        warnings,
    }
}

fn strength_word(value: f64) -> &'static str {
    if value >= 0.8 {
        "strong"
    } else if value >= 0.5 {
        "moderate"
    } else if value > 0.0 {
        "weak"
    } else {
        "incompatible"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::DimensionSet;
    use crate::confidence::QualityMetrics;
    use crate::pipeline::{MatchEvidence, MatchScores};
    use crate::score::types::DimensionScore;
    use tephra_core::types::LiteratureEvidence;

    fn result(
        spatial: DimensionScore,
        gap: f64,
        coverage: f64,
        literature: Option<LiteratureEvidence>,
    ) -> MatchResult {
        let dimensions = DimensionSet {
            spatial,
            tectonic: DimensionScore::Present(0.7),
            petrological: DimensionScore::Absent,
            temporal: DimensionScore::Absent,
        };
        MatchResult {
            scores: MatchScores {
                dimensions,
                final_score: 0.75,
            },
            quality: QualityMetrics {
                coverage,
                uncertainty: 1.0 - coverage,
                gap,
                confidence: ConfidenceLevel::Medium,
            },
            evidence: MatchEvidence { literature },
        }
    }

    #[test]
    fn test_statements_cover_present_dimensions_only() {
        let report = explain(
            &result(DimensionScore::Present(0.9), 0.3, 0.75, None),
            &EngineConfig::default(),
        );
        let dims: Vec<_> = report
            .statements
            .iter()
            .filter(|s| {
                matches!(
                    s.category,
                    StatementCategory::Spatial
                        | StatementCategory::Tectonic
                        | StatementCategory::Petrological
                        | StatementCategory::Temporal
                )
            })
            .collect();
        assert_eq!(dims.len(), 2);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_quality_summary_is_always_present() {
        let report = explain(
            &result(DimensionScore::Absent, 0.3, 0.25, None),
            &EngineConfig::default(),
        );
        assert!(report
            .statements
            .iter()
            .any(|s| s.category == StatementCategory::Quality));
    }

    #[test]
    fn test_warning_flags() {
        let report = explain(
            &result(DimensionScore::Present(0.1), 0.05, 0.25, None),
            &EngineConfig::default(),
        );
        assert!(report.warnings.contains(&WarningFlag::LowCoverage));
        assert!(report.warnings.contains(&WarningFlag::AmbiguousMatch));
        assert!(report
            .warnings
            .contains(&WarningFlag::HighSpatialUncertainty));
    }

    #[test]
    fn test_literature_statement_included_when_present() {
        let lit = LiteratureEvidence {
            matched: true,
            confidence: 0.85,
            source: "doi:10.1000/tephra".to_string(),
        };
        let report = explain(
            &result(DimensionScore::Present(0.9), 0.3, 0.5, Some(lit)),
            &EngineConfig::default(),
        );
        let lit_statement = report
            .statements
            .iter()
            .find(|s| s.category == StatementCategory::Literature)
            .unwrap();
        assert!(lit_statement.text.contains("doi:10.1000/tephra"));
    }

    #[test]
    fn test_display_renders_every_line() {
        let report = explain(
            &result(DimensionScore::Present(0.9), 0.05, 0.5, None),
            &EngineConfig::default(),
        );
        let rendered = report.to_string();
        assert!(rendered.starts_with("confidence: medium"));
        assert!(rendered.contains("warning: AmbiguousMatch"));
    }
}
