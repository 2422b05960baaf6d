//! The ordered rule table.
//!
//! Each rule is `(id, blocking, predicate)` evaluated in sequence; the
//! first rule that returns a verdict decides. Blocking verdicts cannot
//! be raised by literature escalation.

use tephra_core::config::ClassifierConfig;
use tephra_core::types::LiteratureEvidence;

use crate::score::types::DimensionScore;

use super::types::ConfidenceLevel;

/// Everything a rule predicate may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub final_score: f64,
    pub coverage: f64,
    pub gap: f64,
    pub spatial: DimensionScore,
    /// Spatial score below which attribution is unreliable
    /// (`spatial.uncertainty_threshold` in config).
    pub spatial_uncertainty_threshold: f64,
    pub literature: Option<&'a LiteratureEvidence>,
    pub config: &'a ClassifierConfig,
}

impl RuleContext<'_> {
    fn has_usable_literature(&self) -> bool {
        self.literature.is_some_and(LiteratureEvidence::is_usable)
    }
}

/// One stage of the classifier.
pub struct ClassifierRule {
    pub id: &'static str,
    /// A blocking verdict is final: literature cannot raise it.
    pub blocking: bool,
    pub eval: fn(&RuleContext) -> Option<ConfidenceLevel>,
}

/// Stage 1: data sufficiency. Too little evidence caps at Low no matter
/// how high the raw score is.
fn data_sufficiency(ctx: &RuleContext) -> Option<ConfidenceLevel> {
    if ctx.coverage < ctx.config.effective_coverage_floor() {
        return Some(ConfidenceLevel::Low);
    }
    None
}

/// Stage 2a: ambiguity. A runner-up within the gap threshold means the
/// winner is not trustworthy — unless literature confirms the pair, in
/// which case this stage abstains and stage 4 may escalate.
fn ambiguity(ctx: &RuleContext) -> Option<ConfidenceLevel> {
    if ctx.gap < ctx.config.effective_ambiguity_gap() && !ctx.has_usable_literature() {
        return Some(ConfidenceLevel::Low);
    }
    None
}

/// Stage 2b: spatial uncertainty. A distant nearest volcano combined
/// with thin coverage is not attributable.
fn spatial_uncertainty(ctx: &RuleContext) -> Option<ConfidenceLevel> {
    let spatially_uncertain = match ctx.spatial.value() {
        Some(v) => v < ctx.spatial_uncertainty_threshold,
        None => true,
    };
    if spatially_uncertain && ctx.coverage < ctx.config.effective_low_coverage() {
        return Some(ConfidenceLevel::Low);
    }
    None
}

/// Stage 3: geological strength. Always decides when reached.
fn geological_strength(ctx: &RuleContext) -> Option<ConfidenceLevel> {
    let c = ctx.config;
    if ctx.final_score >= c.effective_high_score()
        && ctx.coverage >= c.effective_high_coverage()
        && ctx.gap >= c.effective_high_gap()
    {
        return Some(ConfidenceLevel::High);
    }
    if ctx.final_score >= c.effective_medium_score()
        && ctx.coverage >= c.effective_medium_coverage()
        && ctx.gap >= c.effective_medium_gap()
    {
        return Some(ConfidenceLevel::Medium);
    }
    Some(ConfidenceLevel::Low)
}

/// The ordered rule table. Stage 4 (literature escalation) is applied by
/// `classify` after the table decides, because it modifies a verdict
/// rather than producing one.
pub const RULES: &[ClassifierRule] = &[
    ClassifierRule {
        id: "data-sufficiency",
        blocking: true,
        eval: data_sufficiency,
    },
    ClassifierRule {
        id: "ambiguity",
        blocking: true,
        eval: ambiguity,
    },
    ClassifierRule {
        id: "spatial-uncertainty",
        blocking: true,
        eval: spatial_uncertainty,
    },
    ClassifierRule {
        id: "geological-strength",
        blocking: false,
        eval: geological_strength,
    },
];

/// Run the ordered rule table and apply literature escalation.
///
/// Literature raises the verdict by exactly one level, never past High,
/// and never when a blocking stage decided.
pub fn classify(ctx: &RuleContext) -> ConfidenceLevel {
    let mut verdict = ConfidenceLevel::Low;
    let mut blocked = false;

    for rule in RULES {
        if let Some(v) = (rule.eval)(ctx) {
            verdict = v;
            blocked = rule.blocking;
            break;
        }
    }

    if !blocked && ctx.has_usable_literature() {
        verdict = verdict.raised_one();
    }

    verdict
}
