//! Temporal dimension scorer.
//!
//! Two mutually exclusive evidence paths: a dated eruption (preferred)
//! or a categorical geological age. Textual ages are inherently
//! imprecise and are capped below decisiveness.

use tephra_core::config::TemporalConfig;
use tephra_core::types::{EruptionDate, SampleEvidence};

use crate::normalize::age::normalize_age;
use crate::normalize::types::{AgeClass, AgePrefix};

use super::types::DimensionScore;

/// Hard cap on categorical-age scores: textual era classes must never be
/// treated as fully decisive evidence.
const CATEGORICAL_CAP: f64 = 0.8;

/// Ceiling for categorical precision after prefix nudging.
const CATEGORICAL_PRECISION_CEILING: f64 = 0.95;

/// Score temporal compatibility for a sample.
///
/// Tries the dated-eruption path first; falls back to categorical age;
/// absent when neither has data.
pub fn score_temporal(sample: &SampleEvidence, config: &TemporalConfig) -> DimensionScore {
    if let Some(date) = &sample.eruption_date {
        return score_dated(date, sample, config);
    }
    if let Some(age) = &sample.geological_age {
        if let Some(normalized) = normalize_age(age) {
            return score_categorical(normalized.class, normalized.prefix, sample, config);
        }
    }
    DimensionScore::Absent
}

/// Dated-eruption path: Holocene-window base score with a precision
/// modifier. Dated evidence starts at high precision; month and day
/// refine it further.
fn score_dated(
    date: &EruptionDate,
    sample: &SampleEvidence,
    config: &TemporalConfig,
) -> DimensionScore {
    let reference_year = config.effective_reference_year();
    let years_bp = i64::from(reference_year) - i64::from(date.year);

    let window = config.effective_holocene_window_years();
    let base = if (0..=window).contains(&years_bp) {
        1.0
    } else {
        0.0
    };

    let floor = config.precision_floor(sample.source_db);
    let mut precision = 0.95;
    if date.month.is_some() {
        precision += 0.02;
    }
    if date.day.is_some() {
        precision += 0.03;
    }
    // A future eruption year signals a dating problem in the source;
    // drop precision to the source's floor.
    if years_bp < 0 {
        precision = floor;
    }
    let precision = precision.clamp(floor, 1.0);

    DimensionScore::from_value(base * precision_modifier(precision))
}

/// Categorical-age path: era-class base score, low starting precision
/// nudged by the age prefix, final score capped.
fn score_categorical(
    class: AgeClass,
    prefix: Option<AgePrefix>,
    sample: &SampleEvidence,
    config: &TemporalConfig,
) -> DimensionScore {
    let base = match class {
        AgeClass::Holocene => 1.0,
        AgeClass::Pleistocene => 0.7,
        AgeClass::Neogene => 0.3,
        AgeClass::Older => 0.0,
    };

    let floor = config.precision_floor(sample.source_db);
    let mut precision = floor;
    match prefix {
        Some(AgePrefix::Late) => precision += 0.05,
        Some(AgePrefix::Early) => precision -= 0.05,
        None => {}
    }
    let precision = precision.clamp(floor, CATEGORICAL_PRECISION_CEILING);

    let score = (base * precision_modifier(precision)).clamp(0.0, 1.0);
    DimensionScore::from_value(score.min(CATEGORICAL_CAP))
}

/// Precision modifier: `1 + (precision − 0.5) × 0.3`, range ≈ [0.85, 1.15].
fn precision_modifier(precision: f64) -> f64 {
    1.0 + (precision - 0.5) * 0.3
}
