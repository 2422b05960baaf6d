//! Petrological dimension scorer.

use crate::normalize::tables::MatchTables;

use super::types::DimensionScore;

/// Candidate score for an exact canonical rock-type match.
pub const DIRECT_MATCH: f64 = 1.0;
/// Candidate score for a same-family match.
pub const FAMILY_MATCH: f64 = 0.7;

/// Score petrological compatibility.
///
/// Requires a normalized sample rock and at least one volcano
/// alternative; absent otherwise. Each alternative is scored (exact 1.0,
/// same family 0.7, else 0.0) and the maximum wins — a volcano listing
/// several compatible rock types is not penalized for ambiguity here;
/// ambiguity is captured by the score-gap mechanism downstream.
pub fn score_petrology(
    sample_rock: &str,
    volcano_rocks: &[String],
    tables: &MatchTables,
) -> DimensionScore {
    if sample_rock.is_empty() || volcano_rocks.is_empty() {
        return DimensionScore::Absent;
    }

    let best = volcano_rocks
        .iter()
        .map(|alt| candidate_score(sample_rock, alt, tables))
        .fold(0.0f64, f64::max);

    DimensionScore::from_value(best)
}

fn candidate_score(sample_rock: &str, volcano_rock: &str, tables: &MatchTables) -> f64 {
    if sample_rock == volcano_rock {
        DIRECT_MATCH
    } else if tables.same_family(sample_rock, volcano_rock) {
        FAMILY_MATCH
    } else {
        0.0
    }
}
