//! Spatial dimension scorer.
//!
//! Consumes a numeric great-circle distance computed by the caller; this
//! module does no geodesy itself.

use super::types::DimensionScore;

/// Exponential distance decay: `score = exp(-d / decay_km)`.
///
/// `score(0) = 1`, strictly decreasing, asymptotically approaches 0 but
/// never reaches it. A non-finite or negative distance marks the
/// dimension absent rather than propagating NaN.
pub fn score_spatial(distance_km: f64, decay_km: f64) -> DimensionScore {
    if !distance_km.is_finite() || distance_km < 0.0 || decay_km <= 0.0 {
        return DimensionScore::Absent;
    }
    DimensionScore::from_value((-distance_km / decay_km).exp())
}
